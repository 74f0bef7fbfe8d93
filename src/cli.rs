use crate::Arguments;
use clap::{
    arg, crate_authors, crate_description, crate_name, crate_version, value_parser, Arg,
    ArgAction, ArgMatches, Command,
};
use std::ffi::OsString;
use std::path::PathBuf;

const DEFAULT_OUTPUT_FILE: &str = "out.png";

pub struct CLIParser {
    command: Command,
}

impl CLIParser {
    pub fn new() -> Self {
        let command = Self::create_base_command();
        let command = Self::register_arguments(command);
        CLIParser { command }
    }

    /// Exits the process on `--help`, `--version` and usage errors.
    pub fn parse<I, T>(&mut self, itr: I) -> Arguments
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self
            .command
            .try_get_matches_from_mut(itr)
            .unwrap_or_else(|e| e.exit());
        Self::extract_arguments(&matches)
    }

    fn register_arguments(command: Command) -> Command {
        let command = Self::register_input_files_argument(command);
        let command = Self::register_output_file_argument(command);
        let command = Self::register_gap_width_argument(command);
        Self::register_threads_argument(command)
    }

    fn register_input_files_argument(command: Command) -> Command {
        command.arg(Self::create_input_files_argument())
    }

    fn register_output_file_argument(command: Command) -> Command {
        command.arg(Self::create_output_file_argument())
    }

    fn register_gap_width_argument(command: Command) -> Command {
        command.arg(Self::create_gap_width_argument())
    }

    fn register_threads_argument(command: Command) -> Command {
        command.arg(Self::create_threads_argument())
    }

    fn create_base_command() -> Command {
        Command::new(crate_name!())
            .version(crate_version!())
            .author(crate_authors!())
            .about(crate_description!())
    }

    fn create_input_files_argument() -> Arg {
        Arg::new("input_files")
            .help("PNG files to stack, top to bottom")
            .value_parser(value_parser!(PathBuf))
            .action(ArgAction::Append)
            .num_args(1..)
            .required(true)
    }

    fn create_output_file_argument() -> Arg {
        arg!(output_file: -o --output <FILE> "Path to PNG output file")
            .default_value(DEFAULT_OUTPUT_FILE)
            .value_parser(value_parser!(PathBuf))
    }

    fn create_gap_width_argument() -> Arg {
        arg!(gap_width: -g --"gap-width" <N> "Number of blank rows between two images")
            .default_value("0")
            .value_parser(value_parser!(u32))
    }

    fn create_threads_argument() -> Arg {
        arg!(-t --threads <THREADS> "Number of threads used to decode the input files")
            .default_value("1")
            .required(false)
            .value_parser(value_parser!(u32).range(1..))
    }

    fn extract_arguments(matches: &ArgMatches) -> Arguments {
        Arguments {
            input_files: Self::extract_input_files_argument(matches),
            output_file: Self::extract_output_file_argument(matches),
            gap_width: Self::extract_gap_width_argument(matches),
            number_of_threads: Self::extract_threads_argument(matches),
        }
    }

    fn extract_input_files_argument(matches: &ArgMatches) -> Vec<PathBuf> {
        matches
            .get_many::<PathBuf>("input_files")
            .expect("Required argument input_files not provided")
            .cloned()
            .collect()
    }

    fn extract_output_file_argument(matches: &ArgMatches) -> PathBuf {
        matches
            .get_one::<PathBuf>("output_file")
            .expect("Output file must be provided, but was unset.")
            .clone()
    }

    fn extract_gap_width_argument(matches: &ArgMatches) -> u32 {
        matches
            .get_one::<u32>("gap_width")
            .expect("Gap width must be provided, but was unset.")
            .to_owned()
    }

    fn extract_threads_argument(matches: &ArgMatches) -> usize {
        matches
            .get_one::<u32>("threads")
            .expect("Required argument threads not provided")
            .to_owned() as usize
    }
}

impl Default for CLIParser {
    fn default() -> Self {
        Self::new()
    }
}
