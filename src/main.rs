use std::{env::args_os, process::ExitCode};

use png_stack::{stack_png_files, CLIParser};

fn main() -> ExitCode {
    let mut cli_parser = CLIParser::default();
    let arguments = cli_parser.parse(args_os());
    match stack_png_files(&arguments) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Stacking failed because of: {}", e);
            ExitCode::FAILURE
        }
    }
}
