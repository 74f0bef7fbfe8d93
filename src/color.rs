pub const BYTES_PER_PIXEL: usize = 3;

/// 8-bit RGB pixel, no alpha channel
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pixel {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Pixel {
    pub const BLACK: Pixel = Pixel::new(0, 0, 0);

    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Pixel { red, green, blue }
    }

    pub fn to_bytes(self) -> [u8; BYTES_PER_PIXEL] {
        [self.red, self.green, self.blue]
    }
}

#[cfg(test)]
impl Pixel {
    pub fn red() -> Self {
        Pixel::new(255, 0, 0)
    }

    pub fn blue() -> Self {
        Pixel::new(0, 0, 255)
    }
}

impl From<[u8; BYTES_PER_PIXEL]> for Pixel {
    fn from(value: [u8; BYTES_PER_PIXEL]) -> Self {
        Pixel::new(value[0], value[1], value[2])
    }
}

impl From<&[u8; BYTES_PER_PIXEL]> for Pixel {
    fn from(value: &[u8; BYTES_PER_PIXEL]) -> Self {
        Pixel::from(*value)
    }
}
