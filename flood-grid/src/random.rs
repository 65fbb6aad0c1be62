use rand::prelude::*;
use rand::rngs::SmallRng;
use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DisplayColor {
    pub rgb: [u8; 3],
}

impl DisplayColor {
    pub fn new(rgb: [u8; 3]) -> Self {
        Self { rgb }
    }

    pub fn color_rgba(&self) -> [u8; 4] {
        let [red, green, blue] = self.rgb;
        [red, green, blue, 0xff]
    }
}

impl fmt::Display for DisplayColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [red, green, blue] = self.rgb;
        write!(f, "#{red:02x}{green:02x}{blue:02x}")
    }
}

#[derive(Debug)]
pub struct Random {
    rng: SmallRng,
}

impl Random {
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_rng(&mut rand::rng()),
        }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn next_color(&mut self) -> DisplayColor {
        DisplayColor::new(self.rng.random())
    }
}

impl Default for Random {
    fn default() -> Self {
        Self::new()
    }
}
