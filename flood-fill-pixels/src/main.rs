#![deny(clippy::all)]
#![forbid(unsafe_code)]

mod layout;
mod scene;

use clap::Parser;
use flood_grid::{
    DEFAULT_GRID_DIMENSION, DEFAULT_STEP_DELAY, GridSize, MAX_GRID_DIMENSION, MIN_GRID_DIMENSION,
};
use pixels_main_support::{AppError, WindowSettings, animate};
use scene::{FloodFillScene, SceneConfig};
use std::time::Duration;
use winit::dpi::LogicalSize;

#[derive(Debug, Parser)]
#[command(author, version, about = "Animated depth-first flood fill over a grid of cells")]
struct Cli {
    /// Initial number of grid columns
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_GRID_DIMENSION,
        value_parser = clap::value_parser!(u32).range(MIN_GRID_DIMENSION as i64..=MAX_GRID_DIMENSION as i64)
    )]
    columns: u32,

    /// Initial number of grid rows
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_GRID_DIMENSION,
        value_parser = clap::value_parser!(u32).range(MIN_GRID_DIMENSION as i64..=MAX_GRID_DIMENSION as i64)
    )]
    rows: u32,

    /// Pause before each flood fill step, in milliseconds
    #[arg(short, long, default_value_t = DEFAULT_STEP_DELAY.as_millis() as u64)]
    delay_ms: u64,

    /// Seed for reproducible cell colors
    #[arg(short, long)]
    seed: Option<u64>,

    /// Initial window width in logical pixels
    #[arg(long, default_value_t = 1200)]
    width: u32,

    /// Initial window height in logical pixels
    #[arg(long, default_value_t = 900)]
    height: u32,
}

impl Cli {
    fn scene_config(&self) -> SceneConfig {
        SceneConfig {
            grid_size: GridSize::clamped(self.columns, self.rows),
            step_delay: Duration::from_millis(self.delay_ms),
            seed: self.seed,
        }
    }

    fn window_settings(&self) -> WindowSettings {
        WindowSettings {
            title: "Flood Fill".to_string(),
            inner_size: LogicalSize::new(self.width as f64, self.height as f64),
        }
    }
}

fn main() -> Result<(), AppError> {
    env_logger::init();
    let cli = Cli::parse();
    let config = cli.scene_config();
    animate(cli.window_settings(), |window_size| {
        FloodFillScene::new(window_size, &config)
    })
}
