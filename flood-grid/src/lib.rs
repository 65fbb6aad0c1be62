#![deny(clippy::all)]
#![forbid(unsafe_code)]

mod flood_fill;
mod grid;
mod random;
mod visited;

pub use flood_fill::{DEFAULT_STEP_DELAY, FloodFill, Step};
pub use grid::{
    DEFAULT_GRID_DIMENSION, Direction, GridSize, Loc, MAX_GRID_DIMENSION, MIN_GRID_DIMENSION,
    Rect, cell_rect,
};
pub use random::{DisplayColor, Random};
pub use visited::{VisitRecord, VisitedStore};
