use std::fmt;

pub const MIN_GRID_DIMENSION: u32 = 10;
pub const MAX_GRID_DIMENSION: u32 = 100;
pub const DEFAULT_GRID_DIMENSION: u32 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Loc {
    pub x: u32,
    pub y: u32,
}

impl Loc {
    pub const ORIGIN: Loc = Loc { x: 0, y: 0 };

    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// The adjacent cell in `direction`, or `None` if that would need a negative coordinate.
    pub fn neighbor(&self, direction: Direction) -> Option<Loc> {
        match direction {
            Direction::East => self.x.checked_add(1).map(|x| Loc::new(x, self.y)),
            Direction::West => self.x.checked_sub(1).map(|x| Loc::new(x, self.y)),
            Direction::North => self.y.checked_sub(1).map(|y| Loc::new(self.x, y)),
            Direction::South => self.y.checked_add(1).map(|y| Loc::new(self.x, y)),
        }
    }

    /// Text drawn in the cell: both coordinates run together, so (3, 7) reads "37".
    pub fn label(&self) -> String {
        format!("{}{}", self.x, self.y)
    }
}

impl fmt::Display for Loc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.x, self.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    East,
    West,
    North,
    South,
}

impl Direction {
    pub const VISIT_ORDER: [Direction; 4] = [
        Direction::East,
        Direction::West,
        Direction::North,
        Direction::South,
    ];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridSize {
    pub width: u32,
    pub height: u32,
}

impl GridSize {
    pub fn new(width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0);
        Self { width, height }
    }

    pub fn clamped(width: u32, height: u32) -> Self {
        Self::new(
            width.clamp(MIN_GRID_DIMENSION, MAX_GRID_DIMENSION),
            height.clamp(MIN_GRID_DIMENSION, MAX_GRID_DIMENSION),
        )
    }

    pub fn num_cells(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn contains(&self, loc: Loc) -> bool {
        loc.x < self.width && loc.y < self.height
    }

    pub fn locs(&self) -> impl Iterator<Item = Loc> + use<> {
        let height = self.height;
        (0..self.width).flat_map(move |x| (0..height).map(move |y| Loc::new(x, y)))
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self::new(DEFAULT_GRID_DIMENSION, DEFAULT_GRID_DIMENSION)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    pub fn translated(&self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }
}

/// Screen rectangle of `loc` on a canvas divided evenly into `grid_size` cells.
pub fn cell_rect(loc: Loc, canvas_width: f32, canvas_height: f32, grid_size: GridSize) -> Rect {
    let width = canvas_width / grid_size.width as f32;
    let height = canvas_height / grid_size.height as f32;
    Rect::new(width * loc.x as f32, height * loc.y as f32, width, height)
}
