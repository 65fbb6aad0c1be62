use crate::layout::Layout;
use flood_grid::{
    FloodFill, GridSize, Loc, MAX_GRID_DIMENSION, MIN_GRID_DIMENSION, Random, Rect, Step,
    VisitedStore, cell_rect,
};
use log::info;
use pixels_main_support::{Button, Frame, Point, PointerEvent, Scene, Slider, font};
use std::collections::HashMap;
use std::time::{Duration, Instant};
use winit::dpi::PhysicalSize;
use winit::keyboard::KeyCode;

const BACKGROUND_COLOR: [u8; 4] = [0x6b, 0x72, 0x80, 0xff];
const CELL_COLOR: [u8; 4] = [0xff, 0xff, 0xff, 0x99];
const LINE_COLOR: [u8; 4] = [0, 0, 0, 0xff];

#[derive(Clone, Debug)]
pub struct SceneConfig {
    pub grid_size: GridSize,
    pub step_delay: Duration,
    pub seed: Option<u64>,
}

#[derive(Clone, Copy, Debug)]
struct CellDrag {
    loc: Loc,
    last: Point,
}

#[derive(Debug)]
pub struct FloodFillScene {
    layout: Layout,
    step_delay: Duration,
    rand: Random,
    fill: Option<FloodFill>,
    visited: VisitedStore,
    overlay_shown: bool,
    next_step: Option<Instant>,
    start_button: Button,
    columns: Slider,
    rows: Slider,
    drag_offsets: HashMap<Loc, (f32, f32)>,
    drag: Option<CellDrag>,
}

impl FloodFillScene {
    pub fn new(window_size: PhysicalSize<u32>, config: &SceneConfig) -> Self {
        let rand = config.seed.map_or_else(Random::new, Random::from_seed);
        let mut result = Self {
            layout: Layout::new(window_size),
            step_delay: config.step_delay,
            rand,
            fill: None,
            visited: VisitedStore::new(),
            overlay_shown: false,
            next_step: None,
            start_button: Button::new("Start"),
            columns: Self::dimension_slider("Columns", config.grid_size.width),
            rows: Self::dimension_slider("Rows", config.grid_size.height),
            drag_offsets: HashMap::new(),
            drag: None,
        };
        result.place_controls();
        result
    }

    fn dimension_slider(label: &str, value: u32) -> Slider {
        Slider::new(label, MIN_GRID_DIMENSION, MAX_GRID_DIMENSION, value)
    }

    fn place_controls(&mut self) {
        self.start_button.rect = self.layout.start_button;
        self.columns.rect = self.layout.columns_slider;
        self.rows.rect = self.layout.rows_slider;
    }

    /// Grid dimensions currently chosen on the sliders.
    pub fn grid_size(&self) -> GridSize {
        GridSize::clamped(self.columns.value(), self.rows.value())
    }

    /// The most recently published snapshot of the running or last traversal.
    pub fn visited(&self) -> &VisitedStore {
        &self.visited
    }

    /// Start is offered unless some but not all cells of the current grid are visited.
    ///
    /// This is advisory: it is computed from the slider dimensions, which may differ from the
    /// traversal's own. [`start`](Self::start) therefore cancels any traversal still running.
    pub fn start_enabled(&self) -> bool {
        let visited = self.visited.len();
        !(visited > 0 && visited < self.grid_size().num_cells())
    }

    pub fn start(&mut self, now: Instant) {
        if let Some(fill) = self.fill.as_mut() {
            fill.cancel();
        }
        let grid_size = self.grid_size();
        info!(
            "Starting flood fill on a {}x{} grid",
            grid_size.width, grid_size.height
        );
        let fill = FloodFill::start(Loc::ORIGIN, grid_size, &mut self.rand);
        self.visited = fill.snapshot();
        self.fill = Some(fill);
        self.overlay_shown = true;
        self.drag_offsets.clear();
        self.drag = None;
        self.next_step = Some(now + self.step_delay);
    }

    fn advance(&mut self, now: Instant) -> bool {
        let Some(fill) = self.fill.as_mut() else {
            self.next_step = None;
            return false;
        };
        let step = fill.step(&mut self.rand);
        self.visited = fill.snapshot();

        if fill.is_finished() {
            self.next_step = None;
            info!(
                "Flood fill finished with {} of {} cells visited",
                self.visited.len(),
                fill.grid_size().num_cells()
            );
        } else {
            self.next_step = Some(now + self.step_delay);
        }
        matches!(step, Step::Visited(_))
    }

    fn on_grid_resized(&self) {
        let grid_size = self.grid_size();
        info!("Grid is now {}x{}", grid_size.width, grid_size.height);
    }

    fn screen_rect(&self, loc: Loc, grid_size: GridSize) -> Rect {
        let canvas = self.layout.canvas;
        cell_rect(loc, canvas.width, canvas.height, grid_size).translated(canvas.x, canvas.y)
    }

    fn overlay_rect(&self, loc: Loc, grid_size: GridSize) -> Rect {
        let (dx, dy) = self.drag_offsets.get(&loc).copied().unwrap_or_default();
        self.screen_rect(loc, grid_size).translated(dx, dy)
    }

    fn visited_cell_at(&self, point: Point) -> Option<Loc> {
        if !self.overlay_shown || !self.layout.canvas.contains(point.x, point.y) {
            return None;
        }
        let grid_size = self.grid_size();
        self.visited
            .iter()
            .rev()
            .map(|record| record.loc())
            .find(|&loc| self.overlay_rect(loc, grid_size).contains(point.x, point.y))
    }

    fn on_press(&mut self, point: Point) -> bool {
        if self.start_button.contains(point) {
            if self.start_enabled() {
                self.start(Instant::now());
                return true;
            }
            return false;
        }
        if self.columns.press(point) || self.rows.press(point) {
            self.on_grid_resized();
            return true;
        }
        if let Some(loc) = self.visited_cell_at(point) {
            self.drag = Some(CellDrag { loc, last: point });
        }
        false
    }

    fn on_move(&mut self, point: Point) -> bool {
        if self.columns.drag(point) || self.rows.drag(point) {
            self.on_grid_resized();
            return true;
        }
        let Some(drag) = self.drag.as_mut() else {
            return false;
        };
        let offset = self.drag_offsets.entry(drag.loc).or_default();
        offset.0 += point.x - drag.last.x;
        offset.1 += point.y - drag.last.y;
        drag.last = point;
        true
    }

    fn on_release(&mut self) -> bool {
        self.columns.release();
        self.rows.release();
        self.drag = None;
        false
    }

    fn draw_grid(&self, frame: &mut Frame<'_>, grid_size: GridSize) {
        for loc in grid_size.locs() {
            let rect = self.screen_rect(loc, grid_size);
            frame.fill_rect(rect, CELL_COLOR);
            frame.stroke_rect(rect, LINE_COLOR);

            let label = loc.label();
            if let Some((x, y, scale)) = label_placement(rect, &label) {
                frame.draw_text(x, y, &label, scale, LINE_COLOR);
            }
        }
    }

    fn draw_visited(&self, frame: &mut Frame<'_>, grid_size: GridSize) {
        for record in self.visited.iter() {
            let rect = self.overlay_rect(record.loc(), grid_size);
            frame.fill_rect(rect, record.color.color_rgba());
            frame.stroke_rect(rect, LINE_COLOR);
        }
    }
}

/// Where to draw `label` centered in `rect` at roughly `rect.width / 8` tall, or `None` when
/// even the smallest font would spill over the cell's outline.
fn label_placement(rect: Rect, label: &str) -> Option<(f32, f32, u32)> {
    let font_size = rect.width / 8.0;
    let scale = (font_size / font::GLYPH_HEIGHT as f32).round().max(1.0) as u32;
    let width = font::text_width(label, scale) as f32;
    let height = font::text_height(scale) as f32;
    if width > rect.width - 2.0 || height > rect.height - 2.0 {
        return None;
    }
    let (center_x, center_y) = rect.center();
    Some((center_x - width / 2.0, center_y - height / 2.0, scale))
}

impl Scene for FloodFillScene {
    fn resize(&mut self, window_size: PhysicalSize<u32>) {
        self.layout = Layout::new(window_size);
        self.place_controls();
    }

    fn draw(&self, frame: &mut Frame<'_>) {
        frame.clear(BACKGROUND_COLOR);

        let grid_size = self.grid_size();
        frame.set_clip(Some(self.layout.canvas));
        self.draw_grid(frame, grid_size);
        if self.overlay_shown {
            self.draw_visited(frame, grid_size);
        }
        frame.set_clip(None);

        self.start_button.draw(frame, self.start_enabled());
        self.columns.draw(frame);
        self.rows.draw(frame);
    }

    fn next_wakeup(&self) -> Option<Instant> {
        self.next_step
    }

    fn on_time_step(&mut self, now: Instant) -> bool {
        match self.next_step {
            Some(due) if now >= due => self.advance(now),
            _ => false,
        }
    }

    fn on_pointer(&mut self, event: PointerEvent) -> bool {
        match event {
            PointerEvent::Pressed(point) => self.on_press(point),
            PointerEvent::Moved(point) => self.on_move(point),
            PointerEvent::Released(_) => self.on_release(),
        }
    }

    fn on_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Enter | KeyCode::NumpadEnter | KeyCode::Space if self.start_enabled() => {
                self.start(Instant::now());
                true
            }
            _ => false,
        }
    }
}
