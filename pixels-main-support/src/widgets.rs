use crate::font;
use crate::frame::Frame;
use flood_grid::Rect;

const BUTTON_COLOR: [u8; 4] = [0x18, 0x18, 0x1b, 0xff];
const BUTTON_DISABLED_COLOR: [u8; 4] = [0x71, 0x71, 0x7a, 0xff];
const LABEL_COLOR: [u8; 4] = [0xfa, 0xfa, 0xfa, 0xff];
const TEXT_COLOR: [u8; 4] = [0, 0, 0, 0xff];
const TRACK_COLOR: [u8; 4] = [0xe4, 0xe4, 0xe7, 0xff];
const TRACK_FILL_COLOR: [u8; 4] = [0x18, 0x18, 0x1b, 0xff];
const KNOB_COLOR: [u8; 4] = [0xff, 0xff, 0xff, 0xff];
const TEXT_SCALE: u32 = 2;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Debug)]
pub struct Button {
    pub rect: Rect,
    label: String,
}

impl Button {
    pub fn new(label: &str) -> Self {
        Self {
            rect: Rect::default(),
            label: label.to_string(),
        }
    }

    pub fn contains(&self, point: Point) -> bool {
        self.rect.contains(point.x, point.y)
    }

    pub fn draw(&self, frame: &mut Frame<'_>, enabled: bool) {
        let color = if enabled {
            BUTTON_COLOR
        } else {
            BUTTON_DISABLED_COLOR
        };
        frame.fill_rect(self.rect, color);
        draw_centered_text(frame, self.rect, &self.label, LABEL_COLOR);
    }
}

/// Horizontal integer slider. Pressing anywhere on it jumps the value there and starts a drag.
#[derive(Clone, Debug)]
pub struct Slider {
    pub rect: Rect,
    label: String,
    min: u32,
    max: u32,
    value: u32,
    dragging: bool,
}

impl Slider {
    pub fn new(label: &str, min: u32, max: u32, value: u32) -> Self {
        assert!(min < max);
        Self {
            rect: Rect::default(),
            label: label.to_string(),
            min,
            max,
            value: value.clamp(min, max),
            dragging: false,
        }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    /// Returns true if the slider took the press.
    pub fn press(&mut self, point: Point) -> bool {
        if !self.track().contains(point.x, point.y) {
            return false;
        }
        self.dragging = true;
        self.set_value(self.value_at(point.x));
        true
    }

    /// Returns true if dragging changed the value.
    pub fn drag(&mut self, point: Point) -> bool {
        self.dragging && self.set_value(self.value_at(point.x))
    }

    pub fn release(&mut self) {
        self.dragging = false;
    }

    fn set_value(&mut self, value: u32) -> bool {
        let value = value.clamp(self.min, self.max);
        let changed = value != self.value;
        self.value = value;
        changed
    }

    fn value_at(&self, x: f32) -> u32 {
        let track = self.track();
        if track.width <= 0.0 {
            return self.value;
        }
        let fraction = ((x - track.x) / track.width).clamp(0.0, 1.0);
        self.min + (fraction * (self.max - self.min) as f32).round() as u32
    }

    fn label_width(&self) -> f32 {
        font::text_width(&self.label, TEXT_SCALE) as f32 + self.rect.height
    }

    fn value_width(&self) -> f32 {
        font::text_width(&self.max.to_string(), TEXT_SCALE) as f32 + self.rect.height
    }

    fn track(&self) -> Rect {
        let left = self.rect.x + self.label_width();
        let width = (self.rect.width - self.label_width() - self.value_width()).max(0.0);
        Rect::new(left, self.rect.y, width, self.rect.height)
    }

    fn knob_rect(&self) -> Rect {
        let track = self.track();
        let fraction = (self.value - self.min) as f32 / (self.max - self.min) as f32;
        let size = track.height;
        Rect::new(track.x + fraction * track.width - size / 2.0, track.y, size, size)
    }

    pub fn draw(&self, frame: &mut Frame<'_>) {
        let label_box = Rect::new(self.rect.x, self.rect.y, self.label_width(), self.rect.height);
        draw_centered_text(frame, label_box, &self.label, TEXT_COLOR);

        let track = self.track();
        let bar_height = (track.height / 4.0).max(2.0);
        let bar = Rect::new(
            track.x,
            track.y + (track.height - bar_height) / 2.0,
            track.width,
            bar_height,
        );
        frame.fill_rect(bar, TRACK_COLOR);
        let knob = self.knob_rect();
        let (knob_center, _) = knob.center();
        frame.fill_rect(Rect::new(bar.x, bar.y, knob_center - bar.x, bar.height), TRACK_FILL_COLOR);
        frame.fill_rect(knob, KNOB_COLOR);
        frame.stroke_rect(knob, TRACK_FILL_COLOR);

        let value_box = Rect::new(track.right(), self.rect.y, self.value_width(), self.rect.height);
        draw_centered_text(frame, value_box, &self.value.to_string(), TEXT_COLOR);
    }
}

fn draw_centered_text(frame: &mut Frame<'_>, rect: Rect, text: &str, color: [u8; 4]) {
    let (center_x, center_y) = rect.center();
    let width = font::text_width(text, TEXT_SCALE) as f32;
    let height = font::text_height(TEXT_SCALE) as f32;
    frame.draw_text(
        center_x - width / 2.0,
        center_y - height / 2.0,
        text,
        TEXT_SCALE,
        color,
    );
}
