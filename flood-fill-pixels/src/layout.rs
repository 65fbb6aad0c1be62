use flood_grid::Rect;
use winit::dpi::PhysicalSize;

/// The window is this many times the canvas in each direction.
pub const WINDOW_TO_CANVAS: f32 = 1.5;

const BUTTON_WIDTH: f32 = 96.0;
const BUTTON_HEIGHT: f32 = 36.0;
const SLIDER_HEIGHT: f32 = 20.0;
const GAP: f32 = 16.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub canvas: Rect,
    pub start_button: Rect,
    pub columns_slider: Rect,
    pub rows_slider: Rect,
}

impl Layout {
    /// Canvas, Start button and the slider row stacked in a column centered in the window.
    pub fn new(window_size: PhysicalSize<u32>) -> Self {
        let window_width = window_size.width as f32;
        let window_height = window_size.height as f32;
        let canvas_width = window_width / WINDOW_TO_CANVAS;
        let canvas_height = window_height / WINDOW_TO_CANVAS;

        let content_height = canvas_height + GAP + BUTTON_HEIGHT + GAP + SLIDER_HEIGHT;
        let top = ((window_height - content_height) / 2.0).max(0.0);
        let canvas = Rect::new(
            (window_width - canvas_width) / 2.0,
            top,
            canvas_width,
            canvas_height,
        );

        let start_button = Rect::new(
            (window_width - BUTTON_WIDTH) / 2.0,
            canvas.bottom() + GAP,
            BUTTON_WIDTH,
            BUTTON_HEIGHT,
        );

        let slider_top = start_button.bottom() + GAP;
        let slider_width = ((window_width - 3.0 * GAP) / 2.0).max(0.0);
        let columns_slider = Rect::new(GAP, slider_top, slider_width, SLIDER_HEIGHT);
        let rows_slider = Rect::new(
            columns_slider.right() + GAP,
            slider_top,
            slider_width,
            SLIDER_HEIGHT,
        );

        Self {
            canvas,
            start_button,
            columns_slider,
            rows_slider,
        }
    }
}
