use crate::font;
use flood_grid::Rect;
use rayon::prelude::*;

/// RGBA frame buffer with drawing primitives. Everything drawn is clipped to the clip box.
pub struct Frame<'a> {
    pixels: &'a mut [u8],
    width: u32,
    height: u32,
    clip: PixelBox,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct PixelBox {
    left: u32,
    top: u32,
    right: u32,
    bottom: u32,
}

impl PixelBox {
    fn intersect(&self, other: PixelBox) -> PixelBox {
        let left = self.left.max(other.left);
        let top = self.top.max(other.top);
        PixelBox {
            left,
            top,
            right: self.right.min(other.right).max(left),
            bottom: self.bottom.min(other.bottom).max(top),
        }
    }

    fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }
}

impl<'a> Frame<'a> {
    pub fn new(pixels: &'a mut [u8], width: u32, height: u32) -> Self {
        debug_assert_eq!(pixels.len(), 4 * width as usize * height as usize);
        Self {
            pixels,
            width,
            height,
            clip: Self::full_box(width, height),
        }
    }

    fn full_box(width: u32, height: u32) -> PixelBox {
        PixelBox {
            left: 0,
            top: 0,
            right: width,
            bottom: height,
        }
    }

    pub fn clear(&mut self, color: [u8; 4]) {
        self.pixels
            .par_chunks_exact_mut(4)
            .for_each(|pixel| pixel.copy_from_slice(&color));
    }

    pub fn set_clip(&mut self, clip: Option<Rect>) {
        let full = Self::full_box(self.width, self.height);
        self.clip = clip.map_or(full, |rect| self.pixel_box(rect, full));
    }

    fn pixel_box(&self, rect: Rect, bounds: PixelBox) -> PixelBox {
        let to_pixel = |value: f32, max: u32| value.round().clamp(0.0, max as f32) as u32;
        PixelBox {
            left: to_pixel(rect.x, self.width),
            top: to_pixel(rect.y, self.height),
            right: to_pixel(rect.right(), self.width),
            bottom: to_pixel(rect.bottom(), self.height),
        }
        .intersect(bounds)
    }

    pub fn fill_rect(&mut self, rect: Rect, color: [u8; 4]) {
        let area = self.pixel_box(rect, self.clip);
        for y in area.top..area.bottom {
            for x in area.left..area.right {
                self.blend_pixel(x, y, color);
            }
        }
    }

    /// One-pixel outline just inside `rect`.
    pub fn stroke_rect(&mut self, rect: Rect, color: [u8; 4]) {
        let outline = self.pixel_box(rect, Self::full_box(self.width, self.height));
        if outline.left == outline.right || outline.top == outline.bottom {
            return;
        }
        for x in outline.left..outline.right {
            self.put_pixel(x, outline.top, color);
            self.put_pixel(x, outline.bottom - 1, color);
        }
        for y in outline.top..outline.bottom {
            self.put_pixel(outline.left, y, color);
            self.put_pixel(outline.right - 1, y, color);
        }
    }

    /// Draws `text` with its top-left corner at (`x`, `y`), each font dot `scale` pixels wide.
    pub fn draw_text(&mut self, x: f32, y: f32, text: &str, scale: u32, color: [u8; 4]) {
        let (left, top) = (x.round() as i64, y.round() as i64);
        for (dx, dy) in font::lit_pixels(text, scale) {
            let (px, py) = (left + dx as i64, top + dy as i64);
            if px >= 0 && py >= 0 {
                self.put_pixel(px as u32, py as u32, color);
            }
        }
    }

    fn put_pixel(&mut self, x: u32, y: u32, color: [u8; 4]) {
        if self.clip.contains(x, y) {
            self.blend_pixel(x, y, color);
        }
    }

    fn blend_pixel(&mut self, x: u32, y: u32, color: [u8; 4]) {
        let index = 4 * (y as usize * self.width as usize + x as usize);
        let pixel = &mut self.pixels[index..index + 4];
        let below = [pixel[0], pixel[1], pixel[2], pixel[3]];
        pixel.copy_from_slice(&alpha_blend_with_background(color, below));
    }

    #[cfg(test)]
    fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let index = 4 * (y as usize * self.width as usize + x as usize);
        let pixel = &self.pixels[index..index + 4];
        [pixel[0], pixel[1], pixel[2], pixel[3]]
    }
}

// Alpha compositing over an opaque background, from https://en.wikipedia.org/wiki/Alpha_compositing
fn alpha_blend_with_background(above: [u8; 4], below: [u8; 4]) -> [u8; 4] {
    if above[3] == 0xff {
        return above;
    }
    if above[3] == 0x00 {
        return below;
    }

    let above = color_as_fractions(above);
    let below = color_as_fractions(below);

    let above_alpha = above[3];

    let mut result: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    for (i, channel) in result.iter_mut().take(3).enumerate() {
        *channel = above[i] * above_alpha + below[i] * (1.0 - above_alpha);
    }
    color_as_bytes(result)
}

fn color_as_fractions(color: [u8; 4]) -> [f32; 4] {
    color.map(|component| component as f32 / 0xff as f32)
}

fn color_as_bytes(color: [f32; 4]) -> [u8; 4] {
    color.map(|component| (component * 0xff as f32).round() as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: [u8; 4] = [0, 0, 0, 0xff];
    const WHITE: [u8; 4] = [0xff, 0xff, 0xff, 0xff];

    fn buffer(width: u32, height: u32) -> Vec<u8> {
        vec![0; 4 * width as usize * height as usize]
    }

    #[test]
    fn blend_keeps_opaque_and_transparent_colors() {
        assert_eq!(alpha_blend_with_background(WHITE, BLACK), WHITE);
        assert_eq!(alpha_blend_with_background([9, 9, 9, 0], BLACK), BLACK);
    }

    #[test]
    fn blend_mixes_translucent_white() {
        let blended = alpha_blend_with_background([0xff, 0xff, 0xff, 0x99], BLACK);
        assert_eq!(blended, [0x99, 0x99, 0x99, 0xff]);
    }

    #[test]
    fn fill_rect_is_clipped_to_frame() {
        let mut pixels = buffer(4, 4);
        let mut frame = Frame::new(&mut pixels, 4, 4);
        frame.clear(BLACK);
        frame.fill_rect(Rect::new(2.0, 2.0, 10.0, 10.0), WHITE);
        assert_eq!(frame.pixel(1, 1), BLACK);
        assert_eq!(frame.pixel(2, 2), WHITE);
        assert_eq!(frame.pixel(3, 3), WHITE);
    }

    #[test]
    fn clip_box_limits_drawing() {
        let mut pixels = buffer(6, 6);
        let mut frame = Frame::new(&mut pixels, 6, 6);
        frame.clear(BLACK);
        frame.set_clip(Some(Rect::new(1.0, 1.0, 2.0, 2.0)));
        frame.fill_rect(Rect::new(0.0, 0.0, 6.0, 6.0), WHITE);
        assert_eq!(frame.pixel(0, 0), BLACK);
        assert_eq!(frame.pixel(1, 1), WHITE);
        assert_eq!(frame.pixel(2, 2), WHITE);
        assert_eq!(frame.pixel(3, 3), BLACK);

        frame.set_clip(None);
        frame.fill_rect(Rect::new(5.0, 5.0, 1.0, 1.0), WHITE);
        assert_eq!(frame.pixel(5, 5), WHITE);
    }

    #[test]
    fn stroke_rect_draws_only_the_border() {
        let mut pixels = buffer(5, 5);
        let mut frame = Frame::new(&mut pixels, 5, 5);
        frame.clear(WHITE);
        frame.stroke_rect(Rect::new(0.0, 0.0, 5.0, 5.0), BLACK);
        assert_eq!(frame.pixel(0, 2), BLACK);
        assert_eq!(frame.pixel(4, 4), BLACK);
        assert_eq!(frame.pixel(2, 0), BLACK);
        assert_eq!(frame.pixel(2, 2), WHITE);
    }

    #[test]
    fn text_off_the_left_edge_is_dropped() {
        let mut pixels = buffer(8, 8);
        let mut frame = Frame::new(&mut pixels, 8, 8);
        frame.clear(WHITE);
        frame.draw_text(-3.0, 0.0, "-", 1, BLACK);
        assert_eq!(frame.pixel(0, 3), BLACK);
        assert_eq!(frame.pixel(1, 3), BLACK);
        assert_eq!(frame.pixel(2, 3), WHITE);
    }
}
