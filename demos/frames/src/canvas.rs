use image::{Rgba, RgbaImage};
use slingshot::{render::Color, Canvas};

/// A [`Canvas`] drawing into an in-memory RGBA image.
///
/// Paths are only made of full circles, which are filled pixel by pixel: a pixel is covered when
/// its centre lies inside the circle. Fills are blended over the existing pixels.
pub struct RasterCanvas {
    image: RgbaImage,
    background: Rgba<u8>,
    fill: Color,
    path: Vec<(f64, f64, f64)>,
}

impl RasterCanvas {
    /// Creates a new canvas of the given size, cleared to `background`.
    pub fn new(width: u32, height: u32, background: Rgba<u8>) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, background),
            background,
            fill: Color::default(),
            path: Vec::new(),
        }
    }

    /// Returns the image drawn so far.
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64) {
        if radius <= 0.0 || !(cx.is_finite() && cy.is_finite() && radius.is_finite()) {
            return;
        }

        let (width, height) = self.image.dimensions();
        let x_range = pixels(cx - radius, cx + radius, width);
        let y_range = pixels(cy - radius, cy + radius, height);
        let source = [self.fill.r, self.fill.g, self.fill.b, self.fill.a];

        for y in y_range {
            for x in x_range.clone() {
                let dx = x as f64 + 0.5 - cx;
                let dy = y as f64 + 0.5 - cy;

                if dx * dx + dy * dy <= radius * radius {
                    let pixel = self.image.get_pixel_mut(x, y);
                    *pixel = blend(source, pixel.0);
                }
            }
        }
    }
}

/// Pixel indices in `0..len` touched by the interval `[start, end]`.
fn pixels(start: f64, end: f64, len: u32) -> std::ops::Range<u32> {
    let start = start.floor().clamp(0.0, len as f64) as u32;
    let end = end.ceil().clamp(0.0, len as f64) as u32;

    start..end
}

/// Source-over compositing of two non-premultiplied colours.
fn blend(source: [u8; 4], destination: [u8; 4]) -> Rgba<u8> {
    let sa = source[3] as f64 / 255.0;
    let da = destination[3] as f64 / 255.0;
    let out_a = sa + da * (1.0 - sa);

    if out_a <= 0.0 {
        return Rgba([0, 0, 0, 0]);
    }

    let channel = |i: usize| {
        let s = source[i] as f64;
        let d = destination[i] as f64;

        ((s * sa + d * da * (1.0 - sa)) / out_a).round() as u8
    };

    Rgba([
        channel(0),
        channel(1),
        channel(2),
        (out_a * 255.0).round() as u8,
    ])
}

impl Canvas for RasterCanvas {
    fn width(&self) -> f64 {
        self.image.width() as f64
    }

    fn height(&self) -> f64 {
        self.image.height() as f64
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let (w, h) = self.image.dimensions();
        let xs = pixels(x, x + width, w);
        let ys = pixels(y, y + height, h);

        for py in ys {
            for px in xs.clone() {
                self.image.put_pixel(px, py, self.background);
            }
        }
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill = color;
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, _: f64, _: f64, _: bool) {
        self.path.push((x, y, radius));
    }

    fn fill(&mut self) {
        let path = std::mem::take(&mut self.path);
        for &(x, y, radius) in &path {
            self.fill_circle(x, y, radius);
        }
        self.path = path;
    }

    fn close_path(&mut self) {}
}
