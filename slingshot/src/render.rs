use crate::{gesture::Preview, Particle, Vector};
use serde::{Deserialize, Serialize};
use std::{f64::consts::TAU, fmt};

/// A 2D immediate-mode drawing surface, modelled after the HTML canvas 2D context.
///
/// Only full circles are drawn by this crate: a path is made of one [`Canvas::arc`] going from
/// `0` to `2π`.
pub trait Canvas {
    /// Width of the surface in pixels.
    fn width(&self) -> f64;

    /// Height of the surface in pixels.
    fn height(&self) -> f64;

    /// Erases the given rectangle.
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    /// Sets the colour used by subsequent calls to [`Canvas::fill`].
    fn set_fill_color(&mut self, color: Color);

    /// Starts a new path, discarding the current one.
    fn begin_path(&mut self);

    /// Adds a circular arc centred on `(x, y)` to the current path.
    fn arc(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        counterclockwise: bool,
    );

    /// Fills the current path with the current fill colour.
    fn fill(&mut self);

    /// Closes the current path.
    fn close_path(&mut self);
}

/// An 8-bit RGBA colour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Creates a new colour.
    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Returns the colour as a CSS hex string, `#rrggbbaa`.
    #[inline]
    pub fn to_hex(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

/// Maps the radius of a body to a colour.
///
/// Small bodies get the `low` colour and the colour moves linearly towards `high` as the radius
/// grows to `cap`. Bodies larger than `cap` get `high`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorRamp {
    /// RGB colour of the smallest bodies.
    pub low: [u8; 3],
    /// RGB colour of the bodies of radius `cap` and larger.
    pub high: [u8; 3],
    /// Radius at which the ramp reaches `high`.
    pub cap: f64,
    /// Opacity of every body.
    pub alpha: u8,
}

impl Default for ColorRamp {
    fn default() -> Self {
        Self {
            low: [200, 60, 0],
            high: [255, 255, 100],
            cap: 80.0,
            alpha: 0xc0,
        }
    }
}

impl ColorRamp {
    /// Returns the colour of a body of the given radius.
    pub fn color(&self, radius: f64) -> Color {
        let proportion = (radius / self.cap).clamp(0.0, 1.0);
        let channel = |i: usize| {
            let low = self.low[i] as f64;
            let high = self.high[i] as f64;

            (low * (1.0 - proportion) + high * proportion).floor() as u8
        };

        Color::rgba(channel(0), channel(1), channel(2), self.alpha)
    }
}

/// Draws particles on a [`Canvas`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Renderer {
    /// Colours of the bodies.
    pub ramp: ColorRamp,
}

impl Renderer {
    /// Creates a new [`Renderer`].
    #[inline]
    pub const fn new(ramp: ColorRamp) -> Self {
        Self { ramp }
    }

    /// Draws every particle as a filled circle, then the preview of the body being charged if
    /// there is one.
    ///
    /// The canvas is cleared first unless `traces` is set, in which case previous frames stay
    /// visible and bodies leave trails. Returns `false` without doing anything when there is no
    /// canvas.
    pub fn render(
        &self,
        canvas: Option<&mut dyn Canvas>,
        particles: &[Particle],
        preview: Option<Preview>,
        traces: bool,
    ) -> bool {
        let Some(canvas) = canvas else {
            return false;
        };

        if !traces {
            let (width, height) = (canvas.width(), canvas.height());
            canvas.clear_rect(0.0, 0.0, width, height);
        }

        for p in particles {
            self.circle(canvas, p.position, p.radius());
        }

        if let Some(preview) = preview {
            self.circle(canvas, preview.position, preview.radius);
        }

        true
    }

    fn circle(&self, canvas: &mut dyn Canvas, centre: Vector, radius: f64) {
        canvas.begin_path();
        canvas.arc(centre.x, centre.y, radius, 0.0, TAU, false);
        canvas.set_fill_color(self.ramp.color(radius));
        canvas.fill();
        canvas.close_path();
    }
}

/// A canvas recording the calls it receives.
#[cfg(test)]
pub(crate) mod recording {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    pub enum Command {
        Clear,
        Fill(Color),
        Begin,
        Arc { x: f64, y: f64, radius: f64 },
        FillPath,
        Close,
    }

    #[derive(Debug)]
    pub struct RecordingCanvas {
        pub commands: Vec<Command>,
        pub size: (f64, f64),
    }

    impl Default for RecordingCanvas {
        fn default() -> Self {
            Self::with_size(800.0, 600.0)
        }
    }

    impl RecordingCanvas {
        pub fn with_size(width: f64, height: f64) -> Self {
            Self {
                commands: Vec::new(),
                size: (width, height),
            }
        }

        pub fn arcs(&self) -> Vec<(f64, f64, f64)> {
            self.commands
                .iter()
                .filter_map(|c| match *c {
                    Command::Arc { x, y, radius } => Some((x, y, radius)),
                    _ => None,
                })
                .collect()
        }

        pub fn clears(&self) -> usize {
            self.commands.iter().filter(|c| **c == Command::Clear).count()
        }
    }

    impl Canvas for RecordingCanvas {
        fn width(&self) -> f64 {
            self.size.0
        }

        fn height(&self) -> f64 {
            self.size.1
        }

        fn clear_rect(&mut self, _: f64, _: f64, _: f64, _: f64) {
            self.commands.push(Command::Clear);
        }

        fn set_fill_color(&mut self, color: Color) {
            self.commands.push(Command::Fill(color));
        }

        fn begin_path(&mut self) {
            self.commands.push(Command::Begin);
        }

        fn arc(&mut self, x: f64, y: f64, radius: f64, _: f64, _: f64, _: bool) {
            self.commands.push(Command::Arc { x, y, radius });
        }

        fn fill(&mut self) {
            self.commands.push(Command::FillPath);
        }

        fn close_path(&mut self) {
            self.commands.push(Command::Close);
        }
    }
}
