use crate::{
    config::{Bounds, GestureConfig},
    particle::MassLaw,
    Particle, Vector,
};

/// A recorded pointer press.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Press {
    /// Where the press happened, in canvas coordinates.
    pub position: Vector,
    /// When the press happened, in milliseconds.
    pub time_ms: f64,
}

/// The body a press in progress would create if released now.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Preview {
    /// Where the body will be created.
    pub position: Vector,
    /// Its radius so far.
    pub radius: f64,
}

/// Turns press-hold-release gestures into particles.
///
/// Holding longer makes a bigger body and the body is launched like a slingshot: it flies
/// towards the press point from the release point, proportionally to the drag length.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Slingshot {
    config: GestureConfig,
    press: Option<Press>,
}

impl Slingshot {
    /// Creates a new [`Slingshot`] with no press in progress.
    #[inline]
    pub const fn new(config: GestureConfig) -> Self {
        Self {
            config,
            press: None,
        }
    }

    /// Returns the press in progress, if any.
    #[inline]
    pub const fn press(&self) -> Option<Press> {
        self.press
    }

    /// Records a press at `(x, y)`.
    ///
    /// A press outside `bounds` is ignored and forgets any press in progress, so that the
    /// following release does nothing. Returns whether the press was recorded.
    pub fn on_press(&mut self, x: f64, y: f64, time_ms: f64, bounds: &Bounds) -> bool {
        let position = Vector::new(x, y);

        self.press = bounds
            .contains(position)
            .then_some(Press { position, time_ms });

        self.press.is_some()
    }

    /// Ends the press in progress at `(x, y)` and returns the body it launches.
    ///
    /// Returns `None` when no press was recorded.
    pub fn on_release(&mut self, x: f64, y: f64, time_ms: f64, law: MassLaw) -> Option<Particle> {
        let press = self.press.take()?;
        let release = Vector::new(x, y);

        let radius = self.radius(time_ms - press.time_ms);
        let velocity = (press.position - release) / self.config.fling_divisor;

        Some(Particle::new(press.position, velocity, radius, law))
    }

    /// Returns the body the press in progress would create if released at `now_ms`.
    pub fn preview(&self, now_ms: f64) -> Option<Preview> {
        self.press.map(|press| Preview {
            position: press.position,
            radius: self.radius(now_ms - press.time_ms),
        })
    }

    /// Forgets the press in progress.
    #[inline]
    pub fn cancel(&mut self) {
        self.press = None;
    }

    fn radius(&self, held_ms: f64) -> f64 {
        (held_ms.max(0.0) / self.config.hold_ms_per_radius).max(self.config.min_radius)
    }
}
