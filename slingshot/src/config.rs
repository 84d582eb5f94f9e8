//! Configuration types of a [`Simulation`](crate::Simulation).
//!
//! Every type is `serde`-deserializable and every field has a default, so a configuration file
//! only needs to name what it changes. An example in YAML:
//!
//! ```yaml
//! gravity: 1.0              # gravitational constant
//! softening: 10.0           # softening length, in pixels
//! substeps: 4               # substeps per frame
//! dt: 0.125                 # length of a substep
//! integrator: kick_drift    # or drift_kick_drift
//! mass_law: areal           # or volumetric
//! compute_method: brute_force_pairs
//! bounds:
//!   width: 800
//!   height: 600
//! gesture:
//!   hold_ms_per_radius: 30
//!   fling_divisor: 10
//!   min_radius: 1
//! ```

use crate::{
    accumulator::{ComputeMethod, ForceAccumulator},
    error::ConfigError,
    gravity::SoftenedGravity,
    integrator::Integrator,
    particle::MassLaw,
    render::ColorRamp,
    Vector,
};
use serde::{Deserialize, Serialize};

/// Size of the area accepting pointer presses, in canvas pixels.
///
/// A [`Simulation`](crate::Simulation) replaces the configured bounds with the size of the canvas
/// it draws on, so these only apply until the first frame with a canvas.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bounds {
    /// Width of the area.
    pub width: f64,
    /// Height of the area.
    pub height: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

impl Bounds {
    /// Returns `true` if `point` lies inside the bounds, edges included.
    #[inline]
    pub fn contains(&self, point: Vector) -> bool {
        (0.0..=self.width).contains(&point.x) && (0.0..=self.height).contains(&point.y)
    }
}

/// Conversion of a press-hold-release gesture into a body.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Milliseconds of holding per unit of radius.
    pub hold_ms_per_radius: f64,
    /// The drag length divided by this gives the launch speed.
    pub fling_divisor: f64,
    /// Radius of a body created by a zero-length press.
    pub min_radius: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            hold_ms_per_radius: 30.0,
            fling_divisor: 10.0,
            min_radius: 1.0,
        }
    }
}

/// Parameters of a [`Simulation`](crate::Simulation).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Gravitational constant.
    pub gravity: f64,
    /// Length added in quadrature to every distance between two bodies.
    pub softening: f64,
    /// Integrator substeps per frame.
    pub substeps: usize,
    /// Length of one substep, in simulated time.
    pub dt: f64,
    /// Order of the updates within a substep.
    pub integrator: Integrator,
    /// How the mass of a new body follows from its radius.
    pub mass_law: MassLaw,
    /// Algorithm used for the force pass.
    pub compute_method: ComputeMethod,
    /// Area accepting presses before the first frame with a canvas.
    pub bounds: Bounds,
    /// Conversion of gestures into bodies.
    pub gesture: GestureConfig,
    /// Colours of the bodies.
    pub ramp: ColorRamp,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            gravity: 1.0,
            softening: 10.0,
            substeps: 4,
            dt: 1.0 / 8.0,
            integrator: Integrator::default(),
            mass_law: MassLaw::default(),
            compute_method: ComputeMethod::default(),
            bounds: Bounds::default(),
            gesture: GestureConfig::default(),
            ramp: ColorRamp::default(),
        }
    }
}

impl SimulationConfig {
    /// Checks that every parameter is usable.
    ///
    /// The gravitational constant may be zero or negative but must be finite. The softening may be
    /// zero. Lengths, durations and divisors must be strictly positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        finite("gravity", self.gravity)?;
        finite("softening", self.softening)?;
        if self.softening < 0.0 {
            return Err(ConfigError::NotPositive {
                field: "softening",
                value: self.softening,
            });
        }
        if self.substeps == 0 {
            return Err(ConfigError::NoSubsteps);
        }

        positive("dt", self.dt)?;
        positive("bounds.width", self.bounds.width)?;
        positive("bounds.height", self.bounds.height)?;
        positive("gesture.hold_ms_per_radius", self.gesture.hold_ms_per_radius)?;
        positive("gesture.fling_divisor", self.gesture.fling_divisor)?;
        positive("gesture.min_radius", self.gesture.min_radius)?;
        positive("ramp.cap", self.ramp.cap)?;

        Ok(())
    }

    /// Returns the force accumulator described by this configuration.
    #[inline]
    pub fn forces(&self) -> ForceAccumulator {
        ForceAccumulator::new(
            SoftenedGravity::new(self.gravity, self.softening),
            self.compute_method,
        )
    }

    /// Simulated time elapsed during one frame.
    #[inline]
    pub fn frame_time(&self) -> f64 {
        self.dt * self.substeps as f64
    }
}

fn finite(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotFinite { field, value })
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    finite(field, value)?;

    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}
