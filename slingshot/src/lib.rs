#![warn(missing_docs)]
//! # Slingshot
//!
//! Slingshot is a small interactive 2D N-body gravity toy. Bodies attract each other through a
//! softened Newtonian force, are advanced with a fixed-step kick-drift integrator and are created
//! by the user with a press-hold-release "slingshot" gesture: the longer the press, the bigger the
//! body, and it is launched opposite to the drag.
//!
//! ## Using Slingshot
//!
//! Everything lives in a [`Simulation`]. A host (a browser page, a window, a headless renderer)
//! forwards pointer presses and releases to it, calls [`Simulation::frame`] once per animation
//! frame and passes the [`Canvas`] to draw on, if there is one.
//!
//! ```
//! use slingshot::prelude::*;
//!
//! let mut simulation = Simulation::default();
//!
//! // Hold for 300ms at (100, 100) and release 30 pixels below.
//! simulation.on_press(100.0, 100.0, 0.0);
//! simulation.on_release(100.0, 130.0, 300.0);
//!
//! // The body is admitted at the next frame boundary.
//! assert_eq!(simulation.particles().len(), 0);
//! simulation.frame(316.0, None);
//!
//! let body = simulation.particles()[0];
//! assert_eq!(body.radius(), 10.0);
//! ```
//!
//! ## Computing gravity
//!
//! The force accumulation is independent from [`Particle`]. Any type implementing the
//! [`Position`](gravity::Position) and [`Mass`](gravity::Mass) traits can be used with the
//! available algorithms, and both traits can be derived for types with `position` and `mass`
//! fields. They are also implemented for tuples of a position and a mass.
//!
//! ```
//! use slingshot::prelude::*;
//!
//! #[derive(Position, Mass)]
//! struct Moon {
//!     position: Vector,
//!     mass: f64,
//! }
//!
//! let moons = [
//!     Moon { position: Vector::new(-50.0, 0.0), mass: 2.0 },
//!     Moon { position: Vector::new(50.0, 0.0), mass: 1.0 },
//! ];
//!
//! let accelerations = moons.brute_force_pairs(SoftenedGravity::new(1.0, 10.0));
//!
//! // Equal and opposite forces.
//! let net = accelerations[0] * moons[0].mass + accelerations[1] * moons[1].mass;
//! assert!(net.length() < 1e-12);
//! ```

/// Force accumulation over a set of particles.
pub mod accumulator;
/// Configuration of a simulation.
pub mod config;
/// Errors returned by fallible operations.
pub mod error;
/// Translation of pointer gestures into new particles.
pub mod gesture;
/// Gravitational interaction between particles.
pub mod gravity;
/// Fixed-step time integrators.
pub mod integrator;
/// Algorithms that use multiple CPU threads.
#[cfg(feature = "parallel")]
pub mod parallel;
/// The simulated body.
pub mod particle;
/// Fixed demonstration configuration.
pub mod preset;
/// Drawing of the simulation on a 2D canvas.
pub mod render;
/// Algorithms that use one CPU thread.
pub mod sequential;
/// Per-frame orchestration and the control surface.
pub mod simulation;
/// Two-dimensional vector arithmetic.
pub mod vector;

pub use particle::Particle;
pub use render::Canvas;
pub use simulation::Simulation;
pub use vector::Vector;

/// Represents a pair of objects, which can be particles or storages of particles, between which an
/// interaction is computed.
///
/// The first object is the one being affected by the second object.
#[derive(Clone, Copy, Debug)]
pub struct Between<S1, S2>(pub S1, pub S2);

/// Trait to compute an interaction between particles contained in a storage.
///
/// Implementing [`Interaction<Between<&YourParticle, &YourParticle>>`] for `YourInteraction` allows
/// it to be used with the brute-force algorithms of the [`sequential`] module.
pub trait Interaction<Storage> {
    /// The computed interaction. This can be one or multiple values depending on the storage used.
    type Output;

    /// Returns the interaction between the particles in the storage.
    fn compute(&mut self, storage: Storage) -> Self::Output;
}

/// Trait to compute the interaction of two distinct particles on each other at once.
///
/// Required by the [`BruteForcePairs`](sequential::BruteForcePairs) algorithm.
pub trait InteractionPair<P> {
    /// The computed interaction.
    type Output;

    /// Returns the interaction on the first particle and the interaction on the second particle.
    fn compute_pair(&mut self, pair: Between<P, P>) -> (Self::Output, Self::Output);
}

/// Commonly used types, re-exported.
pub mod prelude {
    // Common traits and their derive macros.
    pub use crate::{
        gravity::{Mass, Position, SoftenedGravity},
        Between, Interaction, InteractionPair,
    };
    pub use slingshot_derive::{Mass, Position};

    pub use crate::{
        accumulator::{ComputeMethod, ForceAccumulator},
        config::SimulationConfig,
        integrator::Integrator,
        particle::{MassLaw, Particle},
        render::{Canvas, Color},
        simulation::Simulation,
        vector::Vector,
    };

    #[cfg(feature = "parallel")]
    pub use crate::parallel::ParallelCompute;
    pub use crate::sequential::SequentialCompute;
}
