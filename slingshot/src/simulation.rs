use crate::{
    accumulator::ForceAccumulator,
    config::{Bounds, SimulationConfig},
    error::ConfigError,
    gesture::Slingshot,
    preset,
    render::{Canvas, Renderer},
    Particle, Vector,
};
use tracing::{debug, info, trace};

/// The state of a simulation and its control surface.
///
/// A host drives it by calling [`Simulation::frame`] once per animation frame and forwarding
/// pointer events to [`Simulation::on_press`] and [`Simulation::on_release`]. Particles created
/// between two frames wait in a pending queue and only join the simulated set at the start of the
/// next frame, so that a frame never simulates a partially updated set.
#[derive(Clone, Debug)]
pub struct Simulation {
    config: SimulationConfig,
    forces: ForceAccumulator,
    renderer: Renderer,
    slingshot: Slingshot,
    surface: Bounds,
    particles: Vec<Particle>,
    pending: Vec<Particle>,
    traces_enabled: bool,
    frames: u64,
    time: f64,
}

impl Default for Simulation {
    fn default() -> Self {
        Self::from_valid(SimulationConfig::default())
    }
}

impl Simulation {
    /// Creates an empty simulation with the given configuration.
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self::from_valid(config))
    }

    fn from_valid(config: SimulationConfig) -> Self {
        Self {
            forces: config.forces(),
            renderer: Renderer::new(config.ramp),
            slingshot: Slingshot::new(config.gesture),
            surface: config.bounds,
            config,
            particles: Vec::new(),
            pending: Vec::new(),
            traces_enabled: false,
            frames: 0,
            time: 0.0,
        }
    }

    /// Returns the configuration of the simulation.
    #[inline]
    pub const fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Returns the simulated particles.
    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Returns the particles waiting to be admitted at the next frame.
    #[inline]
    pub fn pending(&self) -> &[Particle] {
        &self.pending
    }

    /// Returns the area accepting presses: the size of the last canvas drawn on, or the configured
    /// bounds before the first frame with a canvas.
    #[inline]
    pub const fn surface(&self) -> Bounds {
        self.surface
    }

    /// Returns `true` if the canvas is not cleared between frames.
    #[inline]
    pub const fn traces_enabled(&self) -> bool {
        self.traces_enabled
    }

    /// Returns the number of frames run so far.
    #[inline]
    pub const fn frames(&self) -> u64 {
        self.frames
    }

    /// Returns the simulated time elapsed so far.
    #[inline]
    pub const fn time(&self) -> f64 {
        self.time
    }

    /// Handles a pointer press at `(x, y)` in canvas coordinates. Presses outside the
    /// [surface](Simulation::surface) are ignored.
    pub fn on_press(&mut self, x: f64, y: f64, time_ms: f64) {
        if !self.slingshot.on_press(x, y, time_ms, &self.surface) {
            trace!(x, y, "press outside bounds ignored");
        }
    }

    /// Handles a pointer release at `(x, y)` in canvas coordinates, queueing the body launched by
    /// the gesture. A release without a recorded press does nothing.
    pub fn on_release(&mut self, x: f64, y: f64, time_ms: f64) {
        match self.slingshot.on_release(x, y, time_ms, self.config.mass_law) {
            Some(particle) => {
                debug!(
                    radius = particle.radius(),
                    vx = particle.velocity.x,
                    vy = particle.velocity.y,
                    "particle launched"
                );
                self.pending.push(particle);
            }
            None => trace!(x, y, "release without press ignored"),
        }
    }

    /// Queues a particle to be admitted at the next frame.
    #[inline]
    pub fn add_particle(&mut self, particle: Particle) {
        self.pending.push(particle);
    }

    /// Runs one animation frame: admits the pending particles, advances the physics by
    /// `substeps` substeps and draws the result on `canvas` if there is one.
    ///
    /// `now_ms` is only used to size the preview of a press in progress. The size of `canvas`
    /// becomes the area accepting the following presses.
    pub fn frame(&mut self, now_ms: f64, canvas: Option<&mut dyn Canvas>) {
        if let Some(canvas) = canvas.as_deref() {
            self.surface = Bounds {
                width: canvas.width(),
                height: canvas.height(),
            };
        }

        self.admit();
        self.step();

        if !self.render(now_ms, canvas) {
            debug!(frame = self.frames, "no canvas, rendering skipped");
        }
    }

    /// Moves every pending particle into the simulated set. Returns how many were admitted.
    pub fn admit(&mut self) -> usize {
        let admitted = self.pending.len();

        if admitted > 0 {
            self.particles.append(&mut self.pending);
            debug!(admitted, total = self.particles.len(), "particles admitted");
        }

        admitted
    }

    /// Advances the simulated particles by one frame worth of substeps. Pending particles are not
    /// admitted.
    pub fn step(&mut self) {
        for _ in 0..self.config.substeps {
            self.config
                .integrator
                .step(&mut self.particles, &self.forces, self.config.dt);
        }

        self.frames += 1;
        self.time += self.config.frame_time();
    }

    /// Draws the current state on `canvas`. Returns `false` when there is no canvas.
    pub fn render(&self, now_ms: f64, canvas: Option<&mut dyn Canvas>) -> bool {
        self.renderer.render(
            canvas,
            &self.particles,
            self.slingshot.preview(now_ms),
            self.traces_enabled,
        )
    }

    /// Flips trace mode. Returns the new state.
    pub fn toggle_traces(&mut self) -> bool {
        self.traces_enabled = !self.traces_enabled;
        info!(enabled = self.traces_enabled, "traces toggled");

        self.traces_enabled
    }

    /// Removes every simulated and pending particle.
    pub fn clear_particles(&mut self) {
        self.particles.clear();
        self.pending.clear();
        info!("particles cleared");
    }

    /// Replaces the whole state with the fixed demonstration configuration of
    /// [`preset::PRESET`]. The pending queue and any press in progress are discarded.
    pub fn preset(&mut self) {
        self.particles = preset::particles(self.config.mass_law);
        self.pending.clear();
        self.slingshot.cancel();
        info!(particles = self.particles.len(), "preset loaded");
    }

    /// Returns the total momentum of the simulated particles.
    pub fn total_momentum(&self) -> Vector {
        self.particles.iter().map(Particle::momentum).sum()
    }

    /// Returns the total kinetic energy of the simulated particles.
    pub fn kinetic_energy(&self) -> f64 {
        self.particles.iter().map(Particle::kinetic_energy).sum()
    }
}
