use serde::{Deserialize, Serialize};
use slingshot::{config::SimulationConfig, Simulation};
use tracing::debug;

/// Frame cadence of the host, in milliseconds.
pub const FRAME_MS: f64 = 1000.0 / 60.0;

/// A scripted press-hold-release gesture.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Gesture {
    /// Frame before which the pointer is pressed.
    pub frame: u64,
    /// Where the pointer is pressed.
    pub press: [f64; 2],
    /// Where the pointer is released.
    pub release: [f64; 2],
    /// How long the pointer is held, in milliseconds.
    pub hold_ms: f64,
}

/// A scenario file.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    /// Configuration of the simulation.
    pub config: SimulationConfig,
    /// Start from the preset system.
    pub preset: bool,
    /// Start with traces enabled.
    pub traces: bool,
    /// Gestures to replay, in any order.
    pub gestures: Vec<Gesture>,
}

/// Replays the gestures of a scenario against a simulation, frame by frame.
#[derive(Debug)]
pub struct Script {
    gestures: Vec<Gesture>,
    next: usize,
    held: Option<(Gesture, f64)>,
}

impl Script {
    /// Creates a script replaying `gestures` in frame order.
    pub fn new(mut gestures: Vec<Gesture>) -> Self {
        gestures.sort_by_key(|g| g.frame);

        Self {
            gestures,
            next: 0,
            held: None,
        }
    }

    /// Sends the pointer events due before `frame` runs at `now_ms`.
    ///
    /// A gesture is pressed at its frame and released at the first frame boundary after its hold
    /// time, so the body is previewed while held. Pressing again cuts the held gesture short.
    pub fn before_frame(&mut self, simulation: &mut Simulation, frame: u64, now_ms: f64) {
        if let Some((gesture, pressed_at)) = self.held {
            let release_at = pressed_at + gesture.hold_ms;
            if now_ms >= release_at {
                self.release(simulation, gesture, release_at);
            }
        }

        while let Some(&gesture) = self.gestures.get(self.next) {
            if gesture.frame > frame {
                break;
            }
            self.next += 1;

            if let Some((held, _)) = self.held {
                self.release(simulation, held, now_ms);
            }

            let [x, y] = gesture.press;
            simulation.on_press(x, y, now_ms);
            debug!(frame, x, y, "gesture pressed");
            self.held = Some((gesture, now_ms));
        }
    }

    fn release(&mut self, simulation: &mut Simulation, gesture: Gesture, time_ms: f64) {
        let [x, y] = gesture.release;
        simulation.on_release(x, y, time_ms);
        self.held = None;
    }

    /// Returns `true` once every gesture has been pressed and released.
    pub fn is_done(&self) -> bool {
        self.next == self.gestures.len() && self.held.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(script: &mut Script, simulation: &mut Simulation, frames: std::ops::Range<u64>) {
        for frame in frames {
            let now = frame as f64 * FRAME_MS;
            script.before_frame(simulation, frame, now);
            simulation.frame(now, None);
        }
    }

    #[test]
    fn partial_scenario_file() {
        let scenario: Scenario = serde_yaml::from_str(
            "
preset: true
gestures:
  - { frame: 3, press: [100, 100], release: [100, 130], hold_ms: 300 }
",
        )
        .unwrap();

        assert!(scenario.preset);
        assert!(!scenario.traces);
        assert_eq!(scenario.config, SimulationConfig::default());
        assert_eq!(scenario.gestures[0].release, [100.0, 130.0]);
    }

    #[test]
    fn gesture_is_released_after_its_hold() {
        let gesture = Gesture {
            frame: 0,
            press: [100.0, 100.0],
            release: [100.0, 130.0],
            hold_ms: 300.0,
        };
        let mut script = Script::new(vec![gesture]);
        let mut simulation = Simulation::default();

        // 300ms is 18 frames at 60Hz.
        run(&mut script, &mut simulation, 0..18);
        assert!(simulation.particles().is_empty());
        assert!(!script.is_done());

        run(&mut script, &mut simulation, 18..19);
        assert!(script.is_done());

        let body = simulation.particles()[0];
        assert_eq!(body.radius(), 10.0);
        assert_eq!(body.velocity.y, -3.0);
    }

    #[test]
    fn pressing_again_cuts_the_held_gesture_short() {
        let gestures = vec![
            Gesture {
                frame: 5,
                press: [300.0, 300.0],
                release: [300.0, 300.0],
                hold_ms: 60.0,
            },
            Gesture {
                frame: 1,
                press: [100.0, 100.0],
                release: [100.0, 100.0],
                hold_ms: 1_000.0,
            },
        ];
        let mut script = Script::new(gestures);
        let mut simulation = Simulation::default();

        run(&mut script, &mut simulation, 0..20);

        assert!(script.is_done());
        let [first, second] = simulation.particles() else {
            panic!("expected two particles");
        };
        // Held for 4 frames, then 60ms.
        assert!((first.radius() - 4.0 * FRAME_MS / 30.0).abs() < 1e-9);
        assert!((second.radius() - 2.0).abs() < 1e-9);
    }
}
