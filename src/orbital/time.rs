//! Simulation time for the orbit animation

use bevy::prelude::*;

/// Simulation clock resource. Elapsed time only accumulates while running,
/// so pausing and resuming never rewinds the orbit.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct SimulationClock {
    pub elapsed_secs: f64,
    pub running: bool,
}

impl SimulationClock {
    /// Accumulate `delta_secs` if running. Negative deltas are ignored.
    pub fn advance(&mut self, delta_secs: f64) {
        if self.running {
            self.elapsed_secs += delta_secs.max(0.0);
        }
    }

    pub fn set_running(&mut self, running: bool) {
        self.running = running;
    }
}

/// System to advance the simulation clock by the frame delta
pub fn advance_simulation_clock(time: Res<Time>, mut clock: ResMut<SimulationClock>) {
    clock.advance(time.delta_secs_f64());
}
