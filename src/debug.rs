/*
 * Debug Information Module
 *
 * This module defines the DebugInfo struct that contains frame statistics
 * and flock counts to be displayed in the UI.
 */

use std::time::Duration;

use crate::physics::FlockSimulator;

// Debug information to display
#[derive(Debug, Clone, Default)]
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub last_step_millis: f32,
    pub boid_count: usize,
    pub perching_count: usize,
}

impl DebugInfo {
    // Refresh the flock counts after a step
    pub fn record_step(&mut self, simulator: &FlockSimulator, delta_time_millis: f32) {
        self.last_step_millis = delta_time_millis;
        self.boid_count = simulator.boids().len();
        self.perching_count = simulator.perching_count();
    }

    pub fn lines(&self) -> [String; 5] {
        [
            format!("FPS: {:.1}", self.fps),
            format!("Frame time: {:.2} ms", self.frame_time.as_secs_f64() * 1000.0),
            format!("Step: {:.2} ms", self.last_step_millis),
            format!("Total Boids: {}", self.boid_count),
            format!("Perching: {}", self.perching_count),
        ]
    }
}
