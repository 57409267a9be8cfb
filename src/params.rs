/*
 * Simulation Parameters Module
 *
 * This module defines the tunable configuration of the flock (FlockParams),
 * the world rectangle the flock lives in (WorldBounds), and the raw slider
 * values the UI edits (SliderValues). Raw slider values only reach the
 * simulator through the binding module, which applies each control's transform.
 *
 * All neighbor distances are stored squared.
 */

use std::ops::RangeInclusive;

use crate::{MARGIN, TURN_FACTOR};

// Parameters of the steering rules that can be adjusted via UI
#[derive(Debug, Clone, PartialEq)]
pub struct FlockParams {
    pub target_population: usize,
    pub separation_distance: f32, // squared
    pub separation_factor: f32,
    pub cohesion_distance: f32, // squared, also the alignment radius
    pub cohesion_factor: f32,
    pub alignment_factor: f32,
    pub speed_limit: f32,
    pub speed_convergence_factor: f32,
    pub turn_factor: f32,
}

impl Default for FlockParams {
    fn default() -> Self {
        Self {
            target_population: 120,
            separation_distance: 400.0,
            separation_factor: 0.9,
            cohesion_distance: 4900.0,
            cohesion_factor: 0.15,
            alignment_factor: 0.05,
            speed_limit: 300.0,
            speed_convergence_factor: 0.4,
            turn_factor: TURN_FACTOR,
        }
    }
}

// The drawable area in simulation space, origin at the top-left, y downward
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldBounds {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
}

impl Default for WorldBounds {
    fn default() -> Self {
        Self::new(1960.0, 1080.0)
    }
}

impl WorldBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            margin: MARGIN,
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    // Top edge of the band near the bottom of the screen where boids may perch
    pub fn ground_line(&self) -> f32 {
        self.height - self.margin
    }
}

// Raw values of the UI sliders, before any transform is applied
#[derive(Debug, Clone, PartialEq)]
pub struct SliderValues {
    pub boid_num: f32,
    pub separation_distance: f32,
    pub separation_factor: f32,
    pub cohesion_distance: f32,
    pub cohesion_factor: f32,
    pub alignment_factor: f32,
    pub speed_limit: f32,
    pub speed_convergence_factor: f32,
    pub show_debug: bool,
    pub pause_simulation: bool,
}

impl Default for SliderValues {
    // Inverse transforms of FlockParams::default()
    fn default() -> Self {
        Self {
            boid_num: 40.0,
            separation_distance: 20.0,
            separation_factor: 90.0,
            cohesion_distance: 14.0,
            cohesion_factor: 15.0,
            alignment_factor: 5.0,
            speed_limit: 60.0,
            speed_convergence_factor: 40.0,
            show_debug: false,
            pause_simulation: false,
        }
    }
}

impl SliderValues {
    pub fn get_boid_num_range() -> RangeInclusive<f32> {
        0.0..=200.0
    }

    pub fn get_distance_range() -> RangeInclusive<f32> {
        0.0..=100.0
    }

    pub fn get_percent_range() -> RangeInclusive<f32> {
        0.0..=100.0
    }

    pub fn get_separation_factor_range() -> RangeInclusive<f32> {
        0.0..=200.0
    }

    pub fn get_speed_limit_range() -> RangeInclusive<f32> {
        0.0..=200.0
    }
}
