/*
 * Physics Module
 *
 * This module holds the FlockSimulator, which owns every boid and advances
 * the flock one step at a time. Each boid is processed in order through:
 * separation, cohesion, alignment, speed limiting, screen containment,
 * random perching, and finally position integration.
 *
 * Boids are updated in place, one at a time, integration included. A boid
 * processed later in a step sees both the velocities and the positions
 * already written for earlier boids.
 * Neighbor search is a brute-force scan using squared distances.
 */

use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::boid::Boid;
use crate::params::{FlockParams, WorldBounds};
use crate::vector::Vec3;

const PERCH_STAY_PROBABILITY: f32 = 0.9;
const PERCH_LAND_PROBABILITY: f32 = 0.5;

pub struct FlockSimulator {
    pub params: FlockParams,
    pub bounds: WorldBounds,
    boids: Vec<Boid>,
    rng: StdRng,
}

impl FlockSimulator {
    pub fn new(params: FlockParams, bounds: WorldBounds) -> Self {
        Self::with_rng(params, bounds, StdRng::from_entropy())
    }

    // Deterministic simulator for tests and benchmarks
    pub fn with_seed(params: FlockParams, bounds: WorldBounds, seed: u64) -> Self {
        Self::with_rng(params, bounds, StdRng::seed_from_u64(seed))
    }

    fn with_rng(params: FlockParams, bounds: WorldBounds, rng: StdRng) -> Self {
        let mut simulator = Self {
            params,
            bounds,
            boids: Vec::new(),
            rng,
        };
        let target = simulator.params.target_population;
        simulator.resize_population(target);
        simulator
    }

    // Simulator over a hand-placed flock; the population target follows the flock size
    pub fn from_boids(params: FlockParams, bounds: WorldBounds, seed: u64, boids: Vec<Boid>) -> Self {
        let params = FlockParams {
            target_population: boids.len(),
            ..params
        };
        Self {
            params,
            bounds,
            boids,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn boids(&self) -> &[Boid] {
        &self.boids
    }

    #[cfg(test)]
    pub(crate) fn boids_mut(&mut self) -> &mut [Boid] {
        &mut self.boids
    }

    pub fn perching_count(&self) -> usize {
        self.boids.iter().filter(|boid| boid.is_perching).count()
    }

    // Grow or shrink the flock to exactly `target` boids.
    // New boids are appended; removal takes the most recently created first.
    pub fn resize_population(&mut self, target: usize) {
        self.params.target_population = target;
        let current = self.boids.len();
        if target == current {
            return;
        }

        if target < current {
            self.boids.truncate(target);
        } else {
            self.boids.reserve(target - current);
            for _ in current..target {
                let position = self.random_position();
                let velocity = self.random_velocity(false);
                self.boids.push(Boid::new(position, velocity));
            }
        }

        info!("Flock resized from {} to {} boids", current, target);
    }

    fn random_position(&mut self) -> Vec3 {
        let margin = self.bounds.margin;
        let x = self.rng.gen::<f32>() * (self.bounds.width - 2.0 * margin) + margin;
        let y = self.rng.gen::<f32>() * (self.bounds.height - 2.0 * margin) + margin;
        Vec3::new(x, y, 0.0)
    }

    // Random velocity within the speed limit on each axis.
    // With `y_negative` the vertical component only points up the screen.
    pub fn random_velocity(&mut self, y_negative: bool) -> Vec3 {
        let limit = self.params.speed_limit;
        let x = (1.0 - 2.0 * self.rng.gen::<f32>()) * limit;
        let y = if y_negative {
            -self.rng.gen::<f32>() * limit
        } else {
            (1.0 - 2.0 * self.rng.gen::<f32>()) * limit
        };
        Vec3::new(x, y, 0.0)
    }

    // Advance every boid by `delta_time_millis` of simulated time
    pub fn step(&mut self, delta_time_millis: f32) {
        for i in 0..self.boids.len() {
            self.separation(i);
            self.cohesion(i);
            self.alignment(i);
            self.limit_speed(i);
            self.limit_within_screen(i);
            self.random_perch(i);
            self.update_position(i, delta_time_millis);
        }
    }

    // Steer away from every airborne neighbor inside the separation radius.
    // Offsets are summed, not averaged.
    pub fn separation(&mut self, index: usize) {
        let position = self.boids[index].position;
        let mut displacement = Vec3::ZERO;

        for (j, other) in self.boids.iter().enumerate() {
            if j == index || other.is_perching {
                continue;
            }
            if position.square_distance(other.position) <= self.params.separation_distance {
                displacement += position - other.position;
            }
        }

        let boid = &mut self.boids[index];
        boid.velocity = boid.velocity + displacement * self.params.separation_factor;
    }

    // Steer toward the centroid of airborne neighbors inside the cohesion radius
    pub fn cohesion(&mut self, index: usize) {
        let position = self.boids[index].position;
        let mut center = Vec3::ZERO;
        let mut count = 0usize;

        for (j, other) in self.boids.iter().enumerate() {
            if j == index || other.is_perching {
                continue;
            }
            if position.square_distance(other.position) <= self.params.cohesion_distance {
                center += other.position;
                count += 1;
            }
        }

        if count > 0 {
            center = center * (1.0 / count as f32);
            let boid = &mut self.boids[index];
            boid.velocity = boid.velocity + (center - position) * self.params.cohesion_factor;
        }
    }

    // Match the average velocity of airborne neighbors inside the cohesion radius
    pub fn alignment(&mut self, index: usize) {
        let position = self.boids[index].position;
        let mut average = Vec3::ZERO;
        let mut count = 0usize;

        for (j, other) in self.boids.iter().enumerate() {
            if j == index || other.is_perching {
                continue;
            }
            if position.square_distance(other.position) <= self.params.cohesion_distance {
                average += other.velocity;
                count += 1;
            }
        }

        if count > 0 {
            average = average * (1.0 / count as f32);
            let boid = &mut self.boids[index];
            boid.velocity = boid.velocity + (average - boid.velocity) * self.params.alignment_factor;
        }
    }

    // Perching boids stop dead. Overspeeding boids are damped by the
    // convergence factor rather than clamped to the limit.
    pub fn limit_speed(&mut self, index: usize) {
        let speed_limit = self.params.speed_limit;
        let convergence = self.params.speed_convergence_factor;
        let boid = &mut self.boids[index];

        if boid.is_perching || speed_limit == 0.0 {
            boid.velocity = Vec3::ZERO;
            return;
        }

        let over_speed_ratio = boid.velocity.magnitude() / speed_limit;
        if over_speed_ratio > 1.0 {
            boid.velocity = boid.velocity.scale(convergence);
        }
    }

    // Nudge the velocity back toward the middle when inside the margin band.
    // Each axis is handled independently.
    pub fn limit_within_screen(&mut self, index: usize) {
        let bounds = self.bounds;
        let nudge = self.params.speed_limit * self.params.turn_factor;
        let boid = &mut self.boids[index];

        if boid.is_perching {
            return;
        }

        if boid.position.x >= bounds.width - bounds.margin {
            boid.velocity.x -= nudge;
        } else if boid.position.x <= bounds.margin {
            boid.velocity.x += nudge;
        }

        if boid.position.y >= bounds.height - bounds.margin {
            boid.velocity.y -= nudge;
        } else if boid.position.y <= bounds.margin {
            boid.velocity.y += nudge;
        }
    }

    // Boids in the ground band land or take off at random.
    // Landed boids stay landed with a higher probability than airborne ones land.
    pub fn random_perch(&mut self, index: usize) {
        let ground_line = self.bounds.ground_line();
        {
            let boid = &self.boids[index];
            if !boid.is_perching && boid.position.y < ground_line {
                return;
            }
        }

        let probability = if self.boids[index].is_perching {
            PERCH_STAY_PROBABILITY
        } else {
            PERCH_LAND_PROBABILITY
        };
        let is_perching = self.rng.gen::<f32>() <= probability;

        let escape = if !is_perching && self.boids[index].velocity == Vec3::ZERO {
            Some(self.random_velocity(true))
        } else {
            None
        };

        let boid = &mut self.boids[index];
        boid.is_perching = is_perching;
        if is_perching {
            boid.velocity = Vec3::ZERO;
        } else if let Some(velocity) = escape {
            boid.velocity = velocity;
        }
    }

    pub fn update_position(&mut self, index: usize, delta_time_millis: f32) {
        let boid = &mut self.boids[index];
        boid.position = boid.position + boid.velocity * (delta_time_millis / 1000.0);
    }
}
