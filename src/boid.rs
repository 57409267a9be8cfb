/*
 * Boid Module
 *
 * This module defines the Boid struct, the state record of a single agent.
 * A boid is owned by the FlockSimulator, which creates it with a random
 * position and velocity and drops it when the population shrinks.
 * All steering behaviour lives in the physics module.
 */

use crate::vector::Vec3;

#[derive(Debug, Clone, PartialEq)]
pub struct Boid {
    pub position: Vec3,
    pub velocity: Vec3,
    pub is_perching: bool,
}

impl Boid {
    pub fn new(position: Vec3, velocity: Vec3) -> Self {
        Self {
            position,
            velocity,
            is_perching: false,
        }
    }

    // A boid that starts at rest, as if it had just landed
    pub fn at_rest(position: Vec3) -> Self {
        Self::new(position, Vec3::ZERO)
    }

    // Heading angle in simulation space (y grows downward)
    pub fn heading(&self) -> f32 {
        self.velocity.y.atan2(self.velocity.x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_boid_is_airborne() {
        let boid = Boid::new(Vec3::new(1.0, 2.0, 0.0), Vec3::new(3.0, 4.0, 0.0));
        assert!(!boid.is_perching);
        assert_eq!(boid.velocity, Vec3::new(3.0, 4.0, 0.0));
    }

    #[test]
    fn resting_boid_has_zero_velocity() {
        let boid = Boid::at_rest(Vec3::new(5.0, 5.0, 0.0));
        assert_eq!(boid.velocity, Vec3::ZERO);
    }

    #[test]
    fn heading_points_along_velocity() {
        let boid = Boid::new(Vec3::ZERO, Vec3::new(0.0, 10.0, 0.0));
        assert!((boid.heading() - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }
}
