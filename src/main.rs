/*
 * Boid Flocking Simulation
 *
 * A flock of boids steers by separation, cohesion and alignment, stays inside
 * the window margins, and may perch on the ground band at the bottom of the
 * screen before taking off again. Sliders adjust the flock while it runs.
 *
 * Set RUST_LOG=debug to trace parameter changes and window resizes.
 */

use perch_flock::app::{model, update};

fn main() {
    env_logger::init();

    nannou::app(model)
        .update(update)
        .run();
}
