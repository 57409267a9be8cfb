/*
 * Boid Flocking Simulation - Module Definitions
 *
 * This file defines the module structure for the boid simulation application.
 * The simulation core (vector, boid, params, physics, binding, scheduler) has
 * no windowing dependency; app, ui and renderer connect it to nannou.
 */

// Re-export key components for easier access
pub use app::Model;
pub use binding::{apply_by_id as apply_control, Control};
pub use boid::Boid;
pub use debug::DebugInfo;
pub use error::ParamError;
pub use params::{FlockParams, SliderValues, WorldBounds};
pub use physics::FlockSimulator;
pub use renderer::RenderSurface;
pub use scheduler::StepScheduler;
pub use vector::Vec3;

// Define modules
pub mod app;
pub mod binding;
pub mod boid;
pub mod debug;
pub mod error;
pub mod params;
pub mod physics;
pub mod renderer;
pub mod scheduler;
pub mod ui;
pub mod vector;

// Constants
pub const MARGIN: f32 = 150.0;
pub const TURN_FACTOR: f32 = 0.75;
pub const HALF_SIZE_X: f32 = 10.0;
pub const HALF_SIZE_Y: f32 = 5.0;
pub const BOID_COLOR: (u8, u8, u8) = (0x00, 0x88, 0x00);
