/*
 * Application Module
 *
 * This module defines the main application model and the nannou callbacks
 * that drive it. The per-frame update callback is gated by the StepScheduler,
 * so the flock steps at most once per fixed interval with the real elapsed
 * time as its timestep. Window resizes update the world bounds between steps.
 */

use std::time::Instant;

use log::{debug, info};
use nannou::prelude::*;
use nannou_egui::Egui;

use crate::debug::DebugInfo;
use crate::params::{FlockParams, SliderValues, WorldBounds};
use crate::physics::FlockSimulator;
use crate::renderer::view;
use crate::scheduler::StepScheduler;
use crate::ui;

// Main model for the application
pub struct Model {
    pub simulator: FlockSimulator,
    pub sliders: SliderValues,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    pub scheduler: StepScheduler,
}

// Initialize the model
pub fn model(app: &App) -> Model {
    // Size the window to 80% of the primary monitor
    let (window_width, window_height) = match app.primary_monitor() {
        Some(monitor) => {
            let size = monitor.size();
            (size.width as f32 * 0.8, size.height as f32 * 0.8)
        }
        None => {
            let bounds = WorldBounds::default();
            (bounds.width, bounds.height)
        }
    };

    let window_id = app
        .new_window()
        .title("Boid Flocking Simulation")
        .size(window_width as u32, window_height as u32)
        .view(view)
        .resized(resized)
        .raw_event(raw_window_event)
        .build()
        .expect("Failed to build window");

    let window = app.window(window_id).expect("Window was just created");
    let egui = Egui::from_window(&window);

    let (width, height) = window.inner_size_points();
    let bounds = WorldBounds::new(width, height);
    let simulator = FlockSimulator::new(FlockParams::default(), bounds);

    info!(
        "Started flock of {} boids in a {:.0}x{:.0} world",
        simulator.boids().len(),
        bounds.width,
        bounds.height
    );

    Model {
        simulator,
        sliders: SliderValues::default(),
        egui,
        debug_info: DebugInfo::default(),
        scheduler: StepScheduler::new(Instant::now()),
    }
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;

    ui::update_ui(&mut model.egui, &mut model.sliders, &mut model.simulator, &model.debug_info);

    // The gate keeps running while paused so resuming does not produce one huge step
    if let Some(delta_time_millis) = model.scheduler.tick(Instant::now()) {
        if !model.sliders.pause_simulation {
            model.simulator.step(delta_time_millis);
            model.debug_info.record_step(&model.simulator, delta_time_millis);
        }
    }
}

// Keep the world bounds in step with the window
pub fn resized(_app: &App, model: &mut Model, size: Vec2) {
    model.simulator.bounds.resize(size.x, size.y);
    debug!("World resized to {:.0}x{:.0}", size.x, size.y);
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}
