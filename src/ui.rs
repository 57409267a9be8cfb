/*
 * UI Module
 *
 * This module contains functions for creating and updating the user interface
 * using nannou_egui. Every slider edits a raw value in SliderValues; changed
 * sliders are routed through the binding module after the panel is built.
 */

use nannou_egui::{egui, Egui};

use crate::binding::Control;
use crate::debug::DebugInfo;
use crate::params::SliderValues;
use crate::physics::FlockSimulator;

pub fn slider_label(control: Control) -> &'static str {
    match control {
        Control::BoidNum => "Number of Boids (x3)",
        Control::SeparationDistance => "Separation Distance",
        Control::SeparationFactor => "Separation Factor (%)",
        Control::CohesionDistance => "Cohesion Distance (x5)",
        Control::CohesionFactor => "Cohesion Factor (%)",
        Control::AlignmentFactor => "Alignment Factor (%)",
        Control::SpeedLimit => "Speed Limit (x5)",
        Control::SpeedConvergenceFactor => "Speed Convergence (%)",
    }
}

pub fn slider_range(control: Control) -> std::ops::RangeInclusive<f32> {
    match control {
        Control::BoidNum => SliderValues::get_boid_num_range(),
        Control::SeparationDistance | Control::CohesionDistance => SliderValues::get_distance_range(),
        Control::SeparationFactor => SliderValues::get_separation_factor_range(),
        Control::SpeedLimit => SliderValues::get_speed_limit_range(),
        Control::CohesionFactor | Control::AlignmentFactor | Control::SpeedConvergenceFactor => {
            SliderValues::get_percent_range()
        }
    }
}

pub fn raw_value_mut(sliders: &mut SliderValues, control: Control) -> &mut f32 {
    match control {
        Control::BoidNum => &mut sliders.boid_num,
        Control::SeparationDistance => &mut sliders.separation_distance,
        Control::SeparationFactor => &mut sliders.separation_factor,
        Control::CohesionDistance => &mut sliders.cohesion_distance,
        Control::CohesionFactor => &mut sliders.cohesion_factor,
        Control::AlignmentFactor => &mut sliders.alignment_factor,
        Control::SpeedLimit => &mut sliders.speed_limit,
        Control::SpeedConvergenceFactor => &mut sliders.speed_convergence_factor,
    }
}

pub fn raw_value(sliders: &SliderValues, control: Control) -> f32 {
    match control {
        Control::BoidNum => sliders.boid_num,
        Control::SeparationDistance => sliders.separation_distance,
        Control::SeparationFactor => sliders.separation_factor,
        Control::CohesionDistance => sliders.cohesion_distance,
        Control::CohesionFactor => sliders.cohesion_factor,
        Control::AlignmentFactor => sliders.alignment_factor,
        Control::SpeedLimit => sliders.speed_limit,
        Control::SpeedConvergenceFactor => sliders.speed_convergence_factor,
    }
}

// Push every changed raw value into the simulator
pub fn apply_changes(simulator: &mut FlockSimulator, sliders: &SliderValues, changed: &[Control]) {
    for &control in changed {
        control.apply(simulator, raw_value(sliders, control));
    }
}

// Update the UI and apply any slider changes to the simulator
pub fn update_ui(
    egui: &mut Egui,
    sliders: &mut SliderValues,
    simulator: &mut FlockSimulator,
    debug_info: &DebugInfo,
) {
    let mut changed = Vec::new();

    let ctx = egui.begin_frame();

    egui::Window::new("Simulation Controls")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.collapsing("Flock", |ui| {
                for control in [Control::BoidNum, Control::SpeedLimit, Control::SpeedConvergenceFactor] {
                    let slider = egui::Slider::new(raw_value_mut(sliders, control), slider_range(control))
                        .text(slider_label(control));
                    if ui.add(slider).changed() {
                        changed.push(control);
                    }
                }
            });

            ui.collapsing("Flocking Behavior", |ui| {
                for control in [
                    Control::SeparationDistance,
                    Control::SeparationFactor,
                    Control::CohesionDistance,
                    Control::CohesionFactor,
                    Control::AlignmentFactor,
                ] {
                    let slider = egui::Slider::new(raw_value_mut(sliders, control), slider_range(control))
                        .text(slider_label(control));
                    if ui.add(slider).changed() {
                        changed.push(control);
                    }
                }
            });

            ui.collapsing("Statistics", |ui| {
                for line in debug_info.lines() {
                    ui.label(line);
                }
            });

            ui.checkbox(&mut sliders.show_debug, "Show Debug Info");
            ui.checkbox(&mut sliders.pause_simulation, "Pause Simulation");
        });

    apply_changes(simulator, sliders, &changed);
}

// Draw debug information on the screen
pub fn draw_debug_info(draw: &nannou::Draw, debug_info: &DebugInfo, window_rect: nannou::geom::Rect) {
    let margin = 20.0;
    let line_height = 20.0;
    let lines = debug_info.lines();
    let panel_width = 200.0;
    let panel_height = line_height * lines.len() as f32 + margin;
    let panel_x = window_rect.right() - panel_width / 2.0;
    let panel_y = window_rect.top() - panel_height / 2.0;

    draw.rect()
        .x_y(panel_x, panel_y)
        .w_h(panel_width, panel_height)
        .color(nannou::color::rgba(0.0, 0.0, 0.0, 0.7));

    let text_x = window_rect.right() - panel_width + margin;
    let text_y = window_rect.top() - margin;

    for (i, text) in lines.iter().enumerate() {
        let y = text_y - (i as f32 * line_height);
        draw.text(text)
            .x_y(text_x + 70.0, y)
            .color(nannou::color::WHITE)
            .font_size(14);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{FlockParams, WorldBounds};

    #[test]
    fn every_control_has_a_slider_range_containing_its_default() {
        let sliders = SliderValues::default();
        for control in Control::ALL {
            let value = raw_value(&sliders, control);
            assert!(slider_range(control).contains(&value), "{}", control);
        }
    }

    #[test]
    fn raw_value_reads_the_field_edited_by_its_slider() {
        let mut sliders = SliderValues::default();
        for (i, control) in Control::ALL.into_iter().enumerate() {
            *raw_value_mut(&mut sliders, control) = i as f32 + 0.5;
        }

        for (i, control) in Control::ALL.into_iter().enumerate() {
            assert_eq!(raw_value(&sliders, control), i as f32 + 0.5, "{}", control);
        }
    }

    #[test]
    fn changed_sliders_are_applied_through_their_transform() {
        let params = FlockParams { target_population: 3, ..FlockParams::default() };
        let mut simulator = FlockSimulator::with_seed(params, WorldBounds::default(), 9);
        let mut sliders = SliderValues::default();
        sliders.cohesion_distance = 10.0;
        sliders.boid_num = 2.0;
        sliders.alignment_factor = 50.0;

        apply_changes(&mut simulator, &sliders, &[Control::CohesionDistance, Control::BoidNum]);

        assert_eq!(simulator.params.cohesion_distance, 2500.0);
        assert_eq!(simulator.boids().len(), 6);
        // untouched controls are not applied
        assert_eq!(simulator.params.alignment_factor, 0.05);
    }
}
