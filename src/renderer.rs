/*
 * Renderer Module
 *
 * This module turns the flock into draw calls. Each boid is a filled triangle
 * whose nose sits on the boid's position and points along its velocity.
 *
 * Drawing goes through the RenderSurface trait so the geometry can be checked
 * without a window. NannouSurface is the implementation used by the app; it
 * converts from simulation space (origin top-left, y down) to nannou's
 * centred, y-up window space.
 */

use nannou::prelude::*;

use crate::app::Model;
use crate::boid::Boid;
use crate::ui;
use crate::vector::Vec3;
use crate::{BOID_COLOR, HALF_SIZE_X, HALF_SIZE_Y};

pub trait RenderSurface {
    fn clear(&mut self);
    fn fill_triangle(&mut self, vertices: [Vec3; 3]);
}

// Triangle vertices in simulation space: nose, then the two tail corners
pub fn boid_triangle(boid: &Boid) -> [Vec3; 3] {
    let angle = boid.heading();
    let (sin, cos) = angle.sin_cos();
    let p = boid.position;
    let corner = |lx: f32, ly: f32| Vec3::new(p.x + lx * cos - ly * sin, p.y + lx * sin + ly * cos, p.z);

    [p, corner(-HALF_SIZE_X, HALF_SIZE_Y), corner(-HALF_SIZE_X, -HALF_SIZE_Y)]
}

// Clear the surface, then draw every boid
pub fn render_flock<S: RenderSurface>(surface: &mut S, boids: &[Boid]) {
    surface.clear();
    for boid in boids {
        surface.fill_triangle(boid_triangle(boid));
    }
}

pub struct NannouSurface<'a> {
    draw: &'a Draw,
    window_rect: Rect,
}

impl<'a> NannouSurface<'a> {
    pub fn new(draw: &'a Draw, window_rect: Rect) -> Self {
        Self { draw, window_rect }
    }

    fn to_screen(&self, v: Vec3) -> Point2 {
        pt2(self.window_rect.left() + v.x, self.window_rect.top() - v.y)
    }
}

impl RenderSurface for NannouSurface<'_> {
    fn clear(&mut self) {
        self.draw.background().color(BLACK);
    }

    fn fill_triangle(&mut self, vertices: [Vec3; 3]) {
        let (r, g, b) = BOID_COLOR;
        let points = vertices.map(|v| self.to_screen(v));
        self.draw.polygon().color(rgb8(r, g, b)).points(points);
    }
}

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    let window_rect = app.window_rect();

    let mut surface = NannouSurface::new(&draw, window_rect);
    render_flock(&mut surface, model.simulator.boids());

    if model.sliders.show_debug {
        ui::draw_debug_info(&draw, &model.debug_info, window_rect);
    }

    if let Err(err) = draw.to_frame(app, &frame) {
        log::error!("Failed to draw frame: {:?}", err);
    }

    if let Err(err) = model.egui.draw_to_frame(&frame) {
        log::error!("Failed to draw UI: {:?}", err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingSurface {
        clears: usize,
        triangles: Vec<[Vec3; 3]>,
    }

    impl RenderSurface for RecordingSurface {
        fn clear(&mut self) {
            self.clears += 1;
            self.triangles.clear();
        }

        fn fill_triangle(&mut self, vertices: [Vec3; 3]) {
            self.triangles.push(vertices);
        }
    }

    fn close(a: Vec3, b: Vec3) -> bool {
        a.distance(b) < 1e-4
    }

    #[test]
    fn triangle_faces_along_velocity() {
        let boid = Boid::new(Vec3::new(100.0, 100.0, 0.0), Vec3::new(5.0, 0.0, 0.0));
        let [nose, left, right] = boid_triangle(&boid);

        assert_eq!(nose, boid.position);
        assert!(close(left, Vec3::new(90.0, 105.0, 0.0)));
        assert!(close(right, Vec3::new(90.0, 95.0, 0.0)));
    }

    #[test]
    fn triangle_rotates_with_heading() {
        let boid = Boid::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 3.0, 0.0));
        let [_, left, right] = boid_triangle(&boid);

        // heading straight down the screen: tail sits above the nose
        assert!(close(left, Vec3::new(-5.0, -10.0, 0.0)));
        assert!(close(right, Vec3::new(5.0, -10.0, 0.0)));
    }

    #[test]
    fn every_frame_clears_before_drawing() {
        let boids = vec![
            Boid::new(Vec3::new(1.0, 1.0, 0.0), Vec3::new(1.0, 0.0, 0.0)),
            Boid::at_rest(Vec3::new(2.0, 2.0, 0.0)),
        ];
        let mut surface = RecordingSurface::default();

        render_flock(&mut surface, &boids);
        render_flock(&mut surface, &boids[..1]);

        assert_eq!(surface.clears, 2);
        assert_eq!(surface.triangles.len(), 1);
    }
}
