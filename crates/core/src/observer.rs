//! Observer - the moving point of view
//!
//! Position is a world coordinate; heading is an angle in `[0, 2π)` measured
//! clockwise from the positive x-axis (screen y grows downwards). The step
//! vector is derived from the heading and only ever updated together with it.

use crate::draw::{Drawable, Renderer};
use crate::math::normalize;
use crate::types::{palette, Command, STEP_LENGTH, TURN_ANGLE};

/// Diameter of the position marker.
const MARKER_SIZE: f64 = 8.0;

/// Length of the heading line, in steps.
const HEADING_LINE_STEPS: f64 = 5.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Observer {
    x: f64,
    y: f64,
    heading: f64,
    heading_dx: f64,
    heading_dy: f64,
    step_length: f64,
    turn_angle: f64,
}

impl Observer {
    pub fn new(x: f64, y: f64, heading: f64) -> Self {
        Self::with_motion(x, y, heading, STEP_LENGTH, TURN_ANGLE)
    }

    /// Observer with a custom step length and turn increment.
    pub fn with_motion(x: f64, y: f64, heading: f64, step_length: f64, turn_angle: f64) -> Self {
        let mut observer = Self {
            x,
            y,
            heading: 0.0,
            heading_dx: step_length,
            heading_dy: 0.0,
            step_length,
            turn_angle,
        };
        observer.set_heading(heading);
        observer
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    pub fn heading(&self) -> f64 {
        self.heading
    }

    /// Step vector: `step_length * (cos, sin)` of the heading.
    pub fn heading_vector(&self) -> (f64, f64) {
        (self.heading_dx, self.heading_dy)
    }

    pub fn step_length(&self) -> f64 {
        self.step_length
    }

    pub fn turn_angle(&self) -> f64 {
        self.turn_angle
    }

    /// Set the heading and its step vector in one go.
    ///
    /// The stored angle is normalized, the vector uses the angle as given.
    pub fn set_heading(&mut self, angle: f64) {
        self.heading = normalize(angle);
        self.heading_dx = self.step_length * angle.cos();
        self.heading_dy = self.step_length * angle.sin();
    }

    /// Move `steps` steps along the heading; negative steps retreat.
    pub fn move_by(&mut self, steps: f64) {
        self.x += steps * self.heading_dx;
        self.y += steps * self.heading_dy;
    }

    /// Turn by `steps` turn increments; positive is clockwise on screen.
    pub fn turn(&mut self, steps: f64) {
        self.set_heading(self.heading + steps * self.turn_angle);
    }

    pub fn apply(&mut self, command: Command) {
        let (move_steps, turn_steps) = command.steps();
        if move_steps != 0.0 {
            self.move_by(move_steps);
        }
        if turn_steps != 0.0 {
            self.turn(turn_steps);
        }
    }
}

impl Drawable for Observer {
    fn draw(&self, gfx: &mut dyn Renderer) {
        gfx.draw_point(self.x, self.y, MARKER_SIZE, palette::OBSERVER);
        gfx.draw_line(
            self.x,
            self.y,
            self.x + HEADING_LINE_STEPS * self.heading_dx,
            self.y + HEADING_LINE_STEPS * self.heading_dy,
            palette::HEADING,
        );
    }
}
