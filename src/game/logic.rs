//! Flight physics and the per-step state machine.
//!
//! One call to [`step`] advances a flight by `dt` seconds: apply the held
//! controls, measure altitude, resolve bounds exits and touchdowns, then
//! integrate. The order matters. Touchdown is judged on the state the
//! craft arrived with, so a frame that reaches the surface never also
//! integrates.

use super::types::{
    InputState, Lander, Playfield, GRAVITY, MAX_LANDING_SPEED, MAX_LANDING_TILT_DEG,
    ROTATION_STEP_DEG, THRUST_ACCEL,
};

/// Source of ground clearance readings for the flight model.
///
/// `clearance` returns the vertical distance from `(x, y)` down to the
/// surface, and 0 at or below it. [`step`] clamps the reading to
/// non-negative either way, and a NaN reading collapses to ground
/// contact rather than poisoning the flight.
pub trait GroundProbe {
    fn clearance(&self, x: f64, y: f64) -> f64;
}

/// Advance the flight by `dt` seconds under the held controls.
///
/// Terminal flights are left untouched; restarting is the session's job.
pub fn step(
    lander: &mut Lander,
    dt: f64,
    input: InputState,
    field: Playfield,
    ground: &impl GroundProbe,
) {
    if lander.is_down() {
        return;
    }

    // Controls first, so a held rotation affects this frame's thrust
    // vector. Opposing rotations cancel.
    if input.rotate_left {
        lander.rotation -= ROTATION_STEP_DEG;
    }
    if input.rotate_right {
        lander.rotation += ROTATION_STEP_DEG;
    }
    lander.thruster_on = input.thrust;

    lander.altitude = ground.clearance(lander.x, lander.y).max(0.0);

    // Leaving the sides or the top is unsurvivable.
    if lander.x < 0.0 || lander.x >= field.width || lander.y < 0.0 {
        lander.crashed = true;
        return;
    }

    // On contact, judge the touchdown with the state the craft arrived
    // with. No integration happens on the contact frame.
    if lander.altitude <= 0.0 {
        if touchdown_is_safe(lander) {
            lander.landed = true;
        } else {
            lander.crashed = true;
        }
        return;
    }

    integrate(lander, dt);
}

/// Slow enough on both axes and close enough to upright.
fn touchdown_is_safe(lander: &Lander) -> bool {
    lander.x_speed.abs() < MAX_LANDING_SPEED
        && lander.y_speed.abs() < MAX_LANDING_SPEED
        && lander.heading().abs() < MAX_LANDING_TILT_DEG
}

/// Semi-implicit Euler: velocities update first and the new velocities
/// move the craft, each axis in turn.
fn integrate(lander: &mut Lander, dt: f64) {
    let thrust = if lander.thruster_on { THRUST_ACCEL } else { 0.0 };
    let radians = lander.rotation.to_radians();

    // Gravity pulls down (+y); the engine pushes along the craft axis.
    let y_accel = GRAVITY - radians.cos() * thrust;
    let x_accel = radians.sin() * thrust;

    lander.y_speed += y_accel * dt;
    lander.y += lander.y_speed * dt;
    lander.x_speed += x_accel * dt;
    lander.x += lander.x_speed * dt;
}
