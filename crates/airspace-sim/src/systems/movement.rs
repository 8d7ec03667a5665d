//! Kinematic update with per-axis boundary reflection.
//!
//! Each axis is handled independently: a move that would leave the field is
//! rejected for that axis (position unchanged) and the velocity component is
//! inverted so the next tick heads away from the wall.

use airspace_core::components::Aircraft;
use airspace_core::types::in_field;

/// Advance every active aircraft by one tick. Collided aircraft are not touched.
pub fn run(aircraft: &mut [Aircraft]) {
    for ac in aircraft.iter_mut() {
        advance(ac);
    }
}

/// Advance a single aircraft by its per-tick velocity.
pub fn advance(ac: &mut Aircraft) {
    if !ac.is_active() {
        return;
    }
    step_axis(&mut ac.x, &mut ac.vx);
    step_axis(&mut ac.y, &mut ac.vy);
}

fn step_axis(position: &mut f64, velocity: &mut f64) {
    let next = *position + *velocity;
    if in_field(next) {
        *position = next;
    } else {
        *velocity = -*velocity;
    }
}
