//! Smoothed follow camera. Drives rendering only.

use chamber_core::constants::{CAMERA_SMOOTHING, WORLD_HEIGHT, WORLD_WIDTH};
use chamber_core::types::{Camera, Position};

/// Ease the camera toward centering `focus`, clamped so the viewport stays
/// inside the world.
pub fn run(camera: &mut Camera, focus: Position) {
    let target_x = focus.x - camera.viewport_width / 2.0;
    let target_y = focus.y - camera.viewport_height / 2.0;
    camera.x += (target_x - camera.x) * CAMERA_SMOOTHING;
    camera.y += (target_y - camera.y) * CAMERA_SMOOTHING;
    camera.x = camera.x.clamp(0.0, (WORLD_WIDTH - camera.viewport_width).max(0.0));
    camera.y = camera.y.clamp(0.0, (WORLD_HEIGHT - camera.viewport_height).max(0.0));
}

/// Place the camera on `focus` immediately.
pub fn snap(camera: &mut Camera, focus: Position) {
    camera.x = (focus.x - camera.viewport_width / 2.0)
        .clamp(0.0, (WORLD_WIDTH - camera.viewport_width).max(0.0));
    camera.y = (focus.y - camera.viewport_height / 2.0)
        .clamp(0.0, (WORLD_HEIGHT - camera.viewport_height).max(0.0));
}
