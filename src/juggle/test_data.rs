use crate::juggle::{TrackerSettings, VerticalAxis};
use crate::utils::Circle;

// Image coordinates: rows grow downwards and hands sit on row 500
pub fn image_settings() -> TrackerSettings {
    TrackerSettings {
        vertical_axis: VerticalAxis::Down,
        hand_height: 500.0,
        launch_velocity: 2.0,
    }
}

// One throw from (x0, y0): 20 px/frame up, 2 px/frame² gravity, apex 100 px above
// the start on frame 10, back at the start row on frame 20. Frames start at t = 1.
pub fn arc_frames(x0: f32, y0: f32, dx: f32, frames: usize) -> Vec<Circle> {
    (1..=frames)
        .map(|t| {
            let t = t as f32;
            Circle::from_xyr(x0 + dx * t, y0 - (20.0 * t - t * t), 10.0)
        })
        .collect()
}

// Ball resting in a hand
pub fn hand_frames(x: f32, y: f32, frames: usize) -> Vec<Circle> {
    vec![Circle::from_xyr(x, y, 10.0); frames]
}
