//! Export contents of `juggle` folder
mod ball;
mod distance_queue;
mod juggle_errors;
mod movement;
mod settings;
mod tracker;
mod trajectory;

#[cfg(test)]
mod test_data;

pub use self::{
    ball::*,
    distance_queue::*,
    juggle_errors::*,
    movement::*,
    settings::*,
    tracker::*,
    trajectory::*,
};
