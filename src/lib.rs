//! Frame-to-frame tracking of juggling balls.
//!
//! The external detector reports circles per frame; [`juggle::JuggleTracker`] matches
//! them to named [`juggle::Ball`]s, smooths their displacement and classifies where
//! each ball is in the juggling cycle.
pub mod juggle;
pub mod utils;
