//! Cassette format for recording and replaying platform interactions.

pub mod format;
pub mod recorder;
pub mod replayer;
