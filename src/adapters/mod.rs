//! Adapter implementations of the platform ports.
//!
//! `live` probes the host, `recording` wraps live adapters and captures a
//! cassette, `replaying` serves a captured cassette back.

pub mod live;
pub mod recording;
pub mod replaying;
