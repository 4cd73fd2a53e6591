//! Cassette format for recording and replaying analyzer runs.

pub mod format;
pub mod recorder;
pub mod replayer;
