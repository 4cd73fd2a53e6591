//! Recording adapters that capture interactions to cassettes.

pub mod command;

pub use command::RecordingCommandRunner;

use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;

use crate::cassette::recorder::CassetteRecorder;

/// Record a `Result<T, E>` interaction.
///
/// Mirror of `replaying::replay_result`. `Ok(v)` is stored as `{"ok": v}` and
/// `Err(e)` as `{"err": e.to_string()}`.
pub(crate) fn record_result<T, E, I>(
    recorder: &Arc<Mutex<CassetteRecorder>>,
    port: &str,
    method: &str,
    input: &I,
    result: &Result<T, E>,
) where
    T: Serialize,
    E: std::fmt::Display,
    I: Serialize,
{
    let input_json = serde_json::to_value(input).unwrap_or_default();
    let output_json = match result {
        Ok(v) => serde_json::json!({ "ok": serde_json::to_value(v).unwrap_or_default() }),
        Err(e) => serde_json::json!({ "err": e.to_string() }),
    };

    let mut guard = recorder.lock().unwrap_or_else(PoisonError::into_inner);
    guard.record(port, method, input_json, output_json);
}
