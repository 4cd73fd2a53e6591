//! Replaying adapters that replay recorded interactions.

pub mod command;

pub use command::ReplayingCommandRunner;

use serde::de::DeserializeOwned;

/// Decode a recorded `Result<T, E>` interaction.
///
/// Mirror of `recording::record_result`: `{"ok": v}` yields `Ok(v)` and
/// `{"err": msg}` yields `Err(msg)`.
pub(crate) fn replay_result<T>(
    output: &serde_json::Value,
) -> Result<T, Box<dyn std::error::Error + Send + Sync>>
where
    T: DeserializeOwned,
{
    if let Some(err) = output.get("err") {
        let msg = err.as_str().unwrap_or("unknown error").to_string();
        return Err(msg.into());
    }
    let value = output.get("ok").ok_or("recorded interaction has neither `ok` nor `err`")?;
    Ok(T::deserialize(value)?)
}
