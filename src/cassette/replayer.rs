//! Replays recorded interactions from a cassette.

use std::collections::HashMap;

use super::format::{Cassette, Interaction};

/// Key for indexing interactions by port and method.
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
struct PortMethodKey {
    port: String,
    method: String,
}

/// Errors raised when a replay asks for an interaction the cassette lacks.
#[derive(Debug, thiserror::Error)]
pub enum ReplayError {
    /// No interaction was ever recorded for the port/method pair.
    #[error(
        "Cassette exhausted: no interactions recorded for port={port:?} method={method:?}. \
         Available port::method pairs: [{available}]"
    )]
    NotRecorded {
        /// Requested port.
        port: String,
        /// Requested method.
        method: String,
        /// Comma-separated `port::method` pairs present in the cassette.
        available: String,
    },
    /// Every recorded interaction for the pair has been consumed.
    #[error(
        "Cassette exhausted: all {count} interactions for port={port:?} method={method:?} \
         have been consumed. Last interaction was seq={last_seq}."
    )]
    Exhausted {
        /// Requested port.
        port: String,
        /// Requested method.
        method: String,
        /// Number of recorded interactions for the pair.
        count: usize,
        /// Sequence number of the last one.
        last_seq: u64,
    },
}

/// Replays interactions from a loaded cassette, serving them sequentially
/// per port/method pair.
pub struct CassetteReplayer {
    queues: HashMap<PortMethodKey, Vec<Interaction>>,
    cursors: HashMap<PortMethodKey, usize>,
}

impl CassetteReplayer {
    /// Create a new replayer from a loaded cassette.
    #[must_use]
    pub fn new(cassette: &Cassette) -> Self {
        let mut queues: HashMap<PortMethodKey, Vec<Interaction>> = HashMap::new();
        for interaction in &cassette.interactions {
            let key = PortMethodKey {
                port: interaction.port.clone(),
                method: interaction.method.clone(),
            };
            queues.entry(key).or_default().push(interaction.clone());
        }
        let cursors = queues.keys().map(|k| (k.clone(), 0)).collect();
        Self { queues, cursors }
    }

    /// Return the next interaction for the given port and method.
    ///
    /// # Errors
    ///
    /// Returns a [`ReplayError`] if the cassette has no (more) interactions
    /// for the pair, naming what was requested and what remains.
    pub fn next_interaction(
        &mut self,
        port: &str,
        method: &str,
    ) -> Result<&Interaction, ReplayError> {
        let key = PortMethodKey { port: port.to_string(), method: method.to_string() };

        let Some(queue) = self.queues.get(&key) else {
            let mut available: Vec<String> =
                self.queues.keys().map(|k| format!("{}::{}", k.port, k.method)).collect();
            available.sort();
            return Err(ReplayError::NotRecorded {
                port: port.to_string(),
                method: method.to_string(),
                available: available.join(", "),
            });
        };

        let cursor = self.cursors.entry(key).or_insert(0);
        let Some(interaction) = queue.get(*cursor) else {
            return Err(ReplayError::Exhausted {
                port: port.to_string(),
                method: method.to_string(),
                count: queue.len(),
                last_seq: queue.last().map_or(0, |i| i.seq),
            });
        };
        *cursor += 1;
        Ok(interaction)
    }
}
