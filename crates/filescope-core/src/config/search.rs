//! Search configuration.

use serde::{Deserialize, Serialize};

/// Settings for the recursive search engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Capacity of the channel used by background searches.
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            channel_capacity: default_channel_capacity(),
        }
    }
}

fn default_channel_capacity() -> usize {
    256
}
