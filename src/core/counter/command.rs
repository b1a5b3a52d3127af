use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Increment,
    Decrement,
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("invalid counter command: {0}")]
    Decode(#[from] serde_json::Error),
}

impl Command {
    pub fn to_bytes(&self) -> Result<Vec<u8>, CommandError> {
        let bytes = serde_json::to_vec(self)?;
        debug!("Serialized command: {:?}", self);
        Ok(bytes)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CommandError> {
        let command = serde_json::from_slice(bytes)?;
        debug!("Deserialized command: {:?}", command);
        Ok(command)
    }

    /// Parses a JSON array such as `["Increment","Decrement"]`.
    /// Blank input is an empty script.
    pub fn parse_script(script: &str) -> Result<Vec<Self>, CommandError> {
        if script.trim().is_empty() {
            return Ok(Vec::new());
        }
        let commands: Vec<Self> = serde_json::from_str(script)?;
        debug!(count = commands.len(), "Parsed counter script");
        Ok(commands)
    }
}
