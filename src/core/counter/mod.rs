use tracing::instrument;

pub mod command;

pub use command::{Command, CommandError};

/// A signed counter that starts at zero and moves one step at a time.
///
/// Steps saturate at `i64::MIN` and `i64::MAX`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Counter {
    value: i64,
}

impl Counter {
    pub fn new() -> Self {
        tracing::debug!("Creating a new counter at 0");
        Self::default()
    }

    pub fn current_value(&self) -> i64 {
        self.value
    }

    #[instrument(name = "increment_counter", level = "debug", skip(self), fields(from = self.value))]
    pub fn increment(&mut self) {
        if self.value == i64::MAX {
            tracing::warn!("Counter saturated at upper bound");
            return;
        }
        self.value += 1;
        tracing::debug!("Counter incremented to: {}", self.value);
    }

    #[instrument(name = "decrement_counter", level = "debug", skip(self), fields(from = self.value))]
    pub fn decrement(&mut self) {
        if self.value == i64::MIN {
            tracing::warn!("Counter saturated at lower bound");
            return;
        }
        self.value -= 1;
        tracing::debug!("Counter decremented to: {}", self.value);
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Increment => self.increment(),
            Command::Decrement => self.decrement(),
        }
    }

    /// Replays `commands` in order and returns the resulting value.
    pub fn replay<I>(&mut self, commands: I) -> i64
    where
        I: IntoIterator<Item = Command>,
    {
        for command in commands {
            self.apply(command);
        }
        self.value
    }

    #[cfg(test)]
    pub(crate) fn at(value: i64) -> Self {
        Self { value }
    }
}
