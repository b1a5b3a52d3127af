use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use tracing::debug;

use super::{FetchError, RemoteDataPort};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Outcome {
    Respond(String),
    Fail(String),
}

/// One recorded invocation of [`StubDataPort::fetch_data`].
///
/// `fetch_data` takes no arguments, so the record carries only the 1-based
/// position of the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchCall {
    pub sequence: usize,
}

/// In-process stand-in for a remote data source.
///
/// Install an outcome with [`respond_with`](Self::respond_with) or
/// [`fail_with`](Self::fail_with); the latest one wins. Every call returns it
/// without awaiting and is appended to the call record.
#[derive(Debug, Default)]
pub struct StubDataPort {
    outcome: Mutex<Option<Outcome>>,
    calls: Mutex<Vec<FetchCall>>,
}

impl StubDataPort {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn responding(text: impl Into<String>) -> Self {
        let stub = Self::new();
        stub.respond_with(text);
        stub
    }

    pub fn failing(message: impl Into<String>) -> Self {
        let stub = Self::new();
        stub.fail_with(message);
        stub
    }

    pub fn respond_with(&self, text: impl Into<String>) {
        *lock(&self.outcome) = Some(Outcome::Respond(text.into()));
    }

    pub fn fail_with(&self, message: impl Into<String>) {
        *lock(&self.outcome) = Some(Outcome::Fail(message.into()));
    }

    pub fn calls(&self) -> Vec<FetchCall> {
        lock(&self.calls).clone()
    }

    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    pub fn was_called(&self) -> bool {
        self.call_count() > 0
    }

    /// Clears the call record. The configured outcome is kept.
    pub fn reset_calls(&self) {
        lock(&self.calls).clear();
    }
}

#[async_trait]
impl RemoteDataPort for StubDataPort {
    async fn fetch_data(&self) -> Result<String, FetchError> {
        let sequence = {
            let mut calls = lock(&self.calls);
            let sequence = calls.len() + 1;
            calls.push(FetchCall { sequence });
            sequence
        };

        let outcome = lock(&self.outcome).clone();
        debug!(sequence, ?outcome, "Stub fetch invoked");
        match outcome {
            Some(Outcome::Respond(text)) => Ok(text),
            Some(Outcome::Fail(message)) => Err(FetchError::Simulated { message }),
            None => Err(FetchError::Unconfigured),
        }
    }
}

// Poisoning is ignored: every write leaves the data consistent.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
