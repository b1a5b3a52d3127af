use std::sync::Arc;

use serde::Serialize;
use tracing::{info, instrument, warn};

use super::counter::{Command, Counter};
use super::remote::{FetchError, RemoteDataPort};
use super::validators::{is_valid_email, is_valid_phone_number};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HarnessInput {
    pub script: Vec<Command>,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub counter: i64,
    pub email_valid: bool,
    pub phone_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fetch_error: Option<String>,
}

/// Wires a counter, the validators and an injected data port together.
pub struct Harness {
    port: Arc<dyn RemoteDataPort>,
}

impl Harness {
    pub fn new(port: Arc<dyn RemoteDataPort>) -> Self {
        Self { port }
    }

    /// Runs the counter script and validators only; the port is not touched.
    pub fn evaluate(&self, input: &HarnessInput) -> Report {
        let mut counter = Counter::new();
        let counter = counter.replay(input.script.iter().copied());
        Report {
            counter,
            email_valid: is_valid_email(&input.email),
            phone_valid: is_valid_phone_number(&input.phone),
            data: None,
            fetch_error: None,
        }
    }

    /// Like [`evaluate`](Self::evaluate), then fetches once. A fetch failure
    /// is returned as is.
    #[instrument(name = "harness_run", level = "info", skip_all, fields(commands = input.script.len()))]
    pub async fn run(&self, input: &HarnessInput) -> Result<Report, FetchError> {
        let mut report = self.evaluate(input);
        report.data = Some(self.port.fetch_data().await?);
        info!(counter = report.counter, "Harness run complete");
        Ok(report)
    }

    /// Like [`run`](Self::run), but a fetch failure is logged and recorded in
    /// `fetch_error` instead of being returned.
    #[instrument(name = "harness_run_or_report", level = "info", skip_all, fields(commands = input.script.len()))]
    pub async fn run_or_report(&self, input: &HarnessInput) -> Report {
        let mut report = self.evaluate(input);
        match self.port.fetch_data().await {
            Ok(data) => report.data = Some(data),
            Err(e) => {
                warn!(error = %e, "Fetch failed, continuing without data");
                report.fetch_error = Some(e.to_string());
            }
        }
        info!(counter = report.counter, "Harness run complete");
        report
    }
}
