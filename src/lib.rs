pub mod core;
pub mod telemetry;


pub use crate::core::{
    is_valid_email, is_valid_phone_number, Command, CommandError, Counter, FetchCall, FetchError,
    Harness, HarnessInput, HttpDataPort, HttpPortConfig, RemoteDataPort, Report, StubDataPort,
};
