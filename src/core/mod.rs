pub mod counter;
pub mod harness;
pub mod remote;
pub mod validators;

pub use counter::{Command, CommandError, Counter};
pub use harness::{Harness, HarnessInput, Report};
pub use remote::{FetchCall, FetchError, HttpDataPort, HttpPortConfig, RemoteDataPort, StubDataPort};
pub use validators::{is_valid_email, is_valid_phone_number};
