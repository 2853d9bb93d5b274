pub mod config;
pub mod coordinator;
pub mod elapsed;
pub mod errors;
pub mod net;

#[cfg(test)]
mod test_server;

pub use config::FetchConfig;
pub use coordinator::{FetchCoordinator, Report};
pub use errors::{ConfigError, FetchError};
