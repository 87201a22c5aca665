mod bootstrap_settings;
mod env_provider;
pub mod database;
pub mod errors;
pub mod logging;

pub use bootstrap_settings::BootstrapSettings;
pub use database::{init_database, migrate_database};
#[cfg(test)]
pub use env_provider::MockEnvironment;
pub use env_provider::{EnvironmentProvider, SystemEnvironment};
pub use errors::ApplicationError;
pub use logging::init_logging;
