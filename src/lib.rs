pub mod adapters;
pub mod api;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::NumbersApiClient;
pub use api::{router, serve, AppState};
pub use config::ServerConfig;
pub use core::ClassificationService;
pub use domain::model::{ClassificationError, ClassificationResult, Property};
pub use utils::error::{ClassifyError, Result};
