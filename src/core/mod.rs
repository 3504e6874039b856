pub mod classify;
pub mod fact;
pub mod service;

pub use crate::domain::model::{ClassificationResult, FactOutcome, Property};
pub use crate::domain::ports::{ConfigProvider, FactProvider};
pub use crate::utils::error::Result;
pub use service::ClassificationService;
