pub mod config;
pub mod error;

pub use config::{Config, DeviceOption, ServiceConfig};
pub use error::{ClassifyError, PipelineError};
