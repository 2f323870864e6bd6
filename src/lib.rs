//! Load-once sentiment classification over [rust-bert](https://crates.io/crates/rust-bert) pipelines.
//!
//! The crate exposes a single service operation: decode a byte buffer as UTF-8, pass the text to a
//! sentiment classification capability, and return the capability's result as a display string.
//! The capability is acquired once when the service is built and reused by every call.
//!
//! # Quick Start
//!
//! The default capability is a rust-bert `SentimentModel`: DistilBERT finetuned on SST-2,
//! downloaded on first use and cached locally. `tch` requires a libtorch installation, see the
//! rust-bert documentation for the supported versions.
//!
//! ```no_run
//! use rust_sentiment::SentimentClassifierService;
//!
//! # fn main() -> anyhow::Result<()> {
//! let service = SentimentClassifierService::new_default()?;
//! let output = service.classify(b"I love this product")?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```
//!
//! Output: \
//! ```text
//! [{'label': 'POSITIVE', 'score': 0.9998...}]
//! ```
//!
//! # Capabilities
//!
//! The service depends on the `TextClassifier` trait only. Any implementation can be wrapped,
//! which is how the tests run without a model:
//!
//! ```
//! use rust_sentiment::pipelines::classification::{Label, Labels, TextClassifier};
//! use rust_sentiment::SentimentClassifierService;
//! use std::convert::Infallible;
//!
//! struct Neutral;
//!
//! impl TextClassifier for Neutral {
//!     type Output = Labels;
//!     type Error = Infallible;
//!
//!     fn classify(&self, _text: &str) -> Result<Labels, Infallible> {
//!         Ok(Labels::from(vec![Label::new("NEUTRAL", 1.0)]))
//!     }
//! }
//!
//! let service = SentimentClassifierService::new(Neutral);
//! assert_eq!(
//!     service.classify(b"anything").unwrap(),
//!     "[{'label': 'NEUTRAL', 'score': 1.0}]"
//! );
//! assert!(service.classify(b"\xff\xfe").is_err());
//! ```
//!
//! # Configuration
//!
//! The model is always the default rust-bert sentiment model. `ServiceConfig` only selects the
//! device it is placed on, and can be read from a JSON file with the `Config` trait:
//!
//! ```json
//! {
//!   "device": "cpu"
//! }
//! ```

pub mod common;
pub mod pipelines;
pub mod service;

pub use common::config::{Config, DeviceOption, ServiceConfig};
pub use common::error::{ClassifyError, PipelineError};
pub use pipelines::classification::{Label, Labels, TextClassifier};
pub use pipelines::sentiment::SentimentPipeline;
pub use service::SentimentClassifierService;
