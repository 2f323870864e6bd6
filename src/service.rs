// Copyright 2019 Guillaume Becquin
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//     http://www.apache.org/licenses/LICENSE-2.0
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! # Sentiment classifier service
//! Holds a single classification capability, acquired once, and turns raw UTF-8 bytes into the
//! capability's rendered result. Build it at startup and share it (by reference or behind an
//! `Arc`) with whatever boundary receives the requests.
//!
//! ```no_run
//! use rust_sentiment::SentimentClassifierService;
//!
//! # fn main() -> anyhow::Result<()> {
//! let service = SentimentClassifierService::new_default()?;
//! let output = service.classify(b"I love this product")?;
//! # Ok(())
//! # }
//! ```

use crate::common::config::ServiceConfig;
use crate::common::error::{ClassifyError, PipelineError};
use crate::pipelines::classification::TextClassifier;
use crate::pipelines::sentiment::SentimentPipeline;
use tracing::{debug, debug_span};

/// # Service classifying raw byte buffers with a single capability
pub struct SentimentClassifierService<C> {
    classifier: C,
}

impl<C> SentimentClassifierService<C>
where
    C: TextClassifier,
{
    /// Wraps an already acquired classification capability.
    ///
    /// # Arguments
    ///
    /// * `classifier` - capability implementing `TextClassifier`, owned by the service for its whole lifetime
    pub fn new(classifier: C) -> SentimentClassifierService<C> {
        SentimentClassifierService { classifier }
    }

    /// Classifies a UTF-8 encoded byte buffer.
    ///
    /// The bytes are decoded, passed to the capability, and the capability's result is returned
    /// in its display form. Invalid UTF-8 fails before the capability is called. Errors raised by
    /// the capability are returned as-is in `ClassifyError::Capability`.
    ///
    /// # Arguments
    ///
    /// * `data` - `&[u8]` UTF-8 encoded text
    ///
    /// # Returns
    ///
    /// * `Result<String, ClassifyError<C::Error>>` rendered classification result
    ///
    /// # Example
    ///
    /// ```no_run
    /// # fn main() -> anyhow::Result<()> {
    /// use rust_sentiment::SentimentClassifierService;
    ///
    /// let service = SentimentClassifierService::new_default()?;
    /// let output = service.classify("This is terrible".as_bytes())?;
    /// assert!(output.contains("'NEGATIVE'"));
    /// # Ok(())
    /// # }
    /// ```
    pub fn classify(&self, data: &[u8]) -> Result<String, ClassifyError<C::Error>> {
        let _span = debug_span!("classify", bytes = data.len()).entered();
        let text = std::str::from_utf8(data)?;
        let output = self
            .classifier
            .classify(text)
            .map_err(ClassifyError::Capability)?;
        let rendered = output.to_string();
        debug!(result = %rendered, "classified");
        Ok(rendered)
    }

    /// Read-only access to the held capability.
    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    /// Consumes the service and returns the capability.
    pub fn into_inner(self) -> C {
        self.classifier
    }
}

impl SentimentClassifierService<SentimentPipeline> {
    /// Loads the default sentiment pipeline (DistilBERT finetuned on SST-2) and wraps it.
    pub fn new_default() -> Result<SentimentClassifierService<SentimentPipeline>, PipelineError> {
        SentimentClassifierService::from_config(&ServiceConfig::default())
    }

    /// Loads the sentiment pipeline described by `config` and wraps it.
    pub fn from_config(
        config: &ServiceConfig,
    ) -> Result<SentimentClassifierService<SentimentPipeline>, PipelineError> {
        Ok(SentimentClassifierService::new(SentimentPipeline::from_config(config)?))
    }
}
