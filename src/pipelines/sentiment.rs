// Copyright 2019-present, the HuggingFace Inc. team, The Google AI Language Team and Facebook, Inc.
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

//! # Sentiment Analysis pipeline
//! Predicts the binary sentiment for a sentence with a rust-bert `SentimentModel`. By default,
//! the dependencies for this model will be downloaded for a DistilBERT model finetuned on SST-2,
//! the same checkpoint the `sentiment-analysis` pipeline of the Python Transformers library loads.
//! The dependencies are cached by rust-bert (`~/.cache/.rustbert` unless `RUSTBERT_CACHE` is set).
//!
//! ```no_run
//! use rust_sentiment::pipelines::classification::TextClassifier;
//! use rust_sentiment::pipelines::sentiment::SentimentPipeline;
//!
//! # fn main() -> anyhow::Result<()> {
//! let sentiment_pipeline = SentimentPipeline::new(Default::default())?;
//! let output = sentiment_pipeline.classify("I love this product")?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```
//!
//! Output: \
//! ```text
//! [{'label': 'POSITIVE', 'score': 0.9998...}]
//! ```

use crate::common::config::ServiceConfig;
use crate::common::error::PipelineError;
use crate::pipelines::classification::{Label, Labels, TextClassifier};
use rust_bert::pipelines::sentiment::{Sentiment, SentimentModel, SentimentPolarity};
use rust_bert::pipelines::sequence_classification::SequenceClassificationConfig as SentimentConfig;
use std::sync::Mutex;
use tracing::{debug, info};

/// # SentimentPipeline to perform sentiment analysis
///
/// rust-bert models can be sent across threads but not shared between them: the model sits
/// behind a mutex and concurrent calls run one at a time.
pub struct SentimentPipeline {
    model: Mutex<SentimentModel>,
}

impl SentimentPipeline {
    /// Build a new `SentimentPipeline`, loading (and downloading if needed) the model resources.
    ///
    /// # Arguments
    ///
    /// * `sentiment_config` - `SentimentConfig` object containing the resource references (model, vocabulary, configuration) and device placement (CPU/GPU)
    ///
    /// # Example
    ///
    /// ```no_run
    /// # fn main() -> anyhow::Result<()> {
    /// use rust_sentiment::pipelines::sentiment::SentimentPipeline;
    ///
    /// let sentiment_pipeline = SentimentPipeline::new(Default::default())?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(sentiment_config: SentimentConfig) -> Result<SentimentPipeline, PipelineError> {
        let device = sentiment_config.device;
        let model = SentimentModel::new(sentiment_config)?;
        info!(?device, "sentiment model loaded");
        Ok(SentimentPipeline {
            model: Mutex::new(model),
        })
    }

    /// Build a new `SentimentPipeline` from a service configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - `ServiceConfig` describing device placement
    pub fn from_config(config: &ServiceConfig) -> Result<SentimentPipeline, PipelineError> {
        SentimentPipeline::new(config.sentiment_config())
    }
}

impl TextClassifier for SentimentPipeline {
    type Output = Labels;
    type Error = PipelineError;

    /// Extract the sentiment of a single text.
    ///
    /// # Arguments
    ///
    /// * `text` - `&str` text to extract the sentiment from.
    ///
    /// # Returns
    /// * `Result<Labels, PipelineError>` single label extracted from the text.
    fn classify(&self, text: &str) -> Result<Labels, PipelineError> {
        let model = self.model.lock().map_err(|_| PipelineError::Poisoned)?;
        let sentiments = model.predict(&[text]);
        debug!(chars = text.len(), "sentiment prediction done");
        Ok(sentiments.into_iter().map(Label::from).collect::<Vec<_>>().into())
    }
}

impl From<Sentiment> for Label {
    fn from(sentiment: Sentiment) -> Self {
        let label = match sentiment.polarity {
            SentimentPolarity::Positive => "POSITIVE",
            SentimentPolarity::Negative => "NEGATIVE",
        };
        Label::new(label, sentiment.score)
    }
}
