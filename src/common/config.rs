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

use crate::common::error::PipelineError;
use rust_bert::pipelines::sequence_classification::SequenceClassificationConfig as SentimentConfig;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tch::Device;

/// # Utility to deserialize JSON config files
pub trait Config
where
    for<'de> Self: Deserialize<'de>,
{
    /// Loads a `Config` object from a JSON file.
    ///
    /// # Arguments
    ///
    /// * `path` - `Path` to the configuration JSON file.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use rust_sentiment::{Config, ServiceConfig};
    /// use std::path::Path;
    ///
    /// # fn main() -> Result<(), rust_sentiment::PipelineError> {
    /// let config_path = Path::new("path/to/service.json");
    /// let config = ServiceConfig::from_file(config_path)?;
    /// # Ok(())
    /// # }
    /// ```
    fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, PipelineError> {
        let f = File::open(path)?;
        let br = BufReader::new(f);
        let config: Self = serde_json::from_reader(br)?;
        Ok(config)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// # Device the sentiment model is placed on
pub enum DeviceOption {
    /// First CUDA device if available, CPU otherwise
    Auto,
    Cpu,
    /// First CUDA device
    Cuda,
}

impl DeviceOption {
    pub fn device(self) -> Device {
        match self {
            DeviceOption::Auto => Device::cuda_if_available(),
            DeviceOption::Cpu => Device::Cpu,
            DeviceOption::Cuda => Device::Cuda(0),
        }
    }
}

impl Default for DeviceOption {
    fn default() -> Self {
        DeviceOption::Auto
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
/// # Configuration for the sentiment classification service
///
/// Only the device placement can be chosen. The model is always the default rust-bert sentiment
/// model (DistilBERT finetuned on SST-2). An empty object (or no file at all) places it on the GPU
/// when one is available.
pub struct ServiceConfig {
    pub device: DeviceOption,
}

impl Config for ServiceConfig {}

impl ServiceConfig {
    /// Loads the configuration from `path`, or returns the default configuration if no path is
    /// given.
    pub fn load(path: Option<&Path>) -> Result<Self, PipelineError> {
        match path {
            Some(path) => ServiceConfig::from_file(path),
            None => Ok(ServiceConfig::default()),
        }
    }

    /// Builds the default rust-bert `SentimentConfig`, placed on the configured device.
    pub fn sentiment_config(&self) -> SentimentConfig {
        let mut sentiment_config = SentimentConfig::default();
        sentiment_config.device = self.device.device();
        sentiment_config
    }
}
