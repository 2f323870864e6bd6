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

use rust_bert::RustBertError;
use std::str::Utf8Error;
use thiserror::Error;

/// Failure of a single `classify` call on the service.
///
/// The capability error is carried unchanged: its message and source chain are the ones the
/// capability produced.
#[derive(Error, Debug)]
pub enum ClassifyError<E>
where
    E: std::error::Error + 'static,
{
    #[error("Decoding error: input is not valid UTF-8 ({0})")]
    Decoding(#[from] Utf8Error),

    #[error(transparent)]
    Capability(E),
}

impl<E> ClassifyError<E>
where
    E: std::error::Error + 'static,
{
    /// Returns the capability error, if the failure came from the capability.
    pub fn capability(&self) -> Option<&E> {
        match self {
            ClassifyError::Capability(error) => Some(error),
            ClassifyError::Decoding(_) => None,
        }
    }
}

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Model error: {0}")]
    Model(#[from] RustBertError),

    #[error("Model lock poisoned by a panicked inference")]
    Poisoned,

    #[error("Invalid configuration error: {0}")]
    Config(String),
}

impl From<std::io::Error> for PipelineError {
    fn from(error: std::io::Error) -> Self {
        PipelineError::Config(error.to_string())
    }
}

impl From<serde_json::Error> for PipelineError {
    fn from(error: serde_json::Error) -> Self {
        PipelineError::Config(error.to_string())
    }
}
