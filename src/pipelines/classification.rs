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

//! # Text classification capability
//! A text classifier maps a piece of text to a structured, displayable result. The service only
//! relies on this trait, so any model (or a fake in tests) can stand behind it.
//!
//! ```
//! use rust_sentiment::pipelines::classification::{Label, Labels, TextClassifier};
//! use std::convert::Infallible;
//!
//! struct AlwaysPositive;
//!
//! impl TextClassifier for AlwaysPositive {
//!     type Output = Labels;
//!     type Error = Infallible;
//!
//!     fn classify(&self, _text: &str) -> Result<Labels, Infallible> {
//!         Ok(Labels::from(vec![Label::new("POSITIVE", 1.0)]))
//!     }
//! }
//!
//! let labels = AlwaysPositive.classify("I love this product").unwrap();
//! assert_eq!(labels.to_string(), "[{'label': 'POSITIVE', 'score': 1.0}]");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// # Capability classifying a single text
pub trait TextClassifier {
    /// Structured result, rendered by the service with its `Display` implementation
    type Output: fmt::Display;
    /// Error raised when the text cannot be processed
    type Error: std::error::Error + Send + Sync + 'static;

    /// Classifies `text`.
    ///
    /// # Arguments
    ///
    /// * `text` - `&str` decoded input text
    ///
    /// # Returns
    ///
    /// * `Result<Self::Output, Self::Error>` classification result for the text
    fn classify(&self, text: &str) -> Result<Self::Output, Self::Error>;
}

impl<T: TextClassifier + ?Sized> TextClassifier for &T {
    type Output = T::Output;
    type Error = T::Error;

    fn classify(&self, text: &str) -> Result<Self::Output, Self::Error> {
        (**self).classify(text)
    }
}

impl<T: TextClassifier + ?Sized> TextClassifier for Box<T> {
    type Output = T::Output;
    type Error = T::Error;

    fn classify(&self, text: &str) -> Result<Self::Output, Self::Error> {
        (**self).classify(text)
    }
}

impl<T: TextClassifier + ?Sized> TextClassifier for std::sync::Arc<T> {
    type Output = T::Output;
    type Error = T::Error;

    fn classify(&self, text: &str) -> Result<Self::Output, Self::Error> {
        (**self).classify(text)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// # Label assigned to a text, with its confidence score
pub struct Label {
    /// Label text (e.g. `POSITIVE`)
    pub label: String,
    /// Confidence score
    pub score: f64,
}

impl Label {
    pub fn new<S: Into<String>>(label: S, score: f64) -> Label {
        Label {
            label: label.into(),
            score,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
/// # Ordered labels, one per classified text
///
/// Displays as a list of `{'label': ..., 'score': ...}` entries:
/// `[{'label': 'NEGATIVE', 'score': 0.9994}]`.
pub struct Labels(pub Vec<Label>);

impl Labels {
    /// Number of labels.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no label was produced.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the labels in input order.
    pub fn iter(&self) -> std::slice::Iter<'_, Label> {
        self.0.iter()
    }

    /// Consumes the list and returns the labels in input order.
    pub fn into_inner(self) -> Vec<Label> {
        self.0
    }
}

impl From<Vec<Label>> for Labels {
    fn from(labels: Vec<Label>) -> Self {
        Labels(labels)
    }
}

impl IntoIterator for Labels {
    type Item = Label;
    type IntoIter = std::vec::IntoIter<Label>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Labels {
    type Item = &'a Label;
    type IntoIter = std::slice::Iter<'a, Label>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{'label': ")?;
        write_quoted(f, &self.label)?;
        f.write_str(", 'score': ")?;
        write_score(f, self.score)?;
        f.write_str("}")
    }
}

impl fmt::Display for Labels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (index, label) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", label)?;
        }
        f.write_str("]")
    }
}

/// Single quotes, unless the value holds a single quote and no double quote. Only the selected
/// quote character is escaped.
fn write_quoted(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
    let quote = if value.contains('\'') && !value.contains('"') {
        '"'
    } else {
        '\''
    };
    write!(f, "{}", quote)?;
    for c in value.chars() {
        match c {
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\t' => f.write_str("\\t")?,
            '\r' => f.write_str("\\r")?,
            c if c == quote => write!(f, "\\{}", c)?,
            c => write!(f, "{}", c)?,
        }
    }
    write!(f, "{}", quote)
}

/// Shortest round-trip representation. Integral values keep one decimal, very small and very
/// large magnitudes switch to exponent notation with a signed, two-digit exponent.
fn write_score(f: &mut fmt::Formatter<'_>, score: f64) -> fmt::Result {
    if score.is_nan() {
        return f.write_str("nan");
    }
    if score.is_infinite() {
        return f.write_str(if score > 0.0 { "inf" } else { "-inf" });
    }
    let magnitude = score.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        let repr = format!("{:e}", score);
        let mut parts = repr.splitn(2, 'e');
        let mantissa = parts.next().ok_or(fmt::Error)?;
        let exponent: i32 = parts
            .next()
            .and_then(|exponent| exponent.parse().ok())
            .ok_or(fmt::Error)?;
        let sign = if exponent < 0 { '-' } else { '+' };
        write!(f, "{}e{}{:02}", mantissa, sign, exponent.abs())
    } else if score.fract() == 0.0 {
        write!(f, "{:.1}", score)
    } else {
        write!(f, "{}", score)
    }
}
