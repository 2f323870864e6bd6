//! # Ready-to-use classification pipelines
//! - `classification`: the `TextClassifier` capability trait and the `Labels` result it renders
//! - `sentiment`: binary sentiment analysis backed by a rust-bert DistilBERT SST-2 model

pub mod classification;
pub mod sentiment;
