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

use clap::Parser;
use rust_sentiment::{SentimentClassifierService, ServiceConfig};
use std::io::{self, Read};
use std::path::PathBuf;
use tracing::info;

/// Classify the sentiment of the text read from stdin.
#[derive(Parser)]
#[command(name = "classify")]
struct Args {
    /// Path to a JSON service configuration file.
    #[arg(short, long, env = "RUST_SENTIMENT_CONFIG")]
    config: Option<PathBuf>,
}

pub fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = ServiceConfig::load(args.config.as_deref())?;
    let service = SentimentClassifierService::from_config(&config)?;

    let mut data = Vec::new();
    io::stdin().read_to_end(&mut data)?;
    info!(bytes = data.len(), "classifying stdin");

    println!("{}", service.classify(&data)?);
    Ok(())
}
