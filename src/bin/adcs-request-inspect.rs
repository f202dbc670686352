// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 U.S. Federal Government (in countries where recognized)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Certificate Request Inspection Tool
//!
//! Classifies a certificate request blob (PKCS#10, PKCS#7/CMS, or CMC)
//! and prints its canonical raw form, the way a submission gateway
//! would before calling into a certification authority.
//!
//! # Usage
//!
//! ```text
//! adcs-request-inspect [OPTIONS] <COMMAND>
//!
//! Commands:
//!   detect     Classify a certificate request
//!   normalize  Print the canonical raw form of a certificate request
//!
//! Options:
//!   -v, --verbose  Enable verbose output
//!   -q, --quiet    Suppress non-error output
//!   -h, --help     Print help
//!   -V, --version  Print version
//! ```
//!
//! # Examples
//!
//! ```bash
//! # Classify a PEM-framed request file
//! adcs-request-inspect detect request.pem
//!
//! # Classify from stdin, machine-readable output
//! cat request.pem | adcs-request-inspect detect --format json
//!
//! # Re-emit the request as a single BASE64 line
//! adcs-request-inspect normalize request.pem --format base64
//! ```

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use adcs_request_kit::types::pkcs10;
use adcs_request_kit::{detect_request_type, pem, NormalizedRequest, RequestError, RequestKind};

/// Certificate Request Inspection Tool
#[derive(Parser)]
#[command(name = "adcs-request-inspect")]
#[command(author = "U.S. Federal Government")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Classify and normalize AD CS certificate requests", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a certificate request
    Detect {
        /// Input file (default: stdin)
        input: Option<PathBuf>,

        /// Output format (text, json)
        #[arg(long, default_value = "text")]
        format: OutputFormat,
    },

    /// Print the canonical raw form of a certificate request
    Normalize {
        /// Input file (default: stdin)
        input: Option<PathBuf>,

        /// Output format (base64, pem)
        #[arg(long, default_value = "base64")]
        format: NormalizeFormat,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
enum NormalizeFormat {
    #[default]
    Base64,
    Pem,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.quiet {
        tracing::Level::ERROR
    } else if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run_command(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_command(cli: &Cli) -> Result<(), RequestError> {
    match &cli.command {
        Commands::Detect { input, format } => cmd_detect(input.as_deref(), *format),
        Commands::Normalize {
            input,
            format,
            output,
        } => cmd_normalize(input.as_deref(), *format, output.as_deref()),
    }
}

fn read_input(path: Option<&Path>) -> Result<String, RequestError> {
    match path {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn cmd_detect(input: Option<&Path>, format: OutputFormat) -> Result<(), RequestError> {
    let text = read_input(input)?;
    let detected = detect_request_type(&text);

    match format {
        OutputFormat::Text => print_detection_text(&detected),
        OutputFormat::Json => print_detection_json(&detected),
    }

    // Mirror the gateway policy: unrecognized input is a failure
    if !detected.is_recognized() {
        return Err(RequestError::UnrecognizedRequest);
    }

    Ok(())
}

fn print_detection_text(detected: &NormalizedRequest) {
    println!("Kind:             {}", detected.kind());
    println!("Submission flags: {:#x}", detected.submission_flags());
    println!("Payload size:     {} bytes", detected.as_der().len());

    if detected.kind() == RequestKind::Pkcs10 {
        if let Some(csr) = pkcs10::try_decode(detected.as_der()) {
            if let Some(cn) = pkcs10::subject_common_name(&csr) {
                println!("Subject CN:       {}", cn);
            }
            println!(
                "Key algorithm:    {}",
                pkcs10::public_key_algorithm(&csr)
            );
        }
    }
}

fn print_detection_json(detected: &NormalizedRequest) {
    let mut entry = serde_json::Map::new();
    entry.insert(
        "kind".to_string(),
        serde_json::Value::String(detected.kind().to_string()),
    );
    entry.insert(
        "recognized".to_string(),
        serde_json::Value::Bool(detected.is_recognized()),
    );
    entry.insert(
        "submissionFlags".to_string(),
        serde_json::Value::Number(detected.submission_flags().into()),
    );
    entry.insert(
        "payloadSize".to_string(),
        serde_json::Value::Number(detected.as_der().len().into()),
    );

    if detected.kind() == RequestKind::Pkcs10 {
        if let Some(csr) = pkcs10::try_decode(detected.as_der()) {
            if let Some(cn) = pkcs10::subject_common_name(&csr) {
                entry.insert("subjectCommonName".to_string(), serde_json::Value::String(cn));
            }
            entry.insert(
                "keyAlgorithm".to_string(),
                serde_json::Value::String(pkcs10::public_key_algorithm(&csr)),
            );
        }
    }

    println!("{}", serde_json::Value::Object(entry));
}

fn cmd_normalize(
    input: Option<&Path>,
    format: NormalizeFormat,
    output: Option<&Path>,
) -> Result<(), RequestError> {
    let text = read_input(input)?;
    let detected = detect_request_type(&text);

    if !detected.is_recognized() {
        return Err(RequestError::UnrecognizedRequest);
    }

    let rendered = match format {
        NormalizeFormat::Base64 => {
            let mut line = detected.to_base64();
            line.push('\n');
            line
        }
        NormalizeFormat::Pem => pem::encode_pem(pem_label(detected.kind()), detected.as_der()),
    };

    match output {
        Some(path) => {
            std::fs::write(path, &rendered)?;
            tracing::info!("normalized request written to {}", path.display());
        }
        None => print!("{}", rendered),
    }

    Ok(())
}

fn pem_label(kind: RequestKind) -> &'static str {
    match kind {
        RequestKind::Pkcs7 => pem::labels::PKCS7_SIGNED_DATA,
        // Windows enrollment tooling frames both PKCS#10 and CMC
        // requests under the same label
        _ => pem::labels::NEW_CERTIFICATE_REQUEST,
    }
}
