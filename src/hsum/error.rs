// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: hashsum
// File: error.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2022 Volker Schwaberow

use std::io;
use thiserror::Error;

/// Failures a digest run can hit. All of them are terminal for the
/// process; nothing is retried.
#[derive(Debug, Error)]
pub enum Error {
	#[error("unsupported algorithm: {0}")]
	UnsupportedAlgorithm(String),

	#[error("opening file {path}: {source}")]
	InputOpen { path: String, source: io::Error },

	#[error("reading input: {source}")]
	InputRead { source: io::Error },
}
