// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: hashsum
// File: input.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2022 Volker Schwaberow

use crate::hsum::error::Error;
use std::fs::File;
use std::io::{self, Read};

/// Select the input source for a run. No path, or an empty path,
/// means standard input; anything else is opened as a file. The
/// returned handle lives for the run and is dropped on every exit
/// path.
pub fn open_input(
	path: Option<&str>,
) -> Result<Box<dyn Read>, Error> {
	match path {
		Some(path) if !path.is_empty() => {
			let file = File::open(path).map_err(|source| {
				Error::InputOpen {
					path: path.to_string(),
					source,
				}
			})?;
			Ok(Box::new(file))
		}
		_ => Ok(Box::new(io::stdin())),
	}
}
