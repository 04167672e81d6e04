// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: hashsum
// File: hash.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2022 Volker Schwaberow

use crate::hsum::error::Error;
use digest::{Digest, DynDigest};
use std::io::{BufReader, Read};
use strum::{EnumIter, IntoEnumIterator};

/// The closed set of supported digest algorithms. The enum together
/// with the `match` in `Hasher::new` is the whole registry; there is
/// no dynamic registration.
#[derive(Debug, Copy, Clone, PartialEq, Eq, EnumIter)]
pub enum Algorithm {
	Md5,
	Sha1,
	Sha256,
	Sha512,
}

impl std::fmt::Display for Algorithm {
	fn fmt(
		&self,
		f: &mut std::fmt::Formatter<'_>,
	) -> std::fmt::Result {
		f.write_str(self.name())
	}
}

impl Algorithm {
	/// Canonical lowercase name, as accepted on the command line.
	pub fn name(&self) -> &'static str {
		match self {
			Algorithm::Md5 => "md5",
			Algorithm::Sha1 => "sha1",
			Algorithm::Sha256 => "sha256",
			Algorithm::Sha512 => "sha512",
		}
	}

	pub fn digest_size(&self) -> usize {
		match self {
			Algorithm::Md5 => 16,
			Algorithm::Sha1 => 20,
			Algorithm::Sha256 => 32,
			Algorithm::Sha512 => 64,
		}
	}

	/// Look up a name in the registry. Names match exactly; there is
	/// no case folding or aliasing.
	pub fn resolve(name: &str) -> Result<Algorithm, Error> {
		Algorithm::iter()
			.find(|alg| alg.name() == name)
			.ok_or_else(|| {
				Error::UnsupportedAlgorithm(name.to_string())
			})
	}
}

/// Streaming digest accumulator over a boxed `DynDigest`.
pub struct Hasher {
	digest: Box<dyn DynDigest>,
}

impl Hasher {
	pub fn new(algorithm: Algorithm) -> Self {
		let digest: Box<dyn DynDigest> = match algorithm {
			Algorithm::Md5 => Box::new(md5::Md5::new()),
			Algorithm::Sha1 => Box::new(sha1::Sha1::new()),
			Algorithm::Sha256 => Box::new(sha2::Sha256::new()),
			Algorithm::Sha512 => Box::new(sha2::Sha512::new()),
		};
		Self { digest }
	}

	/// Hash a complete in-memory byte sequence.
	pub fn process_bytes(&mut self, data: &[u8]) -> Vec<u8> {
		self.digest.update(data);
		self.digest.finalize_reset().to_vec()
	}

	/// Stream a reader to end-of-input and finalize. Chunk sizes
	/// carry no meaning for the digest, so the buffer just matches
	/// the reader's capacity.
	pub fn process_reader<R: Read>(
		&mut self,
		reader: R,
	) -> Result<Vec<u8>, Error> {
		let mut reader = BufReader::new(reader);
		let mut buffer = vec![0; reader.capacity()];
		loop {
			let count = reader
				.read(&mut buffer)
				.map_err(|source| Error::InputRead { source })?;
			if count == 0 {
				break;
			}
			self.digest.update(&buffer[..count]);
		}
		Ok(self.digest.finalize_reset().to_vec())
	}
}
