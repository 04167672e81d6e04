// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: hashsum
// File: lib.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2022 Volker Schwaberow

pub mod hsum {
	pub mod app;
	pub mod error;
	pub mod hash;
	pub mod input;
}

#[cfg(test)]
mod tests {
	use crate::hsum::error::Error;
	use crate::hsum::hash::{Algorithm, Hasher};
	use hex_literal::hex;

	#[test]
	fn resolve_canonical_names() {
		assert_eq!(
			Algorithm::resolve("md5").unwrap(),
			Algorithm::Md5
		);
		assert_eq!(
			Algorithm::resolve("sha1").unwrap(),
			Algorithm::Sha1
		);
		assert_eq!(
			Algorithm::resolve("sha256").unwrap(),
			Algorithm::Sha256
		);
		assert_eq!(
			Algorithm::resolve("sha512").unwrap(),
			Algorithm::Sha512
		);
	}

	#[test]
	fn resolve_rejects_unknown_names() {
		for name in ["sha384", "SHA256", "md-5", ""] {
			match Algorithm::resolve(name) {
				Err(Error::UnsupportedAlgorithm(n)) => {
					assert_eq!(n, name)
				}
				other => {
					panic!("expected rejection, got {:?}", other)
				}
			}
		}
	}

	#[test]
	fn empty_input_md5() {
		let mut hasher = Hasher::new(Algorithm::Md5);
		assert_eq!(
			hasher.process_bytes(b""),
			hex!("d41d8cd98f00b204e9800998ecf8427e")
		);
	}

	#[test]
	fn empty_input_sha1() {
		let mut hasher = Hasher::new(Algorithm::Sha1);
		assert_eq!(
			hasher.process_bytes(b""),
			hex!("da39a3ee5e6b4b0d3255bfef95601890afd80709")
		);
	}

	#[test]
	fn empty_input_sha256() {
		let mut hasher = Hasher::new(Algorithm::Sha256);
		assert_eq!(
			hasher.process_bytes(b""),
			hex!("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855")
		);
	}

	#[test]
	fn empty_input_sha512() {
		let mut hasher = Hasher::new(Algorithm::Sha512);
		assert_eq!(
			hasher.process_bytes(b""),
			hex!("cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e")
		);
	}
}
