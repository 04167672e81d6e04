// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: hashsum
// File: app.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2022 Volker Schwaberow

use crate::hsum::error::Error;
use crate::hsum::hash::{Algorithm, Hasher};
use crate::hsum::input::open_input;
use clap::error::ErrorKind;
use clap::Arg;
use strum::IntoEnumIterator;

const HELP_TEMPLATE: &str = "{before-help}{name} {version}
Written by {author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

const EXAMPLES_TXT: &str = "Examples:
  hsum -a md5 -f file.txt
  echo 'hello' | hsum -a sha1";

fn build_cli() -> clap::Command {
	clap::Command::new("hsum")
		.color(clap::ColorChoice::Never)
		.help_template(HELP_TEMPLATE)
		.bin_name("hsum")
		.version(clap::crate_version!())
		.author(clap::crate_authors!())
		.about(
			"Compute a cryptographic digest of a file or standard input",
		)
		.after_help(EXAMPLES_TXT)
		.arg(
			Arg::new("algorithm")
				.short('a')
				.long("algorithm")
				.value_name("ALGORITHM")
				.help("Hash algorithm (md5, sha1, sha256, sha512)")
				.default_value("sha256"),
		)
		.arg(
			Arg::new("file")
				.short('f')
				.long("file")
				.value_name("FILE")
				.help("Input file path (standard input when omitted)"),
		)
}

/// Parse the command line, routing help and parse diagnostics to
/// stderr. Parse errors exit 2; explicit help/version requests
/// exit 0.
fn parse_args() -> clap::ArgMatches {
	match build_cli().try_get_matches() {
		Ok(matches) => matches,
		Err(err) => {
			eprint!("{}", err.render());
			let code = match err.kind() {
				ErrorKind::DisplayHelp
				| ErrorKind::DisplayVersion => 0,
				_ => 2,
			};
			std::process::exit(code);
		}
	}
}

fn report_error(err: &Error) {
	match err {
		Error::UnsupportedAlgorithm(name) => {
			eprintln!("Unsupported algorithm: {}", name);
			eprintln!("Supported algorithms:");
			for alg in Algorithm::iter() {
				eprintln!("  - {}", alg);
			}
		}
		other => eprintln!("Error: {}", other),
	}
}

fn run_digest(
	algorithm_name: &str,
	file_path: Option<&str>,
) -> Result<String, Error> {
	let algorithm = Algorithm::resolve(algorithm_name)?;
	let input = open_input(file_path)?;
	let digest = Hasher::new(algorithm).process_reader(input)?;
	Ok(hex::encode(digest))
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
	let matches = parse_args();
	let algorithm_name = matches
		.get_one::<String>("algorithm")
		.expect("algorithm has a default");
	let file_path =
		matches.get_one::<String>("file").map(String::as_str);

	match run_digest(algorithm_name, file_path) {
		Ok(encoded) => {
			println!("{}", encoded);
			Ok(())
		}
		Err(err) => {
			report_error(&err);
			std::process::exit(1);
		}
	}
}
