//! Module defining the command line surface of the generator

use std::path::PathBuf;

use clap::{ArgGroup, Parser};

use crate::domain::MAX_TESTS;
use crate::output::Destination;

/// Generates the input files of a programming-challenge problem.
///
/// Either writes a single test case to stdout or the full suite to a directory.
#[derive(Debug, Parser)]
#[command(name = "testgen-rs", version)]
#[command(group(
    ArgGroup::new("destination")
        .required(true)
        .args(["test_id", "output_dir"]),
))]
pub struct Cli {
    /// Index of the test case to write to stdout
    #[arg(long = "test_id", value_parser = clap::value_parser!(u8).range(0..MAX_TESTS as i64))]
    pub test_id: Option<u8>,

    /// Existing directory receiving one `inputNNN.txt` file per test case
    #[arg(long = "output_dir")]
    pub output_dir: Option<PathBuf>,
}

impl Cli {
    /// Where the generated suite goes, or `None` when no selector is set.
    ///
    /// A parsed `Cli` always has exactly one selector set: the argument group requires one and
    /// rejects both.
    pub fn destination(&self) -> Option<Destination> {
        match (&self.output_dir, self.test_id) {
            (Some(dir), _) => Some(Destination::Directory(dir.clone())),
            (None, Some(test_id)) => Some(Destination::Stdout {
                test_id: usize::from(test_id),
            }),
            (None, None) => None,
        }
    }
}
