mod cli;
mod domain;
mod error;
mod generator;
mod input;
mod output;
mod telemetry;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

pub use cli::Cli;
pub use domain::{MAX_TESTS, TestCase, TestSuite, ValueRange};
pub use error::Error;
pub use generator::{
    LARGE_N, REGIMES, SEED, SMALL_N, SuitePlan, VALUE_RANGE, build_suite, generate_unique_values,
    samples,
};
pub use input::parse_test_case;
pub use output::{Destination, TestWriter, file_name, serialize, write_case};
pub use telemetry::setup_logging;

/// Generates the test suite of the problem and delivers it to `destination`.
///
/// This is the single entry point the binary uses. The random stream is seeded with [`SEED`], so
/// every run produces the same suite. In single-file mode the selected case goes to `stdout`; in
/// directory mode `stdout` stays untouched.
///
/// # Example
///
/// ```no_run
/// use testgen_rs::{Destination, run};
///
/// let mut stdout = std::io::stdout().lock();
/// run(&Destination::Stdout { test_id: 0 }, &mut stdout).unwrap();
/// ```
pub fn run(destination: &Destination, stdout: &mut impl std::io::Write) -> Result<TestSuite, Error> {
    info!(seed = SEED, ?destination, "generating test suite");
    let mut rng = ChaCha8Rng::seed_from_u64(SEED);
    let suite = build_suite(&SuitePlan::default(), &mut rng)?;
    TestWriter::new(&suite).deliver(destination, stdout)?;
    Ok(suite)
}
