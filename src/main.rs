use anyhow::{Context, Result};
use clap::Parser;
use testgen_rs::{Cli, Destination, run, setup_logging};

fn main() -> Result<()> {
    // usage errors exit here, before anything is generated
    let cli = Cli::parse();
    setup_logging()?;

    let destination = cli
        .destination()
        .context("one of --test_id and --output_dir is required")?;
    let mut stdout = std::io::stdout().lock();
    run(&destination, &mut stdout).with_context(|| describe(&destination))?;

    Ok(())
}

fn describe(destination: &Destination) -> String {
    match destination {
        Destination::Stdout { test_id } => format!("failed to write test case {test_id} to stdout"),
        Destination::Directory(dir) => {
            format!("failed to write the test suite to {}", dir.display())
        }
    }
}
