//! Module turning test cases into the line-based text format the judge reads, and delivering it.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::{TestCase, TestSuite};
use crate::error::{Error, io_error};


/// Where the driver sends its output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// A single test case, selected by index, written to stdout.
    Stdout { test_id: usize },
    /// Every test case, one file each, written into an existing directory.
    Directory(PathBuf),
}

/// Encodes a test case: the number of values on the first line, then one value per line.
pub fn serialize(test: &TestCase) -> String {
    let mut out = String::with_capacity(12 * (test.len() + 1));
    push_line(&mut out, test.len());
    for value in test.values() {
        push_line(&mut out, value);
    }
    out
}

fn push_line(out: &mut String, value: impl ToString) {
    out.push_str(&value.to_string());
    out.push('\n');
}

/// Writes the encoding of `test` to `out` in one go.
pub fn write_case(test: &TestCase, out: &mut impl Write) -> Result<(), Error> {
    out.write_all(serialize(test).as_bytes())?;
    Ok(())
}

/// Name of the file holding the test case with the given index, e.g. `input007.txt`.
pub fn file_name(test_id: usize) -> String {
    format!("input{test_id:03}.txt")
}

/// Writes test cases from a [`TestSuite`] to a given output.
pub struct TestWriter<'a> {
    suite: &'a TestSuite,
}

impl<'a> TestWriter<'a> {
    pub fn new(suite: &'a TestSuite) -> Self {
        Self { suite }
    }

    /// Writes the test case with index `test_id` to `out`, which may be stdout as well.
    pub fn write_single(&self, test_id: usize, out: &mut impl Write) -> Result<(), Error> {
        let test = self.suite.get(test_id)?;
        write_case(test, out)
    }

    ///
    /// Writes every test case into its own file inside `dir`, overwriting existing files.
    ///
    /// Files are written one after another and closed before the next one is opened. The first
    /// failure aborts the run; files written up to that point stay on disk.
    ///
    pub fn write_all(&self, dir: &Path) -> Result<Vec<PathBuf>, Error> {
        let mut written = Vec::with_capacity(self.suite.len());
        for test_id in 0..self.suite.len() {
            let path = dir.join(file_name(test_id));
            self.write_file(test_id, &path)?;
            debug!(test_id, path = %path.display(), "wrote test file");
            written.push(path);
        }
        Ok(written)
    }

    fn write_file(&self, test_id: usize, path: &Path) -> Result<(), Error> {
        let file = File::create(path).map_err(|e| io_error(path, e))?;
        let mut out = BufWriter::new(file);
        self.write_single(test_id, &mut out)
            .map_err(|err| match err {
                Error::Stream(source) => io_error(path, source),
                other => other,
            })?;
        out.flush().map_err(|e| io_error(path, e))
    }

    /// Delivers the suite to `destination`, using `stdout` for single-file mode.
    pub fn deliver(&self, destination: &Destination, stdout: &mut impl Write) -> Result<(), Error> {
        match destination {
            Destination::Stdout { test_id } => {
                self.write_single(*test_id, stdout)?;
                stdout.flush()?;
            }
            Destination::Directory(dir) => {
                self.write_all(dir)?;
            }
        }
        Ok(())
    }
}
