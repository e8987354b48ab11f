//! Module parsing serialized test cases back into domain types, e.g. to verify generated files.

use std::io::{BufRead, BufReader, Read};

use crate::domain::TestCase;
use crate::error::{Error, parse_error};
use crate::generator::LARGE_N;


/// Parses one serialized test case: a count `n` on the first line followed by exactly `n` values.
///
/// Line numbers in the returned errors are 1-based.
pub fn parse_test_case(reader: impl Read) -> Result<TestCase, Error> {
    let mut lines = BufReader::new(reader).lines();

    let count_line = lines
        .next()
        .ok_or_else(|| parse_error(1, "missing value count"))??;
    let n: usize = count_line
        .trim()
        .parse()
        .map_err(|e| parse_error(1, format!("invalid value count {count_line:?}: {e}")))?;

    // the count comes from the input: reserve at most LARGE_N up front
    let mut values = Vec::with_capacity(n.min(LARGE_N));
    for i in 0..n {
        let line_no = i + 2;
        let line = lines.next().ok_or_else(|| {
            parse_error(line_no, format!("expected {n} values, found only {i}"))
        })??;
        let value = line
            .trim()
            .parse::<i64>()
            .map_err(|e| parse_error(line_no, format!("invalid value {line:?}: {e}")))?;
        values.push(value);
    }

    for (offset, line) in lines.enumerate() {
        if !line?.trim().is_empty() {
            return Err(parse_error(n + 2 + offset, "unexpected content after the last value"));
        }
    }

    Ok(TestCase::new(values))
}
