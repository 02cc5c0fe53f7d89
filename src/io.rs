/*!
# IO utilities

Corpora are small enough to be read in memory: every stage reads its input files entirely,
then writes its output files at the end.

Corpus files are UTF-8, newline-delimited, one sentence per line.
!*/
use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use log::debug;

use crate::error::Error;

/// Read a file into trimmed lines.
pub fn read_lines(path: &Path) -> Result<Vec<String>, Error> {
    debug!("reading {:?}", path);
    let reader = BufReader::new(File::open(path)?);
    reader
        .lines()
        .map(|line| line.map(|l| l.trim().to_string()).map_err(Error::from))
        .collect()
}

/// Write lines (trimmed, newline-terminated) into a new file at `path`.
pub fn write_lines<I, S>(path: &Path, lines: I) -> Result<(), Error>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    debug!("writing {:?}", path);
    let mut writer = BufWriter::new(File::create(path)?);
    for line in lines {
        writeln!(writer, "{}", line.as_ref().trim())?;
    }
    writer.flush()?;
    Ok(())
}

/// Fails with [Error::InputMismatch] if `got != expected`.
pub fn check_lengths(what: &str, expected: usize, got: usize) -> Result<(), Error> {
    if expected == got {
        Ok(())
    } else {
        Err(Error::InputMismatch {
            what: what.to_string(),
            expected,
            got,
        })
    }
}
