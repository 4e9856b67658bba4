//! Filling an [`OrderedTree`] from text files.
//!
//! A data file holds one record per line. A manifest lists data files, one path per line, so that
//! several of them can be loaded into the same tree in one go.
//!
//! Lines that aren't UTF-8 or don't parse are logged and skipped rather than failing the whole load; only files
//! that can't be read are errors.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::ops::AddAssign;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use thiserror::Error;
use tracing::{debug, info, instrument, warn};

use crate::ordered::OrderedTree;

/// Errors from reading manifests and data files.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The file couldn't be opened or read.
    #[error("failed to read {}", .path.display())]
    Io {
        /// The file being read.
        path: PathBuf,
        /// What went wrong.
        #[source]
        source: io::Error,
    },
}

impl LoadError {
    fn io(path: &Path) -> impl FnOnce(io::Error) -> Self + '_ {
        move |source| Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Tally of what happened to the records of one or more files.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Records that became new nodes.
    pub inserted: usize,
    /// Records equal to one already in the tree.
    pub duplicates: usize,
    /// Lines that weren't UTF-8 or didn't parse.
    pub skipped: usize,
}

impl AddAssign for LoadReport {
    fn add_assign(&mut self, other: Self) {
        self.inserted += other.inserted;
        self.duplicates += other.duplicates;
        self.skipped += other.skipped;
    }
}

/// Raw lines of `path` without their `\n` or `\r\n` endings. Lines are left as bytes so that a
/// line which isn't UTF-8 can be skipped on its own instead of failing the whole read.
fn read_lines(path: &Path) -> Result<impl Iterator<Item = io::Result<Vec<u8>>>, LoadError> {
    let file = File::open(path).map_err(LoadError::io(path))?;
    Ok(BufReader::new(file).split(b'\n').map(|line| {
        line.map(|mut bytes| {
            if bytes.last() == Some(&b'\r') {
                bytes.pop();
            }
            bytes
        })
    }))
}

/// Reads the data file paths listed in a manifest. Blank lines and lines starting with `#` are
/// ignored. Relative paths are taken relative to the manifest's own directory.
pub fn read_manifest(path: &Path) -> Result<Vec<PathBuf>, LoadError> {
    let base = path.parent().unwrap_or_else(|| Path::new(""));
    let mut sources = Vec::new();
    for (index, line) in read_lines(path)?.enumerate() {
        let line = match String::from_utf8(line.map_err(LoadError::io(path))?) {
            Ok(line) => line,
            Err(e) => {
                warn!(
                    path = %path.display(),
                    line = index + 1,
                    "skipping source: {}",
                    e.utf8_error()
                );
                continue;
            }
        };
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        sources.push(base.join(line));
    }

    Ok(sources)
}

/// Parses every non-blank line of `path` as a `T` and inserts it into `tree`. Lines that aren't
/// UTF-8 or don't parse are skipped.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
///
/// use datetree::date::Date;
/// use datetree::loader::load_file;
/// use datetree::ordered::OrderedTree;
///
/// let mut tree: OrderedTree<Date> = OrderedTree::new();
/// let report = load_file(Path::new("date.txt"), &mut tree)?;
/// assert_eq!(report.inserted, tree.len());
/// # Ok::<(), datetree::loader::LoadError>(())
/// ```
#[instrument(level = "debug", skip(tree))]
pub fn load_file<T>(path: &Path, tree: &mut OrderedTree<T>) -> Result<LoadReport, LoadError>
where
    T: FromStr + Ord,
    T::Err: fmt::Display,
{
    let mut report = LoadReport::default();
    for (index, line) in read_lines(path)?.enumerate() {
        let record = match String::from_utf8(line.map_err(LoadError::io(path))?) {
            Ok(line) if line.trim().is_empty() => continue,
            Ok(line) => line.parse::<T>().map_err(|e| e.to_string()),
            Err(e) => Err(e.utf8_error().to_string()),
        };
        match record {
            Ok(value) => {
                if tree.insert(value) {
                    report.inserted += 1;
                } else {
                    report.duplicates += 1;
                }
            }
            Err(e) => {
                warn!(path = %path.display(), line = index + 1, "skipping record: {}", e);
                report.skipped += 1;
            }
        }
    }

    debug!(?report, "loaded {}", path.display());
    Ok(report)
}

/// Loads every data file listed in the manifest at `path` into `tree`, in the order listed.
/// Stops at the first file that can't be read.
#[instrument(level = "debug", skip(tree))]
pub fn load_manifest<T>(path: &Path, tree: &mut OrderedTree<T>) -> Result<LoadReport, LoadError>
where
    T: FromStr + Ord,
    T::Err: fmt::Display,
{
    let mut report = LoadReport::default();
    for source in read_manifest(path)? {
        report += load_file(&source, tree)?;
    }

    info!(
        inserted = report.inserted,
        duplicates = report.duplicates,
        skipped = report.skipped,
        "finished loading manifest {}",
        path.display()
    );
    Ok(report)
}
