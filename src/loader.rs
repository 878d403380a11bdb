//! Fills a point set from text made of whitespace-separated `x y` pairs.
//!
//! Reading stops at the end of the input or at the first token that is not
//! a finite number. Stopping early is not an error: every pair read before
//! the stop stays in the set, and the returned [`LoadSummary`] says where
//! and why reading ended. Only failing to open the file is an error.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;
#[cfg(feature = "tracing")]
use tracing::{event, span, Level};

use crate::point::Point;
use crate::traits::PointSet;

/// Errors that prevent a point file from being read at all.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Nothing exists at the given path.
    #[error("point file not found: {}", path.display())]
    NotFound {
        /// the path that was looked up
        path: PathBuf,
    },

    /// The path exists but could not be opened.
    #[error("failed to open point file {}: {source}", path.display())]
    Open {
        /// the path that was opened
        path: PathBuf,
        /// the underlying I/O failure
        #[source]
        source: io::Error,
    },
}

/// Why reading stopped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadEnd {
    /// Every token was consumed.
    Exhausted,
    /// A token was not a finite number. Reading stopped before it.
    Malformed {
        /// 1-based line of the offending token
        line: usize,
        /// the offending token
        token: String,
    },
    /// The input ended after an `x` with no matching `y`.
    Unpaired {
        /// 1-based line of the lone `x`
        line: usize,
    },
    /// The source failed mid-read.
    Interrupted {
        /// kind of the I/O error that was hit
        kind: io::ErrorKind,
    },
}

/// Outcome of reading a point source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadSummary {
    /// Pairs successfully parsed and handed to the set.
    pub parsed: usize,
    /// Pairs that were new to the set. Less than `parsed` when the input
    /// repeats points or they were already present.
    pub inserted: usize,
    /// Why reading stopped.
    pub end: LoadEnd,
}

impl LoadSummary {
    /// Whether the whole input was read.
    pub fn is_complete(&self) -> bool {
        self.end == LoadEnd::Exhausted
    }
}

/// Opens `path` and adds every point it holds to `set`.
///
/// # Errors
///
/// [`LoadError::NotFound`] if nothing exists at `path`, [`LoadError::Open`]
/// if it cannot be opened for any other reason. Problems after opening are
/// reported in the [`LoadSummary`] instead.
///
/// # Examples
///
/// ```rust
/// use pointset::loader::{load, LoadError};
/// use pointset::KdPointSet;
///
/// let mut set = KdPointSet::new();
///
/// let err = load(&mut set, "no/such/points.dat").unwrap_err();
/// assert!(matches!(err, LoadError::NotFound { .. }));
/// ```
pub fn load<S: PointSet, P: AsRef<Path>>(set: &mut S, path: P) -> Result<LoadSummary, LoadError> {
    let path = path.as_ref();

    #[cfg(feature = "tracing")]
    let span = span!(Level::INFO, "load", path = %path.display());
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let file = File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::Open {
            path: path.to_path_buf(),
            source,
        },
    })?;

    // a directory opens fine on some platforms and only fails on first read
    let is_dir = file
        .metadata()
        .map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?
        .is_dir();
    if is_dir {
        return Err(LoadError::Open {
            path: path.to_path_buf(),
            source: io::Error::other("is a directory"),
        });
    }

    Ok(read_points(set, BufReader::new(file)))
}

/// Adds every point read from `reader` to `set`.
///
/// # Examples
///
/// ```rust
/// use pointset::loader::{read_points, LoadEnd};
/// use pointset::{OrderedPointSet, Point, PointSet};
///
/// let mut set = OrderedPointSet::new();
/// let summary = read_points(&mut set, "0.1 0.2\n0.3 0.4\n0.5 oops 0.7 0.8".as_bytes());
///
/// assert_eq!(summary.parsed, 2);
/// assert_eq!(summary.end, LoadEnd::Malformed { line: 3, token: "oops".into() });
/// assert!(set.contains(Point::new(0.3, 0.4)));
/// ```
pub fn read_points<S: PointSet, R: BufRead>(set: &mut S, reader: R) -> LoadSummary {
    let mut summary = LoadSummary {
        parsed: 0,
        inserted: 0,
        end: LoadEnd::Exhausted,
    };
    // an `x` waiting for its `y`, with its line
    let mut pending_x: Option<(f64, usize)> = None;

    for (line_idx, line) in reader.split(b'\n').enumerate() {
        let line_no = line_idx + 1;
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                summary.end = LoadEnd::Interrupted { kind: err.kind() };
                return finish(summary);
            }
        };

        let tokens = line
            .split(u8::is_ascii_whitespace)
            .filter(|token| !token.is_empty());

        for token in tokens {
            let Some(value) = parse_coord(token) else {
                summary.end = LoadEnd::Malformed {
                    line: line_no,
                    token: String::from_utf8_lossy(token).into_owned(),
                };
                return finish(summary);
            };

            match pending_x.take() {
                None => pending_x = Some((value, line_no)),
                Some((x, _)) => {
                    summary.parsed += 1;
                    let point = Point::new(x, value);
                    if set.put(point) {
                        summary.inserted += 1;
                    } else {
                        #[cfg(feature = "tracing")]
                        event!(Level::DEBUG, %point, line = line_no, "duplicate point skipped");
                    }
                }
            }
        }
    }

    if let Some((_, line)) = pending_x {
        summary.end = LoadEnd::Unpaired { line };
    }

    finish(summary)
}

fn parse_coord(token: &[u8]) -> Option<f64> {
    std::str::from_utf8(token)
        .ok()?
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

fn finish(summary: LoadSummary) -> LoadSummary {
    #[cfg(feature = "tracing")]
    match &summary.end {
        LoadEnd::Exhausted => {}
        LoadEnd::Malformed { line, token } => {
            event!(Level::WARN, line, token = %token, "malformed token, stopped reading");
        }
        LoadEnd::Unpaired { line } => {
            event!(Level::WARN, line, "coordinate without a partner at end of input");
        }
        LoadEnd::Interrupted { kind } => {
            event!(Level::WARN, ?kind, "read failed, stopped reading");
        }
    }

    #[cfg(feature = "tracing")]
    event!(
        Level::INFO,
        parsed = summary.parsed,
        inserted = summary.inserted,
        "points loaded"
    );

    summary
}
