//! Input loading for both solvers.
//!
//! Machine lists (facebull) are one machine per line with any run of
//! non-word characters between the four fields. Planet lists (zergrush) are
//! whitespace-separated integers in a line-oriented layout. Both loaders
//! read the whole file before parsing.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;
use tracing::debug;

use crate::models::{BaseSite, Chemical, MachineEdge, Planet, MAX_CHEMICAL};

static SEPARATOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\W+").unwrap());

/// Errors raised while reading or parsing an input file.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: {reason} (got {content:?})")]
    MalformedLine {
        line: usize,
        content: String,
        reason: String,
    },

    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: String },
}

fn read_input(path: &Path) -> Result<String, DataError> {
    fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.display().to_string(),
        source,
    })
}

fn malformed(line: usize, content: &str, reason: impl Into<String>) -> DataError {
    DataError::MalformedLine {
        line,
        content: content.to_string(),
        reason: reason.into(),
    }
}

/// Parses a chemical token such as "C3" into its index, `1..=MAX_CHEMICAL`.
fn parse_chemical(token: &str, line: usize, content: &str) -> Result<Chemical, DataError> {
    let digits = token.trim_start_matches(|c: char| !c.is_ascii_digit());
    match digits.parse::<Chemical>() {
        Ok(index) if (1..=MAX_CHEMICAL).contains(&index) => Ok(index),
        Ok(index) if index > MAX_CHEMICAL => Err(malformed(
            line,
            content,
            format!("chemical index {index} exceeds {MAX_CHEMICAL}"),
        )),
        _ => Err(malformed(
            line,
            content,
            format!("invalid chemical token {token:?}"),
        )),
    }
}

/// Parses machine definitions from text.
///
/// Each non-blank line must contain exactly four word tokens: machine name,
/// source chemical, target chemical and price.
///
/// # Example
///
/// ```
/// use puzzlers::data::parse_machines;
///
/// let edges = parse_machines("M1  C1 -> C2 : 10\nM2\tC2\tC1\t5\n").unwrap();
/// assert_eq!(edges.len(), 2);
/// assert_eq!(edges[0].source, 1);
/// assert_eq!(edges[1].price, 5);
/// ```
pub fn parse_machines(text: &str) -> Result<Vec<MachineEdge>, DataError> {
    let mut edges = Vec::new();
    for (i, raw) in text.lines().enumerate() {
        let line = i + 1;
        if raw.trim().is_empty() {
            continue;
        }
        let tokens: Vec<&str> = SEPARATOR.split(raw).filter(|t| !t.is_empty()).collect();
        if tokens.len() != 4 {
            return Err(malformed(
                line,
                raw,
                format!("expected 4 fields, found {}", tokens.len()),
            ));
        }

        let price = tokens[3]
            .parse::<u64>()
            .map_err(|_| malformed(line, raw, format!("invalid price {:?}", tokens[3])))?;

        edges.push(MachineEdge {
            machine: tokens[0].to_string(),
            source: parse_chemical(tokens[1], line, raw)?,
            target: parse_chemical(tokens[2], line, raw)?,
            price,
        });
    }

    debug!(edges = edges.len(), "parsed machine list");
    Ok(edges)
}

/// Loads machine definitions from a file.
pub fn load_machines(path: &Path) -> Result<Vec<MachineEdge>, DataError> {
    parse_machines(&read_input(path)?)
}

/// Non-blank lines with their 1-based line numbers.
struct Lines<'a> {
    inner: std::iter::Enumerate<std::str::Lines<'a>>,
}

impl<'a> Lines<'a> {
    fn new(text: &'a str) -> Self {
        Lines {
            inner: text.lines().enumerate(),
        }
    }

    /// Reads the next non-blank line as exactly `N` integers, with its line number.
    fn next_ints<const N: usize>(
        &mut self,
        expected: &str,
    ) -> Result<(usize, [i64; N]), DataError> {
        let (line, raw) = self
            .inner
            .by_ref()
            .map(|(i, l)| (i + 1, l))
            .find(|(_, l)| !l.trim().is_empty())
            .ok_or_else(|| DataError::UnexpectedEof {
                expected: expected.to_string(),
            })?;

        let tokens: Vec<&str> = raw.split_whitespace().collect();
        if tokens.len() != N {
            return Err(malformed(
                line,
                raw,
                format!("expected {N} fields for {expected}, found {}", tokens.len()),
            ));
        }

        let mut values = [0i64; N];
        for (slot, token) in values.iter_mut().zip(&tokens) {
            *slot = token
                .parse()
                .map_err(|_| malformed(line, raw, format!("invalid integer {token:?}")))?;
        }
        Ok((line, values))
    }
}

fn non_negative(value: i64, line: usize, what: &str) -> Result<usize, DataError> {
    usize::try_from(value).map_err(|_| {
        malformed(
            line,
            &value.to_string(),
            format!("{what} must not be negative"),
        )
    })
}

/// Parses planet definitions from text.
///
/// # Example
///
/// ```
/// use puzzlers::data::parse_planets;
///
/// let planets = parse_planets("1\n2 10\n0 100\n1 40\n").unwrap();
/// assert_eq!(planets[0].budget, 10);
/// assert_eq!(planets[0].bases[1].terran_cost, 1);
/// assert_eq!(planets[0].bases[1].minerals, 40);
/// ```
pub fn parse_planets(text: &str) -> Result<Vec<Planet>, DataError> {
    let mut lines = Lines::new(text);

    let (line, [planet_count]) = lines.next_ints::<1>("planet count")?;
    let planet_count = non_negative(planet_count, line, "planet count")?;

    let mut planets = Vec::new();
    for _ in 0..planet_count {
        let (line, [base_count, budget]) = lines.next_ints::<2>("base count and budget")?;
        let base_count = non_negative(base_count, line, "base count")?;
        non_negative(budget, line, "budget")?;

        let mut bases = Vec::new();
        for _ in 0..base_count {
            let (_, [terran_cost, minerals]) = lines.next_ints::<2>("terran cost and minerals")?;
            bases.push(BaseSite {
                terran_cost,
                minerals,
            });
        }
        planets.push(Planet { budget, bases });
    }

    debug!(planets = planets.len(), "parsed planet list");
    Ok(planets)
}

/// Loads planet definitions from a file.
pub fn load_planets(path: &Path) -> Result<Vec<Planet>, DataError> {
    parse_planets(&read_input(path)?)
}
