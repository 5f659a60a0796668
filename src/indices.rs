//! Candidate device indices.
//!
//! Indices are validated before any device is touched: an empty list, a
//! negative value, or a malformed token is rejected up front.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Indices probed when nothing else is configured.
pub const DEFAULT_INDICES: [u32; 4] = [0, 1, 2, 3];

/// Upper bound on the number of indices in one scan.
pub const MAX_INDICES: usize = 256;

/// Errors from parsing or validating candidate indices.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndexError {
    #[error("No camera indices given")]
    Empty,
    #[error("Camera index {0} is negative")]
    Negative(i64),
    #[error("Camera index {0} is too large")]
    TooLarge(i64),
    #[error("Invalid camera index '{0}'. Use N, A-B or a comma-separated list (e.g. 0,2,4-6)")]
    Invalid(String),
    #[error("Index range {start}-{end} is reversed")]
    ReversedRange { start: u32, end: u32 },
    #[error("Too many camera indices ({count}), at most {max} can be probed")]
    TooMany { count: u64, max: usize },
}

/// Ordered, non-empty sequence of candidate indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateIndices(Vec<u32>);

impl CandidateIndices {
    pub fn new(indices: Vec<u32>) -> Result<Self, IndexError> {
        if indices.is_empty() {
            return Err(IndexError::Empty);
        }
        check_count(indices.len() as u64)?;
        Ok(Self(indices))
    }

    /// Validate signed values, as read from a config file.
    pub fn from_signed(values: &[i64]) -> Result<Self, IndexError> {
        let indices = values
            .iter()
            .map(|&v| to_index(v))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(indices)
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }
}

impl Default for CandidateIndices {
    fn default() -> Self {
        Self(DEFAULT_INDICES.to_vec())
    }
}

impl fmt::Display for CandidateIndices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|i| i.to_string()).collect();
        write!(f, "{}", parts.join(","))
    }
}

impl FromStr for CandidateIndices {
    type Err = IndexError;

    /// Parse `N`, `A-B` (inclusive) or a comma-separated mix of both.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut indices = Vec::new();
        for token in s.split(',').map(str::trim) {
            if token.is_empty() {
                if s.trim().is_empty() {
                    return Err(IndexError::Empty);
                }
                return Err(IndexError::Invalid(s.to_string()));
            }
            // A leading '-' is a negative number, not a range
            let dash = token
                .char_indices()
                .skip(1)
                .find(|&(_, c)| c == '-')
                .map(|(pos, _)| pos);
            match dash {
                Some(dash) => {
                    let start = parse_index(token[..dash].trim())?;
                    let end = parse_index(token[dash + 1..].trim())?;
                    if start > end {
                        return Err(IndexError::ReversedRange { start, end });
                    }
                    // Checked before expanding the range
                    check_count(indices.len() as u64 + u64::from(end - start) + 1)?;
                    indices.extend(start..=end);
                }
                None => {
                    check_count(indices.len() as u64 + 1)?;
                    indices.push(parse_index(token)?);
                }
            }
        }
        Self::new(indices)
    }
}

fn check_count(count: u64) -> Result<(), IndexError> {
    if count > MAX_INDICES as u64 {
        return Err(IndexError::TooMany {
            count,
            max: MAX_INDICES,
        });
    }
    Ok(())
}

fn parse_index(token: &str) -> Result<u32, IndexError> {
    let value: i64 = token
        .parse()
        .map_err(|_| IndexError::Invalid(token.to_string()))?;
    to_index(value)
}

fn to_index(value: i64) -> Result<u32, IndexError> {
    if value < 0 {
        return Err(IndexError::Negative(value));
    }
    u32::try_from(value).map_err(|_| IndexError::TooLarge(value))
}
