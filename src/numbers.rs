use crate::error::{NumsortError, Result};
use crate::file_io::FileIo;
use log::warn;
use std::fmt;
use std::path::Path;

/// Separator used when rendering a list, independent of the parse delimiter
pub const RENDER_SEPARATOR: &str = ", ";

/// Delimiter assumed when none is supplied
pub const DEFAULT_DELIMITER: &str = ", ";

/// Direction of the numeric sort
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Smallest first
    Ascending,
    /// Largest first
    #[default]
    Descending,
}

impl SortOrder {
    /// Maps an answer to the sort order prompt.
    ///
    /// Only the literal `1` selects ascending; anything else, including an
    /// empty answer, selects descending.
    pub fn from_answer(answer: &str) -> Self {
        if answer == "1" {
            SortOrder::Ascending
        } else {
            SortOrder::Descending
        }
    }
}

/// What to do with a token that is not a base-10 integer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParsePolicy {
    /// Fail with [`NumsortError::Parse`]
    #[default]
    Strict,
    /// Drop the token and log a warning
    Skip,
}

/// Splits `text` on `delimiter` and parses every token as an `i64`.
///
/// Trailing whitespace is dropped before splitting and every token is
/// trimmed, so a final newline is harmless even when the delimiter is itself
/// a newline. Text that is empty or only whitespace yields no numbers.
/// Positions in errors are 1-based token indexes.
pub fn parse_numbers(text: &str, delimiter: &str, policy: ParsePolicy) -> Result<Vec<i64>> {
    if delimiter.is_empty() {
        return Err(NumsortError::InvalidDelimiter);
    }
    let text = text.trim_end();
    if text.trim_start().is_empty() {
        return Ok(Vec::new());
    }

    let mut numbers = Vec::new();
    for (index, raw) in text.split(delimiter).enumerate() {
        let token = raw.trim();
        match token.parse::<i64>() {
            Ok(n) => numbers.push(n),
            Err(_) => match policy {
                ParsePolicy::Strict => {
                    return Err(NumsortError::Parse {
                        token: token.to_string(),
                        position: index + 1,
                    })
                }
                ParsePolicy::Skip => {
                    warn!("skipping invalid number '{}' at position {}", token, index + 1)
                }
            },
        }
    }

    Ok(numbers)
}

/// An owned, sortable sequence of integers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumberList {
    numbers: Vec<i64>,
}

impl NumberList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse(text: &str, delimiter: &str, policy: ParsePolicy) -> Result<Self> {
        Ok(Self {
            numbers: parse_numbers(text, delimiter, policy)?,
        })
    }

    /// Reads `path` through `io` and parses its whole contents.
    pub fn from_file(
        io: &FileIo,
        path: impl AsRef<Path>,
        delimiter: &str,
        policy: ParsePolicy,
    ) -> Result<Self> {
        let text = io.read_to_string(path)?;
        Self::parse(&text, delimiter, policy)
    }

    /// Adds numbers to the end, keeping duplicates and their order
    pub fn append<I: IntoIterator<Item = i64>>(&mut self, numbers: I) {
        self.numbers.extend(numbers);
    }

    /// Sorts the whole list in place. Equal values have no guaranteed relative order.
    pub fn sort(&mut self, order: SortOrder) {
        match order {
            SortOrder::Ascending => self.numbers.sort_unstable(),
            SortOrder::Descending => self.numbers.sort_unstable_by(|a, b| b.cmp(a)),
        }
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.numbers
    }

    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    pub fn into_vec(self) -> Vec<i64> {
        self.numbers
    }
}

impl From<Vec<i64>> for NumberList {
    fn from(numbers: Vec<i64>) -> Self {
        Self { numbers }
    }
}

impl Extend<i64> for NumberList {
    fn extend<I: IntoIterator<Item = i64>>(&mut self, iter: I) {
        self.append(iter);
    }
}

impl fmt::Display for NumberList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, n) in self.numbers.iter().enumerate() {
            if i > 0 {
                f.write_str(RENDER_SEPARATOR)?;
            }
            write!(f, "{}", n)?;
        }
        Ok(())
    }
}
