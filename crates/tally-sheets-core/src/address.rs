//! Cell addresses and column letter conversion
//!
//! Report templates address columns with spreadsheet letters (`A`..`Z`,
//! `AA`..`ZZ`). Only one- and two-letter columns are supported; that is the
//! ceiling the downstream binary writer works with.

use crate::error::{Error, Result};
use std::fmt;

/// The column alphabet, kept sorted so rank lookup can binary search.
const ALPHABET: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

const ALPHABET_SIZE: u32 = 26;

/// Highest 0-based column index expressible with two letters ("ZZ")
pub const MAX_COLUMN_INDEX: u32 = ALPHABET_SIZE * ALPHABET_SIZE + ALPHABET_SIZE - 1;

/// Convert a 0-based column index to its letter notation.
///
/// `0 -> "A"`, `25 -> "Z"`, `26 -> "AA"`, `701 -> "ZZ"`. Indices beyond
/// two letters are not supported.
///
/// Note the asymmetry with [`column_index`]: this function takes a 0-based
/// index while its inverse produces a 1-based one. Callers depend on each
/// convention independently, so both are kept as-is.
pub fn column_letters(index: u32) -> Result<String> {
    if index < ALPHABET_SIZE {
        Ok(ALPHABET[index as usize].to_string())
    } else if index <= MAX_COLUMN_INDEX {
        let first = ALPHABET[(index / ALPHABET_SIZE - 1) as usize];
        let second = ALPHABET[(index % ALPHABET_SIZE) as usize];
        Ok(format!("{}{}", first, second))
    } else {
        Err(Error::ColumnOutOfRange(index, MAX_COLUMN_INDEX))
    }
}

/// Convert column letters to a 1-based column number.
///
/// `"A" -> 1`, `"Z" -> 26`, `"AA" -> 27`, `"ZZ" -> 702`. Input is
/// case-insensitive. Empty strings and strings longer than two letters are
/// rejected with [`Error::InvalidColumn`].
pub fn column_index(letters: &str) -> Result<u32> {
    let normalized = letters.to_ascii_uppercase();
    let chars: Vec<char> = normalized.chars().collect();

    match chars.as_slice() {
        [single] => Ok(letter_rank(*single, letters)? + 1),
        [first, second] => {
            let first_rank = letter_rank(*first, letters)?;
            let second_rank = letter_rank(*second, letters)?;
            Ok((first_rank + 1) * ALPHABET_SIZE + (second_rank + 1))
        }
        _ => Err(Error::InvalidColumn(letters.to_string())),
    }
}

/// 0-based rank of a letter in the alphabet, via binary search.
fn letter_rank(letter: char, original: &str) -> Result<u32> {
    ALPHABET
        .binary_search(&letter)
        .map(|rank| rank as u32)
        .map_err(|_| Error::InvalidColumn(original.to_string()))
}

/// A cell's position on a sheet: 1-based row number plus column letters.
///
/// This is the writer-facing coordinate (`C7` style), assigned by
/// [`Sheet::assign_positions`](crate::sheet::Sheet::assign_positions) and
/// substituted into formula templates in place of `#id#` tokens.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Address {
    /// Row number (1-based, as displayed)
    pub row: u32,
    /// Column letters (e.g. "A", "AJ")
    pub column: String,
}

impl Address {
    /// Create an address from a 1-based row number and column letters
    pub fn new<S: Into<String>>(row: u32, column: S) -> Self {
        Self {
            row,
            column: column.into(),
        }
    }

    /// Create an address from 0-based grid indices
    pub fn from_indices(row: usize, col: usize) -> Result<Self> {
        Ok(Self {
            row: row as u32 + 1,
            column: column_letters(col as u32)?,
        })
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.column, self.row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_letters_single() {
        assert_eq!(column_letters(0).unwrap(), "A");
        assert_eq!(column_letters(1).unwrap(), "B");
        assert_eq!(column_letters(25).unwrap(), "Z");
    }

    #[test]
    fn test_letters_double() {
        assert_eq!(column_letters(26).unwrap(), "AA");
        assert_eq!(column_letters(27).unwrap(), "AB");
        assert_eq!(column_letters(51).unwrap(), "AZ");
        assert_eq!(column_letters(52).unwrap(), "BA");
        assert_eq!(column_letters(MAX_COLUMN_INDEX).unwrap(), "ZZ");
    }

    #[test]
    fn test_letters_out_of_range() {
        assert!(column_letters(MAX_COLUMN_INDEX + 1).is_err());
        assert!(column_letters(u32::MAX).is_err());
    }

    #[test]
    fn test_index_single() {
        assert_eq!(column_index("A").unwrap(), 1);
        assert_eq!(column_index("F").unwrap(), 6);
        assert_eq!(column_index("Z").unwrap(), 26);
    }

    #[test]
    fn test_index_double() {
        assert_eq!(column_index("AA").unwrap(), 27);
        assert_eq!(column_index("AJ").unwrap(), 36);
        assert_eq!(column_index("ZZ").unwrap(), 702);
    }

    #[test]
    fn test_index_case_insensitive() {
        assert_eq!(column_index("a").unwrap(), 1);
        assert_eq!(column_index("aj").unwrap(), 36);
    }

    #[test]
    fn test_index_invalid() {
        assert!(column_index("").is_err());
        assert!(column_index("AAA").is_err());
        assert!(column_index("4").is_err());
        assert!(column_index("A!").is_err());
    }

    #[test]
    fn test_address_display() {
        assert_eq!(Address::new(7, "C").to_string(), "C7");
        assert_eq!(Address::new(12, "AB").to_string(), "AB12");
    }

    #[test]
    fn test_address_from_indices() {
        let addr = Address::from_indices(0, 0).unwrap();
        assert_eq!(addr, Address::new(1, "A"));

        let addr = Address::from_indices(4, 26).unwrap();
        assert_eq!(addr, Address::new(5, "AA"));
    }

    proptest! {
        // The conversion pair is 0-based in and 1-based out, so the
        // composition recovers index + 1 over the full two-letter range.
        #[test]
        fn round_trip(index in 0u32..=MAX_COLUMN_INDEX) {
            let letters = column_letters(index).unwrap();
            prop_assert!(letters.len() <= 2);
            prop_assert_eq!(column_index(&letters).unwrap(), index + 1);
        }
    }
}
