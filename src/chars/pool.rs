//! Character pool building.

use crate::error::{Error, Result};

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];
pub const SYMBOLS: &str = "~!@#$%^&*(){}[]\"';:.>/?,<|\\`-+";
pub const WHITESPACE: char = ' ';

/// Which character classes feed the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharClasses {
    pub uppercase: bool,
    pub lowercase: bool,
    pub digits: bool,
    pub symbols: bool,
    pub whitespace: bool,
}

impl CharClasses {
    pub const fn none() -> Self {
        Self {
            uppercase: false,
            lowercase: false,
            digits: false,
            symbols: false,
            whitespace: false,
        }
    }

    pub const fn all() -> Self {
        Self {
            uppercase: true,
            lowercase: true,
            digits: true,
            symbols: true,
            whitespace: true,
        }
    }

    pub const fn digits_only() -> Self {
        Self {
            digits: true,
            ..Self::none()
        }
    }

    pub fn any(&self) -> bool {
        self.uppercase || self.lowercase || self.digits || self.symbols || self.whitespace
    }
}

impl Default for CharClasses {
    /// Letters of both cases and digits.
    fn default() -> Self {
        Self {
            uppercase: true,
            lowercase: true,
            digits: true,
            symbols: false,
            whitespace: false,
        }
    }
}

/// Build the character pool in class order:
/// uppercase, lowercase, digits, symbols, space.
pub fn build(classes: &CharClasses) -> Result<Vec<char>> {
    if !classes.any() {
        return Err(Error::config(
            "at least one character class must be selected",
        ));
    }

    let mut chars: Vec<char> = Vec::with_capacity(size(classes));

    if classes.uppercase {
        chars.extend(UPPERCASE.chars());
    }

    if classes.lowercase {
        chars.extend(LOWERCASE.chars());
    }

    if classes.digits {
        chars.extend(DIGITS);
    }

    if classes.symbols {
        chars.extend(SYMBOLS.chars());
    }

    if classes.whitespace {
        chars.push(WHITESPACE);
    }

    Ok(chars)
}

/// Pool size for the given classes, without building it.
pub fn size(classes: &CharClasses) -> usize {
    let mut size = 0;
    if classes.uppercase {
        size += 26;
    }
    if classes.lowercase {
        size += 26;
    }
    if classes.digits {
        size += DIGITS.len();
    }
    if classes.symbols {
        size += SYMBOLS.chars().count();
    }
    if classes.whitespace {
        size += 1;
    }
    size
}
