//! The "crypto square" transposition cipher.
//!
//! The plaintext is normalized (lowercased, with everything but ASCII letters
//! and digits thrown away) and written into a grid with `columns` characters
//! per row, where `columns` is the smallest number whose square is at least the
//! length of the normalized text. The ciphertext is the grid read column by
//! column, with a space between columns.
//!
//! # Examples
//!
//! ```
//! use bst::crypto_square::CryptoSquare;
//!
//! let square = CryptoSquare::new("Her red car");
//!
//! assert_eq!(square.normalized(), "herredcar");
//! assert_eq!(square.plaintext_segments(), vec!["her", "red", "car"]);
//! assert_eq!(square.encode(), "hrc eea rdr");
//! ```

/// Normalized plaintext ready to be laid out in a grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CryptoSquare {
    normalized: String,
}

impl CryptoSquare {
    /// Normalizes `text` so it can be encoded.
    pub fn new(text: &str) -> Self {
        let normalized: String = text
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .map(|c| c.to_ascii_lowercase())
            .collect();
        let square = Self { normalized };

        log::trace!(
            "crypto square of {} chars: {} columns x {} rows",
            square.normalized.len(),
            square.columns(),
            square.rows()
        );
        square
    }

    /// The lowercase letters and digits that will be encoded.
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// How many characters go in each row of the grid. This is also how many
    /// space separated chunks the ciphertext has.
    pub fn columns(&self) -> usize {
        let len = self.normalized.len();
        let mut columns = 0;
        while columns * columns < len {
            columns += 1;
        }

        columns
    }

    /// How many rows the grid has. The last row may be shorter than the rest.
    pub fn rows(&self) -> usize {
        match self.columns() {
            0 => 0,
            columns => (self.normalized.len() + columns - 1) / columns,
        }
    }

    /// The rows of the grid, top to bottom.
    pub fn plaintext_segments(&self) -> Vec<&str> {
        match self.columns() {
            0 => Vec::new(),
            columns => self
                .normalized
                .as_bytes()
                .chunks(columns)
                .map(|row| std::str::from_utf8(row).unwrap_or_default())
                .collect(),
        }
    }

    /// Reads the grid column by column. Columns are separated by a single space
    /// and are not padded when the last row is short.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::crypto_square::CryptoSquare;
    ///
    /// assert_eq!(CryptoSquare::new("Her red in").encode(), "hri een rd");
    /// assert_eq!(CryptoSquare::new("Her car").encode(), "hc ea rr");
    /// assert_eq!(CryptoSquare::new("").encode(), "");
    /// ```
    pub fn encode(&self) -> String {
        let columns = self.columns();
        let bytes = self.normalized.as_bytes();

        (0..columns)
            .map(|column| {
                bytes
                    .iter()
                    .skip(column)
                    .step_by(columns)
                    .map(|&b| char::from(b))
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Shorthand for `CryptoSquare::new(text).encode()`.
pub fn encode(text: &str) -> String {
    CryptoSquare::new(text).encode()
}
