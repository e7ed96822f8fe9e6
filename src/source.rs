//! # Source Buffer
//!
//! [`SourceFile`] is the read-only byte buffer every component scans. It is
//! created once by the owner of a scan and handed to tokens behind an
//! [`Arc`](std::sync::Arc), so any number of components can read it at the
//! same time without copying.
//!
//! ## Sentinel Convention
//!
//! Reading at or past the end of the data yields `0`. A zero byte inside the
//! data reads the same way, which lets a producer cut a scan short without
//! changing the buffer length. Matchers stop their forward scans on `0`
//! instead of checking the length at every step.
//!
//! ```text
//! [b'S', b'E', b'L', ... , b'M', 0, 0, 0 ...]
//!  ^                             ^
//!  0                             len() (sentinel)
//! ```

use std::fmt;

/// Zero byte terminating every scan.
pub const SENTINEL: u8 = 0;

#[derive(Clone, PartialEq, Eq)]
pub struct SourceFile {
    name: String,
    data: Vec<u8>,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            data: data.into(),
        }
    }

    /// Builds an unnamed buffer, mostly for tests and one-off scans.
    pub fn from_text(text: &str) -> Self {
        Self::new("<input>", text)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the byte at `pos`, or [`SENTINEL`] past the end.
    #[inline]
    pub fn byte_at(&self, pos: usize) -> u8 {
        self.data.get(pos).copied().unwrap_or(SENTINEL)
    }

    /// Byte length of the run starting at `pos` whose bytes satisfy `pred`,
    /// stopping at the first sentinel.
    pub fn run_len(&self, pos: usize, mut pred: impl FnMut(u8) -> bool) -> usize {
        let mut end = pos;
        loop {
            let b = self.byte_at(end);
            if b == SENTINEL || !pred(b) {
                break;
            }
            end += 1;
        }
        end - pos
    }

    /// Text of `pos..pos + len`, lossily decoded.
    pub fn text(&self, pos: usize, len: usize) -> String {
        let start = pos.min(self.data.len());
        let end = (pos + len).min(self.data.len());
        String::from_utf8_lossy(&self.data[start..end]).into_owned()
    }

    /// Width in bytes of the UTF-8 character starting at `pos`.
    ///
    /// Falls back to `1` for bytes that do not begin a valid sequence and
    /// returns `0` at the end of the data.
    pub fn char_len_at(&self, pos: usize) -> usize {
        if pos >= self.data.len() {
            return 0;
        }
        let width = match self.data[pos] {
            0x00..=0x7F => 1,
            0xC2..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF4 => 4,
            _ => 1,
        };
        let end = (pos + width).min(self.data.len());
        if std::str::from_utf8(&self.data[pos..end]).is_ok() {
            end - pos
        } else {
            1
        }
    }

    /// 1-based line and column of `pos`. Columns count characters, not bytes.
    pub fn line_col(&self, pos: usize) -> (usize, usize) {
        let end = pos.min(self.data.len());
        let prefix = String::from_utf8_lossy(&self.data[..end]);
        let mut line = 1;
        let mut column = 1;
        for c in prefix.chars() {
            if c == '\n' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }
        (line, column)
    }
}

impl fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceFile")
            .field("name", &self.name)
            .field("len", &self.data.len())
            .finish()
    }
}
