use core::fmt;
use core::ops::Range;

use crate::input::NL;

/// A line and column combination.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCol {
    line: usize,
    start: usize,
    end: usize,
}

impl LineCol {
    pub(crate) const EMPTY: Self = Self::new(0, 0, 0);

    pub(crate) const fn new(line: usize, start: usize, end: usize) -> Self {
        Self { line, start, end }
    }

    /// The one-based line number.
    #[inline]
    pub fn line(&self) -> usize {
        self.line + 1
    }

    /// The one-based column the span starts at.
    #[inline]
    pub fn column(&self) -> usize {
        self.start
    }
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = self.line + 1;

        if self.end > self.start {
            write!(f, "{line}:{}-{}", self.start, self.end)
        } else {
            write!(f, "{line}:{}", self.start)
        }
    }
}

/// Get the position in `data` of the given byte span.
pub fn pos_from(data: &[u8], span: Range<usize>) -> LineCol {
    let Some(d) = data.get(..=span.start) else {
        return LineCol::EMPTY;
    };

    let (line, last) = memchr::memchr_iter(NL, d)
        .enumerate()
        .last()
        .map(|(line, n)| (line + 1, Some(n)))
        .unwrap_or_default();

    let from = last.map(|n| n.saturating_add(1)).unwrap_or_default();
    let start = d.get(from..).unwrap_or_default().len();

    let end = match data.get(span) {
        Some(spanned) if !spanned.is_empty() => {
            let len = memchr::memchr(NL, spanned).unwrap_or(spanned.len());
            start.saturating_add(len).saturating_sub(1)
        }
        _ => start,
    };

    LineCol::new(line, start, end)
}

#[cfg(test)]
mod tests {
    use super::pos_from;

    #[test]
    fn test_first_line() {
        let pos = pos_from(b"abc def\nghi", 4..7);
        assert_eq!(pos.line(), 1);
        assert_eq!(pos.column(), 5);
        assert_eq!(pos.to_string(), "1:5-7");
    }

    #[test]
    fn test_later_line() {
        let pos = pos_from(b"abc\ndef\nghi jk", 12..14);
        assert_eq!(pos.line(), 3);
        assert_eq!(pos.column(), 5);
        assert_eq!(pos.to_string(), "3:5-6");
    }

    #[test]
    fn test_empty_span() {
        let pos = pos_from(b"abc\ndef", 5..5);
        assert_eq!(pos.to_string(), "2:2");
    }

    #[test]
    fn test_out_of_bounds() {
        let pos = pos_from(b"abc", 10..12);
        assert_eq!(pos.to_string(), "1:0");
    }
}
