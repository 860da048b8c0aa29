use core::fmt;
use core::ops::Range;

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    NotInteger(Box<str>),
    NotUtf8,
    BadArray(usize, usize),
    ExpectedTuple(usize),
    ExpectedSplit(char),
    ExpectedWord(&'static str),
    ExpectedElement,
    TrailingInput(Box<str>),
    UnexpectedEof,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::NotInteger(n) => write!(f, "not an integer or integer overflow `{n}`"),
            ErrorKind::NotUtf8 => write!(f, "not utf-8"),
            ErrorKind::BadArray(expected, actual) => {
                write!(f, "bad array; expected {expected}, but got {actual}")
            }
            ErrorKind::ExpectedTuple(n) => write!(f, "expected tuple of length `{n}`"),
            ErrorKind::ExpectedSplit(d) => write!(f, "expected `{d}`"),
            ErrorKind::ExpectedWord(word) => write!(f, "expected `{word}`"),
            ErrorKind::ExpectedElement => write!(f, "expected list element"),
            ErrorKind::TrailingInput(rest) => write!(f, "unexpected trailing input `{rest}`"),
            ErrorKind::UnexpectedEof => write!(f, "unexpected eof"),
        }
    }
}

impl std::error::Error for ErrorKind {}

/// Error raised through string processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IStrError {
    span: Range<usize>,
    kind: ErrorKind,
}

impl IStrError {
    /// Construct a new input error.
    #[inline]
    pub fn new(span: Range<usize>, kind: ErrorKind) -> Self {
        Self { span, kind }
    }

    /// The byte span the error refers to.
    #[inline]
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    #[inline]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    #[inline]
    pub fn into_kind(self) -> ErrorKind {
        self.kind
    }
}

impl fmt::Display for IStrError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (at {:?})", self.kind, self.span)
    }
}

impl std::error::Error for IStrError {}
