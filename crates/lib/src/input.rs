//! Input parser.

mod error;

#[cfg(test)]
mod tests;

use core::fmt;
use core::ops;
use std::str::from_utf8;

use arrayvec::ArrayVec;
use bstr::BStr;

pub use self::error::{ErrorKind, IStrError};

pub(self) type Result<T> = std::result::Result<T, IStrError>;

pub(crate) const NL: u8 = b'\n';

/// Helper to parse borrowed input.
///
/// Every view keeps track of its absolute offset into the text it was
/// constructed from, so that errors can be traced back to a line and column
/// through [crate::pos_from].
#[derive(Clone, Copy)]
pub struct IStr<'a> {
    /// The data being parsed.
    data: &'a [u8],
    /// Absolute index of `data` in the original input.
    index: usize,
}

impl<'a> IStr<'a> {
    /// Construct a new input processor.
    #[inline]
    pub fn new(data: &'a str) -> Self {
        Self::from_parts(data.as_bytes(), 0)
    }

    #[inline]
    fn from_parts(data: &'a [u8], index: usize) -> Self {
        Self { data, index }
    }

    /// Access index of input string.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The absolute span covered by the remaining input.
    #[inline]
    pub fn span(&self) -> ops::Range<usize> {
        self.index..self.index.saturating_add(self.data.len())
    }

    /// Test if input is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Test if the remaining input only consists of whitespace.
    #[inline]
    pub fn is_blank(&self) -> bool {
        self.data.iter().all(u8::is_ascii_whitespace)
    }

    /// Get the length of the current input.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Get input being processed.
    #[inline]
    pub fn as_data(&self) -> &'a [u8] {
        self.data
    }

    /// Get remaining binary string of the input.
    #[inline]
    pub fn as_bstr(&self) -> &'a BStr {
        BStr::new(self.data)
    }

    /// Parse the next value as T.
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn next<T>(&mut self) -> Result<T>
    where
        T: FromInput<'a>,
    {
        T::from_input(self)
    }

    /// Try parse the next value as `T`, returns `None` if there is no more
    /// data to process.
    #[inline]
    pub fn try_next<T>(&mut self) -> Result<Option<T>>
    where
        T: FromInput<'a>,
    {
        T::try_from_input(self)
    }

    /// Split off the next raw line.
    #[inline]
    pub fn next_line(&mut self) -> Option<IStr<'a>> {
        self.split_once(NL)
    }

    /// Consume words up until and including `word`.
    pub fn skip_past(&mut self, word: &'static str) -> Result<()> {
        let index = self.index;

        while let Some(W(current)) = self.try_next::<W<&str>>()? {
            if current == word {
                return Ok(());
            }
        }

        Err(IStrError::new(index..self.index, ErrorKind::ExpectedWord(word)))
    }

    /// Consume the next word if it is one of `words`.
    pub fn eat_any(&mut self, words: &[&str]) -> Result<bool> {
        let mut peek = *self;

        match peek.try_next::<W<&str>>()? {
            Some(W(word)) if words.iter().any(|w| *w == word) => {
                *self = peek;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Try to parse the next word.
    pub fn try_next_word<T>(&mut self) -> Result<Option<(usize, T)>>
    where
        T: FromInput<'a>,
    {
        let s = self.find(0, |b| !u8::is_ascii_whitespace(b));
        let n = self.find(s, u8::is_ascii_whitespace);

        if s == n {
            return Ok(None);
        }

        let Some(mut input) = self.slice(s..n) else {
            return Ok(None);
        };

        let Some(value) = T::try_from_input(&mut input)? else {
            return Ok(None);
        };

        self.advance(n);
        Ok(Some((s, value)))
    }

    /// Iterate over the chunks of input separated by `byte`.
    #[inline]
    pub fn splitn(&mut self, byte: u8) -> Splitn<'_, 'a> {
        Splitn { input: self, byte }
    }

    /// Split once at the given byte or at the end of input, returning the
    /// chunk up until the split.
    fn split_once(&mut self, b: u8) -> Option<IStr<'a>> {
        if self.data.is_empty() {
            return None;
        }

        let index = self.index;

        let Some(at) = memchr::memchr(b, self.data) else {
            let data = self.data;
            self.advance(data.len());
            return Some(IStr::from_parts(data, index));
        };

        let data = self.data.get(..at)?;
        self.advance(at.checked_add(1)?);
        Some(IStr::from_parts(data, index))
    }

    /// Find by predicate.
    fn find(&self, mut n: usize, p: fn(&u8) -> bool) -> usize {
        while let Some(c) = self.data.get(n) {
            if p(c) {
                break;
            }

            n += 1;
        }

        n
    }

    #[inline]
    fn advance(&mut self, n: usize) {
        let n = n.min(self.data.len());
        self.data = self.data.get(n..).unwrap_or_default();
        self.index = self.index.saturating_add(n);
    }

    /// Construct a sub-range.
    #[inline]
    fn slice(&self, range: ops::Range<usize>) -> Option<IStr<'a>> {
        let index = self.index.checked_add(range.start)?;
        Some(Self::from_parts(self.data.get(range)?, index))
    }
}

impl fmt::Debug for IStr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IStr")
            .field("data", &self.as_bstr())
            .field("index", &self.index)
            .finish()
    }
}

/// A value that can be parsed from input.
pub trait FromInput<'a>: Sized {
    /// Custom error kind to use.
    #[inline]
    fn error_kind() -> ErrorKind {
        ErrorKind::UnexpectedEof
    }

    /// Try to parse a value, returning `None` if there is no input to parse
    /// it from.
    fn try_from_input(p: &mut IStr<'a>) -> Result<Option<Self>>;

    /// Parse a value from a given input.
    #[inline]
    fn from_input(p: &mut IStr<'a>) -> Result<Self> {
        let index = p.index;

        let Some(value) = Self::try_from_input(p)? else {
            return Err(IStrError::new(index..p.index, Self::error_kind()));
        };

        Ok(value)
    }
}

/// Iterator over chunks of input.
pub trait InputIterator<'a> {
    /// Current index of the input iterator.
    fn index(&self) -> usize;

    /// Get the next chunk.
    fn next(&mut self) -> Option<IStr<'a>>;
}

/// See [IStr::splitn].
pub struct Splitn<'s, 'a> {
    input: &'s mut IStr<'a>,
    byte: u8,
}

impl<'a> InputIterator<'a> for Splitn<'_, 'a> {
    #[inline]
    fn index(&self) -> usize {
        self.input.index
    }

    #[inline]
    fn next(&mut self) -> Option<IStr<'a>> {
        self.input.split_once(self.byte)
    }
}

/// Parse something from a sequence of input chunks.
pub trait FromInputIter<'a>: Sized {
    /// Construct from chunks, returning `None` if there are too few of them.
    fn from_input_iter<I>(inputs: I) -> Result<Option<Self>>
    where
        I: InputIterator<'a>;
}

macro_rules! tuple {
    ($num:literal => $first:ident $first_id:ident $(, $rest:ident $rest_id:ident)* $(,)?) => {
        impl<'a, $first, $($rest,)*> FromInput<'a> for ($first, $($rest, )*)
        where
            $first: FromInput<'a>,
            $($rest: FromInput<'a>,)*
        {
            #[inline]
            fn error_kind() -> ErrorKind {
                ErrorKind::ExpectedTuple($num)
            }

            #[inline]
            fn try_from_input(p: &mut IStr<'a>) -> Result<Option<Self>> {
                let Some($first_id) = p.try_next()? else {
                    return Ok(None);
                };

                $(
                    let Some($rest_id) = p.try_next()? else {
                        return Ok(None);
                    };
                )*

                Ok(Some(($first_id, $($rest_id,)*)))
            }
        }

        impl<'a, $first, $($rest,)*> FromInputIter<'a> for ($first, $($rest,)*)
        where
            $first: FromInput<'a>,
            $($rest: FromInput<'a>,)*
        {
            #[inline]
            fn from_input_iter<I>(mut inputs: I) -> Result<Option<Self>>
            where
                I: InputIterator<'a>
            {
                let Some(mut $first_id) = inputs.next() else {
                    return Ok(None);
                };

                $(
                    let Some(mut $rest_id) = inputs.next() else {
                        return Ok(None);
                    };
                )*

                let Some($first_id) = <$first>::try_from_input(&mut $first_id)? else {
                    return Ok(None);
                };

                $(
                    let Some($rest_id) = <$rest>::try_from_input(&mut $rest_id)? else {
                        return Ok(None);
                    };
                )*

                Ok(Some(($first_id, $($rest_id,)*)))
            }
        }
    }
}

macro_rules! integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<'a> FromInput<'a> for $ty {
                #[inline]
                fn try_from_input(p: &mut IStr<'a>) -> Result<Option<Self>> {
                    let index = p.index;

                    let Some((n, string)) = p.try_next_word::<&str>()? else {
                        return Ok(None);
                    };

                    let Ok(value) = str::parse(string) else {
                        let span = index.saturating_add(n)..p.index;
                        return Err(IStrError::new(span, ErrorKind::NotInteger(string.into())));
                    };

                    Ok(Some(value))
                }
            }
        )*
    };
}

tuple!(2 => A a, B b);

integer!(u32, u64);

impl<'a> FromInput<'a> for IStr<'a> {
    #[inline]
    fn try_from_input(p: &mut IStr<'a>) -> Result<Option<Self>> {
        let rest = *p;
        p.advance(p.len());
        Ok(Some(rest))
    }
}

impl<'a> FromInput<'a> for &'a [u8] {
    #[inline]
    fn try_from_input(p: &mut IStr<'a>) -> Result<Option<Self>> {
        let data = p.data;
        p.advance(data.len());
        Ok(Some(data))
    }
}

impl<'a> FromInput<'a> for &'a str {
    #[inline]
    fn try_from_input(p: &mut IStr<'a>) -> Result<Option<Self>> {
        let index = p.index;

        let Some(data) = <&[u8]>::try_from_input(p)? else {
            return Ok(None);
        };

        let Ok(data) = from_utf8(data) else {
            return Err(IStrError::new(index..p.index, ErrorKind::NotUtf8));
        };

        Ok(Some(data))
    }
}

impl<'a, T, const N: usize> FromInput<'a> for [T; N]
where
    T: FromInput<'a>,
{
    #[inline]
    fn try_from_input(p: &mut IStr<'a>) -> Result<Option<Self>> {
        let start = p.index;
        let mut output = ArrayVec::<T, N>::new();

        while output.remaining_capacity() > 0 {
            let Some(element) = T::try_from_input(p)? else {
                break;
            };

            output.push(element);
        }

        if output.is_empty() {
            return Ok(None);
        }

        match output.into_inner() {
            Ok(array) => Ok(Some(array)),
            Err(output) => Err(IStrError::new(
                start..p.index,
                ErrorKind::BadArray(N, output.len()),
            )),
        }
    }
}

/// Split once on byte `D`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Split<const D: char, T>(pub T);

impl<'a, const D: char, T> FromInput<'a> for Split<D, T>
where
    T: FromInputIter<'a>,
{
    #[inline]
    fn error_kind() -> ErrorKind {
        ErrorKind::ExpectedSplit(D)
    }

    #[inline]
    fn try_from_input(p: &mut IStr<'a>) -> Result<Option<Self>> {
        let Some(out) = T::from_input_iter(p.splitn(D as u8))? else {
            return Ok(None);
        };

        Ok(Some(Self(out)))
    }
}

/// A list separated by `D`, where every element must be a single `T`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sep<const D: char, T>(pub Vec<T>);

impl<'a, const D: char, T> FromInput<'a> for Sep<D, T>
where
    T: FromInput<'a>,
{
    fn try_from_input(p: &mut IStr<'a>) -> Result<Option<Self>> {
        let mut output = Vec::new();

        if p.is_blank() {
            p.advance(p.len());
            return Ok(Some(Self(output)));
        }

        let mut it = p.splitn(D as u8);

        while let Some(mut chunk) = it.next() {
            if chunk.is_blank() {
                return Err(IStrError::new(chunk.span(), ErrorKind::ExpectedElement));
            }

            output.push(chunk.next::<T>()?);

            if !chunk.is_blank() {
                let trailing = chunk.as_bstr().to_string();
                return Err(IStrError::new(
                    chunk.span(),
                    ErrorKind::TrailingInput(trailing.trim().into()),
                ));
            }
        }

        Ok(Some(Self(output)))
    }
}

/// Matches anything without consuming it.
#[derive(Debug)]
#[non_exhaustive]
pub struct Skip;

impl<'a> FromInput<'a> for Skip {
    #[inline]
    fn try_from_input(_: &mut IStr<'a>) -> Result<Option<Self>> {
        Ok(Some(Self))
    }
}

/// Parse a word of input, which parses until we reach a whitespace character.
#[derive(Debug)]
pub struct W<T = Skip>(pub T);

impl<'a, T> FromInput<'a> for W<T>
where
    T: FromInput<'a>,
{
    #[inline]
    fn try_from_input(p: &mut IStr<'a>) -> Result<Option<Self>> {
        let Some((_, value)) = p.try_next_word()? else {
            return Ok(None);
        };

        Ok(Some(Self(value)))
    }
}
