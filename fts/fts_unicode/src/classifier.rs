//! Character classification and case folding.
//!
//! The tokenizer asks two questions of every decoded character: does it
//! belong to a word, and what is its folded form. Both answers come from a
//! [`Classifier`], so hosts with their own Unicode tables can plug them in.

/// Word-character oracle used by the tokenizer.
///
/// Implementations must be pure: the same character always gets the same
/// answer. [`REPLACEMENT`](fts_utf8::REPLACEMENT) must not be alphanumeric,
/// otherwise malformed input would leak into token text.
pub trait Classifier {
    /// Whether `c` is part of a token rather than a delimiter.
    fn is_alphanumeric(&self, c: char) -> bool;

    /// Simple (one-to-one) case folding of `c`.
    fn fold(&self, c: char) -> char;
}

impl<C: Classifier + ?Sized> Classifier for &C {
    #[inline]
    fn is_alphanumeric(&self, c: char) -> bool {
        (**self).is_alphanumeric(c)
    }

    #[inline]
    fn fold(&self, c: char) -> char {
        (**self).fold(c)
    }
}

/// Classifier backed by the standard library's Unicode tables.
///
/// Alphanumeric means `Alphabetic` or `Numeric` (`char::is_alphanumeric`).
/// Folding takes the first scalar of the full lowercase mapping, which is
/// the simple mapping for every character except the few whose lowercase
/// form expands (U+0130 folds to plain `i`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UnicodeClassifier;

impl Classifier for UnicodeClassifier {
    #[inline]
    fn is_alphanumeric(&self, c: char) -> bool {
        if c.is_ascii() {
            return c.is_ascii_alphanumeric();
        }
        c.is_alphanumeric()
    }

    #[inline]
    fn fold(&self, c: char) -> char {
        if c.is_ascii() {
            return c.to_ascii_lowercase();
        }
        c.to_lowercase().next().unwrap_or(c)
    }
}
