//! Bracket classification against a fixed set of pairs.

use thiserror::Error;

/// Classifies single characters as openers, closers, or neither.
///
/// The validator only ever asks these questions through this trait, so an
/// alternative bracket alphabet can be swapped in without touching the scan.
///
/// # Example
///
/// ```
/// use bracket_lint_core::{BracketClassifier, BracketPairs};
///
/// let pairs = BracketPairs::default();
/// assert!(pairs.is_opener('('));
/// assert_eq!(pairs.closer_for('{'), Some('}'));
/// assert!(!pairs.is_matching_pair('[', ')'));
/// ```
pub trait BracketClassifier: Send + Sync {
    /// Returns true if `c` opens a nesting scope.
    fn is_opener(&self, c: char) -> bool;

    /// Returns the closer registered for `opener`, or `None` if `opener`
    /// is not a registered opener.
    fn closer_for(&self, opener: char) -> Option<char>;

    /// Returns true if `c` is the closer of some registered opener.
    fn is_closer(&self, c: char) -> bool;

    /// Returns true if `closer` correctly closes `opener`.
    ///
    /// An unregistered opener matches nothing.
    fn is_matching_pair(&self, opener: char, closer: char) -> bool {
        self.closer_for(opener) == Some(closer)
    }
}

/// Errors raised when building a [`BracketPairs`] registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifierError {
    /// No pairs were supplied.
    #[error("bracket pair set is empty")]
    Empty,

    /// The same opener was registered twice.
    #[error("duplicate opener '{0}'")]
    DuplicateOpener(char),

    /// The same closer was registered twice.
    #[error("duplicate closer '{0}'")]
    DuplicateCloser(char),

    /// A character was registered as both an opener and a closer.
    #[error("'{0}' is registered as both an opener and a closer")]
    Ambiguous(char),

    /// A pair spec was not exactly two characters.
    #[error("invalid bracket pair \"{0}\": expected exactly two characters, e.g. \"()\"")]
    Malformed(String),
}

/// The default registry: an ordered list of `(opener, closer)` pairs.
///
/// Lookups are linear; realistic alphabets hold a handful of pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BracketPairs {
    pairs: Vec<(char, char)>,
}

impl BracketPairs {
    /// Builds a registry from `(opener, closer)` pairs.
    ///
    /// # Errors
    ///
    /// Returns an error if the set is empty, an opener or closer repeats, or
    /// a character appears on both sides.
    pub fn new<I>(pairs: I) -> Result<Self, ClassifierError>
    where
        I: IntoIterator<Item = (char, char)>,
    {
        let mut registered: Vec<(char, char)> = Vec::new();

        for (open, close) in pairs {
            if registered.iter().any(|&(o, _)| o == open) {
                return Err(ClassifierError::DuplicateOpener(open));
            }
            if registered.iter().any(|&(_, c)| c == close) {
                return Err(ClassifierError::DuplicateCloser(close));
            }
            if open == close || registered.iter().any(|&(_, c)| c == open) {
                return Err(ClassifierError::Ambiguous(open));
            }
            if registered.iter().any(|&(o, _)| o == close) {
                return Err(ClassifierError::Ambiguous(close));
            }
            registered.push((open, close));
        }

        if registered.is_empty() {
            return Err(ClassifierError::Empty);
        }

        Ok(Self { pairs: registered })
    }

    /// Builds a registry from two-character specs such as `"()"` or `"<>"`.
    ///
    /// # Errors
    ///
    /// Returns [`ClassifierError::Malformed`] for a spec that is not exactly
    /// two characters, plus every error [`BracketPairs::new`] can return.
    pub fn from_specs<S: AsRef<str>>(specs: &[S]) -> Result<Self, ClassifierError> {
        let pairs = specs
            .iter()
            .map(|spec| {
                let spec = spec.as_ref();
                let mut chars = spec.chars();
                match (chars.next(), chars.next(), chars.next()) {
                    (Some(open), Some(close), None) => Ok((open, close)),
                    _ => Err(ClassifierError::Malformed(spec.to_string())),
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(pairs)
    }

    /// Iterates the registered pairs in registration order.
    pub fn pairs(&self) -> impl Iterator<Item = (char, char)> + '_ {
        self.pairs.iter().copied()
    }
}

impl Default for BracketPairs {
    /// `()`, `{}` and `[]`.
    fn default() -> Self {
        Self {
            pairs: vec![('(', ')'), ('{', '}'), ('[', ']')],
        }
    }
}

impl BracketClassifier for BracketPairs {
    fn is_opener(&self, c: char) -> bool {
        self.pairs.iter().any(|&(open, _)| open == c)
    }

    fn closer_for(&self, opener: char) -> Option<char> {
        self.pairs
            .iter()
            .find(|&&(open, _)| open == opener)
            .map(|&(_, close)| close)
    }

    fn is_closer(&self, c: char) -> bool {
        self.pairs.iter().any(|&(_, close)| close == c)
    }
}
