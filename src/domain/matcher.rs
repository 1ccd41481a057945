//! Matching raised errors against an expected kind plus a substring,
//! regular expression, or predicate.

use crate::domain::error::AssertionFailure;
use regex::Regex;
use std::any::type_name;
use std::error::Error as StdError;
use std::fmt;

/// How a raised error of kind `K` is checked once its kind matched.
pub enum ErrorMatch<K> {
    /// `K`'s `Display` output contains the text.
    Substring(String),
    /// `K`'s `Display` output matches the pattern.
    Pattern(Regex),
    /// Arbitrary check on the typed error.
    Predicate(Box<dyn Fn(&K) -> bool>),
}

impl<K> ErrorMatch<K> {
    pub fn substring(text: impl Into<String>) -> Self {
        Self::Substring(text.into())
    }

    pub fn pattern(re: Regex) -> Self {
        Self::Pattern(re)
    }

    pub fn predicate(f: impl Fn(&K) -> bool + 'static) -> Self {
        Self::Predicate(Box::new(f))
    }

    pub fn matches(&self, err: &K) -> bool
    where
        K: fmt::Display,
    {
        match self {
            Self::Substring(text) => err.to_string().contains(text.as_str()),
            Self::Pattern(re) => re.is_match(&err.to_string()),
            Self::Predicate(f) => f(err),
        }
    }

    fn describe(&self) -> String {
        match self {
            Self::Substring(text) => format!("contain {:?}", text),
            Self::Pattern(re) => format!("match /{}/", re.as_str()),
            Self::Predicate(_) => "satisfy the predicate".to_string(),
        }
    }
}

impl<K> From<&str> for ErrorMatch<K> {
    fn from(text: &str) -> Self {
        Self::substring(text)
    }
}

impl<K> From<String> for ErrorMatch<K> {
    fn from(text: String) -> Self {
        Self::Substring(text)
    }
}

impl<K> From<Regex> for ErrorMatch<K> {
    fn from(re: Regex) -> Self {
        Self::Pattern(re)
    }
}

impl<K> fmt::Debug for ErrorMatch<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Substring(text) => f.debug_tuple("Substring").field(text).finish(),
            Self::Pattern(re) => f.debug_tuple("Pattern").field(&re.as_str()).finish(),
            Self::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

/// Run `f` and check that it fails with an error of kind `K` accepted by
/// `matcher`.
///
/// Layers added with `anyhow::Context` are looked through, so a wrapped
/// error still matches on its underlying kind. Another error type that
/// carries a `K` as its `source()` is a different kind and does not match.
pub fn check_raises_with_predicate_match<K, T, E, F>(
    matcher: impl Into<ErrorMatch<K>>,
    f: F,
) -> Result<(), AssertionFailure>
where
    K: StdError + Send + Sync + 'static,
    E: Into<anyhow::Error>,
    F: FnOnce() -> Result<T, E>,
{
    let matcher = matcher.into();
    let err: anyhow::Error = match f() {
        Ok(_) => {
            return Err(AssertionFailure::NoError {
                expected: type_name::<K>(),
            });
        }
        Err(e) => e.into(),
    };

    let Some(kind) = err.downcast_ref::<K>() else {
        return Err(AssertionFailure::WrongKind {
            expected: type_name::<K>(),
            actual: format!("{:#}", err),
        });
    };

    if matcher.matches(kind) {
        Ok(())
    } else {
        Err(AssertionFailure::PredicateMismatch {
            kind: type_name::<K>(),
            matcher: matcher.describe(),
            error: kind.to_string(),
        })
    }
}

/// Panicking form of [`check_raises_with_predicate_match`], for use as a
/// test assertion.
#[track_caller]
pub fn assert_raises_with_predicate_match<K, T, E, F>(matcher: impl Into<ErrorMatch<K>>, f: F)
where
    K: StdError + Send + Sync + 'static,
    E: Into<anyhow::Error>,
    F: FnOnce() -> Result<T, E>,
{
    if let Err(failure) = check_raises_with_predicate_match::<K, T, E, F>(matcher, f) {
        panic!("{}", failure);
    }
}
