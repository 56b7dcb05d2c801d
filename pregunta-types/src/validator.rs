use std::fmt;
use std::sync::{Arc, LazyLock};

use regex::Regex;

use crate::BuildError;

/// Loose yes/no matcher: accepts "y", "yes", "n", "no" and near misses like "yess" or "noo".
static YES_NO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[yn][eo]?[so]*$").expect("yes/no pattern is valid"));

/// Predicate deciding whether trimmed raw input is acceptable.
#[derive(Clone)]
pub enum Validator {
    /// Arbitrary caller-supplied predicate.
    Predicate(Arc<dyn Fn(&str) -> bool + Send + Sync>),

    /// Regular expression tested against the raw input.
    Pattern(Regex),

    /// Permissive yes/no matcher used by yes/no questions.
    YesNo,

    /// Input must equal one of the listed choices.
    OneOf(Vec<String>),
}

impl Validator {
    /// Wrap a predicate function.
    pub fn predicate(f: impl Fn(&str) -> bool + Send + Sync + 'static) -> Self {
        Self::Predicate(Arc::new(f))
    }

    /// Use a compiled regular expression.
    pub fn pattern(regex: Regex) -> Self {
        Self::Pattern(regex)
    }

    /// Compile a regular expression.
    pub fn pattern_str(pattern: &str) -> Result<Self, BuildError> {
        Ok(Self::Pattern(Regex::new(pattern)?))
    }

    /// Accept only the given choices.
    pub fn one_of<S: Into<String>>(choices: impl IntoIterator<Item = S>) -> Self {
        Self::OneOf(choices.into_iter().map(Into::into).collect())
    }

    /// Test the input.
    pub fn check(&self, input: &str) -> bool {
        match self {
            Self::Predicate(f) => f(input),
            Self::Pattern(regex) => regex.is_match(input),
            Self::YesNo => YES_NO.is_match(input),
            Self::OneOf(choices) => choices.iter().any(|c| c == input),
        }
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Predicate(_) => f.write_str("Predicate(..)"),
            Self::Pattern(regex) => f.debug_tuple("Pattern").field(&regex.as_str()).finish(),
            Self::YesNo => f.write_str("YesNo"),
            Self::OneOf(choices) => f.debug_tuple("OneOf").field(choices).finish(),
        }
    }
}

impl From<Regex> for Validator {
    fn from(regex: Regex) -> Self {
        Self::Pattern(regex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yes_no_accepts_common_spellings() {
        for input in ["y", "Y", "yes", "YES", "n", "no", "No", "yess", "noo", "ys"] {
            assert!(Validator::YesNo.check(input), "{input} should pass");
        }
    }

    #[test]
    fn yes_no_rejects_other_words() {
        for input in ["", "maybe", "yep", "nah", "sure", "ok"] {
            assert!(!Validator::YesNo.check(input), "{input} should fail");
        }
    }

    #[test]
    fn one_of_requires_exact_match() {
        let validator = Validator::one_of(["red", "green"]);
        assert!(validator.check("red"));
        assert!(!validator.check("Red"));
        assert!(!validator.check("blue"));
    }

    #[test]
    fn pattern_tests_raw_input() {
        let validator = Validator::pattern_str(r"^\d{3}$").unwrap();
        assert!(validator.check("123"));
        assert!(!validator.check("12a"));
    }

    #[test]
    fn bad_pattern_is_a_build_error() {
        assert!(matches!(
            Validator::pattern_str("(unclosed"),
            Err(BuildError::InvalidPattern(_))
        ));
    }

    #[test]
    fn predicate_is_called() {
        let validator = Validator::predicate(|s| s.len() > 2);
        assert!(validator.check("abc"));
        assert!(!validator.check("ab"));
    }
}
