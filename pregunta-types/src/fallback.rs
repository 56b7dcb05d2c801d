use std::fmt;

/// Default raw answer used when the user submits an empty line.
///
/// The fallback is kept as raw text and goes through the question's parser
/// like typed input does, so a yes/no fallback is stored as `"yes"`/`"no"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fallback(String);

impl Fallback {
    /// Create a fallback from raw answer text.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The raw fallback text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if the fallback text is empty.
    ///
    /// An empty fallback is treated as no fallback at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Fallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Fallback {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Fallback {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<bool> for Fallback {
    fn from(b: bool) -> Self {
        Self::new(if b { "yes" } else { "no" })
    }
}

/// Default selection for a choice question, by position or by value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChoiceDefault {
    /// Index into the choice list.
    Index(usize),

    /// Literal choice text.
    Choice(String),
}

impl ChoiceDefault {
    /// Resolve against a choice list.
    ///
    /// Anything that does not name a member of `choices` resolves to the first
    /// choice. Returns `None` only when `choices` is empty.
    pub fn resolve<'a>(&self, choices: &'a [String]) -> Option<&'a str> {
        let found = match self {
            Self::Index(idx) => choices.get(*idx),
            Self::Choice(choice) => choices.iter().find(|c| *c == choice),
        };
        found.or_else(|| choices.first()).map(String::as_str)
    }
}

impl From<usize> for ChoiceDefault {
    fn from(idx: usize) -> Self {
        Self::Index(idx)
    }
}

impl From<&str> for ChoiceDefault {
    fn from(s: &str) -> Self {
        Self::Choice(s.to_string())
    }
}

impl From<String> for ChoiceDefault {
    fn from(s: String) -> Self {
        Self::Choice(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> Vec<String> {
        vec!["a".into(), "b".into(), "c".into()]
    }

    #[test]
    fn bool_fallback_renders_yes_no() {
        assert_eq!(Fallback::from(true).as_str(), "yes");
        assert_eq!(Fallback::from(false).as_str(), "no");
    }

    #[test]
    fn index_default_resolves() {
        assert_eq!(ChoiceDefault::from(1usize).resolve(&abc()), Some("b"));
    }

    #[test]
    fn out_of_range_index_resolves_to_first() {
        assert_eq!(ChoiceDefault::from(7usize).resolve(&abc()), Some("a"));
    }

    #[test]
    fn choice_default_resolves() {
        assert_eq!(ChoiceDefault::from("c").resolve(&abc()), Some("c"));
        assert_eq!(ChoiceDefault::from("z").resolve(&abc()), Some("a"));
    }

    #[test]
    fn empty_choices_resolve_to_nothing() {
        assert_eq!(ChoiceDefault::from(0usize).resolve(&[]), None);
    }
}
