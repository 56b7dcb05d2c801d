use std::collections::HashMap;
use std::str::FromStr;

use crate::{Answer, AnsweredQuestion};

/// Error type for answer lookups.
#[derive(Debug, thiserror::Error)]
pub enum AnswerError {
    #[error("Missing answer for key: {0}")]
    Missing(String),

    #[error("Type mismatch at key '{key}': expected {expected}, got {actual}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("Cannot parse answer '{value}' at key '{key}': {reason}")]
    Parse {
        key: String,
        value: String,
        reason: String,
    },
}

/// The result map of a finished questionnaire.
///
/// Keys are the result key of each question, or its prompt text when no key
/// was set. When two questions share a key, the one answered later wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Answers {
    values: HashMap<String, Answer>,
}

impl Answers {
    /// Create a new empty answer map.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Fold a completed list into a map, in completion order.
    pub fn from_completed<'a>(completed: impl IntoIterator<Item = &'a AnsweredQuestion>) -> Self {
        let mut answers = Self::new();
        for answered in completed {
            answers.insert(answered.key(), answered.answer().clone());
        }
        answers
    }

    /// Insert an answer, replacing any previous answer under the same key.
    pub fn insert(&mut self, key: impl Into<String>, answer: impl Into<Answer>) {
        self.values.insert(key.into(), answer.into());
    }

    /// Get the answer stored under `key`.
    pub fn get(&self, key: &str) -> Option<&Answer> {
        self.values.get(key)
    }

    /// Check if an answer exists under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Get an iterator over all key-answer pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Answer)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Get the number of answers.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if there are no answers.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get a text answer.
    pub fn get_text(&self, key: &str) -> Result<&str, AnswerError> {
        match self.get(key) {
            Some(Answer::Text(s)) => Ok(s),
            Some(other) => Err(AnswerError::TypeMismatch {
                key: key.to_string(),
                expected: "Text",
                actual: other.type_name(),
            }),
            None => Err(AnswerError::Missing(key.to_string())),
        }
    }

    /// Get a boolean answer.
    pub fn get_bool(&self, key: &str) -> Result<bool, AnswerError> {
        match self.get(key) {
            Some(Answer::Bool(b)) => Ok(*b),
            Some(other) => Err(AnswerError::TypeMismatch {
                key: key.to_string(),
                expected: "Bool",
                actual: other.type_name(),
            }),
            None => Err(AnswerError::Missing(key.to_string())),
        }
    }

    /// Parse a text answer into `T`.
    pub fn parse_text<T>(&self, key: &str) -> Result<T, AnswerError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        let value = self.get_text(key)?;
        value.parse().map_err(|err: T::Err| AnswerError::Parse {
            key: key.to_string(),
            value: value.to_string(),
            reason: err.to_string(),
        })
    }
}

impl IntoIterator for Answers {
    type Item = (String, Answer);
    type IntoIter = std::collections::hash_map::IntoIter<String, Answer>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a Answers {
    type Item = (&'a String, &'a Answer);
    type IntoIter = std::collections::hash_map::Iter<'a, String, Answer>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl<K: Into<String>, V: Into<Answer>> FromIterator<(K, V)> for Answers {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut answers = Self::new();
        for (key, value) in iter {
            answers.insert(key, value);
        }
        answers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Question;

    #[test]
    fn parse_text_converts_or_reports() {
        let mut answers = Answers::new();
        answers.insert("port", "443");
        answers.insert("age", "old");
        answers.insert("ok", true);

        assert_eq!(answers.parse_text::<u16>("port").unwrap(), 443);
        assert!(matches!(
            answers.parse_text::<u8>("age"),
            Err(AnswerError::Parse { key, value, .. }) if key == "age" && value == "old"
        ));
        assert!(matches!(
            answers.parse_text::<u8>("ok"),
            Err(AnswerError::TypeMismatch { .. })
        ));
        assert!(matches!(
            answers.parse_text::<u8>("missing"),
            Err(AnswerError::Missing(_))
        ));
    }

    #[test]
    fn insert_and_get() {
        let mut answers = Answers::new();
        answers.insert("name", "Alice");
        answers.insert("student", true);

        assert_eq!(answers.get_text("name").unwrap(), "Alice");
        assert!(answers.get_bool("student").unwrap());
    }

    #[test]
    fn type_mismatch_error() {
        let mut answers = Answers::new();
        answers.insert("student", true);

        let result = answers.get_text("student");
        assert!(matches!(result, Err(AnswerError::TypeMismatch { .. })));
    }

    #[test]
    fn missing_key_error() {
        let answers = Answers::new();
        assert!(matches!(
            answers.get_bool("nope"),
            Err(AnswerError::Missing(key)) if key == "nope"
        ));
    }

    #[test]
    fn later_answer_wins_on_shared_key() {
        let mut first = Question::text("First name?");
        first.set_key("name");
        let mut second = Question::text("Nickname?");
        second.set_key("name");

        let completed = vec![
            AnsweredQuestion::new(first, Answer::from("Robert")),
            AnsweredQuestion::new(second, Answer::from("Bob")),
        ];

        let answers = Answers::from_completed(&completed);
        assert_eq!(answers.len(), 1);
        assert_eq!(answers.get_text("name").unwrap(), "Bob");
    }

    #[test]
    fn prompt_is_the_default_key() {
        let completed = vec![AnsweredQuestion::new(
            Question::text("Name?"),
            Answer::from("Ada"),
        )];

        let answers = Answers::from_completed(&completed);
        assert_eq!(answers.get_text("Name?").unwrap(), "Ada");
    }
}
