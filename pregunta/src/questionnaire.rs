//! Fluent questionnaire builder.

use std::collections::VecDeque;

use regex::Regex;

use crate::{
    AnsweredQuestion, BuildError, ChoiceDefault, Fallback, InvalidMessage, LineDevice, Question,
    Validator,
};

pub(crate) const NOT_OPTIONAL: &str = "not optional";

/// An ordered questionnaire bound to a line device.
///
/// Builder methods append questions or decorate the most recently appended
/// one; decorating an empty questionnaire is a no-op. Call
/// [`Questionnaire::run`] to ask everything. A finished run leaves the
/// questionnaire empty and ready for the next set of questions.
pub struct Questionnaire<D> {
    pub(crate) device: D,
    pub(crate) pending: VecDeque<Question>,
    pub(crate) completed: Vec<AnsweredQuestion>,
    /// Position of the most recently appended question in `pending`.
    pub(crate) last: Option<usize>,
    pub(crate) not_optional: String,
}

impl<D: LineDevice> Questionnaire<D> {
    /// Create an empty questionnaire that talks to `device`.
    pub fn new(device: D) -> Self {
        Self {
            device,
            pending: VecDeque::new(),
            completed: Vec::new(),
            last: None,
            not_optional: NOT_OPTIONAL.to_string(),
        }
    }

    /// Replace the notice printed when a required question gets an empty line.
    pub fn with_not_optional_message(mut self, message: impl Into<String>) -> Self {
        self.not_optional = message.into();
        self
    }

    /// Append a free-form question.
    pub fn ask(&mut self, prompt: impl Into<String>) -> &mut Self {
        self.push(Question::text(prompt))
    }

    /// Append a free-form question with an optional fallback and validator.
    pub fn ask_with(
        &mut self,
        prompt: impl Into<String>,
        fallback: Option<Fallback>,
        validator: Option<Validator>,
    ) -> &mut Self {
        let mut question = Question::text(prompt);
        if let Some(fallback) = fallback {
            question.set_fallback(fallback);
        }
        if let Some(validator) = validator {
            question.set_validator(validator);
        }
        self.push(question)
    }

    /// Append a yes/no question. The answer is a bool.
    pub fn yes_no(
        &mut self,
        prompt: impl Into<String>,
        fallback: impl Into<Option<bool>>,
    ) -> &mut Self {
        self.push(Question::yes_no(prompt, fallback.into()))
    }

    /// Append a question that only accepts one of `choices`.
    ///
    /// `fallback` picks the default by index or by value; anything that does
    /// not name a member of `choices` falls back to the first choice.
    pub fn choose_one<S: Into<String>>(
        &mut self,
        prompt: impl Into<String>,
        choices: impl IntoIterator<Item = S>,
        fallback: Option<ChoiceDefault>,
    ) -> Result<&mut Self, BuildError> {
        let choices = choices.into_iter().map(Into::into).collect();
        let question = Question::choice(prompt, choices, fallback)?;
        Ok(self.push(question))
    }

    /// Append an already configured question.
    pub fn push(&mut self, question: Question) -> &mut Self {
        self.pending.push_back(question);
        self.last = Some(self.pending.len() - 1);
        self
    }

    /// Set the fallback of the most recent question.
    pub fn with_default(&mut self, fallback: impl Into<Fallback>) -> &mut Self {
        if let Some(question) = self.last_mut() {
            question.set_fallback(fallback);
        }
        self
    }

    /// Set a predicate validator on the most recent question.
    pub fn with_validator(
        &mut self,
        predicate: impl Fn(&str) -> bool + Send + Sync + 'static,
    ) -> &mut Self {
        if let Some(question) = self.last_mut() {
            question.set_validator(Validator::predicate(predicate));
        }
        self
    }

    /// Set a pattern validator on the most recent question.
    pub fn with_pattern(&mut self, regex: Regex) -> &mut Self {
        if let Some(question) = self.last_mut() {
            question.set_validator(regex);
        }
        self
    }

    /// Compile `pattern` and set it as the validator of the most recent question.
    pub fn with_pattern_str(&mut self, pattern: &str) -> Result<&mut Self, BuildError> {
        let regex = Regex::new(pattern)?;
        Ok(self.with_pattern(regex))
    }

    /// Set the feedback shown when the most recent question rejects input.
    ///
    /// Strings are templates where `%s` echoes the rejected input; use
    /// [`InvalidMessage::with`] for a function.
    pub fn on_invalid(&mut self, message: impl Into<InvalidMessage>) -> &mut Self {
        if let Some(question) = self.last_mut() {
            question.set_invalid(message);
        }
        self
    }

    /// Store the most recent question's answer under `key` instead of its prompt.
    pub fn with_key(&mut self, key: impl Into<String>) -> &mut Self {
        if let Some(question) = self.last_mut() {
            question.set_key(key);
        }
        self
    }

    /// Show `message` before the most recent question is asked.
    ///
    /// Before any question exists the message is printed right away.
    pub fn say(&mut self, message: impl AsRef<str>) -> &mut Self {
        let message = message.as_ref();
        match self.last_mut() {
            Some(question) => question.push_pre_text(message),
            None => {
                if let Err(err) = self.device.print(message) {
                    tracing::warn!(error = %err, "failed to print message");
                }
            }
        }
        self
    }

    /// Questions still waiting for an answer, front first.
    pub fn pending(&self) -> impl ExactSizeIterator<Item = &Question> {
        self.pending.iter()
    }

    /// Questions answered so far in the current run.
    pub fn completed(&self) -> &[AnsweredQuestion] {
        &self.completed
    }

    /// Check if nothing is queued or answered.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty() && self.completed.is_empty()
    }

    /// Get the line device.
    pub fn device(&self) -> &D {
        &self.device
    }

    /// Get a mutable reference to the line device.
    pub fn device_mut(&mut self) -> &mut D {
        &mut self.device
    }

    /// Drop the questionnaire and keep the device.
    pub fn into_device(self) -> D {
        self.device
    }

    fn last_mut(&mut self) -> Option<&mut Question> {
        self.last.and_then(|idx| self.pending.get_mut(idx))
    }

    /// Pop the front question, keeping `last` pointing at the same question.
    pub(crate) fn take_next(&mut self) -> Option<Question> {
        let question = self.pending.pop_front()?;
        self.last = self.last.and_then(|idx| idx.checked_sub(1));
        Some(question)
    }

    /// Put a question back at the front of the queue.
    ///
    /// With no other question appended since, the requeued one is the most
    /// recent again.
    pub(crate) fn requeue(&mut self, question: Question) {
        self.pending.push_front(question);
        self.last = Some(self.last.map_or(0, |idx| idx + 1));
    }
}
