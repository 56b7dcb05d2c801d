use crate::{Answer, BuildError, ChoiceDefault, Fallback, InvalidMessage, Validator};

/// A single question in a questionnaire.
#[derive(Debug, Clone)]
pub struct Question {
    /// The prompt text shown to the user.
    prompt: String,

    /// The kind of question (determines how answers are parsed).
    kind: QuestionKind,

    /// Raw default answer used on an empty line.
    fallback: Option<Fallback>,

    /// Acceptance rule for raw input.
    validator: Option<Validator>,

    /// Feedback shown when the validator rejects input.
    invalid: Option<InvalidMessage>,

    /// Key in the result map; the prompt is used when unset.
    key: Option<String>,

    /// Text printed right before the prompt.
    pre_text: Option<String>,
}

impl Question {
    /// Create a new question of the given kind.
    pub fn new(prompt: impl Into<String>, kind: QuestionKind) -> Self {
        Self {
            prompt: prompt.into(),
            kind,
            fallback: None,
            validator: None,
            invalid: None,
            key: None,
            pre_text: None,
        }
    }

    /// Create a free-form question.
    pub fn text(prompt: impl Into<String>) -> Self {
        Self::new(prompt, QuestionKind::Text)
    }

    /// Create a yes/no question.
    ///
    /// A missing fallback becomes "no", so pressing enter always answers.
    pub fn yes_no(prompt: impl Into<String>, fallback: Option<bool>) -> Self {
        let mut question = Self::new(prompt, QuestionKind::YesNo);
        question.set_fallback(fallback.unwrap_or(false));
        question.set_validator(Validator::YesNo);
        question
    }

    /// Create a question that accepts exactly one of `choices`.
    pub fn choice(
        prompt: impl Into<String>,
        choices: Vec<String>,
        default: Option<ChoiceDefault>,
    ) -> Result<Self, BuildError> {
        let prompt = prompt.into();
        if choices.is_empty() {
            return Err(BuildError::EmptyChoices { prompt });
        }

        let fallback = default
            .as_ref()
            .and_then(|d| d.resolve(&choices))
            .map(Fallback::from);

        let mut question = Self::new(prompt, QuestionKind::Choice);
        question.fallback = fallback;
        question.set_validator(Validator::OneOf(choices));
        Ok(question)
    }

    /// Get the prompt text.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Get the question kind.
    pub fn kind(&self) -> &QuestionKind {
        &self.kind
    }

    /// Get the fallback, if any.
    pub fn fallback(&self) -> Option<&Fallback> {
        self.fallback.as_ref()
    }

    /// Get the validator, if any.
    pub fn validator(&self) -> Option<&Validator> {
        self.validator.as_ref()
    }

    /// Get the invalid-input feedback, if any.
    pub fn invalid(&self) -> Option<&InvalidMessage> {
        self.invalid.as_ref()
    }

    /// Get the text printed before the prompt, if any.
    pub fn pre_text(&self) -> Option<&str> {
        self.pre_text.as_deref()
    }

    /// The key this question's answer is stored under.
    pub fn key(&self) -> &str {
        self.key.as_deref().unwrap_or(&self.prompt)
    }

    /// Replace the fallback. Empty fallback text clears it.
    pub fn set_fallback(&mut self, fallback: impl Into<Fallback>) {
        let fallback = fallback.into();
        self.fallback = (!fallback.is_empty()).then_some(fallback);
    }

    /// Replace the validator.
    pub fn set_validator(&mut self, validator: impl Into<Validator>) {
        self.validator = Some(validator.into());
    }

    /// Replace the invalid-input feedback.
    pub fn set_invalid(&mut self, message: impl Into<InvalidMessage>) {
        self.invalid = Some(message.into());
    }

    /// Override the result key.
    pub fn set_key(&mut self, key: impl Into<String>) {
        self.key = Some(key.into());
    }

    /// Append a line to the text printed before the prompt.
    pub fn push_pre_text(&mut self, message: &str) {
        match &mut self.pre_text {
            Some(pre) => {
                pre.push('\n');
                pre.push_str(message);
            }
            None => self.pre_text = Some(message.to_string()),
        }
    }

    /// The prompt as rendered on the line device: `"<prompt>: (<fallback>) "`.
    pub fn prompt_line(&self) -> String {
        match &self.fallback {
            Some(fallback) => format!("{}: ({}) ", self.prompt, fallback),
            None => format!("{}: ", self.prompt),
        }
    }

    /// Parse accepted raw text into an answer.
    pub fn parse(&self, raw: &str) -> Answer {
        self.kind.parse(raw)
    }
}

/// The kind of question, determining how accepted text is parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionKind {
    /// Free-form text, stored verbatim.
    Text,

    /// Yes/no, stored as a bool.
    YesNo,

    /// Pick one of a fixed list, stored verbatim.
    ///
    /// The list itself lives in the question's [`Validator::OneOf`].
    Choice,
}

impl QuestionKind {
    /// Parse accepted raw text.
    ///
    /// Yes/no answers are `true` exactly when the text starts with `y` or `Y`.
    pub fn parse(&self, raw: &str) -> Answer {
        match self {
            Self::Text | Self::Choice => Answer::Text(raw.to_string()),
            Self::YesNo => Answer::Bool(raw.starts_with(['y', 'Y'])),
        }
    }
}

/// A question together with its accepted answer.
///
/// Only shared access is offered, so an answered question cannot change.
#[derive(Debug, Clone)]
pub struct AnsweredQuestion {
    question: Question,
    answer: Answer,
}

impl AnsweredQuestion {
    /// Attach an answer to a question.
    pub fn new(question: Question, answer: Answer) -> Self {
        Self { question, answer }
    }

    /// The answered question.
    pub fn question(&self) -> &Question {
        &self.question
    }

    /// The accepted answer.
    pub fn answer(&self) -> &Answer {
        &self.answer
    }

    /// The key the answer is stored under.
    pub fn key(&self) -> &str {
        self.question.key()
    }
}
