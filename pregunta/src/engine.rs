//! The ask/validate/retry loop.

use crate::{
    Answer, AnsweredQuestion, Answers, LineDevice, Question, QuestionnaireError, Questionnaire,
};

/// How a single line of input was judged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The input (or the fallback) was accepted and parsed.
    Accepted(Answer),

    /// The validator rejected the input. Carries the feedback, if configured.
    Rejected(Option<String>),

    /// Empty input for a question with neither fallback nor validator.
    NotOptional,
}

/// Judge raw input against a question.
///
/// The input is trimmed first. An empty line takes the fallback when there is
/// one, without consulting the validator. Otherwise the validator decides;
/// without a validator anything but an empty line is accepted.
pub fn evaluate(question: &Question, raw: &str) -> Verdict {
    let input = raw.trim();

    if input.is_empty()
        && let Some(fallback) = question.fallback()
    {
        return Verdict::Accepted(question.parse(fallback.as_str()));
    }

    match question.validator() {
        Some(validator) if validator.check(input) => Verdict::Accepted(question.parse(input)),
        Some(_) => Verdict::Rejected(question.invalid().map(|message| message.render(input))),
        None if input.is_empty() => Verdict::NotOptional,
        None => Verdict::Accepted(question.parse(input)),
    }
}

/// Outcome of one iteration of the loop.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// A question was answered and moved to the completed list.
    Answered { key: String, answer: Answer },

    /// The input was rejected and the question is back at the front of the queue.
    Requeued { prompt: String },

    /// Nothing was left to ask; the run is over.
    Finished(Answers),
}

impl<D: LineDevice> Questionnaire<D> {
    /// Ask every pending question and return the result map.
    ///
    /// Questions are asked one at a time in order. A rejected answer re-asks
    /// the same question immediately, before any later one. On success the
    /// questionnaire is left empty and can be reused.
    ///
    /// If the device fails, the question in flight is put back at the front
    /// of the queue and answers collected so far are kept, so calling `run`
    /// again resumes where it stopped.
    pub fn run(&mut self) -> Result<Answers, QuestionnaireError> {
        loop {
            if let Step::Finished(answers) = self.step()? {
                return Ok(answers);
            }
        }
    }

    /// Run to completion and hand the outcome to `on_complete`.
    pub fn run_then<T>(
        &mut self,
        on_complete: impl FnOnce(Result<Answers, QuestionnaireError>) -> T,
    ) -> T {
        on_complete(self.run())
    }

    /// Perform one iteration: ask the front question, or finish the run.
    pub fn step(&mut self) -> Result<Step, QuestionnaireError> {
        let Some(question) = self.take_next() else {
            return self.finish();
        };

        let line = match self.ask_question(&question) {
            Ok(line) => line,
            Err(err) => {
                tracing::warn!(prompt = question.prompt(), error = %err, "line device failed");
                self.requeue(question);
                return Err(err.into());
            }
        };

        match evaluate(&question, &line) {
            Verdict::Accepted(answer) => {
                tracing::debug!(key = question.key(), %answer, "answer accepted");
                let key = question.key().to_string();
                self.completed.push(AnsweredQuestion::new(question, answer.clone()));
                Ok(Step::Answered { key, answer })
            }
            Verdict::Rejected(feedback) => {
                tracing::debug!(prompt = question.prompt(), "answer rejected");
                let prompt = question.prompt().to_string();
                self.requeue(question);
                if let Some(feedback) = feedback {
                    self.device.print(&feedback)?;
                }
                Ok(Step::Requeued { prompt })
            }
            Verdict::NotOptional => {
                tracing::debug!(prompt = question.prompt(), "empty answer to required question");
                let prompt = question.prompt().to_string();
                self.requeue(question);
                self.device.print(&self.not_optional)?;
                Ok(Step::Requeued { prompt })
            }
        }
    }

    fn ask_question(&mut self, question: &Question) -> Result<String, crate::DeviceError> {
        tracing::trace!(prompt = question.prompt(), "asking");
        if let Some(pre) = question.pre_text() {
            self.device.print(pre)?;
        }
        self.device.prompt(&question.prompt_line())?;
        self.device.request_line()
    }

    fn finish(&mut self) -> Result<Step, QuestionnaireError> {
        self.device.close()?;
        let answers = Answers::from_completed(&self.completed);
        tracing::debug!(answers = answers.len(), "questionnaire finished");
        self.completed.clear();
        self.pending.clear();
        self.last = None;
        Ok(Step::Finished(answers))
    }
}
