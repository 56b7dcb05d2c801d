//! Core types for the pregunta crate.
//!
//! This crate provides the foundational types for defining questionnaires:
//! - `Question` and `QuestionKind` - Individual questions and how their answers parse
//! - `Validator`, `InvalidMessage`, `Fallback` - Per-question acceptance rules
//! - `Answer` and `Answers` - Parsed answers and the final result map
//! - `LineDevice` trait - For implementing terminal (or scripted) line devices

mod answer;
pub use answer::Answer;

mod answers;
pub use answers::{AnswerError, Answers};

mod fallback;
pub use fallback::{ChoiceDefault, Fallback};

mod validator;
pub use validator::Validator;

mod invalid_message;
pub use invalid_message::InvalidMessage;

mod question;
pub use question::{AnsweredQuestion, Question, QuestionKind};

mod error;
pub use error::{BuildError, DeviceError, QuestionnaireError};

mod device;
pub use device::LineDevice;
