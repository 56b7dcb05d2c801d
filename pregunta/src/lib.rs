//! # pregunta
//!
//! Ask a sequence of questions on a line-oriented terminal and collect the
//! answers into one flat map.
//!
//! Questions are registered up front with a fluent builder, then asked strictly
//! one at a time. Invalid answers are re-asked immediately; an empty line takes
//! the question's fallback when it has one.
//!
//! ## Usage
//!
//! ```
//! use pregunta::{Questionnaire, ScriptedDevice};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let device = ScriptedDevice::new().with_lines(["Ada", "", "green"]);
//! let mut questionnaire = Questionnaire::new(device);
//!
//! questionnaire
//!     .say("Tell us about yourself.")
//!     .ask("What is your name?")
//!     .with_key("name")
//!     .yes_no("Are you a student?", false)
//!     .with_key("student")
//!     .choose_one("Favourite color", ["red", "green", "blue"], None)?
//!     .on_invalid("'%s' is not on the list")
//!     .with_key("color");
//!
//! let answers = questionnaire.run()?;
//! assert_eq!(answers.get_text("name")?, "Ada");
//! assert!(!answers.get_bool("student")?);
//! assert_eq!(answers.get_text("color")?, "green");
//! # Ok(())
//! # }
//! ```
//!
//! ## Builder methods
//!
//! - `ask` / `ask_with` - Free-form text
//! - `yes_no` - Yes/no, answered as a bool
//! - `choose_one` - One of a fixed list of strings
//! - `with_default`, `with_validator`, `with_pattern`, `on_invalid`, `with_key`, `say` -
//!   Decorate the most recently added question
//!
//! ## Devices
//!
//! Questionnaires talk to a [`LineDevice`]:
//! - [`ScriptedDevice`] - Replays scripted input, for tests
//! - [`StreamDevice`] - Any `BufRead` + `Write` pair, including stdin/stdout
//! - `pregunta-console` - Interactive terminal with colored prompts

// Re-export all types from pregunta-types
pub use pregunta_types::*;

mod questionnaire;
pub use questionnaire::Questionnaire;

mod engine;
pub use engine::{Step, Verdict, evaluate};

// Scripted device for testing questionnaires without user interaction
mod scripted_device;
pub use scripted_device::{Event, ScriptedDevice};

mod stream_device;
pub use stream_device::StreamDevice;
