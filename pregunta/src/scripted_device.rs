//! Scripted line device for running questionnaires without a terminal.
//!
//! `ScriptedDevice` hands out pre-defined input lines one at a time and
//! records everything the questionnaire renders, so tests can assert on both
//! the answers and the dialogue.
//!
//! # Example
//!
//! ```
//! use pregunta::{Questionnaire, ScriptedDevice};
//!
//! let mut questionnaire = Questionnaire::new(ScriptedDevice::new().with_lines(["", "n"]));
//! questionnaire.ask("City").with_default("NYC").yes_no("Confirm", true);
//!
//! let answers = questionnaire.run().unwrap();
//! assert_eq!(answers.get_text("City").unwrap(), "NYC");
//! assert!(!answers.get_bool("Confirm").unwrap());
//! ```

use std::collections::VecDeque;

use crate::{DeviceError, LineDevice};

/// Something the questionnaire did with the device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A prompt was rendered.
    Prompt(String),
    /// A message was printed.
    Print(String),
    /// A line was handed out.
    Input(String),
    /// The device was closed at the end of a run.
    Close,
}

/// A line device that replays scripted input.
///
/// Running out of lines behaves like end of input: the next request fails
/// with [`DeviceError::Closed`].
#[derive(Debug, Clone, Default)]
pub struct ScriptedDevice {
    lines: VecDeque<String>,
    transcript: Vec<Event>,
}

impl ScriptedDevice {
    /// Create a device with no scripted input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one line of input.
    pub fn with_line(mut self, line: impl Into<String>) -> Self {
        self.push_line(line);
        self
    }

    /// Add several lines of input, in order.
    pub fn with_lines<S: Into<String>>(mut self, lines: impl IntoIterator<Item = S>) -> Self {
        self.lines.extend(lines.into_iter().map(Into::into));
        self
    }

    /// Queue one more line of input.
    pub fn push_line(&mut self, line: impl Into<String>) {
        self.lines.push_back(line.into());
    }

    /// Lines not yet handed out.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }

    /// Everything that happened, in order.
    pub fn transcript(&self) -> &[Event] {
        &self.transcript
    }

    /// Every prompt rendered so far.
    pub fn prompts(&self) -> Vec<&str> {
        self.transcript
            .iter()
            .filter_map(|event| match event {
                Event::Prompt(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Every message printed so far.
    pub fn printed(&self) -> Vec<&str> {
        self.transcript
            .iter()
            .filter_map(|event| match event {
                Event::Print(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// How many times the device was closed.
    pub fn close_count(&self) -> usize {
        self.transcript
            .iter()
            .filter(|event| matches!(event, Event::Close))
            .count()
    }
}

impl LineDevice for ScriptedDevice {
    fn prompt(&mut self, text: &str) -> Result<(), DeviceError> {
        self.transcript.push(Event::Prompt(text.to_string()));
        Ok(())
    }

    fn request_line(&mut self) -> Result<String, DeviceError> {
        let line = self.lines.pop_front().ok_or(DeviceError::Closed)?;
        self.transcript.push(Event::Input(line.clone()));
        Ok(line)
    }

    fn print(&mut self, text: &str) -> Result<(), DeviceError> {
        self.transcript.push(Event::Print(text.to_string()));
        Ok(())
    }

    fn close(&mut self) -> Result<(), DeviceError> {
        self.transcript.push(Event::Close);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hands_out_lines_in_order() {
        let mut device = ScriptedDevice::new().with_line("a").with_lines(["b", "c"]);
        assert_eq!(device.request_line().unwrap(), "a");
        assert_eq!(device.request_line().unwrap(), "b");
        assert_eq!(device.remaining(), 1);
    }

    #[test]
    fn running_dry_is_closed_input() {
        let mut device = ScriptedDevice::new();
        assert!(matches!(device.request_line(), Err(DeviceError::Closed)));
    }

    #[test]
    fn records_transcript() {
        let mut device = ScriptedDevice::new().with_line("x");
        device.print("hello").unwrap();
        device.prompt("Name: ").unwrap();
        device.request_line().unwrap();
        device.close().unwrap();

        assert_eq!(
            device.transcript(),
            &[
                Event::Print("hello".into()),
                Event::Prompt("Name: ".into()),
                Event::Input("x".into()),
                Event::Close,
            ]
        );
        assert_eq!(device.prompts(), vec!["Name: "]);
        assert_eq!(device.printed(), vec!["hello"]);
        assert_eq!(device.close_count(), 1);
    }
}
