//! Interactive terminal implementation of the LineDevice trait.

use std::fmt;
use std::io::{self, BufRead, IsTerminal};

use dialoguer::console::Term;
use dialoguer::theme::ColorfulTheme;
use pregunta::{DeviceError, LineDevice};

/// Terminal line device.
///
/// Prompts and messages go through `dialoguer`'s console layer. When stdin is
/// a terminal, lines are read with the console's line editor; otherwise
/// (piped or redirected input) plain lines are read from stdin.
pub struct ConsoleDevice {
    term: Term,
    /// Colorful theme for prompts; `None` for plain output.
    theme: Option<ColorfulTheme>,
}

impl ConsoleDevice {
    /// Create a device on stdout with the colorful theme.
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
            theme: Some(ColorfulTheme::default()),
        }
    }

    /// Create a device with plain (no color) prompts.
    pub fn plain() -> Self {
        Self {
            term: Term::stdout(),
            theme: None,
        }
    }

    /// Write to `term` instead of stdout.
    pub fn with_term(mut self, term: Term) -> Self {
        self.term = term;
        self
    }

    fn render_prompt(&self, text: &str) -> String {
        match &self.theme {
            Some(theme) => format!(
                "{} {}",
                theme.prompt_prefix,
                theme.prompt_style.apply_to(text)
            ),
            None => text.to_string(),
        }
    }

    fn interactive(&self) -> bool {
        self.term.is_term() && io::stdin().is_terminal()
    }
}

impl Default for ConsoleDevice {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ConsoleDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleDevice")
            .field("term", &self.term)
            .field("colorful", &self.theme.is_some())
            .finish()
    }
}

impl LineDevice for ConsoleDevice {
    fn prompt(&mut self, text: &str) -> Result<(), DeviceError> {
        let rendered = self.render_prompt(text);
        self.term.write_str(&rendered).map_err(DeviceError::from_io)?;
        self.term.flush().map_err(DeviceError::from_io)
    }

    fn request_line(&mut self) -> Result<String, DeviceError> {
        if self.interactive() {
            return self.term.read_line().map_err(DeviceError::from_io);
        }

        let mut line = String::new();
        let read = io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(DeviceError::from_io)?;
        if read == 0 {
            tracing::debug!("stdin reached end of input");
            return Err(DeviceError::Closed);
        }
        Ok(line)
    }

    fn print(&mut self, text: &str) -> Result<(), DeviceError> {
        self.term.write_line(text).map_err(DeviceError::from_io)
    }

    fn close(&mut self) -> Result<(), DeviceError> {
        self.term.flush().map_err(DeviceError::from_io)
    }
}
