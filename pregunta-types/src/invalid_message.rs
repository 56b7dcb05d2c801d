use std::fmt;
use std::sync::Arc;

const DEFAULT_INVALID: &str = "invalid input";

/// Feedback printed when a validator rejects an answer.
#[derive(Clone)]
pub enum InvalidMessage {
    /// Literal text; `%s` echoes the rejected input and `%%` is a literal `%`.
    Template(String),

    /// Function from the rejected input to feedback text.
    Custom(Arc<dyn Fn(&str) -> String + Send + Sync>),
}

impl InvalidMessage {
    /// Build a message from a function of the rejected input.
    pub fn with(f: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        Self::Custom(Arc::new(f))
    }

    /// Render the feedback for `input`.
    pub fn render(&self, input: &str) -> String {
        match self {
            Self::Template(template) if template.is_empty() => DEFAULT_INVALID.to_string(),
            Self::Template(template) if template.contains('%') => fill_template(template, input),
            Self::Template(template) => template.clone(),
            Self::Custom(f) => f(input),
        }
    }
}

fn fill_template(template: &str, input: &str) -> String {
    let mut out = String::with_capacity(template.len() + input.len());
    let mut chars = template.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        match chars.peek() {
            Some('s') => {
                chars.next();
                out.push_str(input);
            }
            Some('%') => {
                chars.next();
                out.push('%');
            }
            _ => out.push('%'),
        }
    }
    out
}

impl fmt::Debug for InvalidMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Template(template) => f.debug_tuple("Template").field(template).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl From<&str> for InvalidMessage {
    fn from(s: &str) -> Self {
        Self::Template(s.to_string())
    }
}

impl From<String> for InvalidMessage {
    fn from(s: String) -> Self {
        Self::Template(s)
    }
}
