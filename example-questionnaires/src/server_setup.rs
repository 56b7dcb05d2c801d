use pregunta::{AnswerError, Answers, BuildError, ChoiceDefault, LineDevice, Questionnaire};

pub const PROTOCOLS: [&str; 2] = ["http", "https"];

/// Server configuration with defaults for every field.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerSetup {
    pub host: String,
    pub port: u16,
    pub protocol: String,
    pub tls_verify: bool,
}

impl ServerSetup {
    /// Register the setup questions. Pressing enter everywhere keeps the defaults.
    pub fn ask<D: LineDevice>(q: &mut Questionnaire<D>) -> Result<(), BuildError> {
        q.say("Server configuration")
            .ask("Server host")
            .with_default("localhost")
            .with_key("host")
            .ask("Server port")
            .with_default("8080")
            .with_validator(is_valid_port)
            .on_invalid("%s is not a port number (1-65535)")
            .with_key("port")
            .choose_one("Protocol", PROTOCOLS, Some(ChoiceDefault::Choice("https".into())))?
            .say(format!("Available protocols: {}", PROTOCOLS.join(", ")))
            .with_key("protocol")
            .yes_no("Verify TLS certificates?", true)
            .with_key("tls_verify");
        Ok(())
    }

    /// Rebuild the setup from collected answers.
    pub fn from_answers(answers: &Answers) -> Result<Self, AnswerError> {
        Ok(Self {
            host: answers.get_text("host")?.to_string(),
            port: answers.parse_text("port")?,
            protocol: answers.get_text("protocol")?.to_string(),
            tls_verify: answers.get_bool("tls_verify")?,
        })
    }
}

pub fn is_valid_port(input: &str) -> bool {
    input.parse::<u16>().is_ok_and(|port| port != 0)
}
