use pregunta::{AnswerError, Answers, BuildError, LineDevice, Questionnaire};

/// A simple user profile.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    /// User's full name.
    pub name: String,

    /// User's age.
    pub age: u8,

    /// User's email address.
    pub email: String,

    /// Whether the user wants to receive the newsletter.
    pub newsletter: bool,
}

impl UserProfile {
    /// Register the profile questions.
    pub fn ask<D: LineDevice>(q: &mut Questionnaire<D>) -> Result<(), BuildError> {
        q.ask("What is your name?")
            .with_key("name")
            .ask("How old are you?")
            .with_key("age")
            .with_validator(is_valid_age)
            .on_invalid("'%s' is not an age between 0 and 150")
            .ask("What is your email?")
            .with_key("email")
            .with_pattern_str(r"^[^@\s]+@[^@\s]+\.[^@\s]+$")?
            .on_invalid("That doesn't look like an email address")
            .yes_no("Would you like to receive our newsletter?", false)
            .with_key("newsletter");
        Ok(())
    }

    /// Rebuild a profile from collected answers.
    pub fn from_answers(answers: &Answers) -> Result<Self, AnswerError> {
        Ok(Self {
            name: answers.get_text("name")?.to_string(),
            age: answers.parse_text("age")?,
            email: answers.get_text("email")?.to_string(),
            newsletter: answers.get_bool("newsletter")?,
        })
    }
}

/// Ages are whole numbers from 0 to 150.
pub fn is_valid_age(input: &str) -> bool {
    input.parse::<u8>().is_ok_and(|age| age <= 150)
}
