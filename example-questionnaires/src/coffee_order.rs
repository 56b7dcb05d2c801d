use pregunta::{BuildError, ChoiceDefault, InvalidMessage, LineDevice, Questionnaire};

pub const SIZES: [&str; 3] = ["small", "medium", "large"];

/// Coffee order. Keeps the prompts as result keys.
pub fn coffee_order<D: LineDevice>(q: &mut Questionnaire<D>) -> Result<(), BuildError> {
    q.say("Welcome to the coffee bar!")
        .choose_one("Size", SIZES, Some(ChoiceDefault::Index(1)))?
        .say("We serve small, medium and large.")
        .on_invalid(InvalidMessage::with(|input| {
            format!("We don't have '{input}' cups. Pick one of: {}", SIZES.join(", "))
        }))
        .yes_no("Oat milk", None)
        .ask("Name for the cup");
    Ok(())
}
