//! Coffee order over plain stdin/stdout, suitable for piped input.
//!
//! Run with: printf 'large\ny\nSam\n' | cargo run -p pregunta-console --example coffee_stdio

use example_questionnaires::coffee_order;
use pregunta::{Questionnaire, StreamDevice};

fn main() -> anyhow::Result<()> {
    let mut questionnaire = Questionnaire::new(StreamDevice::stdio());
    coffee_order(&mut questionnaire)?;

    questionnaire.run_then(|result| -> anyhow::Result<()> {
        let answers = result?;
        let mut order: Vec<_> = answers.iter().collect();
        order.sort_by_key(|(key, _)| *key);
        for (key, answer) in order {
            println!("{key}: {answer}");
        }
        Ok(())
    })
}
