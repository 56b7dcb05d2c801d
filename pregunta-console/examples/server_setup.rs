//! Server setup where every question has a default.
//!
//! Run with: cargo run -p pregunta-console --example server_setup

use example_questionnaires::ServerSetup;
use pregunta::Questionnaire;
use pregunta_console::ConsoleDevice;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut questionnaire = Questionnaire::new(ConsoleDevice::plain());
    ServerSetup::ask(&mut questionnaire)?;

    match questionnaire.run() {
        Ok(answers) => println!("{:#?}", ServerSetup::from_answers(&answers)?),
        Err(err) if err.is_interrupted() => println!("Setup cancelled."),
        Err(err) => return Err(err.into()),
    }
    Ok(())
}
