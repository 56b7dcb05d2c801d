//! Simple example asking for a user profile on the terminal.
//!
//! Run with: cargo run -p pregunta-console --example simple
//! Set RUST_LOG=pregunta=debug to watch the question loop.

use example_questionnaires::UserProfile;
use pregunta::Questionnaire;
use pregunta_console::ConsoleDevice;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut questionnaire = Questionnaire::new(ConsoleDevice::new());
    UserProfile::ask(&mut questionnaire)?;

    let answers = questionnaire.run()?;
    let profile = UserProfile::from_answers(&answers)?;
    println!("{profile:#?}");
    Ok(())
}
