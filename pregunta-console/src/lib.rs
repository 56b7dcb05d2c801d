//! # pregunta-console
//!
//! Interactive terminal device for pregunta.
//!
//! This crate provides a [`ConsoleDevice`] that renders questionnaire prompts
//! on the terminal using `dialoguer`'s console layer and colorful theme.
//! Questions are asked one per line in a classic CLI dialogue.
//!
//! ## Example
//!
//! ```rust,no_run
//! use pregunta::Questionnaire;
//! use pregunta_console::ConsoleDevice;
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut questionnaire = Questionnaire::new(ConsoleDevice::new());
//!     questionnaire
//!         .ask("What is your name?")
//!         .with_key("name")
//!         .yes_no("Do you like Rust?", true)
//!         .with_key("rust");
//!
//!     let answers = questionnaire.run()?;
//!     println!("Hello, {}!", answers.get_text("name")?);
//!     Ok(())
//! }
//! ```

mod device;

pub use device::ConsoleDevice;
