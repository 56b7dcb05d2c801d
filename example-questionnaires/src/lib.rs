pub mod coffee_order;
pub mod server_setup;
pub mod user_profile;

pub use coffee_order::{SIZES, coffee_order};
pub use server_setup::{PROTOCOLS, ServerSetup, is_valid_port};
pub use user_profile::{UserProfile, is_valid_age};

#[cfg(test)]
mod tests {
    use super::*;
    use pregunta::{AnswerError, Answers, Questionnaire, ScriptedDevice};

    #[test]
    fn user_profile_from_scripted_answers() {
        let device = ScriptedDevice::new().with_lines([
            "Ada Lovelace",
            "two hundred",
            "36",
            "ada@example",
            "ada@example.com",
            "y",
        ]);
        let mut q = Questionnaire::new(device);
        UserProfile::ask(&mut q).unwrap();

        let answers = q.run().unwrap();
        let profile = UserProfile::from_answers(&answers).unwrap();

        assert_eq!(
            profile,
            UserProfile {
                name: "Ada Lovelace".to_string(),
                age: 36,
                email: "ada@example.com".to_string(),
                newsletter: true,
            }
        );
        assert_eq!(
            q.device().printed(),
            vec![
                "'two hundred' is not an age between 0 and 150",
                "That doesn't look like an email address",
            ]
        );
    }

    #[test]
    fn server_setup_defaults() {
        let device = ScriptedDevice::new().with_lines(["", "", "", ""]);
        let mut q = Questionnaire::new(device);
        ServerSetup::ask(&mut q).unwrap();

        let setup = ServerSetup::from_answers(&q.run().unwrap()).unwrap();

        assert_eq!(
            setup,
            ServerSetup {
                host: "localhost".to_string(),
                port: 8080,
                protocol: "https".to_string(),
                tls_verify: true,
            }
        );
        assert_eq!(
            q.device().prompts(),
            vec![
                "Server host: (localhost) ",
                "Server port: (8080) ",
                "Protocol: (https) ",
                "Verify TLS certificates?: (yes) ",
            ]
        );
    }

    #[test]
    fn server_setup_rejects_bad_port() {
        let device = ScriptedDevice::new().with_lines(["example.org", "0", "443", "ftp", "http", "n"]);
        let mut q = Questionnaire::new(device);
        ServerSetup::ask(&mut q).unwrap();

        let setup = ServerSetup::from_answers(&q.run().unwrap()).unwrap();

        assert_eq!(setup.port, 443);
        assert_eq!(setup.protocol, "http");
        assert!(!setup.tls_verify);
        assert_eq!(q.device().printed()[0], "Server configuration");
        assert_eq!(q.device().printed()[1], "0 is not a port number (1-65535)");
    }

    #[test]
    fn coffee_order_uses_prompts_as_keys() {
        let device = ScriptedDevice::new().with_lines(["huge", "", "", "Sam"]);
        let mut q = Questionnaire::new(device);
        coffee_order(&mut q).unwrap();

        let answers = q.run().unwrap();

        assert_eq!(answers.get_text("Size").unwrap(), "medium");
        assert!(!answers.get_bool("Oat milk").unwrap());
        assert_eq!(answers.get_text("Name for the cup").unwrap(), "Sam");
        assert!(
            q.device()
                .printed()
                .contains(&"We don't have 'huge' cups. Pick one of: small, medium, large")
        );
    }

    #[test]
    fn malformed_answers_are_reported() {
        let mut answers: Answers = [
            ("host", "localhost"),
            ("port", "eighty"),
            ("protocol", "http"),
        ]
        .into_iter()
        .collect();
        answers.insert("tls_verify", true);

        let err = ServerSetup::from_answers(&answers).unwrap_err();
        assert!(matches!(err, AnswerError::Parse { ref key, .. } if key == "port"));

        let mut answers: Answers = [
            ("name", "Ada"),
            ("age", "300"),
            ("email", "ada@example.com"),
        ]
        .into_iter()
        .collect();
        answers.insert("newsletter", false);
        assert!(matches!(
            UserProfile::from_answers(&answers),
            Err(AnswerError::Parse { .. })
        ));
    }

    #[test]
    fn age_validation() {
        assert!(is_valid_age("0"));
        assert!(is_valid_age("150"));
        assert!(!is_valid_age("151"));
        assert!(!is_valid_age("-1"));
    }
}
