use dicer_lib::error::Error;
use dicer_lib::help;
use dicer_lib::roll::Outcome;

/// Name of the command the help pointer refers to
pub(crate) const ROLL_TRIGGER: &str = "roll";

/// `**name** rolls *query* = **total**`, breakdown lines following when any
pub(crate) fn rolled(name: &str, query: &str, outcome: &Outcome) -> String {
    format!("**{name}** rolls *{query}* = {outcome}")
}

pub(crate) fn closed(name: &str) -> String {
    format!("**Rien ne va plus!!!!**\n_{name} closes the round._")
}

/// Error message followed by a pointer to the help text
pub(crate) fn failed(error: &Error, prefix: &str) -> String {
    format!("{error} See `{prefix}{ROLL_TRIGGER} help` for examples.")
}

pub(crate) fn help(prefix: &str) -> String {
    help::text(&format!("{prefix}{ROLL_TRIGGER}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dicer_lib::roll::Source;
    use dicer_lib::roller::Roller;

    struct Scripted(std::vec::IntoIter<u64>);

    impl Source for Scripted {
        fn throw(&mut self, _sides: u64) -> u64 {
            self.0.next().expect("script out of values")
        }
    }

    fn outcome(query: &str, script: Vec<u64>) -> Outcome {
        Roller::new(query)
            .unwrap()
            .roll_with_source(&mut Scripted(script.into_iter()))
            .unwrap()
    }

    #[test]
    fn single_roll_post() {
        let post = rolled("Ada", "20", &outcome("20", vec![13]));
        assert_eq!("**Ada** rolls *20* = **13**", post);
    }

    #[test]
    fn breakdown_post() {
        let post = rolled("Ada", "5D6 +3", &outcome("5D6 +3", vec![1, 2, 3, 4, 5]));
        assert_eq!(
            "**Ada** rolls *5D6 +3* = **18**\n- 5D6: 1 2 3 4 5\n- +3",
            post
        );
    }

    #[test]
    fn default_query_post() {
        let roller = Roller::new("").unwrap();
        let outcome = roller
            .roll_with_source(&mut Scripted(vec![42].into_iter()))
            .unwrap();
        assert_eq!(
            "**Ada** rolls *100* = **42**",
            rolled("Ada", roller.as_str(), &outcome)
        );
    }

    #[test]
    fn close_post() {
        assert_eq!(
            "**Rien ne va plus!!!!**\n_Ada closes the round._",
            closed("Ada")
        );
    }

    #[test]
    fn failure_post() {
        let error = Roller::new("abc").unwrap_err();
        assert_eq!(
            "`abc` is not a valid roll request. See `!roll help` for examples.",
            failed(&error, "!")
        );
        assert_eq!(
            "No roll request arguments found (such as '20', '4d6', etc.). See `?roll help` for examples.",
            failed(&Error::Empty, "?")
        );
    }

    #[test]
    fn help_post() {
        let help = help("!");
        assert!(help.contains("- `!roll 5D6+3` to roll five 6-sided dice"));
        assert!(help.ends_with("Let's get rolling! ⚁ ⚄"));
    }
}
