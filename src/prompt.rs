//! Collecting one `Entry` from the user.
//!
//! Questions go through the `Prompter` trait so the validate-and-reprompt
//! loop is the same for a real terminal, piped input and scripted tests.

use crate::data::{parse_number, Entry, Error, DEFAULT_SUB_CATEGORY};
use dialoguer::{theme::ColorfulTheme, Input};
use rust_decimal::Decimal;
use std::io::{BufRead, Write};

pub(crate) const HOURS: &str = "Hours (float)";
pub(crate) const CATEGORY: &str = "Category";
pub(crate) const DESCRIPTION: &str = "Description";
pub(crate) const SUB_CATEGORY: &str = "Sub-category (press Enter for NA)";

/// Source of raw answers.
pub(crate) trait Prompter {
    /// Asks one question and returns the answer as typed. Failing here is
    /// fatal, it is not a validation problem.
    fn ask(&mut self, message: &str) -> Result<String, Error>;

    /// Tells the user why the last answer was refused.
    fn reject(&mut self, error: &Error);
}

/// Interactive prompts on the controlling terminal.
pub(crate) struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Prompter for TerminalPrompter {
    fn ask(&mut self, message: &str) -> Result<String, Error> {
        let answer = Input::<String>::with_theme(&self.theme)
            .with_prompt(message)
            .allow_empty(true)
            .interact_text()?;
        Ok(answer)
    }

    fn reject(&mut self, error: &Error) {
        eprintln!(">> {error}");
    }
}

/// Plain line-based prompts, for when stdin is not a terminal.
pub(crate) struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn ask(&mut self, message: &str) -> Result<String, Error> {
        write!(self.output, "{message}: ")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Error::Prompt(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "input ended before the entry was complete",
            )));
        }
        // Piped input does not echo, keep the transcript readable.
        writeln!(self.output)?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn reject(&mut self, error: &Error) {
        let _ = writeln!(self.output, ">> {error}");
    }
}

/// Asks `message` until `validate` accepts the answer.
pub(crate) fn ask_valid<P, T, F>(prompter: &mut P, message: &str, validate: F) -> Result<T, Error>
where
    P: Prompter + ?Sized,
    F: Fn(&str) -> Result<T, Error>,
{
    loop {
        let answer = prompter.ask(message)?;
        match validate(&answer) {
            Ok(value) => return Ok(value),
            Err(e) => {
                tracing::debug!(%message, error = %e, "answer rejected");
                prompter.reject(&e);
            }
        }
    }
}

/// Hours as an exact `Decimal`. Text that is a number, but one `Decimal`
/// cannot hold (`1e29`, `1e-30`), gets its own error instead of being
/// reported as not a number.
pub(crate) fn parse_hours(input: &str) -> Result<Decimal, Error> {
    let text = input.trim();
    let hours = match parse_number(text) {
        Some(hours) => hours,
        None => {
            return Err(match text.parse::<f64>() {
                Ok(n) if n.is_finite() && n > 0.0 => Error::HoursOutOfRange(text.to_string()),
                Ok(n) if n.is_finite() => Error::NonPositiveHours,
                _ => Error::InvalidHours(text.to_string()),
            });
        }
    };
    if hours <= Decimal::ZERO {
        return Err(Error::NonPositiveHours);
    }
    Ok(hours)
}

pub(crate) fn require_non_empty(field: &'static str) -> impl Fn(&str) -> Result<String, Error> {
    move |input| match input.trim() {
        "" => Err(Error::EmptyField(field)),
        text => Ok(text.to_string()),
    }
}

pub(crate) fn sub_category_or_default(input: &str) -> Result<String, Error> {
    Ok(match input.trim() {
        "" => DEFAULT_SUB_CATEGORY.to_string(),
        text => text.to_string(),
    })
}

/// Runs the four questions in order.
pub(crate) fn collect_entry<P: Prompter + ?Sized>(prompter: &mut P) -> Result<Entry, Error> {
    let hours = ask_valid(prompter, HOURS, parse_hours)?;
    let category = ask_valid(prompter, CATEGORY, require_non_empty("Category"))?;
    let description = ask_valid(prompter, DESCRIPTION, require_non_empty("Description"))?;
    let sub_category = ask_valid(prompter, SUB_CATEGORY, sub_category_or_default)?;
    Ok(Entry {
        hours,
        category,
        description,
        sub_category,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::collections::VecDeque;

    /// Replays canned answers and remembers what was asked and refused.
    #[derive(Default)]
    struct Script {
        answers: VecDeque<&'static str>,
        asked: Vec<String>,
        rejected: usize,
    }

    impl Script {
        fn new(answers: &[&'static str]) -> Self {
            Self {
                answers: answers.iter().copied().collect(),
                ..Self::default()
            }
        }
    }

    impl Prompter for Script {
        fn ask(&mut self, message: &str) -> Result<String, Error> {
            self.asked.push(message.to_string());
            self.answers.pop_front().map(str::to_string).ok_or_else(|| {
                Error::Prompt(std::io::Error::from(std::io::ErrorKind::UnexpectedEof))
            })
        }

        fn reject(&mut self, _error: &Error) {
            self.rejected += 1;
        }
    }

    #[test]
    fn collects_in_order() {
        let mut script = Script::new(&["2.5", "Eng", "Code review", "Reviews"]);
        let entry = collect_entry(&mut script).unwrap();
        assert_eq!(
            entry,
            Entry {
                hours: dec!(2.5),
                category: "Eng".into(),
                description: "Code review".into(),
                sub_category: "Reviews".into(),
            }
        );
        assert_eq!(script.asked, [HOURS, CATEGORY, DESCRIPTION, SUB_CATEGORY]);
        assert_eq!(script.rejected, 0);
    }

    #[test]
    fn bad_hours_are_asked_again() {
        let mut script = Script::new(&["abc", "-5", "0", "", "1.5", "Eng", "Standup", ""]);
        let entry = collect_entry(&mut script).unwrap();
        assert_eq!(entry.hours, dec!(1.5));
        assert_eq!(script.rejected, 4);
        assert_eq!(script.asked.iter().filter(|m| *m == HOURS).count(), 5);
    }

    #[test]
    fn blank_fields_are_asked_again() {
        let mut script = Script::new(&["1", "  ", "Eng", "", "\t", "Standup", "  "]);
        let entry = collect_entry(&mut script).unwrap();
        assert_eq!(entry.category, "Eng");
        assert_eq!(entry.description, "Standup");
        assert_eq!(script.rejected, 3);
    }

    #[test]
    fn blank_sub_category_is_na() {
        let mut script = Script::new(&["1", "Eng", "Standup", ""]);
        assert_eq!(collect_entry(&mut script).unwrap().sub_category, "NA");
    }

    #[test]
    fn answers_are_trimmed() {
        let mut script = Script::new(&[" 2 ", "  Eng ", " Code review  ", " Reviews "]);
        let entry = collect_entry(&mut script).unwrap();
        assert_eq!(entry.category, "Eng");
        assert_eq!(entry.description, "Code review");
        assert_eq!(entry.sub_category, "Reviews");
    }

    #[test]
    fn running_out_of_answers_is_fatal() {
        let mut script = Script::new(&["1", "Eng"]);
        assert!(matches!(collect_entry(&mut script), Err(Error::Prompt(_))));
    }

    #[test]
    fn parse_hours_reports_why() {
        assert!(matches!(parse_hours("abc"), Err(Error::InvalidHours(s)) if s == "abc"));
        assert!(matches!(parse_hours("-5"), Err(Error::NonPositiveHours)));
        assert!(matches!(parse_hours("0"), Err(Error::NonPositiveHours)));
        assert_eq!(parse_hours("0.25").unwrap(), dec!(0.25));
    }

    #[test]
    fn parse_hours_outside_decimal_range() {
        assert!(matches!(parse_hours("1e29"), Err(Error::HoursOutOfRange(s)) if s == "1e29"));
        assert!(matches!(parse_hours(" 1e-30 "), Err(Error::HoursOutOfRange(s)) if s == "1e-30"));
        assert!(matches!(parse_hours("-1e29"), Err(Error::NonPositiveHours)));
        assert!(matches!(parse_hours("inf"), Err(Error::InvalidHours(_))));
        assert!(matches!(parse_hours("NaN"), Err(Error::InvalidHours(_))));
    }

    #[test]
    fn out_of_range_hours_are_asked_again() {
        let mut script = Script::new(&["1e29", "8", "Eng", "Standup", ""]);
        let entry = collect_entry(&mut script).unwrap();
        assert_eq!(entry.hours, dec!(8));
        assert_eq!(script.rejected, 1);
    }

    #[test]
    fn line_prompter_reads_lines() {
        let input = b"3\r\nEng\nStandup\n\n";
        let mut output = Vec::new();
        let mut prompter = LinePrompter::new(&input[..], &mut output);
        let entry = collect_entry(&mut prompter).unwrap();
        assert_eq!(entry.hours, dec!(3));
        assert_eq!(entry.sub_category, "NA");
        let transcript = String::from_utf8(output).unwrap();
        assert!(transcript.starts_with("Hours (float): \n"));
    }

    #[test]
    fn line_prompter_eof_is_fatal() {
        let mut output = Vec::new();
        let mut prompter = LinePrompter::new(&b"abc\n"[..], &mut output);
        assert!(matches!(collect_entry(&mut prompter), Err(Error::Prompt(_))));
        let transcript = String::from_utf8(output).unwrap();
        assert!(transcript.contains(">> Please enter a valid positive number for hours"));
    }
}
