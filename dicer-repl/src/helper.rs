use colored::Colorize;
use dicer_lib::error::Error;
use dicer_lib::help::HELP_QUERIES;
use dicer_lib::roller::Roller;
use rustyline::completion::Completer;
use rustyline::completion::Pair;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::hint::HistoryHinter;
use rustyline::Context;
use rustyline::Result;
use rustyline_derive::Helper;
use rustyline_derive::Validator;
use std::borrow::Cow;
use std::borrow::Cow::Borrowed;
use std::borrow::Cow::Owned;

#[derive(Helper, Validator)]
pub(crate) struct ReplHelper {
    pub(crate) hinter: HistoryHinter,
    pub(crate) colored: String,
}

impl Completer for ReplHelper {
    type Candidate = Pair;

    /// Complete the help keywords, dice notation has nothing worth completing
    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> Result<(usize, Vec<Self::Candidate>)> {
        let start = line[..pos].rfind(char::is_whitespace).map_or(0, |i| i + 1);
        let word = &line[start..pos];
        if word.is_empty() {
            return Ok((start, Vec::new()));
        }
        let candidates = HELP_QUERIES
            .iter()
            .filter(|query| query.starts_with(word))
            .map(|query| Pair {
                display: query.to_string(),
                replacement: query.to_string(),
            })
            .collect();
        Ok((start, candidates))
    }
}

impl Hinter for ReplHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, ctx: &Context<'_>) -> Option<Self::Hint> {
        self.hinter.hint(line, pos, ctx)
    }
}

impl Highlighter for ReplHelper {
    /// Paint every token that would be rejected in red
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.trim().is_empty() || dicer_lib::help::is_help(line) {
            return Borrowed(line);
        }
        let mut painted = String::with_capacity(line.len());
        let mut rest = line;
        while !rest.is_empty() {
            let split = rest
                .find(|c: char| c.is_whitespace() != rest.starts_with(char::is_whitespace))
                .unwrap_or(rest.len());
            let (chunk, tail) = rest.split_at(split);
            if chunk.starts_with(char::is_whitespace)
                || matches!(Roller::new(chunk), Ok(_) | Err(Error::Empty))
            {
                painted.push_str(chunk);
            } else {
                painted.push_str(&chunk.red().to_string());
            }
            rest = tail;
        }
        Owned(painted)
    }

    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default {
            Borrowed(&self.colored)
        } else {
            Borrowed(prompt)
        }
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Owned(hint.dimmed().to_string())
    }

    fn highlight_char(&self, _line: &str, _pos: usize) -> bool {
        true
    }
}
