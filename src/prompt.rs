use crate::error::{Result, SyncError};
use inquire::{InquireError, Text};
use std::collections::VecDeque;

/// Source of operator answers. The terminal implementation uses `inquire`;
/// tests feed canned lines through [`ScriptedPrompter`].
pub trait Prompter {
    fn text(&mut self, message: &str) -> Result<String>;

    /// Feedback shown after an answer was rejected.
    fn warn(&mut self, message: &str);
}

pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn text(&mut self, message: &str) -> Result<String> {
        Ok(Text::new(message).prompt()?)
    }

    fn warn(&mut self, message: &str) {
        println!("{}", message);
    }
}

/// Replays a fixed list of answers in order. Test helper, not part of the
/// supported API.
#[doc(hidden)]
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    pub asked: Vec<String>,
    pub warnings: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Prompter for ScriptedPrompter {
    fn text(&mut self, message: &str) -> Result<String> {
        self.asked.push(message.to_string());
        self.answers
            .pop_front()
            .ok_or(SyncError::Prompt(InquireError::OperationCanceled))
    }

    fn warn(&mut self, message: &str) {
        self.warnings.push(message.to_string());
    }
}
