//! Abstract prompt channel between the session and the human.

use std::collections::VecDeque;

/// Result of presenting labeled choices to the human
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Choice {
    /// Index into the presented labels
    Picked(usize),
    /// The human ended the session instead of choosing
    Cancelled,
}

/// One session's interactive channel.
///
/// The implementor owns the terminal while a pick is pending; the session
/// suspends until exactly one result comes back. Synthetic `help`/`exit`
/// menu entries are the implementor's concern: the session only ever sees a
/// picked label or a cancellation, and cancellation must never be
/// downgraded to a default choice.
pub trait Interaction {
    /// Present labeled choices and block until one is chosen or the
    /// session is cancelled
    fn pick(&mut self, prompt: &str, labels: &[String]) -> Choice;

    /// Show one line of game output to the human
    fn say(&mut self, line: &str);
}

/// Scripted channel for tests: pops pre-seeded choices in order and records
/// everything said. An exhausted script cancels, so a test that forgets a
/// choice terminates instead of hanging.
#[derive(Debug, Default)]
pub struct ScriptedInteraction {
    choices: VecDeque<Choice>,
    transcript: Vec<String>,
}

impl ScriptedInteraction {
    pub fn new<I: IntoIterator<Item = Choice>>(choices: I) -> Self {
        Self {
            choices: choices.into_iter().collect(),
            transcript: Vec::new(),
        }
    }

    /// Everything the session said, in order
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }
}

impl Interaction for ScriptedInteraction {
    fn pick(&mut self, _prompt: &str, labels: &[String]) -> Choice {
        match self.choices.pop_front() {
            Some(Choice::Picked(index)) => {
                assert!(index < labels.len(), "scripted pick out of range");
                Choice::Picked(index)
            }
            Some(choice) => choice,
            None => Choice::Cancelled,
        }
    }

    fn say(&mut self, line: &str) {
        self.transcript.push(line.to_string());
    }
}
