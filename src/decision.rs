//! The synchronous decision boundary between the core and its caller.
//!
//! The core never renders menus or reads input. Whenever a rule needs a
//! player choice it calls [`DecisionProvider::choose`] and resumes with the
//! answer; the presentation layer owns everything else. Answers are
//! validated by the core, so a misbehaving provider surfaces as
//! `GameError::InvalidSelection` rather than a panic.

use std::collections::VecDeque;

/// Supplies player choices to the core.
pub trait DecisionProvider {
    /// Picks one of `options` (by index) for the given prompt.
    fn choose(&mut self, prompt: &str, options: &[String]) -> usize;
}

/// Adapts a closure into a [`DecisionProvider`].
pub struct FnDecider<F>(pub F);

impl<F> DecisionProvider for FnDecider<F>
where
    F: FnMut(&str, &[String]) -> usize,
{
    fn choose(&mut self, prompt: &str, options: &[String]) -> usize {
        (self.0)(prompt, options)
    }
}

/// A queue of pre-recorded answers, used by tests and the simulator.
#[derive(Debug, Default)]
pub struct ScriptedDecisions {
    answers: VecDeque<usize>,
}

impl ScriptedDecisions {
    pub fn new(answers: impl IntoIterator<Item = usize>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.answers.is_empty()
    }
}

impl DecisionProvider for ScriptedDecisions {
    /// Pops the next scripted answer; falls back to the first option when
    /// the script runs dry.
    fn choose(&mut self, _prompt: &str, _options: &[String]) -> usize {
        self.answers.pop_front().unwrap_or(0)
    }
}
