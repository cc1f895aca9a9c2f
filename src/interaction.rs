//! User interaction abstraction.
//!
//! Controllers never open a dialog themselves. They receive the three
//! blocking primitives (`alert` / `confirm` / `prompt`) through a trait so
//! a shell can bind real dialogs while tests script the answers and record
//! the notices.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::sync::Mutex;

/// Blocking user-facing notices and questions.
pub trait Interaction: Send + Sync {
    /// Show a blocking notice.
    fn alert(&self, message: &str);

    /// Ask a yes/no question. `false` aborts the pending action.
    fn confirm(&self, message: &str) -> bool;

    /// Ask for a line of free text. `None` means the user cancelled.
    fn prompt(&self, message: &str) -> Option<String>;
}

// ---------------------------------------------------------------------------
// Terminal implementation
// ---------------------------------------------------------------------------

/// Interaction over stdin/stdout, for driving the console headless.
#[derive(Debug, Default)]
pub struct TerminalInteraction;

impl Interaction for TerminalInteraction {
    fn alert(&self, message: &str) {
        println!("{message}");
    }

    fn confirm(&self, message: &str) -> bool {
        print!("{message} [s/N] ");
        let _ = io::stdout().flush();
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line).is_err() {
            return false;
        }
        matches!(
            line.trim().to_lowercase().as_str(),
            "s" | "si" | "sí" | "y" | "yes"
        )
    }

    fn prompt(&self, message: &str) -> Option<String> {
        print!("{message} ");
        let _ = io::stdout().flush();
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            // EOF is a cancel, same as an error.
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
        }
    }
}

// ---------------------------------------------------------------------------
// Scripted implementation
// ---------------------------------------------------------------------------

/// Records every notice and replays queued answers.
///
/// Used by the controller tests and by shells that render notices
/// asynchronously instead of blocking. Unqueued questions answer
/// conservatively: `confirm` declines, `prompt` cancels.
#[derive(Debug, Default)]
pub struct ScriptedInteraction {
    alerts: Mutex<Vec<String>>,
    confirms: Mutex<VecDeque<bool>>,
    prompts: Mutex<VecDeque<Option<String>>>,
}

impl ScriptedInteraction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the answer for the next `confirm` call.
    pub fn push_confirm(&self, answer: bool) {
        if let Ok(mut confirms) = self.confirms.lock() {
            confirms.push_back(answer);
        }
    }

    /// Queue the answer for the next `prompt` call.
    pub fn push_prompt(&self, answer: Option<&str>) {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push_back(answer.map(str::to_string));
        }
    }

    /// Notices shown so far, oldest first.
    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().map(|a| a.clone()).unwrap_or_default()
    }

    /// The most recent notice, if any.
    pub fn last_alert(&self) -> Option<String> {
        self.alerts.lock().ok().and_then(|a| a.last().cloned())
    }
}

impl Interaction for ScriptedInteraction {
    fn alert(&self, message: &str) {
        if let Ok(mut alerts) = self.alerts.lock() {
            alerts.push(message.to_string());
        }
    }

    fn confirm(&self, _message: &str) -> bool {
        self.confirms
            .lock()
            .ok()
            .and_then(|mut c| c.pop_front())
            .unwrap_or(false)
    }

    fn prompt(&self, _message: &str) -> Option<String> {
        self.prompts
            .lock()
            .ok()
            .and_then(|mut p| p.pop_front())
            .unwrap_or(None)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_replays_queued_answers_in_order() {
        let interaction = ScriptedInteraction::new();
        interaction.push_confirm(true);
        interaction.push_confirm(false);
        interaction.push_prompt(Some("motivo"));

        assert!(interaction.confirm("¿Seguro?"));
        assert!(!interaction.confirm("¿Seguro?"));
        assert_eq!(interaction.prompt("Motivo:"), Some("motivo".to_string()));
    }

    #[test]
    fn scripted_defaults_decline_and_cancel() {
        let interaction = ScriptedInteraction::new();
        assert!(!interaction.confirm("¿Seguro?"));
        assert_eq!(interaction.prompt("Motivo:"), None);
    }

    #[test]
    fn scripted_records_alerts_in_order() {
        let interaction = ScriptedInteraction::new();
        interaction.alert("uno");
        interaction.alert("dos");
        assert_eq!(interaction.alerts(), vec!["uno", "dos"]);
        assert_eq!(interaction.last_alert(), Some("dos".to_string()));
    }
}
