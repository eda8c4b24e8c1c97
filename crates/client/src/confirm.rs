//! Interactive confirmation for destructive batches.

use std::io;

use dialoguer::Confirm;

use sbmctl_core::messaging::ConfirmGate;

/// Terminal-backed confirmation gate.
///
/// Always presents the resolved record count; prompts for an affirmative
/// answer unless `--yes` was given. The prompt defaults to "no", so an
/// empty response aborts the batch.
#[derive(Debug, Clone, Copy)]
pub struct TerminalGate {
    assume_yes: bool,
}

impl TerminalGate {
    /// Create a gate; `assume_yes` bypasses the prompt.
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl ConfirmGate for TerminalGate {
    fn confirm(&self, count: usize, description: &str) -> io::Result<bool> {
        println!("Found {count} result(s)");
        if self.assume_yes {
            return Ok(true);
        }
        Confirm::new()
            .with_prompt(format!("Delete {count} record(s) matching {description}?"))
            .default(false)
            .interact()
            .map_err(|err| io::Error::other(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yes_bypasses_the_prompt() {
        // With --yes the gate never touches the terminal; it still
        // presents the count line and lets the batch proceed.
        let gate = TerminalGate::new(true);
        assert!(gate.confirm(1, "message 1").unwrap());
        assert!(gate.confirm(0, "all messages").unwrap());
    }
}
