//! Interactive terminal prompt for manual field entry.

use std::str::FromStr;

use console::{style, Term};
use rust_decimal::Decimal;

use ubill_core::{Field, ValuePrompt};

/// Prompt that blocks on operator input from the terminal.
///
/// An empty reply skips the field.
pub struct TermPrompt {
    term: Term,
}

impl TermPrompt {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
        }
    }

    fn ask(&self, page: u32, field: Field) -> Option<String> {
        let label = format!(
            "{} Page {}: enter {} (empty to skip): ",
            style("?").cyan(),
            page,
            field
        );
        if self.term.write_str(&label).is_err() {
            return None;
        }

        match self.term.read_line() {
            Ok(reply) => {
                let reply = reply.trim().to_string();
                if reply.is_empty() { None } else { Some(reply) }
            }
            Err(_) => None,
        }
    }
}

impl Default for TermPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl ValuePrompt for TermPrompt {
    fn request_text(&mut self, page: u32, field: Field) -> Option<String> {
        self.ask(page, field)
    }

    fn request_number(&mut self, page: u32, field: Field) -> Option<Decimal> {
        // Re-ask until the reply parses or the operator skips.
        loop {
            let reply = self.ask(page, field)?;
            match Decimal::from_str(&reply.replace(',', "")) {
                Ok(value) => return Some(value),
                Err(_) => {
                    let _ = self.term.write_line(&format!(
                        "{} not a number: {}",
                        style("!").yellow(),
                        reply
                    ));
                }
            }
        }
    }
}
