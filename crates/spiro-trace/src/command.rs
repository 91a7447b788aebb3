//! User commands and their key bindings.

use std::collections::HashMap;

/// Requests a host can make between ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    ToggleCursors,
    Restart,
    SaveDrawing,
    Quit,
}

/// Maps keys to [`Command`]s.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    keys: HashMap<char, Command>,
}

impl KeyBindings {
    pub fn empty() -> Self {
        Self {
            keys: HashMap::new(),
        }
    }

    pub fn bind(&mut self, key: char, command: Command) -> &mut Self {
        self.keys.insert(key, command);
        self
    }

    pub fn lookup(&self, key: char) -> Option<Command> {
        self.keys.get(&key).copied()
    }

    /// Resolve a line of terminal input. Blank lines and the word `space`
    /// both mean the space bar.
    pub fn lookup_line(&self, line: &str) -> Option<Command> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("space") {
            return self.lookup(' ');
        }
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(key), None) => self.lookup(key),
            _ => None,
        }
    }
}

impl Default for KeyBindings {
    /// `t` toggles cursors, space restarts, `s` saves, `q` quits.
    fn default() -> Self {
        let mut bindings = Self::empty();
        bindings
            .bind('t', Command::ToggleCursors)
            .bind(' ', Command::Restart)
            .bind('s', Command::SaveDrawing)
            .bind('q', Command::Quit);
        bindings
    }
}
