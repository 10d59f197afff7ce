//! Buffers: the three source fragments a learner edits.

use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// The markup, style, and script text of one submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Buffers {
    pub markup: String,
    pub style: String,
    pub script: String,
}

/// Names one of the three buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Markup,
    Style,
    Script,
}

impl Buffers {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Markup => &self.markup,
            Field::Style => &self.style,
            Field::Script => &self.script,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Markup => self.markup = value,
            Field::Style => self.style = value,
            Field::Script => self.script = value,
        }
    }

    /// Hex SHA-256 over all three buffers.
    ///
    /// Each buffer is length-prefixed so moving text between buffers
    /// changes the digest.
    pub fn digest(&self) -> String {
        let mut hasher = Sha256::new();
        for part in [&self.markup, &self.style, &self.script] {
            hasher.update((part.len() as u64).to_le_bytes());
            hasher.update(part.as_bytes());
        }
        hex::encode(hasher.finalize())
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Markup => "markup",
            Self::Style => "style",
            Self::Script => "script",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_touches_only_one_field() {
        let mut buffers = Buffers::default();
        buffers.set(Field::Style, "h1 { color: red; }".into());

        assert_eq!(buffers.get(Field::Style), "h1 { color: red; }");
        assert!(buffers.markup.is_empty());
        assert!(buffers.script.is_empty());
    }

    #[test]
    fn digest_is_stable_for_equal_buffers() {
        let a = Buffers {
            markup: "<p>hi</p>".into(),
            ..Buffers::default()
        };
        let b = a.clone();
        assert_eq!(a.digest(), b.digest());
        assert_eq!(a.digest().len(), 64);
    }

    #[test]
    fn digest_distinguishes_which_buffer_holds_text() {
        let in_markup = Buffers {
            markup: "x".into(),
            ..Buffers::default()
        };
        let in_style = Buffers {
            style: "x".into(),
            ..Buffers::default()
        };
        assert_ne!(in_markup.digest(), in_style.digest());
    }
}
