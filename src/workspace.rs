//! Code workspace: the editable buffers of the unit currently open.

use crate::model::{Buffers, Field, Lesson};

/// Three text buffers bound to one open unit.
///
/// Opening another unit discards every edit made here.
#[derive(Debug, Clone)]
pub struct Workspace {
    unit: &'static str,
    buffers: Buffers,
}

impl Workspace {
    /// Opens `lesson`, seeding the buffers from its initial code.
    pub fn open(lesson: &Lesson) -> Self {
        Self {
            unit: lesson.key,
            buffers: lesson.initial.to_buffers(),
        }
    }

    /// Key of the unit these buffers belong to.
    pub fn unit(&self) -> &'static str {
        self.unit
    }

    /// Replaces one buffer. Last write wins; nothing is validated here.
    pub fn edit(&mut self, field: Field, value: impl Into<String>) {
        self.buffers.set(field, value.into());
    }

    /// Read-only view of the buffers as they are right now.
    pub fn snapshot(&self) -> &Buffers {
        &self.buffers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::catalog::Catalog;

    #[test]
    fn open_seeds_initial_code() {
        let catalog = Catalog::curriculum().unwrap();
        let lesson = catalog.get("js-syntax").unwrap();
        let ws = Workspace::open(lesson);

        assert_eq!(ws.unit(), "js-syntax");
        assert_eq!(ws.snapshot().script, lesson.initial.script);
        assert!(ws.snapshot().markup.is_empty());
    }

    #[test]
    fn edits_apply_in_order() {
        let catalog = Catalog::curriculum().unwrap();
        let mut ws = Workspace::open(catalog.first());

        ws.edit(Field::Script, "let a = 1;");
        ws.edit(Field::Script, "let a = 2;");
        ws.edit(Field::Style, "p {}");

        assert_eq!(ws.snapshot().script, "let a = 2;");
        assert_eq!(ws.snapshot().style, "p {}");
    }

    #[test]
    fn reopening_discards_edits() {
        let catalog = Catalog::curriculum().unwrap();
        let first = catalog.first();
        let mut ws = Workspace::open(first);
        ws.edit(Field::Markup, "<p>scratch</p>");

        let ws = Workspace::open(catalog.get("css-text").unwrap());
        assert_eq!(ws.snapshot().markup, "<h1>Title</h1>");

        let ws = Workspace::open(first);
        assert_eq!(ws.snapshot().markup, first.initial.markup);
    }
}
