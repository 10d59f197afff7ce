//! Curriculum catalog: the ordered, linked set of lesson units.
//!
//! A catalog is checked once at construction: keys are unique, every
//! `next` pointer resolves, and following `next` from the first unit
//! visits every unit exactly once before reaching the single terminal.
//! After that it is read-only.

mod checks;
mod lessons;

use std::collections::{HashMap, HashSet};

use crate::model::{Lesson, Track};

/// Errors raised by catalog construction and lookup.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("unit not found: {0}")]
    NotFound(String),

    #[error("catalog has no units")]
    Empty,

    #[error("duplicate unit key: {0}")]
    DuplicateKey(&'static str),

    #[error("unit {from} points to unknown unit {to}")]
    DanglingNext {
        from: &'static str,
        to: &'static str,
    },

    #[error("unit chain loops back to {0}")]
    Cycle(&'static str),

    #[error("unit {0} is not reachable from the first unit")]
    Unreachable(&'static str),
}

pub type Result<T> = core::result::Result<T, CatalogError>;

/// Immutable, validated collection of lesson units.
#[derive(Debug)]
pub struct Catalog {
    lessons: Vec<Lesson>,
    index: HashMap<&'static str, usize>,
}

impl Catalog {
    /// Builds a catalog from units in declaration order.
    ///
    /// The first unit is the chain head and the default for new learners.
    pub fn new(lessons: Vec<Lesson>) -> Result<Self> {
        if lessons.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut index = HashMap::with_capacity(lessons.len());
        for (i, lesson) in lessons.iter().enumerate() {
            if index.insert(lesson.key, i).is_some() {
                return Err(CatalogError::DuplicateKey(lesson.key));
            }
        }

        for lesson in &lessons {
            if let Some(next) = lesson.next
                && !index.contains_key(next)
            {
                return Err(CatalogError::DanglingNext {
                    from: lesson.key,
                    to: next,
                });
            }
        }

        // Walk the chain from the head.
        let mut visited = HashSet::with_capacity(lessons.len());
        let mut cursor = Some(0);
        while let Some(i) = cursor {
            let lesson = &lessons[i];
            if !visited.insert(lesson.key) {
                return Err(CatalogError::Cycle(lesson.key));
            }
            cursor = lesson.next.and_then(|next| index.get(next).copied());
        }

        if let Some(stray) = lessons.iter().find(|l| !visited.contains(l.key)) {
            return Err(CatalogError::Unreachable(stray.key));
        }

        Ok(Self { lessons, index })
    }

    /// The built-in web development curriculum.
    pub fn curriculum() -> Result<Self> {
        Self::new(lessons::curriculum())
    }

    /// Looks up a unit by key.
    ///
    /// `NotFound` is a redirect-to-default condition for callers, not a crash.
    pub fn get(&self, key: &str) -> Result<&Lesson> {
        self.index
            .get(key)
            .map(|&i| &self.lessons[i])
            .ok_or_else(|| CatalogError::NotFound(key.to_string()))
    }

    /// Key of the unit after `key`, or `None` when `key` is the terminal unit.
    pub fn next(&self, key: &str) -> Result<Option<&'static str>> {
        Ok(self.get(key)?.next)
    }

    /// The head of the chain.
    pub fn first(&self) -> &Lesson {
        &self.lessons[0]
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Total number of units.
    pub fn count(&self) -> usize {
        self.lessons.len()
    }

    /// All units in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Lesson> {
        self.lessons.iter()
    }

    /// Units belonging to `track`, in declaration order.
    pub fn in_track(&self, track: Track) -> impl Iterator<Item = &Lesson> {
        self.lessons.iter().filter(move |l| l.track == track)
    }

    /// Units grouped by track.
    ///
    /// Tracks appear in the order their first unit was declared; units keep
    /// declaration order within each group.
    pub fn by_track(&self) -> Vec<(Track, Vec<&Lesson>)> {
        let mut groups: Vec<(Track, Vec<&Lesson>)> = Vec::new();
        for lesson in &self.lessons {
            match groups.iter_mut().find(|(t, _)| *t == lesson.track) {
                Some((_, units)) => units.push(lesson),
                None => groups.push((lesson.track, vec![lesson])),
            }
        }
        groups
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    use crate::model::{Buffers, InitialCode, Tier, Verdict};

    fn needs_ready(code: &Buffers) -> Verdict {
        if code.script.contains("ready") {
            Ok(())
        } else {
            Err("Missing keyword 'ready' in script.".to_string())
        }
    }

    pub(crate) fn unit(key: &'static str, track: Track, next: Option<&'static str>) -> Lesson {
        Lesson {
            key,
            track,
            tier: Tier::Beginner,
            title: key,
            description: "",
            content: "",
            initial: InitialCode::default(),
            validator: None,
            next,
        }
    }

    /// A small three-track catalog: alpha, beta (HTML), gamma (CSS), delta (JavaScript).
    ///
    /// `alpha` requires "ready" in the script buffer; `gamma` has no validator.
    pub(crate) fn small_catalog() -> Catalog {
        let mut alpha = unit("alpha", Track::Html, Some("beta"));
        alpha.validator = Some(needs_ready);
        let mut beta = unit("beta", Track::Html, Some("gamma"));
        beta.validator = Some(needs_ready);
        let gamma = unit("gamma", Track::Css, Some("delta"));
        let mut delta = unit("delta", Track::JavaScript, None);
        delta.validator = Some(needs_ready);
        Catalog::new(vec![alpha, beta, gamma, delta]).unwrap()
    }

    #[test]
    fn curriculum_is_a_single_chain() {
        let catalog = Catalog::curriculum().unwrap();

        let mut seen = HashSet::new();
        let mut key = catalog.first().key;
        let mut steps = 0;
        loop {
            assert!(seen.insert(key), "revisited {key}");
            steps += 1;
            match catalog.next(key).unwrap() {
                Some(next) => key = next,
                None => break,
            }
        }
        assert_eq!(steps, catalog.count());
        assert_eq!(catalog.first().key, "html-intro");
        assert_eq!(key, "js-strict");
    }

    #[test]
    fn by_track_preserves_declaration_order() {
        let catalog = Catalog::curriculum().unwrap();
        let groups = catalog.by_track();

        let tracks: Vec<Track> = groups.iter().map(|(t, _)| *t).collect();
        assert_eq!(tracks, Track::ALL.to_vec());

        let css: Vec<&str> = groups[1].1.iter().map(|l| l.key).collect();
        assert_eq!(css.first(), Some(&"css-syntax"));
        assert_eq!(css.last(), Some(&"css-text"));

        let total: usize = groups.iter().map(|(_, units)| units.len()).sum();
        assert_eq!(total, catalog.count());
    }

    #[test]
    fn unknown_key_is_not_found() {
        let catalog = small_catalog();
        assert!(matches!(
            catalog.get("omega").unwrap_err(),
            CatalogError::NotFound(k) if k == "omega"
        ));
        assert!(matches!(
            catalog.next("omega").unwrap_err(),
            CatalogError::NotFound(_)
        ));
    }

    #[test]
    fn next_of_terminal_is_none() {
        let catalog = small_catalog();
        assert_eq!(catalog.next("gamma").unwrap(), Some("delta"));
        assert_eq!(catalog.next("delta").unwrap(), None);
    }

    #[test]
    fn rejects_empty() {
        assert!(matches!(
            Catalog::new(vec![]).unwrap_err(),
            CatalogError::Empty
        ));
    }

    #[test]
    fn rejects_duplicate_keys() {
        let err = Catalog::new(vec![
            unit("a", Track::Html, Some("a")),
            unit("a", Track::Html, None),
        ])
        .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateKey("a")));
    }

    #[test]
    fn rejects_dangling_next() {
        let err = Catalog::new(vec![unit("a", Track::Html, Some("zzz"))]).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::DanglingNext { from: "a", to: "zzz" }
        ));
    }

    #[test]
    fn rejects_cycle() {
        let err = Catalog::new(vec![
            unit("a", Track::Html, Some("b")),
            unit("b", Track::Html, Some("a")),
        ])
        .unwrap_err();
        assert!(matches!(err, CatalogError::Cycle("a")));
    }

    #[test]
    fn rejects_second_terminal() {
        let err = Catalog::new(vec![
            unit("a", Track::Html, None),
            unit("b", Track::Html, None),
        ])
        .unwrap_err();
        assert!(matches!(err, CatalogError::Unreachable("b")));
    }

    #[test]
    fn rejects_branch_into_chain() {
        // "c" points into the chain but nothing reaches "c".
        let err = Catalog::new(vec![
            unit("a", Track::Html, Some("b")),
            unit("b", Track::Html, None),
            unit("c", Track::Html, Some("b")),
        ])
        .unwrap_err();
        assert!(matches!(err, CatalogError::Unreachable("c")));
    }
}
