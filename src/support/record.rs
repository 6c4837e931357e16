//! Name-keyed result records.
//!
//! A [`Record`] is the flat view of a solve that a form-based client consumes:
//! an ordered list of `(name, value)` entries plus explanatory notes.
//! A `None` value marks a metric that was requested but could not be derived.

use std::collections::BTreeMap;

/// Ordered `(name, value)` entries and notes produced by a solve.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    entries: Vec<(&'static str, Option<f64>)>,
    notes: Vec<&'static str>,
}

impl Record {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry, replacing any earlier entry with the same name.
    pub fn insert(&mut self, name: &'static str, value: Option<f64>) {
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Appends a note.
    pub fn note(&mut self, note: &'static str) {
        self.notes.push(note);
    }

    /// Returns the entry for `name`, if present.
    ///
    /// The outer `Option` tells whether the entry exists, the inner one whether
    /// it carries a value.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Option<f64>> {
        self.entries
            .iter()
            .find(|(existing, _)| *existing == name)
            .map(|&(_, value)| value)
    }

    /// Returns the value for `name`, or `None` if it is missing or absent.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<f64> {
        self.get(name).flatten()
    }

    /// Iterates over the entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, Option<f64>)> + '_ {
        self.entries.iter().copied()
    }

    /// Returns the notes in insertion order.
    #[must_use]
    pub fn notes(&self) -> &[&'static str] {
        &self.notes
    }

    /// Returns `true` if the record has a note equal to `note`.
    #[must_use]
    pub fn has_note(&self, note: &str) -> bool {
        self.notes.iter().any(|existing| *existing == note)
    }

    /// Converts the entries into a map keyed by name, dropping the notes.
    #[must_use]
    pub fn into_map(self) -> BTreeMap<&'static str, Option<f64>> {
        self.entries.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_keep_insertion_order() {
        let mut record = Record::new();
        record.insert("U", Some(40.0));
        record.insert("V", Some(60.0));
        record.insert("WaterBallMillFeed", None);

        let names: Vec<_> = record.entries().map(|(name, _)| name).collect();
        assert_eq!(names, ["U", "V", "WaterBallMillFeed"]);
    }

    #[test]
    fn missing_and_absent_are_distinct() {
        let mut record = Record::new();
        record.insert("Recovery", None);

        assert_eq!(record.get("Recovery"), Some(None));
        assert_eq!(record.get("C"), None);
        assert_eq!(record.value("Recovery"), None);
    }

    #[test]
    fn insert_replaces() {
        let mut record = Record::new();
        record.insert("C", Some(1.0));
        record.insert("C", Some(2.0));

        assert_eq!(record.entries().count(), 1);
        assert_eq!(record.value("C"), Some(2.0));
    }

    #[test]
    fn notes_and_map() {
        let mut record = Record::new();
        record.insert("T", Some(80.0));
        record.note("checked");

        assert!(record.has_note("checked"));
        assert_eq!(record.notes(), ["checked"]);

        let map = record.into_map();
        assert_eq!(map.get("T"), Some(&Some(80.0)));
    }
}
