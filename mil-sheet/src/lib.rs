//! Stylesheet side of mil.
//! Keeps a record of class names that were already written to a stylesheet,
//! so every style ends up in the sheet exactly once.
//!
//! Example:
//! ```rust
//! use mil_sheet::{InjectionRegistry, MemorySheet};
//! let mut sheet = MemorySheet::new();
//! let mut registry = InjectionRegistry::new();
//! let rules = [(0, ".a{color:red}".to_owned()), (2, ".a:hover{color:blue}".to_owned())];
//! assert!(registry.inject(&mut sheet, "a", rules.clone()).unwrap());
//! // already known, sheet is not touched
//! assert!(!registry.inject(&mut sheet, "a", rules).unwrap());
//! assert_eq!(sheet.css_text(), ".a{color:red}.a:hover{color:blue}");
//! ```
//!
use std::collections::BTreeSet;

use log::{debug, trace};
use thiserror::Error;

/// Element id of the default sheet.
pub const DEFAULT_SHEET_ID: &str = "mil-styles";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SheetError {
    #[error("Rule index {index} is out of bounds for sheet with {len} rules")]
    IndexOutOfBounds { index: usize, len: usize },
    #[error("Stylesheet rejected rule: {0}")]
    Rejected(String),
}

/// Host stylesheet.
///
/// Follows `CSSStyleSheet.insertRule`: the rule is placed at `index`,
/// everything after it shifts, and an `index` past the end is an error.
pub trait StyleSheet {
    /// Number of rules currently in the sheet.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns index of the inserted rule.
    fn insert_rule(&mut self, rule: &str, index: usize) -> Result<usize, SheetError>;
}

/// Sheet kept in memory.
/// Can be rendered into a `<style>` element for server side output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemorySheet {
    id: String,
    rules: Vec<String>,
}

impl Default for MemorySheet {
    fn default() -> Self {
        Self::new()
    }
}

impl MemorySheet {
    pub fn new() -> Self {
        Self::with_id(DEFAULT_SHEET_ID)
    }
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            rules: Vec::new(),
        }
    }
    pub fn id(&self) -> &str {
        &self.id
    }
    pub fn rules(&self) -> &[String] {
        &self.rules
    }
    pub fn css_text(&self) -> String {
        self.rules.concat()
    }
    pub fn to_style_tag(&self) -> String {
        format!("<style id=\"{}\">{}</style>", self.id, self.css_text())
    }
}

impl StyleSheet for MemorySheet {
    fn len(&self) -> usize {
        self.rules.len()
    }

    fn insert_rule(&mut self, rule: &str, index: usize) -> Result<usize, SheetError> {
        if index > self.rules.len() {
            return Err(SheetError::IndexOutOfBounds {
                index,
                len: self.rules.len(),
            });
        }
        self.rules.insert(index, rule.to_owned());
        Ok(index)
    }
}

/// Class names already written to a sheet.
/// Entries are never removed.
#[derive(Debug, Default, Clone)]
pub struct InjectionRegistry {
    injected: BTreeSet<String>,
}

impl InjectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, class: &str) -> bool {
        self.injected.contains(class)
    }

    pub fn len(&self) -> usize {
        self.injected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.injected.is_empty()
    }

    /// Write rules of `class` into `sheet`, unless it was written before.
    /// Returns false if class was already known.
    ///
    /// Rules are inserted in the given order, each at its preferred index
    /// clamped to the current sheet length.
    pub fn inject<S, I>(&mut self, sheet: &mut S, class: &str, rules: I) -> Result<bool, SheetError>
    where
        S: StyleSheet + ?Sized,
        I: IntoIterator<Item = (usize, String)>,
    {
        if self.contains(class) {
            trace!(target: "mil", "{class} already injected");
            return Ok(false);
        }
        self.injected.insert(class.to_owned());

        for (index, rule) in rules {
            let index = index.min(sheet.len());
            sheet.insert_rule(&rule, index)?;
            debug!(target: "mil", "inserted rule at {index}: {rule}");
        }
        Ok(true)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn memory_sheet_follows_insert_rule() {
        let mut sheet = MemorySheet::new();
        assert_eq!(sheet.insert_rule("b{}", 0), Ok(0));
        assert_eq!(sheet.insert_rule("a{}", 0), Ok(0));
        assert_eq!(sheet.insert_rule("c{}", 2), Ok(2));
        assert_eq!(
            sheet.insert_rule("d{}", 5),
            Err(SheetError::IndexOutOfBounds { index: 5, len: 3 })
        );
        assert_eq!(sheet.rules(), ["a{}", "b{}", "c{}"]);
    }

    #[test]
    fn style_tag() {
        let mut sheet = MemorySheet::with_id("app");
        sheet.insert_rule(".x{gap:1px}", 0).unwrap();
        assert_eq!(sheet.id(), "app");
        assert_eq!(sheet.to_style_tag(), "<style id=\"app\">.x{gap:1px}</style>");
        assert_eq!(MemorySheet::new().id(), DEFAULT_SHEET_ID);
    }

    #[test]
    fn inject_once() {
        let mut sheet = MemorySheet::new();
        let mut registry = InjectionRegistry::new();
        let rules = vec![(0, ".a{}".to_owned())];
        assert!(registry.inject(&mut sheet, "a", rules.clone()).unwrap());
        assert!(!registry.inject(&mut sheet, "a", rules).unwrap());
        assert_eq!(sheet.len(), 1);
        assert!(registry.contains("a"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn indices_are_clamped() {
        let mut sheet = MemorySheet::new();
        let mut registry = InjectionRegistry::new();
        // hover rule prefers index 2, sheet only has one rule at that point
        let rules = vec![(0, ".a{}".to_owned()), (2, ".a:hover{}".to_owned())];
        assert!(registry.inject(&mut sheet, "a", rules).unwrap());
        assert_eq!(sheet.rules(), [".a{}", ".a:hover{}"]);

        let rules = vec![(0, ".b{}".to_owned()), (0, ".b::after{}".to_owned())];
        assert!(registry.inject(&mut sheet, "b", rules).unwrap());
        assert_eq!(sheet.rules(), [".b::after{}", ".b{}", ".a{}", ".a:hover{}"]);
    }

    struct RejectingSheet;
    impl StyleSheet for RejectingSheet {
        fn len(&self) -> usize {
            0
        }
        fn insert_rule(&mut self, rule: &str, _index: usize) -> Result<usize, SheetError> {
            Err(SheetError::Rejected(rule.to_owned()))
        }
    }

    #[test]
    fn sheet_errors_are_returned() {
        let mut registry = InjectionRegistry::new();
        let result = registry.inject(&mut RejectingSheet, "a", vec![(0, ".a{}".to_owned())]);
        assert_eq!(result, Err(SheetError::Rejected(".a{}".to_owned())));
        // class is marked before insertion
        assert!(registry.contains("a"));
    }
}
