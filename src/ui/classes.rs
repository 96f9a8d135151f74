//! Class-name assembly.
//!
//! Components build their `class` attributes from a mix of fixed tokens,
//! conditional modifiers and caller-supplied strings. Empty entries are
//! dropped; everything else is kept exactly as given.

use std::fmt;

/// An ordered list of CSS class names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    classes: Vec<String>,
}

impl ClassList {
    /// Create an empty class list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a class verbatim. Empty values are ignored.
    pub fn push(&mut self, class: impl AsRef<str>) {
        let class = class.as_ref();
        if !class.is_empty() {
            self.classes.push(class.to_string());
        }
    }

    /// Append a class only when `condition` holds.
    pub fn push_if(&mut self, condition: bool, class: impl AsRef<str>) {
        if condition {
            self.push(class);
        }
    }

    /// Append a class if present.
    pub fn push_opt(&mut self, class: Option<impl AsRef<str>>) {
        if let Some(class) = class {
            self.push(class);
        }
    }

    /// Builder form of [`ClassList::push`].
    pub fn with(mut self, class: impl AsRef<str>) -> Self {
        self.push(class);
        self
    }

    /// Builder form of [`ClassList::push_if`].
    pub fn with_if(mut self, condition: bool, class: impl AsRef<str>) -> Self {
        self.push_if(condition, class);
        self
    }

    /// Builder form of [`ClassList::push_opt`].
    pub fn with_opt(mut self, class: Option<impl AsRef<str>>) -> Self {
        self.push_opt(class);
        self
    }

    /// Returns true if `class` is one of the entries.
    ///
    /// Multi-token entries (e.g. a verbatim `"shadow-lg p-2"`) are matched
    /// token by token.
    pub fn contains(&self, class: &str) -> bool {
        self.classes
            .iter()
            .flat_map(|entry| entry.split_whitespace())
            .any(|token| token == class)
    }

    /// Join the entries with single spaces.
    pub fn join(&self) -> String {
        self.classes.join(" ")
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join())
    }
}
