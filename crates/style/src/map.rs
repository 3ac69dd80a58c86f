//! Selector to ordered declaration list.

use crate::declaration::Declaration;
use crate::error::StyleError;
use log::trace;
use std::collections::HashMap;

/// The finished output of the external style-sheet parser.
///
/// Each selector maps to its declarations in source order, already expanded from
/// comma-separated selector lists and with `::before`/`::after` declarations tagged
/// `before|`/`after|`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleMap {
    rules: HashMap<String, Vec<String>>,
}

impl StyleMap {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declarations for `selector`, or `None` when the style sheet never mentions it.
    #[inline]
    pub fn lookup(&self, selector: &str) -> Option<&[String]> {
        self.rules.get(selector).map(Vec::as_slice)
    }

    /// Parsed declarations for `selector`.
    ///
    /// # Errors
    /// The first declaration that fails [`Declaration::parse`].
    pub fn declarations(&self, selector: &str) -> Option<Result<Vec<Declaration>, StyleError>> {
        self.lookup(selector)
            .map(|raw| raw.iter().map(|item| Declaration::parse(item)).collect())
    }

    /// Append declarations to a selector, creating the entry if needed.
    pub fn insert<I, S>(&mut self, selector: &str, declarations: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entry = self.rules.entry(selector.trim().to_owned()).or_default();
        entry.extend(declarations.into_iter().map(Into::into));
        trace!(target: "tactile_style", "selector {selector:?} now has {} declarations", entry.len());
    }

    /// Insert the same declarations under every selector of a comma-separated list.
    pub fn insert_rule<I, S>(&mut self, selector_list: &str, declarations: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let declarations: Vec<String> = declarations.into_iter().map(Into::into).collect();
        for selector in selector_list.split(',').map(str::trim).filter(|name| !name.is_empty()) {
            self.insert(selector, declarations.iter().cloned());
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn selectors(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<(S, Vec<String>)> for StyleMap {
    fn from_iter<I: IntoIterator<Item = (S, Vec<String>)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (selector, declarations) in iter {
            let selector: String = selector.into();
            map.insert(&selector, declarations);
        }
        map
    }
}
