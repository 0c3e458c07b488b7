//! Ordered tab sequence
//!
//! Display order is storage order. Ids are unique and the sequence always
//! holds at least one tab.

use serde::Serialize;

use crate::error::TabError;
use crate::tab::{Tab, TabId};
use crate::Result;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TabSequence<P> {
    tabs: Vec<Tab<P>>,
}

impl<P> TabSequence<P> {
    /// Create a sequence holding a single tab
    pub fn new(first: Tab<P>) -> Self {
        Self { tabs: vec![first] }
    }

    /// Build a sequence from an ordered list of tabs
    pub fn from_tabs(tabs: Vec<Tab<P>>) -> Result<Self> {
        if tabs.is_empty() {
            return Err(TabError::Empty);
        }

        let mut sequence = Self {
            tabs: Vec::with_capacity(tabs.len()),
        };
        for tab in tabs {
            sequence.push(tab)?;
        }
        Ok(sequence)
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Tab<P>> {
        self.tabs.get(index)
    }

    pub fn find(&self, id: &TabId) -> Option<&Tab<P>> {
        self.tabs.iter().find(|tab| &tab.id == id)
    }

    pub fn position(&self, id: &TabId) -> Option<usize> {
        self.tabs.iter().position(|tab| &tab.id == id)
    }

    pub fn contains(&self, id: &TabId) -> bool {
        self.position(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tab<P>> {
        self.tabs.iter()
    }

    /// Tab ids in display order
    pub fn ids(&self) -> Vec<TabId> {
        self.tabs.iter().map(|tab| tab.id.clone()).collect()
    }

    /// Append a tab at the end of the strip
    pub fn push(&mut self, tab: Tab<P>) -> Result<()> {
        self.ensure_unique(&tab.id)?;
        self.tabs.push(tab);
        Ok(())
    }

    /// Insert a tab at `index`, clamped to `[0, len]`
    pub fn insert(&mut self, index: usize, tab: Tab<P>) -> Result<usize> {
        self.ensure_unique(&tab.id)?;
        let index = index.min(self.tabs.len());
        self.tabs.insert(index, tab);
        Ok(index)
    }

    /// Close a tab. Fails with [`TabError::LastTab`] when it is the only one.
    pub fn close(&mut self, id: &TabId) -> Result<Tab<P>> {
        let index = self
            .position(id)
            .ok_or_else(|| TabError::NotFound(id.to_string()))?;
        self.take(index)
    }

    /// The single authoritative "at least one tab remains" check.
    pub fn ensure_removable(&self) -> Result<()> {
        if self.tabs.len() <= 1 {
            return Err(TabError::LastTab);
        }
        Ok(())
    }

    pub(crate) fn take(&mut self, index: usize) -> Result<Tab<P>> {
        if index >= self.tabs.len() {
            return Err(TabError::IndexOutOfRange {
                index,
                len: self.tabs.len(),
            });
        }
        self.ensure_removable()?;
        Ok(self.tabs.remove(index))
    }

    /// Remove at `from` and reinsert at `to` (post-removal coordinates).
    /// Callers validate indices first.
    pub(crate) fn relocate(&mut self, from: usize, to: usize) {
        let tab = self.tabs.remove(from);
        self.tabs.insert(to, tab);
    }

    fn ensure_unique(&self, id: &TabId) -> Result<()> {
        if self.contains(id) {
            return Err(TabError::DuplicateId(id.to_string()));
        }
        Ok(())
    }
}
