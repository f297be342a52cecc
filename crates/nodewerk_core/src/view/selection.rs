//! Invoice list multi-select.
//!
//! # Invariants
//! - Ids appear at most once, in the order they were selected.
//! - Selecting all when everything is already selected clears the selection.

use crate::model::finance::Invoice;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvoiceSelection {
    selected: Vec<String>,
}

impl InvoiceSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `id` if absent, removes it otherwise.
    ///
    /// Returns whether `id` is selected afterwards.
    pub fn toggle(&mut self, id: &str) -> bool {
        if let Some(index) = self.selected.iter().position(|s| s == id) {
            self.selected.remove(index);
            return false;
        }
        self.selected.push(id.to_string());
        true
    }

    /// Header checkbox: clears when every id is selected, selects all otherwise.
    pub fn toggle_all<'a, I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        let ids: Vec<&str> = ids.into_iter().collect();
        if self.all_selected(ids.iter().copied()) {
            self.selected.clear();
            return;
        }
        for id in ids {
            if !self.is_selected(id) {
                self.selected.push(id.to_string());
            }
        }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.iter().any(|s| s == id)
    }

    /// True when `ids` is non-empty and every id is selected.
    pub fn all_selected<'a, I>(&self, ids: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut any = false;
        for id in ids {
            if !self.is_selected(id) {
                return false;
            }
            any = true;
        }
        any
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Sum of totals of the selected invoices found in `invoices`.
    pub fn selected_total(&self, invoices: &[Invoice]) -> f64 {
        invoices
            .iter()
            .filter(|i| self.is_selected(&i.id))
            .map(|i| i.total)
            .sum()
    }
}
