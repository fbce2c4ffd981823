//! CountrySelection - state of the phone prefix picker.

use super::DialCodeEntry;

/// The loaded dial code list, which entry is chosen, and whether the
/// dropdown is open. Outside-click handling is the presentation layer's job;
/// it just calls [`close`](Self::close).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CountrySelection {
    entries: Vec<DialCodeEntry>,
    selected: Option<usize>,
    open: bool,
}

impl CountrySelection {
    /// Loads entries and preselects `default_dial_code`, or the first entry
    /// if that code is not in the list.
    pub fn new(entries: Vec<DialCodeEntry>, default_dial_code: &str) -> Self {
        let selected = entries
            .iter()
            .position(|e| e.dial_code == default_dial_code)
            .or(if entries.is_empty() { None } else { Some(0) });
        Self {
            entries,
            selected,
            open: false,
        }
    }

    /// All entries in display order.
    pub fn entries(&self) -> &[DialCodeEntry] {
        &self.entries
    }

    /// The chosen entry.
    pub fn selected(&self) -> Option<&DialCodeEntry> {
        self.selected.and_then(|i| self.entries.get(i))
    }

    /// Whether the dropdown is showing.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Opens a closed dropdown and closes an open one.
    pub fn toggle_open(&mut self) {
        self.open = !self.open;
    }

    /// Closes the dropdown.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Chooses the entry with the given ISO code and closes the dropdown.
    ///
    /// Returns `None` and leaves the selection alone if the code is unknown.
    pub fn select_entry(&mut self, iso_code: &str) -> Option<&DialCodeEntry> {
        let idx = self
            .entries
            .iter()
            .position(|e| e.iso_code.eq_ignore_ascii_case(iso_code))?;
        self.selected = Some(idx);
        self.open = false;
        self.entries.get(idx)
    }

    /// Chooses the first entry with the given dial code, keeping the
    /// current selection if it already has that code.
    pub fn select_dial_code(&mut self, dial_code: &str) -> Option<&DialCodeEntry> {
        if self.selected().is_some_and(|e| e.dial_code == dial_code) {
            return self.selected();
        }
        let idx = self.entries.iter().position(|e| e.dial_code == dial_code)?;
        self.selected = Some(idx);
        self.entries.get(idx)
    }
}
