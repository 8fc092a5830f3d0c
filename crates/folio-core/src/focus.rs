//! Which project the visitor is looking at.
//!
//! Passed explicitly to whatever needs it instead of living in ambient
//! global state. Components that only read or toggle the selection take
//! `&impl FocusControl` / `&mut impl FocusControl`.

pub trait FocusControl {
    fn selected(&self) -> Option<&str>;
    fn open(&mut self, slug: &str);
    fn close(&mut self);
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectFocus {
    selected: Option<String>,
}

impl ProjectFocus {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FocusControl for ProjectFocus {
    fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    fn open(&mut self, slug: &str) {
        tracing::debug!(slug, "project focused");
        self.selected = Some(slug.to_string());
    }

    fn close(&mut self) {
        self.selected = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_replaces_previous_selection() {
        let mut focus = ProjectFocus::new();
        focus.open("astra-link");
        focus.open("ledger-lens");
        assert_eq!(focus.selected(), Some("ledger-lens"));

        focus.close();
        assert_eq!(focus.selected(), None);
    }
}
