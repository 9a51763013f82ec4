//! Disclosure state for the two interactive parts of the page.
//!
//! Both machines are plain `Copy` values. Components own one each inside
//! an `RwSignal` and drive it from their event handlers, so every
//! transition is synchronous and the next render sees the new state.

use crate::content::NavItem;

/// Mobile navigation drawer: `Closed` or `Open`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavDisclosure {
    open: bool,
}

impl NavDisclosure {
    /// Fresh state; the drawer starts closed.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open_menu(&mut self) {
        if !self.open {
            tracing::debug!("mobile menu opened");
        }
        self.open = true;
    }

    pub fn close_menu(&mut self) {
        if self.open {
            tracing::debug!("mobile menu closed");
        }
        self.open = false;
    }

    /// A nav link was chosen: close the drawer and return the element id
    /// the page should scroll to.
    pub fn select_link(&mut self, item: &NavItem) -> &'static str {
        self.close_menu();
        item.fragment()
    }
}

/// Expand/collapse marker shown next to an FAQ question.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Indicator {
    Expanded,
    Collapsed,
}

impl Indicator {
    pub fn glyph(self) -> &'static str {
        match self {
            Indicator::Expanded => "−",
            Indicator::Collapsed => "+",
        }
    }
}

/// Single-selection accordion over the FAQ list.
///
/// Starts with the first entry expanded. Expanding an entry collapses
/// whichever one was open; toggling the open entry leaves none expanded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaqAccordion {
    selected: Option<usize>,
}

impl Default for FaqAccordion {
    fn default() -> Self {
        Self { selected: Some(0) }
    }
}

impl FaqAccordion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accordion with an explicit selection, `None` for all collapsed.
    pub fn with_selected(selected: Option<usize>) -> Self {
        Self { selected }
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn toggle(&mut self, index: usize) {
        self.selected = if self.selected == Some(index) {
            None
        } else {
            Some(index)
        };
        tracing::debug!(index, selected = ?self.selected, "faq toggled");
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.selected == Some(index)
    }

    pub fn indicator(&self, index: usize) -> Indicator {
        if self.is_expanded(index) {
            Indicator::Expanded
        } else {
            Indicator::Collapsed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::NAV_ITEMS;

    #[test]
    fn nav_starts_closed() {
        assert!(!NavDisclosure::new().is_open());
    }

    #[test]
    fn open_and_close_are_idempotent() {
        let mut nav = NavDisclosure::new();
        nav.open_menu();
        nav.open_menu();
        assert!(nav.is_open());
        nav.close_menu();
        nav.close_menu();
        assert!(!nav.is_open());
    }

    #[test]
    fn selecting_a_link_closes_and_targets_fragment() {
        for item in NAV_ITEMS {
            let mut nav = NavDisclosure::new();
            nav.open_menu();
            let target = nav.select_link(item);
            assert!(!nav.is_open());
            assert_eq!(format!("#{target}"), item.href);
        }
    }

    #[test]
    fn selecting_a_link_while_closed_stays_closed() {
        let mut nav = NavDisclosure::new();
        assert_eq!(nav.select_link(&NAV_ITEMS[2]), "faculty");
        assert!(!nav.is_open());
    }

    #[test]
    fn accordion_starts_on_first_entry() {
        let faq = FaqAccordion::new();
        assert_eq!(faq.selected(), Some(0));
        assert!(faq.is_expanded(0));
        assert!(!faq.is_expanded(1));
    }

    #[test]
    fn toggling_another_entry_moves_selection() {
        for i in 1..3 {
            let mut faq = FaqAccordion::new();
            faq.toggle(i);
            assert_eq!(faq.selected(), Some(i));
            let expanded = (0..3).filter(|&j| faq.is_expanded(j)).count();
            assert_eq!(expanded, 1);
        }
    }

    #[test]
    fn toggling_open_entry_collapses_to_none() {
        let mut faq = FaqAccordion::new();
        faq.toggle(0);
        assert_eq!(faq.selected(), None);
        assert!((0..3).all(|j| !faq.is_expanded(j)));

        faq.toggle(2);
        faq.toggle(2);
        assert_eq!(faq.selected(), None);
    }

    #[test]
    fn toggling_from_none_expands() {
        let mut faq = FaqAccordion::with_selected(None);
        faq.toggle(1);
        assert_eq!(faq.selected(), Some(1));
    }

    #[test]
    fn indicator_follows_selection() {
        let faq = FaqAccordion::with_selected(Some(1));
        assert_eq!(faq.indicator(1).glyph(), "−");
        assert_eq!(faq.indicator(0).glyph(), "+");
        assert_eq!(faq.indicator(2), Indicator::Collapsed);
    }
}
