//! Mobile menu and navbar scroll state.

pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavState {
    menu_open: bool,
    scrolled: bool,
    threshold: f64,
}

impl Default for NavState {
    fn default() -> Self {
        Self::new(SCROLL_THRESHOLD_PX)
    }
}

impl NavState {
    pub fn new(threshold: f64) -> Self {
        Self {
            menu_open: false,
            scrolled: false,
            threshold,
        }
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn scrolled(&self) -> bool {
        self.scrolled
    }

    /// Flip the menu and return whether it is now open.
    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Record a scroll position. Returns the new `scrolled` flag only when it changed.
    pub fn on_scroll(&mut self, scroll_y: f64) -> Option<bool> {
        let scrolled = scroll_y > self.threshold;
        if scrolled == self.scrolled {
            return None;
        }
        self.scrolled = scrolled;
        Some(scrolled)
    }
}

/// Element id targeted by an in-page link, or `None` for a bare `#`.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_then_link_click_closes_menu() {
        let mut nav = NavState::default();
        assert!(nav.toggle_menu());
        nav.close_menu();
        assert!(!nav.menu_open());
        assert!(nav.toggle_menu());
        assert!(!nav.toggle_menu());
    }

    #[test]
    fn scroll_reports_only_threshold_crossings() {
        let mut nav = NavState::default();
        assert_eq!(nav.on_scroll(10.0), None);
        assert_eq!(nav.on_scroll(50.0), None);
        assert_eq!(nav.on_scroll(50.5), Some(true));
        assert_eq!(nav.on_scroll(400.0), None);
        assert!(nav.scrolled());
        assert_eq!(nav.on_scroll(50.0), Some(false));
        assert_eq!(nav.on_scroll(0.0), None);
    }

    #[test]
    fn anchor_target_ignores_bare_hash() {
        assert_eq!(anchor_target("#programs"), Some("programs"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("/about.html"), None);
    }
}
