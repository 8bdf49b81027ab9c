use crate::constants::NAV_COLLAPSE_BREAKPOINT_PX;

/// Open/closed state of the mobile navigation menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn new(open: bool) -> Self {
        Self { open }
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the menu and return the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

/// Link clicks only collapse the menu on narrow (mobile) layouts.
#[inline]
pub fn should_close_on_link(viewport_width: f64) -> bool {
    viewport_width <= NAV_COLLAPSE_BREAKPOINT_PX
}

#[inline]
pub fn aria_bool(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// `document.readyState` is `"loading"` until the parser finishes; after that
/// the DOM is complete enough to wire handlers immediately.
#[inline]
pub fn is_document_loading(ready_state: &str) -> bool {
    ready_state == "loading"
}
