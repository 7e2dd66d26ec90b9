//! Pager-view state

/// What the pager is currently doing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollState {
    #[default]
    Idle,
    Dragging,
    Settling,
}

/// Paged-view state: the active page and the scroll state machine.
///
/// Page changes put the pager into `Settling`; the owner settles it back to
/// `Idle` on its own schedule (the demo app does this on the next tick).
#[derive(Debug, Clone)]
pub struct PagerState {
    page: usize,
    page_count: usize,
    scroll_state: ScrollState,
}

impl PagerState {
    pub fn new(page_count: usize, initial_page: usize) -> Self {
        let page_count = page_count.max(1);
        Self {
            page: initial_page.min(page_count - 1),
            page_count,
            scroll_state: ScrollState::Idle,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn scroll_state(&self) -> ScrollState {
        self.scroll_state
    }

    pub fn is_idle(&self) -> bool {
        self.scroll_state == ScrollState::Idle
    }

    /// Jump to a page, clamped to the valid range.
    /// Moving to a different page starts a settle.
    pub fn set_page(&mut self, page: usize) {
        let page = page.min(self.page_count - 1);
        if page != self.page {
            self.page = page;
            self.scroll_state = ScrollState::Settling;
        }
    }

    pub fn next_page(&mut self) {
        self.set_page(self.page.saturating_add(1));
    }

    pub fn previous_page(&mut self) {
        self.set_page(self.page.saturating_sub(1));
    }

    /// Report a scroll state change from the owner
    pub fn on_scroll_state_changed(&mut self, state: ScrollState) {
        self.scroll_state = state;
    }
}
