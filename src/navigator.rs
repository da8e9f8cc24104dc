//! Diff navigation
//!
//! Keeps a cursor into an ordered collection of diff elements and moves the
//! selection highlight along with it. The collection is reached only through
//! the [`DiffCollection`] trait, so the cursor logic does not care whether the
//! elements live in a terminal buffer or anywhere else.

use serde::Deserialize;

/// How the viewport travels to a diff
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBehavior {
    /// Animate over a few frames
    #[default]
    Smooth,
    /// Jump straight to the target
    Instant,
}

/// Where a diff ends up along one axis of the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollAlign {
    Start,
    Center,
    End,
    /// Move as little as possible to make the diff visible
    Nearest,
}

/// Scroll-into-view options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollOptions {
    pub behavior: ScrollBehavior,
    /// Vertical alignment
    pub block: ScrollAlign,
    /// Horizontal alignment
    pub inline: ScrollAlign,
}

impl Default for ScrollOptions {
    fn default() -> Self {
        Self {
            behavior: ScrollBehavior::Smooth,
            block: ScrollAlign::Center,
            inline: ScrollAlign::Nearest,
        }
    }
}

/// An ordered, highlightable, scrollable set of diff elements
pub trait DiffCollection {
    /// Number of diff elements
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Add or remove the selection highlight on one element
    fn set_highlighted(&mut self, index: usize, highlighted: bool);

    /// Bring one element into view
    fn scroll_into_view(&mut self, index: usize, options: ScrollOptions);
}

/// Direction of a navigation key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Next,
    Previous,
}

/// Cursor over a [`DiffCollection`]
///
/// Movement saturates at both ends: advancing from the last diff or
/// retreating from the first one leaves the cursor where it is.
#[derive(Debug, Clone)]
pub struct DiffNavigator {
    cursor: usize,
    options: ScrollOptions,
}

impl Default for DiffNavigator {
    fn default() -> Self {
        Self::new(ScrollOptions::default())
    }
}

impl DiffNavigator {
    pub fn new(options: ScrollOptions) -> Self {
        Self { cursor: 0, options }
    }

    /// Index of the selected diff
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn options(&self) -> ScrollOptions {
        self.options
    }

    /// Select the first diff once the page is ready
    pub fn init<C: DiffCollection + ?Sized>(&mut self, diffs: &mut C) {
        self.cursor = 0;
        if diffs.is_empty() {
            return;
        }
        self.select(diffs);
    }

    /// Move to the next diff
    pub fn advance<C: DiffCollection + ?Sized>(&mut self, diffs: &mut C) {
        self.step(diffs, |cursor, last| cursor.saturating_add(1).min(last));
    }

    /// Move to the previous diff
    pub fn retreat<C: DiffCollection + ?Sized>(&mut self, diffs: &mut C) {
        self.step(diffs, |cursor, last| cursor.saturating_sub(1).min(last));
    }

    /// Route a classified key press. `None` is an unrelated key and is ignored.
    pub fn dispatch<C: DiffCollection + ?Sized>(
        &mut self,
        action: Option<NavAction>,
        diffs: &mut C,
    ) {
        match action {
            Some(NavAction::Next) => self.advance(diffs),
            Some(NavAction::Previous) => self.retreat(diffs),
            None => {}
        }
    }

    fn step<C, F>(&mut self, diffs: &mut C, next: F)
    where
        C: DiffCollection + ?Sized,
        F: FnOnce(usize, usize) -> usize,
    {
        let len = diffs.len();
        if self.cursor < len {
            diffs.set_highlighted(self.cursor, false);
        }
        if len == 0 {
            self.cursor = 0;
            return;
        }

        self.cursor = next(self.cursor, len - 1);
        log::debug!("diff cursor -> {}/{}", self.cursor + 1, len);
        self.select(diffs);
    }

    fn select<C: DiffCollection + ?Sized>(&self, diffs: &mut C) {
        diffs.set_highlighted(self.cursor, true);
        diffs.scroll_into_view(self.cursor, self.options);
    }
}
