//! Viewport scrolling
//!
//! Scroll offsets for the page area, plus scroll-into-view with block/inline
//! alignment. Smooth scrolls are advanced one frame per [`Viewport::tick`]
//! and a newer request simply replaces the in-flight target.

use crate::navigator::{ScrollAlign, ScrollBehavior, ScrollOptions};
use crate::ui::DiffSpan;

#[derive(Debug, Clone)]
pub struct Viewport {
    top: usize,
    left: usize,
    /// Animation target as (top, left)
    target: Option<(usize, usize)>,
    height: usize,
    width: usize,
    content_height: usize,
    content_width: usize,
    smooth_steps: usize,
}

impl Viewport {
    pub fn new(smooth_steps: u16) -> Self {
        Self {
            top: 0,
            left: 0,
            target: None,
            height: 0,
            width: 0,
            content_height: 0,
            content_width: 0,
            smooth_steps: usize::from(smooth_steps.max(1)),
        }
    }

    pub fn top(&self) -> usize {
        self.top
    }

    pub fn left(&self) -> usize {
        self.left
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_animating(&self) -> bool {
        self.target.is_some()
    }

    /// Update the visible area size
    pub fn set_size(&mut self, height: usize, width: usize) {
        self.height = height;
        self.width = width;
        self.clamp();
    }

    /// Update the scrollable content size
    pub fn set_content(&mut self, height: usize, width: usize) {
        self.content_height = height;
        self.content_width = width;
        self.clamp();
    }

    pub fn max_top(&self) -> usize {
        self.content_height.saturating_sub(self.height)
    }

    pub fn max_left(&self) -> usize {
        self.content_width.saturating_sub(self.width)
    }

    /// Jump back to the origin and drop any animation
    pub fn reset(&mut self) {
        self.top = 0;
        self.left = 0;
        self.target = None;
    }

    /// Scroll by a number of rows; cancels an in-flight animation
    pub fn scroll_by(&mut self, delta: isize) {
        self.target = None;
        let top = if delta >= 0 {
            self.top.saturating_add(delta.unsigned_abs())
        } else {
            self.top.saturating_sub(delta.unsigned_abs())
        };
        self.top = top.min(self.max_top());
    }

    pub fn scroll_to_top(&mut self) {
        self.target = None;
        self.top = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.target = None;
        self.top = self.max_top();
    }

    /// Bring a diff span into view
    pub fn scroll_into_view(&mut self, span: &DiffSpan, options: ScrollOptions) {
        let top = aligned_offset(
            self.top,
            self.height,
            span.first_row,
            span.last_row + 1,
            options.block,
        )
        .min(self.max_top());
        let left = aligned_offset(
            self.left,
            self.width,
            span.start_col,
            span.end_col,
            options.inline,
        )
        .min(self.max_left());

        match options.behavior {
            ScrollBehavior::Instant => {
                self.top = top;
                self.left = left;
                self.target = None;
            }
            ScrollBehavior::Smooth => {
                self.target = if (top, left) == (self.top, self.left) {
                    None
                } else {
                    Some((top, left))
                };
            }
        }
    }

    /// Advance a smooth scroll by one frame
    pub fn tick(&mut self) {
        let Some((top, left)) = self.target else {
            return;
        };

        self.top = approach(self.top, top, self.smooth_steps);
        self.left = approach(self.left, left, self.smooth_steps);

        if (self.top, self.left) == (top, left) {
            self.target = None;
        }
    }

    fn clamp(&mut self) {
        self.top = self.top.min(self.max_top());
        self.left = self.left.min(self.max_left());
        if let Some((top, left)) = self.target {
            self.target = Some((top.min(self.max_top()), left.min(self.max_left())));
        }
    }
}

/// Offset that places `[start, end)` according to `align` in a viewport of
/// `len` cells currently scrolled to `current`
fn aligned_offset(current: usize, len: usize, start: usize, end: usize, align: ScrollAlign) -> usize {
    let size = end.saturating_sub(start);
    match align {
        ScrollAlign::Start => start,
        ScrollAlign::End => end.saturating_sub(len),
        ScrollAlign::Center => (start + size / 2).saturating_sub(len / 2),
        ScrollAlign::Nearest => {
            if start >= current && end <= current + len {
                current
            } else if start < current || size > len {
                start
            } else {
                end.saturating_sub(len)
            }
        }
    }
}

/// Move `from` a fraction of the way to `to`, at least one cell
fn approach(from: usize, to: usize, steps: usize) -> usize {
    if from < to {
        from + (to - from).div_ceil(steps)
    } else {
        from - (from - to).div_ceil(steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(first_row: usize, last_row: usize, start_col: usize, end_col: usize) -> DiffSpan {
        DiffSpan {
            first_row,
            last_row,
            start_col,
            end_col,
        }
    }

    fn instant(block: ScrollAlign, inline: ScrollAlign) -> ScrollOptions {
        ScrollOptions {
            behavior: ScrollBehavior::Instant,
            block,
            inline,
        }
    }

    fn viewport(height: usize, width: usize, content_height: usize, content_width: usize) -> Viewport {
        let mut vp = Viewport::new(4);
        vp.set_size(height, width);
        vp.set_content(content_height, content_width);
        vp
    }

    #[test]
    fn test_center_alignment() {
        let mut vp = viewport(10, 80, 100, 80);
        vp.scroll_into_view(&span(50, 50, 0, 5), instant(ScrollAlign::Center, ScrollAlign::Nearest));
        assert_eq!(vp.top(), 45);

        // Multi-row spans center on their middle
        vp.scroll_into_view(&span(60, 63, 0, 5), instant(ScrollAlign::Center, ScrollAlign::Nearest));
        assert_eq!(vp.top(), 57);
    }

    #[test]
    fn test_center_clamps_at_edges() {
        let mut vp = viewport(10, 80, 100, 80);
        vp.scroll_into_view(&span(2, 2, 0, 1), instant(ScrollAlign::Center, ScrollAlign::Nearest));
        assert_eq!(vp.top(), 0);

        vp.scroll_into_view(&span(98, 98, 0, 1), instant(ScrollAlign::Center, ScrollAlign::Nearest));
        assert_eq!(vp.top(), 90);
    }

    #[test]
    fn test_start_and_end_alignment() {
        let mut vp = viewport(10, 80, 100, 80);
        vp.scroll_into_view(&span(30, 31, 0, 1), instant(ScrollAlign::Start, ScrollAlign::Nearest));
        assert_eq!(vp.top(), 30);
        vp.scroll_into_view(&span(30, 31, 0, 1), instant(ScrollAlign::End, ScrollAlign::Nearest));
        assert_eq!(vp.top(), 22);
    }

    #[test]
    fn test_nearest_alignment() {
        assert_eq!(aligned_offset(10, 10, 12, 14, ScrollAlign::Nearest), 10);
        assert_eq!(aligned_offset(10, 10, 5, 6, ScrollAlign::Nearest), 5);
        assert_eq!(aligned_offset(10, 10, 25, 27, ScrollAlign::Nearest), 17);
        // Larger than the viewport: show its start
        assert_eq!(aligned_offset(10, 10, 25, 50, ScrollAlign::Nearest), 25);
    }

    #[test]
    fn test_inline_nearest_scrolls_horizontally() {
        let mut vp = viewport(10, 20, 10, 100);
        vp.scroll_into_view(&span(0, 0, 50, 60), instant(ScrollAlign::Center, ScrollAlign::Nearest));
        assert_eq!(vp.left(), 40);

        vp.scroll_into_view(&span(0, 0, 45, 50), instant(ScrollAlign::Center, ScrollAlign::Nearest));
        assert_eq!(vp.left(), 40);

        vp.scroll_into_view(&span(0, 0, 3, 8), instant(ScrollAlign::Center, ScrollAlign::Nearest));
        assert_eq!(vp.left(), 3);
    }

    #[test]
    fn test_smooth_scroll_animates() {
        let mut vp = viewport(10, 80, 100, 80);
        vp.scroll_into_view(&span(45, 45, 0, 1), ScrollOptions::default());
        assert!(vp.is_animating());
        assert_eq!(vp.top(), 0);

        let mut frames = 0;
        let mut last = vp.top();
        while vp.is_animating() {
            vp.tick();
            assert!(vp.top() > last);
            last = vp.top();
            frames += 1;
            assert!(frames < 100);
        }
        assert_eq!(vp.top(), 40);
        assert!(frames > 1);
    }

    #[test]
    fn test_new_request_replaces_animation() {
        let mut vp = viewport(10, 80, 100, 80);
        vp.scroll_into_view(&span(80, 80, 0, 1), ScrollOptions::default());
        vp.tick();
        vp.scroll_into_view(&span(5, 5, 0, 1), ScrollOptions::default());
        while vp.is_animating() {
            vp.tick();
        }
        assert_eq!(vp.top(), 0);
    }

    #[test]
    fn test_manual_scroll_cancels_animation() {
        let mut vp = viewport(10, 80, 100, 80);
        vp.scroll_into_view(&span(80, 80, 0, 1), ScrollOptions::default());
        vp.scroll_by(3);
        assert!(!vp.is_animating());
        assert_eq!(vp.top(), 3);

        vp.scroll_by(-10);
        assert_eq!(vp.top(), 0);
        vp.scroll_to_bottom();
        assert_eq!(vp.top(), 90);
        vp.scroll_by(5);
        assert_eq!(vp.top(), 90);
    }

    #[test]
    fn test_content_shrink_clamps() {
        let mut vp = viewport(10, 80, 100, 80);
        vp.scroll_to_bottom();
        vp.set_content(20, 80);
        assert_eq!(vp.top(), 10);
        vp.set_content(5, 80);
        assert_eq!(vp.top(), 0);
    }

    #[test]
    fn test_smooth_to_current_position_is_noop() {
        let mut vp = viewport(10, 80, 100, 80);
        vp.scroll_into_view(&span(3, 3, 0, 1), ScrollOptions::default());
        assert!(!vp.is_animating());
    }
}
