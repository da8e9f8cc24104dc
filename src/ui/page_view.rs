//! Page content rendering
//!
//! Draws the laid-out page rows with a change gutter, diff coloring, and the
//! selection highlight on the current diff.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthChar;

use crate::page::Page;
use super::layout::{PageLayout, Row, RowSegment};
use super::Styles;

/// Columns reserved for the change gutter
pub const GUTTER_WIDTH: u16 = 2;

/// Page content widget
pub struct PageContent<'a> {
    pub page: &'a Page,
    pub layout: &'a PageLayout,
    /// First visible row
    pub top: usize,
    /// First visible column
    pub left: usize,
    /// Highlighted diff
    pub selected: Option<usize>,
    pub styles: &'a Styles,
}

impl PageContent<'_> {
    /// Whether a diff is the selected one or nested inside it
    fn is_selected(&self, diff: usize) -> bool {
        self.selected
            .is_some_and(|selected| self.page.diff_within(diff, selected))
    }

    fn segment_style(&self, segment: &RowSegment) -> Style {
        let mut style = self.styles.emphasis(segment.emphasis);
        if let Some(index) = segment.diff {
            if let Some(region) = self.page.diffs.get(index) {
                style = style.patch(self.styles.diff(region.kind));
            }
            if self.is_selected(index) {
                style = style.patch(self.styles.selected);
            }
        }
        style
    }

    fn gutter(&self, row: &Row) -> (&'static str, Style) {
        if row.segments.iter().filter_map(|s| s.diff).any(|d| self.is_selected(d)) {
            return ("▶ ", self.styles.gutter_selected);
        }
        if !row.has_any_diff() {
            return ("  ", self.styles.text);
        }

        let kind = row
            .segments
            .iter()
            .find_map(|s| s.diff)
            .and_then(|index| self.page.diffs.get(index))
            .map(|region| region.kind);

        match kind {
            Some(kind) => ("│ ", self.styles.gutter(kind)),
            None => ("  ", self.styles.text),
        }
    }
}

impl Widget for PageContent<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width <= GUTTER_WIDTH {
            return;
        }

        if self.layout.rows.is_empty() {
            buf.set_line(
                area.x + GUTTER_WIDTH,
                area.y,
                &Line::styled("(no visible content)", self.styles.message),
                area.width - GUTTER_WIDTH,
            );
            return;
        }

        let content_x = area.x + GUTTER_WIDTH;
        let content_width = area.width - GUTTER_WIDTH;

        let visible = self
            .layout
            .rows
            .iter()
            .skip(self.top)
            .take(area.height as usize);

        for (i, row) in visible.enumerate() {
            let y = area.y + i as u16;

            let (marker, gutter_style) = self.gutter(row);
            buf.set_line(area.x, y, &Line::styled(marker, gutter_style), GUTTER_WIDTH);

            let spans: Vec<Span> = clip_row(row, self.left, content_width as usize)
                .into_iter()
                .map(|(text, segment)| Span::styled(text, self.segment_style(segment)))
                .collect();
            buf.set_line(content_x, y, &Line::from(spans), content_width);
        }
    }
}

/// Cut a row down to the columns `[left, left + width)`.
///
/// Wide characters straddling the left edge become a space.
fn clip_row(row: &Row, left: usize, width: usize) -> Vec<(String, &RowSegment)> {
    let right = left + width;
    let mut out = Vec::new();
    let mut col = 0usize;

    for segment in &row.segments {
        if col >= right {
            break;
        }

        let mut text = String::new();
        for c in segment.text.chars() {
            let cw = c.width().unwrap_or(0);
            if col >= right || col + cw > right {
                break;
            }
            if col >= left {
                text.push(c);
            } else if col + cw > left {
                text.extend(std::iter::repeat_n(' ', col + cw - left));
            }
            col += cw;
        }

        if !text.is_empty() {
            out.push((text, segment));
        }
    }

    out
}

/// Render the page content
pub fn render_page_content(
    buf: &mut Buffer,
    area: Rect,
    page: &Page,
    layout: &PageLayout,
    top: usize,
    left: usize,
    selected: Option<usize>,
    styles: &Styles,
) {
    let content = PageContent {
        page,
        layout,
        top,
        left,
        selected,
        styles,
    };
    content.render(area, buf);
}

/// Render a one-line message in place of page content
pub fn render_message(buf: &mut Buffer, area: Rect, message: &str, style: Style) {
    if area.height == 0 {
        return;
    }
    let x = area.x + GUTTER_WIDTH.min(area.width);
    buf.set_line(x, area.y, &Line::styled(message, style), area.width.saturating_sub(GUTTER_WIDTH));
}
