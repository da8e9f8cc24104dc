//! Header rendering
//!
//! Displays the page title, diff position, and change stats.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use super::Styles;

/// Header widget showing page and diff info
pub struct Header<'a> {
    /// Page title
    pub title: &'a str,
    /// Index of the current page
    pub page_index: usize,
    /// Number of pages given on the command line
    pub page_count: usize,
    /// Selected diff, if the page has any
    pub cursor: Option<usize>,
    /// Number of diffs on the page
    pub diff_count: usize,
    /// Inserted regions
    pub inserted: usize,
    /// Deleted regions
    pub deleted: usize,
    /// Image and other changed regions
    pub changed: usize,
    /// Styles
    pub styles: &'a Styles,
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        // Clear the header area
        for x in area.x..area.x + area.width {
            buf[(x, area.y)]
                .set_char(' ')
                .set_style(self.styles.header);
        }

        let mut spans = Vec::new();

        spans.push(Span::styled(
            format!(" {} ", self.title),
            self.styles.header_title,
        ));

        if self.page_count > 1 {
            spans.push(Span::styled(" │ ", self.styles.footer));
            spans.push(Span::styled(
                format!("page {}/{}", self.page_index + 1, self.page_count),
                self.styles.header,
            ));
        }

        // Stats
        if self.diff_count > 0 {
            spans.push(Span::styled(" │ ", self.styles.footer));
            spans.push(Span::styled(
                format!("+{}", self.inserted),
                self.styles.stats_inserted,
            ));
            spans.push(Span::styled(" ", self.styles.header));
            spans.push(Span::styled(
                format!("-{}", self.deleted),
                self.styles.stats_deleted,
            ));
            if self.changed > 0 {
                spans.push(Span::styled(" ", self.styles.header));
                spans.push(Span::styled(
                    format!("~{}", self.changed),
                    self.styles.stats_changed,
                ));
            }
        }

        // Diff position (right-aligned)
        let position = match self.cursor {
            Some(cursor) if self.diff_count > 0 => {
                format!(" diff {}/{} ", cursor + 1, self.diff_count)
            }
            _ => " no diffs ".to_string(),
        };
        let position_width = position.width();

        let left_content_width: usize = spans.iter().map(|s| s.content.width()).sum();
        let area_width = usize::from(area.width);

        if left_content_width + position_width < area_width {
            let padding = area_width - left_content_width - position_width;
            spans.push(Span::styled(
                " ".repeat(padding),
                self.styles.header,
            ));
            spans.push(Span::styled(position, self.styles.header_title));
        }

        let line = Line::from(spans);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}

/// Render the header bar
pub fn render_header(
    buf: &mut Buffer,
    area: Rect,
    title: &str,
    page_index: usize,
    page_count: usize,
    cursor: Option<usize>,
    diff_count: usize,
    (inserted, deleted, changed): (usize, usize, usize),
    styles: &Styles,
) {
    let header = Header {
        title,
        page_index,
        page_count,
        cursor,
        diff_count,
        inserted,
        deleted,
        changed,
        styles,
    };
    header.render(area, buf);
}
