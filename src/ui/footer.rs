//! Footer rendering
//!
//! Displays keybinding hints and a preview of the selected diff.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use crate::keymap::{Action, Keymap};
use crate::page::{DiffKind, DiffRegion};
use super::Styles;
use super::popup::truncate;

/// Actions advertised in the footer
const HINTS: [(Action, Action, &str); 5] = [
    (Action::NextDiff, Action::PrevDiff, "diff"),
    (Action::ScrollDown, Action::ScrollUp, "scroll"),
    (Action::NextPage, Action::PrevPage, "page"),
    (Action::Help, Action::Help, "help"),
    (Action::Quit, Action::Quit, "quit"),
];

/// Footer widget showing keybinding hints
pub struct Footer<'a> {
    pub keymap: &'a Keymap,
    /// Whether long lines wrap
    pub wrap: bool,
    /// Currently selected diff
    pub selected: Option<&'a DiffRegion>,
    /// Styles
    pub styles: &'a Styles,
}

impl Footer<'_> {
    fn hint_keys(&self, first: Action, second: Action) -> String {
        let key = |action| {
            self.keymap
                .keys_for(action)
                .next()
                .map(|k| k.to_string())
                .unwrap_or_else(|| "-".to_string())
        };
        if first == second {
            key(first)
        } else {
            format!("{}/{}", key(first), key(second))
        }
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        // Clear the footer area
        for x in area.x..area.x + area.width {
            buf[(x, area.y)]
                .set_char(' ')
                .set_style(self.styles.footer);
        }

        let mut spans = Vec::new();
        spans.push(Span::styled(" ", self.styles.footer));

        for (i, (first, second, desc)) in HINTS.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" │ ", self.styles.footer));
            }
            spans.push(Span::styled(self.hint_keys(*first, *second), self.styles.footer_key));
            spans.push(Span::styled(format!(" {}", desc), self.styles.footer));
        }

        if !self.wrap {
            spans.push(Span::styled(" │ ", self.styles.footer));
            spans.push(Span::styled("nowrap", self.styles.footer_key));
        }

        // Selected diff preview (right-aligned)
        if let Some(region) = self.selected {
            let left_width: usize = spans.iter().map(|s| s.content.width()).sum();
            let room = (area.width as usize).saturating_sub(left_width + 4);
            if room > 6 {
                let marker = match region.kind {
                    DiffKind::Inserted => "+",
                    DiffKind::Deleted => "-",
                    DiffKind::Image | DiffKind::Other => "~",
                };
                let preview = format!(" {} {} ", marker, truncate(&region.preview, room - 4));
                let padding = (area.width as usize).saturating_sub(left_width + preview.width());
                let style = match region.kind {
                    DiffKind::Inserted => self.styles.stats_inserted,
                    DiffKind::Deleted => self.styles.stats_deleted,
                    DiffKind::Image | DiffKind::Other => self.styles.stats_changed,
                };
                spans.push(Span::styled(" ".repeat(padding), self.styles.footer));
                spans.push(Span::styled(preview, style));
            }
        }

        let line = Line::from(spans);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}

/// Render the footer bar
pub fn render_footer(
    buf: &mut Buffer,
    area: Rect,
    keymap: &Keymap,
    wrap: bool,
    selected: Option<&DiffRegion>,
    styles: &Styles,
) {
    let footer = Footer {
        keymap,
        wrap,
        selected,
        styles,
    };
    footer.render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(buf: &Buffer, width: u16) -> String {
        (0..width).map(|x| buf[(x, 0)].symbol()).collect()
    }

    #[test]
    fn test_footer_hints_use_keymap() {
        let styles = Styles::new();
        let keymap = Keymap::default();
        let area = Rect::new(0, 0, 80, 1);
        let mut buf = Buffer::empty(area);
        render_footer(&mut buf, area, &keymap, true, None, &styles);

        let text = line(&buf, 80);
        assert!(text.starts_with(" n/N diff │ j/k scroll │ ]/[ page │ ? help │ q quit"));
    }

    #[test]
    fn test_footer_previews_selected_diff() {
        let styles = Styles::new();
        let keymap = Keymap::default();
        let region = DiffRegion {
            kind: DiffKind::Deleted,
            preview: "old text".to_string(),
            parent: None,
        };
        let area = Rect::new(0, 0, 100, 1);
        let mut buf = Buffer::empty(area);
        render_footer(&mut buf, area, &keymap, false, Some(&region), &styles);

        let text = line(&buf, 100);
        assert!(text.contains("nowrap"));
        assert!(text.ends_with(" - old text "));
    }
}
