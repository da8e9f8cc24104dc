//! Popup overlays
//!
//! Help overlay listing the active key bindings.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::keymap::{Action, Keymap};
use super::Styles;

/// Help sections, in display order
const HELP_SECTIONS: [(&str, &[Action]); 4] = [
    ("Diffs", &[Action::NextDiff, Action::PrevDiff]),
    (
        "Scrolling",
        &[
            Action::ScrollDown,
            Action::ScrollUp,
            Action::HalfPageDown,
            Action::HalfPageUp,
            Action::Top,
            Action::Bottom,
        ],
    ),
    ("Pages", &[Action::NextPage, Action::PrevPage]),
    ("View", &[Action::ToggleWrap, Action::Help, Action::Quit]),
];

/// Render a centered popup overlay
fn render_centered_popup(buf: &mut Buffer, area: Rect, width: u16, height: u16, title: &str, styles: &Styles) -> Rect {
    // Calculate centered position
    let popup_x = area.x + (area.width.saturating_sub(width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(height)) / 2;

    let popup_area = Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    );

    // Clear the popup area
    Clear.render(popup_area, buf);

    // Draw border
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles.border_focus)
        .title(Span::styled(format!(" {} ", title), styles.popup_title))
        .style(styles.popup);

    let inner = block.inner(popup_area);
    block.render(popup_area, buf);

    inner
}

/// Render help overlay
pub fn render_help_popup(buf: &mut Buffer, area: Rect, keymap: &Keymap, styles: &Styles) {
    let mut help_items: Vec<(String, &str)> = Vec::new();
    for (i, (section, actions)) in HELP_SECTIONS.iter().enumerate() {
        if i > 0 {
            help_items.push((String::new(), ""));
        }
        help_items.push((section.to_string(), ""));
        for action in actions.iter() {
            help_items.push((keymap.label(*action), action.description()));
        }
    }

    let width = 50.min(area.width.saturating_sub(4));
    let height = (help_items.len() as u16 + 2).min(area.height.saturating_sub(2));
    if width < 4 || height < 3 {
        return;
    }

    let inner = render_centered_popup(buf, area, width, height, "Help", styles);

    for (i, (key, desc)) in help_items.iter().enumerate() {
        let y = inner.y + i as u16;
        if y >= inner.y + inner.height {
            break;
        }

        if key.is_empty() && desc.is_empty() {
            continue;
        }

        if desc.is_empty() {
            // Section header
            buf.set_line(
                inner.x,
                y,
                &Line::styled(format!(" {}", key), styles.popup_title),
                inner.width,
            );
        } else {
            // Key/desc pair
            let line = Line::from(vec![
                Span::styled(format!("  {:>14} ", truncate(key, 14)), styles.help_key),
                Span::styled(*desc, styles.help_desc),
            ]);
            buf.set_line(inner.x, y, &line, inner.width);
        }
    }
}

/// Truncate a string to a display width
pub(super) fn truncate(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }

    let budget = if max > 3 { max - 3 } else { max };
    let mut out = String::new();
    let mut width = 0;
    for c in s.chars() {
        let cw = c.width().unwrap_or(0);
        if width + cw > budget {
            break;
        }
        out.push(c);
        width += cw;
    }
    if max > 3 {
        out.push_str("...");
    }
    out
}
