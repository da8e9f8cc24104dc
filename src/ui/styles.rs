//! UI styles
//!
//! Defines consistent styling for the entire application.
//! Uses a delta-like color palette for inserted and deleted content.

use ratatui::style::{Color, Modifier, Style};

use crate::page::{DiffKind, Emphasis};

/// Color palette inspired by delta diff viewer
pub mod colors {
    use ratatui::style::Color;

    // Base colors
    pub const FG: Color = Color::White;
    pub const DIM: Color = Color::DarkGray;

    // Diff colors (delta-like palette)
    pub const INSERTED_BG: Color = Color::Rgb(35, 60, 35);
    pub const INSERTED_FG: Color = Color::Rgb(120, 200, 120);
    pub const DELETED_BG: Color = Color::Rgb(60, 35, 35);
    pub const DELETED_FG: Color = Color::Rgb(200, 120, 120);
    pub const CHANGED_BG: Color = Color::Rgb(35, 45, 65);
    pub const CHANGED_FG: Color = Color::Rgb(130, 170, 220);

    // Selected diff
    pub const SELECTED_BG: Color = Color::Rgb(95, 85, 30);
    pub const SELECTED_FG: Color = Color::Rgb(255, 240, 170);

    // Gutter colors
    pub const GUTTER_INSERTED: Color = Color::Green;
    pub const GUTTER_DELETED: Color = Color::Red;
    pub const GUTTER_CHANGED: Color = Color::Blue;
    pub const GUTTER_SELECTED: Color = Color::Yellow;

    // Page text
    pub const HEADING_FG: Color = Color::Cyan;
    pub const CODE_FG: Color = Color::Rgb(210, 180, 140);
    pub const LINK_FG: Color = Color::Rgb(110, 150, 230);
    pub const IMAGE_FG: Color = Color::Magenta;

    // Links to other pages of the site
    pub const LINK_DIFF_FG: Color = Color::Yellow;
    pub const LINK_ADD_FG: Color = Color::Green;
    pub const LINK_DEL_FG: Color = Color::Red;

    // UI elements
    pub const HEADER_BG: Color = Color::Rgb(40, 44, 52);
    pub const HEADER_FG: Color = Color::White;
    pub const FOOTER_BG: Color = Color::Rgb(40, 44, 52);
    pub const FOOTER_FG: Color = Color::DarkGray;

    // Stats
    pub const STATS_INSERTED: Color = Color::Green;
    pub const STATS_DELETED: Color = Color::Red;
    pub const STATS_CHANGED: Color = Color::Blue;

    // Borders
    pub const BORDER_FOCUS: Color = Color::Cyan;

    // Popup
    pub const POPUP_BG: Color = Color::Rgb(30, 34, 42);
    pub const POPUP_BORDER: Color = Color::Cyan;
}

/// Collection of styles used throughout the UI
#[derive(Clone)]
pub struct Styles {
    // Header/Footer
    pub header: Style,
    pub header_title: Style,
    pub footer: Style,
    pub footer_key: Style,

    // Page text
    pub text: Style,
    pub heading: Style,
    pub code: Style,
    pub link: Style,
    pub link_to_diff: Style,
    pub link_to_add: Style,
    pub link_to_del: Style,
    pub image: Style,
    pub message: Style,
    pub error: Style,

    // Diffs
    pub inserted: Style,
    pub deleted: Style,
    pub changed: Style,
    pub selected: Style,

    // Gutter
    pub gutter_inserted: Style,
    pub gutter_deleted: Style,
    pub gutter_changed: Style,
    pub gutter_selected: Style,

    // Stats
    pub stats_inserted: Style,
    pub stats_deleted: Style,
    pub stats_changed: Style,

    // Borders
    pub border_focus: Style,

    // Popup
    pub popup: Style,
    pub popup_title: Style,

    // Help
    pub help_key: Style,
    pub help_desc: Style,
}

impl Default for Styles {
    fn default() -> Self {
        Self::new()
    }
}

impl Styles {
    /// Create a new Styles instance with default values
    pub fn new() -> Self {
        Self {
            // Header/Footer
            header: Style::default()
                .bg(colors::HEADER_BG)
                .fg(colors::HEADER_FG),
            header_title: Style::default()
                .bg(colors::HEADER_BG)
                .fg(colors::HEADER_FG)
                .add_modifier(Modifier::BOLD),
            footer: Style::default()
                .bg(colors::FOOTER_BG)
                .fg(colors::FOOTER_FG),
            footer_key: Style::default()
                .bg(colors::FOOTER_BG)
                .fg(colors::HEADER_FG)
                .add_modifier(Modifier::BOLD),

            // Page text
            text: Style::default().fg(colors::FG),
            heading: Style::default()
                .fg(colors::HEADING_FG)
                .add_modifier(Modifier::BOLD),
            code: Style::default().fg(colors::CODE_FG),
            link: Style::default()
                .fg(colors::LINK_FG)
                .add_modifier(Modifier::UNDERLINED),
            link_to_diff: Style::default()
                .fg(colors::LINK_DIFF_FG)
                .add_modifier(Modifier::UNDERLINED | Modifier::BOLD),
            link_to_add: Style::default()
                .fg(colors::LINK_ADD_FG)
                .add_modifier(Modifier::UNDERLINED | Modifier::BOLD),
            link_to_del: Style::default()
                .fg(colors::LINK_DEL_FG)
                .add_modifier(Modifier::UNDERLINED | Modifier::CROSSED_OUT),
            image: Style::default()
                .fg(colors::IMAGE_FG)
                .add_modifier(Modifier::ITALIC),
            message: Style::default()
                .fg(colors::DIM)
                .add_modifier(Modifier::ITALIC),
            error: Style::default()
                .fg(colors::DELETED_FG)
                .add_modifier(Modifier::BOLD),

            // Diffs
            inserted: Style::default()
                .bg(colors::INSERTED_BG)
                .fg(colors::INSERTED_FG),
            deleted: Style::default()
                .bg(colors::DELETED_BG)
                .fg(colors::DELETED_FG)
                .add_modifier(Modifier::CROSSED_OUT),
            changed: Style::default()
                .bg(colors::CHANGED_BG)
                .fg(colors::CHANGED_FG),
            selected: Style::default()
                .bg(colors::SELECTED_BG)
                .fg(colors::SELECTED_FG)
                .add_modifier(Modifier::BOLD),

            // Gutter
            gutter_inserted: Style::default().fg(colors::GUTTER_INSERTED),
            gutter_deleted: Style::default().fg(colors::GUTTER_DELETED),
            gutter_changed: Style::default().fg(colors::GUTTER_CHANGED),
            gutter_selected: Style::default()
                .fg(colors::GUTTER_SELECTED)
                .add_modifier(Modifier::BOLD),

            // Stats
            stats_inserted: Style::default()
                .bg(colors::HEADER_BG)
                .fg(colors::STATS_INSERTED)
                .add_modifier(Modifier::BOLD),
            stats_deleted: Style::default()
                .bg(colors::HEADER_BG)
                .fg(colors::STATS_DELETED)
                .add_modifier(Modifier::BOLD),
            stats_changed: Style::default()
                .bg(colors::HEADER_BG)
                .fg(colors::STATS_CHANGED)
                .add_modifier(Modifier::BOLD),

            // Borders
            border_focus: Style::default().fg(colors::BORDER_FOCUS),

            // Popup
            popup: Style::default().bg(colors::POPUP_BG).fg(colors::FG),
            popup_title: Style::default()
                .fg(colors::POPUP_BORDER)
                .add_modifier(Modifier::BOLD),

            // Help
            help_key: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            help_desc: Style::default().fg(colors::DIM),
        }
    }

    /// Base style for page text
    pub fn emphasis(&self, emphasis: Emphasis) -> Style {
        match emphasis {
            Emphasis::Plain => self.text,
            Emphasis::Heading => self.heading,
            Emphasis::Code => self.code,
            Emphasis::Link => self.link,
            Emphasis::LinkToDiff => self.link_to_diff,
            Emphasis::LinkToAdd => self.link_to_add,
            Emphasis::LinkToDel => self.link_to_del,
            Emphasis::Image => self.image,
        }
    }

    /// Overlay for text inside a diff region
    pub fn diff(&self, kind: DiffKind) -> Style {
        match kind {
            DiffKind::Inserted => self.inserted,
            DiffKind::Deleted => self.deleted,
            DiffKind::Image | DiffKind::Other => self.changed,
        }
    }

    pub fn gutter(&self, kind: DiffKind) -> Style {
        match kind {
            DiffKind::Inserted => self.gutter_inserted,
            DiffKind::Deleted => self.gutter_deleted,
            DiffKind::Image | DiffKind::Other => self.gutter_changed,
        }
    }
}
