//! Main application struct and event loop
//!
//! Contains the App struct with all application state,
//! and the main event loop for handling input and rendering.

use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    Terminal,
};

use crate::keymap::{Action, Keymap};
use crate::navigator::{DiffCollection, DiffNavigator, ScrollBehavior, ScrollOptions};
use crate::page::{DiffKind, Page, PageOptions};
use crate::ui::{
    layout_page, render_footer, render_header, render_help_popup, render_message,
    render_page_content, DiffSpan, PageLayout, Styles, GUTTER_WIDTH,
};
use crate::viewport::Viewport;

/// View mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// Page view
    Page,
    /// Help overlay
    Help,
}

const MOUSE_SCROLL_LINES: isize = 3;

/// Poll interval while a smooth scroll is running
const FRAME_INTERVAL: Duration = Duration::from_millis(16);
/// Poll interval when idle
const IDLE_INTERVAL: Duration = Duration::from_millis(100);

/// Startup options resolved from config and command line
#[derive(Debug, Clone)]
pub struct AppOptions {
    pub page: PageOptions,
    pub wrap: bool,
    pub scroll: ScrollOptions,
    pub smooth_steps: u16,
}

/// The laid-out diffs of the open page, as seen by the navigator
struct PageDiffs<'a> {
    spans: &'a [Option<DiffSpan>],
    selected: &'a mut Option<usize>,
    viewport: &'a mut Viewport,
}

impl DiffCollection for PageDiffs<'_> {
    fn len(&self) -> usize {
        self.spans.len()
    }

    fn set_highlighted(&mut self, index: usize, highlighted: bool) {
        if highlighted {
            *self.selected = Some(index);
        } else if *self.selected == Some(index) {
            *self.selected = None;
        }
    }

    fn scroll_into_view(&mut self, index: usize, options: ScrollOptions) {
        if let Some(Some(span)) = self.spans.get(index) {
            self.viewport.scroll_into_view(span, options);
        }
    }
}

/// Main application state
pub struct App {
    // Window dimensions
    width: u16,
    height: u16,

    // Pages
    pages: Vec<PathBuf>,
    page_index: usize,
    page: Option<Page>,
    page_options: PageOptions,
    error: Option<String>,

    // Layout and scrolling
    layout: PageLayout,
    viewport: Viewport,
    wrap: bool,

    // Diff selection
    navigator: DiffNavigator,
    selected: Option<usize>,

    // View state
    view_mode: ViewMode,
    keymap: Keymap,
    styles: Styles,
}

impl App {
    /// Create a new App instance
    pub fn new(pages: Vec<PathBuf>, options: AppOptions, keymap: Keymap) -> Self {
        Self {
            width: 0,
            height: 0,
            pages,
            page_index: 0,
            page: None,
            page_options: options.page,
            error: None,
            layout: PageLayout::default(),
            viewport: Viewport::new(options.smooth_steps),
            wrap: options.wrap,
            navigator: DiffNavigator::new(options.scroll),
            selected: None,
            view_mode: ViewMode::Page,
            keymap,
            styles: Styles::new(),
        }
    }

    /// Run the application
    pub fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, crossterm::event::EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        // Restore terminal
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            crossterm::event::DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        let size = terminal.size()?;
        self.resize(size.width, size.height);
        self.open_page(0);

        loop {
            // Draw
            terminal.draw(|frame| self.render(frame))?;

            let timeout = if self.viewport.is_animating() {
                FRAME_INTERVAL
            } else {
                IDLE_INTERVAL
            };

            // Handle events
            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) => {
                        if self.handle_key(key) {
                            break;
                        }
                    }
                    Event::Mouse(mouse) => {
                        self.handle_mouse(mouse);
                    }
                    Event::Resize(w, h) => {
                        self.resize(w, h);
                    }
                    _ => {}
                }
            }

            self.viewport.tick();
        }

        Ok(())
    }

    /// Rows available for page content
    fn content_height(&self) -> usize {
        usize::from(self.height.saturating_sub(2))
    }

    /// Columns available for page content
    fn content_width(&self) -> usize {
        usize::from(self.width.saturating_sub(GUTTER_WIDTH))
    }

    fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.viewport.set_size(self.content_height(), self.content_width());
        self.relayout();
    }

    /// Lay the page out again and keep the selected diff in view
    fn relayout(&mut self) {
        self.layout = match &self.page {
            Some(page) => layout_page(page, self.content_width(), self.wrap),
            None => PageLayout::default(),
        };
        self.viewport.set_content(self.layout.height(), self.layout.width);

        if let Some(Some(span)) = self.selected.and_then(|i| self.layout.spans.get(i)) {
            let options = ScrollOptions {
                behavior: ScrollBehavior::Instant,
                ..self.navigator.options()
            };
            self.viewport.scroll_into_view(span, options);
        }
    }

    /// Load a page and select its first diff
    fn open_page(&mut self, index: usize) {
        let Some(path) = self.pages.get(index) else {
            return;
        };
        self.page_index = index;

        match Page::load(path, &self.page_options) {
            Ok(page) => {
                log::info!(
                    "opened {} ({} diffs: +{} -{})",
                    path.display(),
                    page.diffs.len(),
                    page.count(DiffKind::Inserted),
                    page.count(DiffKind::Deleted),
                );
                self.page = Some(page);
                self.error = None;
            }
            Err(e) => {
                log::warn!("failed to open {}: {}", path.display(), e);
                self.page = None;
                self.error = Some(e.to_string());
            }
        }

        self.selected = None;
        self.viewport.reset();
        self.relayout();

        let (navigator, mut diffs) = self.page_diffs();
        navigator.init(&mut diffs);
    }

    /// Borrow the navigator together with the diffs it moves over
    fn page_diffs(&mut self) -> (&mut DiffNavigator, PageDiffs<'_>) {
        (
            &mut self.navigator,
            PageDiffs {
                spans: &self.layout.spans,
                selected: &mut self.selected,
                viewport: &mut self.viewport,
            },
        )
    }

    /// Render the application
    fn render(&mut self, frame: &mut ratatui::Frame) {
        let area = frame.area();

        self.render_page_view(frame, area);
        if self.view_mode == ViewMode::Help {
            render_help_popup(frame.buffer_mut(), area, &self.keymap, &self.styles);
        }
    }

    /// Render the main page view
    fn render_page_view(&self, frame: &mut ratatui::Frame, area: Rect) {
        // Layout: header (1) + content + footer (1)
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        let header_area = chunks[0];
        let content_area = chunks[1];
        let footer_area = chunks[2];

        let title = match (&self.page, self.pages.get(self.page_index)) {
            (Some(page), _) => page.title.clone(),
            (None, Some(path)) => path.display().to_string(),
            (None, None) => String::new(),
        };

        let diff_count = self.layout.spans.len();
        let cursor = (diff_count > 0).then(|| self.navigator.cursor());
        let stats = self.page.as_ref().map_or((0, 0, 0), |page| {
            (
                page.count(DiffKind::Inserted),
                page.count(DiffKind::Deleted),
                page.count(DiffKind::Image) + page.count(DiffKind::Other),
            )
        });

        // Render header
        render_header(
            frame.buffer_mut(),
            header_area,
            &title,
            self.page_index,
            self.pages.len(),
            cursor,
            diff_count,
            stats,
            &self.styles,
        );

        // Render content
        match (&self.page, &self.error) {
            (_, Some(error)) => {
                render_message(frame.buffer_mut(), content_area, error, self.styles.error);
            }
            (Some(page), None) => {
                render_page_content(
                    frame.buffer_mut(),
                    content_area,
                    page,
                    &self.layout,
                    self.viewport.top(),
                    self.viewport.left(),
                    self.selected,
                    &self.styles,
                );
            }
            (None, None) => {}
        }

        // Render footer
        let selected = self
            .page
            .as_ref()
            .zip(self.selected)
            .and_then(|(page, i)| page.diffs.get(i));
        render_footer(
            frame.buffer_mut(),
            footer_area,
            &self.keymap,
            self.wrap,
            selected,
            &self.styles,
        );
    }

    /// Handle keyboard input. Returns true if app should quit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }

        // Ctrl+C always quits
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        let action = self.keymap.action(&key);
        match self.view_mode {
            ViewMode::Help => self.handle_help_key(key, action),
            ViewMode::Page => self.handle_page_key(action),
        }
    }

    /// Handle keys in the page view
    fn handle_page_key(&mut self, action: Option<Action>) -> bool {
        let (navigator, mut diffs) = self.page_diffs();
        navigator.dispatch(action.and_then(Action::nav), &mut diffs);

        let Some(action) = action else {
            return false;
        };

        let half_page = (self.viewport.height() / 2).max(1) as isize;
        match action {
            // Handled by the navigator
            Action::NextDiff | Action::PrevDiff => {}

            Action::ScrollDown => self.viewport.scroll_by(1),
            Action::ScrollUp => self.viewport.scroll_by(-1),
            Action::HalfPageDown => self.viewport.scroll_by(half_page),
            Action::HalfPageUp => self.viewport.scroll_by(-half_page),
            Action::Top => self.viewport.scroll_to_top(),
            Action::Bottom => self.viewport.scroll_to_bottom(),

            Action::NextPage => {
                if self.page_index + 1 < self.pages.len() {
                    self.open_page(self.page_index + 1);
                }
            }
            Action::PrevPage => {
                if self.page_index > 0 {
                    self.open_page(self.page_index - 1);
                }
            }

            Action::ToggleWrap => {
                self.wrap = !self.wrap;
                log::debug!("wrap {}", if self.wrap { "on" } else { "off" });
                self.relayout();
            }
            Action::Help => {
                self.view_mode = ViewMode::Help;
            }
            Action::Quit => return true,
        }

        false
    }

    /// Handle keys in help overlay
    fn handle_help_key(&mut self, key: KeyEvent, action: Option<Action>) -> bool {
        if matches!(action, Some(Action::Help | Action::Quit)) || key.code == KeyCode::Esc {
            self.view_mode = ViewMode::Page;
        }
        false
    }

    /// Handle mouse input
    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.view_mode != ViewMode::Page {
            return;
        }

        match mouse.kind {
            MouseEventKind::ScrollDown => self.viewport.scroll_by(MOUSE_SCROLL_LINES),
            MouseEventKind::ScrollUp => self.viewport.scroll_by(-MOUSE_SCROLL_LINES),
            _ => {}
        }
    }
}
