//! Page model
//!
//! Turns a diffed HTML page into a flat list of text blocks plus the ordered
//! set of diff regions found inside the page's main content. Diff regions are
//! the elements carrying the diff class, typically `<ins class="diff">`,
//! `<del class="diff">` and `<img class="diff">`.

pub mod html;
mod selector;

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use html::{StartTag, Token, Tokenizer};
pub use selector::Selector;

/// Errors raised while loading pages
#[derive(Debug, Error)]
pub enum PageError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("no element matches selector `{0}`")]
    RootNotFound(String),
    #[error("unsupported selector `{0}` (use tag, #id, .class or a combination)")]
    InvalidSelector(String),
    #[error("no HTML pages found")]
    NoPages,
}

/// What kind of change a diff region represents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffKind {
    Inserted,
    Deleted,
    Image,
    Other,
}

impl DiffKind {
    fn from_tag(name: &str) -> Self {
        match name {
            "ins" => DiffKind::Inserted,
            "del" => DiffKind::Deleted,
            "img" => DiffKind::Image,
            _ => DiffKind::Other,
        }
    }
}

/// Text styling carried over from the markup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Plain,
    Heading,
    Code,
    Link,
    /// Link to a page that has diffs
    LinkToDiff,
    /// Link to a newly added page
    LinkToAdd,
    /// Link to a deleted page
    LinkToDel,
    Image,
}

/// A run of text with uniform styling
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub emphasis: Emphasis,
    /// Index into [`Page::diffs`] if this text belongs to a diff
    pub diff: Option<usize>,
}

/// A paragraph-like unit that starts on a new line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Block {
    pub segments: Vec<Segment>,
    /// Whitespace is significant and `\n` breaks lines
    pub preformatted: bool,
}

impl Block {
    pub fn is_empty(&self) -> bool {
        self.segments.iter().all(|s| s.text.is_empty())
    }

    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }
}

/// One diff element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffRegion {
    pub kind: DiffKind,
    /// First few words of the region's text
    pub preview: String,
    /// Enclosing diff element, if this one is nested
    pub parent: Option<usize>,
}

/// Parsing options
#[derive(Debug, Clone)]
pub struct PageOptions {
    /// Class name marking diff elements
    pub diff_class: String,
    /// Main content; nothing outside it is shown
    pub root: Selector,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            diff_class: "diff".to_string(),
            root: Selector::default(),
        }
    }
}

/// A parsed page
#[derive(Debug, Clone)]
pub struct Page {
    pub title: String,
    pub blocks: Vec<Block>,
    pub diffs: Vec<DiffRegion>,
}

impl Page {
    /// Parse page source
    pub fn parse(source: &str, options: &PageOptions) -> Result<Self, PageError> {
        let mut builder = Builder::new(options);
        for token in Tokenizer::new(source) {
            builder.token(token);
        }
        builder.finish()
    }

    /// Read and parse a page from disk
    pub fn load(path: &Path, options: &PageOptions) -> Result<Self, PageError> {
        let source = std::fs::read_to_string(path).map_err(|source| PageError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut page = Self::parse(&source, options)?;
        if page.title.is_empty() {
            page.title = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
        }
        Ok(page)
    }

    /// Whether diff `inner` is `outer` or nested inside it
    pub fn diff_within(&self, inner: usize, outer: usize) -> bool {
        let mut current = Some(inner);
        while let Some(index) = current {
            if index == outer {
                return true;
            }
            current = self.diffs.get(index).and_then(|d| d.parent);
        }
        false
    }

    /// Number of diff regions of one kind
    pub fn count(&self, kind: DiffKind) -> usize {
        self.diffs.iter().filter(|d| d.kind == kind).count()
    }
}

/// Expand the command line inputs into a list of page files.
///
/// Directories are searched recursively for `.html`/`.htm` files; the
/// results of each directory are sorted.
pub fn collect_pages(inputs: &[PathBuf]) -> Result<Vec<PathBuf>, PageError> {
    let mut pages = Vec::new();

    for input in inputs {
        let metadata = std::fs::metadata(input).map_err(|source| PageError::Io {
            path: input.clone(),
            source,
        })?;

        if metadata.is_dir() {
            let mut found = Vec::new();
            walk_html_files(input, &mut found)?;
            found.sort();
            pages.extend(found);
        } else {
            pages.push(input.clone());
        }
    }

    if pages.is_empty() {
        return Err(PageError::NoPages);
    }
    Ok(pages)
}

fn walk_html_files(dir: &Path, found: &mut Vec<PathBuf>) -> Result<(), PageError> {
    let io_err = |source| PageError::Io {
        path: dir.to_path_buf(),
        source,
    };

    for entry in std::fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if path.is_dir() {
            walk_html_files(&path, found)?;
        } else if path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("html") || ext.eq_ignore_ascii_case("htm"))
        {
            found.push(path);
        }
    }
    Ok(())
}

const BLOCK_ELEMENTS: &[&str] = &[
    "address", "article", "aside", "blockquote", "body", "caption", "dd", "details", "div", "dl",
    "dt", "fieldset", "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6",
    "header", "hr", "li", "main", "nav", "ol", "p", "pre", "section", "summary", "table", "tbody",
    "td", "tfoot", "th", "thead", "tr", "ul",
];

/// Block elements preceded by a blank line
const SPACED_ELEMENTS: &[&str] = &[
    "article", "blockquote", "figure", "h1", "h2", "h3", "h4", "h5", "h6", "hr", "ol", "p", "pre",
    "section", "table", "ul",
];

/// Elements whose content is never displayed
const HIDDEN_ELEMENTS: &[&str] = &[
    "head", "noscript", "script", "style", "svg", "template", "textarea",
];

const PREVIEW_CHARS: usize = 60;

/// Shown for diff elements without visible text
const EMPTY_DIFF_MARKER: &str = "∅";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RootState {
    Waiting,
    Open,
    Closed,
}

#[derive(Debug)]
struct OpenElement {
    name: String,
    diff: Option<usize>,
    emphasis: Option<Emphasis>,
    hidden: bool,
    root: bool,
}

struct Builder<'o> {
    options: &'o PageOptions,
    title: String,
    stack: Vec<OpenElement>,
    root: RootState,
    blocks: Vec<Block>,
    current: Block,
    diffs: Vec<DiffRegion>,
    diff_has_text: Vec<bool>,
    pending_space: bool,
}

impl<'o> Builder<'o> {
    fn new(options: &'o PageOptions) -> Self {
        let root = if options.root.is_document() {
            RootState::Open
        } else {
            RootState::Waiting
        };

        Self {
            options,
            title: String::new(),
            stack: Vec::new(),
            root,
            blocks: Vec::new(),
            current: Block::default(),
            diffs: Vec::new(),
            diff_has_text: Vec::new(),
            pending_space: false,
        }
    }

    fn token(&mut self, token: Token<'_>) {
        match token {
            Token::Start(tag) => self.start(tag),
            Token::End(name) => self.end(&name),
            Token::Text(text) => self.text(&text),
        }
    }

    fn visible(&self) -> bool {
        self.root == RootState::Open && !self.stack.iter().any(|e| e.hidden)
    }

    fn in_pre(&self) -> bool {
        self.stack.iter().any(|e| e.name == "pre")
    }

    fn current_diff(&self) -> Option<usize> {
        self.stack.iter().rev().find_map(|e| e.diff)
    }

    fn emphasis(&self) -> Emphasis {
        self.stack
            .iter()
            .rev()
            .find_map(|e| e.emphasis)
            .unwrap_or(Emphasis::Plain)
    }

    fn start(&mut self, tag: StartTag) {
        let mut is_root = false;
        if self.root == RootState::Waiting && !tag.is_void() && self.options.root.matches(&tag) {
            self.root = RootState::Open;
            is_root = true;
        }

        let visible = self.visible();
        let name = tag.name.as_str();

        if visible && BLOCK_ELEMENTS.contains(&name) {
            self.break_block(SPACED_ELEMENTS.contains(&name));
        }

        if name == "br" {
            if visible {
                let block = std::mem::take(&mut self.current);
                self.blocks.push(block);
                self.pending_space = false;
            }
            return;
        }

        let diff = if visible && tag.has_class(&self.options.diff_class) {
            let parent = self.current_diff();
            Some(self.open_diff(DiffKind::from_tag(name), parent))
        } else {
            None
        };

        if name == "img" {
            if visible {
                let label = tag
                    .attr("alt")
                    .filter(|alt| !alt.trim().is_empty())
                    .or_else(|| tag.attr("src"))
                    .unwrap_or("?");
                let text = format!("[image: {}]", label.trim());
                self.push_word(&text, Emphasis::Image, diff.or(self.current_diff()));
            }
            return;
        }

        if tag.is_void() {
            return;
        }

        if visible && name == "li" {
            self.push_word("• ", self.emphasis(), diff.or(self.current_diff()));
        }

        let emphasis = element_emphasis(&tag);
        self.stack.push(OpenElement {
            hidden: HIDDEN_ELEMENTS.contains(&name),
            name: tag.name,
            diff,
            emphasis,
            root: is_root,
        });
    }

    fn end(&mut self, name: &str) {
        if name == "br" {
            return;
        }
        let Some(index) = self.stack.iter().rposition(|e| e.name == name) else {
            return;
        };

        while self.stack.len() > index {
            if let Some(element) = self.stack.pop() {
                self.close(element);
            }
        }
    }

    fn close(&mut self, element: OpenElement) {
        let was_visible = self.root == RootState::Open && !self.stack.iter().any(|e| e.hidden);

        if let Some(diff) = element.diff {
            if !self.diff_has_text[diff] {
                self.push_word(EMPTY_DIFF_MARKER, Emphasis::Plain, Some(diff));
            }
        }

        if was_visible && BLOCK_ELEMENTS.contains(&element.name.as_str()) {
            self.break_block(false);
        }

        if element.root {
            self.root = RootState::Closed;
        }
    }

    fn text(&mut self, text: &str) {
        if self.stack.last().is_some_and(|e| e.name == "title") {
            self.title.push_str(text);
            return;
        }
        if !self.visible() {
            return;
        }

        let emphasis = self.emphasis();
        let diff = self.current_diff();

        if self.in_pre() {
            let text = text.replace('\t', "    ");
            self.push_text(&text, emphasis, diff);
            return;
        }

        let mut word = String::new();
        for c in text.chars() {
            if c.is_whitespace() && c != '\u{a0}' {
                if !word.is_empty() {
                    self.push_word(&word, emphasis, diff);
                    word.clear();
                }
                self.pending_space = true;
            } else {
                word.push(if c == '\u{a0}' { ' ' } else { c });
            }
        }
        if !word.is_empty() {
            self.push_word(&word, emphasis, diff);
        }
    }

    /// Push a word, emitting a pending collapsed space first
    fn push_word(&mut self, word: &str, emphasis: Emphasis, diff: Option<usize>) {
        if self.pending_space {
            self.pending_space = false;
            let ends_with_space = self
                .current
                .segments
                .last()
                .is_some_and(|s| s.text.ends_with(' '));
            if let Some(last) = self.current.segments.last_mut() {
                if !ends_with_space && !last.text.is_empty() {
                    last.text.push(' ');
                }
            }
        }
        self.push_text(word, emphasis, diff);
    }

    fn push_text(&mut self, text: &str, emphasis: Emphasis, diff: Option<usize>) {
        if text.is_empty() {
            return;
        }

        if self.current.segments.is_empty() {
            self.current.preformatted = self.in_pre();
        }

        // Whitespace alone (a bare newline in <pre>) leaves nothing to see
        if !text.trim().is_empty() {
            let mut current = diff;
            while let Some(index) = current {
                self.diff_has_text[index] = true;
                extend_preview(&mut self.diffs[index].preview, text);
                current = self.diffs[index].parent;
            }
        }

        match self.current.segments.last_mut() {
            Some(last) if last.emphasis == emphasis && last.diff == diff => {
                last.text.push_str(text);
            }
            _ => self.current.segments.push(Segment {
                text: text.to_string(),
                emphasis,
                diff,
            }),
        }
    }

    fn open_diff(&mut self, kind: DiffKind, parent: Option<usize>) -> usize {
        self.diffs.push(DiffRegion {
            kind,
            preview: String::new(),
            parent,
        });
        self.diff_has_text.push(false);
        self.diffs.len() - 1
    }

    /// Finish the current block; optionally leave a blank line after it
    fn break_block(&mut self, spaced: bool) {
        self.pending_space = false;
        if !self.current.is_empty() {
            let block = std::mem::take(&mut self.current);
            self.blocks.push(block);
        } else {
            self.current = Block::default();
        }

        if spaced && self.blocks.last().is_some_and(|b| !b.is_empty()) {
            self.blocks.push(Block::default());
        }
    }

    fn finish(mut self) -> Result<Page, PageError> {
        while let Some(element) = self.stack.pop() {
            self.close(element);
        }

        if self.root == RootState::Waiting {
            return Err(PageError::RootNotFound(self.options.root.to_string()));
        }

        if !self.current.is_empty() {
            self.blocks.push(std::mem::take(&mut self.current));
        }
        while self.blocks.last().is_some_and(|b| b.is_empty()) {
            self.blocks.pop();
        }

        Ok(Page {
            title: self.title.split_whitespace().collect::<Vec<_>>().join(" "),
            blocks: self.blocks,
            diffs: self.diffs,
        })
    }
}

fn extend_preview(preview: &mut String, text: &str) {
    let used = preview.chars().count();
    if used >= PREVIEW_CHARS {
        return;
    }
    if !preview.is_empty() && !preview.ends_with(' ') {
        preview.push(' ');
    }
    preview.extend(
        text.split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .chars()
            .take(PREVIEW_CHARS - used),
    );
}

fn element_emphasis(tag: &StartTag) -> Option<Emphasis> {
    match tag.name.as_str() {
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => Some(Emphasis::Heading),
        "code" | "pre" | "kbd" | "samp" | "tt" => Some(Emphasis::Code),
        "a" => {
            if tag.has_class("link-to-diff") {
                Some(Emphasis::LinkToDiff)
            } else if tag.has_class("link-to-add") {
                Some(Emphasis::LinkToAdd)
            } else if tag.has_class("link-to-del") {
                Some(Emphasis::LinkToDel)
            } else if tag.attr("href").is_some() {
                Some(Emphasis::Link)
            } else {
                None
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(src: &str) -> Page {
        Page::parse(src, &PageOptions::default()).unwrap()
    }

    fn texts(page: &Page) -> Vec<String> {
        page.blocks.iter().map(Block::text).collect()
    }

    #[test]
    fn test_collects_diffs_in_document_order() {
        let page = parse(
            r#"<html><head><title>Intro</title></head><body>
            <p>Keep <del class="diff">old</del><ins class="diff">new</ins> words.</p>
            <p><img class="diff" src="plot.png" alt="A plot"></p>
            </body></html>"#,
        );

        assert_eq!(page.title, "Intro");
        let kinds: Vec<DiffKind> = page.diffs.iter().map(|d| d.kind).collect();
        assert_eq!(kinds, vec![DiffKind::Deleted, DiffKind::Inserted, DiffKind::Image]);
        assert_eq!(page.diffs[0].preview, "old");
        assert_eq!(page.diffs[1].preview, "new");
        assert_eq!(page.diffs[2].preview, "[image: A plot]");
        assert_eq!(texts(&page), vec!["Keep oldnew words.", "", "[image: A plot]"]);
    }

    #[test]
    fn test_segments_carry_diff_index() {
        let page = parse(r#"<p>a <ins class="diff">b c</ins> d</p>"#);
        assert_eq!(
            page.blocks[0].segments,
            vec![
                Segment {
                    text: "a ".to_string(),
                    emphasis: Emphasis::Plain,
                    diff: None,
                },
                Segment {
                    text: "b c ".to_string(),
                    emphasis: Emphasis::Plain,
                    diff: Some(0),
                },
                Segment {
                    text: "d".to_string(),
                    emphasis: Emphasis::Plain,
                    diff: None,
                },
            ]
        );
    }

    #[test]
    fn test_ins_without_diff_class_is_ignored() {
        let page = parse("<p><ins>plain</ins> <del class='other'>x</del></p>");
        assert!(page.diffs.is_empty());
        assert_eq!(texts(&page), vec!["plain x"]);
    }

    #[test]
    fn test_custom_diff_class() {
        let options = PageOptions {
            diff_class: "changed".to_string(),
            ..PageOptions::default()
        };
        let page = Page::parse(r#"<p><ins class="diff">a</ins><span class="changed">b</span></p>"#, &options).unwrap();
        assert_eq!(page.diffs.len(), 1);
        assert_eq!(page.diffs[0].kind, DiffKind::Other);
    }

    #[test]
    fn test_nested_diffs_are_separate_stops() {
        let page = parse(r#"<ins class="diff"><p>x <ins class="diff">y</ins></p></ins>"#);
        assert_eq!(page.diffs.len(), 2);
        assert_eq!(page.diffs[0].preview, "x y");
        assert_eq!(page.diffs[1].preview, "y");
        assert_eq!(page.diffs[1].parent, Some(0));

        // Text belongs to the innermost diff
        let owners: Vec<Option<usize>> = page.blocks[0].segments.iter().map(|s| s.diff).collect();
        assert_eq!(owners, vec![Some(0), Some(1)]);
    }

    #[test]
    fn test_image_inside_insertion() {
        let page = parse(r#"<p><ins class="diff">new text <img class="diff" src="plot.png"></ins></p>"#);
        let kinds: Vec<DiffKind> = page.diffs.iter().map(|d| d.kind).collect();
        assert_eq!(kinds, vec![DiffKind::Inserted, DiffKind::Image]);
        assert_eq!(page.diffs[0].preview, "new text [image: plot.png]");
        assert_eq!(page.diffs[1].preview, "[image: plot.png]");

        assert!(page.diff_within(1, 0));
        assert!(page.diff_within(0, 0));
        assert!(!page.diff_within(0, 1));
    }

    #[test]
    fn test_blank_diff_in_pre_gets_marker() {
        let page = parse("<pre>a\n<ins class=\"diff\">\n</ins>b</pre>");
        assert_eq!(page.diffs.len(), 1);
        assert!(page.blocks[0]
            .segments
            .iter()
            .any(|s| s.diff == Some(0) && s.text == EMPTY_DIFF_MARKER));
    }

    #[test]
    fn test_block_level_diff_spans_blocks() {
        let page = parse(r#"<p>a</p><ins class="diff"><p>b</p><p>c</p></ins><p>d</p>"#);
        let diff_blocks: Vec<String> = page
            .blocks
            .iter()
            .filter(|b| b.segments.iter().any(|s| s.diff == Some(0)))
            .map(Block::text)
            .collect();
        assert_eq!(diff_blocks, vec!["b", "c"]);
    }

    #[test]
    fn test_empty_diff_gets_marker() {
        let page = parse(r#"<p>a<del class="diff"> </del>b</p>"#);
        assert_eq!(page.diffs.len(), 1);
        assert!(page.blocks[0]
            .segments
            .iter()
            .any(|s| s.diff == Some(0) && s.text == EMPTY_DIFF_MARKER));
    }

    #[test]
    fn test_root_selector_limits_content() {
        let src = r#"<body><nav><ins class="diff">menu</ins></nav>
            <div id="main"><p>body <del class="diff">gone</del></p></div>
            <footer><ins class="diff">foot</ins></footer></body>"#;
        let options = PageOptions {
            root: "div#main".parse().unwrap(),
            ..PageOptions::default()
        };
        let page = Page::parse(src, &options).unwrap();

        assert_eq!(page.diffs.len(), 1);
        assert_eq!(page.diffs[0].preview, "gone");
        assert_eq!(texts(&page), vec!["body gone"]);
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let options = PageOptions {
            root: ".bd-main".parse().unwrap(),
            ..PageOptions::default()
        };
        let err = Page::parse("<p>x</p>", &options).unwrap_err();
        assert!(matches!(err, PageError::RootNotFound(ref s) if s == ".bd-main"));
    }

    #[test]
    fn test_scripts_and_head_are_hidden() {
        let page = parse(
            "<html><head><style>p{}</style></head><body><script>var x = '<ins class=\"diff\">';</script><p>shown</p></body></html>",
        );
        assert!(page.diffs.is_empty());
        assert_eq!(texts(&page), vec!["shown"]);
    }

    #[test]
    fn test_preformatted_keeps_lines() {
        let page = parse("<pre>fn main() {\n\tx();\n}</pre>");
        assert_eq!(page.blocks.len(), 1);
        assert!(page.blocks[0].preformatted);
        assert_eq!(page.blocks[0].text(), "fn main() {\n    x();\n}");
        assert_eq!(page.blocks[0].segments[0].emphasis, Emphasis::Code);
    }

    #[test]
    fn test_lists_and_breaks() {
        let page = parse("<ul><li>one</li><li>two<br>more</li></ul>");
        assert_eq!(texts(&page), vec!["• one", "• two", "more"]);
    }

    #[test]
    fn test_link_markers() {
        let page = parse(
            r#"<p><a class="link-to-diff" href="a.html">A</a> <a class="link-to-add" href="b.html">B</a> <a href="c.html">C</a></p>"#,
        );
        let emphasis: Vec<Emphasis> = page.blocks[0]
            .segments
            .iter()
            .map(|s| s.emphasis)
            .collect();
        assert_eq!(
            emphasis,
            vec![Emphasis::LinkToDiff, Emphasis::LinkToAdd, Emphasis::Link]
        );
    }

    #[test]
    fn test_counts() {
        let page = parse(
            r#"<p><ins class="diff">a</ins><ins class="diff">b</ins><del class="diff">c</del></p>"#,
        );
        assert_eq!(page.count(DiffKind::Inserted), 2);
        assert_eq!(page.count(DiffKind::Deleted), 1);
        assert_eq!(page.count(DiffKind::Image), 0);
    }

    #[test]
    fn test_page_without_diffs() {
        let page = parse("<h1>Title</h1><p>Nothing changed.</p>");
        assert!(page.diffs.is_empty());
        assert_eq!(texts(&page), vec!["Title", "", "Nothing changed."]);
    }

    #[test]
    fn test_load_falls_back_to_file_name() {
        let dir = std::env::temp_dir().join(format!("diffnav-page-{}", std::process::id()));
        std::fs::create_dir_all(dir.join("sub")).unwrap();
        std::fs::write(dir.join("index.html"), "<p><ins class='diff'>x</ins></p>").unwrap();
        std::fs::write(dir.join("sub").join("b.htm"), "<p>y</p>").unwrap();
        std::fs::write(dir.join("notes.txt"), "z").unwrap();

        let page = Page::load(&dir.join("index.html"), &PageOptions::default()).unwrap();
        assert_eq!(page.title, "index.html");

        let pages = collect_pages(&[dir.clone()]).unwrap();
        std::fs::remove_dir_all(&dir).ok();

        assert_eq!(pages, vec![dir.join("index.html"), dir.join("sub").join("b.htm")]);
    }

    #[test]
    fn test_collect_pages_errors() {
        let missing = std::env::temp_dir().join("diffnav-does-not-exist.html");
        assert!(matches!(
            collect_pages(&[missing]),
            Err(PageError::Io { .. })
        ));
        assert!(matches!(collect_pages(&[]), Err(PageError::NoPages)));
    }
}
