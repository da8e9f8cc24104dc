//! Page layout
//!
//! Wraps page blocks into display rows for a given width and records where
//! each diff region ends up, so the viewport can scroll to it.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::page::{Emphasis, Page};

/// A run of text on one display row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowSegment {
    pub text: String,
    pub emphasis: Emphasis,
    pub diff: Option<usize>,
}

/// One display row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    pub segments: Vec<RowSegment>,
    /// Display width in columns
    pub width: usize,
}

impl Row {
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    pub fn has_diff(&self, diff: usize) -> bool {
        self.segments.iter().any(|s| s.diff == Some(diff))
    }

    pub fn has_any_diff(&self) -> bool {
        self.segments.iter().any(|s| s.diff.is_some())
    }
}

/// Rows and columns covered by one diff region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffSpan {
    pub first_row: usize,
    pub last_row: usize,
    /// Leftmost column on any covered row
    pub start_col: usize,
    /// One past the rightmost column on any covered row
    pub end_col: usize,
}

/// A page laid out for one width
#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    pub rows: Vec<Row>,
    /// Indexed like `Page::diffs`
    pub spans: Vec<Option<DiffSpan>>,
    /// Widest row
    pub width: usize,
}

impl PageLayout {
    pub fn height(&self) -> usize {
        self.rows.len()
    }
}

struct Placer {
    width: usize,
    wrap: bool,
    rows: Vec<Row>,
    row: Row,
    spans: Vec<Option<DiffSpan>>,
}

impl Placer {
    fn new_row(&mut self) {
        let row = std::mem::take(&mut self.row);
        self.rows.push(row);
    }

    /// Place one word with its trailing whitespace
    fn place(&mut self, piece: &str, emphasis: Emphasis, diff: Option<usize>) {
        let word = piece.trim_end_matches(' ');
        let word_width = word.width();

        if self.wrap && self.row.width > 0 && self.row.width + word_width > self.width {
            self.new_row();
        }

        if self.wrap && word_width > self.width {
            // Hard-break words that cannot fit on any row
            let mut chunk = String::new();
            for c in piece.chars() {
                let cw = c.width().unwrap_or(0);
                if self.row.width + chunk.width() + cw > self.width && !chunk.is_empty() {
                    let text = std::mem::take(&mut chunk);
                    self.append(&text, emphasis, diff);
                    self.new_row();
                }
                chunk.push(c);
            }
            self.append(&chunk, emphasis, diff);
            return;
        }

        self.append(piece, emphasis, diff);
    }

    /// Give a diff that placed no text a zero-width span where it sits
    fn mark(&mut self, index: usize) {
        let row = self.rows.len();
        let col = self.row.width;
        self.spans[index].get_or_insert(DiffSpan {
            first_row: row,
            last_row: row,
            start_col: col,
            end_col: col,
        });
    }

    fn append(&mut self, text: &str, emphasis: Emphasis, diff: Option<usize>) {
        if text.is_empty() {
            return;
        }

        let start = self.row.width;
        let end = start + text.width();
        self.row.width = end;

        if let Some(index) = diff {
            let row = self.rows.len();
            let span = self.spans[index].get_or_insert(DiffSpan {
                first_row: row,
                last_row: row,
                start_col: start,
                end_col: end,
            });
            span.last_row = row;
            span.start_col = span.start_col.min(start);
            span.end_col = span.end_col.max(end);
        }

        match self.row.segments.last_mut() {
            Some(last) if last.emphasis == emphasis && last.diff == diff => last.text.push_str(text),
            _ => self.row.segments.push(RowSegment {
                text: text.to_string(),
                emphasis,
                diff,
            }),
        }
    }
}

/// Split text into words that keep their trailing spaces
fn pieces(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let word_end = rest.find(' ').unwrap_or(rest.len());
        let end = rest[word_end..]
            .find(|c: char| c != ' ')
            .map(|n| n + word_end)
            .unwrap_or(rest.len());
        let (piece, tail) = rest.split_at(end);
        rest = tail;
        Some(piece)
    })
}

/// Lay out a page for a viewport `width` columns wide
pub fn layout_page(page: &Page, width: usize, wrap: bool) -> PageLayout {
    let mut placer = Placer {
        width: width.max(1),
        wrap,
        rows: Vec::new(),
        row: Row::default(),
        spans: vec![None; page.diffs.len()],
    };

    for block in &page.blocks {
        if block.is_empty() {
            placer.rows.push(Row::default());
            continue;
        }

        for segment in &block.segments {
            if block.preformatted {
                for (i, line) in segment.text.split('\n').enumerate() {
                    if i > 0 {
                        placer.new_row();
                    }
                    for piece in pieces(line) {
                        placer.place(piece, segment.emphasis, segment.diff);
                    }
                }
            } else {
                for piece in pieces(&segment.text) {
                    placer.place(piece, segment.emphasis, segment.diff);
                }
            }

            if let Some(index) = segment.diff {
                placer.mark(index);
            }
        }
        placer.new_row();
    }

    // Outer diffs cover their nested ones
    for (index, region) in page.diffs.iter().enumerate().rev() {
        if let (Some(parent), Some(span)) = (region.parent, placer.spans[index]) {
            let outer = placer.spans[parent].get_or_insert(span);
            outer.first_row = outer.first_row.min(span.first_row);
            outer.last_row = outer.last_row.max(span.last_row);
            outer.start_col = outer.start_col.min(span.start_col);
            outer.end_col = outer.end_col.max(span.end_col);
        }
    }

    let width = placer.rows.iter().map(|r| r.width).max().unwrap_or(0);
    PageLayout {
        rows: placer.rows,
        spans: placer.spans,
        width,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{Block, DiffKind, DiffRegion, PageOptions, Segment};
    use pretty_assertions::assert_eq;

    fn page(src: &str) -> Page {
        Page::parse(src, &PageOptions::default()).unwrap()
    }

    fn row_texts(layout: &PageLayout) -> Vec<String> {
        layout.rows.iter().map(Row::text).collect()
    }

    #[test]
    fn test_pieces_keep_trailing_spaces() {
        let parts: Vec<&str> = pieces("ab  cd e").collect();
        assert_eq!(parts, vec!["ab  ", "cd ", "e"]);
        let parts: Vec<&str> = pieces("  lead").collect();
        assert_eq!(parts, vec!["  ", "lead"]);
    }

    #[test]
    fn test_wraps_at_word_boundaries() {
        let layout = layout_page(&page("<p>one two three four</p>"), 9, true);
        assert_eq!(row_texts(&layout), vec!["one two ", "three ", "four"]);
        assert_eq!(layout.width, 8);
    }

    #[test]
    fn test_no_wrap_keeps_one_row() {
        let layout = layout_page(&page("<p>one two three four</p>"), 9, false);
        assert_eq!(row_texts(&layout), vec!["one two three four"]);
        assert_eq!(layout.width, 18);
    }

    #[test]
    fn test_long_words_are_split() {
        let layout = layout_page(&page("<p>abcdefghij</p>"), 4, true);
        assert_eq!(row_texts(&layout), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_diff_spans() {
        let src = r#"<p>aaa <ins class="diff">bbb ccc</ins></p><p>ddd</p><p><del class="diff">eee</del></p>"#;
        let layout = layout_page(&page(src), 8, true);

        assert_eq!(row_texts(&layout), vec!["aaa bbb ", "ccc", "", "ddd", "", "eee"]);
        assert_eq!(
            layout.spans,
            vec![
                Some(DiffSpan {
                    first_row: 0,
                    last_row: 1,
                    start_col: 0,
                    end_col: 8,
                }),
                Some(DiffSpan {
                    first_row: 5,
                    last_row: 5,
                    start_col: 0,
                    end_col: 3,
                }),
            ]
        );
        assert!(layout.rows[0].has_diff(0));
        assert!(!layout.rows[3].has_any_diff());
    }

    #[test]
    fn test_span_columns_without_wrap() {
        let src = r#"<p>0123456789 <ins class="diff">target</ins></p>"#;
        let layout = layout_page(&page(src), 5, false);
        assert_eq!(
            layout.spans[0],
            Some(DiffSpan {
                first_row: 0,
                last_row: 0,
                start_col: 11,
                end_col: 17,
            })
        );
    }

    #[test]
    fn test_preformatted_rows() {
        let layout = layout_page(&page("<pre>a b\n  c\n</pre>"), 80, true);
        assert_eq!(row_texts(&layout), vec!["a b", "  c", ""]);
    }

    #[test]
    fn test_wide_characters() {
        let layout = layout_page(&page("<p>日本 語</p>"), 5, true);
        assert_eq!(row_texts(&layout), vec!["日本 ", "語"]);
        assert_eq!(layout.rows[0].width, 5);
    }

    #[test]
    fn test_blank_diff_in_pre_is_placed() {
        let page = page("<pre>a\n<ins class=\"diff\">\n</ins>b</pre>");
        let layout = layout_page(&page, 80, true);

        assert_eq!(page.diffs.len(), 1);
        assert!(layout.spans.iter().all(Option::is_some));
        let span = layout.spans[0].unwrap();
        assert!(layout.rows[span.first_row].has_diff(0));
        assert!(layout.rows[span.first_row].text().contains('∅'));
    }

    #[test]
    fn test_diff_without_text_gets_zero_width_span() {
        let page = Page {
            title: String::new(),
            blocks: vec![Block {
                segments: vec![
                    Segment {
                        text: "a\n".to_string(),
                        emphasis: Emphasis::Code,
                        diff: None,
                    },
                    Segment {
                        text: "\n".to_string(),
                        emphasis: Emphasis::Code,
                        diff: Some(0),
                    },
                ],
                preformatted: true,
            }],
            diffs: vec![DiffRegion {
                kind: DiffKind::Inserted,
                preview: String::new(),
                parent: None,
            }],
        };
        let layout = layout_page(&page, 80, true);
        assert_eq!(
            layout.spans,
            vec![Some(DiffSpan {
                first_row: 2,
                last_row: 2,
                start_col: 0,
                end_col: 0,
            })]
        );
    }

    #[test]
    fn test_outer_span_covers_nested_diff() {
        let src = r#"<p>a <ins class="diff">bb <del class="diff">cc</del></ins> d</p>"#;
        let layout = layout_page(&page(src), 80, true);

        assert_eq!(row_texts(&layout), vec!["a bb cc d"]);
        assert_eq!(
            layout.spans,
            vec![
                Some(DiffSpan {
                    first_row: 0,
                    last_row: 0,
                    start_col: 2,
                    end_col: 8,
                }),
                Some(DiffSpan {
                    first_row: 0,
                    last_row: 0,
                    start_col: 5,
                    end_col: 8,
                }),
            ]
        );
    }

    #[test]
    fn test_empty_page() {
        let layout = layout_page(&page(""), 80, true);
        assert_eq!(layout.height(), 0);
        assert!(layout.spans.is_empty());
    }
}
