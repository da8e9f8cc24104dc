//! Minimal HTML tokenizer
//!
//! Good enough for the output of HTML diff tools: tags with attributes,
//! text, comments, doctypes, and raw-text elements. It never fails; malformed
//! markup degrades to text.

use std::borrow::Cow;

/// Elements whose content is raw text, not markup
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style", "textarea", "title"];

/// Elements that never have content or an end tag
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// One lexical unit of an HTML document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    Start(StartTag),
    End(String),
    Text(Cow<'a, str>),
}

/// An opening tag with lowercased name and attribute names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartTag {
    pub name: String,
    pub attrs: Vec<(String, String)>,
    pub self_closing: bool,
}

impl StartTag {
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .is_some_and(|classes| classes.split_ascii_whitespace().any(|c| c == class))
    }

    pub fn is_void(&self) -> bool {
        self.self_closing || VOID_ELEMENTS.contains(&self.name.as_str())
    }
}

/// Streaming tokenizer over a source string
pub struct Tokenizer<'a> {
    src: &'a str,
    pos: usize,
    raw_text: Option<String>,
}

impl<'a> Tokenizer<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            src,
            pos: 0,
            raw_text: None,
        }
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    /// Consume raw text up to the matching end tag
    fn raw_text(&mut self, name: &str) -> Token<'a> {
        let rest = self.rest();
        let closing = format!("</{}", name);
        let end = find_ignore_ascii_case(rest, &closing).unwrap_or(rest.len());
        self.pos += end;
        let text = &rest[..end];
        if name == "title" || name == "textarea" {
            Token::Text(decode_entities(text))
        } else {
            Token::Text(Cow::Borrowed(text))
        }
    }

    /// Skip `<!...>` and `<?...>` constructs, including comments
    fn skip_markup_declaration(&mut self) {
        let rest = self.rest();
        let end = if rest.starts_with("<!--") {
            rest[4..].find("-->").map(|i| i + 4 + 3)
        } else {
            rest.find('>').map(|i| i + 1)
        };
        self.pos += end.unwrap_or(rest.len());
    }

    fn end_tag(&mut self) -> Option<Token<'a>> {
        let rest = self.rest();
        let close = rest.find('>')?;
        let name = rest[2..close].trim().to_ascii_lowercase();
        self.pos += close + 1;
        Some(Token::End(name))
    }

    fn start_tag(&mut self) -> Option<Token<'a>> {
        let rest = self.rest();
        let bytes = rest.as_bytes();
        let mut i = 1;

        let name_end = rest[i..]
            .find(|c: char| c.is_ascii_whitespace() || c == '>' || c == '/')
            .map(|n| n + i)
            .unwrap_or(rest.len());
        let name = rest[i..name_end].to_ascii_lowercase();
        i = name_end;

        let mut attrs = Vec::new();
        let mut self_closing = false;

        loop {
            while i < bytes.len() && bytes[i].is_ascii_whitespace() {
                i += 1;
            }
            if i >= bytes.len() {
                // Unterminated tag: treat the rest as text
                return None;
            }
            match bytes[i] {
                b'>' => {
                    i += 1;
                    break;
                }
                b'/' => {
                    self_closing = true;
                    i += 1;
                    continue;
                }
                _ => {}
            }
            self_closing = false;

            let attr_end = rest[i..]
                .find(|c: char| c.is_ascii_whitespace() || c == '=' || c == '>' || c == '/')
                .map(|n| n + i)
                .unwrap_or(rest.len());
            let attr_name = rest[i..attr_end].to_ascii_lowercase();
            i = attr_end;

            while i < bytes.len() && bytes[i].is_ascii_whitespace() {
                i += 1;
            }

            let mut value = String::new();
            if i < bytes.len() && bytes[i] == b'=' {
                i += 1;
                while i < bytes.len() && bytes[i].is_ascii_whitespace() {
                    i += 1;
                }
                if i < bytes.len() && (bytes[i] == b'"' || bytes[i] == b'\'') {
                    let quote = bytes[i] as char;
                    let start = i + 1;
                    let end = rest[start..].find(quote).map(|n| n + start)?;
                    value = decode_entities(&rest[start..end]).into_owned();
                    i = end + 1;
                } else {
                    let start = i;
                    let end = rest[start..]
                        .find(|c: char| c.is_ascii_whitespace() || c == '>')
                        .map(|n| n + start)
                        .unwrap_or(rest.len());
                    value = decode_entities(&rest[start..end]).into_owned();
                    i = end;
                }
            }

            if !attr_name.is_empty() {
                attrs.push((attr_name, value));
            }
        }

        self.pos += i;
        if RAW_TEXT_ELEMENTS.contains(&name.as_str()) && !self_closing {
            self.raw_text = Some(name.clone());
        }

        Some(Token::Start(StartTag {
            name,
            attrs,
            self_closing,
        }))
    }

    fn text(&mut self) -> Token<'a> {
        let rest = self.rest();
        // Always consume the first char so a stray '<' makes progress
        let first = rest.chars().next().map_or(1, char::len_utf8);
        let end = rest[first..].find('<').map(|i| i + first).unwrap_or(rest.len());
        self.pos += end;
        Token::Text(decode_entities(&rest[..end]))
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(name) = self.raw_text.take() {
            let token = self.raw_text(&name);
            if let Token::Text(text) = &token {
                if !text.is_empty() {
                    return Some(token);
                }
            }
        }

        loop {
            let rest = self.rest();
            if rest.is_empty() {
                return None;
            }

            let mut chars = rest.chars();
            if chars.next() != Some('<') {
                return Some(self.text());
            }

            match chars.next() {
                Some('!') | Some('?') => {
                    self.skip_markup_declaration();
                    continue;
                }
                Some('/') => {
                    if let Some(token) = self.end_tag() {
                        return Some(token);
                    }
                }
                Some(c) if c.is_ascii_alphabetic() => {
                    if let Some(token) = self.start_tag() {
                        return Some(token);
                    }
                }
                _ => {}
            }

            return Some(self.text());
        }
    }
}

fn find_ignore_ascii_case(haystack: &str, needle: &str) -> Option<usize> {
    let needle = needle.as_bytes();
    haystack
        .as_bytes()
        .windows(needle.len())
        .position(|window| window.eq_ignore_ascii_case(needle))
}

/// Decode the common named entities and all numeric ones
pub fn decode_entities(text: &str) -> Cow<'_, str> {
    if !text.contains('&') {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        rest = &rest[amp..];

        let decoded = rest
            .find(';')
            .filter(|&semi| semi <= 10)
            .and_then(|semi| decode_entity(&rest[1..semi]).map(|c| (c, semi)));

        match decoded {
            Some((c, semi)) => {
                out.push(c);
                rest = &rest[semi + 1..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);

    Cow::Owned(out)
}

fn decode_entity(entity: &str) -> Option<char> {
    if let Some(num) = entity.strip_prefix('#') {
        let code = match num.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => num.parse().ok()?,
        };
        return char::from_u32(code);
    }

    Some(match entity {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => '\u{a0}',
        "ndash" => '–',
        "mdash" => '—',
        "hellip" => '…',
        "copy" => '©',
        "reg" => '®',
        "lsquo" => '‘',
        "rsquo" => '’',
        "ldquo" => '“',
        "rdquo" => '”',
        "times" => '×',
        "middot" => '·',
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tokens(src: &str) -> Vec<Token<'_>> {
        Tokenizer::new(src).collect()
    }

    fn start(name: &str, attrs: &[(&str, &str)]) -> Token<'static> {
        Token::Start(StartTag {
            name: name.to_string(),
            attrs: attrs
                .iter()
                .map(|(n, v)| (n.to_string(), v.to_string()))
                .collect(),
            self_closing: false,
        })
    }

    fn text(s: &str) -> Token<'_> {
        Token::Text(Cow::Borrowed(s))
    }

    #[test]
    fn test_basic_markup() {
        assert_eq!(
            tokens(r#"<P Class="a b">hi <ins class=diff>there</ins></p>"#),
            vec![
                start("p", &[("class", "a b")]),
                text("hi "),
                start("ins", &[("class", "diff")]),
                text("there"),
                Token::End("ins".to_string()),
                Token::End("p".to_string()),
            ]
        );
    }

    #[test]
    fn test_comments_and_doctype_are_skipped() {
        assert_eq!(
            tokens("<!DOCTYPE html><!-- a <b> comment -->x"),
            vec![text("x")]
        );
    }

    #[test]
    fn test_self_closing_and_boolean_attrs() {
        let toks = tokens(r#"<img src='a.png' alt="A &amp; B" hidden/>"#);
        let Token::Start(tag) = &toks[0] else {
            panic!("expected start tag");
        };
        assert_eq!(tag.name, "img");
        assert_eq!(tag.attr("src"), Some("a.png"));
        assert_eq!(tag.attr("alt"), Some("A & B"));
        assert_eq!(tag.attr("hidden"), Some(""));
        assert!(tag.self_closing);
        assert!(tag.is_void());
    }

    #[test]
    fn test_raw_text_elements() {
        assert_eq!(
            tokens("<script>if (a < b) { x('</p>') }</script>after"),
            vec![
                start("script", &[]),
                text("if (a < b) { x('</p>') }"),
                Token::End("script".to_string()),
                text("after"),
            ]
        );
    }

    #[test]
    fn test_title_entities_are_decoded() {
        assert_eq!(
            tokens("<title>A &amp; B</title>"),
            vec![
                start("title", &[]),
                text("A & B"),
                Token::End("title".to_string()),
            ]
        );
    }

    #[test]
    fn test_stray_angle_bracket_is_text() {
        assert_eq!(tokens("a < b"), vec![text("a "), text("< b")]);
    }

    #[test]
    fn test_unterminated_tag_is_text() {
        assert_eq!(tokens("x <p class"), vec![text("x "), text("<p class")]);
    }

    #[test]
    fn test_has_class() {
        let tag = StartTag {
            name: "del".to_string(),
            attrs: vec![("class".to_string(), "foo  diff\tbar".to_string())],
            self_closing: false,
        };
        assert!(tag.has_class("diff"));
        assert!(!tag.has_class("dif"));
    }

    #[test]
    fn test_decode_entities() {
        assert_eq!(decode_entities("a &lt;b&gt; &amp;&#65;&#x42;"), "a <b> &AB");
        assert_eq!(decode_entities("fish & chips"), "fish & chips");
        assert_eq!(decode_entities("&bogus;"), "&bogus;");
        assert!(matches!(decode_entities("plain"), Cow::Borrowed(_)));
    }
}
