//! Content root selectors
//!
//! Supports the simple selector forms used to pick a page's main content:
//! `tag`, `#id`, `.class`, and combinations such as `div#main.content`.

use std::fmt;
use std::str::FromStr;

use super::html::StartTag;
use super::PageError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
}

impl Selector {
    /// Whether this selector names the whole document
    pub fn is_document(&self) -> bool {
        self.tag.as_deref() == Some("html") && self.id.is_none() && self.classes.is_empty()
    }

    pub fn matches(&self, tag: &StartTag) -> bool {
        if self.tag.as_deref().is_some_and(|name| name != tag.name) {
            return false;
        }
        if let Some(id) = &self.id {
            if tag.attr("id") != Some(id.as_str()) {
                return false;
            }
        }
        self.classes.iter().all(|class| tag.has_class(class))
    }
}

impl Default for Selector {
    fn default() -> Self {
        Self {
            tag: Some("html".to_string()),
            id: None,
            classes: Vec::new(),
        }
    }
}

impl FromStr for Selector {
    type Err = PageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PageError::InvalidSelector(s.to_string());
        let s_trimmed = s.trim();
        if s_trimmed.is_empty() {
            return Err(invalid());
        }

        let mut selector = Selector {
            tag: None,
            id: None,
            classes: Vec::new(),
        };

        // Split into (sigil, name) parts: "div#main.a" -> ("", div) ("#", main) (".", a)
        let mut parts = Vec::new();
        let mut start = 0;
        for (i, c) in s_trimmed.char_indices() {
            if (c == '#' || c == '.') && i > 0 {
                parts.push(&s_trimmed[start..i]);
                start = i;
            }
        }
        parts.push(&s_trimmed[start..]);

        for part in parts {
            let (sigil, name) = match part.chars().next() {
                Some(c @ ('#' | '.')) => (Some(c), &part[1..]),
                _ => (None, part),
            };
            let valid = !name.is_empty()
                && name
                    .chars()
                    .all(|c| c.is_alphanumeric() || c == '-' || c == '_');
            if !valid {
                return Err(invalid());
            }

            match sigil {
                None if selector.tag.is_none() => selector.tag = Some(name.to_ascii_lowercase()),
                Some('#') if selector.id.is_none() => selector.id = Some(name.to_string()),
                Some('.') => selector.classes.push(name.to_string()),
                _ => return Err(invalid()),
            }
        }

        Ok(selector)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(tag) = &self.tag {
            write!(f, "{}", tag)?;
        }
        if let Some(id) = &self.id {
            write!(f, "#{}", id)?;
        }
        for class in &self.classes {
            write!(f, ".{}", class)?;
        }
        Ok(())
    }
}
