//! Configuration file support
//!
//! Config file location: `config.yaml` in the platform config directory
//! (`~/.config/diffnav/` on Linux), or any file passed with `--config`.
//!
//! Example config:
//! ```yaml
//! keys:
//!   next_diff: ["n", "ctrl+n"]
//!   prev_diff: ["N", "ctrl+p"]
//! scroll:
//!   behavior: smooth
//!   block: center
//!   inline: nearest
//!   smooth_steps: 4
//! page:
//!   diff_class: diff
//!   selector: "div#main-content"
//!   wrap: true
//! ```

use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::Deserialize;
use thiserror::Error;

use crate::keymap::Action;
use crate::navigator::{ScrollAlign, ScrollBehavior, ScrollOptions};

const CONFIG_FILE: &str = "config.yaml";

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("invalid key binding `{0}`")]
    InvalidKey(String),
}

/// Key binding lists, one per action
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KeysConfig {
    pub next_diff: Vec<String>,
    pub prev_diff: Vec<String>,
    pub scroll_down: Vec<String>,
    pub scroll_up: Vec<String>,
    pub half_page_down: Vec<String>,
    pub half_page_up: Vec<String>,
    pub top: Vec<String>,
    pub bottom: Vec<String>,
    pub next_page: Vec<String>,
    pub prev_page: Vec<String>,
    pub toggle_wrap: Vec<String>,
    pub help: Vec<String>,
    pub quit: Vec<String>,
}

fn keys(specs: &[&str]) -> Vec<String> {
    specs.iter().map(|s| s.to_string()).collect()
}

impl Default for KeysConfig {
    fn default() -> Self {
        Self {
            next_diff: keys(&["n"]),
            prev_diff: keys(&["N"]),
            scroll_down: keys(&["j", "down"]),
            scroll_up: keys(&["k", "up"]),
            half_page_down: keys(&["ctrl+d", "pagedown"]),
            half_page_up: keys(&["ctrl+u", "pageup"]),
            top: keys(&["g", "home"]),
            bottom: keys(&["G", "end"]),
            next_page: keys(&["]"]),
            prev_page: keys(&["["]),
            toggle_wrap: keys(&["w"]),
            help: keys(&["?"]),
            quit: keys(&["q", "esc"]),
        }
    }
}

impl KeysConfig {
    pub fn bindings_for(&self, action: Action) -> &[String] {
        match action {
            Action::NextDiff => &self.next_diff,
            Action::PrevDiff => &self.prev_diff,
            Action::ScrollDown => &self.scroll_down,
            Action::ScrollUp => &self.scroll_up,
            Action::HalfPageDown => &self.half_page_down,
            Action::HalfPageUp => &self.half_page_up,
            Action::Top => &self.top,
            Action::Bottom => &self.bottom,
            Action::NextPage => &self.next_page,
            Action::PrevPage => &self.prev_page,
            Action::ToggleWrap => &self.toggle_wrap,
            Action::Help => &self.help,
            Action::Quit => &self.quit,
        }
    }
}

/// Scroll-into-view configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScrollConfig {
    pub behavior: ScrollBehavior,
    /// Vertical alignment of the selected diff
    pub block: ScrollAlign,
    /// Horizontal alignment of the selected diff (only matters without wrap)
    pub inline: ScrollAlign,
    /// Each animation frame covers 1/smooth_steps of the remaining distance
    pub smooth_steps: u16,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            behavior: ScrollBehavior::Smooth,
            block: ScrollAlign::Center,
            inline: ScrollAlign::Nearest,
            smooth_steps: 4,
        }
    }
}

/// Page parsing and display configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    /// Class name marking diff elements
    pub diff_class: String,
    /// Selector for the main content; diffs outside it are ignored
    pub selector: String,
    /// Wrap long lines instead of scrolling horizontally
    pub wrap: bool,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            diff_class: "diff".to_string(),
            selector: "html".to_string(),
            wrap: true,
        }
    }
}

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub keys: KeysConfig,
    pub scroll: ScrollConfig,
    pub page: PageConfig,
}

impl Config {
    /// Default config file path for this platform
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "diffnav").map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. The default path is optional and a
    /// missing file yields the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) if path.exists() => path,
                _ => {
                    log::debug!("no config file found, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        let config = Self::from_yaml(&content).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })?;

        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse a YAML document. An empty document yields the defaults.
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    pub fn scroll_options(&self) -> ScrollOptions {
        ScrollOptions {
            behavior: self.scroll.behavior,
            block: self.scroll.block,
            inline: self.scroll.inline,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.keys.next_diff, vec!["n"]);
        assert_eq!(config.keys.prev_diff, vec!["N"]);
        assert_eq!(config.page.diff_class, "diff");
        assert_eq!(config.page.selector, "html");
        assert!(config.page.wrap);
        assert_eq!(config.scroll_options(), ScrollOptions::default());
    }

    #[test]
    fn test_empty_document_is_default() {
        let config = Config::from_yaml("  \n").unwrap();
        assert_eq!(config.scroll.smooth_steps, 4);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = "scroll:\n  behavior: instant\n  block: start\npage:\n  selector: \"#main\"\n";
        let config = Config::from_yaml(yaml).unwrap();

        assert_eq!(config.scroll.behavior, ScrollBehavior::Instant);
        assert_eq!(config.scroll.block, ScrollAlign::Start);
        assert_eq!(config.scroll.inline, ScrollAlign::Nearest);
        assert_eq!(config.page.selector, "#main");
        assert_eq!(config.page.diff_class, "diff");
        assert_eq!(config.keys.quit, vec!["q", "esc"]);
    }

    #[test]
    fn test_custom_keys() {
        let yaml = "keys:\n  next_diff: [\"ctrl+n\"]\n";
        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(config.keys.next_diff, vec!["ctrl+n"]);
        assert_eq!(config.keys.bindings_for(Action::PrevDiff), ["N".to_string()]);
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        assert!(Config::from_yaml("scroll:\n  speed: 3\n").is_err());
        assert!(Config::from_yaml("scroll:\n  block: middle\n").is_err());
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let path = std::env::temp_dir().join("diffnav-missing-config.yaml");
        let err = Config::load(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("diffnav-missing-config.yaml"));
    }

    #[test]
    fn test_load_explicit_file() {
        let path = std::env::temp_dir().join(format!("diffnav-config-{}.yaml", std::process::id()));
        std::fs::write(&path, "page:\n  wrap: false\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        std::fs::remove_file(&path).ok();

        assert!(!config.page.wrap);
    }

    #[test]
    fn test_load_reports_parse_errors_with_path() {
        let path = std::env::temp_dir().join(format!("diffnav-bad-{}.yaml", std::process::id()));
        std::fs::write(&path, "page: [not, a, map]\n").unwrap();

        let err = Config::load(Some(&path)).unwrap_err();
        std::fs::remove_file(&path).ok();

        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
