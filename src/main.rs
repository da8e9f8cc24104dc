//! diffnav - Terminal viewer for diffed web pages
//!
//! Opens HTML pages whose changes are marked with `<ins class="diff">`,
//! `<del class="diff">` or `<img class="diff">` and steps through every
//! change with `n`/`N`. The selected change is highlighted and scrolled
//! into the middle of the screen.
//!
//! # Usage
//!
//! ```bash
//! diffnav                        # All pages under the current directory
//! diffnav site/index.html        # A single page
//! diffnav site -s '#content'     # Only diffs inside the #content element
//! diffnav site --class changed   # Diff elements use class="changed"
//! ```

mod app;
mod config;
mod keymap;
mod logger;
mod navigator;
mod page;
mod ui;
mod viewport;

use std::path::PathBuf;
use anyhow::{Context, Result};
use clap::Parser;

use crate::app::{App, AppOptions};
use crate::config::Config;
use crate::keymap::Keymap;
use crate::navigator::ScrollBehavior;
use crate::page::{collect_pages, PageOptions, Selector};

/// Terminal viewer for diffed web pages
#[derive(Parser, Debug)]
#[command(name = "diffnav")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Pages or directories of pages (defaults to current directory)
    #[arg(default_value = ".")]
    pages: Vec<PathBuf>,

    /// Only show content inside the first element matching this selector
    /// (tag, #id, .class or a combination such as div#main)
    #[arg(short, long)]
    selector: Option<String>,

    /// Class name that marks diff elements
    #[arg(long = "class", value_name = "CLASS")]
    diff_class: Option<String>,

    /// Config file (defaults to the platform config directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Do not wrap long lines
    #[arg(long)]
    no_wrap: bool,

    /// Jump to diffs instead of scrolling smoothly
    #[arg(long)]
    instant: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_file = logger::init()?;
    log::info!("diffnav {} starting, logging to {}", env!("CARGO_PKG_VERSION"), log_file.display());

    let config = Config::load(args.config.as_deref()).context("Failed to load config")?;
    let keymap = Keymap::from_config(&config.keys).context("Invalid key binding in config")?;

    // Command line flags win over the config file
    let selector = args.selector.as_deref().unwrap_or(&config.page.selector);
    let root: Selector = selector.parse()?;
    let diff_class = args.diff_class.unwrap_or_else(|| config.page.diff_class.clone());

    let mut scroll = config.scroll_options();
    if args.instant {
        scroll.behavior = ScrollBehavior::Instant;
    }

    let options = AppOptions {
        page: PageOptions { diff_class, root },
        wrap: config.page.wrap && !args.no_wrap,
        scroll,
        smooth_steps: config.scroll.smooth_steps,
    };

    let pages = collect_pages(&args.pages)?;
    log::info!("found {} page(s)", pages.len());

    // Create and run the application
    let mut app = App::new(pages, options, keymap);
    app.run()?;

    Ok(())
}
