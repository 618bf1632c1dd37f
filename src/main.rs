#![allow(non_snake_case)]

//! Link-in-bio desktop viewer
//!
//! Loads a page document and a theme, installs the theme for the process
//! and renders the page in a desktop webview. Utility classes are expected
//! to come from a compiled stylesheet passed with `--stylesheet`.

mod app;
mod components;
pub mod context;
mod theme;

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{bail, Context, Result};
use clap::Parser;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use linkinbio_core::{PageDocument, ThemeConfig};

/// Everything the app needs after startup
#[derive(Debug)]
pub struct AppSettings {
    pub page: PageDocument,
    /// Extra CSS injected after the built-in styles
    pub stylesheet: Option<String>,
    /// Embed-checkout script; enables the checkout widget when set
    pub checkout_script: Option<String>,
}

/// Global settings, set once before launch
static SETTINGS: OnceLock<AppSettings> = OnceLock::new();

/// Settings loaded from the command line, if startup got that far
pub fn get_settings() -> Option<&'static AppSettings> {
    SETTINGS.get()
}

/// Link-in-bio page viewer
#[derive(Parser, Debug)]
#[command(name = "linkinbio-desktop")]
#[command(about = "Render a link-in-bio page in a desktop window")]
struct Args {
    /// Page document (default: <config dir>/linkinbio/page.json)
    #[arg(short, long)]
    page: Option<PathBuf>,

    /// Theme document (default: <config dir>/linkinbio/theme.json, optional)
    #[arg(short, long)]
    theme: Option<PathBuf>,

    /// Compiled CSS for the utility classes
    #[arg(short, long)]
    stylesheet: Option<PathBuf>,

    /// URL of the embed-checkout script
    #[arg(long)]
    checkout_script: Option<String>,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// `<config dir>/linkinbio/<file>`
fn default_config_path(file: &str) -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("linkinbio")
        .join(file)
}

/// An explicit theme must load; the default one may be missing.
fn load_theme(explicit: Option<&Path>) -> Result<ThemeConfig> {
    match explicit {
        Some(path) => Ok(ThemeConfig::load(path)?),
        None => {
            let path = default_config_path("theme.json");
            if path.exists() {
                Ok(ThemeConfig::load(&path)?)
            } else {
                tracing::info!(path = %path.display(), "No theme found, using defaults");
                Ok(ThemeConfig::empty())
            }
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    linkinbio_core::logging::init(args.verbose);

    let page_path = args.page.unwrap_or_else(|| default_config_path("page.json"));
    let page = PageDocument::load(&page_path).context("Could not open the page document")?;

    load_theme(args.theme.as_deref())?
        .install()
        .context("Theme installation failed")?;

    let stylesheet = args
        .stylesheet
        .map(|path| {
            std::fs::read_to_string(&path)
                .with_context(|| format!("Could not read stylesheet {}", path.display()))
        })
        .transpose()?;

    let title = page.profile.name.clone();
    tracing::info!(
        page = %page_path.display(),
        links = page.links.len(),
        checkout = args.checkout_script.is_some(),
        "Starting link-in-bio viewer"
    );

    if SETTINGS
        .set(AppSettings {
            page,
            stylesheet,
            checkout_script: args.checkout_script,
        })
        .is_err()
    {
        bail!("Settings already initialized");
    }

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(LogicalSize::new(480.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop().with_cfg(config).launch(app::App);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_paths_live_under_linkinbio() {
        let page = default_config_path("page.json");
        assert!(page.ends_with("linkinbio/page.json"));
    }

    #[test]
    fn explicit_missing_theme_is_an_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let missing = dir.path().join("theme.json");
        assert!(load_theme(Some(&missing)).is_err());
    }

    #[test]
    fn explicit_theme_is_loaded() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("theme.json");
        std::fs::write(&path, r#"{ "container": { "className": "bg-black" } }"#).unwrap();

        let theme = load_theme(Some(&path)).unwrap();
        assert_eq!(theme.lookup("/container/className"), Some(&serde_json::json!("bg-black")));
    }
}
