//! Link-in-bio CLI
//!
//! Thin wrapper around linkinbio-core for checking documents before they
//! reach the desktop app.
//!
//! ## Usage
//!
//! ```bash
//! # Validate a theme, and optionally a page against it
//! linkinbio validate --theme theme.json --page page.json
//!
//! # Show the cascade for one attribute
//! linkinbio resolve --theme theme.json links className --size md --element button --preview
//!
//! # Show how each link would render
//! linkinbio inspect --page page.json --theme theme.json
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use linkinbio_core::render::{dispatch, CardView, RenderContext};
use linkinbio_core::theme::{Attribute, Category, Scope, Size, SubElement};
use linkinbio_core::{CardRecord, IsoCurrencyFormatter, PageDocument, ThemeConfig, ThemeResolver};

/// Link-in-bio page tools
#[derive(Parser)]
#[command(name = "linkinbio")]
#[command(version = "0.1.0")]
#[command(about = "Validate link-in-bio documents and debug the theme cascade")]
struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load and validate a theme and optionally a page document
    Validate {
        /// Theme JSON file
        #[arg(short, long)]
        theme: PathBuf,
        /// Page JSON file
        #[arg(short, long)]
        page: Option<PathBuf>,
    },

    /// Print the lookup order and resolved value of one theme attribute
    Resolve {
        /// Theme JSON file
        #[arg(short, long)]
        theme: PathBuf,
        /// links, profile, font or container
        category: Category,
        /// className, width, height or buttonPosition
        attribute: Attribute,
        /// Card size (sm, md)
        #[arg(short, long)]
        size: Option<Size>,
        /// Sub-element (thumbnailImage, button, font.body, ...)
        #[arg(short, long)]
        element: Option<SubElement>,
        /// Probe the medium card preview scope
        #[arg(long)]
        preview: bool,
    },

    /// Show the variant, thumbnail and call-to-action of every link
    Inspect {
        /// Page JSON file
        #[arg(short, long)]
        page: PathBuf,
        /// Theme JSON file (empty theme when omitted)
        #[arg(short, long)]
        theme: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    linkinbio_core::logging::init(cli.verbose);

    match cli.command {
        Commands::Validate { theme, page } => {
            load_theme(&theme)?;
            println!("Theme OK");

            if let Some(page) = page {
                let page = load_page(&page)?;
                let summary = page.summary();
                println!(
                    "Page OK: {} links ({} small, {} medium, {} unsupported)",
                    summary.total(),
                    summary.small,
                    summary.medium,
                    summary.unsupported
                );
            }
        }

        Commands::Resolve {
            theme,
            category,
            attribute,
            size,
            element,
            preview,
        } => {
            let theme = load_theme(&theme)?;
            let resolver = ThemeResolver::new(&theme);

            let mut scope = Scope::new(category).preview(preview);
            if let Some(size) = size {
                scope = scope.size(size);
            }
            if let Some(element) = element {
                scope = scope.element(element);
            }

            println!("Lookup order:");
            for (i, path) in ThemeResolver::lookup_paths(attribute, &scope).iter().enumerate() {
                let marker = if theme.lookup(path).is_some() { "  (defined)" } else { "" };
                println!("  {}. {}{}", i + 1, path, marker);
            }
            match resolver.resolve(attribute, &scope) {
                Some(value) => println!("Resolved: {}", value),
                None => println!("Resolved: (undefined)"),
            }
        }

        Commands::Inspect { page, theme } => {
            let page = load_page(&page)?;
            let theme = match theme {
                Some(path) => load_theme(&path)?,
                None => ThemeConfig::empty(),
            };
            let ctx = RenderContext::new(&theme, &IsoCurrencyFormatter);

            println!("Profile: {}", page.profile.name);
            if page.links.is_empty() {
                println!("No links.");
            }
            for (i, link) in page.links.iter().enumerate() {
                println!("  {}. {}", i + 1, describe(link, &dispatch(link, &ctx)));
            }
        }
    }

    Ok(())
}

fn load_theme(path: &Path) -> Result<ThemeConfig> {
    ThemeConfig::load(path).context("Theme is not valid")
}

fn load_page(path: &Path) -> Result<PageDocument> {
    PageDocument::load(path).context("Page is not valid")
}

fn describe(link: &CardRecord, view: &CardView) -> String {
    match (link, view) {
        (_, CardView::Compact(card)) => format!(
            "[compact] \"{}\" thumbnail={} cta={}",
            card.title,
            card.thumbnail.kind(),
            if card.href.is_some() { "link" } else { "none" }
        ),
        (_, CardView::Medium(card)) => format!(
            "[preview] \"{}\" thumbnail={} cta={} price={}",
            card.title,
            card.preview.thumbnail.kind(),
            card.preview.cta.as_ref().map_or("none", |cta| cta.action.kind()),
            card.preview.price.as_deref().unwrap_or("-")
        ),
        (CardRecord::Unsupported { size }, CardView::Nothing) => format!(
            "[none] unsupported size {}",
            size.as_deref().unwrap_or("(missing)")
        ),
        (_, CardView::Nothing) => "[none]".to_string(),
    }
}
