//! Edge case tests for loading documents and rendering whole pages

use std::fs;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use linkinbio_core::render::{dispatch, profile_view, CardView, RenderContext};
use linkinbio_core::{
    CardRecord, CheckoutLinkAdapter, CheckoutWidget, IsoCurrencyFormatter, LinkInBioError,
    PageDocument, ThemeConfig, ThemeError, ThemeResolver,
};
use tempfile::TempDir;

// ============================================================================
// Helpers
// ============================================================================

const PAGE: &str = r#"{
    "profile": {
        "name": "Ada",
        "description": "Notes and tools",
        "src": "/ada.png",
        "fallback": "AL"
    },
    "links": [
        { "size": "sm", "title": "Blog", "url": "https://ada.dev", "thumbnailEmoji": "📝" },
        { "size": "md", "title": "Course", "price": 0, "url": "https://ada.dev/course" },
        { "size": "md", "title": "Pack", "price": 25, "currency": "EUR",
          "polarCheckoutLink": "https://buy.polar.sh/pack" },
        { "size": "xl", "title": "Poster" },
        { "title": "No size" }
    ]
}"#;

fn write(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[derive(Default)]
struct CountingWidget {
    calls: AtomicUsize,
}

impl CheckoutWidget for CountingWidget {
    fn init(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

// ============================================================================
// Loading
// ============================================================================

#[test]
fn missing_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.json");

    let err = ThemeConfig::load(&path).unwrap_err();
    match &err {
        LinkInBioError::Load { path: reported, source } => {
            assert!(reported.ends_with("absent.json"));
            assert!(matches!(**source, LinkInBioError::Io(_)));
        }
        other => panic!("expected load error, got {other:?}"),
    }
    assert!(err.to_string().starts_with("Failed to load"));
}

#[test]
fn malformed_json_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "page.json", "{ not json");

    let err = PageDocument::load(&path).unwrap_err();
    let LinkInBioError::Load { source, .. } = err else {
        panic!("expected load error");
    };
    assert!(matches!(*source, LinkInBioError::Json(_)));
}

#[test]
fn invalid_theme_attribute_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "theme.json", r#"{ "links": { "md": { "width": "wide" } } }"#);

    let err = ThemeConfig::load(&path).unwrap_err();
    let LinkInBioError::Load { source, .. } = err else {
        panic!("expected load error");
    };
    match *source {
        LinkInBioError::Theme(ThemeError::InvalidAttribute { ref path, .. }) => {
            assert_eq!(path, "/links/md/width");
        }
        ref other => panic!("expected invalid attribute, got {other:?}"),
    }
}

#[test]
fn theme_root_must_be_object() {
    let err = ThemeConfig::from_json_str("[1, 2]").unwrap_err();
    assert!(matches!(err, LinkInBioError::Theme(ThemeError::NotAnObject(_))));
}

#[test]
fn page_without_links_is_valid() {
    let page = PageDocument::from_json_str(r#"{ "profile": { "name": "A", "src": "/a.png" } }"#)
        .unwrap();
    assert!(page.links.is_empty());
    assert_eq!(page.summary().total(), 0);
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn full_page_dispatch() {
    let dir = TempDir::new().unwrap();
    let page = PageDocument::load(write(&dir, "page.json", PAGE)).unwrap();
    let theme = ThemeConfig::load(write(
        &dir,
        "theme.json",
        r##"{ "colors": { "primary": "#111" }, "font": { "header": { "className": "font-serif" } } }"##,
    ))
    .unwrap();

    let summary = page.summary();
    assert_eq!((summary.small, summary.medium, summary.unsupported), (1, 2, 2));

    let ctx = RenderContext::new(&theme, &IsoCurrencyFormatter);
    let variants: Vec<&str> = page.links.iter().map(|l| dispatch(l, &ctx).variant()).collect();
    assert_eq!(variants, ["compact", "preview", "preview", "none", "none"]);

    let profile = profile_view(&page.profile, &ThemeResolver::new(&theme));
    assert_eq!(profile.name_class, "font-serif font-semibold");
    assert_eq!(profile.avatar_fallback, "AL");
}

#[test]
fn zero_price_is_still_shown() {
    let page = PageDocument::from_json_str(PAGE).unwrap();
    let theme = ThemeConfig::empty();
    let ctx = RenderContext::new(&theme, &IsoCurrencyFormatter);

    let CardView::Medium(course) = dispatch(&page.links[1], &ctx) else {
        panic!("expected medium card");
    };
    assert_eq!(course.preview.price.as_deref(), Some("$0.00"));
    assert_eq!(course.preview.cta.unwrap().action.kind(), "link");

    let CardView::Medium(pack) = dispatch(&page.links[2], &ctx) else {
        panic!("expected medium card");
    };
    assert_eq!(pack.detail.price.as_deref(), Some("€25.00"));
    assert_eq!(pack.detail.cta.unwrap().action.href(), "https://buy.polar.sh/pack");
}

#[test]
fn unsupported_keeps_raw_size() {
    let page = PageDocument::from_json_str(PAGE).unwrap();
    assert_eq!(
        page.links[3],
        CardRecord::Unsupported {
            size: Some("xl".to_string())
        }
    );
    assert_eq!(page.links[4], CardRecord::Unsupported { size: None });
}

// ============================================================================
// Checkout activation
// ============================================================================

#[test]
fn checkout_cards_initialize_widget_once_each() {
    let page = PageDocument::from_json_str(PAGE).unwrap();
    let widget = Arc::new(CountingWidget::default());
    let shared: Option<Arc<dyn CheckoutWidget>> = Some(widget.clone());

    let mut adapters: Vec<CheckoutLinkAdapter> = page
        .links
        .iter()
        .filter_map(|link| match link {
            CardRecord::Medium(card) => card.polar_checkout_link.clone(),
            _ => None,
        })
        .map(|link| CheckoutLinkAdapter::new(link, shared.clone()))
        .collect();
    assert_eq!(adapters.len(), 1);

    // Repeated renders
    for _ in 0..5 {
        for adapter in &mut adapters {
            adapter.activate();
        }
    }
    assert_eq!(widget.calls.load(Ordering::SeqCst), 1);
}
