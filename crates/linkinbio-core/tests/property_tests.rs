//! Property-based tests for the theme cascade and card rendering
//!
//! Uses proptest to check the ordering rules that every card relies on:
//! the most specific scalar wins, class names accumulate least specific
//! first, and thumbnail selection never falls through the wrong way.

use proptest::prelude::*;
use serde_json::{json, Map, Value};

use linkinbio_core::render::{resolve_thumbnail, PreviewEvent, PreviewState, ThumbnailRequest};
use linkinbio_core::theme::{merge_classes, Category, Scope, Size, SubElement};
use linkinbio_core::{CurrencyFormatter, IsoCurrencyFormatter, ThemeConfig, ThemeResolver, ThumbnailSource};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Distinct class names no utility family claims
fn hook_classes(prefix: &'static str) -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set(0u16..500, 0..6)
        .prop_map(move |ids| ids.into_iter().map(|id| format!("{prefix}{id}")).collect())
}

fn colour_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["red", "blue", "green", "slate", "amber", "pink"])
}

fn optional_text() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some(String::new())),
        Just(Some("   ".to_string())),
        "[a-z]{1,8}\\.png".prop_map(Some),
    ]
}

fn preview_event() -> impl Strategy<Value = PreviewEvent> {
    prop_oneof![
        Just(PreviewEvent::SurfaceClicked),
        Just(PreviewEvent::CtaClicked),
        Just(PreviewEvent::OverlayClicked),
        Just(PreviewEvent::CloseRequested),
    ]
}

/// `/links/.../thumbnailImage` with an optional width at each cascade level
fn width_theme(base: Option<u32>, sized: Option<u32>, preview: Option<u32>) -> ThemeConfig {
    let image = |width: Option<u32>| {
        let mut map = Map::new();
        if let Some(width) = width {
            map.insert("width".to_string(), json!(width));
        }
        Value::Object(map)
    };

    ThemeConfig::from_value(json!({
        "links": {
            "thumbnailImage": image(base),
            "md": {
                "thumbnailImage": image(sized),
                "preview": { "thumbnailImage": image(preview) }
            }
        }
    }))
    .expect("generated theme is valid")
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// The most specific level that defines a scalar wins
    #[test]
    fn scalar_most_specific_wins(
        base in prop::option::of(0u32..10_000),
        sized in prop::option::of(0u32..10_000),
        preview in prop::option::of(0u32..10_000),
    ) {
        let theme = width_theme(base, sized, preview);
        let resolver = ThemeResolver::new(&theme);
        let scope = Scope::new(Category::Links)
            .size(Size::Md)
            .element(SubElement::ThumbnailImage);

        prop_assert_eq!(resolver.width(&scope.preview(true)), preview.or(sized).or(base));
        prop_assert_eq!(resolver.width(&scope), sized.or(base));
        prop_assert_eq!(
            resolver.width(&Scope::new(Category::Links).element(SubElement::ThumbnailImage)),
            base
        );
    }

    /// Non-conflicting classes from every level survive, least specific first
    #[test]
    fn class_names_accumulate_in_cascade_order(
        base in hook_classes("hookbase"),
        sized in hook_classes("hooksize"),
        preview in hook_classes("hookprev"),
    ) {
        let class = |names: &[String]| json!({ "className": names.join(" ") });
        let theme = ThemeConfig::from_value(json!({
            "links": {
                "button": class(&base),
                "md": {
                    "button": class(&sized),
                    "preview": { "button": class(&preview) }
                }
            }
        }))
        .expect("generated theme is valid");

        let resolver = ThemeResolver::new(&theme);
        let scope = Scope::new(Category::Links)
            .size(Size::Md)
            .element(SubElement::Button)
            .preview(true);

        let expected: Vec<String> = base.iter().chain(&sized).chain(&preview).cloned().collect();
        let resolved = resolver.class_name(&scope).unwrap_or_default();
        prop_assert_eq!(resolved, expected.join(" "));
    }

    /// A later text colour always replaces an earlier one
    #[test]
    fn later_colour_overrides_earlier(
        first in colour_strategy(),
        second in colour_strategy(),
        shade in prop::sample::select(vec![100u16, 300, 500, 700, 900]),
    ) {
        let merged = merge_classes([
            format!("text-sm text-{first}-{shade} font-bold"),
            format!("text-{second}-500"),
        ]);
        prop_assert_eq!(merged, format!("text-sm font-bold text-{second}-500"));
    }

    /// Merging is idempotent and never invents tokens
    #[test]
    fn merge_is_idempotent(parts in prop::collection::vec("[a-z]{1,3}-[a-z0-9]{1,4}( [a-z]{1,3}-[a-z0-9]{1,4}){0,4}", 0..5)) {
        let once = merge_classes(&parts);
        let twice = merge_classes([&once]);
        prop_assert_eq!(&once, &twice);

        let inputs: Vec<&str> = parts.iter().flat_map(|p| p.split_whitespace()).collect();
        for token in once.split_whitespace() {
            prop_assert!(inputs.contains(&token));
        }
        if let Some(last) = inputs.last() {
            prop_assert!(once.ends_with(last));
        }
    }

    /// Image beats emoji beats placeholder; blank strings count as absent
    #[test]
    fn thumbnail_selection_order(image in optional_text(), emoji in optional_text(), md in any::<bool>()) {
        let theme = ThemeConfig::empty();
        let resolver = ThemeResolver::new(&theme);
        let size = if md { Size::Md } else { Size::Sm };
        let source = ThumbnailSource::new(image.as_deref(), emoji.as_deref());
        let thumb = resolve_thumbnail(&resolver, ThumbnailRequest::new(source, "alt", size));

        let present = |s: &Option<String>| s.as_deref().is_some_and(|s| !s.trim().is_empty());
        let expected = if present(&image) {
            "image"
        } else if present(&emoji) {
            "emoji"
        } else {
            "placeholder"
        };
        prop_assert_eq!(thumb.kind(), expected);
    }

    /// Clicking the call-to-action never moves the drawer
    #[test]
    fn cta_click_never_toggles(events in prop::collection::vec(preview_event(), 0..40)) {
        let mut state = PreviewState::default();
        for event in events {
            let before = state.is_open();
            let changed = state.apply(event);
            prop_assert_eq!(changed, before != state.is_open());
            match event {
                PreviewEvent::CtaClicked => prop_assert_eq!(state.is_open(), before),
                PreviewEvent::SurfaceClicked => prop_assert!(state.is_open()),
                PreviewEvent::OverlayClicked | PreviewEvent::CloseRequested => {
                    prop_assert!(!state.is_open())
                }
            }
        }
    }

    /// Formatting never panics and USD always carries two decimals
    #[test]
    fn usd_formatting_shape(amount in -1.0e9f64..1.0e9) {
        let text = IsoCurrencyFormatter.format(amount, "USD");
        let digits = text.trim_start_matches('-').trim_start_matches('$');
        let (_, fraction) = digits.split_once('.').expect("decimal point");
        prop_assert_eq!(fraction.len(), 2);
        prop_assert!(text.starts_with('$') || text.starts_with("-$"));
    }

    /// Arbitrary input never panics the formatter
    #[test]
    fn formatter_total(amount in any::<f64>(), code in "[A-Za-z-]{0,6}") {
        let _ = IsoCurrencyFormatter.format(amount, &code);
    }
}
