//! Theme cascade resolution.
//!
//! For a [`Scope`] and [`Attribute`] the resolver probes, in order:
//!
//! 1. `category.size.preview.element.attribute` (preview scope, sized only)
//! 2. `category.size.element.attribute`
//! 3. `category.element.attribute`
//!
//! Scalars take the first defined value. Class names merge every defined
//! level, least specific first, so the more specific utilities win on
//! conflicts. When nothing is defined the caller falls back to its own
//! default.

use serde_json::Value;

use super::config::ThemeConfig;
use super::merge::ClassList;
use super::scope::{Attribute, ButtonPosition, Scope};

/// A resolved theme value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeValue {
    ClassName(String),
    Pixels(u32),
    Position(ButtonPosition),
}

impl std::fmt::Display for ThemeValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeValue::ClassName(class) => write!(f, "\"{}\"", class),
            ThemeValue::Pixels(px) => write!(f, "{}", px),
            ThemeValue::Position(ButtonPosition::Inline) => f.write_str("inline"),
            ThemeValue::Position(ButtonPosition::End) => f.write_str("end"),
        }
    }
}

/// Optional width/height pair for images
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dimensions {
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// Read-only view over a theme, borrowed for the duration of a render
#[derive(Debug, Clone, Copy)]
pub struct ThemeResolver<'a> {
    theme: &'a ThemeConfig,
}

impl<'a> ThemeResolver<'a> {
    pub fn new(theme: &'a ThemeConfig) -> Self {
        Self { theme }
    }

    pub fn theme(&self) -> &'a ThemeConfig {
        self.theme
    }

    /// JSON pointers probed for `attribute` in `scope`, most specific first.
    pub fn lookup_paths(attribute: Attribute, scope: &Scope) -> Vec<String> {
        let tail = {
            let mut tail = String::new();
            if let Some(element) = scope.element {
                for segment in element.segments() {
                    tail.push('/');
                    tail.push_str(segment);
                }
            }
            tail.push('/');
            tail.push_str(attribute.key());
            tail
        };
        let category = scope.category.key();

        let mut paths = Vec::with_capacity(3);
        if let Some(size) = scope.size {
            if scope.preview {
                paths.push(format!("/{}/{}/preview{}", category, size.key(), tail));
            }
            paths.push(format!("/{}/{}{}", category, size.key(), tail));
        }
        paths.push(format!("/{}{}", category, tail));
        paths
    }

    /// Resolve one attribute; `None` means "use your own default".
    pub fn resolve(&self, attribute: Attribute, scope: &Scope) -> Option<ThemeValue> {
        let paths = Self::lookup_paths(attribute, scope);

        if !attribute.is_scalar() {
            let defined: Vec<&str> = paths
                .iter()
                .rev()
                .filter_map(|path| self.theme.lookup(path).and_then(Value::as_str))
                .collect();
            if defined.is_empty() {
                return None;
            }
            return Some(ThemeValue::ClassName(
                ClassList::new().with_all(defined).merge(),
            ));
        }

        paths
            .iter()
            .find_map(|path| self.theme.lookup(path).and_then(|v| scalar(attribute, v)))
    }

    /// Merged class names for the scope
    pub fn class_name(&self, scope: &Scope) -> Option<String> {
        match self.resolve(Attribute::ClassName, scope) {
            Some(ThemeValue::ClassName(class)) => Some(class),
            _ => None,
        }
    }

    pub fn width(&self, scope: &Scope) -> Option<u32> {
        match self.resolve(Attribute::Width, scope) {
            Some(ThemeValue::Pixels(px)) => Some(px),
            _ => None,
        }
    }

    pub fn height(&self, scope: &Scope) -> Option<u32> {
        match self.resolve(Attribute::Height, scope) {
            Some(ThemeValue::Pixels(px)) => Some(px),
            _ => None,
        }
    }

    pub fn dimensions(&self, scope: &Scope) -> Dimensions {
        Dimensions {
            width: self.width(scope),
            height: self.height(scope),
        }
    }

    pub fn button_position(&self, scope: &Scope) -> Option<ButtonPosition> {
        match self.resolve(Attribute::ButtonPosition, scope) {
            Some(ThemeValue::Position(position)) => Some(position),
            _ => None,
        }
    }
}

fn scalar(attribute: Attribute, value: &Value) -> Option<ThemeValue> {
    match attribute {
        Attribute::Width | Attribute::Height => value
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .map(ThemeValue::Pixels),
        Attribute::ButtonPosition => value
            .as_str()
            .and_then(|s| s.parse().ok())
            .map(ThemeValue::Position),
        Attribute::ClassName => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::scope::{Category, Size, SubElement};
    use serde_json::json;

    fn theme(value: serde_json::Value) -> ThemeConfig {
        ThemeConfig::from_value(value).unwrap()
    }

    fn thumb(size: Size, preview: bool) -> Scope {
        Scope::new(Category::Links)
            .size(size)
            .element(SubElement::ThumbnailImage)
            .preview(preview)
    }

    #[test]
    fn lookup_paths_in_priority_order() {
        let paths = ThemeResolver::lookup_paths(Attribute::Width, &thumb(Size::Md, true));
        assert_eq!(
            paths,
            vec![
                "/links/md/preview/thumbnailImage/width",
                "/links/md/thumbnailImage/width",
                "/links/thumbnailImage/width",
            ]
        );
    }

    #[test]
    fn preview_level_skipped_without_preview_context() {
        let paths = ThemeResolver::lookup_paths(Attribute::Width, &thumb(Size::Md, false));
        assert_eq!(paths.len(), 2);
        assert!(paths.iter().all(|p| !p.contains("preview")));
    }

    #[test]
    fn unsized_scope_only_probes_category_level() {
        let scope = Scope::new(Category::Links).element(SubElement::Button).preview(true);
        let paths = ThemeResolver::lookup_paths(Attribute::ClassName, &scope);
        assert_eq!(paths, vec!["/links/button/className"]);
    }

    #[test]
    fn nested_font_element_path() {
        let scope = Scope::new(Category::Links).size(Size::Sm).element(SubElement::FontHeader);
        let paths = ThemeResolver::lookup_paths(Attribute::ClassName, &scope);
        assert_eq!(paths[0], "/links/sm/font/header/className");
    }

    #[test]
    fn scalar_most_specific_wins() {
        let theme = theme(json!({
            "links": {
                "thumbnailImage": { "width": 10 },
                "md": {
                    "thumbnailImage": { "width": 20 },
                    "preview": { "thumbnailImage": { "width": 30 } }
                }
            }
        }));
        let resolver = ThemeResolver::new(&theme);

        assert_eq!(resolver.width(&thumb(Size::Md, true)), Some(30));
        assert_eq!(resolver.width(&thumb(Size::Md, false)), Some(20));
        assert_eq!(resolver.width(&thumb(Size::Sm, false)), Some(10));
    }

    #[test]
    fn scalar_falls_through_gaps() {
        let theme = theme(json!({
            "links": {
                "thumbnailImage": { "height": 48 },
                "md": { "preview": { "thumbnailImage": { "width": 96 } } }
            }
        }));
        let resolver = ThemeResolver::new(&theme);

        assert_eq!(
            resolver.dimensions(&thumb(Size::Md, true)),
            Dimensions { width: Some(96), height: Some(48) }
        );
    }

    #[test]
    fn missing_size_degrades_to_category_level() {
        let theme = theme(json!({ "links": { "thumbnailImage": { "width": 64 } } }));
        let resolver = ThemeResolver::new(&theme);
        assert_eq!(resolver.width(&thumb(Size::Md, true)), Some(64));
    }

    #[test]
    fn undefined_everywhere_is_none() {
        let theme = ThemeConfig::empty();
        let resolver = ThemeResolver::new(&theme);
        assert_eq!(resolver.width(&thumb(Size::Sm, false)), None);
        assert_eq!(resolver.class_name(&thumb(Size::Sm, false)), None);
        assert_eq!(
            resolver.button_position(&Scope::new(Category::Links).size(Size::Md)),
            None
        );
    }

    #[test]
    fn class_names_merge_across_levels() {
        let theme = theme(json!({
            "links": {
                "background": { "className": "text-sm text-red" },
                "md": { "background": { "className": "text-red-500" } }
            }
        }));
        let resolver = ThemeResolver::new(&theme);
        let scope = Scope::new(Category::Links).size(Size::Md).element(SubElement::Background);

        assert_eq!(resolver.class_name(&scope).as_deref(), Some("text-sm text-red-500"));
    }

    #[test]
    fn class_names_include_preview_level_last() {
        let theme = theme(json!({
            "links": {
                "button": { "className": "rounded-md border" },
                "md": {
                    "button": { "className": "bg-white" },
                    "preview": { "button": { "className": "bg-black rounded-full" } }
                }
            }
        }));
        let resolver = ThemeResolver::new(&theme);
        let scope = Scope::new(Category::Links)
            .size(Size::Md)
            .element(SubElement::Button)
            .preview(true);

        assert_eq!(
            resolver.class_name(&scope).as_deref(),
            Some("border bg-black rounded-full")
        );
    }

    #[test]
    fn button_position_cascade() {
        let theme = theme(json!({
            "links": { "buttonPosition": "inline", "md": { "preview": { "buttonPosition": "end" } } }
        }));
        let resolver = ThemeResolver::new(&theme);
        let preview = Scope::new(Category::Links).size(Size::Md).preview(true);

        assert_eq!(resolver.button_position(&preview), Some(ButtonPosition::End));
        assert_eq!(
            resolver.button_position(&preview.preview(false)),
            Some(ButtonPosition::Inline)
        );
    }

    #[test]
    fn value_display() {
        assert_eq!(ThemeValue::Pixels(40).to_string(), "40");
        assert_eq!(ThemeValue::ClassName("a b".into()).to_string(), "\"a b\"");
        assert_eq!(ThemeValue::Position(ButtonPosition::End).to_string(), "end");
    }
}
