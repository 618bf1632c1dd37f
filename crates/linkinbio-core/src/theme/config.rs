//! Theme document loading and validation.
//!
//! The theme is a nested JSON object:
//!
//! ```text
//! {
//!   "colors": { "primary": "#0a0a0a" },
//!   "font": { "header": { "className": "font-serif" } },
//!   "links": {
//!     "buttonPosition": "inline",
//!     "thumbnailImage": { "className": "rounded-full", "width": 40, "height": 40 },
//!     "md": {
//!       "background": { "className": "bg-white" },
//!       "preview": { "thumbnailImage": { "width": 96 }, "buttonPosition": "end" }
//!     }
//!   }
//! }
//! ```
//!
//! Loaded once, validated, then only ever read.

use std::path::Path;
use std::sync::OnceLock;

use serde_json::{Map, Value};

use crate::error::{LinkInBioError, Result, ThemeError};

static INSTALLED: OnceLock<ThemeConfig> = OnceLock::new();

/// Immutable theme configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeConfig {
    root: Value,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self::empty()
    }
}

impl ThemeConfig {
    /// A theme that defines nothing; every lookup falls through to defaults.
    pub fn empty() -> Self {
        Self {
            root: Value::Object(Map::new()),
        }
    }

    /// Validate and wrap an already parsed document
    pub fn from_value(root: Value) -> std::result::Result<Self, ThemeError> {
        match &root {
            Value::Object(map) => validate_object(map, "")?,
            other => return Err(ThemeError::NotAnObject(json_kind(other))),
        }
        Ok(Self { root })
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let root: Value = serde_json::from_str(text)?;
        Ok(Self::from_value(root)?)
    }

    /// Read and validate a theme file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| LinkInBioError::from(e).at_path(path))?;
        let theme = Self::from_json_str(&text).map_err(|e| e.at_path(path))?;
        tracing::debug!(path = %path.display(), "Loaded theme");
        Ok(theme)
    }

    /// Make this the process-wide theme.
    ///
    /// The theme can be installed exactly once; the returned reference is
    /// what callers pass to [`ThemeResolver`](super::ThemeResolver).
    pub fn install(self) -> std::result::Result<&'static ThemeConfig, ThemeError> {
        INSTALLED
            .set(self)
            .map_err(|_| ThemeError::AlreadyInstalled)?;
        INSTALLED.get().ok_or(ThemeError::AlreadyInstalled)
    }

    /// The installed theme, if any
    pub fn installed() -> Option<&'static ThemeConfig> {
        INSTALLED.get()
    }

    /// Raw lookup by JSON pointer (`/links/md/button/className`)
    pub fn lookup(&self, pointer: &str) -> Option<&Value> {
        self.root.pointer(pointer)
    }

    /// Named colour from the top-level `colors` map
    pub fn color(&self, name: &str) -> Option<&str> {
        self.root
            .get("colors")
            .and_then(|colors| colors.get(name))
            .and_then(Value::as_str)
    }
}

fn validate_object(map: &Map<String, Value>, path: &str) -> std::result::Result<(), ThemeError> {
    for (key, value) in map {
        let child = format!("{}/{}", path, key);
        match key.as_str() {
            "className" => {
                if !value.is_string() {
                    return Err(invalid(child, "expected a string", value));
                }
            }
            "width" | "height" => {
                let fits = value
                    .as_u64()
                    .map(|n| u32::try_from(n).is_ok())
                    .unwrap_or(false);
                if !fits {
                    return Err(invalid(child, "expected a non-negative integer", value));
                }
            }
            "buttonPosition" => match value.as_str() {
                Some("inline") | Some("end") => {}
                _ => return Err(invalid(child, "expected \"inline\" or \"end\"", value)),
            },
            "colors" if path.is_empty() => {
                let Value::Object(colors) = value else {
                    return Err(invalid(child, "expected an object", value));
                };
                for (name, colour) in colors {
                    if !colour.is_string() {
                        return Err(invalid(format!("{}/{}", child, name), "expected a string", colour));
                    }
                }
            }
            _ => {
                // Unknown scalars (names, comments) are tolerated; nested
                // scopes are walked.
                if let Value::Object(nested) = value {
                    validate_object(nested, &child)?;
                }
            }
        }
    }
    Ok(())
}

fn invalid(path: String, expected: &str, found: &Value) -> ThemeError {
    ThemeError::InvalidAttribute {
        path,
        reason: format!("{}, found {}", expected, json_kind(found)),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_nested_scopes() {
        let theme = ThemeConfig::from_value(json!({
            "colors": { "primary": "#fff" },
            "links": {
                "buttonPosition": "end",
                "thumbnailImage": { "className": "rounded", "width": 40, "height": 40 },
                "md": { "preview": { "font": { "body": { "className": "text-sm" } } } }
            }
        }))
        .unwrap();

        assert_eq!(theme.color("primary"), Some("#fff"));
        assert_eq!(
            theme.lookup("/links/md/preview/font/body/className"),
            Some(&json!("text-sm"))
        );
    }

    #[test]
    fn rejects_non_object_root() {
        let err = ThemeConfig::from_value(json!([1, 2])).unwrap_err();
        assert_eq!(err, ThemeError::NotAnObject("an array"));
    }

    #[test]
    fn rejects_bad_width() {
        let err = ThemeConfig::from_value(json!({
            "links": { "sm": { "thumbnailImage": { "width": -4 } } }
        }))
        .unwrap_err();

        match err {
            ThemeError::InvalidAttribute { path, .. } => {
                assert_eq!(path, "/links/sm/thumbnailImage/width");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_button_position() {
        let err = ThemeConfig::from_value(json!({ "links": { "buttonPosition": "top" } }))
            .unwrap_err();
        assert!(matches!(err, ThemeError::InvalidAttribute { .. }));
    }

    #[test]
    fn rejects_numeric_class_name() {
        let err = ThemeConfig::from_value(json!({ "container": { "className": 3 } })).unwrap_err();
        assert!(err.to_string().contains("/container/className"));
    }

    #[test]
    fn tolerates_unknown_scalars() {
        assert!(ThemeConfig::from_value(json!({ "name": "Dusk", "links": { "note": 1 } })).is_ok());
    }

    #[test]
    fn empty_theme_has_no_colors() {
        assert_eq!(ThemeConfig::empty().color("primary"), None);
        assert_eq!(ThemeConfig::default(), ThemeConfig::empty());
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        let err = ThemeConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, LinkInBioError::Json(_)));
    }
}
