//! Avatar with text fallback
//!
//! Shows the image until it fails to load, then the fallback initials.

use dioxus::prelude::*;

use super::compose;

pub const AVATAR_BASE: &str = "relative flex size-8 shrink-0 overflow-hidden rounded-full";
const AVATAR_IMAGE: &str = "aspect-square size-full object-cover";
const AVATAR_FALLBACK: &str = "bg-muted flex size-full items-center justify-center rounded-full";

#[derive(Clone, PartialEq, Props)]
pub struct AvatarProps {
    pub src: String,
    #[props(default)]
    pub alt: String,
    /// Text shown when the image can't be loaded
    #[props(default)]
    pub fallback: String,
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn Avatar(props: AvatarProps) -> Element {
    // Source that last failed to load
    let mut failed_src = use_signal(|| None::<String>);
    let class = compose(AVATAR_BASE, props.class.as_deref());
    let src = props.src.clone();

    rsx! {
        span { class: "{class}", "data-slot": "avatar",
            if shows_fallback(&props.src, failed_src.read().as_deref()) {
                span { class: AVATAR_FALLBACK, "data-slot": "avatar-fallback", "{props.fallback}" }
            } else {
                img {
                    class: AVATAR_IMAGE,
                    src: "{props.src}",
                    alt: "{props.alt}",
                    onerror: move |_| {
                        tracing::debug!("Avatar image failed to load, showing fallback");
                        failed_src.set(Some(src.clone()));
                    },
                }
            }
        }
    }
}

fn shows_fallback(src: &str, failed_src: Option<&str>) -> bool {
    src.trim().is_empty() || failed_src == Some(src)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_size_overrides_base() {
        let class = compose(AVATAR_BASE, Some("size-24 ring-2"));
        assert!(class.ends_with("size-24 ring-2"));
        assert!(!class.contains("size-8"));
    }

    #[test]
    fn fallback_follows_current_source() {
        assert!(shows_fallback("  ", None));
        assert!(!shows_fallback("/a.png", None));
        assert!(shows_fallback("/a.png", Some("/a.png")));
        assert!(!shows_fallback("/b.png", Some("/a.png")));
    }
}
