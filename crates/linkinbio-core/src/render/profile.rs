//! Profile header view model

use crate::theme::{Category, ClassList, Scope, SubElement, ThemeResolver};
use crate::types::ProfileRecord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileView {
    pub section_class: &'static str,
    /// Inline `color:` style when the profile sets a font colour
    pub style: Option<String>,
    pub avatar_src: String,
    pub avatar_fallback: String,
    pub avatar_class: String,
    pub name: String,
    pub name_class: String,
    pub description: String,
    pub description_class: &'static str,
}

pub fn profile_view(profile: &ProfileRecord, theme: &ThemeResolver<'_>) -> ProfileView {
    let avatar_theme = theme.class_name(&Scope::new(Category::Profile).element(SubElement::Avatar));
    let header_theme = theme.class_name(&Scope::new(Category::Font).element(SubElement::Header));

    ProfileView {
        section_class: "flex flex-col items-center text-center gap-2 max-w-[280px] mx-auto",
        style: profile
            .font_colour
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .map(|c| format!("color: {};", c)),
        avatar_src: profile.src.clone(),
        avatar_fallback: profile.fallback.clone(),
        avatar_class: ClassList::new().with("size-24").with_opt(avatar_theme).merge(),
        name: profile.name.clone(),
        // Weight is fixed after the theme font
        name_class: ClassList::new().with_opt(header_theme).with("font-semibold").merge(),
        description: profile.description.clone(),
        description_class: "text-sm",
    }
}
