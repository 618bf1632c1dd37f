//! Utility-class merging.
//!
//! Joins class strings the way the page's utility framework expects: when
//! two classes set the same style property, the later one wins and the
//! earlier one is dropped. Everything that doesn't conflict is kept, in its
//! original order.
//!
//! ```
//! use linkinbio_core::theme::merge_classes;
//!
//! assert_eq!(merge_classes(["text-sm text-red", "text-red-500"]), "text-sm text-red-500");
//! assert_eq!(merge_classes(["px-2 py-1", "p-4"]), "p-4");
//! ```

use std::collections::HashSet;

/// Ordered collection of class strings, merged on demand
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    parts: Vec<String>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, classes: impl AsRef<str>) -> Self {
        let classes = classes.as_ref().trim();
        if !classes.is_empty() {
            self.parts.push(classes.to_string());
        }
        self
    }

    pub fn with_opt<S: AsRef<str>>(self, classes: Option<S>) -> Self {
        match classes {
            Some(classes) => self.with(classes),
            None => self,
        }
    }

    pub fn with_all<I, S>(self, parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        parts.into_iter().fold(self, |list, part| list.with(part))
    }

    pub fn merge(&self) -> String {
        merge_classes(&self.parts)
    }
}

/// Merge class strings, later parts overriding conflicting earlier ones.
pub fn merge_classes<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let parts: Vec<S> = parts.into_iter().collect();
    let tokens: Vec<&str> = parts
        .iter()
        .flat_map(|part| part.as_ref().split_whitespace())
        .collect();

    let mut claimed: HashSet<(String, Group)> = HashSet::new();
    let mut kept: Vec<&str> = Vec::with_capacity(tokens.len());

    for token in tokens.iter().rev() {
        let parsed = ParsedClass::parse(token);
        let key = (parsed.modifier_key.clone(), parsed.group.clone());
        if claimed.contains(&key) {
            continue;
        }
        if let Group::Utility(group) = parsed.group {
            for conflict in conflicts_of(group) {
                claimed.insert((parsed.modifier_key.clone(), Group::Utility(conflict)));
            }
        }
        claimed.insert(key);
        kept.push(token);
    }

    kept.reverse();
    kept.join(" ")
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Group {
    /// Known utility family; members conflict with each other
    Utility(&'static str),
    /// Unrecognised class; only exact duplicates collapse
    Exact(String),
}

struct ParsedClass {
    /// Sorted variant modifiers plus the important flag
    modifier_key: String,
    group: Group,
}

impl ParsedClass {
    fn parse(class: &str) -> Self {
        let (modifiers, base) = split_modifiers(class);

        let (important, base) = if let Some(rest) = base.strip_prefix('!') {
            (true, rest)
        } else if let Some(rest) = base.strip_suffix('!') {
            (true, rest)
        } else {
            (false, base)
        };
        let utility = base.strip_prefix('-').unwrap_or(base);

        let mut modifier_key = modifier_key(modifiers);
        if important {
            modifier_key.push('!');
        }

        let group = match classify(utility) {
            Some(group) => Group::Utility(group),
            None => Group::Exact(base.to_string()),
        };

        Self { modifier_key, group }
    }
}

/// Canonical key for a modifier stack. Plain variants commute, so each run of
/// them is sorted; arbitrary and pseudo-element variants keep their position.
fn modifier_key(modifiers: Vec<&str>) -> String {
    let mut key: Vec<&str> = Vec::with_capacity(modifiers.len());
    let mut run_start = 0;

    for modifier in modifiers {
        if is_positional(modifier) {
            key[run_start..].sort_unstable();
            key.push(modifier);
            run_start = key.len();
        } else {
            key.push(modifier);
        }
    }
    key[run_start..].sort_unstable();

    key.join(":")
}

fn is_positional(modifier: &str) -> bool {
    modifier.starts_with('[')
        || matches!(
            modifier,
            "*" | "**"
                | "before"
                | "after"
                | "placeholder"
                | "file"
                | "marker"
                | "selection"
                | "first-line"
                | "first-letter"
                | "backdrop"
        )
}

/// Split `hover:md:bg-red-500` into `["hover", "md"]` and `bg-red-500`,
/// ignoring colons inside arbitrary-value brackets.
fn split_modifiers(class: &str) -> (Vec<&str>, &str) {
    let mut modifiers = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, ch) in class.char_indices() {
        match ch {
            '[' | '(' => depth += 1,
            ']' | ')' => depth = depth.saturating_sub(1),
            ':' if depth == 0 => {
                modifiers.push(&class[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }

    (modifiers, &class[start..])
}

/// Utility groups that a later member of `group` also overrides
fn conflicts_of(group: &'static str) -> &'static [&'static str] {
    match group {
        "p" => &["px", "py", "ps", "pe", "pt", "pr", "pb", "pl"],
        "px" => &["pr", "pl"],
        "py" => &["pt", "pb"],
        "m" => &["mx", "my", "ms", "me", "mt", "mr", "mb", "ml"],
        "mx" => &["mr", "ml"],
        "my" => &["mt", "mb"],
        "size" => &["w", "h"],
        "inset" => &["inset-x", "inset-y", "start", "end", "top", "right", "bottom", "left"],
        "inset-x" => &["right", "left"],
        "inset-y" => &["top", "bottom"],
        "gap" => &["gap-x", "gap-y"],
        "overflow" => &["overflow-x", "overflow-y"],
        "rounded" => &[
            "rounded-s", "rounded-e", "rounded-t", "rounded-r", "rounded-b", "rounded-l",
            "rounded-ss", "rounded-se", "rounded-ee", "rounded-es",
            "rounded-tl", "rounded-tr", "rounded-br", "rounded-bl",
        ],
        "rounded-s" => &["rounded-ss", "rounded-es"],
        "rounded-e" => &["rounded-se", "rounded-ee"],
        "rounded-t" => &["rounded-tl", "rounded-tr"],
        "rounded-r" => &["rounded-tr", "rounded-br"],
        "rounded-b" => &["rounded-br", "rounded-bl"],
        "rounded-l" => &["rounded-tl", "rounded-bl"],
        "border-w" => &[
            "border-w-x", "border-w-y", "border-w-s", "border-w-e",
            "border-w-t", "border-w-r", "border-w-b", "border-w-l",
        ],
        "border-w-x" => &["border-w-r", "border-w-l"],
        "border-w-y" => &["border-w-t", "border-w-b"],
        "border-color" => &[
            "border-color-x", "border-color-y", "border-color-s", "border-color-e",
            "border-color-t", "border-color-r", "border-color-b", "border-color-l",
        ],
        "border-color-x" => &["border-color-r", "border-color-l"],
        "border-color-y" => &["border-color-t", "border-color-b"],
        "font-size" => &["leading"],
        _ => &[],
    }
}

const DISPLAY: &[&str] = &[
    "block", "inline-block", "inline", "flex", "inline-flex", "grid", "inline-grid",
    "contents", "hidden", "table", "table-row", "table-cell", "flow-root", "list-item",
];
const POSITION: &[&str] = &["static", "fixed", "absolute", "relative", "sticky"];
const FONT_SIZES: &[&str] = &[
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];
const FONT_WEIGHTS: &[&str] = &[
    "thin", "extralight", "light", "normal", "medium", "semibold", "bold", "extrabold", "black",
];
const SHADOW_SIZES: &[&str] = &["2xs", "xs", "sm", "md", "lg", "xl", "2xl", "inner", "none"];
const BORDER_STYLES: &[&str] = &["solid", "dashed", "dotted", "double", "hidden", "none"];

/// Map a bare utility (no modifiers, no `!`, no leading `-`) to its group.
fn classify(utility: &str) -> Option<&'static str> {
    if DISPLAY.contains(&utility) {
        return Some("display");
    }
    if POSITION.contains(&utility) {
        return Some("position");
    }

    match utility {
        "visible" | "invisible" | "collapse" => return Some("visibility"),
        "truncate" => return Some("text-overflow"),
        "italic" | "not-italic" => return Some("font-style"),
        "underline" | "overline" | "line-through" | "no-underline" => {
            return Some("text-decoration")
        }
        "uppercase" | "lowercase" | "capitalize" | "normal-case" => {
            return Some("text-transform")
        }
        "shadow" => return Some("shadow"),
        "rounded" => return Some("rounded"),
        "border" => return Some("border-w"),
        "grow" => return Some("grow"),
        "shrink" => return Some("shrink"),
        "transition" => return Some("transition"),
        _ => {}
    }

    // Prefixes whose value decides the group
    if let Some(value) = utility.strip_prefix("text-") {
        return Some(classify_text(value));
    }
    if let Some(value) = utility.strip_prefix("font-") {
        return Some(if FONT_WEIGHTS.contains(&value) {
            "font-weight"
        } else {
            "font-family"
        });
    }
    if let Some(value) = utility.strip_prefix("bg-") {
        return Some(classify_bg(value));
    }
    if let Some(value) = utility.strip_prefix("border-") {
        return Some(classify_border(value));
    }
    if let Some(value) = utility.strip_prefix("rounded-") {
        let corner = value.split('-').next().unwrap_or(value);
        return Some(rounded_group(corner).unwrap_or("rounded"));
    }
    if let Some(value) = utility.strip_prefix("shadow-") {
        return Some(if SHADOW_SIZES.contains(&value) {
            "shadow"
        } else {
            "shadow-color"
        });
    }
    if let Some(value) = utility.strip_prefix("flex-") {
        return Some(match value {
            "row" | "row-reverse" | "col" | "col-reverse" => "flex-direction",
            "wrap" | "wrap-reverse" | "nowrap" => "flex-wrap",
            _ => "flex",
        });
    }
    if let Some(value) = utility.strip_prefix("object-") {
        return Some(match value {
            "contain" | "cover" | "fill" | "none" | "scale-down" => "object-fit",
            _ => "object-position",
        });
    }
    if let Some(value) = utility.strip_prefix("from-") {
        return Some(if is_percentage(value) {
            "gradient-from-position"
        } else {
            "gradient-from"
        });
    }
    if let Some(value) = utility.strip_prefix("to-") {
        return Some(if is_percentage(value) {
            "gradient-to-position"
        } else {
            "gradient-to"
        });
    }

    // Plain prefix families, longest prefixes first
    const PREFIXES: &[(&str, &str)] = &[
        ("justify-items-", "justify-items"),
        ("justify-self-", "justify-self"),
        ("pointer-events-", "pointer-events"),
        ("overflow-x-", "overflow-x"),
        ("overflow-y-", "overflow-y"),
        ("line-clamp-", "line-clamp"),
        ("whitespace-", "whitespace"),
        ("grid-cols-", "grid-cols"),
        ("grid-rows-", "grid-rows"),
        ("grid-flow-", "grid-flow"),
        ("col-span-", "col-span"),
        ("row-span-", "row-span"),
        ("inset-x-", "inset-x"),
        ("inset-y-", "inset-y"),
        ("space-x-", "space-x"),
        ("space-y-", "space-y"),
        ("overflow-", "overflow"),
        ("opacity-", "opacity"),
        ("justify-", "justify-content"),
        ("content-", "align-content"),
        ("tracking-", "tracking"),
        ("leading-", "leading"),
        ("aspect-", "aspect"),
        ("cursor-", "cursor"),
        ("select-", "select"),
        ("min-w-", "min-w"),
        ("min-h-", "min-h"),
        ("max-w-", "max-w"),
        ("max-h-", "max-h"),
        ("inset-", "inset"),
        ("bottom-", "bottom"),
        ("right-", "right"),
        ("start-", "start"),
        ("items-", "align-items"),
        ("basis-", "basis"),
        ("order-", "order"),
        ("grow-", "grow"),
        ("shrink-", "shrink"),
        ("gap-x-", "gap-x"),
        ("gap-y-", "gap-y"),
        ("gap-", "gap"),
        ("self-", "align-self"),
        ("size-", "size"),
        ("left-", "left"),
        ("top-", "top"),
        ("end-", "end"),
        ("via-", "gradient-via"),
        ("z-", "z"),
        ("w-", "w"),
        ("h-", "h"),
        ("px-", "px"),
        ("py-", "py"),
        ("ps-", "ps"),
        ("pe-", "pe"),
        ("pt-", "pt"),
        ("pr-", "pr"),
        ("pb-", "pb"),
        ("pl-", "pl"),
        ("p-", "p"),
        ("mx-", "mx"),
        ("my-", "my"),
        ("ms-", "ms"),
        ("me-", "me"),
        ("mt-", "mt"),
        ("mr-", "mr"),
        ("mb-", "mb"),
        ("ml-", "ml"),
        ("m-", "m"),
    ];

    PREFIXES
        .iter()
        .find(|(prefix, _)| utility.starts_with(prefix) && utility.len() > prefix.len())
        .map(|(_, group)| *group)
}

fn classify_text(value: &str) -> &'static str {
    if FONT_SIZES.contains(&value) {
        return "font-size";
    }
    match value {
        "left" | "center" | "right" | "justify" | "start" | "end" => "text-align",
        "ellipsis" | "clip" => "text-overflow",
        "wrap" | "nowrap" | "balance" | "pretty" => "text-wrap",
        _ => match arbitrary(value) {
            Some(inner) if is_length(inner) => "font-size",
            _ => "text-color",
        },
    }
}

fn classify_bg(value: &str) -> &'static str {
    if value.starts_with("linear-")
        || value.starts_with("gradient-")
        || value.starts_with("radial")
        || value.starts_with("conic")
        || value == "none"
    {
        return "bg-image";
    }
    match value {
        "fixed" | "local" | "scroll" => "bg-attachment",
        "auto" | "cover" | "contain" => "bg-size",
        "center" | "top" | "bottom" | "left" | "right" | "left-top" | "left-bottom"
        | "right-top" | "right-bottom" => "bg-position",
        "repeat" | "no-repeat" | "repeat-x" | "repeat-y" | "repeat-round" | "repeat-space" => {
            "bg-repeat"
        }
        _ if value.starts_with("clip-") => "bg-clip",
        _ => "bg-color",
    }
}

fn classify_border(value: &str) -> &'static str {
    if BORDER_STYLES.contains(&value) {
        return "border-style";
    }
    if is_width(value) {
        return "border-w";
    }
    if let Some(group) = border_side(value) {
        return group.0;
    }
    if let Some((side, rest)) = value.split_once('-') {
        if let Some((width, colour)) = border_side(side) {
            return if is_width(rest) { width } else { colour };
        }
    }
    "border-color"
}

/// Width and colour groups for one border side
fn border_side(side: &str) -> Option<(&'static str, &'static str)> {
    Some(match side {
        "x" => ("border-w-x", "border-color-x"),
        "y" => ("border-w-y", "border-color-y"),
        "s" => ("border-w-s", "border-color-s"),
        "e" => ("border-w-e", "border-color-e"),
        "t" => ("border-w-t", "border-color-t"),
        "r" => ("border-w-r", "border-color-r"),
        "b" => ("border-w-b", "border-color-b"),
        "l" => ("border-w-l", "border-color-l"),
        _ => return None,
    })
}

fn rounded_group(corner: &str) -> Option<&'static str> {
    Some(match corner {
        "s" => "rounded-s",
        "e" => "rounded-e",
        "t" => "rounded-t",
        "r" => "rounded-r",
        "b" => "rounded-b",
        "l" => "rounded-l",
        "ss" => "rounded-ss",
        "se" => "rounded-se",
        "ee" => "rounded-ee",
        "es" => "rounded-es",
        "tl" => "rounded-tl",
        "tr" => "rounded-tr",
        "br" => "rounded-br",
        "bl" => "rounded-bl",
        _ => return None,
    })
}

fn is_width(value: &str) -> bool {
    if value.chars().all(|c| c.is_ascii_digit()) && !value.is_empty() {
        return true;
    }
    matches!(arbitrary(value), Some(inner) if is_length(inner))
}

fn is_percentage(value: &str) -> bool {
    value
        .strip_suffix('%')
        .map(|n| !n.is_empty() && n.chars().all(|c| c.is_ascii_digit()))
        .unwrap_or(false)
}

fn arbitrary(value: &str) -> Option<&str> {
    value.strip_prefix('[').and_then(|v| v.strip_suffix(']'))
}

fn is_length(inner: &str) -> bool {
    if let Some(rest) = inner.strip_prefix("length:") {
        return !rest.is_empty();
    }
    if inner.starts_with("color:") || inner.starts_with('#') {
        return false;
    }
    if inner.starts_with("calc(") || inner.starts_with("clamp(") {
        return true;
    }
    const UNITS: &[&str] = &["px", "rem", "em", "%", "vh", "vw", "svh", "dvh", "ch", "pt"];
    UNITS.iter().any(|unit| {
        inner
            .strip_suffix(unit)
            .map(|n| !n.is_empty() && n.chars().all(|c| c.is_ascii_digit() || c == '.'))
            .unwrap_or(false)
    })
}
