//! Card variant dispatch.
//!
//! [`dispatch`] turns a [`CardRecord`] into a fully styled view model:
//! a compact pill for `sm`, a preview + detail pair for `md`, and nothing
//! for anything else. The UI layer only lays these out.

use super::cta::{resolve_cta, CallToAction};
use super::thumbnail::{resolve_thumbnail, Thumbnail, ThumbnailRequest};
use super::RenderContext;
use crate::currency::DEFAULT_CURRENCY;
use crate::theme::{ButtonPosition, Category, ClassList, Scope, Size, SubElement, ThemeResolver};
use crate::types::{CardRecord, LinkTarget, MediumCard, SmallCard, ThumbnailSource};

const SMALL_CARD_BASE: &str =
    "p-2 min-h-14 rounded-full h-auto w-full relative text-center flex items-center gap-4 text-inherit";
const CTA_BUTTON_BASE: &str = "w-full whitespace-normal h-auto";
const DETAIL_FADE_BASE: &str = "bg-linear-to-b h-[300px] min-h-[300px] max-h-[300px] -mt-[250px] sticky w-full bottom-17 inset-0 z-10 from-transparent from-80% select-none pointer-events-none";

#[derive(Debug, Clone, PartialEq)]
pub enum CardView {
    Compact(CompactCardView),
    Medium(Box<MediumCardView>),
    /// Unsupported size; render nothing
    Nothing,
}

impl CardView {
    pub fn variant(&self) -> &'static str {
        match self {
            CardView::Compact(_) => "compact",
            CardView::Medium(_) => "preview",
            CardView::Nothing => "none",
        }
    }
}

/// Single-row pill; the whole row is the anchor
#[derive(Debug, Clone, PartialEq)]
pub struct CompactCardView {
    pub href: Option<String>,
    pub target: LinkTarget,
    pub class: String,
    pub thumbnail: Thumbnail,
    pub title: String,
    pub title_class: &'static str,
}

/// Call-to-action with its resolved styling
#[derive(Debug, Clone, PartialEq)]
pub struct CtaView {
    pub action: CallToAction,
    pub label: String,
    pub anchor_class: &'static str,
    pub button_class: String,
}

/// Closed, two-column preview surface
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewCardView {
    pub class: String,
    pub content_class: String,
    pub thumbnail: Thumbnail,
    pub title: String,
    pub header_class: String,
    pub description: String,
    pub body_class: String,
    pub price: Option<String>,
    pub price_class: String,
    pub cta: Option<CtaView>,
    pub button_position: ButtonPosition,
}

/// Open detail surface shown inside the drawer
#[derive(Debug, Clone, PartialEq)]
pub struct DetailCardView {
    pub class: String,
    pub thumbnail: Thumbnail,
    pub content_class: String,
    pub title: String,
    pub price: Option<String>,
    pub description: String,
    pub body_class: String,
    pub fade_class: String,
    pub footer_class: String,
    pub cta: Option<CtaView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MediumCardView {
    pub title: String,
    pub preview: PreviewCardView,
    pub detail: DetailCardView,
    pub drawer_class: String,
}

/// Overlay behind the open drawer
pub fn overlay_class(open: bool) -> String {
    ClassList::new()
        .with("absolute inset-0 bg-black/70 z-10")
        .with(if open {
            "animate-in fade-in-0 duration-300"
        } else {
            "opacity-0"
        })
        .merge()
}

pub fn dispatch(card: &CardRecord, ctx: &RenderContext<'_>) -> CardView {
    match card {
        CardRecord::Small(card) => CardView::Compact(compact_view(card, &ctx.theme)),
        CardRecord::Medium(card) => CardView::Medium(Box::new(medium_view(card, ctx))),
        CardRecord::Unsupported { size } => {
            tracing::warn!(size = ?size, "Unsupported card size, rendering nothing");
            CardView::Nothing
        }
    }
}

fn links(size: Size, element: SubElement) -> Scope {
    Scope::new(Category::Links).size(size).element(element)
}

fn compact_view(card: &SmallCard, theme: &ThemeResolver<'_>) -> CompactCardView {
    let source = ThumbnailSource::new(card.thumbnail_image.as_deref(), card.thumbnail_emoji.as_deref());

    CompactCardView {
        href: card.url.clone(),
        target: LinkTarget::from_new_tab(card.new_tab),
        class: ClassList::new()
            .with("sm-card-background")
            .with(SMALL_CARD_BASE)
            .with_opt(theme.class_name(&links(Size::Sm, SubElement::Background)))
            .merge(),
        thumbnail: resolve_thumbnail(theme, ThumbnailRequest::new(source, &card.title, Size::Sm)),
        title: card.title.clone(),
        title_class: "w-full mr-auto",
    }
}

fn medium_view(card: &MediumCard, ctx: &RenderContext<'_>) -> MediumCardView {
    let theme = &ctx.theme;
    let price = card.price.map(|amount| {
        let currency = card.currency.as_deref().unwrap_or(DEFAULT_CURRENCY);
        ctx.currency.format(amount, currency)
    });
    let container = theme.class_name(&Scope::new(Category::Container));

    MediumCardView {
        title: card.title.clone(),
        preview: preview_view(card, theme, price.clone()),
        detail: detail_view(card, theme, price, container.as_deref()),
        drawer_class: ClassList::new()
            .with("md-card-background")
            .with("max-h-[98svh]")
            .with_opt(container.as_deref())
            .with_opt(theme.class_name(&links(Size::Md, SubElement::Background)))
            .merge(),
    }
}

fn cta_view(
    card: &MediumCard,
    theme: &ThemeResolver<'_>,
    hook: Option<&str>,
    preview: bool,
    anchor_class: &'static str,
) -> Option<CtaView> {
    let action = resolve_cta(card)?;
    let button_class = ClassList::new()
        .with_opt(hook)
        .with(CTA_BUTTON_BASE)
        .with_opt(theme.class_name(&Scope::new(Category::Font).element(SubElement::Button)))
        .with_opt(theme.class_name(&links(Size::Md, SubElement::Button).preview(preview)))
        .merge();

    Some(CtaView {
        action,
        label: card.button_text.clone(),
        anchor_class,
        button_class,
    })
}

fn preview_view(card: &MediumCard, theme: &ThemeResolver<'_>, price: Option<String>) -> PreviewCardView {
    let source = ThumbnailSource::new(card.thumbnail_image.as_deref(), card.thumbnail_emoji.as_deref());
    let scoped = |element| links(Size::Md, element).preview(true);
    let body_theme = theme.class_name(&scoped(SubElement::FontBody));

    PreviewCardView {
        class: ClassList::new()
            .with("md-card-preview-background")
            .with("p-3 w-full")
            .with_opt(theme.class_name(&scoped(SubElement::Background)))
            .merge(),
        content_class: ClassList::new()
            .with("md-card-preview-content")
            .with("p-0 w-full relative grid grid-cols-[1fr_2fr] gap-4 text-inherit")
            .with_opt(theme.class_name(&scoped(SubElement::Content)))
            .merge(),
        thumbnail: resolve_thumbnail(
            theme,
            ThumbnailRequest::new(source, &card.title, Size::Md).preview(true),
        ),
        title: card.title.clone(),
        header_class: ClassList::new()
            .with("md-card-preview-header")
            .with_opt(theme.class_name(&scoped(SubElement::FontHeader)))
            .merge(),
        description: card.description.clone(),
        body_class: ClassList::new()
            .with("md-card-preview-body")
            .with("line-clamp-2 text-ellipsis")
            .with_opt(body_theme.as_deref())
            .merge(),
        price,
        price_class: ClassList::new()
            .with("md-card-preview-body")
            .with_opt(body_theme.as_deref())
            .merge(),
        cta: cta_view(card, theme, None, true, "mt-auto w-full"),
        button_position: theme
            .button_position(&Scope::new(Category::Links).size(Size::Md).preview(true))
            .unwrap_or_default(),
    }
}

fn detail_view(
    card: &MediumCard,
    theme: &ThemeResolver<'_>,
    price: Option<String>,
    container: Option<&str>,
) -> DetailCardView {
    let source = ThumbnailSource::new(card.thumbnail_image.as_deref(), card.thumbnail_emoji.as_deref());
    let fade_to = theme.theme().color("primary").map(|c| format!("to-[{}]", c));

    DetailCardView {
        class: ClassList::new()
            .with("md-card-background")
            .with("w-full min-h-[350px] flex flex-col")
            .with_opt(theme.class_name(&links(Size::Md, SubElement::Background)))
            .merge(),
        thumbnail: resolve_thumbnail(
            theme,
            ThumbnailRequest::new(source, &card.title, Size::Md).class("w-full h-[250px] object-cover"),
        ),
        content_class: ClassList::new()
            .with("md-card-content")
            .with("px-0 mt-8 w-full relative flex-1 flex flex-col items-start text-inherit overflow-auto pb-0")
            .with_opt(theme.class_name(&links(Size::Md, SubElement::Content)))
            .merge(),
        title: card.title.clone(),
        price,
        description: card.description.clone(),
        body_class: ClassList::new()
            .with("md-card-body")
            .with("text-balance")
            .with_opt(theme.class_name(&links(Size::Md, SubElement::FontBody)))
            .merge(),
        fade_class: ClassList::new().with(DETAIL_FADE_BASE).with_opt(fade_to).merge(),
        footer_class: ClassList::new()
            .with("sticky bottom-0 pb-8 w-full z-20")
            .with_opt(container)
            .merge(),
        cta: cta_view(card, theme, Some("md-card-button"), false, "contents"),
    }
}
