#![forbid(unsafe_code)]

//! Style assembly: resolved tokens to the modal's declarative rule groups.
//!
//! [`assemble_styles`] produces the groups in a fixed order; later groups
//! may override earlier ones for the same selector when the sequence is
//! flattened. The order is part of the contract:
//!
//! 1. Root motion entries (zoom enter/appear reset, leave suppression).
//! 2. Mask overlay.
//! 3. Base panel layout (wrap, centered trick, breakpoint, geometry, RTL).
//! 4. Pure panel variant.
//! 5. Resize-mode override group (wins over base by ordering alone).
//! 6. RTL restatement for the confirm-body sub-region.
//!
//! Zero-valued tokens still emit their property; omission would let a
//! different rule group's value bleed through.

use crate::length::Length;
use crate::rules::RuleGroup;
use crate::token::{Border, ModalTokens};

/// Structural class prefix used when none is supplied.
pub const DEFAULT_PREFIX_CLS: &str = "scrim-modal";

fn border_or_none(border: Option<&Border>) -> String {
    border.map_or_else(|| "none".to_owned(), Border::resolve)
}

fn motion_group(tokens: &ModalTokens, p: &str) -> RuleGroup {
    RuleGroup::new(format!("{p}-root"))
        .nest(
            RuleGroup::new(format!("{p}.zoom-enter, {p}.zoom-appear"))
                .decl("transform", "none")
                .decl("opacity", 0.0)
                .decl("animation-duration", tokens.motion_duration_slow.resolve())
                .decl("user-select", "none"),
        )
        .nest(
            RuleGroup::new(format!("{p}.zoom-leave {p}-content"))
                .decl("pointer-events", "none"),
        )
}

fn mask_group(tokens: &ModalTokens, p: &str) -> RuleGroup {
    RuleGroup::new(format!("{p}-mask"))
        .decl("position", "fixed")
        .decl("inset", Length::ZERO)
        .decl("height", Length::percent(100.0))
        .decl("z-index", tokens.z_index_popup_base)
        .decl("background-color", tokens.color_bg_mask.clone())
        .nest(RuleGroup::new("&-hidden").decl("display", "none"))
}

fn base_group(tokens: &ModalTokens, p: &str) -> RuleGroup {
    let c = &tokens.component;
    let radius = tokens.border_radius_lg.as_px();

    let header = RuleGroup::new("&-header")
        .decl("background", c.header_bg.clone())
        .decl("padding", c.header_padding.resolve())
        .decl("border-bottom", border_or_none(c.header_border_bottom.as_ref()))
        .decl("border-radius", format!("{radius} {radius} 0 0"))
        .decl("margin-bottom", c.header_margin_bottom)
        .decl("color", c.title_color.clone())
        .decl("font-weight", f64::from(tokens.font_weight_strong))
        .decl("font-size", c.title_font_size.as_px())
        .decl("line-height", c.title_line_height);

    let content = RuleGroup::new("&-content")
        .decl("position", "relative")
        .decl("background-color", c.content_bg.clone())
        .decl("border-radius", radius)
        .decl("box-shadow", tokens.box_shadow.clone())
        .decl("padding", c.content_padding.resolve())
        .decl("pointer-events", "auto");

    let body = RuleGroup::new("&-body")
        .decl("font-size", tokens.font_size)
        .decl("line-height", tokens.line_height)
        .decl("word-wrap", "break-word");

    let footer = RuleGroup::new("&-footer")
        .decl("background", c.footer_bg.clone())
        .decl("padding", c.footer_padding.resolve())
        .decl("border-top", border_or_none(c.footer_border_top.as_ref()))
        .decl(
            "border-radius",
            format!("0 0 {} {}", c.footer_border_radius.as_px(), c.footer_border_radius.as_px()),
        )
        .decl("margin-top", c.footer_margin_top)
        .decl("text-align", "end");

    let close = RuleGroup::new("&-close")
        .decl("position", "absolute")
        .decl("top", tokens.close_btn_inset)
        .decl("inset-inline-end", tokens.close_btn_inset)
        .decl("width", tokens.close_btn_size)
        .decl("height", tokens.close_btn_size)
        .decl("color", tokens.color_icon.clone())
        .decl("background-color", "transparent")
        .decl("border-radius", tokens.border_radius_sm)
        .decl("cursor", "pointer")
        .nest(
            RuleGroup::new("&:hover")
                .decl("color", tokens.color_icon_hover.clone())
                .decl("background-color", tokens.color_bg_text_hover.clone()),
        )
        .nest(
            RuleGroup::new("&:active")
                .decl("background-color", tokens.color_bg_text_active.clone()),
        )
        .nest(
            RuleGroup::new(format!("& {p}-close-icon"))
                .decl("font-size", tokens.close_icon_size),
        );

    // Centered mode: inline-block panel aligned against a full-height
    // zero-width pseudo element.
    let centered = RuleGroup::new(format!("{p}-wrap-centered"))
        .decl("text-align", "center")
        .nest(
            RuleGroup::new("&::before")
                .decl("display", "inline-block")
                .decl("width", Length::ZERO)
                .decl("height", Length::percent(100.0))
                .decl("vertical-align", "middle")
                .decl("content", "\"\""),
        )
        .nest(
            RuleGroup::new(format!("& {p}"))
                .decl("top", Length::ZERO)
                .decl("display", "inline-block")
                .decl("padding-bottom", Length::ZERO)
                .decl("text-align", "start")
                .decl("vertical-align", "middle"),
        );

    let breakpoint = RuleGroup::new(format!(
        "@media (max-width: {})",
        tokens.screen_sm_max.as_px()
    ))
    .nest(
        RuleGroup::new(p)
            .decl("max-width", "calc(100vw - 16px)")
            .decl("margin", "8px auto"),
    );

    RuleGroup::new(p)
        .decl("position", "relative")
        .decl("top", Length::px(100.0))
        .decl("width", "auto")
        .decl("max-width", "calc(100vw - 32px)")
        .decl("margin", "0 auto")
        .decl("padding-bottom", tokens.margin_lg)
        .decl("color", tokens.color_text.clone())
        .nest(header)
        .nest(content)
        .nest(body)
        .nest(footer)
        .nest(close)
        .nest(
            RuleGroup::new(format!("{p}-wrap"))
                .decl("position", "fixed")
                .decl("inset", Length::ZERO)
                .decl("overflow", "auto")
                .decl("outline", Length::ZERO)
                .decl("-webkit-overflow-scrolling", "touch"),
        )
        .nest(RuleGroup::new(format!("{p}-wrap-rtl")).decl("direction", "rtl"))
        .nest(centered)
        .nest(breakpoint)
}

fn pure_panel_group(p: &str) -> RuleGroup {
    RuleGroup::new(format!("{p}-pure-panel"))
        .decl("top", "auto")
        .decl("padding", Length::ZERO)
        .decl("display", "flex")
        .decl("flex-direction", "column")
        .nest(
            RuleGroup::new(format!("& {p}-content"))
                .decl("display", "flex")
                .decl("flex-direction", "column")
                .decl("flex", "auto"),
        )
}

fn resize_group(p: &str) -> RuleGroup {
    RuleGroup::new(format!("{p}-resize-wrapper"))
        .decl("position", "static")
        .decl("width", Length::percent(100.0))
        .decl("height", Length::percent(100.0))
        .nest(
            RuleGroup::new(format!("& {p}"))
                .decl("position", "static")
                .decl("top", Length::ZERO)
                .decl("width", Length::percent(100.0))
                .decl("height", Length::percent(100.0))
                .decl("margin", Length::ZERO)
                .decl("padding-bottom", Length::ZERO)
                .decl("max-width", "none"),
        )
        .nest(
            RuleGroup::new(format!("& {p}-content"))
                .decl("height", Length::percent(100.0))
                .decl("display", "flex")
                .decl("flex-direction", "column"),
        )
        .nest(RuleGroup::new(format!("& {p}-header")).decl("flex", "0 0 auto"))
        .nest(
            RuleGroup::new(format!("& {p}-body"))
                .decl("flex", "1 1 auto")
                .decl("overflow", "auto"),
        )
        .nest(RuleGroup::new(format!("& {p}-footer")).decl("flex", "0 0 auto"))
}

// Kept as its own trailing group on purpose: the sub-region restates the
// direction rather than inheriting it from the wrap-level flip.
fn rtl_confirm_group(p: &str) -> RuleGroup {
    RuleGroup::new(format!("{p}-wrap-rtl"))
        .nest(RuleGroup::new(format!("& {p}-confirm-body")).decl("direction", "rtl"))
}

/// Assemble the ordered style description for the given resolved tokens.
///
/// Pure and stateless: a fresh description is produced on every call and
/// two calls with equal tokens yield deep-equal output.
#[must_use]
pub fn assemble_styles(tokens: &ModalTokens) -> Vec<RuleGroup> {
    assemble_styles_with_prefix(tokens, DEFAULT_PREFIX_CLS)
}

/// [`assemble_styles`] with a caller-chosen structural class prefix.
#[must_use]
pub fn assemble_styles_with_prefix(tokens: &ModalTokens, prefix_cls: &str) -> Vec<RuleGroup> {
    let p = format!(".{prefix_cls}");
    vec![
        motion_group(tokens, &p),
        mask_group(tokens, &p),
        base_group(tokens, &p),
        pure_panel_group(&p),
        resize_group(&p),
        rtl_confirm_group(&p),
    ]
}
