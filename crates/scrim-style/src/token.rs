#![forbid(unsafe_code)]

//! Design-token derivation for the modal dialog.
//!
//! Three layers, derived strictly left to right:
//!
//! 1. [`GlobalTokens`] — the independent design-system values. Produced by
//!    the theming subsystem, immutable per theme activation, read-only here.
//! 2. [`ComponentTokens`] — semantic tokens for the modal (header
//!    background, content padding, separators). Every entry is either
//!    copied verbatim from a global token or selected by the single
//!    `wireframe` switch; both switch values yield a fully consistent set.
//! 3. [`ModalTokens`] — the resolved set consumed by the style assembler:
//!    the union of the two layers plus geometry computed by arithmetic
//!    over typography and spacing tokens.
//!
//! Invariants:
//! - Derivation is pure: the same inputs always produce deep-equal output.
//! - No derived value is produced by string-parsing prior output.
//! - Changing one base token propagates to every token computed from it
//!   (e.g. `header_height` moves by exactly `Δfont_size × line_height`).

use crate::length::Length;

/// A border separator token (width + line style + color).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Border {
    pub width: Length,
    pub line_type: String,
    pub color: String,
}

impl Border {
    /// Printable CSS shorthand, e.g. `1px solid rgba(5, 5, 5, 0.06)`.
    #[must_use]
    pub fn resolve(&self) -> String {
        format!("{} {} {}", self.width.as_px(), self.line_type, self.color)
    }
}

/// Vertical/horizontal padding pair.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PaddingPair {
    pub vertical: Length,
    pub horizontal: Length,
}

impl PaddingPair {
    #[must_use]
    pub const fn new(vertical: Length, horizontal: Length) -> Self {
        Self {
            vertical,
            horizontal,
        }
    }

    pub const ZERO: Self = Self::new(Length::ZERO, Length::ZERO);

    /// Printable CSS shorthand, e.g. `20px 24px`.
    #[must_use]
    pub fn resolve(&self) -> String {
        format!("{} {}", self.vertical.as_px(), self.horizontal.as_px())
    }
}

/// The global design-token set this component reads.
///
/// Lengths and durations are dimensionless f64 values in px/ms convention;
/// colors are resolved CSS color strings.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GlobalTokens {
    // Typography
    pub font_size: f64,
    pub font_size_lg: f64,
    pub font_size_heading5: f64,
    pub line_height: f64,
    pub line_height_heading5: f64,
    pub font_weight_strong: u16,

    // Spacing
    pub padding_xs: f64,
    pub padding_sm: f64,
    pub padding: f64,
    pub padding_md: f64,
    pub padding_lg: f64,
    pub padding_content_horizontal_lg: f64,
    pub margin_xs: f64,
    pub margin_sm: f64,
    pub margin_lg: f64,

    // Colors
    pub color_bg_elevated: String,
    pub color_bg_mask: String,
    pub color_text: String,
    pub color_text_heading: String,
    pub color_text_description: String,
    pub color_icon: String,
    pub color_icon_hover: String,
    pub color_bg_text_hover: String,
    pub color_bg_text_active: String,
    pub color_split: String,

    // Borders and radii
    pub line_width: f64,
    pub line_type: String,
    pub border_radius_lg: f64,
    pub border_radius_sm: f64,
    pub box_shadow: String,

    // Motion (milliseconds)
    pub motion_duration_slow: f64,

    // Layout
    pub screen_sm_max: f64,
    pub z_index_popup_base: i32,

    /// Theme mode switch: border-only chrome instead of filled chrome.
    pub wireframe: bool,
}

impl Default for GlobalTokens {
    fn default() -> Self {
        Self {
            font_size: 14.0,
            font_size_lg: 16.0,
            font_size_heading5: 16.0,
            line_height: 22.0 / 14.0,
            line_height_heading5: 1.5,
            font_weight_strong: 600,

            padding_xs: 8.0,
            padding_sm: 12.0,
            padding: 16.0,
            padding_md: 20.0,
            padding_lg: 24.0,
            padding_content_horizontal_lg: 24.0,
            margin_xs: 8.0,
            margin_sm: 12.0,
            margin_lg: 24.0,

            color_bg_elevated: "#ffffff".into(),
            color_bg_mask: "rgba(0, 0, 0, 0.45)".into(),
            color_text: "rgba(0, 0, 0, 0.88)".into(),
            color_text_heading: "rgba(0, 0, 0, 0.88)".into(),
            color_text_description: "rgba(0, 0, 0, 0.45)".into(),
            color_icon: "rgba(0, 0, 0, 0.45)".into(),
            color_icon_hover: "rgba(0, 0, 0, 0.88)".into(),
            color_bg_text_hover: "rgba(0, 0, 0, 0.06)".into(),
            color_bg_text_active: "rgba(0, 0, 0, 0.15)".into(),
            color_split: "rgba(5, 5, 5, 0.06)".into(),

            line_width: 1.0,
            line_type: "solid".into(),
            border_radius_lg: 8.0,
            border_radius_sm: 4.0,
            box_shadow: "0 6px 16px 0 rgba(0, 0, 0, 0.08), 0 3px 6px -4px rgba(0, 0, 0, 0.12), 0 9px 28px 8px rgba(0, 0, 0, 0.05)".into(),

            motion_duration_slow: 300.0,

            screen_sm_max: 767.0,
            z_index_popup_base: 1000,

            wireframe: false,
        }
    }
}

/// Component-level semantic tokens, one consistent value set per mode.
///
/// Filled mode: background-filled header/footer, generous content padding,
/// whitespace separation (margins), no border separators.
/// Wireframe mode: transparent header/footer fill, zero content padding,
/// padded header/footer regions separated by borders.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComponentTokens {
    pub content_bg: String,
    pub header_bg: String,
    pub footer_bg: String,
    pub title_color: String,
    pub title_font_size: Length,
    pub title_line_height: Length,
    pub content_padding: PaddingPair,
    pub header_padding: PaddingPair,
    pub header_border_bottom: Option<Border>,
    pub header_margin_bottom: Length,
    pub footer_padding: PaddingPair,
    pub footer_border_top: Option<Border>,
    pub footer_border_radius: Length,
    pub footer_margin_top: Length,
}

/// Derive the component-level token set from the global one.
///
/// Pure: reads nothing but `global`. The `wireframe` switch selects every
/// mode-dependent value at once; there is no partial application.
#[must_use]
pub fn derive_component_tokens(global: &GlobalTokens) -> ComponentTokens {
    let separator = Border {
        width: Length::px(global.line_width),
        line_type: global.line_type.clone(),
        color: global.color_split.clone(),
    };
    let wireframe = global.wireframe;

    ComponentTokens {
        content_bg: global.color_bg_elevated.clone(),
        header_bg: if wireframe {
            "transparent".into()
        } else {
            global.color_bg_elevated.clone()
        },
        footer_bg: if wireframe {
            "transparent".into()
        } else {
            global.color_bg_elevated.clone()
        },
        title_color: global.color_text_heading.clone(),
        title_font_size: Length::raw(global.font_size_heading5),
        title_line_height: Length::raw(global.line_height_heading5),
        content_padding: if wireframe {
            PaddingPair::ZERO
        } else {
            PaddingPair::new(
                Length::px(global.padding_md),
                Length::px(global.padding_content_horizontal_lg),
            )
        },
        header_padding: if wireframe {
            PaddingPair::new(Length::px(global.padding), Length::px(global.padding_lg))
        } else {
            PaddingPair::ZERO
        },
        header_border_bottom: wireframe.then(|| separator.clone()),
        header_margin_bottom: if wireframe {
            Length::ZERO
        } else {
            Length::px(global.margin_xs)
        },
        footer_padding: if wireframe {
            PaddingPair::new(Length::px(global.padding_xs), Length::px(global.padding))
        } else {
            PaddingPair::ZERO
        },
        footer_border_top: wireframe.then_some(separator),
        footer_border_radius: if wireframe {
            Length::px(global.border_radius_lg)
        } else {
            Length::ZERO
        },
        footer_margin_top: if wireframe {
            Length::ZERO
        } else {
            Length::px(global.margin_sm)
        },
    }
}

/// The fully resolved token set consumed by the style assembler.
///
/// Union of the global and component layers plus computed geometry.
/// Recomputed on every theme change, never mutated in place.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModalTokens {
    pub component: ComponentTokens,

    // Globals the assembler reads directly.
    pub font_size: Length,
    pub line_height: Length,
    pub font_weight_strong: u16,
    pub color_text: String,
    pub color_text_description: String,
    pub color_icon: String,
    pub color_icon_hover: String,
    pub color_bg_text_hover: String,
    pub color_bg_text_active: String,
    pub color_bg_mask: String,
    pub border_radius_lg: Length,
    pub border_radius_sm: Length,
    pub box_shadow: String,
    pub motion_duration_slow: Length,
    pub screen_sm_max: Length,
    pub z_index_popup_base: i32,
    pub margin_lg: Length,

    // Computed geometry.
    /// `title_line_height × title_font_size + 2 × header_padding_vertical`.
    pub header_height: Length,
    /// Close-button hit box: `font_size × line_height`.
    pub close_btn_size: Length,
    /// Inset centering the close button inside the header band.
    pub close_btn_inset: Length,
    /// Close icon glyph size.
    pub close_icon_size: Length,
}

/// Derive the resolved token set from the global and component layers.
///
/// Geometry composes typography and spacing tokens arithmetically; each
/// result carries the unit produced by the combination.
#[must_use]
pub fn derive_resolved_tokens(
    global: &GlobalTokens,
    component: &ComponentTokens,
) -> ModalTokens {
    let title_text_height = component
        .title_font_size
        .as_px()
        .mul(component.title_line_height.magnitude);
    let header_height = title_text_height.add(component.header_padding.vertical.mul(2.0));

    let close_btn_size = Length::px(global.font_size).mul(global.line_height);
    let close_btn_inset = header_height.sub(close_btn_size).div(2.0);

    ModalTokens {
        component: component.clone(),

        font_size: Length::px(global.font_size),
        line_height: Length::raw(global.line_height),
        font_weight_strong: global.font_weight_strong,
        color_text: global.color_text.clone(),
        color_text_description: global.color_text_description.clone(),
        color_icon: global.color_icon.clone(),
        color_icon_hover: global.color_icon_hover.clone(),
        color_bg_text_hover: global.color_bg_text_hover.clone(),
        color_bg_text_active: global.color_bg_text_active.clone(),
        color_bg_mask: global.color_bg_mask.clone(),
        border_radius_lg: Length::px(global.border_radius_lg),
        border_radius_sm: Length::px(global.border_radius_sm),
        box_shadow: global.box_shadow.clone(),
        motion_duration_slow: Length::ms(global.motion_duration_slow),
        screen_sm_max: Length::px(global.screen_sm_max),
        z_index_popup_base: global.z_index_popup_base,
        margin_lg: Length::px(global.margin_lg),

        header_height,
        close_btn_size,
        close_btn_inset,
        close_icon_size: Length::px(global.font_size_lg),
    }
}

/// Convenience: both derivation steps in one call.
#[must_use]
pub fn resolve_tokens(global: &GlobalTokens) -> ModalTokens {
    let component = derive_component_tokens(global);
    derive_resolved_tokens(global, &component)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn derivation_is_deterministic() {
        let global = GlobalTokens::default();
        let a = resolve_tokens(&global);
        let b = resolve_tokens(&global);
        assert_eq!(a, b);
    }

    #[test]
    fn header_height_formula() {
        let global = GlobalTokens {
            wireframe: true,
            ..GlobalTokens::default()
        };
        let tokens = resolve_tokens(&global);
        let expected = global.line_height_heading5 * global.font_size_heading5
            + 2.0 * global.padding;
        assert_eq!(tokens.header_height, Length::px(expected));
    }

    #[test]
    fn filled_mode_header_height_is_text_height() {
        // Filled mode has no header padding; the band is the title text.
        let tokens = resolve_tokens(&GlobalTokens::default());
        assert_eq!(tokens.header_height, Length::px(16.0 * 1.5));
    }

    #[test]
    fn close_button_centered_in_header_band() {
        let tokens = resolve_tokens(&GlobalTokens::default());
        let reconstructed = tokens
            .close_btn_inset
            .mul(2.0)
            .add(tokens.close_btn_size);
        assert!((reconstructed.magnitude - tokens.header_height.magnitude).abs() < 1e-9);
    }

    #[test]
    fn wireframe_switch_is_total() {
        let filled = derive_component_tokens(&GlobalTokens::default());
        let wired = derive_component_tokens(&GlobalTokens {
            wireframe: true,
            ..GlobalTokens::default()
        });

        // Fills become transparent, paddings invert, separators appear.
        assert_eq!(filled.header_bg, "#ffffff");
        assert_eq!(wired.header_bg, "transparent");
        assert_eq!(filled.footer_bg, "#ffffff");
        assert_eq!(wired.footer_bg, "transparent");

        assert_eq!(
            filled.content_padding,
            PaddingPair::new(Length::px(20.0), Length::px(24.0))
        );
        assert_eq!(wired.content_padding, PaddingPair::ZERO);
        assert_eq!(filled.header_padding, PaddingPair::ZERO);
        assert_eq!(
            wired.header_padding,
            PaddingPair::new(Length::px(16.0), Length::px(24.0))
        );
        assert_eq!(filled.footer_padding, PaddingPair::ZERO);
        assert_eq!(
            wired.footer_padding,
            PaddingPair::new(Length::px(8.0), Length::px(16.0))
        );

        assert!(filled.header_border_bottom.is_none());
        assert!(wired.header_border_bottom.is_some());
        assert!(filled.footer_border_top.is_none());
        assert!(wired.footer_border_top.is_some());

        // Whitespace separation only in filled mode.
        assert_eq!(filled.header_margin_bottom, Length::px(8.0));
        assert_eq!(wired.header_margin_bottom, Length::ZERO);
        assert_eq!(filled.footer_margin_top, Length::px(12.0));
        assert_eq!(wired.footer_margin_top, Length::ZERO);

        // Mode-independent tokens stay shared.
        assert_eq!(filled.content_bg, wired.content_bg);
        assert_eq!(filled.title_color, wired.title_color);
        assert_eq!(filled.title_font_size, wired.title_font_size);
    }

    #[test]
    fn separator_resolves_from_split_tokens() {
        let wired = derive_component_tokens(&GlobalTokens {
            wireframe: true,
            line_width: 2.0,
            line_type: "dashed".into(),
            ..GlobalTokens::default()
        });
        let border = wired.header_border_bottom.expect("wireframe separator");
        assert_eq!(border.resolve(), "2px dashed rgba(5, 5, 5, 0.06)");
    }

    proptest! {
        // Changing the title font size by delta moves the header height by
        // exactly delta x line height, padding held fixed.
        #[test]
        fn header_height_propagates_font_size(
            font in 8.0f64..40.0,
            delta in 0.5f64..16.0,
            line_height in 1.0f64..2.5,
            pad in 0.0f64..32.0,
        ) {
            let base = GlobalTokens {
                font_size_heading5: font,
                line_height_heading5: line_height,
                padding: pad,
                wireframe: true,
                ..GlobalTokens::default()
            };
            let bumped = GlobalTokens {
                font_size_heading5: font + delta,
                ..base.clone()
            };

            let h0 = resolve_tokens(&base).header_height.magnitude;
            let h1 = resolve_tokens(&bumped).header_height.magnitude;
            let expected = delta * line_height;
            prop_assert!((h1 - h0 - expected).abs() < 1e-9);
        }

        #[test]
        fn derivation_pure_for_arbitrary_scalars(
            font in 8.0f64..40.0,
            pad in 0.0f64..48.0,
            wireframe in any::<bool>(),
        ) {
            let global = GlobalTokens {
                font_size: font,
                padding_md: pad,
                wireframe,
                ..GlobalTokens::default()
            };
            prop_assert_eq!(resolve_tokens(&global), resolve_tokens(&global));
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn global_tokens_round_trip_through_json() {
        let global = GlobalTokens {
            wireframe: true,
            font_size: 15.0,
            ..GlobalTokens::default()
        };
        let json = serde_json::to_string(&global).unwrap();
        let back: GlobalTokens = serde_json::from_str(&json).unwrap();
        assert_eq!(back, global);
        assert_eq!(resolve_tokens(&back), resolve_tokens(&global));
    }
}
