#![forbid(unsafe_code)]

//! Drag/resize wrapper configuration.
//!
//! In resize mode the dialog panel is hosted inside a floating wrapper the
//! user can drag by the header and resize from eight handles. This module
//! computes the wrapper's initial placement, constraints, and per-handle
//! hit-target styling; the panel-side overrides live in [`crate::dialog`].

use bitflags::bitflags;
use scrim_style::rules::{Declarations, Value};

use crate::dialog::DialogWidth;

/// Minimum wrapper width while resizing, in pixels.
pub const MIN_WIDTH: f64 = 320.0;

/// Minimum wrapper height while resizing, in pixels.
pub const MIN_HEIGHT: f64 = 200.0;

/// Horizontal centering fallback when the dialog width is not numeric:
/// the wrapper is placed as if it were twice this wide.
pub const FALLBACK_HALF_WIDTH: f64 = 260.0;

/// Initial distance from the top of the viewport, in pixels.
pub const INITIAL_TOP: f64 = 100.0;

/// Initial x when no viewport is available (server-side rendering).
pub const FALLBACK_X: f64 = 100.0;

bitflags! {
    /// Which resize handles the wrapper exposes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ResizeHandles: u8 {
        const TOP = 1;
        const RIGHT = 1 << 1;
        const BOTTOM = 1 << 2;
        const LEFT = 1 << 3;
        const TOP_RIGHT = 1 << 4;
        const BOTTOM_RIGHT = 1 << 5;
        const BOTTOM_LEFT = 1 << 6;
        const TOP_LEFT = 1 << 7;

        const EDGES = Self::TOP.bits() | Self::RIGHT.bits() | Self::BOTTOM.bits() | Self::LEFT.bits();
        const CORNERS = Self::TOP_RIGHT.bits()
            | Self::BOTTOM_RIGHT.bits()
            | Self::BOTTOM_LEFT.bits()
            | Self::TOP_LEFT.bits();
        const ALL = Self::EDGES.bits() | Self::CORNERS.bits();
    }
}

/// What the wrapper may be dragged within. Only window bounding is
/// supported today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragBounds {
    #[default]
    Window,
}

/// Viewport dimensions at compose time, when known.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// Complete configuration for the floating wrapper element.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeWrapperConfig {
    pub initial_x: f64,
    pub initial_y: f64,
    pub min_width: f64,
    pub min_height: f64,
    pub bounds: DragBounds,
    pub handles: ResizeHandles,
    /// Class of the element that acts as the drag grip (the dialog header).
    pub drag_handle_class: String,
    /// Hit-target styling per enabled handle.
    pub handle_styles: Vec<(ResizeHandles, Declarations)>,
    /// Inline style of the wrapper element itself.
    pub style: Declarations,
}

/// Compute the wrapper config for a dialog of the given width.
///
/// The wrapper starts horizontally centered on the viewport when the width
/// is a known pixel value, offset by [`FALLBACK_HALF_WIDTH`] otherwise, and
/// [`INITIAL_TOP`] from the top. Without a viewport both axes fall back to
/// fixed offsets.
#[must_use]
pub fn resize_wrapper_config(
    width: &DialogWidth,
    viewport: Option<Viewport>,
    z_index: i32,
    prefix_cls: &str,
) -> ResizeWrapperConfig {
    let initial_x = match viewport {
        Some(vp) => match width.numeric_px() {
            Some(w) => vp.width / 2.0 - w / 2.0,
            None => vp.width / 2.0 - FALLBACK_HALF_WIDTH,
        },
        None => FALLBACK_X,
    };
    let style = Declarations::from_iter([
        ("position", Value::from("fixed")),
        ("z-index", Value::from(z_index)),
    ]);
    ResizeWrapperConfig {
        initial_x,
        initial_y: INITIAL_TOP,
        min_width: MIN_WIDTH,
        min_height: MIN_HEIGHT,
        bounds: DragBounds::Window,
        handles: ResizeHandles::ALL,
        drag_handle_class: format!("{prefix_cls}-header"),
        handle_styles: handle_styles(),
        style,
    }
}

/// Invisible oversized hit targets: 20px squares bleeding 5px past each
/// corner, 10px strips along each edge inset from the corners.
fn handle_styles() -> Vec<(ResizeHandles, Declarations)> {
    let corner = |cursor: &str, vertical: &str, horizontal: &str| {
        Declarations::from_iter([
            ("width", Value::from("20px")),
            ("height", Value::from("20px")),
            (vertical, Value::from("-5px")),
            (horizontal, Value::from("-5px")),
            ("cursor", Value::from(cursor)),
            ("background", Value::from("transparent")),
            ("border", Value::from("1px solid transparent")),
        ])
    };
    let row = |cursor: &str, side: &str| {
        Declarations::from_iter([
            (side, Value::from("-5px")),
            ("left", Value::from("10px")),
            ("right", Value::from("10px")),
            ("height", Value::from("10px")),
            ("cursor", Value::from(cursor)),
            ("background", Value::from("transparent")),
        ])
    };
    let column = |cursor: &str, side: &str| {
        Declarations::from_iter([
            (side, Value::from("-5px")),
            ("top", Value::from("10px")),
            ("bottom", Value::from("10px")),
            ("width", Value::from("10px")),
            ("cursor", Value::from(cursor)),
            ("background", Value::from("transparent")),
        ])
    };
    vec![
        (ResizeHandles::TOP, row("n-resize", "top")),
        (ResizeHandles::RIGHT, column("e-resize", "right")),
        (ResizeHandles::BOTTOM, row("s-resize", "bottom")),
        (ResizeHandles::LEFT, column("w-resize", "left")),
        (ResizeHandles::TOP_RIGHT, corner("ne-resize", "top", "right")),
        (
            ResizeHandles::BOTTOM_RIGHT,
            corner("se-resize", "bottom", "right"),
        ),
        (
            ResizeHandles::BOTTOM_LEFT,
            corner("sw-resize", "bottom", "left"),
        ),
        (ResizeHandles::TOP_LEFT, corner("nw-resize", "top", "left")),
    ]
}
