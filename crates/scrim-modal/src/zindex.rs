#![forbid(unsafe_code)]

//! Overlay stacking-order allocation.
//!
//! Every overlay asks for a z-index through [`resolve_z_index`], passing its
//! category, an optional explicit override, and the stacking context it was
//! mounted under. The resolved value is used for the overlay itself and
//! doubles as the base published to overlays nested inside it, so a dialog
//! opened from within a dialog always stacks above its opener.

/// Base z-index for the outermost container overlay.
pub const Z_INDEX_BASE: i32 = 1000;

/// Increment applied for each level of container nesting.
pub const Z_INDEX_STEP: i32 = 100;

/// Overlay category. Containers restart the scale for their children;
/// lightweight overlays sit at a fixed offset inside their container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OverlayKind {
    Modal,
    Drawer,
    Popup,
    Tooltip,
}

impl OverlayKind {
    /// Offset above the container base for this category.
    #[must_use]
    pub const fn offset(self) -> i32 {
        match self {
            Self::Modal | Self::Drawer => 0,
            Self::Popup => 50,
            Self::Tooltip => 70,
        }
    }

    /// Whether this category establishes a stacking context for children.
    #[must_use]
    pub const fn is_container(self) -> bool {
        matches!(self, Self::Modal | Self::Drawer)
    }
}

/// The stacking context a container overlay publishes to its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZIndexContext {
    base: i32,
}

impl ZIndexContext {
    #[must_use]
    pub const fn new(base: i32) -> Self {
        Self { base }
    }

    /// The z-index children resolve against.
    #[must_use]
    pub const fn base(&self) -> i32 {
        self.base
    }
}

/// Resolve an overlay's z-index and the context it publishes downward.
///
/// An explicit override wins outright and still becomes the published base,
/// so children of a manually placed overlay stack relative to it.
#[must_use]
pub fn resolve_z_index(
    kind: OverlayKind,
    explicit: Option<i32>,
    parent: Option<&ZIndexContext>,
) -> (i32, ZIndexContext) {
    let own = explicit.unwrap_or_else(|| match parent {
        Some(ctx) => ctx.base() + Z_INDEX_STEP + kind.offset(),
        None => Z_INDEX_BASE + kind.offset(),
    });
    (own, ZIndexContext::new(own))
}
