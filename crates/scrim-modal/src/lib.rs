#![forbid(unsafe_code)]

//! Modal dialog composition for scrim.
//!
//! The crate turns caller props, ambient context defaults, and a couple of
//! small runtime services into declarative dialog configurations:
//!
//! - [`click::ClickTracker`] remembers the most recent document click for a
//!   short window so open animations can scale out of the click point.
//! - [`zindex::resolve_z_index`] allocates stacking order, publishing each
//!   container's z-index as the base for overlays nested inside it.
//! - [`dialog::compose`] resolves the full panel configuration, and in
//!   resize mode pairs it with a draggable, resizable floating wrapper
//!   described by [`resize::ResizeWrapperConfig`].
//!
//! Styling lives in the companion `scrim-style` crate; this crate only
//! references its structural class names and declaration blocks.

pub mod click;
pub mod closable;
pub mod dialog;
pub mod footer;
pub mod node;
pub mod resize;
pub mod zindex;

pub use click::{CLICK_ANCHOR_WINDOW, ClickPoint, ClickTracker};
pub use closable::{ClosableSpec, resolve_closable};
pub use dialog::{
    ComposedDialog, Container, ContextDefaults, DEFAULT_WIDTH, DialogConfig, DialogWidth,
    Direction, ModalContextConfig, ModalProps, ResizeOverrides, SlotClasses, SlotStyles, compose,
};
pub use footer::{FooterProp, FooterSpec, resolve_footer};
pub use node::{Callback, Node};
pub use resize::{
    DragBounds, FALLBACK_HALF_WIDTH, INITIAL_TOP, MIN_HEIGHT, MIN_WIDTH, ResizeHandles,
    ResizeWrapperConfig, Viewport, resize_wrapper_config,
};
pub use zindex::{OverlayKind, Z_INDEX_BASE, Z_INDEX_STEP, ZIndexContext, resolve_z_index};
