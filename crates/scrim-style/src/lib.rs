#![forbid(unsafe_code)]

//! Design-token derivation and style assembly for the scrim modal dialog.
//!
//! The pipeline is three pure steps over a theme's global token set:
//!
//! 1. [`token::derive_component_tokens`] — semantic component tokens,
//!    branching once on the wireframe/filled mode switch.
//! 2. [`token::derive_resolved_tokens`] — the resolved set, adding geometry
//!    computed from typography and spacing tokens.
//! 3. [`assemble::assemble_styles`] — the ordered declarative rule groups
//!    consumed by a CSS-in-JS style runtime.
//!
//! [`theme::ThemeHandle`] caches the resolved output per theme activation
//! behind an atomically swappable `Arc`.

pub mod assemble;
pub mod length;
pub mod rules;
pub mod theme;
pub mod token;

pub use assemble::{DEFAULT_PREFIX_CLS, assemble_styles, assemble_styles_with_prefix};
pub use length::{Length, Unit};
pub use rules::{Declarations, RuleGroup, Value, flatten};
pub use theme::{ResolvedTheme, ThemeHandle};
pub use token::{
    Border, ComponentTokens, GlobalTokens, ModalTokens, PaddingPair, derive_component_tokens,
    derive_resolved_tokens, resolve_tokens,
};
