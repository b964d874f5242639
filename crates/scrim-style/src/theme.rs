#![forbid(unsafe_code)]

//! Theme activation: atomically swappable resolved theme.
//!
//! Derivation and assembly are pure, so a theme only needs to be resolved
//! once per activation. [`ThemeHandle`] holds the current [`ResolvedTheme`]
//! behind an `ArcSwap`; readers get a cheap `Arc` snapshot and may compare
//! snapshots by pointer identity to skip redundant re-rendering.

use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::assemble::{DEFAULT_PREFIX_CLS, assemble_styles_with_prefix};
use crate::rules::RuleGroup;
use crate::token::{GlobalTokens, ModalTokens, resolve_tokens};

/// A fully resolved theme: tokens plus the assembled style description.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTheme {
    pub prefix_cls: String,
    pub tokens: ModalTokens,
    pub styles: Vec<RuleGroup>,
}

impl ResolvedTheme {
    /// Resolve a global token set into a complete theme.
    #[must_use]
    pub fn resolve(global: &GlobalTokens, prefix_cls: &str) -> Self {
        let tokens = resolve_tokens(global);
        let styles = assemble_styles_with_prefix(&tokens, prefix_cls);
        Self {
            prefix_cls: prefix_cls.to_owned(),
            tokens,
            styles,
        }
    }
}

/// Shared handle to the active theme.
#[derive(Debug)]
pub struct ThemeHandle {
    current: ArcSwap<ResolvedTheme>,
}

impl ThemeHandle {
    /// Create a handle with the given global tokens installed.
    #[must_use]
    pub fn new(global: &GlobalTokens) -> Self {
        Self {
            current: ArcSwap::from_pointee(ResolvedTheme::resolve(global, DEFAULT_PREFIX_CLS)),
        }
    }

    /// Recompute and install a theme from new global tokens.
    pub fn install(&self, global: &GlobalTokens) {
        self.install_with_prefix(global, DEFAULT_PREFIX_CLS);
    }

    /// [`ThemeHandle::install`] with a custom structural class prefix.
    pub fn install_with_prefix(&self, global: &GlobalTokens, prefix_cls: &str) {
        let resolved = ResolvedTheme::resolve(global, prefix_cls);
        tracing::debug!(
            prefix_cls,
            wireframe = global.wireframe,
            "installing resolved theme"
        );
        self.current.store(Arc::new(resolved));
    }

    /// Snapshot of the active theme. Successive snapshots without an
    /// intervening `install` are pointer-identical.
    #[must_use]
    pub fn current(&self) -> Arc<ResolvedTheme> {
        self.current.load_full()
    }
}

impl Default for ThemeHandle {
    fn default() -> Self {
        Self::new(&GlobalTokens::default())
    }
}
