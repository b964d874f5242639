#![forbid(unsafe_code)]

//! Close-affordance resolution.
//!
//! Whether a dialog shows its corner close button, and which icon that
//! button renders, come from three layers: the dialog's own props, the
//! ambient component context, and built-in defaults. The icon prop is
//! tri-state: unset (fall through to context), explicitly none (suppress
//! the affordance entirely), or a concrete node.

use crate::node::Node;

/// Inputs to [`resolve_closable`], ordered outermost layer first.
#[derive(Debug, Clone, Default)]
pub struct ClosableSpec {
    /// The explicit closable flag, when given.
    pub closable: Option<bool>,
    /// Tri-state icon prop: `None` = unset, `Some(None)` = explicitly no
    /// icon, `Some(Some(node))` = a concrete icon.
    pub close_icon: Option<Option<Node>>,
    /// Icon supplied by the ambient component context.
    pub context_icon: Option<Node>,
    /// Whether the dialog closes by default when neither layer decides.
    pub default_closable: bool,
}

/// Resolve the close affordance: `(closable, icon)`.
///
/// The explicit flag always wins. Without it, an explicitly-none icon
/// reads as "not closable"; otherwise the default applies. The resolved
/// icon falls through props, then context, then `default_icon`, and is
/// passed through `decorate` (the composer wraps it in the corner hit
/// target there). A non-closable dialog never carries an icon.
#[must_use]
pub fn resolve_closable(
    spec: &ClosableSpec,
    default_icon: Node,
    decorate: impl Fn(Node) -> Node,
) -> (bool, Option<Node>) {
    let closable = match (spec.closable, &spec.close_icon) {
        (Some(flag), _) => flag,
        (None, Some(None)) => false,
        (None, _) => spec.default_closable,
    };
    if !closable {
        return (false, None);
    }
    let icon = match &spec.close_icon {
        Some(Some(node)) => node.clone(),
        // Explicitly-none icon with a forced `closable: true` falls back
        // to the default glyph so the affordance stays visible.
        Some(None) => default_icon,
        None => spec.context_icon.clone().unwrap_or(default_icon),
    };
    (true, Some(decorate(icon)))
}
