#![forbid(unsafe_code)]

//! Footer resolution: the default OK/Cancel button pair.

use crate::node::{Callback, Node};

/// The footer prop.
///
/// `Auto` renders the built-in button pair; `None` removes the footer
/// entirely, which is distinct from leaving the prop unset.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FooterProp {
    #[default]
    Auto,
    None,
    Custom(Node),
}

/// Inputs consumed by the built-in footer.
#[derive(Debug, Clone, Default)]
pub struct FooterSpec {
    pub ok_text: Option<String>,
    pub cancel_text: Option<String>,
    pub on_ok: Option<Callback>,
    pub on_cancel: Option<Callback>,
}

/// Resolve the footer node, if any.
#[must_use]
pub fn resolve_footer(footer: &FooterProp, spec: &FooterSpec, root_prefix_cls: &str) -> Option<Node> {
    match footer {
        FooterProp::None => None,
        FooterProp::Custom(node) => Some(node.clone()),
        FooterProp::Auto => Some(default_footer(spec, root_prefix_cls)),
    }
}

/// Cancel then OK, in source order, so OK lands rightmost in LTR.
fn default_footer(spec: &FooterSpec, root_prefix_cls: &str) -> Node {
    let cancel = Node::Button {
        class_name: format!("{root_prefix_cls}-btn"),
        on_click: spec.on_cancel.clone(),
        children: vec![Node::text(
            spec.cancel_text.as_deref().unwrap_or("Cancel"),
        )],
    };
    let ok = Node::Button {
        class_name: format!("{root_prefix_cls}-btn {root_prefix_cls}-btn-primary"),
        on_click: spec.on_ok.clone(),
        children: vec![Node::text(spec.ok_text.as_deref().unwrap_or("OK"))],
    };
    Node::Span {
        class_name: String::new(),
        children: vec![cancel, ok],
    }
}
