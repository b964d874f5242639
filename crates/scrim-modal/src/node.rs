#![forbid(unsafe_code)]

//! Render-node descriptors handed to the external rendering layer.
//!
//! The composer never renders anything itself; it produces lightweight
//! declarative descriptions (close icon, footer buttons) that the dialog
//! primitive turns into real elements. Keeping them data-only keeps whole
//! dialog configurations comparable in tests.

use std::fmt;
use std::rc::Rc;

/// A UI event handler held by reference.
///
/// Equality is `Rc` pointer identity: two callbacks are equal when they are
/// the same handler instance, which is what config comparison needs.
#[derive(Clone)]
pub struct Callback(Rc<dyn Fn()>);

impl Callback {
    #[must_use]
    pub fn new(f: impl Fn() + 'static) -> Self {
        Self(Rc::new(f))
    }

    /// Invoke the handler.
    pub fn call(&self) {
        (self.0)();
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback")
    }
}

impl PartialEq for Callback {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// A declarative node descriptor.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Text(String),
    /// A named icon glyph.
    Icon { name: String, class_name: String },
    /// An inline wrapper element.
    Span {
        class_name: String,
        children: Vec<Node>,
    },
    Button {
        class_name: String,
        on_click: Option<Callback>,
        children: Vec<Node>,
    },
}

impl Node {
    #[must_use]
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    #[must_use]
    pub fn icon(name: impl Into<String>, class_name: impl Into<String>) -> Self {
        Self::Icon {
            name: name.into(),
            class_name: class_name.into(),
        }
    }

    /// The node's class name, when it has one.
    #[must_use]
    pub fn class_name(&self) -> Option<&str> {
        match self {
            Self::Text(_) => None,
            Self::Icon { class_name, .. }
            | Self::Span { class_name, .. }
            | Self::Button { class_name, .. } => Some(class_name),
        }
    }
}
