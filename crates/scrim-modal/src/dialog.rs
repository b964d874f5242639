#![forbid(unsafe_code)]

//! Dialog composition: props + ambient context + computed defaults in, one
//! declarative [`DialogConfig`] out.
//!
//! Precedence is uniform across every field: explicit props beat context
//! theme overrides, which beat computed defaults. Structural classes are
//! always included regardless of overrides. In resize mode the same panel
//! config is computed first and then patched by an explicit, enumerated
//! override record; everything the record does not name is byte-identical
//! to the non-resize panel.

use ahash::AHashSet;
use scrim_style::rules::{Declarations, Value};

use crate::click::{ClickPoint, ClickTracker};
use crate::closable::{ClosableSpec, resolve_closable};
use crate::footer::{FooterProp, FooterSpec, resolve_footer};
use crate::node::{Callback, Node};
use crate::resize::{ResizeWrapperConfig, Viewport, resize_wrapper_config};
use crate::zindex::{OverlayKind, ZIndexContext, resolve_z_index};

/// Default dialog width in pixels.
pub const DEFAULT_WIDTH: f64 = 520.0;

/// Layout direction inherited from the ambient configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

/// Where the dialog portal mounts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Container {
    /// The document body.
    #[default]
    Body,
    /// A host-resolved mount point.
    Selector(String),
    /// No portal: render in place.
    InPlace,
}

/// Dialog width: a pixel number or an arbitrary CSS width expression.
#[derive(Debug, Clone, PartialEq)]
pub enum DialogWidth {
    Px(f64),
    Css(String),
}

impl DialogWidth {
    /// The numeric pixel value, when the width is one.
    #[must_use]
    pub fn numeric_px(&self) -> Option<f64> {
        match self {
            Self::Px(w) => Some(*w),
            Self::Css(_) => None,
        }
    }

    /// Printable CSS form.
    #[must_use]
    pub fn resolve(&self) -> String {
        match self {
            Self::Px(w) => {
                if w.fract() == 0.0 {
                    format!("{}px", *w as i64)
                } else {
                    format!("{w}px")
                }
            }
            Self::Css(s) => s.clone(),
        }
    }
}

impl Default for DialogWidth {
    fn default() -> Self {
        Self::Px(DEFAULT_WIDTH)
    }
}

/// Per-slot inline style blocks.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SlotStyles {
    pub mask: Declarations,
    pub wrapper: Declarations,
    pub header: Declarations,
    pub body: Declarations,
    pub footer: Declarations,
    pub content: Declarations,
}

impl SlotStyles {
    /// Shallow per-slot override: `other`'s properties win.
    pub fn merge(&mut self, other: &Self) {
        self.mask.merge(&other.mask);
        self.wrapper.merge(&other.wrapper);
        self.header.merge(&other.header);
        self.body.merge(&other.body);
        self.footer.merge(&other.footer);
        self.content.merge(&other.content);
    }
}

/// Per-slot class-name overrides.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SlotClasses {
    pub mask: Option<String>,
    pub wrapper: Option<String>,
    pub header: Option<String>,
    pub body: Option<String>,
    pub footer: Option<String>,
    pub content: Option<String>,
}

impl SlotClasses {
    /// Per-slot replacement: `other`'s set slots win.
    pub fn merge(&mut self, other: &Self) {
        let slots = [
            (&mut self.mask, &other.mask),
            (&mut self.wrapper, &other.wrapper),
            (&mut self.header, &other.header),
            (&mut self.body, &other.body),
            (&mut self.footer, &other.footer),
            (&mut self.content, &other.content),
        ];
        for (mine, theirs) in slots {
            if theirs.is_some() {
                mine.clone_from(theirs);
            }
        }
    }
}

/// Everything a caller may set on a dialog.
#[derive(Debug, Clone, Default)]
pub struct ModalProps {
    pub prefix_cls: Option<String>,
    pub open: Option<bool>,
    /// Deprecated alias of `open`; `open` wins when both are set.
    pub visible: Option<bool>,
    pub width: Option<DialogWidth>,
    pub z_index: Option<i32>,
    pub centered: bool,
    pub resize: bool,
    pub closable: Option<bool>,
    /// Tri-state: unset, explicitly no icon, or a concrete icon.
    pub close_icon: Option<Option<Node>>,
    pub focus_trigger_after_close: Option<bool>,
    pub get_container: Option<Container>,
    pub footer: FooterProp,
    pub ok_text: Option<String>,
    pub cancel_text: Option<String>,
    pub on_ok: Option<Callback>,
    pub on_cancel: Option<Callback>,
    pub transition_name: Option<String>,
    pub mask_transition_name: Option<String>,
    pub class_name: Option<String>,
    pub root_class_name: Option<String>,
    pub wrap_class_name: Option<String>,
    pub style: Declarations,
    pub styles: SlotStyles,
    /// Deprecated alias of `styles.body`; `styles.body` wins per property.
    pub body_style: Option<Declarations>,
    /// Deprecated alias of `styles.mask`; `styles.mask` wins per property.
    pub mask_style: Option<Declarations>,
    pub class_names: SlotClasses,
    /// Explicit animation anchor; beats the click tracker when set.
    pub mouse_position: Option<ClickPoint>,
}

/// Theme-level dialog overrides from the ambient component context.
#[derive(Debug, Clone, Default)]
pub struct ModalContextConfig {
    pub class_name: Option<String>,
    pub style: Declarations,
    pub class_names: SlotClasses,
    pub styles: SlotStyles,
    pub close_icon: Option<Node>,
}

/// Ambient defaults the dialog composes against.
#[derive(Debug, Clone)]
pub struct ContextDefaults {
    pub direction: Direction,
    pub get_container: Option<Container>,
    /// Root class prefix of the component library, e.g. `"scrim"`.
    pub root_prefix_cls: String,
    /// Hash class emitted by the style runtime for scoping; always carried
    /// on the root and panel class lists.
    pub hash_cls: Option<String>,
    pub modal: Option<ModalContextConfig>,
    /// Stacking context of the overlay this dialog was opened under.
    pub parent_z: Option<ZIndexContext>,
}

impl Default for ContextDefaults {
    fn default() -> Self {
        Self {
            direction: Direction::Ltr,
            get_container: None,
            root_prefix_cls: "scrim".to_owned(),
            hash_cls: None,
            modal: None,
            parent_z: None,
        }
    }
}

/// The fully resolved dialog panel configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct DialogConfig {
    pub prefix_cls: String,
    pub open: bool,
    pub width: DialogWidth,
    pub z_index: i32,
    pub container: Container,
    pub mask: bool,
    pub mouse_position: Option<ClickPoint>,
    pub closable: bool,
    pub close_icon: Option<Node>,
    pub focus_trigger_after_close: bool,
    pub footer: Option<Node>,
    pub transition_name: String,
    pub mask_transition_name: String,
    /// Classes on the portal root.
    pub root_class_name: Vec<String>,
    /// Classes on the panel element.
    pub class_name: Vec<String>,
    /// Inline style of the panel element.
    pub style: Declarations,
    pub class_names: SlotClasses,
    pub styles: SlotStyles,
    pub on_close: Option<Callback>,
}

/// A composed dialog: the panel, the optional floating wrapper, and the
/// stacking base published to overlays opened from inside it.
#[derive(Debug, Clone, PartialEq)]
pub struct ComposedDialog {
    pub panel: DialogConfig,
    pub wrapper: Option<ResizeWrapperConfig>,
    pub context_z_index: i32,
}

/// Panel-side overrides applied in resize mode, as one explicit record.
///
/// The wrapper takes over placement, stacking, masking, and animation, so
/// the inner panel gives all of those up. Fields not represented here are
/// untouched, which is what keeps resize and non-resize panels comparable.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeOverrides {
    /// Panel fills the wrapper.
    pub width: DialogWidth,
    /// Panel participates in the wrapper's stacking context only.
    pub z_index: i32,
    /// No portal: the panel renders inside the wrapper element.
    pub container: Container,
    pub mask: bool,
    pub transition_name: String,
    pub mask_transition_name: String,
    /// Replaces the structural wrapper classes outright.
    pub wrapper_class: String,
    /// Applied on top of the user panel style, so these win.
    pub panel_style: Declarations,
    /// Applied under the user wrapper style, so user overrides win.
    pub wrapper_style: Declarations,
}

impl ResizeOverrides {
    #[must_use]
    pub fn for_prefix(prefix_cls: &str) -> Self {
        Self {
            width: DialogWidth::Css("100%".to_owned()),
            z_index: 0,
            container: Container::InPlace,
            mask: false,
            transition_name: String::new(),
            mask_transition_name: String::new(),
            wrapper_class: format!("{prefix_cls}-resize-wrapper"),
            panel_style: Declarations::from_iter([
                ("position", Value::from("static")),
                ("margin", Value::from("0")),
                ("padding", Value::from("0")),
                ("top", Value::from("auto")),
                ("transform", Value::from("none")),
            ]),
            wrapper_style: Declarations::from_iter([
                ("position", Value::from("static")),
                ("inset", Value::from("auto")),
            ]),
        }
    }

    fn apply(&self, cfg: &mut DialogConfig, user_wrapper_class: Option<&str>) {
        cfg.width = self.width.clone();
        cfg.z_index = self.z_index;
        cfg.container = self.container.clone();
        cfg.mask = self.mask;
        cfg.mouse_position = None;
        cfg.transition_name.clone_from(&self.transition_name);
        cfg.mask_transition_name
            .clone_from(&self.mask_transition_name);
        cfg.style.merge(&self.panel_style);

        let mut wrapper_classes = vec![self.wrapper_class.clone()];
        if let Some(user) = user_wrapper_class {
            wrapper_classes.push(user.to_owned());
        }
        cfg.class_names.wrapper = Some(join_classes(wrapper_classes));

        let mut wrapper_style = self.wrapper_style.clone();
        wrapper_style.merge(&cfg.styles.wrapper);
        cfg.styles.wrapper = wrapper_style;
    }
}

/// Compose a dialog from props, ambient context, and the click tracker.
#[must_use]
pub fn compose(
    props: &ModalProps,
    ctx: &ContextDefaults,
    clicks: &ClickTracker,
    viewport: Option<Viewport>,
) -> ComposedDialog {
    if props.visible.is_some() {
        warn_deprecated("visible", "open");
    }
    if props.body_style.is_some() {
        warn_deprecated("body_style", "styles.body");
    }
    if props.mask_style.is_some() {
        warn_deprecated("mask_style", "styles.mask");
    }

    let modal_ctx = ctx.modal.clone().unwrap_or_default();

    let prefix_cls = props
        .prefix_cls
        .clone()
        .unwrap_or_else(|| format!("{}-modal", ctx.root_prefix_cls));

    let open = props.open.or(props.visible).unwrap_or(false);
    let width = props.width.clone().unwrap_or_default();

    let (z_index, z_ctx) =
        resolve_z_index(OverlayKind::Modal, props.z_index, ctx.parent_z.as_ref());

    let container = props
        .get_container
        .clone()
        .or_else(|| ctx.get_container.clone())
        .unwrap_or_default();

    let (closable, close_icon) = resolve_closable(
        &ClosableSpec {
            closable: props.closable,
            close_icon: props.close_icon.clone(),
            context_icon: modal_ctx.close_icon.clone(),
            default_closable: true,
        },
        Node::icon("close", format!("{prefix_cls}-close-icon")),
        |icon| Node::Span {
            class_name: format!("{prefix_cls}-close-x"),
            children: vec![icon],
        },
    );

    let footer = resolve_footer(
        &props.footer,
        &FooterSpec {
            ok_text: props.ok_text.clone(),
            cancel_text: props.cancel_text.clone(),
            on_ok: props.on_ok.clone(),
            on_cancel: props.on_cancel.clone(),
        },
        &ctx.root_prefix_cls,
    );

    let transition_name = props
        .transition_name
        .clone()
        .unwrap_or_else(|| format!("{}-zoom", ctx.root_prefix_cls));
    let mask_transition_name = props
        .mask_transition_name
        .clone()
        .unwrap_or_else(|| format!("{}-fade", ctx.root_prefix_cls));

    let mouse_position = props.mouse_position.or_else(|| clicks.peek());

    // Panel classes: hash class first, then props, then the context theme
    // class. Class lists only accumulate, so order is cosmetic.
    let class_name = join_class_list([
        ctx.hash_cls.as_deref(),
        props.class_name.as_deref(),
        modal_ctx.class_name.as_deref(),
    ]);
    let root_class_name =
        join_class_list([ctx.hash_cls.as_deref(), props.root_class_name.as_deref()]);

    // Structural wrap classes always apply; the caller's wrap class rides
    // along with them.
    let mut wrap_classes: Vec<String> = Vec::new();
    if let Some(wc) = &props.wrap_class_name {
        wrap_classes.push(wc.clone());
    }
    if props.centered {
        wrap_classes.push(format!("{prefix_cls}-wrap-centered"));
    }
    if ctx.direction == Direction::Rtl {
        wrap_classes.push(format!("{prefix_cls}-wrap-rtl"));
    }
    if let Some(user) = &props.class_names.wrapper {
        wrap_classes.push(user.clone());
    }

    let mut class_names = modal_ctx.class_names.clone();
    class_names.merge(&props.class_names);
    class_names.wrapper = if wrap_classes.is_empty() {
        None
    } else {
        Some(join_classes(wrap_classes))
    };

    let mut style = modal_ctx.style.clone();
    style.merge(&props.style);

    // Slot styles: context first, then the deprecated aliases, then the
    // replacement props, each layer overriding per property.
    let mut styles = modal_ctx.styles.clone();
    if let Some(body) = &props.body_style {
        styles.body.merge(body);
    }
    if let Some(mask) = &props.mask_style {
        styles.mask.merge(mask);
    }
    styles.merge(&props.styles);

    let mut panel = DialogConfig {
        prefix_cls: prefix_cls.clone(),
        open,
        width: width.clone(),
        z_index,
        container,
        mask: true,
        mouse_position,
        closable,
        close_icon,
        focus_trigger_after_close: props.focus_trigger_after_close.unwrap_or(true),
        footer,
        transition_name,
        mask_transition_name,
        root_class_name,
        class_name,
        style,
        class_names,
        styles,
        on_close: props.on_cancel.clone(),
    };

    let wrapper = if props.resize {
        let overrides = ResizeOverrides::for_prefix(&prefix_cls);
        overrides.apply(&mut panel, props.class_names.wrapper.as_deref());
        Some(resize_wrapper_config(&width, viewport, z_index, &prefix_cls))
    } else {
        None
    };

    ComposedDialog {
        panel,
        wrapper,
        context_z_index: z_ctx.base(),
    }
}

fn warn_deprecated(old: &'static str, new: &'static str) {
    if cfg!(debug_assertions) {
        tracing::warn!(deprecated = old, replacement = new, "deprecated prop");
    }
}

/// Join class fragments into one space-separated string, deduplicating
/// while keeping first-seen order.
fn join_classes(classes: Vec<String>) -> String {
    let mut seen: AHashSet<String> = AHashSet::with_capacity(classes.len());
    let mut out: Vec<String> = Vec::with_capacity(classes.len());
    for class in classes {
        for part in class.split_whitespace() {
            if seen.insert(part.to_owned()) {
                out.push(part.to_owned());
            }
        }
    }
    out.join(" ")
}

fn join_class_list<'a>(parts: impl IntoIterator<Item = Option<&'a str>>) -> Vec<String> {
    let mut seen: AHashSet<&str> = AHashSet::new();
    let mut out: Vec<String> = Vec::new();
    for part in parts.into_iter().flatten() {
        for class in part.split_whitespace() {
            if seen.insert(class) {
                out.push(class.to_owned());
            }
        }
    }
    out
}
