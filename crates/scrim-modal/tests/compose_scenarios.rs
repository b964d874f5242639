//! End-to-end composition scenarios across the dialog, click, stacking,
//! and resize modules, plus alignment with the `scrim-style` class names.

use scrim_modal::{
    CLICK_ANCHOR_WINDOW, ClickPoint, ClickTracker, ComposedDialog, Container, ContextDefaults,
    DialogWidth, Direction, DragBounds, FooterProp, ModalContextConfig, ModalProps, Node,
    ResizeHandles, SlotClasses, SlotStyles, Viewport, ZIndexContext, compose,
};
use scrim_style::rules::{Declarations, Value};
use scrim_style::{GlobalTokens, ResolvedTheme};
use web_time::{Duration, Instant};

fn ctx() -> ContextDefaults {
    ContextDefaults {
        hash_cls: Some("css-h4sh".to_owned()),
        ..ContextDefaults::default()
    }
}

fn viewport() -> Viewport {
    Viewport {
        width: 1280.0,
        height: 800.0,
    }
}

/// Rich prop set shared by the parity scenario.
fn rich_props(resize: bool) -> ModalProps {
    let mut styles = SlotStyles::default();
    styles.body.set("max-height", Value::from("60vh"));
    styles.wrapper.set("outline", Value::from("none"));
    let mut style = Declarations::new();
    style.set("color", Value::from("inherit"));
    ModalProps {
        open: Some(true),
        resize,
        centered: true,
        width: Some(DialogWidth::Px(640.0)),
        ok_text: Some("Save".to_owned()),
        wrap_class_name: Some("portal-wrap".to_owned()),
        class_name: Some("billing-dialog".to_owned()),
        class_names: SlotClasses {
            wrapper: Some("user-wrap".to_owned()),
            body: Some("user-body".to_owned()),
            ..SlotClasses::default()
        },
        style,
        styles,
        ..ModalProps::default()
    }
}

#[test]
fn clicked_open_dialog_anchors_to_the_click() {
    let tracker = ClickTracker::new();
    let t0 = Instant::now();
    tracker.record_at(ClickPoint::new(412.0, 236.0), t0);

    let props = ModalProps {
        open: Some(true),
        ..ModalProps::default()
    };
    let out = compose(&props, &ctx(), &tracker, Some(viewport()));

    assert!(out.panel.open);
    assert_eq!(out.panel.mouse_position, Some(ClickPoint::new(412.0, 236.0)));
    assert_eq!(out.panel.transition_name, "scrim-zoom");
}

#[test]
fn stale_click_leaves_the_dialog_centered() {
    let tracker = ClickTracker::new();
    let t0 = Instant::now();
    tracker.record_at(ClickPoint::new(412.0, 236.0), t0);

    // The anchor expires at exactly the window boundary.
    assert!(tracker.peek_at(t0 + CLICK_ANCHOR_WINDOW).is_none());
    assert!(
        tracker
            .peek_at(t0 + CLICK_ANCHOR_WINDOW - Duration::from_millis(1))
            .is_some()
    );
}

#[test]
fn legacy_props_compose_like_their_replacements() {
    let legacy = ModalProps {
        visible: Some(true),
        body_style: Some(Declarations::from_iter([(
            "padding",
            Value::from("32px"),
        )])),
        mask_style: Some(Declarations::from_iter([(
            "opacity",
            Value::from("0.6"),
        )])),
        ..ModalProps::default()
    };
    let mut styles = SlotStyles::default();
    styles.body.set("padding", Value::from("32px"));
    styles.mask.set("opacity", Value::from("0.6"));
    let modern = ModalProps {
        open: Some(true),
        styles,
        ..ModalProps::default()
    };

    let tracker = ClickTracker::new();
    let a = compose(&legacy, &ctx(), &tracker, None);
    let b = compose(&modern, &ctx(), &tracker, None);
    assert_eq!(a, b);
}

#[test]
fn context_theme_overrides_compose_under_props() {
    let mut context_styles = SlotStyles::default();
    context_styles.header.set("font-variant", Value::from("small-caps"));
    let context = ContextDefaults {
        direction: Direction::Rtl,
        modal: Some(ModalContextConfig {
            class_name: Some("brand-modal".to_owned()),
            close_icon: Some(Node::icon("close-circle", "brand-close")),
            styles: context_styles,
            ..ModalContextConfig::default()
        }),
        ..ctx()
    };
    let out = compose(&ModalProps::default(), &context, &ClickTracker::new(), None);

    assert_eq!(
        out.panel.class_name,
        vec!["css-h4sh".to_owned(), "brand-modal".to_owned()]
    );
    assert_eq!(
        out.panel.class_names.wrapper.as_deref(),
        Some("scrim-modal-wrap-rtl")
    );
    assert_eq!(
        out.panel.styles.header.get("font-variant"),
        Some(&Value::from("small-caps"))
    );
    let Some(Node::Span { children, .. }) = &out.panel.close_icon else {
        panic!("expected a wrapped close icon");
    };
    assert_eq!(children[0], Node::icon("close-circle", "brand-close"));
}

#[test]
fn dialog_opened_from_a_dialog_stacks_above_it() {
    let tracker = ClickTracker::new();
    let outer = compose(&ModalProps::default(), &ctx(), &tracker, None);
    assert_eq!(outer.panel.z_index, 1000);

    let nested_ctx = ContextDefaults {
        parent_z: Some(ZIndexContext::new(outer.context_z_index)),
        ..ctx()
    };
    let inner = compose(&ModalProps::default(), &nested_ctx, &tracker, None);
    assert_eq!(inner.panel.z_index, 1100);
    assert_eq!(inner.context_z_index, 1100);
}

#[test]
fn resize_mode_floats_the_panel_in_a_wrapper() {
    let tracker = ClickTracker::new();
    tracker.record(ClickPoint::new(10.0, 10.0));
    let out = compose(&rich_props(true), &ctx(), &tracker, Some(viewport()));

    let wrapper = out.wrapper.expect("resize mode builds a wrapper");
    assert_eq!(wrapper.initial_x, 1280.0 / 2.0 - 320.0);
    assert_eq!(wrapper.initial_y, 100.0);
    assert_eq!(wrapper.min_width, 320.0);
    assert_eq!(wrapper.min_height, 200.0);
    assert_eq!(wrapper.bounds, DragBounds::Window);
    assert_eq!(wrapper.handles, ResizeHandles::ALL);
    assert_eq!(wrapper.drag_handle_class, "scrim-modal-header");
    assert_eq!(wrapper.style.get("z-index"), Some(&Value::from(1000)));

    let panel = out.panel;
    assert_eq!(panel.width, DialogWidth::Css("100%".to_owned()));
    assert_eq!(panel.z_index, 0);
    assert_eq!(panel.container, Container::InPlace);
    assert!(!panel.mask);
    assert_eq!(panel.mouse_position, None);
    assert_eq!(panel.transition_name, "");
    assert_eq!(panel.mask_transition_name, "");
    assert_eq!(
        panel.class_names.wrapper.as_deref(),
        Some("scrim-modal-resize-wrapper user-wrap")
    );
    // Takeover placement wins over the user panel style...
    assert_eq!(panel.style.get("position"), Some(&Value::from("static")));
    assert_eq!(panel.style.get("top"), Some(&Value::from("auto")));
    assert_eq!(panel.style.get("color"), Some(&Value::from("inherit")));
    // ...while the user wrapper style wins over the takeover baseline.
    assert_eq!(
        panel.styles.wrapper.get("position"),
        Some(&Value::from("static"))
    );
    assert_eq!(
        panel.styles.wrapper.get("outline"),
        Some(&Value::from("none"))
    );
}

#[test]
fn resize_and_plain_panels_differ_only_in_the_enumerated_fields() {
    let tracker = ClickTracker::new();
    let plain = compose(&rich_props(false), &ctx(), &tracker, Some(viewport()));
    let resized = compose(&rich_props(true), &ctx(), &tracker, Some(viewport()));

    let mut normalized = resized.panel.clone();
    normalized.width = plain.panel.width.clone();
    normalized.z_index = plain.panel.z_index;
    normalized.container = plain.panel.container.clone();
    normalized.mask = plain.panel.mask;
    normalized.mouse_position = plain.panel.mouse_position;
    normalized.transition_name = plain.panel.transition_name.clone();
    normalized.mask_transition_name = plain.panel.mask_transition_name.clone();
    normalized.class_names.wrapper = plain.panel.class_names.wrapper.clone();
    normalized.style = plain.panel.style.clone();
    normalized.styles.wrapper = plain.panel.styles.wrapper.clone();

    assert_eq!(normalized, plain.panel);
}

#[test]
fn default_dialog_is_masked_top_anchored_and_zoomed() {
    let out = compose(
        &ModalProps {
            open: Some(true),
            ..ModalProps::default()
        },
        &ctx(),
        &ClickTracker::new(),
        None,
    );
    assert_eq!(out.panel.width, DialogWidth::Px(520.0));
    assert!(out.panel.mask);
    assert_eq!(out.panel.transition_name, "scrim-zoom");
    assert_eq!(out.panel.mask_transition_name, "scrim-fade");

    // The top anchor lives in the assembled stylesheet, not the config.
    let theme = ResolvedTheme::resolve(&GlobalTokens::default(), "scrim-modal");
    let panel_group = theme
        .styles
        .iter()
        .find(|g| g.selector == ".scrim-modal")
        .expect("panel group");
    assert_eq!(
        panel_group.declarations.get("top").map(Value::resolve),
        Some("100px".to_owned())
    );
}

#[test]
fn resize_scenario_places_the_wrapper_at_300_100() {
    // 1120px viewport, default 520px width: 1120/2 - 520/2 = 300.
    let out = compose(
        &ModalProps {
            open: Some(true),
            resize: true,
            ..ModalProps::default()
        },
        &ctx(),
        &ClickTracker::new(),
        Some(Viewport {
            width: 1120.0,
            height: 700.0,
        }),
    );
    let wrapper = out.wrapper.expect("resize wrapper");
    assert_eq!(wrapper.initial_x, 300.0);
    assert_eq!(wrapper.initial_y, 100.0);
    assert_eq!(out.panel.width, DialogWidth::Css("100%".to_owned()));
    assert!(!out.panel.mask);
    assert_eq!(out.panel.transition_name, "");
}

#[test]
fn closable_false_suppresses_even_the_context_icon() {
    let context = ContextDefaults {
        modal: Some(ModalContextConfig {
            close_icon: Some(Node::icon("close-circle", "brand-close")),
            ..ModalContextConfig::default()
        }),
        ..ctx()
    };
    let out = compose(
        &ModalProps {
            closable: Some(false),
            ..ModalProps::default()
        },
        &context,
        &ClickTracker::new(),
        None,
    );
    assert!(!out.panel.closable);
    assert_eq!(out.panel.close_icon, None);
}

#[test]
fn footer_none_wins_over_attached_handlers() {
    let out = compose(
        &ModalProps {
            footer: FooterProp::None,
            ok_text: Some("Save".to_owned()),
            on_ok: Some(scrim_modal::Callback::new(|| {})),
            on_cancel: Some(scrim_modal::Callback::new(|| {})),
            ..ModalProps::default()
        },
        &ctx(),
        &ClickTracker::new(),
        None,
    );
    assert_eq!(out.panel.footer, None);
    // Cancel handling is still wired to the close affordance.
    assert!(out.panel.on_close.is_some());
}

#[test]
fn composer_class_names_match_the_assembled_stylesheet() {
    let theme = ResolvedTheme::resolve(&GlobalTokens::default(), "scrim-modal");
    let tracker = ClickTracker::new();

    let centered = ModalProps {
        centered: true,
        ..ModalProps::default()
    };
    let out = compose(&centered, &ctx(), &tracker, None);
    let wrap_class = out.panel.class_names.wrapper.expect("structural class");

    let panel_group = theme
        .styles
        .iter()
        .find(|g| g.selector == ".scrim-modal")
        .expect("panel group");
    assert!(
        panel_group
            .nested
            .iter()
            .any(|g| g.selector.contains(wrap_class.as_str()))
    );

    let resized: ComposedDialog = compose(
        &ModalProps {
            resize: true,
            ..ModalProps::default()
        },
        &ctx(),
        &tracker,
        Some(viewport()),
    );
    let wrap_class = resized.panel.class_names.wrapper.expect("resize class");
    assert!(
        theme
            .styles
            .iter()
            .any(|g| g.selector == format!(".{wrap_class}"))
    );
}
