//! Integration tests for component rendering.
//!
//! These tests exercise the public API end to end: typed builders, JSON
//! props and settings all the way to the HTML fragment. Each component
//! module contains its own unit tests for the lookup tables.

use maud::Render;
use pretty_assertions::assert_eq;
use strum::IntoEnumIterator;

use daisy_atoms::app::{render_component, ComponentKind};
use daisy_atoms::config::Settings;
use daisy_atoms::ui::components::{
    Avatar, AvatarProps, AvatarShape, AvatarSize, Icon, IconProps, IconSize, PresenceStatus,
};
use daisy_atoms::ui::ThemeColor;

// ============================================================================
// Avatar Tests
// ============================================================================

#[test]
fn every_size_resolves_width_and_text_classes() {
    for size in AvatarSize::iter() {
        let html = Avatar::with_placeholder("AB").size(size).render().into_string();
        assert!(html.contains(size.width_class()), "{size}: {html}");
        assert!(
            html.contains(&format!(r#"<span class="{}">"#, size.text_class())),
            "{size}: {html}"
        );
    }
    assert_eq!(AvatarSize::Xs.width_class(), "w-8");
    assert_eq!(AvatarSize::Xs.text_class(), "text-xs");
}

#[test]
fn every_shape_resolves_its_class() {
    for shape in AvatarShape::iter() {
        let avatar = Avatar::new().shape(shape);
        assert!(avatar.inner_classes().contains(shape.class()));
    }
    assert_eq!(AvatarShape::Rounded.class(), "rounded-xl");
}

#[test]
fn placeholder_mode_never_renders_an_image() {
    let html = Avatar::image("/u/1.png")
        .placeholder("JD")
        .render()
        .into_string();
    assert!(html.contains(">JD</span>"));
    assert!(!html.contains("<img"));
}

#[test]
fn image_mode_never_renders_placeholder_text() {
    let html = Avatar::image("/u/1.png").render().into_string();
    assert!(html.contains(r#"<img src="/u/1.png""#));
    assert!(!html.contains("<span"));
    assert!(!html.contains("avatar-placeholder"));
}

#[test]
fn presence_markers() {
    let online = Avatar::new().status(PresenceStatus::Online).render().into_string();
    let offline = Avatar::new().status(PresenceStatus::Offline).render().into_string();
    let absent = Avatar::new().render().into_string();

    assert!(online.contains("avatar-online"));
    assert!(!online.contains("avatar-offline"));
    assert!(offline.contains("avatar-offline"));
    assert!(!offline.contains("avatar-online"));
    assert!(!absent.contains("avatar-online"));
    assert!(!absent.contains("avatar-offline"));
}

#[test]
fn ring_classes_follow_ring_flag() {
    let ringed = Avatar::new().ring(true).ring_color("ring-secondary");
    assert!(ringed
        .inner_classes()
        .join()
        .contains("ring-2 ring-secondary ring-offset-base-100 ring-offset-2"));

    let plain = Avatar::new().ring(false).ring_color("ring-secondary");
    let classes = plain.inner_classes();
    for class in ["ring-2", "ring-secondary", "ring-offset-base-100", "ring-offset-2"] {
        assert!(!classes.contains(class), "unexpected {class}");
    }
}

#[test]
fn ring_color_from_theme_token() {
    let avatar = Avatar::new()
        .ring(true)
        .ring_color(ThemeColor::Accent.ring_class());
    assert!(avatar.inner_classes().contains("ring-accent"));
}

#[test]
fn default_avatar_markup() {
    let html = Avatar::new().render().into_string();
    assert_eq!(
        html,
        r#"<div class="avatar"><div class="w-16 rounded-full bg-base-300"><img src="https://placehold.co/64x64?text=DB" alt="Avatar"></div></div>"#
    );
}

#[test]
fn avatar_props_and_builder_agree() {
    let props: AvatarProps = serde_json::from_str(
        r#"{"placeholderText":"JD","size":"sm","shape":"square","presence":"online"}"#,
    )
    .unwrap();
    let from_props = props.into_avatar(&Settings::default().avatar);
    let built = Avatar::with_placeholder("JD")
        .size(AvatarSize::Sm)
        .shape(AvatarShape::Square)
        .status(PresenceStatus::Online);

    assert_eq!(from_props, built);
}

// ============================================================================
// Icon Tests
// ============================================================================

#[test]
fn icon_markup_carries_font_axes() {
    let html = Icon::new("favorite")
        .size(IconSize::Lg)
        .color(ThemeColor::Error)
        .fill(true)
        .render()
        .into_string();

    assert!(html.starts_with(r#"<span class="material-symbols-outlined text-3xl text-error""#));
    assert!(html.contains("font-variation-settings: 'FILL' 1, 'wght' 400, 'GRAD' 0, 'opsz' 24"));
    assert!(html.ends_with(">favorite</span>"));
}

#[test]
fn icon_props_use_settings_defaults() {
    let mut settings = Settings::default();
    settings.icon.color = Some(ThemeColor::Primary);
    settings.icon.fill = true;

    let props: IconProps = serde_json::from_str(r#"{"name":"home"}"#).unwrap();
    let icon = props.into_icon(&settings.icon).unwrap();

    assert!(icon.classes().contains("text-primary"));
    assert!(icon.font_variation_settings().starts_with("'FILL' 1"));
}

#[test]
fn icon_label_is_escaped() {
    let html = Icon::new("info")
        .aria_label(r#"Say "hi""#)
        .render()
        .into_string();
    assert!(html.contains(r#"aria-label="Say &quot;hi&quot;""#));
    assert!(html.contains(r#"role="img""#));
}

// ============================================================================
// Preview Tests
// ============================================================================

#[test]
fn preview_renders_icon_from_json() {
    let html = render_component(
        ComponentKind::Icon,
        r#"{"name":"search","variant":"rounded","weight":300}"#,
        &Settings::default(),
    )
    .unwrap();

    assert_eq!(
        html,
        r#"<span class="material-symbols-rounded text-2xl" style="font-variation-settings: 'FILL' 0, 'wght' 300, 'GRAD' 0, 'opsz' 24" aria-hidden="true">search</span>"#
    );
}

#[test]
fn preview_rejects_unknown_values() {
    let result = render_component(
        ComponentKind::Icon,
        r#"{"name":"home","color":"teal"}"#,
        &Settings::default(),
    );
    assert!(result.is_err());
}
