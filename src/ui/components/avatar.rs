//! Avatar component.
//!
//! Displays a user avatar as an image or an initials placeholder inside a
//! sized, shaped container, optionally ringed and marked with a presence
//! indicator. Class names follow the DaisyUI `avatar` vocabulary.

use maud::{html, Markup, Render};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::config::AvatarDefaults;
use crate::ui::classes::ClassList;
use crate::ui::error::impl_variant_conversions;

/// Image shown when no source is given.
pub const DEFAULT_AVATAR_SRC: &str = "https://placehold.co/64x64?text=DB";

/// Alt text used when none is given.
pub const DEFAULT_AVATAR_ALT: &str = "Avatar";

/// Ring color class used when none is given.
pub const DEFAULT_RING_COLOR: &str = "ring-primary";

/// Avatar size options.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(try_from = "String", into = "String")]
#[strum(serialize_all = "lowercase")]
pub enum AvatarSize {
    /// Extra small (`w-8`).
    Xs,
    /// Small (`w-12`).
    Sm,
    /// Medium (`w-16`).
    #[default]
    Md,
    /// Large (`w-24`).
    Lg,
    /// Extra large (`w-32`).
    Xl,
}

impl_variant_conversions!(AvatarSize, "avatar size");

impl AvatarSize {
    /// Width class of the inner container.
    pub fn width_class(self) -> &'static str {
        match self {
            AvatarSize::Xs => "w-8",
            AvatarSize::Sm => "w-12",
            AvatarSize::Md => "w-16",
            AvatarSize::Lg => "w-24",
            AvatarSize::Xl => "w-32",
        }
    }

    /// Text size class for placeholder initials.
    pub fn text_class(self) -> &'static str {
        match self {
            AvatarSize::Xs => "text-xs",
            AvatarSize::Sm => "text-sm",
            AvatarSize::Md => "text-base",
            AvatarSize::Lg => "text-xl",
            AvatarSize::Xl => "text-3xl",
        }
    }
}

/// Avatar shape options.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(try_from = "String", into = "String")]
#[strum(serialize_all = "lowercase")]
pub enum AvatarShape {
    /// Circular avatar.
    #[default]
    Circle,
    /// Square with large corner radius.
    Rounded,
    /// Square with small corner radius.
    Square,
}

impl_variant_conversions!(AvatarShape, "avatar shape");

impl AvatarShape {
    /// Corner treatment class.
    pub fn class(self) -> &'static str {
        match self {
            AvatarShape::Circle => "rounded-full",
            AvatarShape::Rounded => "rounded-xl",
            AvatarShape::Square => "rounded",
        }
    }
}

/// Online/offline presence indicator.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(try_from = "String", into = "String")]
#[strum(serialize_all = "lowercase")]
pub enum PresenceStatus {
    Online,
    Offline,
}

impl_variant_conversions!(PresenceStatus, "presence status");

impl PresenceStatus {
    /// Modifier class on the outer container.
    pub fn class(self) -> &'static str {
        match self {
            PresenceStatus::Online => "avatar-online",
            PresenceStatus::Offline => "avatar-offline",
        }
    }
}

/// A user avatar component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Avatar {
    src: String,
    alt: String,
    size: AvatarSize,
    shape: AvatarShape,
    status: Option<PresenceStatus>,
    placeholder: Option<String>,
    ring: bool,
    ring_color: String,
    class: Option<String>,
}

impl Default for Avatar {
    fn default() -> Self {
        Self {
            src: DEFAULT_AVATAR_SRC.to_string(),
            alt: DEFAULT_AVATAR_ALT.to_string(),
            size: AvatarSize::default(),
            shape: AvatarShape::default(),
            status: None,
            placeholder: None,
            ring: false,
            ring_color: DEFAULT_RING_COLOR.to_string(),
            class: None,
        }
    }
}

impl Avatar {
    /// Create an avatar showing the default placeholder image.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an avatar showing the given image.
    pub fn image(src: impl Into<String>) -> Self {
        Self::new().src(src)
    }

    /// Create an avatar showing placeholder text instead of an image.
    pub fn with_placeholder(text: impl Into<String>) -> Self {
        Self::new().placeholder(text)
    }

    /// Create a placeholder avatar from a full name, extracting initials.
    pub fn from_name(name: &str) -> Self {
        Self::new().alt(name.trim()).placeholder(extract_initials(name))
    }

    /// Set the image source URL.
    pub fn src(mut self, src: impl Into<String>) -> Self {
        self.src = src.into();
        self
    }

    /// Set the image alt text.
    pub fn alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = alt.into();
        self
    }

    /// Set the avatar size.
    pub fn size(mut self, size: AvatarSize) -> Self {
        self.size = size;
        self
    }

    /// Set the avatar shape.
    pub fn shape(mut self, shape: AvatarShape) -> Self {
        self.shape = shape;
        self
    }

    /// Set or clear the presence indicator.
    pub fn status(mut self, status: impl Into<Option<PresenceStatus>>) -> Self {
        self.status = status.into();
        self
    }

    /// Switch to placeholder mode with the given text (e.g. initials).
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = Some(text.into());
        self
    }

    /// Show or hide the decorative ring.
    pub fn ring(mut self, ring: bool) -> Self {
        self.ring = ring;
        self
    }

    /// Set the ring color class, e.g. `ring-secondary`.
    pub fn ring_color(mut self, color: impl Into<String>) -> Self {
        self.ring_color = color.into();
        self
    }

    /// Append extra classes to the outer container.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Placeholder text, if placeholder mode is active.
    pub fn placeholder_text(&self) -> Option<&str> {
        self.placeholder.as_deref().filter(|text| !text.is_empty())
    }

    /// Whether the avatar renders placeholder text instead of an image.
    pub fn is_placeholder(&self) -> bool {
        self.placeholder_text().is_some()
    }

    /// Classes of the outer `avatar` container.
    pub fn container_classes(&self) -> ClassList {
        ClassList::new()
            .with("avatar")
            .with_opt(self.status.map(PresenceStatus::class))
            .with_if(self.is_placeholder(), "avatar-placeholder")
            .with_opt(self.class.as_deref())
    }

    /// Classes of the inner sized and shaped container.
    pub fn inner_classes(&self) -> ClassList {
        let mut classes = ClassList::new()
            .with(self.size.width_class())
            .with(self.shape.class());

        if self.ring {
            classes.push("ring-2");
            classes.push(&self.ring_color);
            classes.push("ring-offset-base-100");
            classes.push("ring-offset-2");
        }

        if self.is_placeholder() {
            classes.push("bg-neutral");
            classes.push("text-neutral-content");
        } else {
            classes.push("bg-base-300");
        }

        classes
    }

    /// Text size class of the placeholder span.
    pub fn placeholder_class(&self) -> &'static str {
        self.size.text_class()
    }
}

impl Render for Avatar {
    fn render(&self) -> Markup {
        html! {
            div class=(self.container_classes().join()) {
                div class=(self.inner_classes().join()) {
                    @if let Some(text) = self.placeholder_text() {
                        span class=(self.placeholder_class()) { (text) }
                    } @else {
                        img src=(self.src) alt=(self.alt);
                    }
                }
            }
        }
    }
}

/// Untyped avatar options, as they arrive from JSON.
///
/// Missing fields fall back to [`AvatarDefaults`]; unknown enumeration values
/// are rejected during deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AvatarProps {
    #[serde(alias = "imageSource")]
    pub src: Option<String>,
    #[serde(alias = "altText")]
    pub alt: Option<String>,
    pub size: Option<AvatarSize>,
    pub shape: Option<AvatarShape>,
    #[serde(alias = "presence")]
    pub status: Option<PresenceStatus>,
    #[serde(alias = "placeholderText")]
    pub placeholder: Option<String>,
    pub ring: bool,
    pub ring_color: Option<String>,
    #[serde(alias = "extraClassNames")]
    pub class_name: Option<String>,
}

impl AvatarProps {
    /// Build an avatar, filling unset options from `defaults`.
    pub fn into_avatar(self, defaults: &AvatarDefaults) -> Avatar {
        let mut avatar = Avatar::new()
            .src(self.src.unwrap_or_else(|| defaults.src.clone()))
            .alt(self.alt.unwrap_or_else(|| defaults.alt.clone()))
            .size(self.size.unwrap_or(defaults.size))
            .shape(self.shape.unwrap_or(defaults.shape))
            .status(self.status)
            .ring(self.ring)
            .ring_color(self.ring_color.unwrap_or_else(|| defaults.ring_color.clone()));

        if let Some(text) = self.placeholder {
            avatar = avatar.placeholder(text);
        }
        if let Some(class) = self.class_name {
            avatar = avatar.class(class);
        }
        avatar
    }
}

fn extract_initials(name: &str) -> String {
    let parts: Vec<&str> = name.split_whitespace().collect();
    match parts.len() {
        0 => "?".to_string(),
        1 => parts[0]
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_default(),
        _ => {
            let first = parts[0].chars().next().unwrap_or('?');
            let last = parts[parts.len() - 1].chars().next().unwrap_or('?');
            format!("{}{}", first.to_uppercase(), last.to_uppercase())
        }
    }
}
