//! Icon component.
//!
//! Renders a Google Material Symbols glyph. The icon name is written as the
//! ligature text of a `<span>`; styling is carried by the font class, utility
//! classes and the font's variable axes.

use std::fmt;

use maud::{html, Markup, Render};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::config::IconDefaults;
use crate::ui::accessibility::{AccessibleElement, Role};
use crate::ui::classes::ClassList;
use crate::ui::error::{impl_variant_conversions, ComponentError, Result};
use crate::ui::theme::ThemeColor;

/// Type alias for icon activation handlers.
type ActivateHandler = Box<dyn Fn() + 'static>;

/// Icon size options.
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
pub enum IconSize {
    Xs,
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
    #[strum(serialize = "2xl")]
    Xxl,
    #[strum(serialize = "3xl")]
    Xxxl,
}

impl_variant_conversions!(IconSize, "icon size");

impl IconSize {
    /// Font size class.
    pub fn class(self) -> &'static str {
        match self {
            IconSize::Xs => "text-base",
            IconSize::Sm => "text-lg",
            IconSize::Md => "text-2xl",
            IconSize::Lg => "text-3xl",
            IconSize::Xl => "text-4xl",
            IconSize::Xxl => "text-5xl",
            IconSize::Xxxl => "text-6xl",
        }
    }
}

/// Material Symbols style families.
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
pub enum IconVariant {
    #[default]
    Outlined,
    Rounded,
    Sharp,
}

impl_variant_conversions!(IconVariant, "icon variant");

impl IconVariant {
    /// Font family class provided by the Material Symbols stylesheet.
    pub fn font_class(self) -> &'static str {
        match self {
            IconVariant::Outlined => "material-symbols-outlined",
            IconVariant::Rounded => "material-symbols-rounded",
            IconVariant::Sharp => "material-symbols-sharp",
        }
    }
}

/// Stroke weight axis (`wght`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(try_from = "u16", into = "u16")]
pub enum IconWeight {
    Thin,
    ExtraLight,
    Light,
    #[default]
    Regular,
    Medium,
    SemiBold,
    Bold,
}

impl IconWeight {
    /// Numeric `wght` axis value.
    pub fn value(self) -> u16 {
        match self {
            IconWeight::Thin => 100,
            IconWeight::ExtraLight => 200,
            IconWeight::Light => 300,
            IconWeight::Regular => 400,
            IconWeight::Medium => 500,
            IconWeight::SemiBold => 600,
            IconWeight::Bold => 700,
        }
    }
}

impl TryFrom<u16> for IconWeight {
    type Error = ComponentError;

    fn try_from(value: u16) -> Result<Self> {
        match value {
            100 => Ok(IconWeight::Thin),
            200 => Ok(IconWeight::ExtraLight),
            300 => Ok(IconWeight::Light),
            400 => Ok(IconWeight::Regular),
            500 => Ok(IconWeight::Medium),
            600 => Ok(IconWeight::SemiBold),
            700 => Ok(IconWeight::Bold),
            other => Err(ComponentError::InvalidWeight(other)),
        }
    }
}

impl From<IconWeight> for u16 {
    fn from(weight: IconWeight) -> u16 {
        weight.value()
    }
}

impl fmt::Display for IconWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Optical size axis (`opsz`), 20 to 48.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct OpticalSize(u8);

impl OpticalSize {
    pub const MIN: u8 = 20;
    pub const MAX: u8 = 48;

    /// Validate an optical size.
    pub fn new(value: i64) -> Result<Self> {
        check_range("opticalSize", value, Self::MIN.into(), Self::MAX.into())
            .map(|v| Self(v as u8))
    }

    /// Clamp an arbitrary value into the supported range.
    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(Self::MIN.into(), Self::MAX.into()) as u8)
    }

    /// Numeric `opsz` axis value.
    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for OpticalSize {
    fn default() -> Self {
        Self(24)
    }
}

impl TryFrom<i64> for OpticalSize {
    type Error = ComponentError;

    fn try_from(value: i64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<OpticalSize> for i64 {
    fn from(size: OpticalSize) -> i64 {
        size.0.into()
    }
}

/// Grade axis (`GRAD`), -25 to 200.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Grade(i16);

impl Grade {
    pub const MIN: i16 = -25;
    pub const MAX: i16 = 200;

    /// Validate a grade.
    pub fn new(value: i64) -> Result<Self> {
        check_range("grade", value, Self::MIN.into(), Self::MAX.into()).map(|v| Self(v as i16))
    }

    /// Clamp an arbitrary value into the supported range.
    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(Self::MIN.into(), Self::MAX.into()) as i16)
    }

    /// Numeric `GRAD` axis value.
    pub fn value(self) -> i16 {
        self.0
    }
}

impl TryFrom<i64> for Grade {
    type Error = ComponentError;

    fn try_from(value: i64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Grade> for i64 {
    fn from(grade: Grade) -> i64 {
        grade.0.into()
    }
}

fn check_range(field: &'static str, value: i64, min: i64, max: i64) -> Result<i64> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(ComponentError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}

/// An icon component.
pub struct Icon {
    name: String,
    size: IconSize,
    variant: IconVariant,
    color: Option<ThemeColor>,
    weight: IconWeight,
    fill: bool,
    optical_size: OpticalSize,
    grade: Grade,
    class: Option<String>,
    aria_label: Option<String>,
    on_activate: Option<ActivateHandler>,
}

impl Icon {
    /// Create a new icon from a Material Symbols ligature name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size: IconSize::default(),
            variant: IconVariant::default(),
            color: None,
            weight: IconWeight::default(),
            fill: false,
            optical_size: OpticalSize::default(),
            grade: Grade::default(),
            class: None,
            aria_label: None,
            on_activate: None,
        }
    }

    /// Set the icon size.
    pub fn size(mut self, size: IconSize) -> Self {
        self.size = size;
        self
    }

    /// Set the style family.
    pub fn variant(mut self, variant: IconVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set a theme color. Without one the icon inherits the text color.
    pub fn color(mut self, color: impl Into<Option<ThemeColor>>) -> Self {
        self.color = color.into();
        self
    }

    /// Set the stroke weight.
    pub fn weight(mut self, weight: IconWeight) -> Self {
        self.weight = weight;
        self
    }

    /// Render the filled version of the glyph.
    pub fn fill(mut self, fill: bool) -> Self {
        self.fill = fill;
        self
    }

    /// Set the optical size.
    pub fn optical_size(mut self, optical_size: OpticalSize) -> Self {
        self.optical_size = optical_size;
        self
    }

    /// Set the grade.
    pub fn grade(mut self, grade: Grade) -> Self {
        self.grade = grade;
        self
    }

    /// Append extra classes.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Set the label announced by screen readers.
    pub fn aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria_label = Some(label.into());
        self
    }

    /// Set the activation handler. Makes the icon behave as a button.
    pub fn on_activate(mut self, handler: impl Fn() + 'static) -> Self {
        self.on_activate = Some(Box::new(handler));
        self
    }

    /// The ligature name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether an activation handler is attached.
    pub fn is_interactive(&self) -> bool {
        self.on_activate.is_some()
    }

    /// Invoke the activation handler, if any. Returns whether one ran.
    pub fn activate(&self) -> bool {
        match &self.on_activate {
            Some(handler) => {
                tracing::trace!(icon = %self.name, "Icon activated");
                handler();
                true
            }
            None => false,
        }
    }

    /// Classes of the rendered `<span>`.
    pub fn classes(&self) -> ClassList {
        ClassList::new()
            .with(self.variant.font_class())
            .with(self.size.class())
            .with_opt(self.color.map(ThemeColor::text_class))
            .with_if(self.is_interactive(), "cursor-pointer")
            .with_opt(self.class.as_deref())
    }

    /// Value of the `font-variation-settings` property.
    pub fn font_variation_settings(&self) -> String {
        format!(
            "'FILL' {}, 'wght' {}, 'GRAD' {}, 'opsz' {}",
            u8::from(self.fill),
            self.weight.value(),
            self.grade.value(),
            self.optical_size.value()
        )
    }

    /// How the icon is exposed to assistive technology.
    pub fn accessibility(&self) -> AccessibleElement {
        let label = self
            .aria_label
            .as_deref()
            .filter(|label| !label.trim().is_empty());
        let role = if self.is_interactive() {
            Role::Button
        } else if label.is_some() {
            Role::Image
        } else {
            Role::Presentation
        };
        AccessibleElement::new(role).label(label)
    }
}

impl Render for Icon {
    fn render(&self) -> Markup {
        let a11y = self.accessibility();
        let style = format!("font-variation-settings: {}", self.font_variation_settings());

        html! {
            span
                class=(self.classes().join())
                style=(style)
                role=[a11y.role_attr()]
                tabindex=[a11y.tabindex_attr()]
                aria-label=[a11y.label_attr()]
                aria-hidden=[a11y.hidden_attr()]
            { (self.name) }
        }
    }
}

/// Untyped icon options, as they arrive from JSON.
///
/// `name` is required; every other field may be omitted. The activation
/// handler cannot be expressed in data and is attached to the built [`Icon`]
/// instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconProps {
    pub name: String,
    pub size: Option<IconSize>,
    pub variant: Option<IconVariant>,
    pub color: Option<ThemeColor>,
    pub weight: Option<IconWeight>,
    pub fill: Option<bool>,
    pub optical_size: Option<OpticalSize>,
    pub grade: Option<Grade>,
    #[serde(alias = "extraClassNames")]
    pub class_name: Option<String>,
    #[serde(alias = "accessibilityLabel")]
    pub aria_label: Option<String>,
}

impl IconProps {
    /// Build an icon, filling unset options from `defaults`.
    ///
    /// Fails if `name` is blank, since there is no glyph to render.
    pub fn into_icon(self, defaults: &IconDefaults) -> Result<Icon> {
        if self.name.trim().is_empty() {
            return Err(ComponentError::EmptyIconName);
        }

        let mut icon = Icon::new(self.name)
            .size(self.size.unwrap_or(defaults.size))
            .variant(self.variant.unwrap_or(defaults.variant))
            .color(self.color.or(defaults.color))
            .weight(self.weight.unwrap_or(defaults.weight))
            .fill(self.fill.unwrap_or(defaults.fill))
            .optical_size(self.optical_size.unwrap_or(defaults.optical_size))
            .grade(self.grade.unwrap_or(defaults.grade));

        if let Some(class) = self.class_name {
            icon = icon.class(class);
        }
        if let Some(label) = self.aria_label {
            icon = icon.aria_label(label);
        }
        Ok(icon)
    }
}
