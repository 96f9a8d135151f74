//! Theme color tokens for the DaisyUI design system.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::ui::error::impl_variant_conversions;

/// Semantic color names exposed by DaisyUI themes.
///
/// The string form is the token used inside utility classes, so
/// `ThemeColor::BaseContent` becomes `text-base-content` or `ring-base-content`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(try_from = "String", into = "String")]
#[strum(serialize_all = "kebab-case")]
pub enum ThemeColor {
    Primary,
    Secondary,
    Accent,
    Neutral,
    Info,
    Success,
    Warning,
    Error,
    BaseContent,
}

impl_variant_conversions!(ThemeColor, "color");

impl ThemeColor {
    /// The bare token, e.g. `"base-content"`.
    pub fn token(self) -> &'static str {
        self.into()
    }

    /// Text color class, e.g. `text-primary`.
    pub fn text_class(self) -> String {
        format!("text-{}", self.token())
    }

    /// Ring color class, e.g. `ring-secondary`.
    pub fn ring_class(self) -> String {
        format!("ring-{}", self.token())
    }
}
