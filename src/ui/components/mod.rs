//! Reusable UI components.
//!
//! Components are stateless: each is configured through a builder or a
//! deserialized props record and rendered to HTML through [`maud::Render`].

pub mod avatar;
pub mod icon;

pub use avatar::{Avatar, AvatarProps, AvatarShape, AvatarSize, PresenceStatus};
pub use icon::{Grade, Icon, IconProps, IconSize, IconVariant, IconWeight, OpticalSize};
