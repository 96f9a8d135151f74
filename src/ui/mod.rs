//! UI components and their shared building blocks.
//!
//! The UI is organized into:
//! - `classes`: class-name assembly
//! - `theme`: DaisyUI color tokens
//! - `accessibility`: ARIA roles and labels
//! - `components`: the avatar and icon atoms
//! - `error`: parsing errors for untyped component options

pub mod accessibility;
pub mod classes;
pub mod components;
pub mod error;
pub mod theme;

pub use accessibility::{AccessibleElement, Role};
pub use classes::ClassList;
pub use error::ComponentError;
pub use theme::ThemeColor;
