//! Accessibility annotations for rendered markup.
//!
//! Components describe themselves with an [`AccessibleElement`]; the
//! element is then turned into the ARIA attributes written to the HTML.

/// Semantic roles used by the atoms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// An element that can be activated.
    Button,
    /// An image or icon that conveys meaning.
    Image,
    /// Purely decorative content, hidden from assistive technology.
    Presentation,
}

impl Role {
    /// Returns the ARIA role name, if one should be written.
    ///
    /// Decorative content is hidden with `aria-hidden` instead of a role.
    pub fn aria_name(&self) -> Option<&'static str> {
        match self {
            Role::Button => Some("button"),
            Role::Image => Some("img"),
            Role::Presentation => None,
        }
    }
}

/// Describes how an element is exposed to assistive technology.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessibleElement {
    /// Semantic role of the element.
    pub role: Role,
    /// Accessible label (what screen readers announce).
    pub label: Option<String>,
}

impl AccessibleElement {
    /// Creates a new accessible element.
    pub fn new(role: Role) -> Self {
        Self { role, label: None }
    }

    /// Sets the label. Blank labels are ignored.
    pub fn label(mut self, label: Option<impl Into<String>>) -> Self {
        self.label = label.map(Into::into).filter(|l: &String| !l.trim().is_empty());
        self
    }

    /// The `role` attribute value.
    pub fn role_attr(&self) -> Option<&'static str> {
        self.role.aria_name()
    }

    /// The `aria-label` attribute value.
    pub fn label_attr(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// The `aria-hidden` attribute value.
    pub fn hidden_attr(&self) -> Option<&'static str> {
        (self.role == Role::Presentation).then_some("true")
    }

    /// The `tabindex` attribute value. Only activatable elements take focus.
    pub fn tabindex_attr(&self) -> Option<&'static str> {
        (self.role == Role::Button).then_some("0")
    }
}
