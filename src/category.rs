//! # Category
//!
//! The closed set of rendering intents a [`Span`] can carry. A category is a
//! pair of a [`Role`] and an [`Emphasis`]; it never holds a concrete color,
//! see [`crate::style`] for that.
//!
//! [`Span`]: crate::span::Span

use serde::{Serialize, Serializer};
use std::fmt;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names() {
        assert_eq!(Category::TEXT.name(), "Text");
        assert_eq!(Category::BOLD.name(), "Bold");
        assert_eq!(Category::RED.name(), "Red");
        assert_eq!(Category::BOLD_RED.name(), "BoldRed");
        assert_eq!(Category::BOLD_CYAN.to_string(), "BoldCyan");
    }

    #[test]
    fn css_classes() {
        assert_eq!(Category::TEXT.css_class(), None);
        assert_eq!(Category::BOLD.css_class().as_deref(), Some("-Color-Bold"));
        assert_eq!(
            Category::BOLD_YELLOW.css_class().as_deref(),
            Some("-Color-BoldYellow")
        );
        assert_eq!(Category::GREEN.css_class().as_deref(), Some("-Color-Green"));
    }

    #[test]
    fn all_is_exhaustive() {
        let mut seen = Vec::new();
        for role in Role::ALL {
            for emphasis in [Emphasis::Normal, Emphasis::Bold] {
                let category = Category::new(role, emphasis);
                assert!(Category::ALL.contains(&category));
                assert!(!seen.contains(&category));
                seen.push(category);
            }
        }
        assert_eq!(seen.len(), Category::ALL.len());
    }

    #[test]
    fn color_keys() {
        assert_eq!(Role::from_color_key("Red"), Some(Role::Red));
        assert_eq!(Role::from_color_key("Cyan"), Some(Role::Cyan));
        assert_eq!(Role::from_color_key("Plain"), None);
        assert_eq!(Role::from_color_key("red"), None);
    }

    #[test]
    fn serialize_as_name() {
        assert_eq!(
            serde_json::to_string(&Category::BOLD_GREEN).unwrap(),
            "\"BoldGreen\""
        );
    }
}

/// The semantic role of a span, which the style layer turns into a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Role {
    Plain,
    Red,
    Green,
    Yellow,
    Cyan,
}

impl Role {
    pub const ALL: [Role; 5] = [Role::Plain, Role::Red, Role::Green, Role::Yellow, Role::Cyan];

    /// The roles that map to a color, sorted by name.
    pub const COLORS: [Role; 4] = [Role::Cyan, Role::Green, Role::Red, Role::Yellow];

    pub fn name(self) -> &'static str {
        match self {
            Role::Plain => "Plain",
            Role::Red => "Red",
            Role::Green => "Green",
            Role::Yellow => "Yellow",
            Role::Cyan => "Cyan",
        }
    }

    /// Find the colored role named `key`. `Plain` has no color, hence no key.
    pub fn from_color_key(key: &str) -> Option<Self> {
        Self::COLORS.into_iter().find(|role| role.name() == key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Emphasis {
    Normal,
    Bold,
}

/// # Summary
///
/// `Category` is the rendering intent of a span: a [`Role`] and an
/// [`Emphasis`]. Every combination has a constant, a stable name, and,
/// except for [`Category::TEXT`], a CSS class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Category {
    role: Role,
    emphasis: Emphasis,
}

impl Category {
    pub const TEXT: Self = Self::new(Role::Plain, Emphasis::Normal);
    pub const BOLD: Self = Self::new(Role::Plain, Emphasis::Bold);
    pub const RED: Self = Self::new(Role::Red, Emphasis::Normal);
    pub const BOLD_RED: Self = Self::new(Role::Red, Emphasis::Bold);
    pub const GREEN: Self = Self::new(Role::Green, Emphasis::Normal);
    pub const BOLD_GREEN: Self = Self::new(Role::Green, Emphasis::Bold);
    pub const YELLOW: Self = Self::new(Role::Yellow, Emphasis::Normal);
    pub const BOLD_YELLOW: Self = Self::new(Role::Yellow, Emphasis::Bold);
    pub const CYAN: Self = Self::new(Role::Cyan, Emphasis::Normal);
    pub const BOLD_CYAN: Self = Self::new(Role::Cyan, Emphasis::Bold);

    pub const ALL: [Self; 10] = [
        Self::TEXT,
        Self::BOLD,
        Self::RED,
        Self::BOLD_RED,
        Self::GREEN,
        Self::BOLD_GREEN,
        Self::YELLOW,
        Self::BOLD_YELLOW,
        Self::CYAN,
        Self::BOLD_CYAN,
    ];

    pub const fn new(role: Role, emphasis: Emphasis) -> Self {
        Self { role, emphasis }
    }

    pub fn role(self) -> Role {
        self.role
    }

    pub fn emphasis(self) -> Emphasis {
        self.emphasis
    }

    pub fn is_bold(self) -> bool {
        self.emphasis == Emphasis::Bold
    }

    pub fn name(self) -> &'static str {
        use Emphasis::*;
        match (self.role, self.emphasis) {
            (Role::Plain, Normal) => "Text",
            (Role::Plain, Bold) => "Bold",
            (Role::Red, Normal) => "Red",
            (Role::Red, Bold) => "BoldRed",
            (Role::Green, Normal) => "Green",
            (Role::Green, Bold) => "BoldGreen",
            (Role::Yellow, Normal) => "Yellow",
            (Role::Yellow, Bold) => "BoldYellow",
            (Role::Cyan, Normal) => "Cyan",
            (Role::Cyan, Bold) => "BoldCyan",
        }
    }

    /// The class a stylesheet rule for this category is attached to.
    /// Plain text is left unstyled and has none.
    pub fn css_class(self) -> Option<String> {
        if self == Self::TEXT {
            None
        } else {
            Some(format!("-Color-{}", self.name()))
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}
