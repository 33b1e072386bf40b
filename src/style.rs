//! # Style
//!
//! Turns categories into concrete colors. The default palette is a constant
//! table; callers may override part of it with a [`ColorOverrides`], which is
//! validated when it is built, so that a bad key never reaches the output.
//! The result is a [`Stylesheet`], which renders to CSS.

use crate::category::{Category, Emphasis, Role};
use crate::error::{Error, Result};
use itertools::Itertools;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;


/// The built-in palette, sorted by color key.
pub const DEFAULT_COLORS: [(Role, &str); 4] = [
    (Role::Cyan, "#06989a"),
    (Role::Green, "#4e9a06"),
    (Role::Red, "#c00"),
    (Role::Yellow, "#c4a000"),
];

pub fn default_color(role: Role) -> Option<&'static str> {
    DEFAULT_COLORS
        .iter()
        .find(|(candidate, _)| *candidate == role)
        .map(|(_, color)| *color)
}

/// # Summary
///
/// `ColorOverrides` replaces some colors of the default palette. It can only
/// be built from known color keys (see [`Role::COLORS`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "BTreeMap<String, String>")]
pub struct ColorOverrides {
    colors: BTreeMap<Role, String>,
}

impl ColorOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the color named `key` with the CSS color `color`.
    pub fn with_color(mut self, key: &str, color: impl Into<String>) -> Result<Self> {
        let Some(role) = Role::from_color_key(key) else {
            return Error::UnknownColor {
                key: key.to_string(),
                expected: Role::COLORS.iter().map(|role| role.name()).join(", "),
            }
            .err();
        };
        self.colors.insert(role, color.into());
        Ok(self)
    }

    pub fn get(&self, role: Role) -> Option<&str> {
        self.colors.get(&role).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl TryFrom<BTreeMap<String, String>> for ColorOverrides {
    type Error = Error;

    fn try_from(colors: BTreeMap<String, String>) -> Result<Self> {
        colors
            .into_iter()
            .try_fold(Self::new(), |overrides, (key, color)| {
                overrides.with_color(&key, color)
            })
    }
}

/// One CSS rule, attached to the class of a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRule {
    category: Category,
    color: Option<String>,
    bold: bool,
}

impl StyleRule {
    pub fn category(&self) -> Category {
        self.category
    }

    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    pub fn is_bold(&self) -> bool {
        self.bold
    }
}

impl fmt::Display for StyleRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ".-Color-{} {{", self.category.name())?;
        if let Some(color) = &self.color {
            write!(f, " color: {color};")?;
        }
        if self.bold {
            write!(f, " font-weight: bold;")?;
        }
        write!(f, " }}")
    }
}

/// # Summary
///
/// `Stylesheet` is the ordered list of rules for every styled category:
/// `Bold` first, then for each color key in sorted order its bold and
/// normal variants. It renders to CSS, one rule per line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stylesheet {
    rules: Vec<StyleRule>,
}

impl Stylesheet {
    pub fn rules(&self) -> &[StyleRule] {
        &self.rules
    }

    pub fn rule_for(&self, category: Category) -> Option<&StyleRule> {
        self.rules.iter().find(|rule| rule.category == category)
    }
}

impl fmt::Display for Stylesheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rule in &self.rules {
            writeln!(f, "{rule}")?;
        }
        Ok(())
    }
}

/// Build the stylesheet of the default palette, patched with `overrides`.
pub fn stylesheet(overrides: &ColorOverrides) -> Stylesheet {
    let mut rules = vec![StyleRule {
        category: Category::BOLD,
        color: None,
        bold: true,
    }];
    for (role, default) in DEFAULT_COLORS {
        let color = overrides.get(role).unwrap_or(default);
        for emphasis in [Emphasis::Bold, Emphasis::Normal] {
            rules.push(StyleRule {
                category: Category::new(role, emphasis),
                color: Some(color.to_string()),
                bold: emphasis == Emphasis::Bold,
            });
        }
    }
    Stylesheet { rules }
}
