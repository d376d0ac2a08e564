//! Style compiler.
//!
//! Turns a builder into declarations (`to_style`), a flat declaration string
//! (`to_css_string`) and, for a whole composite, into the list of rules that should
//! be written to a stylesheet.
use const_format::formatcp;
use inflector::cases::kebabcase::to_kebab_case;

use crate::{props::StyleKey, Mil};

/// Max width of the `xs` breakpoint, in pixels.
pub const XS_MAX_WIDTH: u32 = 600;
/// Media query the `xs` variant is wrapped in.
pub const XS_QUERY: &str = formatcp!("@media (max-width: {}px)", XS_MAX_WIDTH);

/// Ordered CSS declarations keyed by camelCase property name.
///
/// Suitable as an inline `style` object for a rendering layer.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InlineStyle {
    declarations: Vec<(&'static str, String)>,
}

impl InlineStyle {
    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(name, _)| *name == property)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.declarations
            .iter()
            .map(|(name, value)| (*name, value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// `kebab-property:value` pairs joined with `;`, without trailing separator.
    pub fn to_css_string(&self) -> String {
        let mut result = String::new();
        for (name, value) in &self.declarations {
            if !result.is_empty() {
                result.push(';');
            }
            result.push_str(&to_kebab_case(name));
            result.push(':');
            result.push_str(value);
        }
        result
    }
}

impl IntoIterator for InlineStyle {
    type Item = (&'static str, String);
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.declarations.into_iter()
    }
}

impl Mil {
    /// Declarations of this node. Empty values are skipped.
    pub fn to_style(&self) -> InlineStyle {
        let declarations = self
            .properties()
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(key, value)| {
                let value = match key {
                    StyleKey::Content => format!("\"{value}\""),
                    _ => value.to_owned(),
                };
                (key.property_name(), value)
            })
            .collect();
        InlineStyle { declarations }
    }

    /// Declaration string of this node only, variants are ignored.
    pub fn to_css_string(&self) -> String {
        self.to_style().to_css_string()
    }

    /// Compile this node and its direct variants.
    pub fn composite(&self) -> Composite {
        let compile = |child: Option<&Mil>| child.map(Mil::to_css_string);
        Composite {
            base: self.to_css_string(),
            xs: compile(self.xs_variant()),
            hover: compile(self.hover_variant()),
            focus: compile(self.focus_variant()),
            before: compile(self.before_variant()),
            after: compile(self.after_variant()),
        }
    }
}

/// Declaration strings of a builder and its variants.
/// Derived on each finalization, never stored on the builder.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Composite {
    pub base: String,
    pub xs: Option<String>,
    pub hover: Option<String>,
    pub focus: Option<String>,
    pub before: Option<String>,
    pub after: Option<String>,
}

/// A complete rule and the stylesheet index it is meant to be inserted at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub index: usize,
    pub css: String,
}

fn non_empty(declarations: &Option<String>) -> Option<&str> {
    declarations.as_deref().filter(|d| !d.is_empty())
}

impl Composite {
    /// Text the class name is derived from.
    ///
    /// Pseudo variants are only part of it if `include_variants` is set,
    /// otherwise styles differing only in them share a class name.
    pub fn identity(&self, xs_query: &str, include_variants: bool) -> String {
        let mut identity = self.base.clone();
        if let Some(xs) = non_empty(&self.xs) {
            identity.push_str(&format!("{xs_query}{{{xs}}}"));
        }
        if include_variants {
            let variants = [
                (":hover", &self.hover),
                (":focus", &self.focus),
                ("::before", &self.before),
                ("::after", &self.after),
            ];
            for (selector, declarations) in variants {
                if let Some(declarations) = non_empty(declarations) {
                    identity.push_str(&format!("{selector}{{{declarations}}}"));
                }
            }
        }
        identity
    }

    /// Rules in insertion order.
    /// The base rule is always present, variants only when they declare something.
    pub fn rules(&self, class: &str, xs_query: &str) -> Vec<Rule> {
        let mut rules = vec![Rule {
            index: 0,
            css: format!(".{class}{{{}}}", self.base),
        }];
        if let Some(xs) = non_empty(&self.xs) {
            rules.push(Rule {
                index: 1,
                css: format!("{xs_query}{{.{class}{{{xs}}}}}"),
            });
        }
        let variants = [
            (2, ":hover", &self.hover),
            (2, ":focus", &self.focus),
            (0, "::before", &self.before),
            (0, "::after", &self.after),
        ];
        for (index, selector, declarations) in variants {
            if let Some(declarations) = non_empty(declarations) {
                rules.push(Rule {
                    index,
                    css: format!(".{class}{selector}{{{declarations}}}"),
                });
            }
        }
        rules
    }
}
