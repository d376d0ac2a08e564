use std::borrow::Cow;

use mil_core::{CLASS_PREFIX, XS_QUERY};

/// Settings of a [`StyleContext`](crate::StyleContext).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Prefix of generated class names.
    pub class_prefix: Cow<'static, str>,
    /// Media query the `xs` variant is wrapped in.
    pub xs_query: Cow<'static, str>,
    /// Also hash `hover`, `focus`, `before` and `after` variants into the class name.
    ///
    /// Off by default: styles that differ only in those variants then share
    /// a class name, and only the first one injected gets its variant rules.
    pub hash_variants: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            class_prefix: Cow::Borrowed(CLASS_PREFIX),
            xs_query: Cow::Borrowed(XS_QUERY),
            hash_variants: false,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn class_prefix(mut self, prefix: impl Into<Cow<'static, str>>) -> Self {
        self.class_prefix = prefix.into();
        self
    }
    pub fn xs_query(mut self, query: impl Into<Cow<'static, str>>) -> Self {
        self.xs_query = query.into();
        self
    }
    pub fn hash_variants(mut self, enable: bool) -> Self {
        self.hash_variants = enable;
        self
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.class_prefix, "mil-");
        assert_eq!(config.xs_query, "@media (max-width: 600px)");
        assert!(!config.hash_variants);
    }

    #[test]
    fn setters() {
        let config = Config::new()
            .class_prefix(String::from("app-"))
            .xs_query("@media (max-width: 480px)")
            .hash_variants(true);
        assert_eq!(config.class_prefix, "app-");
        assert_eq!(config.xs_query, "@media (max-width: 480px)");
        assert!(config.hash_variants);
    }
}
