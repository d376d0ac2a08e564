use log::{debug, trace, warn};
use mil_core::{hash, InlineStyle, Mil};
use mil_sheet::{InjectionRegistry, MemorySheet, StyleSheet};

use crate::{Config, Error, Result};

/// Everything finalization needs: config, the optional target sheet
/// and the registry of classes already written to it.
///
/// A context without sheet (see [`StyleContext::detached`]) still hands out
/// class names, but never records or writes anything.
///
/// Access must be serialized by the caller, it is meant to live on the rendering thread.
#[derive(Debug)]
pub struct StyleContext<S = MemorySheet> {
    config: Config,
    registry: InjectionRegistry,
    sheet: Option<S>,
    to_string_disabled: bool,
}

impl Default for StyleContext<MemorySheet> {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl StyleContext<MemorySheet> {
    /// Context writing to a fresh [`MemorySheet`].
    pub fn in_memory() -> Self {
        Self::new(MemorySheet::new())
    }

    /// Context for environments without a document.
    pub fn detached() -> Self {
        Self::with_config(Config::default(), None)
    }
}

impl<S: StyleSheet> StyleContext<S> {
    pub fn new(sheet: S) -> Self {
        Self::with_config(Config::default(), Some(sheet))
    }

    pub fn with_config(config: Config, sheet: Option<S>) -> Self {
        Self {
            config,
            registry: InjectionRegistry::new(),
            sheet,
            to_string_disabled: false,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
    pub fn registry(&self) -> &InjectionRegistry {
        &self.registry
    }
    pub fn sheet(&self) -> Option<&S> {
        self.sheet.as_ref()
    }
    pub fn sheet_mut(&mut self) -> Option<&mut S> {
        self.sheet.as_mut()
    }

    /// Make every following finalization fail with [`Error::ToStringDisabled`].
    /// Useful to catch places that turn styles into class names by accident.
    pub fn disable_to_string_call(&mut self) {
        self.to_string_disabled = true;
    }
    pub fn is_to_string_disabled(&self) -> bool {
        self.to_string_disabled
    }

    /// Compute class name of `style` and make sure its rules are in the sheet.
    pub fn finalize(&mut self, style: &Mil) -> Result<String> {
        if self.to_string_disabled {
            warn!(target: "mil", "refused to finalize style, toString is disabled");
            return Err(Error::ToStringDisabled);
        }
        let composite = style.composite();
        let identity = composite.identity(&self.config.xs_query, self.config.hash_variants);
        let class = hash::class_name(&self.config.class_prefix, &identity);

        let Some(sheet) = self.sheet.as_mut() else {
            trace!(target: "mil", "no sheet attached, skip injection of {class}");
            return Ok(class);
        };
        let rules = composite
            .rules(&class, &self.config.xs_query)
            .into_iter()
            .map(|rule| (rule.index, rule.css));
        if self.registry.inject(sheet, &class, rules)? {
            debug!(target: "mil", "injected {class}: {composite:?}");
        }
        Ok(class)
    }
}

/// Props for a rendering layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Props {
    pub class_name: String,
    pub style: InlineStyle,
}

/// Finalization methods on the builder.
pub trait MilExt {
    /// Class name of the style, injecting its rules on first use.
    fn class_name<S: StyleSheet>(&self, ctx: &mut StyleContext<S>) -> Result<String>;

    /// Class name together with the inline declarations of the base node.
    fn to_props<S: StyleSheet>(&self, ctx: &mut StyleContext<S>) -> Result<Props>;
}

impl MilExt for Mil {
    fn class_name<S: StyleSheet>(&self, ctx: &mut StyleContext<S>) -> Result<String> {
        ctx.finalize(self)
    }

    fn to_props<S: StyleSheet>(&self, ctx: &mut StyleContext<S>) -> Result<Props> {
        Ok(Props {
            class_name: ctx.finalize(self)?,
            style: self.to_style(),
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::mil;
    use pretty_assertions::assert_eq;

    #[test]
    fn finalize_injects_base_and_variants() {
        let mut ctx = StyleContext::in_memory();
        let style = mil().p(8).pt(4).xs(mil().p(2)).hover(mil().m(1));
        let class = ctx.finalize(&style).unwrap();
        let sheet = ctx.sheet().unwrap();
        assert_eq!(
            sheet.rules(),
            [
                format!(".{class}{{padding:8px;padding-top:4px}}"),
                format!("@media (max-width: 600px){{.{class}{{padding:2px}}}}"),
                format!(".{class}:hover{{margin:1px}}"),
            ]
        );
        assert!(ctx.registry().contains(&class));
    }

    #[test]
    fn detached_context_only_names() {
        let mut ctx = StyleContext::detached();
        let class = ctx.finalize(&mil().block()).unwrap();
        assert_eq!(class, mil_core::hash::class_name("mil-", "display:block"));
        assert!(ctx.sheet().is_none());
        assert!(ctx.registry().is_empty());
    }

    #[test]
    fn custom_prefix_and_query() {
        let config = Config::new()
            .class_prefix("ui-")
            .xs_query("@media (max-width: 320px)");
        let mut ctx = StyleContext::with_config(config, Some(MemorySheet::new()));
        let class = ctx.finalize(&mil().w(1).xs(mil().w(2))).unwrap();
        assert_eq!(
            class,
            mil_core::hash::class_name("ui-", "width:1px@media (max-width: 320px){width:2px}")
        );
        assert_eq!(
            ctx.sheet().unwrap().rules()[1],
            format!("@media (max-width: 320px){{.{class}{{width:2px}}}}")
        );
    }

    #[test]
    fn hash_variants_separates_pseudo_styles() {
        let mut ctx =
            StyleContext::with_config(Config::new().hash_variants(true), Some(MemorySheet::new()));
        let plain = ctx.finalize(&mil().block()).unwrap();
        let hovered = ctx.finalize(&mil().block().hover(mil().inline())).unwrap();
        assert_ne!(plain, hovered);
        assert_eq!(ctx.registry().len(), 2);
    }

    #[test]
    fn props_carry_inline_style() {
        let mut ctx = StyleContext::in_memory();
        let props = mil().relative().top(10).to_props(&mut ctx).unwrap();
        assert_eq!(props.style.get("position"), Some("relative"));
        assert_eq!(props.style.get("top"), Some("10px"));
        assert!(ctx.registry().contains(&props.class_name));
    }

    #[derive(Debug, Default)]
    struct RejectingSheet {
        attempts: usize,
    }
    impl StyleSheet for RejectingSheet {
        fn len(&self) -> usize {
            0
        }
        fn insert_rule(
            &mut self,
            rule: &str,
            _index: usize,
        ) -> std::result::Result<usize, mil_sheet::SheetError> {
            self.attempts += 1;
            Err(mil_sheet::SheetError::Rejected(rule.to_owned()))
        }
    }

    #[test]
    fn sheet_failure_is_reported_once() {
        let mut ctx = StyleContext::new(RejectingSheet::default());
        let style = mil().block();
        let class = mil_core::hash::class_name("mil-", "display:block");

        assert_eq!(
            ctx.finalize(&style),
            Err(Error::Sheet(mil_sheet::SheetError::Rejected(format!(
                ".{class}{{display:block}}"
            ))))
        );
        assert_eq!(ctx.sheet().unwrap().attempts, 1);

        // class is marked before insertion, so the retry is a registry hit
        assert!(ctx.registry().contains(&class));
        assert_eq!(ctx.finalize(&style), Ok(class));
        assert_eq!(ctx.sheet().unwrap().attempts, 1);
    }
}
