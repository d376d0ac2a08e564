//! Micro layout styles for Rust driven web apps.
//!
//! Styles are described with a chain of builder calls, compiled into a single css rule,
//! and written once into a stylesheet under a class name derived from their content.
//!
//! Each call to [`mil()`] starts from an empty style, so separate chains never share state.
//! Class names and injected rules are tracked by a [`StyleContext`],
//! one per stylesheet (or per test).
//!
//! Example:
//! ```rust
//! use mil::{mil, MilExt, StyleContext};
//!
//! let mut ctx = StyleContext::in_memory();
//! let card = mil().relative().p(8).pt(4).xs(mil().p(4));
//!
//! let class = card.class_name(&mut ctx).unwrap();
//! assert!(class.starts_with("mil-"));
//!
//! // Same content, same class, nothing new in the sheet.
//! let again = mil().relative().p(8).pt(4).xs(mil().p(4));
//! assert_eq!(again.class_name(&mut ctx).unwrap(), class);
//!
//! let css = ctx.sheet().unwrap().css_text();
//! assert_eq!(css, format!(
//!     ".{class}{{position:relative;padding:8px;padding-top:4px}}\
//!      @media (max-width: 600px){{.{class}{{padding:4px}}}}"
//! ));
//! ```
//!
mod config;
mod context;
mod error;

pub use config::Config;
pub use context::{MilExt, Props, StyleContext};
pub use error::{Error, Result};

pub use mil_core::{
    hash, Composite, Display, FlexDirection, FlexWrap, InlineStyle, Length, Mil, Position, Rule,
    CLASS_PREFIX, XS_QUERY,
};
pub use mil_sheet::{InjectionRegistry, MemorySheet, SheetError, StyleSheet};

/// Start a new style.
///
/// Always returns a fresh, empty builder.
pub fn mil() -> Mil {
    Mil::new()
}
