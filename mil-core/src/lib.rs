//! Core of mil: style builder, compiler and class name generator.
//!
//! Nothing here touches a stylesheet or keeps shared state,
//! see `mil-sheet` for injection and `mil` for the public facade.
//!
//! ```rust
//! use mil_core::{Mil, XS_QUERY, CLASS_PREFIX, hash};
//!
//! let style = Mil::new().grid(3).gap(8).xs(Mil::new().grid(1));
//! let composite = style.composite();
//! let class = hash::class_name(CLASS_PREFIX, &composite.identity(XS_QUERY, false));
//! assert!(class.starts_with("mil-"));
//! assert_eq!(composite.rules(&class, XS_QUERY).len(), 2);
//! ```

mod builder;
pub mod compile;
pub mod hash;
pub mod props;
pub mod value;

pub use builder::Mil;
pub use compile::{Composite, InlineStyle, Rule, XS_MAX_WIDTH, XS_QUERY};
pub use hash::CLASS_PREFIX;
pub use props::{Length, PropertyMap, StyleKey};
pub use value::{Display, FlexDirection, FlexWrap, Position};
