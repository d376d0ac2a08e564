//! Property map of a single style node.
//!
//! Keys are drawn from a closed vocabulary ([`StyleKey`]) and values are kept
//! already normalized, so compiling a node is a plain ordered walk over the map.
use std::collections::BTreeMap;

/// Short style keys a builder can write.
///
/// Variant order is the order declarations are emitted in,
/// so shorthands (`Padding`, `Margin`) always come before their directional overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StyleKey {
    Position,
    Top,
    Right,
    Bottom,
    Left,
    Padding,
    PaddingTop,
    PaddingRight,
    PaddingBottom,
    PaddingLeft,
    Margin,
    MarginTop,
    MarginRight,
    MarginBottom,
    MarginLeft,
    Content,
    Width,
    Height,
    Display,
    FlexDirection,
    FlexWrap,
    Gap,
    GridTemplateColumns,
}

impl StyleKey {
    /// CSS property name in camelCase, as used by inline style objects.
    pub fn property_name(self) -> &'static str {
        match self {
            StyleKey::Position => "position",
            StyleKey::Top => "top",
            StyleKey::Right => "right",
            StyleKey::Bottom => "bottom",
            StyleKey::Left => "left",
            StyleKey::Padding => "padding",
            StyleKey::PaddingTop => "paddingTop",
            StyleKey::PaddingRight => "paddingRight",
            StyleKey::PaddingBottom => "paddingBottom",
            StyleKey::PaddingLeft => "paddingLeft",
            StyleKey::Margin => "margin",
            StyleKey::MarginTop => "marginTop",
            StyleKey::MarginRight => "marginRight",
            StyleKey::MarginBottom => "marginBottom",
            StyleKey::MarginLeft => "marginLeft",
            StyleKey::Content => "content",
            StyleKey::Width => "width",
            StyleKey::Height => "height",
            StyleKey::Display => "display",
            StyleKey::FlexDirection => "flexDirection",
            StyleKey::FlexWrap => "flexWrap",
            StyleKey::Gap => "gap",
            StyleKey::GridTemplateColumns => "gridTemplateColumns",
        }
    }
}

/// Raw value for spacing and size setters.
///
/// Numbers are normalized to pixels, strings are passed through untouched
/// so `"auto"`, percentages or `calc(..)` can still be used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Length(String);

impl Length {
    pub fn as_str(&self) -> &str {
        &self.0
    }
    pub fn into_string(self) -> String {
        self.0
    }
}

macro_rules! length_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Length {
                fn from(value: $ty) -> Self {
                    Length(format!("{value}px"))
                }
            }
        )*
    };
}
length_from_number!(i32, i64, u32, u64, usize, f32, f64);

impl From<&str> for Length {
    fn from(value: &str) -> Self {
        Length(value.to_owned())
    }
}
impl From<String> for Length {
    fn from(value: String) -> Self {
        Length(value)
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PropertyMap {
    values: BTreeMap<StyleKey, String>,
}

impl PropertyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last write to a key wins.
    pub fn set(&mut self, key: StyleKey, value: impl Into<String>) {
        self.values.insert(key, value.into());
    }

    pub fn get(&self, key: StyleKey) -> Option<&str> {
        self.values.get(&key).map(String::as_str)
    }

    /// Iterate in emission order.
    pub fn iter(&self) -> impl Iterator<Item = (StyleKey, &str)> {
        self.values.iter().map(|(k, v)| (*k, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
