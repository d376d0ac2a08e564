//! Keyword values for enumerated properties.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Static,
    Relative,
    Absolute,
    Fixed,
    Sticky,
}

impl Position {
    pub fn as_str(self) -> &'static str {
        match self {
            Position::Static => "static",
            Position::Relative => "relative",
            Position::Absolute => "absolute",
            Position::Fixed => "fixed",
            Position::Sticky => "sticky",
        }
    }
}

/// Supported display modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
    Block,
    Inline,
    InlineBlock,
    Contents,
    Flex,
    Grid,
}

impl Display {
    pub fn as_str(self) -> &'static str {
        match self {
            Display::Block => "block",
            Display::Inline => "inline",
            Display::InlineBlock => "inline-block",
            Display::Contents => "contents",
            Display::Flex => "flex",
            Display::Grid => "grid",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FlexDirection {
    #[default]
    Row,
    Column,
}

impl FlexDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            FlexDirection::Row => "row",
            FlexDirection::Column => "column",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FlexWrap {
    #[default]
    Wrap,
    NoWrap,
    WrapReverse,
}

impl FlexWrap {
    pub fn as_str(self) -> &'static str {
        match self {
            FlexWrap::Wrap => "wrap",
            FlexWrap::NoWrap => "nowrap",
            FlexWrap::WrapReverse => "wrap-reverse",
        }
    }
}
