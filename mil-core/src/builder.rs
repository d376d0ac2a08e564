use crate::{
    props::{Length, PropertyMap, StyleKey},
    value::{Display, FlexDirection, FlexWrap, Position},
};

/// Style builder.
///
/// Each call consumes the builder and returns it with one more declaration,
/// so a chain always owns its own state. To branch from a common prefix, `clone()` it.
///
/// ```rust
/// use mil_core::Mil;
/// let card = Mil::new().relative().p(8).pt(4);
/// assert_eq!(card.to_css_string(), "position:relative;padding:8px;padding-top:4px");
/// ```
///
/// Variant children (`xs`, `hover`, `focus`, `before`, `after`) are stored as is,
/// and compiled as separate rules. Only one level of children is ever rendered.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[must_use = "Builder methods return the updated style"]
pub struct Mil {
    props: PropertyMap,
    xs: Option<Box<Mil>>,
    hover: Option<Box<Mil>>,
    focus: Option<Box<Mil>>,
    before: Option<Box<Mil>>,
    after: Option<Box<Mil>>,
}

macro_rules! length_setters {
    ($($(#[$doc:meta])* $name:ident => $key:ident;)*) => {
        $(
            $(#[$doc])*
            pub fn $name(self, value: impl Into<Length>) -> Self {
                self.set(StyleKey::$key, value.into().into_string())
            }
        )*
    };
}

impl Mil {
    pub fn new() -> Self {
        Self::default()
    }

    fn set(mut self, key: StyleKey, value: impl Into<String>) -> Self {
        self.props.set(key, value);
        self
    }

    pub fn properties(&self) -> &PropertyMap {
        &self.props
    }

    // Positioning

    pub fn position(self, position: Position) -> Self {
        self.set(StyleKey::Position, position.as_str())
    }
    pub fn static_(self) -> Self {
        self.position(Position::Static)
    }
    pub fn relative(self) -> Self {
        self.position(Position::Relative)
    }
    pub fn absolute(self) -> Self {
        self.position(Position::Absolute)
    }
    pub fn fixed(self) -> Self {
        self.position(Position::Fixed)
    }
    pub fn sticky(self) -> Self {
        self.position(Position::Sticky)
    }

    length_setters! {
        top => Top;
        right => Right;
        bottom => Bottom;
        left => Left;

        /// `padding` shorthand, directional setters override it.
        p => Padding;
        pt => PaddingTop;
        pr => PaddingRight;
        pb => PaddingBottom;
        pl => PaddingLeft;

        /// `margin` shorthand, directional setters override it.
        m => Margin;
        mt => MarginTop;
        mr => MarginRight;
        mb => MarginBottom;
        ml => MarginLeft;

        w => Width;
        h => Height;
        gap => Gap;
    }

    /// Generated content, quoted on output.
    /// Like any other empty value, `content("")` is left out of the compiled css.
    pub fn content(self, content: impl Into<String>) -> Self {
        self.set(StyleKey::Content, content)
    }

    // Display

    pub fn display(self, display: Display) -> Self {
        self.set(StyleKey::Display, display.as_str())
    }
    pub fn block(self) -> Self {
        self.display(Display::Block)
    }
    pub fn inline(self) -> Self {
        self.display(Display::Inline)
    }
    pub fn inline_block(self) -> Self {
        self.display(Display::InlineBlock)
    }
    pub fn contents(self) -> Self {
        self.display(Display::Contents)
    }

    /// Flex container laid out in `direction`.
    pub fn flex(self, direction: FlexDirection) -> Self {
        self.display(Display::Flex)
            .set(StyleKey::FlexDirection, direction.as_str())
    }
    pub fn flex_row(self) -> Self {
        self.flex(FlexDirection::Row)
    }
    pub fn flex_column(self) -> Self {
        self.flex(FlexDirection::Column)
    }

    /// Only records the wrap mode, has no effect without [`Mil::flex`].
    /// See [`Mil::wrap`] for the default `wrap` mode.
    pub fn flex_wrap(self, wrap: FlexWrap) -> Self {
        self.set(StyleKey::FlexWrap, wrap.as_str())
    }
    pub fn wrap(self) -> Self {
        self.flex_wrap(FlexWrap::default())
    }

    /// Grid container with `columns` equal-width tracks.
    pub fn grid(self, columns: u32) -> Self {
        self.display(Display::Grid)
            .set(StyleKey::GridTemplateColumns, format!("repeat({columns}, 1fr)"))
    }

    // Variants. Setting one again replaces the previous child.

    /// Style applied under the small-screen breakpoint.
    pub fn xs(mut self, child: Mil) -> Self {
        self.xs = Some(Box::new(child));
        self
    }
    pub fn hover(mut self, child: Mil) -> Self {
        self.hover = Some(Box::new(child));
        self
    }
    pub fn focus(mut self, child: Mil) -> Self {
        self.focus = Some(Box::new(child));
        self
    }
    pub fn before(mut self, child: Mil) -> Self {
        self.before = Some(Box::new(child));
        self
    }
    pub fn after(mut self, child: Mil) -> Self {
        self.after = Some(Box::new(child));
        self
    }

    pub fn xs_variant(&self) -> Option<&Mil> {
        self.xs.as_deref()
    }
    pub fn hover_variant(&self) -> Option<&Mil> {
        self.hover.as_deref()
    }
    pub fn focus_variant(&self) -> Option<&Mil> {
        self.focus.as_deref()
    }
    pub fn before_variant(&self) -> Option<&Mil> {
        self.before.as_deref()
    }
    pub fn after_variant(&self) -> Option<&Mil> {
        self.after.as_deref()
    }
}
