//! Render list and display items.
//!
//! The icon is described as a [`RenderList`]: an ordered sequence of
//! [`DisplayItem`] commands (clears, polygons, text runs) which a render
//! backend plays back onto a surface. Building the list is pure and cheap;
//! all pixel work happens in the backend.
//!
//! # Example
//!
//! ```rust
//! use sos_icon::render::{Color, DisplayItem, Point, RenderList};
//!
//! let mut list = RenderList::new();
//!
//! // Clear background
//! list.add_command(DisplayItem::Clear { color: Color::TRANSPARENT });
//!
//! // Draw a white triangle with a black outline
//! list.add_command(DisplayItem::Polygon {
//!     points: vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(5.0, 8.0)],
//!     fill: Color::from_u8(255, 255, 255, 255),
//!     outline: Some(Color::from_u8(0, 0, 0, 255)),
//!     stroke_width: 1.0,
//! });
//! assert_eq!(list.items.len(), 2);
//! ```

/// RGBA color used for drawing commands.
///
/// Channels are represented as `f32` in the range `0.0 ..= 1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red channel
    pub r: f32,
    /// Green channel
    pub g: f32,
    /// Blue channel
    pub b: f32,
    /// Alpha channel (opacity)
    pub a: f32,
}

impl Color {
    pub const TRANSPARENT: Color = Color { r: 0.0, g: 0.0, b: 0.0, a: 0.0 };

    /// Creates a new color from `u8` channel values in the range `0 ..= 255`.
    pub fn from_u8(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Returns the channels as `u8` values (0–255), rounded.
    pub fn to_u8(&self) -> [u8; 4] {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }
}

/// A point in surface pixel coordinates (origin top-left, y down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Horizontal part of a text anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

/// Vertical part of a text anchor.
///
/// `Middle` is halfway between the ascender and the descender line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VAlign {
    Ascender,
    Middle,
    Baseline,
    Descender,
}

/// Describes which point of a text run lands on the run's `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    pub horizontal: HAlign,
    pub vertical: VAlign,
}

impl Anchor {
    /// Centered both ways.
    pub const MIDDLE: Anchor = Anchor { horizontal: HAlign::Center, vertical: VAlign::Middle };

    /// Offset from the anchor point to the pen origin (left edge, baseline) for a run
    /// `width` wide whose font has the given ascent and descent (descent is negative
    /// below the baseline).
    pub fn pen_offset(&self, width: f32, ascent: f32, descent: f32) -> (f32, f32) {
        let dx = match self.horizontal {
            HAlign::Left => 0.0,
            HAlign::Center => -width / 2.0,
            HAlign::Right => -width,
        };
        let dy = match self.vertical {
            VAlign::Ascender => ascent,
            VAlign::Middle => (ascent + descent) / 2.0,
            VAlign::Baseline => 0.0,
            VAlign::Descender => descent,
        };
        (dx, dy)
    }
}

/// A single display item representing a drawing command.
///
/// These commands are appended to a [`RenderList`] and later processed
/// by the render backend.
#[derive(Clone, Debug)]
pub enum DisplayItem {
    /// Clear the entire surface with the given color.
    Clear {
        /// The color to clear the surface with.
        color: Color,
    },

    /// Draw a closed polygon, filled and optionally outlined.
    Polygon {
        /// Vertices in drawing order; the path is closed back to the first one.
        points: Vec<Point>,
        /// Fill color (nonzero winding rule).
        fill: Color,
        /// Outline color, if any.
        outline: Option<Color>,
        /// Outline width in pixels, centered on the edges.
        stroke_width: f32,
    },

    /// Draw a single line of text anchored at `(x, y)`.
    TextRun {
        /// The x-coordinate of the anchor point.
        x: f32,
        /// The y-coordinate of the anchor point.
        y: f32,
        /// The text to render.
        text: String,
        /// Em size in pixels.
        size: f32,
        /// The color to render the text with.
        color: Color,
        /// Which point of the run is placed at `(x, y)`.
        anchor: Anchor,
    },
}

/// A list of display items to be rendered.
#[derive(Clone, Debug, Default)]
pub struct RenderList {
    /// Sequence of drawing commands to execute.
    pub items: Vec<DisplayItem>,
}

impl RenderList {
    /// Creates a new, empty render list.
    pub fn new() -> Self {
        RenderList { items: Vec::new() }
    }

    /// Adds a new display item (drawing command) to the list.
    pub fn add_command(&mut self, command: DisplayItem) {
        self.items.push(command);
    }
}
