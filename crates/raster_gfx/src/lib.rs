#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_lossless,
    clippy::cast_precision_loss,
    clippy::must_use_candidate,
    clippy::struct_excessive_bools,
    clippy::return_self_not_must_use
)]

//! Utility wrappers around pixel buffers, drawing sessions and font
//! collections for a 2D game library.
//!
//! Every type in this crate is a resource wrapper with the same lifecycle:
//! acquire in the constructor, access through checked accessors, release
//! exactly once through an idempotent `close()`. Dropping a wrapper releases
//! its resources as well; `close()` exists so callers can release early and
//! observe the closed state.

use std::cmp::min;
use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

mod error;
pub use error::*;

mod color;
pub use color::*;

mod limits;
pub use limits::*;

mod bitmap;
pub use bitmap::*;

mod pixel_view;
pub use pixel_view::*;

mod surface;
pub use surface::*;

mod edit_session;
pub use edit_session::*;

mod fonts;
pub use fonts::*;

mod text_options;
pub use text_options::*;

#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(width: {}, height: {})", self.width, self.height)
    }
}

impl PartialEq for Size {
    fn eq(&self, other: &Size) -> bool {
        self.width == other.width && self.height == other.height
    }
}

impl Size {
    pub fn new(width: i32, height: i32) -> Self {
        Size { width, height }
    }
}

impl From<(i32, i32)> for Size {
    fn from(value: (i32, i32)) -> Self {
        Size {
            width: value.0,
            height: value.1,
        }
    }
}

impl From<(u32, u32)> for Size {
    fn from(value: (u32, u32)) -> Self {
        Size {
            width: value.0 as i32,
            height: value.1 as i32,
        }
    }
}

impl From<(usize, usize)> for Size {
    fn from(value: (usize, usize)) -> Self {
        Size {
            width: value.0 as i32,
            height: value.1 as i32,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(x: {}, y: {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Position {
    fn from(value: (i32, i32)) -> Self {
        Position { x: value.0, y: value.1 }
    }
}

impl Add<Position> for Position {
    type Output = Position;

    fn add(self, rhs: Position) -> Position {
        Position::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub<Position> for Position {
    type Output = Position;

    fn sub(self, rhs: Position) -> Position {
        Position::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub start: Position,
    pub size: Size,
}

impl std::fmt::Display for Rectangle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "(x:{}, y:{}, width: {}, height: {})",
            self.start.x, self.start.y, self.size.width, self.size.height
        )
    }
}

impl Rectangle {
    pub fn new(start: Position, size: Size) -> Self {
        Self { start, size }
    }

    pub fn from(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            start: Position::new(x, y),
            size: Size::new(width, height),
        }
    }

    pub fn from_pt(p1: Position, p2: Position) -> Self {
        let start = Position::new(min(p1.x, p2.x), min(p1.y, p2.y));

        Rectangle {
            start,
            size: Size::new((p1.x - p2.x).abs(), (p1.y - p2.y).abs()),
        }
    }

    pub fn left(&self) -> i32 {
        self.start.x
    }

    pub fn top(&self) -> i32 {
        self.start.y
    }

    pub fn right(&self) -> i32 {
        self.start.x + self.size.width
    }

    pub fn bottom(&self) -> i32 {
        self.start.y + self.size.height
    }

    pub fn is_empty(&self) -> bool {
        self.size.width <= 0 || self.size.height <= 0
    }

    pub fn is_inside(&self, pos: impl Into<Position>) -> bool {
        let pos = pos.into();

        self.start.x <= pos.x && self.start.y <= pos.y && pos.x < self.right() && pos.y < self.bottom()
    }
}
