//! Pen geometry
//!
//! Pens are axis-aligned rectangles. Each route has its own admission rule:
//! the straight pen only needs the animal to walk far enough in, the diverted
//! pen wants it reasonably centred.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::Route;
use crate::consts::*;

/// An axis-aligned pen rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pen {
    /// Top-left corner
    pub min: Vec2,
    /// Bottom-right corner
    pub max: Vec2,
}

impl Pen {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            max: Vec2::new(x + width, y + height),
        }
    }

    /// Sheep pen on the right edge, spanning the path
    pub const fn straight() -> Self {
        Self::new(
            WORLD_WIDTH - STRAIGHT_PEN_WIDTH,
            STRAIGHT_PEN_Y,
            STRAIGHT_PEN_WIDTH,
            STRAIGHT_PEN_HEIGHT,
        )
    }

    /// Lamb pen across the top of the right half
    pub const fn diverted() -> Self {
        let width = WORLD_WIDTH / 2.0;
        Self::new(WORLD_WIDTH - width, 0.0, width, DIVERTED_PEN_HEIGHT)
    }

    /// The target pen for a route
    pub const fn for_route(route: Route) -> Self {
        match route {
            Route::Straight => Self::straight(),
            Route::Diverted => Self::diverted(),
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Whether an animal following `route` at `pos` has entered this pen
    pub fn admits(&self, route: Route, pos: Vec2) -> bool {
        match route {
            Route::Straight => pos.x > self.min.x + STRAIGHT_PEN_ENTRY,
            Route::Diverted => {
                pos.y > self.min.y
                    && pos.y < self.max.y - DIVERTED_PEN_INSET
                    && pos.x > self.min.x + DIVERTED_PEN_INSET
                    && pos.x < self.max.x - DIVERTED_PEN_INSET
            }
        }
    }
}

/// Whether a position has left the world without reaching a pen
#[inline]
pub fn out_of_bounds(pos: Vec2) -> bool {
    pos.x > WORLD_WIDTH + EXIT_MARGIN || pos.y < 0.0
}
