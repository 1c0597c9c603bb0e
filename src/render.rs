/*
 * spriter2d: Spriter (SCML) playback glue for 2D scene renderers.
 * Copyright (c) 2025  spriter2d contributors
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License
 * along with this program.  If not, see <https://www.gnu.org/licenses/>.
 */

//! Capability traits for the host engine's rendering surface.
//!
//! The drawer never talks to a concrete engine. It mutates sprites through
//! [`Sprite2D`], submits them to a [`SceneLayer`], and forwards debug
//! primitives to a [`ShapeRenderer`]. Engine bindings implement these three
//! traits; tests substitute lightweight doubles.

use glam::Vec2;
use serde::{Serialize, Deserialize};

/// Straight (non-premultiplied) RGBA colour, all channels in `[0, 1]`.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[derive(Serialize, Deserialize)]
pub struct Rgba {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel.
    pub a: f32,
}

impl Rgba {
    /// Opaque white, the neutral tint.
    pub const WHITE: Rgba = Rgba { r: 1.0, g: 1.0, b: 1.0, a: 1.0 };

    /// A colour from its four channels.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Rgba { Rgba { r, g, b, a } }

    /// The same colour with the alpha channel replaced.
    pub const fn with_alpha(self, a: f32) -> Rgba {
        Rgba { r: self.r, g: self.g, b: self.b, a }
    }
}

/// Axis-aligned rectangle, used for sprite bounds and layer viewports.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[derive(Serialize, Deserialize)]
pub struct Rect {
    /// Bottom-left corner.
    pub min: Vec2,
    /// Top-right corner.
    pub max: Vec2,
}

impl Rect {
    /// A rectangle from its two corners.
    pub fn new(min: Vec2, max: Vec2) -> Rect { Rect { min, max } }

    /// A rectangle from its bottom-left corner and size.
    pub fn from_corner_size(corner: Vec2, size: Vec2) -> Rect {
        Rect { min: corner, max: corner + size }
    }

    /// Width of this rectangle.
    pub fn width(&self) -> f32 { self.max.x - self.min.x }
    /// Height of this rectangle.
    pub fn height(&self) -> f32 { self.max.y - self.min.y }

    /// Do the two rectangles share any interior point? Touching edges do not
    /// count as an overlap.
    pub fn overlaps(&self, other: Rect) -> bool {
        self.min.x < other.max.x && self.max.x > other.min.x
            && self.min.y < other.max.y && self.max.y > other.min.y
    }
}

/// A positioned, tinted sprite owned by the host engine.
///
/// Mirrors the mutable state of a batched engine sprite: the drawer writes
/// position, origin, rotation, scale and colour, then submits the sprite to a
/// [`SceneLayer`]. Colour reads back through [`Sprite2D::color`] so redundant
/// writes can be elided.
pub trait Sprite2D {
    /// Unscaled pixel dimensions of the sprite.
    fn size(&self) -> Vec2;
    /// Current colour of the sprite.
    fn color(&self) -> Rgba;
    /// Replace the sprite colour.
    fn set_color(&mut self, color: Rgba);
    /// Move the sprite's bottom-left corner.
    fn set_position(&mut self, position: Vec2);
    /// Set the rotation/scaling origin, relative to the bottom-left corner.
    fn set_origin(&mut self, origin: Vec2);
    /// Set the rotation around the origin, in degrees.
    fn set_rotation(&mut self, degrees: f32);
    /// Set the scale factors around the origin.
    fn set_scale(&mut self, scale: Vec2);
    /// Bounding box after position, rotation and scale are applied.
    fn bounds(&self) -> Rect;
}

/// One render target of the host scene graph: a sprite batch plus the
/// viewport it is culled against.
pub trait SceneLayer {
    /// Sprite type accepted by this layer's batch.
    type Sprite: Sprite2D;
    /// Rectangle currently visible on this layer.
    fn viewport(&self) -> Rect;
    /// Issue one draw call for the sprite in its current state.
    fn submit(&mut self, sprite: &Self::Sprite);
}

/// Immediate-mode shape renderer for debug overlays.
pub trait ShapeRenderer {
    /// Colour for subsequent shapes.
    fn set_color(&mut self, color: Rgba);
    /// Draw a rectangle outline.
    fn rectangle(&mut self, x: f32, y: f32, width: f32, height: f32);
    /// Draw a line segment.
    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32);
    /// Draw a circle outline.
    fn circle(&mut self, x: f32, y: f32, radius: f32);
}

/// No-op renderer for hosts without a shape overlay.
impl ShapeRenderer for () {
    fn set_color(&mut self, _color: Rgba) {}
    fn rectangle(&mut self, _x: f32, _y: f32, _width: f32, _height: f32) {}
    fn line(&mut self, _x1: f32, _y1: f32, _x2: f32, _y2: f32) {}
    fn circle(&mut self, _x: f32, _y: f32, _radius: f32) {}
}
