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

//! The drawer adapter: one resolved object keyframe in, one draw call out.

use std::collections::HashMap;
use std::sync::Arc;
use delegate::delegate;
use derivative::Derivative;
use log::warn;
use parking_lot::RwLock;
use crate::model::ObjectFrame;
use crate::render::{Rgba, SceneLayer, ShapeRenderer, Sprite2D};
use crate::runtime::{Loader, Player};

/// Renders the object keyframes produced by a [`Player`], with per-object
/// tint and transparency overrides layered on top of a global tint.
///
/// Overrides are keyed by timeline (object) name, so they persist across
/// animation switches as long as object names are stable.
#[derive(Derivative)]
#[derivative(Debug(bound = ""))]
pub struct SpriterDrawer<L: Loader, R: ShapeRenderer = ()> {
    #[derivative(Debug = "ignore")]
    loader: Arc<RwLock<L>>,
    #[derivative(Debug = "ignore")]
    shapes: R,
    tint: Rgba,
    transparency: f32,
    object_colors: HashMap<Box<str>, Rgba>,
    object_transparency: HashMap<Box<str>, f32>,
}

impl<L: Loader> SpriterDrawer<L> {
    /// A drawer over `loader` with no shape overlay.
    pub fn new(loader: Arc<RwLock<L>>) -> Self {
        SpriterDrawer::with_shapes(loader, ())
    }
}

impl<L: Loader, R: ShapeRenderer> SpriterDrawer<L, R> {
    /// A drawer over `loader`, forwarding debug shapes to `shapes`.
    pub fn with_shapes(loader: Arc<RwLock<L>>, shapes: R) -> Self {
        SpriterDrawer {
            loader,
            shapes,
            tint: Rgba::WHITE,
            transparency: 1.0,
            object_colors: HashMap::new(),
            object_transparency: HashMap::new(),
        }
    }

    /// Current global tint.
    pub fn tint(&self) -> Rgba { self.tint }
    /// Set the global tint; its alpha participates in the computed opacity.
    pub fn set_tint(&mut self, tint: Rgba) { self.tint = tint }

    /// Current global transparency multiplier.
    pub fn transparency(&self) -> f32 { self.transparency }
    /// Set the global transparency multiplier in `[0, 1]`.
    pub fn set_transparency(&mut self, transparency: f32) { self.transparency = transparency }

    /// Tint one object by name instead of the global tint.
    pub fn set_object_color(&mut self, object: &str, color: Rgba) {
        self.object_colors.insert(object.into(), color);
    }

    /// Remove a per-object tint, returning the previous one.
    pub fn clear_object_color(&mut self, object: &str) -> Option<Rgba> {
        self.object_colors.remove(object)
    }

    /// Force one object's opacity, ignoring tint, keyframe and global
    /// transparency.
    pub fn set_object_transparency(&mut self, object: &str, alpha: f32) {
        self.object_transparency.insert(object.into(), alpha);
    }

    /// Remove a per-object opacity override, returning the previous one.
    pub fn clear_object_transparency(&mut self, object: &str) -> Option<f32> {
        self.object_transparency.remove(object)
    }

    /// Resolve the final colour for an object: per-object colour over global
    /// tint, and override opacity over `color.a × frame.alpha × global`.
    fn resolve_color(&self, object: Option<&str>, frame_alpha: f32) -> Rgba {
        let color = object
            .and_then(|name| self.object_colors.get(name))
            .copied()
            .unwrap_or(self.tint);
        let alpha = match object.and_then(|name| self.object_transparency.get(name)) {
            Some(&alpha) => alpha,
            None => color.a * frame_alpha * self.transparency,
        };
        color.with_alpha(alpha)
    }

    /// Render one object keyframe onto `layer`.
    ///
    /// Re-centers the sprite origin on the authored pivot, applies the
    /// resolved colour (skipping the write when the sprite already carries
    /// it), then submits the sprite unless its bounds fall outside the layer
    /// viewport.
    pub fn draw<P, B>(&mut self, player: &P, frame: &ObjectFrame, layer: &mut B)
        where P: Player, B: SceneLayer<Sprite=L::Sprite> {
        let mut loader = self.loader.write();
        let Some(sprite) = loader.sprite_mut(frame.file) else {
            warn!("no sprite resolved for folder {} file {}", frame.file.folder, frame.file.file);
            return;
        };

        let pivot = frame.pivot * sprite.size();
        let position = frame.position - pivot;

        let target = self.resolve_color(player.timeline_name(frame.timeline), frame.alpha);
        if sprite.color() != target {
            sprite.set_color(target);
        }

        sprite.set_position(position);
        sprite.set_origin(pivot);
        sprite.set_rotation(frame.angle);
        sprite.set_scale(frame.scale);

        if layer.viewport().overlaps(sprite.bounds()) {
            layer.submit(sprite);
        }
    }
}

/// Debug primitives forwarded verbatim to the host shape renderer.
impl<L: Loader, R: ShapeRenderer> ShapeRenderer for SpriterDrawer<L, R> {
    delegate! {
        to self.shapes {
            fn set_color(&mut self, color: Rgba);
            fn rectangle(&mut self, x: f32, y: f32, width: f32, height: f32);
            fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32);
            fn circle(&mut self, x: f32, y: f32, radius: f32);
        }
    }
}
