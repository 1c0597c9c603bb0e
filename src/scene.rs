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

//! The scene-facing driver: owns a player and a drawer, advances playback
//! once per frame, and manages character-map selection.

use std::sync::Arc;
use bitvec::vec::BitVec;
use delegate::delegate;
use derivative::Derivative;
use glam::Vec2;
use itertools::{Either, Itertools};
use parking_lot::RwLock;
use crate::drawer::SpriterDrawer;
use crate::error::{UnknownAnimation, UnknownCharacterMaps};
use crate::model::CharacterMap;
use crate::render::{Rgba, SceneLayer, ShapeRenderer};
use crate::runtime::{Loader, Player};

/// Drives one animated entity inside a scene object.
///
/// Created through [`SceneDrawerBuilder`](crate::builder::SceneDrawerBuilder).
/// Each frame the owner calls [`SceneDrawer::draw`] with the wall-clock delta
/// and its world position; the driver scales the delta so the active
/// animation plays over the configured target duration, advances the player,
/// and renders every resolved object keyframe.
#[derive(Derivative)]
#[derivative(Debug(bound = ""))]
pub struct SceneDrawer<L: Loader, R: ShapeRenderer = ()> {
    name: Box<str>,
    #[derivative(Debug = "ignore")]
    loader: Arc<RwLock<L>>,
    #[derivative(Debug = "ignore")]
    player: L::Player,
    drawer: SpriterDrawer<L, R>,
    offset: Vec2,
    /// Target playback duration in seconds; `None` plays at authored length.
    target_duration: Option<f32>,
    /// Maps resolved once by [`SceneDrawer::set_character_maps`], in request
    /// order; `enabled_maps` is index-aligned with this list.
    available_maps: Box<[CharacterMap]>,
    enabled_maps: BitVec,
}

impl<L: Loader> SceneDrawer<L> {
    /// A driver named `name` over a shared loader, with no shape overlay.
    pub fn new(name: impl Into<Box<str>>, loader: Arc<RwLock<L>>) -> Self {
        SceneDrawer::with_shapes(name, loader, ())
    }
}

impl<L: Loader, R: ShapeRenderer> SceneDrawer<L, R> {
    /// A driver forwarding debug shapes to `shapes`.
    pub fn with_shapes(name: impl Into<Box<str>>, loader: Arc<RwLock<L>>, shapes: R) -> Self {
        let player = loader.read().spawn_player();
        let drawer = SpriterDrawer::with_shapes(loader.clone(), shapes);
        SceneDrawer {
            name: name.into(),
            loader,
            player,
            drawer,
            offset: Vec2::ZERO,
            target_duration: None,
            available_maps: Box::default(),
            enabled_maps: BitVec::new(),
        }
    }

    /// Advance playback by `delta` seconds and render the current frame.
    pub fn draw<B>(&mut self, delta: f32, owner_position: Vec2, layer: &mut B)
        where B: SceneLayer<Sprite=L::Sprite> {
        let authored = self.player.animation().length;
        let target = self.target_duration.unwrap_or(authored);
        let speed = if target > 0.0 { authored / target } else { 0.0 };

        self.player.set_position(owner_position + self.offset);
        self.player.advance(delta * speed);

        for frame in self.player.frames() {
            self.drawer.draw(&self.player, frame, layer);
        }
    }

    /// Switch to the named animation. Resets the target duration, so the new
    /// animation plays at its authored length until
    /// [`SceneDrawer::set_duration`] is called again.
    pub fn set_animation(&mut self, name: &str) -> Result<(), UnknownAnimation> {
        self.player.set_animation(name)?;
        self.target_duration = None;
        Ok(())
    }

    /// Effective playback duration of the active animation, in seconds.
    pub fn duration(&self) -> f32 {
        self.target_duration.unwrap_or_else(|| self.player.animation().length)
    }

    /// Play the active animation over `duration` seconds instead of its
    /// authored length; `None` restores authored-length playback.
    pub fn set_duration(&mut self, duration: Option<f32>) {
        self.target_duration = duration;
    }

    /// Offset between the owner position and the entity root.
    pub fn offset(&self) -> Vec2 { self.offset }
    /// Set the offset between the owner position and the entity root.
    pub fn set_offset(&mut self, offset: Vec2) { self.offset = offset }

    /// Uniform scale of the whole entity.
    pub fn set_scale(&mut self, scale: f32) { self.player.set_scale(scale) }

    delegate! {
        to self.drawer {
            /// Set the global tint; its alpha participates in the computed opacity.
            pub fn set_tint(&mut self, tint: Rgba);
            /// Current global tint.
            pub fn tint(&self) -> Rgba;
            /// Set the global transparency multiplier in `[0, 1]`.
            pub fn set_transparency(&mut self, transparency: f32);
            /// Current global transparency multiplier.
            pub fn transparency(&self) -> f32;
            /// Tint one object by name instead of the global tint.
            pub fn set_object_color(&mut self, object: &str, color: Rgba);
            /// Remove a per-object tint, returning the previous one.
            pub fn clear_object_color(&mut self, object: &str) -> Option<Rgba>;
            /// Force one object's opacity.
            pub fn set_object_transparency(&mut self, object: &str, alpha: f32);
            /// Remove a per-object opacity override, returning the previous one.
            pub fn clear_object_transparency(&mut self, object: &str) -> Option<f32>;
        }
    }

    /// Replace the set of available character maps, resolving `names` against
    /// the entity once. With `enable_at_start` every resolved map starts
    /// enabled, otherwise all start disabled.
    ///
    /// Maps that resolve are installed either way; unresolved names are
    /// reported in the error.
    pub fn set_character_maps<'a>(
        &mut self,
        enable_at_start: bool,
        names: impl IntoIterator<Item=&'a str>,
    ) -> Result<(), UnknownCharacterMaps> {
        let (found, missing): (Vec<_>, Vec<_>) = names.into_iter()
            .partition_map(|name| match self.player.character_maps()
                .iter().find(|map| &*map.name == name) {
                Some(map) => Either::Left(map.clone()),
                None => Either::Right(Box::from(name)),
            });
        self.available_maps = found.into_boxed_slice();
        self.enabled_maps = BitVec::repeat(enable_at_start, self.available_maps.len());
        self.push_enabled_maps();
        if missing.is_empty() { Ok(()) } else {
            Err(UnknownCharacterMaps(missing.into_boxed_slice()))
        }
    }

    /// Enable exactly the named maps: every other available map is disabled
    /// first. Names outside the available set are reported in the error.
    pub fn set_enabled_character_maps<'a>(
        &mut self,
        names: impl IntoIterator<Item=&'a str>,
    ) -> Result<(), UnknownCharacterMaps> {
        self.enabled_maps.fill(false);
        self.toggle_character_maps(true, names)
    }

    /// Enable or disable the named maps, leaving the rest untouched. Names
    /// outside the available set are reported in the error.
    pub fn enable_character_maps<'a>(
        &mut self,
        enable: bool,
        names: impl IntoIterator<Item=&'a str>,
    ) -> Result<(), UnknownCharacterMaps> {
        self.toggle_character_maps(enable, names)
    }

    fn toggle_character_maps<'a>(
        &mut self,
        enable: bool,
        names: impl IntoIterator<Item=&'a str>,
    ) -> Result<(), UnknownCharacterMaps> {
        let mut missing = Vec::new();
        for name in names {
            match self.available_maps.iter().position(|map| &*map.name == name) {
                Some(k) => self.enabled_maps.set(k, enable),
                None => missing.push(Box::from(name)),
            }
        }
        self.push_enabled_maps();
        if missing.is_empty() { Ok(()) } else {
            Err(UnknownCharacterMaps(missing.into_boxed_slice()))
        }
    }

    /// Push the enabled subset to the player, in available-map order.
    fn push_enabled_maps(&mut self) {
        let enabled = self.enabled_maps.iter_ones()
            .map(|k| self.available_maps[k].clone())
            .collect();
        self.player.apply_character_maps(enabled);
    }

    /// Name this driver was built under.
    pub fn name(&self) -> &str { &self.name }

    /// The underlying animation player.
    pub fn player(&self) -> &L::Player { &self.player }
    /// Mutable access to the underlying animation player.
    pub fn player_mut(&mut self) -> &mut L::Player { &mut self.player }

    /// The drawer adapter rendering this entity.
    pub fn drawer(&self) -> &SpriterDrawer<L, R> { &self.drawer }
    /// Mutable access to the drawer adapter.
    pub fn drawer_mut(&mut self) -> &mut SpriterDrawer<L, R> { &mut self.drawer }

    /// Shared handle to the loader backing this driver.
    pub fn loader(&self) -> &Arc<RwLock<L>> { &self.loader }

    /// Character maps resolved by the last
    /// [`SceneDrawer::set_character_maps`] call.
    pub fn available_character_maps(&self) -> &[CharacterMap] { &self.available_maps }

    /// Currently enabled maps, in available-map order.
    pub fn enabled_character_maps(&self) -> impl Iterator<Item=&CharacterMap> {
        self.enabled_maps.iter_ones().map(|k| &self.available_maps[k])
    }
}
