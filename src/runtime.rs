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

//! Capability traits for the external Spriter runtime.
//!
//! The hard parts of skeletal animation — project parsing, timeline
//! evaluation, keyframe blending — live behind these traits. This crate only
//! drives them: [`LoadProject`] is the synchronous parse step behind the
//! cache, [`Loader`] maps image references to engine sprites, and [`Player`]
//! owns playback state and produces resolved [`ObjectFrame`]s.

use std::path::Path;
use glam::Vec2;
use crate::error::{LoadError, UnknownAnimation};
use crate::model::{AnimationMeta, CharacterMap, FileRef, ObjectFrame};
use crate::render::Sprite2D;

/// A parsed Spriter project with its image references resolved to sprites.
pub trait Loader {
    /// Engine sprite type produced by this loader.
    type Sprite: Sprite2D;
    /// Player type driving entities of this project.
    type Player: Player;

    /// Mutable access to the sprite for an image reference. `None` means the
    /// project references an image that was never resolved, which is a
    /// contract violation of the loader implementation.
    fn sprite_mut(&mut self, file: FileRef) -> Option<&mut Self::Sprite>;

    /// A fresh player for the project's first entity, positioned at the
    /// origin and playing its first animation.
    fn spawn_player(&self) -> Self::Player;
}

/// Playback state for one entity instance.
pub trait Player {
    /// Metadata of the active animation.
    fn animation(&self) -> &AnimationMeta;

    /// Switch to the named animation, keeping playback position semantics up
    /// to the implementation.
    fn set_animation(&mut self, name: &str) -> Result<(), UnknownAnimation>;

    /// Move the entity root in scene coordinates.
    fn set_position(&mut self, position: Vec2);

    /// Uniform scale applied to the whole entity.
    fn set_scale(&mut self, scale: f32);

    /// Advance the playback clock by `delta` seconds of animation time.
    fn advance(&mut self, delta: f32);

    /// Object keyframes resolved for the current frame, in draw order.
    fn frames(&self) -> &[ObjectFrame];

    /// Name of a timeline, the stable identifier of an object across
    /// animations.
    fn timeline_name(&self, timeline: u32) -> Option<&str>;

    /// Every character map defined on the entity.
    fn character_maps(&self) -> &[CharacterMap];

    /// Replace the set of character maps consulted during keyframe
    /// resolution.
    fn apply_character_maps(&mut self, maps: Vec<CharacterMap>);
}

/// Source of parsed projects: one synchronous read-and-parse per path.
pub trait LoadProject {
    /// Loader type produced for each project file.
    type Loader: Loader;
    /// Read and parse the project file at `path`.
    fn load(&self, path: &Path) -> Result<Self::Loader, LoadError>;
}
