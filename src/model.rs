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

//! Value types exchanged with the Spriter runtime.

use glam::Vec2;
use serde::{Serialize, Deserialize};

/// Reference to an image in a Spriter project, by folder and file index.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[derive(Serialize, Deserialize)]
pub struct FileRef {
    /// Folder index in the project.
    pub folder: u32,
    /// File index within the folder.
    pub file: u32,
}

/// One object keyframe, fully resolved by the player for the current frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectFrame {
    /// Image displayed by this object.
    pub file: FileRef,
    /// Timeline this object belongs to; stable identity across frames.
    pub timeline: u32,
    /// Target position of the authored pivot, in scene coordinates.
    pub position: Vec2,
    /// Pivot as a fraction of the sprite dimensions, `[0, 1]` per axis.
    pub pivot: Vec2,
    /// Rotation in degrees.
    pub angle: f32,
    /// Scale factors per axis.
    pub scale: Vec2,
    /// Authored opacity in `[0, 1]`.
    pub alpha: f32,
}

/// Metadata of an animation inside an entity.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationMeta {
    /// Animation name, unique within the entity.
    pub name: Box<str>,
    /// Authored length in seconds.
    pub length: f32,
}

/// A character map: a named image remapping used as a skin swap.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct CharacterMap {
    /// Map index within the entity.
    pub id: u32,
    /// Map name, unique within the entity.
    pub name: Box<str>,
}
