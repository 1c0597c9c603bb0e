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

//! Deferred construction of [`SceneDrawer`]s.
//!
//! The builder is plain data (serde-derived, so scenes can be described in
//! asset files) and applies its settings in a fixed order at build time:
//! animation, offset, tint, transparency, scale, duration, character maps.
//! Duration comes after animation selection on purpose — selecting an
//! animation resets the default duration, and an explicit duration must win.

use std::path::PathBuf;
use glam::Vec2;
use serde::{Serialize, Deserialize};
use crate::cache::AnimationCache;
use crate::error::BuildError;
use crate::render::Rgba;
use crate::runtime::LoadProject;
use crate::scene::SceneDrawer;

/// Accumulated configuration for a [`SceneDrawer`].
#[derive(Debug, Clone, PartialEq)]
#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct SceneDrawerBuilder {
    /// Path of the Spriter project file.
    pub path: PathBuf,
    /// Animation to select, if not the entity's first.
    pub animation: Option<Box<str>>,
    /// Offset between the owner position and the entity root.
    pub offset: Vec2,
    /// Global tint; `None` keeps the neutral white tint.
    pub tint: Option<Rgba>,
    /// Global transparency multiplier.
    pub transparency: f32,
    /// Uniform entity scale.
    pub scale: f32,
    /// Target playback duration in seconds; `None` plays at authored length.
    pub duration: Option<f32>,
    /// Character maps to resolve at build time.
    pub character_maps: Vec<String>,
    /// Whether the resolved character maps start enabled.
    pub enable_maps_at_start: bool,
}

impl Default for SceneDrawerBuilder {
    fn default() -> Self {
        SceneDrawerBuilder {
            path: PathBuf::new(),
            animation: None,
            offset: Vec2::ZERO,
            tint: None,
            transparency: 1.0,
            scale: 1.0,
            duration: None,
            character_maps: Vec::new(),
            enable_maps_at_start: false,
        }
    }
}

impl SceneDrawerBuilder {
    /// A builder for the project file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        SceneDrawerBuilder { path: path.into(), ..SceneDrawerBuilder::default() }
    }

    /// Select an animation by name.
    pub fn animation(mut self, name: impl Into<Box<str>>) -> Self {
        self.animation = Some(name.into());
        self
    }

    /// Offset the entity root from the owner position.
    pub fn offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self
    }

    /// Tint the whole entity.
    pub fn tint(mut self, tint: Rgba) -> Self {
        self.tint = Some(tint);
        self
    }

    /// Multiply every object's opacity by `transparency`.
    pub fn transparency(mut self, transparency: f32) -> Self {
        self.transparency = transparency;
        self
    }

    /// Scale the whole entity uniformly.
    pub fn scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Play the selected animation over `seconds` instead of its authored
    /// length.
    pub fn duration(mut self, seconds: f32) -> Self {
        self.duration = Some(seconds);
        self
    }

    /// Resolve the named character maps at build time, enabled from the
    /// start or not.
    pub fn character_maps<I>(mut self, enable_at_start: bool, names: I) -> Self
        where I: IntoIterator, I::Item: Into<String> {
        self.character_maps = names.into_iter().map(Into::into).collect();
        self.enable_maps_at_start = enable_at_start;
        self
    }

    /// Materialise a [`SceneDrawer`] named `name`, loading the project
    /// through `cache` (or sharing an already-cached loader).
    pub fn build<P>(
        &self,
        name: impl Into<Box<str>>,
        cache: &AnimationCache<P>,
    ) -> Result<SceneDrawer<P::Loader>, BuildError>
        where P: LoadProject {
        let loader = cache.get(&self.path)?;
        let mut drawer = SceneDrawer::new(name, loader);
        if let Some(animation) = &self.animation {
            drawer.set_animation(animation)?;
        }
        drawer.set_offset(self.offset);
        if let Some(tint) = self.tint {
            drawer.set_tint(tint);
        }
        drawer.set_transparency(self.transparency);
        drawer.set_scale(self.scale);
        drawer.set_duration(self.duration);
        if !self.character_maps.is_empty() {
            drawer.set_character_maps(
                self.enable_maps_at_start,
                self.character_maps.iter().map(String::as_str),
            )?;
        }
        Ok(drawer)
    }
}
