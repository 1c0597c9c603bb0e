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

//! spriter2d: Spriter (SCML) playback glue for 2D scene renderers.
#![doc = include_str!("../README.md")]

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod render;
pub mod model;
pub mod runtime;
pub mod error;
pub mod cache;
pub mod drawer;
pub mod scene;
pub mod builder;

#[cfg(test)]
pub(crate) mod mock;

pub use builder::SceneDrawerBuilder;
pub use cache::AnimationCache;
pub use drawer::SpriterDrawer;
pub use error::{BuildError, LoadError, UnknownAnimation, UnknownCharacterMaps};
pub use scene::SceneDrawer;
