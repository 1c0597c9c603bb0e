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

//! Error types. Name lookups that silently produced `null` in the original
//! adapter surface here as explicit errors.

use std::path::PathBuf;
use itertools::Itertools;
use thiserror::Error;

/// Failure to read or parse a Spriter project file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("cannot read '{}': {source}", path.display())]
    Io {
        /// Path of the project file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The file was read but is not a valid project.
    #[error("cannot parse '{}': {message}", path.display())]
    Parse {
        /// Path of the project file.
        path: PathBuf,
        /// Parser diagnostic.
        message: Box<str>,
    },
}

/// The requested animation name does not exist in the entity.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[error("no animation named '{0}' in this entity")]
pub struct UnknownAnimation(pub Box<str>);

/// Some requested character-map names do not exist in the entity.
///
/// Matched maps are still installed; this error reports the remainder so a
/// misconfiguration is detectable instead of a silent no-op.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[error("no character map named {} in this entity", quoted(.0))]
pub struct UnknownCharacterMaps(pub Box<[Box<str>]>);

fn quoted(names: &[Box<str>]) -> String {
    names.iter().map(|name| format!("'{name}'")).join(", ")
}

/// Failure to materialise a drawer from a builder.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The project file could not be loaded.
    #[error(transparent)]
    Load(#[from] LoadError),
    /// The configured animation name was not found.
    #[error(transparent)]
    UnknownAnimation(#[from] UnknownAnimation),
    /// Some configured character-map names were not found.
    #[error(transparent)]
    UnknownCharacterMaps(#[from] UnknownCharacterMaps),
}
