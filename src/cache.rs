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

//! Shared cache of parsed Spriter projects, keyed by file path.
//!
//! The cache is an owned value, constructed once at application start and
//! passed by reference to scene-construction sites. Entries are reference
//! counted: [`AnimationCache::remove`] only drops the cache's own handle, so
//! drawers still holding the loader keep it alive.

use std::collections::HashMap;
use std::fmt::{self, Debug};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use log::debug;
use parking_lot::RwLock;
use crate::error::LoadError;
use crate::runtime::LoadProject;

/// Handle to a cached loader, shared between the cache and every drawer
/// built from it.
pub type SharedLoader<L> = Arc<RwLock<L>>;

/// Cache of parsed projects on top of a [`LoadProject`] source.
pub struct AnimationCache<P: LoadProject> {
    source: P,
    entries: RwLock<HashMap<PathBuf, SharedLoader<P::Loader>>>,
}

impl<P: LoadProject> AnimationCache<P> {
    /// An empty cache reading projects from `source`.
    pub fn new(source: P) -> Self {
        AnimationCache { source, entries: RwLock::new(HashMap::new()) }
    }

    /// The loader for `path`, parsing and registering it on first access.
    ///
    /// Repeated calls for the same path return the same loader instance and
    /// perform no further parsing.
    pub fn get(&self, path: impl AsRef<Path>) -> Result<SharedLoader<P::Loader>, LoadError> {
        let path = path.as_ref();
        if let Some(loader) = self.entries.read().get(path) {
            return Ok(loader.clone());
        }
        debug!("loading Spriter project from '{}'", path.display());
        let loader = self.source.load(path)?;
        Ok(self.entries.write()
            .entry(path.to_path_buf())
            .or_insert_with(|| Arc::new(RwLock::new(loader)))
            .clone())
    }

    /// Is a loader registered for `path`?
    pub fn contains(&self, path: impl AsRef<Path>) -> bool {
        self.entries.read().contains_key(path.as_ref())
    }

    /// Drop the cache's handle for `path`. Returns `false` if no entry
    /// existed. Drawers holding the loader keep it alive until they are
    /// dropped themselves.
    pub fn remove(&self, path: impl AsRef<Path>) -> bool {
        self.entries.write().remove(path.as_ref()).is_some()
    }

    /// Drop every cached handle.
    pub fn clear(&self) { self.entries.write().clear() }

    /// Number of cached projects.
    pub fn len(&self) -> usize { self.entries.read().len() }

    /// Is the cache empty?
    pub fn is_empty(&self) -> bool { self.entries.read().is_empty() }
}

impl<P: LoadProject> Debug for AnimationCache<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimationCache")
            .field("entries", &self.entries.read().keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}
