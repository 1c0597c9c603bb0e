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

//! Test doubles for the runtime and render capability traits.
//!
//! The mock entity has two animations ("idle" at 2 s, "walk" at 1.5 s), one
//! timeline named "body", two character maps ("hat", "armor"), and a single
//! 100x50 sprite at folder 0, file 0.

use std::cell::Cell;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use glam::Vec2;
use parking_lot::RwLock;
use crate::error::{LoadError, UnknownAnimation};
use crate::model::{AnimationMeta, CharacterMap, FileRef, ObjectFrame};
use crate::render::{Rect, Rgba, SceneLayer, ShapeRenderer, Sprite2D};
use crate::runtime::{LoadProject, Loader, Player};

pub(crate) fn shared<L>(loader: L) -> Arc<RwLock<L>> {
    Arc::new(RwLock::new(loader))
}

#[derive(Debug, Clone)]
pub(crate) struct MockSprite {
    pub size: Vec2,
    pub color: Rgba,
    pub position: Vec2,
    pub origin: Vec2,
    pub rotation: f32,
    pub scale: Vec2,
    pub color_writes: usize,
}

impl Default for MockSprite {
    fn default() -> Self {
        MockSprite {
            size: Vec2::new(100.0, 50.0),
            color: Rgba::WHITE,
            position: Vec2::ZERO,
            origin: Vec2::ZERO,
            rotation: 0.0,
            scale: Vec2::ONE,
            color_writes: 0,
        }
    }
}

impl Sprite2D for MockSprite {
    fn size(&self) -> Vec2 { self.size }
    fn color(&self) -> Rgba { self.color }
    fn set_color(&mut self, color: Rgba) {
        self.color = color;
        self.color_writes += 1;
    }
    fn set_position(&mut self, position: Vec2) { self.position = position }
    fn set_origin(&mut self, origin: Vec2) { self.origin = origin }
    fn set_rotation(&mut self, degrees: f32) { self.rotation = degrees }
    fn set_scale(&mut self, scale: Vec2) { self.scale = scale }
    // rotation and scale are ignored here; the culling tests only move the
    // sprite around
    fn bounds(&self) -> Rect { Rect::from_corner_size(self.position, self.size) }
}

#[derive(Debug, Clone)]
pub(crate) struct MockPlayer {
    pub animations: Vec<AnimationMeta>,
    pub current: usize,
    pub frames: Vec<ObjectFrame>,
    pub timelines: Vec<Box<str>>,
    pub maps: Vec<CharacterMap>,
    pub applied_maps: Vec<CharacterMap>,
    pub position: Vec2,
    pub scale: f32,
    pub advanced: Vec<f32>,
}

impl Default for MockPlayer {
    fn default() -> Self {
        MockPlayer {
            animations: vec![
                AnimationMeta { name: "idle".into(), length: 2.0 },
                AnimationMeta { name: "walk".into(), length: 1.5 },
            ],
            current: 0,
            frames: vec![frame().build()],
            timelines: vec!["body".into()],
            maps: vec![
                CharacterMap { id: 0, name: "hat".into() },
                CharacterMap { id: 1, name: "armor".into() },
            ],
            applied_maps: Vec::new(),
            position: Vec2::ZERO,
            scale: 1.0,
            advanced: Vec::new(),
        }
    }
}

impl Player for MockPlayer {
    fn animation(&self) -> &AnimationMeta { &self.animations[self.current] }

    fn set_animation(&mut self, name: &str) -> Result<(), UnknownAnimation> {
        match self.animations.iter().position(|meta| &*meta.name == name) {
            Some(k) => {
                self.current = k;
                Ok(())
            }
            None => Err(UnknownAnimation(name.into())),
        }
    }

    fn set_position(&mut self, position: Vec2) { self.position = position }
    fn set_scale(&mut self, scale: f32) { self.scale = scale }
    fn advance(&mut self, delta: f32) { self.advanced.push(delta) }
    fn frames(&self) -> &[ObjectFrame] { &self.frames }

    fn timeline_name(&self, timeline: u32) -> Option<&str> {
        self.timelines.get(timeline as usize).map(|name| &**name)
    }

    fn character_maps(&self) -> &[CharacterMap] { &self.maps }
    fn apply_character_maps(&mut self, maps: Vec<CharacterMap>) { self.applied_maps = maps }
}

#[derive(Debug, Clone)]
pub(crate) struct MockLoader {
    pub sprites: HashMap<FileRef, MockSprite>,
    pub prototype: MockPlayer,
}

impl Default for MockLoader {
    fn default() -> Self {
        let mut sprites = HashMap::new();
        sprites.insert(FileRef { folder: 0, file: 0 }, MockSprite::default());
        MockLoader { sprites, prototype: MockPlayer::default() }
    }
}

impl Loader for MockLoader {
    type Sprite = MockSprite;
    type Player = MockPlayer;
    fn sprite_mut(&mut self, file: FileRef) -> Option<&mut MockSprite> {
        self.sprites.get_mut(&file)
    }
    fn spawn_player(&self) -> MockPlayer { self.prototype.clone() }
}

#[derive(Debug, Default)]
pub(crate) struct MockProjects {
    pub loads: Cell<usize>,
    pub prototype: MockLoader,
}

impl LoadProject for MockProjects {
    type Loader = MockLoader;
    fn load(&self, _path: &Path) -> Result<MockLoader, LoadError> {
        self.loads.set(self.loads.get() + 1);
        Ok(self.prototype.clone())
    }
}

#[derive(Debug)]
pub(crate) struct MockLayer {
    pub viewport: Rect,
    /// Position and colour of each submitted sprite, in submission order.
    pub submitted: Vec<(Vec2, Rgba)>,
}

impl MockLayer {
    pub fn new(viewport: Rect) -> Self {
        MockLayer { viewport, submitted: Vec::new() }
    }
}

impl SceneLayer for MockLayer {
    type Sprite = MockSprite;
    fn viewport(&self) -> Rect { self.viewport }
    fn submit(&mut self, sprite: &MockSprite) {
        self.submitted.push((sprite.position, sprite.color));
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) enum ShapeCall {
    Color(Rgba),
    Rectangle(f32, f32, f32, f32),
    Line(f32, f32, f32, f32),
    Circle(f32, f32, f32),
}

#[derive(Debug, Default)]
pub(crate) struct MockShapes {
    pub calls: Vec<ShapeCall>,
}

impl ShapeRenderer for MockShapes {
    fn set_color(&mut self, color: Rgba) { self.calls.push(ShapeCall::Color(color)) }
    fn rectangle(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.calls.push(ShapeCall::Rectangle(x, y, width, height))
    }
    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.calls.push(ShapeCall::Line(x1, y1, x2, y2))
    }
    fn circle(&mut self, x: f32, y: f32, radius: f32) {
        self.calls.push(ShapeCall::Circle(x, y, radius))
    }
}

pub(crate) struct FrameBuilder(ObjectFrame);

pub(crate) fn frame() -> FrameBuilder {
    FrameBuilder(ObjectFrame {
        file: FileRef { folder: 0, file: 0 },
        timeline: 0,
        position: Vec2::new(100.0, 100.0),
        pivot: Vec2::ZERO,
        angle: 0.0,
        scale: Vec2::ONE,
        alpha: 1.0,
    })
}

impl FrameBuilder {
    pub fn file(mut self, folder: u32, file: u32) -> Self {
        self.0.file = FileRef { folder, file };
        self
    }
    pub fn position(mut self, position: Vec2) -> Self {
        self.0.position = position;
        self
    }
    pub fn pivot(mut self, pivot: Vec2) -> Self {
        self.0.pivot = pivot;
        self
    }
    pub fn alpha(mut self, alpha: f32) -> Self {
        self.0.alpha = alpha;
        self
    }
    pub fn build(self) -> ObjectFrame { self.0 }
}
