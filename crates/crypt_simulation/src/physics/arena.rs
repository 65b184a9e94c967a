//! ArenaGeometry — простая статическая геометрия для headless симуляции
//!
//! Набор axis-aligned коробок с тегами поверхностей. Ray cast через
//! bevy bounding volumes (RayCast3d vs Aabb3d), ближайшее попадание побеждает.
//! В игре этот probe заменяется physics движка.

use bevy::math::bounding::{Aabb3d, RayCast3d};
use bevy::math::{Dir3A, Vec3A};
use bevy::prelude::*;

use super::probe::{SurfaceHit, SurfaceKind, SurfaceProbe};

/// Одна коробка уровня
#[derive(Debug, Clone, Copy)]
pub struct ArenaBlock {
    pub kind: SurfaceKind,
    pub bounds: Aabb3d,
}

#[derive(Debug, Clone, Default)]
pub struct ArenaGeometry {
    blocks: Vec<ArenaBlock>,
}

impl ArenaGeometry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Плоский пол: верхняя грань на высоте `top_y`, half_extent по X и Z
    pub fn with_floor(self, center: Vec2, half_extent: Vec2, top_y: f32) -> Self {
        const FLOOR_THICKNESS: f32 = 0.5;
        let half_size = Vec3::new(half_extent.x, FLOOR_THICKNESS * 0.5, half_extent.y);
        let center = Vec3::new(center.x, top_y - FLOOR_THICKNESS * 0.5, center.y);
        self.with_block(SurfaceKind::Ground, center, half_size)
    }

    /// Стена (любая коробка с тегом Wall)
    pub fn with_wall(self, center: Vec3, half_size: Vec3) -> Self {
        self.with_block(SurfaceKind::Wall, center, half_size)
    }

    pub fn with_block(mut self, kind: SurfaceKind, center: Vec3, half_size: Vec3) -> Self {
        self.blocks.push(ArenaBlock {
            kind,
            bounds: Aabb3d::new(center, half_size),
        });
        self
    }
}

impl SurfaceProbe for ArenaGeometry {
    fn cast_ray(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<SurfaceHit> {
        let Ok(direction) = Dir3A::new(Vec3A::from(direction)) else {
            return None;
        };
        if !(max_distance >= 0.0) {
            return None;
        }

        let ray = RayCast3d::new(origin, direction, max_distance);

        self.blocks
            .iter()
            .filter_map(|block| {
                ray.aabb_intersection_at(&block.bounds).map(|distance| SurfaceHit {
                    kind: block.kind,
                    distance,
                })
            })
            .min_by(|a, b| a.distance.total_cmp(&b.distance))
    }
}
