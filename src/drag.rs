//! Pointer drag state machine and hit testing.
//!
//! One target at a time: `Idle -> Armed(target) -> Idle`. A pointer-down hit
//! tests the demo's draggable entities in declared order and arms the first
//! match; a second pointer-down while armed is ignored. Moves report where
//! the armed entity's origin should go, preserving the grab offset captured
//! at pointer-down. Mouse and touch look identical by the time points reach
//! this module.

use crate::geometry::point_in_polygon;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Containment test for one draggable entity, in simulation space.
#[derive(Clone, Debug, PartialEq)]
pub enum HitShape {
    Circle { center: Vec2, radius: f32 },
    Polygon { points: Vec<Vec2> },
    /// Contains any point whose coordinate along `axis` lies in [min, max].
    Band { axis: Axis, min: f32, max: f32 },
}

impl HitShape {
    pub fn contains(&self, point: Vec2) -> bool {
        match self {
            HitShape::Circle { center, radius } => point.distance(*center) <= *radius,
            HitShape::Polygon { points } => point_in_polygon(point, points),
            HitShape::Band { axis, min, max } => {
                let coord = match axis {
                    Axis::X => point.x,
                    Axis::Y => point.y,
                };
                (*min..=*max).contains(&coord)
            }
        }
    }

    /// Offset from `point` to the entity origin, captured at grab time.
    /// Bands only track their own axis; the cross coordinate passes through.
    fn grab_offset(&self, point: Vec2) -> Vec2 {
        match self {
            HitShape::Circle { center, .. } => *center - point,
            HitShape::Polygon { points } => {
                let n = points.len().max(1) as f32;
                let centroid = points.iter().copied().sum::<Vec2>() / n;
                centroid - point
            }
            HitShape::Band { axis, min, max } => {
                let mid = (min + max) * 0.5;
                match axis {
                    Axis::X => Vec2::new(mid - point.x, 0.0),
                    Axis::Y => Vec2::new(0.0, mid - point.y),
                }
            }
        }
    }
}

#[derive(Clone, Debug)]
pub struct Draggable {
    pub id: u32,
    pub shape: HitShape,
}

impl Draggable {
    pub fn new(id: u32, shape: HitShape) -> Self {
        Self { id, shape }
    }
}

/// Lives from pointer-down to pointer-up.
#[derive(Clone, Copy, Debug, PartialEq)]
struct DragSession {
    target: u32,
    grab_offset: Vec2,
}

#[derive(Debug, Default)]
pub struct DragController {
    session: Option<DragSession>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hit test and arm. Returns the armed target, or None when the point
    /// misses everything or a drag is already in progress.
    pub fn pointer_down(&mut self, point: Vec2, draggables: &[Draggable]) -> Option<u32> {
        if self.session.is_some() {
            return None;
        }
        let hit = draggables.iter().find(|d| d.shape.contains(point))?;
        self.session = Some(DragSession {
            target: hit.id,
            grab_offset: hit.shape.grab_offset(point),
        });
        Some(hit.id)
    }

    /// While armed, the target and the position its origin should move to.
    pub fn pointer_move(&self, point: Vec2) -> Option<(u32, Vec2)> {
        self.session.map(|s| (s.target, point + s.grab_offset))
    }

    /// Release; also handles pointer-cancel.
    pub fn pointer_up(&mut self) {
        self.session = None;
    }

    pub fn armed(&self) -> Option<u32> {
        self.session.map(|s| s.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_containment() {
        let shape = HitShape::Circle {
            center: Vec2::new(10.0, 10.0),
            radius: 5.0,
        };
        assert!(shape.contains(Vec2::new(13.0, 10.0)));
        assert!(shape.contains(Vec2::new(10.0, 15.0))); // boundary included
        assert!(!shape.contains(Vec2::new(16.0, 10.0)));
    }

    #[test]
    fn test_band_containment_checks_one_axis() {
        let shape = HitShape::Band {
            axis: Axis::Y,
            min: 90.0,
            max: 110.0,
        };
        assert!(shape.contains(Vec2::new(-1000.0, 100.0)));
        assert!(!shape.contains(Vec2::new(0.0, 120.0)));
    }

    #[test]
    fn test_band_grab_offset_passes_cross_axis_through() {
        let shape = HitShape::Band {
            axis: Axis::Y,
            min: 90.0,
            max: 110.0,
        };
        let offset = shape.grab_offset(Vec2::new(42.0, 95.0));
        assert_eq!(offset, Vec2::new(0.0, 5.0));
    }

    #[test]
    fn test_first_declared_entity_wins() {
        let mut drag = DragController::new();
        let overlapping = [
            Draggable::new(7, HitShape::Circle { center: Vec2::ZERO, radius: 10.0 }),
            Draggable::new(8, HitShape::Circle { center: Vec2::ZERO, radius: 20.0 }),
        ];
        assert_eq!(drag.pointer_down(Vec2::new(1.0, 1.0), &overlapping), Some(7));
        assert_eq!(drag.armed(), Some(7));
    }

    #[test]
    fn test_second_pointer_down_is_ignored() {
        let mut drag = DragController::new();
        let entities = [
            Draggable::new(0, HitShape::Circle { center: Vec2::ZERO, radius: 5.0 }),
            Draggable::new(1, HitShape::Circle { center: Vec2::new(100.0, 0.0), radius: 5.0 }),
        ];
        assert_eq!(drag.pointer_down(Vec2::ZERO, &entities), Some(0));
        assert_eq!(drag.pointer_down(Vec2::new(100.0, 0.0), &entities), None);
        assert_eq!(drag.armed(), Some(0));
    }

    #[test]
    fn test_miss_leaves_idle() {
        let mut drag = DragController::new();
        let entities = [Draggable::new(0, HitShape::Circle { center: Vec2::ZERO, radius: 5.0 })];
        assert_eq!(drag.pointer_down(Vec2::new(50.0, 50.0), &entities), None);
        assert_eq!(drag.armed(), None);
        assert_eq!(drag.pointer_move(Vec2::new(51.0, 50.0)), None);
    }

    #[test]
    fn test_grab_offset_preserved_across_moves() {
        let mut drag = DragController::new();
        let entities = [Draggable::new(3, HitShape::Circle { center: Vec2::new(10.0, 10.0), radius: 8.0 })];
        // Grab 4 px left of center.
        drag.pointer_down(Vec2::new(6.0, 10.0), &entities);
        let (target, pos) = drag.pointer_move(Vec2::new(20.0, 20.0)).unwrap();
        assert_eq!(target, 3);
        assert_eq!(pos, Vec2::new(24.0, 20.0));
    }

    #[test]
    fn test_release_returns_to_idle() {
        let mut drag = DragController::new();
        let entities = [Draggable::new(0, HitShape::Circle { center: Vec2::ZERO, radius: 5.0 })];
        drag.pointer_down(Vec2::ZERO, &entities);
        drag.pointer_up();
        assert_eq!(drag.armed(), None);
        assert_eq!(drag.pointer_move(Vec2::ZERO), None);
    }
}
