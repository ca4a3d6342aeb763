//! 2x2 matrix acting on a draggable shape over a unit grid.
//!
//! Everything here lives in math space: centered origin, y up, 40 px per
//! unit. The blue shape is the untransformed original at its drag offset,
//! the purple one is the same points through the matrix.

use crate::controls::{ControlSet, ControlValue};
use crate::drag::{Draggable, HitShape};
use crate::mapper::{self, OriginPolicy};
use crate::scene::{rgb, rgba, Color, Scene, DARK_BACKGROUND};
use crate::simulation::Simulation;
use crate::surface::CanvasSurface;
use glam::{Mat2, Vec2};

const SHAPE_ID: u32 = 0;
/// CSS pixels per grid unit.
const SCALE: f32 = 40.0;
const CIRCLE_POINTS: usize = 30;

const GRID_COLOR: Color = rgb(0.2, 0.2, 0.2);
const AXIS_COLOR: Color = rgb(0.533, 0.533, 0.533);
const ORIGINAL_COLOR: Color = rgba(0.231, 0.510, 0.965, 0.5);
const TRANSFORMED_COLOR: Color = rgba(0.659, 0.333, 0.969, 0.8);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeType {
    Square,
    Triangle,
    Circle,
}

impl ShapeType {
    /// Base outline in grid units, before the drag offset.
    fn points(self) -> Vec<Vec2> {
        match self {
            ShapeType::Square => vec![
                Vec2::new(0.0, 0.0),
                Vec2::new(1.0, 0.0),
                Vec2::new(1.0, 1.0),
                Vec2::new(0.0, 1.0),
            ],
            ShapeType::Triangle => vec![
                Vec2::new(0.0, 0.0),
                Vec2::new(1.0, 0.0),
                Vec2::new(0.5, 3.0_f32.sqrt() / 2.0),
            ],
            ShapeType::Circle => (0..CIRCLE_POINTS)
                .map(|i| {
                    Vec2::from_angle(i as f32 / CIRCLE_POINTS as f32 * std::f32::consts::TAU)
                })
                .collect(),
        }
    }
}

pub struct LinearTransform {
    pub matrix: Mat2,
    pub shape: ShapeType,
    pub offset: Vec2,
}

impl Default for LinearTransform {
    fn default() -> Self {
        Self {
            matrix: Mat2::IDENTITY,
            shape: ShapeType::Square,
            offset: Vec2::ZERO,
        }
    }
}

impl LinearTransform {
    fn shape_at_offset(&self) -> Vec<Vec2> {
        self.shape
            .points()
            .into_iter()
            .map(|p| p + self.offset)
            .collect()
    }
}

impl Simulation for LinearTransform {
    fn controls(&self) -> ControlSet {
        ControlSet::new()
            .select(
                "shape",
                "Select Shape",
                &[("square", "Square"), ("triangle", "Triangle"), ("circle", "Circle")],
                "square",
            )
            .range("m00", "a (x-scale)", -2.0, 2.0, 0.1, 1.0)
            .range("m01", "b (y-shear)", -2.0, 2.0, 0.1, 0.0)
            .range("m10", "c (x-shear)", -2.0, 2.0, 0.1, 0.0)
            .range("m11", "d (y-scale)", -2.0, 2.0, 0.1, 1.0)
    }

    fn origin(&self) -> OriginPolicy {
        OriginPolicy::math(SCALE)
    }

    fn setup(&mut self, _surface: &CanvasSurface) {}

    fn on_control_change(&mut self, key: &str, value: &ControlValue) {
        if key == "shape" {
            if let Some(choice) = value.as_choice() {
                self.shape = match choice {
                    "triangle" => ShapeType::Triangle,
                    "circle" => ShapeType::Circle,
                    _ => ShapeType::Square,
                };
                // New shape starts back at the origin.
                self.offset = Vec2::ZERO;
            }
            return;
        }
        let Some(n) = value.as_number() else { return };
        // glam's Mat2 is column-major; sliders name row-major entries.
        match key {
            "m00" => self.matrix.x_axis.x = n,
            "m01" => self.matrix.y_axis.x = n,
            "m10" => self.matrix.x_axis.y = n,
            "m11" => self.matrix.y_axis.y = n,
            _ => {}
        }
    }

    fn draggables(&self) -> Vec<Draggable> {
        let shape = match self.shape {
            ShapeType::Circle => HitShape::Circle {
                center: self.offset,
                radius: 1.0,
            },
            _ => HitShape::Polygon {
                points: self.shape_at_offset(),
            },
        };
        vec![Draggable::new(SHAPE_ID, shape)]
    }

    fn drag(&mut self, _target: u32, point: Vec2) {
        // The controller reports where the grabbed shape's origin should go:
        // the circle is centered on its offset, polygons hang off theirs.
        let centroid_local = match self.shape {
            ShapeType::Circle => Vec2::ZERO,
            _ => {
                let points = self.shape.points();
                points.iter().copied().sum::<Vec2>() / points.len() as f32
            }
        };
        self.offset = point - centroid_local;
    }

    fn draw(&self, scene: &mut Scene, surface: &CanvasSurface, _armed: Option<u32>) {
        scene.clear(DARK_BACKGROUND);
        let policy = self.origin();
        let to_screen = |p: Vec2| mapper::to_screen(p, surface, policy);

        // Grid lines every unit out to the canvas edge, axes on top.
        let half = surface.size() * 0.5;
        let x_extent = (half.x / SCALE).ceil() as i32;
        let y_extent = (half.y / SCALE).ceil() as i32;
        for i in -x_extent..=x_extent {
            let x = i as f32;
            scene.line(
                to_screen(Vec2::new(x, -y_extent as f32)),
                to_screen(Vec2::new(x, y_extent as f32)),
                0.5,
                GRID_COLOR,
            );
        }
        for j in -y_extent..=y_extent {
            let y = j as f32;
            scene.line(
                to_screen(Vec2::new(-x_extent as f32, y)),
                to_screen(Vec2::new(x_extent as f32, y)),
                0.5,
                GRID_COLOR,
            );
        }
        scene.line(
            to_screen(Vec2::new(-(x_extent as f32), 0.0)),
            to_screen(Vec2::new(x_extent as f32, 0.0)),
            1.0,
            AXIS_COLOR,
        );
        scene.line(
            to_screen(Vec2::new(0.0, -(y_extent as f32))),
            to_screen(Vec2::new(0.0, y_extent as f32)),
            1.0,
            AXIS_COLOR,
        );

        let original = self.shape_at_offset();
        scene.fill_polygon(original.iter().map(|p| to_screen(*p)).collect(), ORIGINAL_COLOR);
        scene.fill_polygon(
            original.iter().map(|p| to_screen(self.matrix * *p)).collect(),
            TRANSFORMED_COLOR,
        );
    }
}
