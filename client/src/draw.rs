//! Turning a [`Scene`] into egui shapes.

use eframe::egui::{self, epaint, pos2, vec2, Color32, Pos2, Rect, Shape};
use game::prelude::*;

/// Share of a cell left empty around snake segments.
const INSET: f32 = 0.15;

/// Radius of a fruit relative to the cell size.
const FRUIT_RADIUS: f32 = 0.4;

pub fn color32(color: Color) -> Color32 {
	Color32::from_rgba_premultiplied(color.r, color.g, color.b, color.a)
}

fn filled(rect: Rect, color: Color) -> Shape {
	Shape::Rect(epaint::RectShape::filled(rect, 0.0, color32(color)))
}

/// Screen rectangle of `cell` for a grid drawn from `origin`.
pub fn cell_rect(origin: Pos2, cell_size: f32, cell: Cell) -> Rect {
	Rect::from_min_size(
		pos2(
			origin.x + cell.x as f32 * cell_size,
			origin.y + cell.y as f32 * cell_size,
		),
		vec2(cell_size, cell_size),
	)
}

/// Field with darker checkerboard squares.
fn background(grid: Grid, origin: Pos2, cell_size: f32) -> Vec<Shape> {
	let side = grid.size as f32 * cell_size;
	let mut shapes = vec![filled(
		Rect::from_min_size(origin, vec2(side, side)),
		Color::FIELD,
	)];
	shapes.extend(
		grid.cells()
			.filter(|cell| (cell.x + cell.y) % 2 == 0)
			.map(|cell| filled(cell_rect(origin, cell_size, cell), Color::GRASS)),
	);
	shapes
}

/// Shapes of one snake cell: a square in the middle bridged to the cell
/// edges the segment is joined through.
fn segment_shapes(rect: Rect, segment: &Segment, color: Color) -> Vec<Shape> {
	let kind = match segment.kind {
		Some(kind) => kind,
		None => return vec![filled(rect, color)],
	};

	let core = rect.shrink(rect.width() * INSET);
	let mut shapes = vec![filled(core, color)];
	for side in kind.joins() {
		let bridge = match side {
			Direction::Up => Rect::from_min_max(pos2(core.min.x, rect.min.y), pos2(core.max.x, core.min.y)),
			Direction::Down => Rect::from_min_max(pos2(core.min.x, core.max.y), pos2(core.max.x, rect.max.y)),
			Direction::Left => Rect::from_min_max(pos2(rect.min.x, core.min.y), pos2(core.min.x, core.max.y)),
			Direction::Right => Rect::from_min_max(pos2(core.max.x, core.min.y), pos2(rect.max.x, core.max.y)),
			Direction::Neutral => continue,
		};
		shapes.push(filled(bridge, color));
	}
	shapes
}

/// All shapes of the grid area, back to front.
pub fn scene_shapes(scene: &Scene, origin: Pos2, cell_size: f32) -> Vec<Shape> {
	let mut shapes = background(scene.grid, origin, cell_size);

	for fruit in &scene.fruits {
		let rect = cell_rect(origin, cell_size, fruit.cell());
		shapes.push(Shape::circle_filled(
			rect.center(),
			cell_size * FRUIT_RADIUS,
			color32(Color::FRUIT),
		));
	}

	for (i, segment) in scene.segments.iter().enumerate() {
		let color = if i == 0 { Color::SNAKE_HEAD } else { Color::SNAKE };
		let rect = cell_rect(origin, cell_size, segment.cell);
		shapes.extend(segment_shapes(rect, segment, color));
	}

	shapes
}

/// Values printed over fruits.
pub fn fruit_labels(scene: &Scene, origin: Pos2, cell_size: f32) -> Vec<(Pos2, String)> {
	scene
		.fruits
		.iter()
		.filter_map(|fruit| {
			fruit
				.value()
				.map(|value| (cell_rect(origin, cell_size, fruit.cell()).center(), value.to_string()))
		})
		.collect()
}

/// Paint `scene` with `painter` starting from `origin`.
pub fn paint(painter: &egui::Painter, scene: &Scene, origin: Pos2, cell_size: f32) {
	painter.extend(scene_shapes(scene, origin, cell_size));
	for (pos, text) in fruit_labels(scene, origin, cell_size) {
		painter.text(
			pos,
			egui::Align2::CENTER_CENTER,
			text,
			egui::TextStyle::Body,
			color32(Color::WHITE),
		);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use game::{fruit::Fruit, snake::Snake};

	fn rects(shapes: &[Shape]) -> Vec<Rect> {
		shapes
			.iter()
			.filter_map(|shape| match shape {
				Shape::Rect(rect) => Some(rect.rect),
				_ => None,
			})
			.collect()
	}

	#[test]
	fn cell_rects() {
		let rect = cell_rect(pos2(10.0, 20.0), 40.0, Cell::new(2, 3));
		assert_eq!(rect.min, pos2(90.0, 140.0));
		assert_eq!(rect.max, pos2(130.0, 180.0));
	}

	#[test]
	fn straight_segment_spans_cell() {
		let rect = cell_rect(pos2(0.0, 0.0), 40.0, Cell::new(0, 0));
		let segment = Segment {
			cell: Cell::new(0, 0),
			kind: Some(SegmentKind::Horizontal),
		};
		let shapes = rects(&segment_shapes(rect, &segment, Color::SNAKE));

		assert_eq!(shapes.len(), 3);
		let left = shapes.iter().map(|r| r.min.x).fold(f32::MAX, f32::min);
		let right = shapes.iter().map(|r| r.max.x).fold(f32::MIN, f32::max);
		let top = shapes.iter().map(|r| r.min.y).fold(f32::MAX, f32::min);
		assert_eq!((left, right), (0.0, 40.0));
		assert!((top - 40.0 * INSET).abs() < 1e-4, "{}", top);
	}

	#[test]
	fn corner_reaches_its_sides() {
		let rect = cell_rect(pos2(0.0, 0.0), 40.0, Cell::new(0, 0));
		let segment = Segment {
			cell: Cell::new(0, 0),
			kind: Some(SegmentKind::Corner(Corner::UpLeft)),
		};
		let shapes = rects(&segment_shapes(rect, &segment, Color::SNAKE));

		assert!(shapes.iter().any(|r| r.min.y == 0.0));
		assert!(shapes.iter().any(|r| r.min.x == 0.0));
		assert!(shapes.iter().all(|r| r.max.x < 40.0 && r.max.y < 40.0));
	}

	#[test]
	fn whole_scene() {
		let scene = Scene {
			grid: Grid::new(4),
			segments: Snake::default().segments(),
			fruits: vec![Fruit::at(Cell::new(1, 1), Some(7)), Fruit::at(Cell::new(2, 2), None)],
			score: 0,
			question: None,
			paused: false,
		};
		let shapes = scene_shapes(&scene, pos2(0.0, 0.0), 10.0);

		// field, 8 grass squares, 2 fruits, head and tail with one bridge
		// each, body with two
		assert_eq!(shapes.len(), 1 + 8 + 2 + 2 + 2 + 3);

		let labels = fruit_labels(&scene, pos2(0.0, 0.0), 10.0);
		assert_eq!(labels, [(pos2(15.0, 15.0), "7".to_string())]);
	}
}
