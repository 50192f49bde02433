use crate::{Blendable, Buffer, Color, FragmentShader, Program, Varyings, Vertex, VertexShader};
use nalgebra as na;

// Anything closer to the eye plane than this is treated as degenerate
const MIN_W: f32 = 1e-6;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PolygonMode {
	Fill,
	Line,
}

impl PolygonMode {
	pub fn toggled(self) -> Self {
		match self {
			PolygonMode::Fill => PolygonMode::Line,
			PolygonMode::Line => PolygonMode::Fill,
		}
	}
}

impl Default for PolygonMode {
	fn default() -> Self {
		PolygonMode::Fill
	}
}

/// A vertex after the perspective divide, in pixel coordinates.
#[derive(Clone, Copy, Debug)]
struct ScreenPoint {
	x: f32,
	y: f32,
	z: f32,
	inv_w: f32,
}

fn edge(a: &ScreenPoint, b: &ScreenPoint, px: f32, py: f32) -> f32 {
	(b.x - a.x) * (py - a.y) - (b.y - a.y) * (px - a.x)
}

// Weights must already be perspective corrected and sum to one
fn interpolate<F: Varyings>(tri: &[F; 3], weights: [f32; 3]) -> F {
	let first = weights[0] + weights[1];
	if first <= f32::EPSILON {
		return tri[2].clone();
	}
	tri[0].lerp(&tri[1], weights[1] / first).lerp(&tri[2], weights[2])
}

pub struct DrawContext<'a, O: Blendable> {
	pub buffer: &'a mut Buffer<O>,
	pub depth: &'a mut Buffer<f32>,
	pub polygon_mode: PolygonMode,
}

impl<'a, O> DrawContext<'a, O>
where
	O: Blendable,
{
	pub fn width(&self) -> u32 {
		self.buffer.width()
	}

	pub fn height(&self) -> u32 {
		self.buffer.height()
	}

	pub fn clear(&mut self, color: O) {
		self.buffer.fill(color);
		self.depth.fill(std::f32::INFINITY);
	}

	// Clip space to pixels, i.e. -1.0..1.0 into 0..width with y pointing down
	fn clip_to_screen(&self, p: &na::Vector4<f32>) -> Option<ScreenPoint> {
		if p.w < MIN_W {
			return None;
		}
		let (w, h) = (self.buffer.width() as f32, self.buffer.height() as f32);
		let inv_w = 1.0 / p.w;
		Some(ScreenPoint {
			x: (p.x * inv_w * 0.5 + 0.5) * w,
			y: (0.5 - p.y * inv_w * 0.5) * h,
			z: p.z * inv_w,
			inv_w,
		})
	}

	fn clip_polygon_to_edge<F>(&self, poly: &[F], axis: usize, factor: f32) -> Vec<F>
	where
		F: Varyings,
	{
		let mut verts = Vec::with_capacity(poly.len() + 2);

		let mut prev_v = &poly[poly.len() - 1];
		let mut prev_val = prev_v.position()[axis] * factor;
		let mut prev_inside = prev_val <= prev_v.position().w;

		for v in poly {
			let val = v.position()[axis] * factor;
			let inside = val <= v.position().w;

			if inside ^ prev_inside {
				let t = (prev_v.position().w - prev_val) / ((prev_v.position().w - prev_val) - (v.position().w - val));
				verts.push(prev_v.lerp(v, t));
			}

			if inside {
				verts.push(v.clone());
			}

			prev_v = v;
			prev_val = val;
			prev_inside = inside;
		}

		verts
	}

	/// Clip against all six frustum planes and fan the result back into triangles.
	fn clip_triangle<F>(&self, tri: [F; 3]) -> Vec<[F; 3]>
	where
		F: Varyings,
	{
		let mut poly: Vec<F> = tri.to_vec();
		for axis in 0..3 {
			for factor in [1.0, -1.0].iter() {
				poly = self.clip_polygon_to_edge(&poly, axis, *factor);
				if poly.len() < 3 {
					return vec![];
				}
			}
		}

		let mut tris: Vec<[F; 3]> = Vec::with_capacity(poly.len() - 2);
		for i in 1..poly.len() - 1 {
			tris.push([poly[0].clone(), poly[i].clone(), poly[i + 1].clone()]);
		}

		tris
	}

	fn clip_line<F>(&self, line: [F; 2]) -> Option<[F; 2]>
	where
		F: Varyings,
	{
		let mut t0 = 0.0f32;
		let mut t1 = 1.0f32;
		let a = *line[0].position();
		let b = *line[1].position();
		for axis in 0..3 {
			for factor in [1.0, -1.0].iter() {
				// Signed distance to the plane, positive inside
				let da = a.w - a[axis] * *factor;
				let db = b.w - b[axis] * *factor;
				if da < 0.0 && db < 0.0 {
					return None;
				}
				if da < 0.0 {
					t0 = t0.max(da / (da - db));
				} else if db < 0.0 {
					t1 = t1.min(da / (da - db));
				}
			}
		}
		if t0 > t1 {
			return None;
		}

		Some([line[0].lerp(&line[1], t0), line[0].lerp(&line[1], t1)])
	}

	pub fn rasterize_triangle<F>(&mut self, tri: [F; 3], shader: &mut impl FragmentShader<F, O>)
	where
		F: Varyings,
	{
		for tri in self.clip_triangle(tri) {
			let (p0, p1, p2) = match (
				self.clip_to_screen(tri[0].position()),
				self.clip_to_screen(tri[1].position()),
				self.clip_to_screen(tri[2].position()),
			) {
				(Some(p0), Some(p1), Some(p2)) => (p0, p1, p2),
				_ => continue,
			};

			let area = edge(&p0, &p1, p2.x, p2.y);
			if area.abs() < f32::EPSILON {
				continue;
			}

			let max_x = self.width() as i32 - 1;
			let max_y = self.height() as i32 - 1;
			let x_start = (p0.x.min(p1.x).min(p2.x).floor() as i32).max(0);
			let x_end = (p0.x.max(p1.x).max(p2.x).ceil() as i32).min(max_x);
			let y_start = (p0.y.min(p1.y).min(p2.y).floor() as i32).max(0);
			let y_end = (p0.y.max(p1.y).max(p2.y).ceil() as i32).min(max_y);

			for y in y_start..=y_end {
				let py = y as f32 + 0.5;
				for x in x_start..=x_end {
					let px = x as f32 + 0.5;

					// Dividing by the signed area makes the test winding independent
					let b0 = edge(&p1, &p2, px, py) / area;
					let b1 = edge(&p2, &p0, px, py) / area;
					let b2 = edge(&p0, &p1, px, py) / area;
					if b0 < 0.0 || b1 < 0.0 || b2 < 0.0 {
						continue;
					}

					let z = b0 * p0.z + b1 * p1.z + b2 * p2.z;

					// Depth test
					if let Some(d) = self.depth.get_mut(x, y) {
						if *d <= z {
							continue;
						}
						*d = z;
					}

					let q0 = b0 * p0.inv_w;
					let q1 = b1 * p1.inv_w;
					let q2 = b2 * p2.inv_w;
					let sum = q0 + q1 + q2;
					let p = interpolate(&tri, [q0 / sum, q1 / sum, q2 / sum]);

					if let Some(dst) = self.buffer.get_mut(x, y) {
						let color = shader.main(&p);
						*dst = color.blend(dst);
					}
				}
			}
		}
	}

	pub fn rasterize_line<F>(&mut self, line: [F; 2], shader: &mut impl FragmentShader<F, O>)
	where
		F: Varyings,
	{
		let line = match self.clip_line(line) {
			Some(line) => line,
			None => return,
		};
		let (p0, p1) = match (
			self.clip_to_screen(line[0].position()),
			self.clip_to_screen(line[1].position()),
		) {
			(Some(p0), Some(p1)) => (p0, p1),
			_ => return,
		};

		let steps = (p1.x - p0.x).abs().max((p1.y - p0.y).abs()).ceil().max(1.0) as i32;
		for i in 0..=steps {
			let t = i as f32 / steps as f32;
			let x = (p0.x + (p1.x - p0.x) * t).floor() as i32;
			let y = (p0.y + (p1.y - p0.y) * t).floor() as i32;
			let z = p0.z + (p1.z - p0.z) * t;

			// Depth test, shared edges may draw twice
			if let Some(d) = self.depth.get_mut(x, y) {
				if *d < z {
					continue;
				}
				*d = z;
			}

			let q0 = (1.0 - t) * p0.inv_w;
			let q1 = t * p1.inv_w;
			let p = line[0].lerp(&line[1], q1 / (q0 + q1));

			if let Some(dst) = self.buffer.get_mut(x, y) {
				let color = shader.main(&p);
				*dst = color.blend(dst);
			}
		}
	}

	pub fn draw_triangles<'v, VS, FS, V, F, I>(&mut self, program: &mut Program<VS, FS, V, F, O>, vertices: I)
	where
		VS: VertexShader<V, F>,
		FS: FragmentShader<F, O>,
		V: Vertex + 'v,
		F: Varyings,
		I: IntoIterator<Item = &'v V>,
	{
		let vertex_shader = &mut program.vertex_shader;
		let fragment_shader = &mut program.fragment_shader;
		vertex_shader.setup();

		let mut tri: Vec<F> = Vec::with_capacity(3);
		for vertex in vertices {
			tri.push(vertex_shader.main(vertex));
			if tri.len() < 3 {
				continue;
			}

			let v2 = tri.remove(2);
			let v1 = tri.remove(1);
			let v0 = tri.remove(0);
			match self.polygon_mode {
				PolygonMode::Fill => self.rasterize_triangle([v0, v1, v2], fragment_shader),
				PolygonMode::Line => {
					self.rasterize_line([v0.clone(), v1.clone()], fragment_shader);
					self.rasterize_line([v1, v2.clone()], fragment_shader);
					self.rasterize_line([v2, v0], fragment_shader);
				}
			}
		}
	}
}

pub struct Canvas<O: Blendable = Color> {
	buffer: Buffer<O>,
	depth: Buffer<f32>,
	pub polygon_mode: PolygonMode,
}

impl Canvas<Color> {
	/// Copy the colour buffer into an RGBA8 frame of the same size.
	pub fn copy_to_rgba(&self, frame: &mut [u8]) {
		for (pixel, color) in frame.chunks_exact_mut(4).zip(self.buffer.pixels()) {
			pixel.copy_from_slice(&color.as_rgba());
		}
	}
}

impl<O: Blendable> Canvas<O> {
	pub fn new(width: u32, height: u32) -> Self {
		Self {
			buffer: Buffer::new(width, height),
			depth: Buffer::new_with_value(std::f32::INFINITY, width, height),
			polygon_mode: PolygonMode::Fill,
		}
	}

	pub fn width(&self) -> u32 {
		self.buffer.width()
	}

	pub fn height(&self) -> u32 {
		self.buffer.height()
	}

	pub fn context(&mut self) -> DrawContext<'_, O> {
		DrawContext {
			buffer: &mut self.buffer,
			depth: &mut self.depth,
			polygon_mode: self.polygon_mode,
		}
	}

	pub fn buffer(&self) -> &Buffer<O> {
		&self.buffer
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[derive(Debug, Clone)]
	struct TestVertex {
		position: na::Vector4<f32>,
	}

	impl Vertex for TestVertex {}

	#[derive(Debug, Clone)]
	struct TestVaryings {
		position: na::Vector4<f32>,
	}

	impl Varyings for TestVaryings {
		fn position(&self) -> &na::Vector4<f32> {
			&self.position
		}

		fn lerp(&self, rhs: &Self, t: f32) -> Self {
			Self {
				position: self.position.lerp(&rhs.position, t),
			}
		}
	}

	struct PassThrough;

	impl VertexShader<TestVertex, TestVaryings> for PassThrough {
		fn main(&mut self, vertex: &TestVertex) -> TestVaryings {
			TestVaryings {
				position: vertex.position,
			}
		}
	}

	struct Solid(Color);

	impl FragmentShader<TestVaryings, Color> for Solid {
		fn main(&mut self, _: &TestVaryings) -> Color {
			self.0
		}
	}

	fn vertices(points: &[(f32, f32, f32, f32)]) -> Vec<TestVertex> {
		points
			.iter()
			.map(|&(x, y, z, w)| TestVertex {
				position: na::Vector4::new(x, y, z, w),
			})
			.collect()
	}

	fn full_screen(z: f32) -> Vec<TestVertex> {
		vertices(&[
			(-1.0, -1.0, z, 1.0),
			(1.0, -1.0, z, 1.0),
			(1.0, 1.0, z, 1.0),
			(-1.0, -1.0, z, 1.0),
			(1.0, 1.0, z, 1.0),
			(-1.0, 1.0, z, 1.0),
		])
	}

	fn draw(canvas: &mut Canvas, color: Color, verts: &[TestVertex]) {
		let mut program = Program::new(PassThrough, Solid(color));
		canvas.context().draw_triangles(&mut program, verts.iter());
	}

	fn pixel(canvas: &Canvas, x: i32, y: i32) -> Color {
		*canvas.buffer().get(x, y).unwrap()
	}

	#[test]
	fn fills_inside_of_triangle_only() {
		let mut canvas: Canvas = Canvas::new(10, 10);
		canvas.context().clear(Color::black());
		draw(
			&mut canvas,
			Color::white(),
			&vertices(&[(-1.0, -1.0, 0.0, 1.0), (1.0, -1.0, 0.0, 1.0), (-1.0, 1.0, 0.0, 1.0)]),
		);
		// Lower left half is covered, upper right is not
		assert_eq!(pixel(&canvas, 1, 8), Color::white());
		assert_eq!(pixel(&canvas, 8, 1), Color::black());
	}

	#[test]
	fn nearer_fragments_win_regardless_of_order() {
		let red = Color::rgb(255, 0, 0);
		let blue = Color::rgb(0, 0, 255);

		let mut canvas: Canvas = Canvas::new(8, 8);
		canvas.context().clear(Color::black());
		draw(&mut canvas, red, &full_screen(-0.5));
		draw(&mut canvas, blue, &full_screen(0.5));
		assert_eq!(pixel(&canvas, 4, 4), red);

		canvas.context().clear(Color::black());
		draw(&mut canvas, blue, &full_screen(0.5));
		draw(&mut canvas, red, &full_screen(-0.5));
		assert_eq!(pixel(&canvas, 4, 4), red);
	}

	#[test]
	fn geometry_behind_the_eye_is_clipped() {
		let mut canvas: Canvas = Canvas::new(8, 8);
		canvas.context().clear(Color::black());
		draw(
			&mut canvas,
			Color::white(),
			&vertices(&[(0.0, 0.0, 0.0, -1.0), (1.0, 0.0, 0.0, -1.0), (0.0, 1.0, 0.0, -1.0)]),
		);
		assert!(canvas.buffer().pixels().iter().all(|c| *c == Color::black()));
	}

	#[test]
	fn partially_visible_triangle_is_clipped_not_dropped() {
		let mut canvas: Canvas = Canvas::new(8, 8);
		canvas.context().clear(Color::black());
		// Spills far past the right and top edges
		draw(
			&mut canvas,
			Color::white(),
			&vertices(&[(-1.0, -1.0, 0.0, 1.0), (5.0, -1.0, 0.0, 1.0), (-1.0, 5.0, 0.0, 1.0)]),
		);
		assert!(canvas.buffer().pixels().iter().all(|c| *c == Color::white()));
	}

	#[test]
	fn line_mode_draws_edges_only() {
		let tri = vertices(&[(-0.8, -0.8, 0.0, 1.0), (0.8, -0.8, 0.0, 1.0), (-0.8, 0.8, 0.0, 1.0)]);

		let mut canvas: Canvas = Canvas::new(20, 20);
		canvas.polygon_mode = PolygonMode::Line;
		canvas.context().clear(Color::black());
		draw(&mut canvas, Color::white(), &tri);
		assert_eq!(pixel(&canvas, 10, 18), Color::white());
		assert_eq!(pixel(&canvas, 6, 14), Color::black());

		canvas.polygon_mode = PolygonMode::Fill;
		canvas.context().clear(Color::black());
		draw(&mut canvas, Color::white(), &tri);
		assert_eq!(pixel(&canvas, 6, 14), Color::white());
	}

	#[test]
	fn copies_rgba_bytes() {
		let mut canvas: Canvas = Canvas::new(2, 1);
		canvas.context().clear(Color::rgba(1, 2, 3, 4));
		let mut frame = vec![0u8; 8];
		canvas.copy_to_rgba(&mut frame);
		assert_eq!(frame, vec![1, 2, 3, 4, 1, 2, 3, 4]);
	}
}
