use crate::Blendable;
use nalgebra as na;
use std::marker::PhantomData;

pub trait Vertex {}

/// Per-vertex outputs that the rasterizer interpolates across a primitive.
///
/// `position` is the clip-space position written by the vertex shader. Everything else is
/// interpolated with `lerp`, which the rasterizer feeds perspective-corrected weights.
pub trait Varyings: Clone + std::fmt::Debug {
	fn position(&self) -> &na::Vector4<f32>;
	fn lerp(&self, rhs: &Self, t: f32) -> Self;
}

pub struct Program<VS, FS, V, F, O>
where
	VS: VertexShader<V, F>,
	FS: FragmentShader<F, O>,
	V: Vertex,
	F: Varyings,
	O: Blendable,
{
	pub vertex_shader: VS,
	pub fragment_shader: FS,
	_phantom_v: PhantomData<V>,
	_phantom_f: PhantomData<F>,
	_phantom_o: PhantomData<O>,
}

impl<VS, FS, V, F, O> Program<VS, FS, V, F, O>
where
	VS: VertexShader<V, F>,
	FS: FragmentShader<F, O>,
	V: Vertex,
	F: Varyings,
	O: Blendable,
{
	pub fn new(vertex_shader: VS, fragment_shader: FS) -> Self {
		Self {
			vertex_shader,
			fragment_shader,
			_phantom_v: PhantomData,
			_phantom_f: PhantomData,
			_phantom_o: PhantomData,
		}
	}
}

pub trait VertexShader<I: Vertex, O: Varyings> {
	/// Called once per draw, before any vertex
	fn setup(&mut self) {}
	fn main(&mut self, vertex: &I) -> O;
}

pub trait FragmentShader<I: Varyings, O: Blendable> {
	fn main(&mut self, varyings: &I) -> O;
}
