use crate::{Blendable, Camera, Color, FragmentShader, Material, Mesh, Program, Texture, Varyings, Vertex, VertexShader};
use nalgebra as na;

const AMBIENT_STRENGTH: f32 = 0.1;
const SPECULAR_STRENGTH: f32 = 0.5;
const SHININESS: i32 = 32;

pub type ScenePipeline = Program<SceneVertexShader, SceneFragmentShader, SceneVertex, SceneVaryings, Color>;

#[derive(Debug, Clone)]
pub struct SceneVertex {
	pub position: na::Point3<f32>,
	pub normal: na::Vector3<f32>,
	pub uv: na::Point2<f32>,
}

impl Vertex for SceneVertex {}

impl SceneVertex {
	/// Flatten a mesh into a triangle list, three vertices per triangle.
	pub fn from_mesh<P: Blendable>(mesh: &dyn Mesh<P>) -> Vec<Self> {
		let mut vertices = Vec::with_capacity(36);
		for tri in mesh.triangles() {
			for i in 0..3 {
				vertices.push(SceneVertex {
					position: tri.points[i],
					normal: tri.normal,
					uv: tri.uvs[i],
				});
			}
		}
		vertices
	}
}

#[derive(Debug, Clone)]
pub struct SceneVaryings {
	pub position: na::Vector4<f32>,
	pub uv: na::Vector2<f32>,
	pub light: na::Vector3<f32>,
}

impl Varyings for SceneVaryings {
	fn position(&self) -> &na::Vector4<f32> {
		&self.position
	}

	fn lerp(&self, rhs: &Self, t: f32) -> Self {
		Self {
			position: self.position.lerp(&rhs.position, t),
			uv: self.uv.lerp(&rhs.uv, t),
			light: self.light.lerp(&rhs.light, t),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
	pub position: na::Point3<f32>,
	pub color: na::Vector3<f32>,
}

impl PointLight {
	pub fn new(position: na::Point3<f32>) -> Self {
		Self {
			position,
			color: na::Vector3::repeat(1.0),
		}
	}

	/// Ambient + diffuse + specular light reaching `position` as seen from `eye`.
	pub fn illuminate(
		&self,
		position: &na::Point3<f32>,
		normal: &na::Vector3<f32>,
		eye: &na::Point3<f32>,
	) -> na::Vector3<f32> {
		let ambient = self.color * AMBIENT_STRENGTH;

		let light_dir = match (self.position - *position).try_normalize(f32::EPSILON) {
			Some(dir) => dir,
			None => return ambient,
		};
		let diffuse = self.color * normal.dot(&light_dir).max(0.0);

		let specular = match (*eye - *position).try_normalize(f32::EPSILON) {
			Some(view_dir) => {
				let reflect_dir = normal * (2.0 * normal.dot(&light_dir)) - light_dir;
				self.color * (SPECULAR_STRENGTH * view_dir.dot(&reflect_dir).max(0.0).powi(SHININESS))
			}
			None => na::Vector3::zeros(),
		};

		ambient + diffuse + specular
	}
}

pub struct SceneVertexShader {
	pub model: na::Matrix4<f32>,
	pub view: na::Matrix4<f32>,
	pub projection: na::Matrix4<f32>,
	pub light: Option<PointLight>,
	pub eye: na::Point3<f32>,
	mvp: na::Matrix4<f32>,
	normal_matrix: na::Matrix3<f32>,
}

impl Default for SceneVertexShader {
	fn default() -> Self {
		Self {
			model: na::Matrix4::identity(),
			view: na::Matrix4::identity(),
			projection: na::Matrix4::identity(),
			light: None,
			eye: na::Point3::origin(),
			mvp: na::Matrix4::identity(),
			normal_matrix: na::Matrix3::identity(),
		}
	}
}

impl SceneVertexShader {
	pub fn set_camera(&mut self, camera: &impl Camera) {
		self.view = camera.view();
		self.projection = camera.projection();
		self.eye = camera.position();
	}

	pub fn set_model(&mut self, model: &na::Matrix4<f32>) {
		self.model = *model;
	}
}

impl VertexShader<SceneVertex, SceneVaryings> for SceneVertexShader {
	fn setup(&mut self) {
		self.mvp = self.projection * self.view * self.model;

		// Inverse transpose keeps normals perpendicular under non-uniform scale
		let linear = na::Matrix3::from_fn(|r, c| self.model[(r, c)]);
		self.normal_matrix = linear
			.try_inverse()
			.map(|inv| inv.transpose())
			.unwrap_or_else(na::Matrix3::identity);
	}

	fn main(&mut self, vertex: &SceneVertex) -> SceneVaryings {
		let position = self.mvp * vertex.position.to_homogeneous();

		let light = match &self.light {
			Some(light) => {
				let world = self.model.transform_point(&vertex.position);
				let normal = (self.normal_matrix * vertex.normal)
					.try_normalize(f32::EPSILON)
					.unwrap_or(vertex.normal);
				light.illuminate(&world, &normal, &self.eye)
			}
			None => na::Vector3::repeat(1.0),
		};

		SceneVaryings {
			position,
			uv: vertex.uv.coords,
			light,
		}
	}
}

/// Second texture blended over the material, `amount` 0.0 keeps the material only.
#[derive(Clone, Debug)]
pub struct Overlay {
	pub texture: Texture<Color>,
	pub amount: f32,
}

pub struct SceneFragmentShader {
	pub material: Material<Color>,
	pub overlay: Option<Overlay>,
}

impl SceneFragmentShader {
	pub fn new(material: Material<Color>) -> Self {
		Self { material, overlay: None }
	}
}

impl FragmentShader<SceneVaryings, Color> for SceneFragmentShader {
	fn main(&mut self, varyings: &SceneVaryings) -> Color {
		let (u, v) = (varyings.uv.x, varyings.uv.y);
		let mut color = self.material.sample(u, v);
		if let Some(overlay) = &self.overlay {
			color = color.lerp(&overlay.texture.sample(u, v), overlay.amount);
		}

		color.lit(&varyings.light).opaque()
	}
}
