use crate::{Camera, Canvas, Color, Material, Mesh, Program, Texture};
use nalgebra as na;

mod shaders;
pub use shaders::*;
pub mod demos;

/// Where a drawable sits in the world, as a function of elapsed seconds.
#[derive(Clone, Debug, PartialEq)]
pub enum Placement {
	Fixed(na::Matrix4<f32>),
	Spinning {
		translation: na::Vector3<f32>,
		axis: na::Unit<na::Vector3<f32>>,
		/// Radians per second
		speed: f32,
		scale: f32,
	},
}

impl Placement {
	pub fn at(translation: na::Vector3<f32>) -> Self {
		Placement::Fixed(na::Matrix4::new_translation(&translation))
	}

	pub fn spinning(translation: na::Vector3<f32>, axis: na::Vector3<f32>, speed: f32) -> Self {
		Placement::Spinning {
			translation,
			axis: na::Unit::new_normalize(axis),
			speed,
			scale: 1.0,
		}
	}

	pub fn model(&self, time: f32) -> na::Matrix4<f32> {
		match self {
			Placement::Fixed(model) => *model,
			Placement::Spinning {
				translation,
				axis,
				speed,
				scale,
			} => {
				na::Matrix4::new_translation(translation)
					* na::Matrix4::from_axis_angle(axis, time * speed)
					* na::Matrix4::new_scaling(*scale)
			}
		}
	}
}

pub struct Drawable {
	pub name: String,
	pub hideable: bool,
	lit: bool,
	placement: Placement,
	program: ScenePipeline,
	vertices: Vec<SceneVertex>,
}

impl Drawable {
	pub fn new(name: &str, mesh: &dyn Mesh<Color>, placement: Placement) -> Self {
		let material = mesh
			.material()
			.cloned()
			.unwrap_or_else(|| Material::Color(Color::white()));

		Self {
			name: name.to_string(),
			hideable: false,
			lit: true,
			placement,
			program: Program::new(SceneVertexShader::default(), SceneFragmentShader::new(material)),
			vertices: SceneVertex::from_mesh(mesh),
		}
	}

	pub fn with_overlay(mut self, texture: Texture<Color>, amount: f32) -> Self {
		self.program.fragment_shader.overlay = Some(Overlay { texture, amount });
		self
	}

	pub fn unlit(mut self) -> Self {
		self.lit = false;
		self
	}

	pub fn hideable(mut self) -> Self {
		self.hideable = true;
		self
	}

	pub fn placement(&self) -> &Placement {
		&self.placement
	}

	pub fn vertex_count(&self) -> usize {
		self.vertices.len()
	}
}

/// Fixed, ordered list of things to draw each frame.
pub struct Scene {
	pub clear_color: Color,
	pub light: Option<PointLight>,
	drawables: Vec<Drawable>,
}

impl Scene {
	pub fn new(clear_color: Color) -> Self {
		Self {
			clear_color,
			light: None,
			drawables: vec![],
		}
	}

	pub fn with_light(mut self, light: PointLight) -> Self {
		self.light = Some(light);
		self
	}

	pub fn push(&mut self, drawable: Drawable) {
		log::debug!("Adding drawable: {} ({} vertices)", drawable.name, drawable.vertex_count());
		self.drawables.push(drawable);
	}

	pub fn drawables(&self) -> &[Drawable] {
		&self.drawables
	}

	pub fn draw(&mut self, canvas: &mut Canvas<Color>, camera: &impl Camera, time: f32, hide_hideable: bool) {
		let light = self.light;
		let mut ctx = canvas.context();
		ctx.clear(self.clear_color);

		for drawable in self.drawables.iter_mut() {
			if hide_hideable && drawable.hideable {
				continue;
			}

			let vertex_shader = &mut drawable.program.vertex_shader;
			vertex_shader.set_camera(camera);
			vertex_shader.set_model(&drawable.placement.model(time));
			vertex_shader.light = if drawable.lit { light } else { None };

			ctx.draw_triangles(&mut drawable.program, drawable.vertices.iter());
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{Cube, FreeCamera, Quad};

	#[test]
	fn spinning_placement_rotates_over_time() {
		let placement = Placement::spinning(na::Vector3::new(1.0, 0.0, 0.0), na::Vector3::y(), 1.0);
		assert_eq!(
			placement.model(0.0).transform_point(&na::Point3::origin()),
			na::Point3::new(1.0, 0.0, 0.0)
		);

		let turned = placement
			.model(std::f32::consts::FRAC_PI_2)
			.transform_vector(&na::Vector3::x());
		assert!((turned - na::Vector3::new(0.0, 0.0, -1.0)).norm() < 1e-5);
	}

	#[test]
	fn hidden_drawables_are_skipped() {
		let background = Color::rgb(32, 36, 41);
		let mut scene = Scene::new(background);
		scene.push(Drawable::new("quad", &Quad::new(0.5, Material::Color(Color::white())), Placement::at(na::Vector3::zeros())).hideable());

		let camera = FreeCamera::new(na::Point3::new(0.0, 0.0, 3.0));
		let mut canvas: Canvas = Canvas::new(40, 30);

		scene.draw(&mut canvas, &camera, 0.0, false);
		assert_eq!(*canvas.buffer().get(20, 15).unwrap(), Color::white());

		scene.draw(&mut canvas, &camera, 0.0, true);
		assert_eq!(*canvas.buffer().get(20, 15).unwrap(), background);
	}

	#[test]
	fn lit_drawables_pick_up_the_light() {
		let mut scene = Scene::new(Color::black()).with_light(PointLight::new(na::Point3::new(0.0, 0.0, -10.0)));
		// Light sits behind the cube, so the visible face only gets ambient
		scene.push(Drawable::new("cube", &Cube::new(0.5, Material::Color(Color::white())), Placement::at(na::Vector3::zeros())));

		let camera = FreeCamera::new(na::Point3::new(0.0, 0.0, 3.0));
		let mut canvas: Canvas = Canvas::new(40, 30);
		scene.draw(&mut canvas, &camera, 0.0, false);

		let c = *canvas.buffer().get(20, 15).unwrap();
		assert!(c.r > 0 && c.r < 64, "{:?}", c);
	}
}
