//! The two scenes shipped as binaries.

use super::{Drawable, Placement, PointLight, Scene};
use crate::{Color, Cube, Filter, Material, Quad, Sampler, Texture, Wrap};
use nalgebra as na;
use std::path::Path;

pub const CLEAR_COLOR: Color = Color {
	r: 32,
	g: 36,
	b: 41,
	a: 255,
};

pub const LIGHT_POSITION: [f32; 3] = [1.2, 1.0, 2.0];

const CUBE_SIZE: f32 = 0.5;
const QUAD_SIZE: f32 = 0.5;
const LAMP_SCALE: f32 = 0.2;
const OVERLAY_AMOUNT: f32 = 0.2;

fn spin_axis() -> na::Vector3<f32> {
	na::Vector3::new(0.5, 1.0, 0.0)
}

fn load(assets: &Path, name: &str, sampler: Sampler) -> Texture<Color> {
	Texture::load_or_blank(assets.join(name)).with_sampler(sampler)
}

/// A single spinning cube with a mirrored crate texture mixed over the earth.
pub fn textured_cube(assets: &Path) -> Scene {
	let base = load(assets, "earth.jpg", Sampler::default());
	let overlay = load(
		assets,
		"crate.jpg",
		Sampler {
			wrap_s: Wrap::MirroredRepeat,
			wrap_t: Wrap::Repeat,
			filter: Filter::Linear,
		},
	);

	let mut scene = Scene::new(CLEAR_COLOR);
	scene.push(
		Drawable::new(
			"cube",
			&Cube::new(CUBE_SIZE, Material::Texture(base)),
			Placement::spinning(na::Vector3::zeros(), spin_axis(), 1.0),
		)
		.with_overlay(overlay, OVERLAY_AMOUNT)
		.unlit(),
	);
	scene
}

/// Lit crate, the lamp marking the light, and two hideable picture quads.
pub fn lit_scene(assets: &Path) -> Scene {
	let light_position = na::Point3::from_slice(&LIGHT_POSITION);
	let mut scene = Scene::new(CLEAR_COLOR).with_light(PointLight::new(light_position));

	scene.push(Drawable::new(
		"crate",
		&Cube::new(CUBE_SIZE, Material::Texture(load(assets, "crate.jpg", Sampler::default()))),
		Placement::spinning(na::Vector3::zeros(), spin_axis(), 1.0),
	));

	let lamp = Placement::Fixed(
		na::Matrix4::new_translation(&light_position.coords) * na::Matrix4::new_scaling(LAMP_SCALE),
	);
	scene.push(Drawable::new("lamp", &Cube::new(CUBE_SIZE, Material::Color(Color::white())), lamp).unlit());

	for (name, file, x) in [("earth", "earth.jpg", -1.5), ("moon", "moon.jpg", 1.5)].iter() {
		let texture = load(assets, file, Sampler::default());
		scene.push(
			Drawable::new(
				name,
				&Quad::new(QUAD_SIZE, Material::Texture(texture)),
				Placement::at(na::Vector3::new(*x, 0.0, -1.0)),
			)
			.hideable(),
		);
	}

	scene
}
