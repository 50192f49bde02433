use super::Camera;
use nalgebra as na;

pub const YAW: f32 = -90.0;
pub const PITCH: f32 = 0.0;
pub const SPEED: f32 = 2.5;
pub const SENSITIVITY: f32 = 0.1;
pub const ZOOM: f32 = 45.0;

pub const MAX_PITCH: f32 = 89.0;
pub const MIN_ZOOM: f32 = 1.0;
pub const MAX_ZOOM: f32 = 45.0;

const NEAR: f32 = 0.1;
const FAR: f32 = 100.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Movement {
	Forward,
	Backward,
	Left,
	Right,
}

/// Euler-angle fly camera. Angles are in degrees, `zoom` is the vertical FOV.
#[derive(Clone, Debug, PartialEq)]
pub struct FreeCamera {
	pub width: f32,
	pub height: f32,
	position: na::Point3<f32>,
	front: na::Vector3<f32>,
	up: na::Vector3<f32>,
	right: na::Vector3<f32>,
	world_up: na::Vector3<f32>,
	yaw: f32,
	pitch: f32,
	zoom: f32,
	movement_speed: f32,
	mouse_sensitivity: f32,
}

impl Default for FreeCamera {
	fn default() -> Self {
		Self::with_angles(na::Point3::origin(), na::Vector3::y(), YAW, PITCH)
	}
}

impl Camera for FreeCamera {
	fn position(&self) -> na::Point3<f32> {
		self.position
	}

	fn view(&self) -> na::Matrix4<f32> {
		na::Matrix4::look_at_rh(&self.position, &(self.position + self.front), &self.up)
	}

	fn projection(&self) -> na::Matrix4<f32> {
		let aspect = if self.width > 0.0 && self.height > 0.0 {
			self.width / self.height
		} else {
			1.0
		};
		na::Perspective3::new(aspect, self.zoom.to_radians(), NEAR, FAR).to_homogeneous()
	}
}

impl FreeCamera {
	pub fn new(position: na::Point3<f32>) -> Self {
		Self {
			position,
			..Default::default()
		}
	}

	pub fn with_angles(position: na::Point3<f32>, world_up: na::Vector3<f32>, yaw: f32, pitch: f32) -> Self {
		let mut camera = Self {
			width: 800.0,
			height: 600.0,
			position,
			front: -na::Vector3::z(),
			up: world_up,
			right: na::Vector3::x(),
			world_up,
			yaw,
			pitch,
			zoom: ZOOM,
			movement_speed: SPEED,
			mouse_sensitivity: SENSITIVITY,
		};
		camera.update_vectors();
		camera
	}

	pub fn with_tuning(mut self, movement_speed: f32, mouse_sensitivity: f32) -> Self {
		self.movement_speed = movement_speed;
		self.mouse_sensitivity = mouse_sensitivity;
		self
	}

	pub fn resize(&mut self, width: f32, height: f32) {
		self.width = width;
		self.height = height;
	}

	pub fn front(&self) -> na::Vector3<f32> {
		self.front
	}

	pub fn up(&self) -> na::Vector3<f32> {
		self.up
	}

	pub fn right(&self) -> na::Vector3<f32> {
		self.right
	}

	pub fn yaw(&self) -> f32 {
		self.yaw
	}

	pub fn pitch(&self) -> f32 {
		self.pitch
	}

	pub fn zoom(&self) -> f32 {
		self.zoom
	}

	pub fn movement_speed(&self) -> f32 {
		self.movement_speed
	}

	pub fn mouse_sensitivity(&self) -> f32 {
		self.mouse_sensitivity
	}

	pub fn process_keyboard(&mut self, direction: Movement, delta_time: f32) {
		let velocity = self.movement_speed * delta_time.max(0.0);
		match direction {
			Movement::Forward => self.position += self.front * velocity,
			Movement::Backward => self.position -= self.front * velocity,
			Movement::Left => self.position -= self.right * velocity,
			Movement::Right => self.position += self.right * velocity,
		}
	}

	pub fn process_mouse_movement(&mut self, x_offset: f32, y_offset: f32, constrain_pitch: bool) {
		self.yaw += x_offset * self.mouse_sensitivity;
		self.pitch += y_offset * self.mouse_sensitivity;

		// Looking straight up or down flips the look-at basis
		if constrain_pitch {
			self.pitch = self.pitch.max(-MAX_PITCH).min(MAX_PITCH);
		}

		self.update_vectors();
	}

	pub fn process_mouse_scroll(&mut self, y_offset: f32) {
		self.zoom = (self.zoom - y_offset).max(MIN_ZOOM).min(MAX_ZOOM);
	}

	fn update_vectors(&mut self) {
		let (sin_yaw, cos_yaw) = self.yaw.to_radians().sin_cos();
		let (sin_pitch, cos_pitch) = self.pitch.to_radians().sin_cos();
		let front = na::Vector3::new(cos_yaw * cos_pitch, sin_pitch, sin_yaw * cos_pitch);

		self.front = front.normalize();
		self.right = self.front.cross(&self.world_up).normalize();
		self.up = self.right.cross(&self.front).normalize();
	}
}
