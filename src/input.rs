//! Turns raw window input into camera and application actions.

use crate::Movement;
use winit::event::{MouseScrollDelta, VirtualKeyCode};
use winit_input_helper::WinitInputHelper;

/// Scroll distance that counts as one wheel notch for touchpads.
pub const PIXELS_PER_LINE: f32 = 20.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
	Close,
	ToggleWireframe,
	SelectColour(u8),
	Move(Movement),
	HideQuads,
}

/// Keyboard state as seen by one frame.
pub trait KeyState {
	/// Went down this frame
	fn pressed(&self, key: VirtualKeyCode) -> bool;
	/// Down this frame, including the frame it went down
	fn held(&self, key: VirtualKeyCode) -> bool;
}

impl KeyState for WinitInputHelper {
	fn pressed(&self, key: VirtualKeyCode) -> bool {
		self.key_pressed(key)
	}

	fn held(&self, key: VirtualKeyCode) -> bool {
		self.key_held(key) || self.key_pressed(key)
	}
}

const MOVEMENT_KEYS: [(VirtualKeyCode, Movement); 4] = [
	(VirtualKeyCode::W, Movement::Forward),
	(VirtualKeyCode::S, Movement::Backward),
	(VirtualKeyCode::A, Movement::Left),
	(VirtualKeyCode::D, Movement::Right),
];

const COLOUR_KEYS: [(VirtualKeyCode, u8); 3] = [
	(VirtualKeyCode::Key1, 1),
	(VirtualKeyCode::Key2, 2),
	(VirtualKeyCode::Key3, 3),
];

/// Actions for the current frame, in the order they should be applied.
pub fn actions(keys: &impl KeyState) -> Vec<Action> {
	let mut actions = vec![];

	if keys.pressed(VirtualKeyCode::Escape) {
		actions.push(Action::Close);
	}
	if keys.pressed(VirtualKeyCode::P) {
		actions.push(Action::ToggleWireframe);
	}
	for (key, colour) in COLOUR_KEYS.iter() {
		if keys.held(*key) {
			actions.push(Action::SelectColour(*colour));
		}
	}
	for (key, movement) in MOVEMENT_KEYS.iter() {
		if keys.held(*key) {
			actions.push(Action::Move(*movement));
		}
	}
	if keys.held(VirtualKeyCode::Space) {
		actions.push(Action::HideQuads);
	}

	actions
}

/// Vertical wheel movement in lines, positive away from the user.
pub fn scroll_lines(delta: &MouseScrollDelta) -> f32 {
	match delta {
		MouseScrollDelta::LineDelta(_, y) => *y,
		MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / PIXELS_PER_LINE,
	}
}

/// Converts absolute cursor positions into look offsets.
///
/// The first position after creation or `reset` only sets the baseline, so regaining focus
/// with the cursor somewhere else doesn't snap the view.
#[derive(Clone, Debug, Default)]
pub struct MouseLook {
	cursor: (f64, f64),
	last: Option<(f64, f64)>,
}

impl MouseLook {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn reset(&mut self) {
		self.last = None;
	}

	/// Offsets are `(x - last_x, last_y - y)`; screen y grows downwards.
	pub fn cursor_moved(&mut self, x: f64, y: f64) -> Option<(f32, f32)> {
		self.cursor = (x, y);
		let offset = self
			.last
			.map(|(last_x, last_y)| ((x - last_x) as f32, (last_y - y) as f32));
		self.last = Some((x, y));
		offset
	}

	/// Feed a relative device motion, tracked on an unbounded virtual cursor.
	pub fn motion(&mut self, dx: f64, dy: f64) -> Option<(f32, f32)> {
		let (x, y) = self.cursor;
		self.cursor_moved(x + dx, y + dy)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::HashSet;
	use winit::dpi::PhysicalPosition;

	#[derive(Default)]
	struct Keys {
		pressed: HashSet<VirtualKeyCode>,
		held: HashSet<VirtualKeyCode>,
	}

	impl KeyState for Keys {
		fn pressed(&self, key: VirtualKeyCode) -> bool {
			self.pressed.contains(&key)
		}

		fn held(&self, key: VirtualKeyCode) -> bool {
			self.held.contains(&key) || self.pressed.contains(&key)
		}
	}

	#[test]
	fn key_mapping() {
		let mut keys = Keys::default();
		keys.pressed.insert(VirtualKeyCode::Escape);
		keys.held.insert(VirtualKeyCode::W);
		keys.held.insert(VirtualKeyCode::D);
		keys.pressed.insert(VirtualKeyCode::Key2);
		assert_eq!(
			actions(&keys),
			vec![
				Action::Close,
				Action::SelectColour(2),
				Action::Move(Movement::Forward),
				Action::Move(Movement::Right),
			]
		);
	}

	#[test]
	fn wireframe_toggle_is_edge_triggered() {
		let mut keys = Keys::default();
		keys.pressed.insert(VirtualKeyCode::P);
		assert_eq!(actions(&keys), vec![Action::ToggleWireframe]);

		let mut keys = Keys::default();
		keys.held.insert(VirtualKeyCode::P);
		assert!(actions(&keys).is_empty());
	}

	#[test]
	fn first_position_is_only_a_baseline() {
		let mut look = MouseLook::new();
		assert_eq!(look.cursor_moved(400.0, 300.0), None);
		assert_eq!(look.cursor_moved(410.0, 300.0), Some((10.0, 0.0)));
		// Moving down the screen looks down
		assert_eq!(look.cursor_moved(410.0, 310.0), Some((0.0, -10.0)));

		look.reset();
		assert_eq!(look.cursor_moved(0.0, 0.0), None);
		assert_eq!(look.cursor_moved(5.0, -5.0), Some((5.0, 5.0)));
	}

	#[test]
	fn device_motion_accumulates() {
		let mut look = MouseLook::new();
		assert_eq!(look.motion(3.0, 4.0), None);
		assert_eq!(look.motion(10.0, 0.0), Some((10.0, 0.0)));
		assert_eq!(look.motion(-2.0, 6.0), Some((-2.0, -6.0)));
	}

	#[test]
	fn scroll_deltas_in_lines() {
		assert_eq!(scroll_lines(&MouseScrollDelta::LineDelta(0.0, 2.0)), 2.0);
		assert_eq!(scroll_lines(&MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, -40.0))), -2.0);
	}
}
