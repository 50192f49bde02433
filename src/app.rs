//! Window, event loop and per-frame application state shared by the demo binaries.

use crate::input::{actions, scroll_lines, Action, MouseLook};
use crate::scene::Scene;
use crate::timing::{FpsCounter, FrameClock};
use crate::{Canvas, Color, FreeCamera, PolygonMode};
use flexi_logger::{colored_default_format, default_format, Duplicate, FileSpec, Logger, LoggerHandle};
use nalgebra as na;
use pixels::{Pixels, SurfaceTexture};
use std::error::Error;
use std::path::Path;
use winit::dpi::LogicalSize;
use winit::event::{DeviceEvent, Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::{CursorGrabMode, Window, WindowBuilder};
use winit_input_helper::WinitInputHelper;

pub const WIDTH: u32 = 800;
pub const HEIGHT: u32 = 600;
pub const ASSETS_DIR: &str = "assets";

/// Start file logging under `logs/`, overridable with `RUST_LOG`. Keep the handle alive.
pub fn init_logging() -> Result<LoggerHandle, Box<dyn Error>> {
	let handle = Logger::try_with_env_or_str("warn")?
		.log_to_file(
			FileSpec::default()
				.directory("logs")
				.basename("dev")
				.suppress_timestamp(),
		)
		.format_for_files(default_format)
		.format_for_stderr(colored_default_format)
		.duplicate_to_stderr(Duplicate::Warn)
		.set_palette("196;208;12;14;8".into())
		.start()?;
	Ok(handle)
}

pub fn assets_dir() -> &'static Path {
	Path::new(ASSETS_DIR)
}

pub struct AppState {
	pub camera: FreeCamera,
	pub polygon_mode: PolygonMode,
	/// Set by keys 1/2/3, nothing reads it yet
	pub selected_colour: u8,
	pub quads_hidden: bool,
	pub should_close: bool,
	pub focused: bool,
	pub mouse: MouseLook,
}

impl Default for AppState {
	fn default() -> Self {
		Self::new()
	}
}

impl AppState {
	pub fn new() -> Self {
		Self {
			camera: FreeCamera::new(na::Point3::new(0.0, 0.0, 3.0)),
			polygon_mode: PolygonMode::Fill,
			selected_colour: 0,
			quads_hidden: false,
			should_close: false,
			focused: true,
			mouse: MouseLook::new(),
		}
	}

	pub fn apply(&mut self, action: Action, delta_time: f32) {
		match action {
			Action::Close => self.should_close = true,
			Action::ToggleWireframe => {
				self.polygon_mode = self.polygon_mode.toggled();
				log::debug!("Polygon mode: {:?}", self.polygon_mode);
			}
			Action::SelectColour(colour) => self.selected_colour = colour,
			Action::Move(direction) => self.camera.process_keyboard(direction, delta_time),
			Action::HideQuads => {
				if !self.quads_hidden {
					log::debug!("Hiding quads");
				}
				self.quads_hidden = true;
			}
		}
	}

	/// Apply a relative pointer motion, ignored while the window is unfocused.
	pub fn look(&mut self, dx: f64, dy: f64) {
		if !self.focused {
			return;
		}
		if let Some((x_offset, y_offset)) = self.mouse.motion(dx, dy) {
			self.camera.process_mouse_movement(x_offset, y_offset, true);
		}
	}

	pub fn set_focused(&mut self, focused: bool) {
		self.focused = focused;
		self.mouse.reset();
	}
}

fn capture_cursor(window: &Window) {
	let grabbed = window
		.set_cursor_grab(CursorGrabMode::Locked)
		.or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined));
	if let Err(err) = grabbed {
		log::warn!("Unable to capture cursor: {}", err);
	}
	window.set_cursor_visible(false);
}

/// Open the window and run `scene` until Escape or close. Only returns on setup failure.
pub fn run(name: &'static str, mut scene: Scene) -> Result<(), Box<dyn Error>> {
	let event_loop = EventLoop::new();
	let mut input = WinitInputHelper::new();
	let window = {
		let size = LogicalSize::new(WIDTH as f64, HEIGHT as f64);
		WindowBuilder::new()
			.with_title(name)
			.with_inner_size(size)
			.build(&event_loop)
			.map_err(|err| {
				log::error!("Failed to create window: {}", err);
				err
			})?
	};
	capture_cursor(&window);

	let mut pixels = {
		let size = window.inner_size();
		let surface_texture = SurfaceTexture::new(size.width, size.height, &window);
		Pixels::new(WIDTH, HEIGHT, surface_texture).map_err(|err| {
			log::error!("Failed to create surface: {}", err);
			err
		})?
	};

	let mut canvas: Canvas<Color> = Canvas::new(WIDTH, HEIGHT);
	let mut state = AppState::new();
	let mut clock = FrameClock::new();
	let mut fps = FpsCounter::default();
	let mut time = 0.0;
	log::info!("Starting {}", name);

	event_loop.run(move |event, _, control_flow| {
		*control_flow = ControlFlow::Poll;

		match &event {
			Event::RedrawRequested(_) => {
				canvas.polygon_mode = state.polygon_mode;
				scene.draw(&mut canvas, &state.camera, time as f32, state.quads_hidden);
				canvas.copy_to_rgba(pixels.frame_mut());
				if let Err(err) = pixels.render() {
					log::error!("Render failed: {}", err);
					*control_flow = ControlFlow::Exit;
					return;
				}
			}
			Event::DeviceEvent {
				event: DeviceEvent::MouseMotion { delta },
				..
			} => state.look(delta.0, delta.1),
			Event::WindowEvent { event, .. } => match event {
				WindowEvent::CloseRequested => {
					*control_flow = ControlFlow::Exit;
					return;
				}
				WindowEvent::Focused(focused) => {
					state.set_focused(*focused);
					if *focused {
						capture_cursor(&window);
					}
				}
				WindowEvent::MouseWheel { delta, .. } => state.camera.process_mouse_scroll(scroll_lines(delta)),
				WindowEvent::Resized(size) if size.width > 0 && size.height > 0 => {
					if let Err(err) = pixels.resize_surface(size.width, size.height) {
						log::error!("Resize failed: {}", err);
						*control_flow = ControlFlow::Exit;
						return;
					}
				}
				_ => {}
			},
			_ => {}
		}

		// Once all events for this frame are in
		if input.update(&event) {
			let (now, delta_time) = clock.tick();
			time = now;

			for action in actions(&input) {
				state.apply(action, delta_time);
			}
			if state.should_close {
				*control_flow = ControlFlow::Exit;
				return;
			}

			if let Some(reading) = fps.frame_at(now) {
				window.set_title(&reading.title(name));
			}
			window.request_redraw();
		}
	});
}
