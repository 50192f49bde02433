use std::time::Instant;

/// Seconds between FPS reports.
pub const FPS_INTERVAL: f64 = 0.25;

/// Wall-clock seconds since start, and the delta between frames.
pub struct FrameClock {
	start: Instant,
	last: f64,
}

impl Default for FrameClock {
	fn default() -> Self {
		Self::new()
	}
}

impl FrameClock {
	pub fn new() -> Self {
		Self {
			start: Instant::now(),
			last: 0.0,
		}
	}

	pub fn now(&self) -> f64 {
		self.start.elapsed().as_secs_f64()
	}

	/// Advance to the current time, returns `(time, delta_time)`.
	pub fn tick(&mut self) -> (f64, f32) {
		let now = self.now();
		(now, self.tick_at(now))
	}

	pub fn tick_at(&mut self, now: f64) -> f32 {
		let dt = (now - self.last).max(0.0);
		self.last = now;
		dt as f32
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FpsReading {
	pub fps: f64,
	pub frame_ms: f64,
}

impl FpsReading {
	pub fn title(&self, name: &str) -> String {
		format!("{} FPS: {:.3} Frame Time: {:.3}(ms)", name, self.fps, self.frame_ms)
	}
}

/// Averages frame rate over short windows.
pub struct FpsCounter {
	interval: f64,
	previous: f64,
	frames: u32,
}

impl Default for FpsCounter {
	fn default() -> Self {
		Self::new(FPS_INTERVAL)
	}
}

impl FpsCounter {
	pub fn new(interval: f64) -> Self {
		Self {
			interval,
			previous: 0.0,
			frames: 0,
		}
	}

	/// Count a frame finished at `now` seconds. Yields a reading once more than
	/// `interval` has passed since the last one.
	pub fn frame_at(&mut self, now: f64) -> Option<FpsReading> {
		let elapsed = now - self.previous;
		if elapsed > self.interval {
			self.previous = now;
			let fps = self.frames as f64 / elapsed;
			// This frame opens the next window
			self.frames = 1;
			return Some(FpsReading {
				fps,
				frame_ms: if fps > 0.0 { 1000.0 / fps } else { 0.0 },
			});
		}

		self.frames += 1;
		None
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn assert_close(a: f64, b: f64) {
		assert!((a - b).abs() < 1e-9, "{} != {}", a, b);
	}

	#[test]
	fn delta_time_between_ticks() {
		let mut clock = FrameClock::new();
		assert_eq!(clock.tick_at(0.5), 0.5);
		assert_eq!(clock.tick_at(0.75), 0.25);
		// Time never runs backwards
		assert_eq!(clock.tick_at(0.5), 0.0);
	}

	#[test]
	fn fps_reported_after_interval() {
		let mut fps = FpsCounter::default();
		for i in 0..10 {
			assert_eq!(fps.frame_at(i as f64 * 0.025), None);
		}
		let reading = fps.frame_at(0.375).unwrap();
		assert_close(reading.fps, 10.0 / 0.375);
		assert_close(reading.frame_ms, 37.5);

		// Exactly the interval is not enough
		assert_eq!(fps.frame_at(0.625), None);
		let reading = fps.frame_at(0.75).unwrap();
		assert_close(reading.fps, 2.0 / 0.375);
	}

	#[test]
	fn title_format() {
		let reading = FpsReading {
			fps: 60.0,
			frame_ms: 1000.0 / 60.0,
		};
		assert_eq!(reading.title("lit_scene"), "lit_scene FPS: 60.000 Frame Time: 16.667(ms)");
	}
}
