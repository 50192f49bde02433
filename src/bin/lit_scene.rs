use freelook::app;
use freelook::scene::demos;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
	let _logger = app::init_logging()?;

	// Space hides the earth and moon quads
	let scene = demos::lit_scene(app::assets_dir());
	app::run("lit_scene", scene)
}
