use freelook::app;
use freelook::scene::demos;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
	let _logger = app::init_logging()?;

	let scene = demos::textured_cube(app::assets_dir());
	app::run("textured_cube", scene)
}
