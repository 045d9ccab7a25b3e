mod app;
mod draw;

use app::GuiApp;
use clap::{App as CliApp, Arg, ArgMatches};
use game::{prelude::*, Result};
use logger::*;

fn main() {
	init_logger();

	let settings = match init_settings(init_cli()) {
		Ok(settings) => settings,
		Err(e) => {
			error!("Invalid arguments: {}", e);
			std::process::exit(1);
		}
	};

	let app = match GuiApp::new(settings) {
		Ok(app) => app,
		Err(e) => {
			error!("Can't start the game: {}", e);
			std::process::exit(1);
		}
	};

	let native_options = eframe::NativeOptions {
		initial_window_size: Some(app.window_size()),
		resizable: false,
		..Default::default()
	};

	eframe::run_native(Box::new(app), native_options);
}

fn init_cli() -> ArgMatches<'static> {
	CliApp::new("Snakulator")
		.about("Snake that only grows on the right answer")
		.arg(
			Arg::with_name("variant")
				.short("v")
				.long("variant")
				.value_name("VARIANT")
				.takes_value(true)
				.possible_values(&["classic", "quiz"])
				.help(&format!("Game rules. Default is {}", Settings::VARIANT)),
		)
		.arg(
			Arg::with_name("grid_size")
				.short("g")
				.long("grid-size")
				.value_name("CELLS")
				.takes_value(true)
				.help(&format!(
					"Number of cells along each side of the grid. Default is {}",
					Settings::GRID_SIZE
				)),
		)
		.arg(
			Arg::with_name("cell_size")
				.short("c")
				.long("cell-size")
				.value_name("PIXELS")
				.takes_value(true)
				.help(&format!("Cell size on the screen. Default is {}", Settings::CELL_SIZE)),
		)
		.arg(
			Arg::with_name("step")
				.short("d")
				.long("step")
				.value_name("DURATION")
				.takes_value(true)
				.help(&format!(
					"Delay between two snake moves. Default is {}",
					humantime::format_duration(Settings::STEP)
				)),
		)
		.arg(
			Arg::with_name("seed")
				.short("s")
				.long("seed")
				.value_name("NUMBER")
				.takes_value(true)
				.help("Seed for fruits and questions. Random when not specified"),
		)
		.get_matches()
}

fn init_settings(matches: ArgMatches) -> Result<Settings> {
	let settings = Settings {
		variant: match matches.value_of("variant") {
			Some(val) => val.parse()?,
			None => Settings::VARIANT,
		},
		grid_size: match matches.value_of("grid_size") {
			Some(val) => val.parse()?,
			None => Settings::GRID_SIZE,
		},
		cell_size: match matches.value_of("cell_size") {
			Some(val) => val.parse()?,
			None => Settings::CELL_SIZE,
		},
		step: match matches.value_of("step") {
			Some(val) => val.parse::<humantime::Duration>()?.into(),
			None => Settings::STEP,
		},
		seed: matches.value_of("seed").map(str::parse::<u64>).transpose()?,
	};
	settings.validate()?;

	debug!("{:?}", settings);
	Ok(settings)
}

