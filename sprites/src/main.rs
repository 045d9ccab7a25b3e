use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use logger::*;
use sprites::{
	data::DATA_FILE,
	extract::{OUTPUT_DIR, SHEET_PATH},
	prelude::*,
	rect::GRID_SIZE,
};
use std::path::Path;

fn main() {
	init_logger();
	let matches = init_cli();

	if let Err(e) = run(&matches) {
		error!("{}", e);
		std::process::exit(1);
	}
}

fn init_cli() -> ArgMatches<'static> {
	App::new("Snakulator sprite extractor")
		.about("Records named rectangles of a sprite sheet and cuts them into separate images")
		.setting(AppSettings::SubcommandRequiredElseHelp)
		.arg(
			Arg::with_name("data")
				.short("f")
				.long("data")
				.value_name("FILE")
				.takes_value(true)
				.help(&format!("Sprite data file. Default is {}", DATA_FILE)),
		)
		.subcommand(
			SubCommand::with_name("add")
				.about("Record a sprite spanned by two corners")
				.arg(
					Arg::with_name("from")
						.long("from")
						.value_name("X,Y")
						.takes_value(true)
						.required(true)
						.help("First corner in sheet pixels"),
				)
				.arg(
					Arg::with_name("to")
						.long("to")
						.value_name("X,Y")
						.takes_value(true)
						.required(true)
						.help("Opposite corner in sheet pixels"),
				)
				.arg(
					Arg::with_name("name")
						.short("n")
						.long("name")
						.takes_value(true)
						.help("Sprite name. Default is sprite_NNN"),
				)
				.arg(
					Arg::with_name("grid")
						.short("g")
						.long("grid")
						.value_name("PIXELS")
						.takes_value(true)
						.help(&format!("Snapping grid size. Default is {}", GRID_SIZE)),
				)
				.arg(
					Arg::with_name("no_snap")
						.long("no-snap")
						.help("Don't snap corners to the grid"),
				),
		)
		.subcommand(
			SubCommand::with_name("remove")
				.about("Forget a sprite")
				.arg(Arg::with_name("name").help("Sprite name. Default is the last added one")),
		)
		.subcommand(SubCommand::with_name("clear").about("Forget all sprites"))
		.subcommand(SubCommand::with_name("list").about("Print recorded sprites"))
		.subcommand(
			SubCommand::with_name("extract")
				.about("Write every recorded sprite into its own png file")
				.arg(
					Arg::with_name("sheet")
						.short("s")
						.long("sheet")
						.value_name("FILE")
						.takes_value(true)
						.help(&format!("Sprite sheet image. Default is {}", SHEET_PATH)),
				)
				.arg(
					Arg::with_name("out")
						.short("o")
						.long("out")
						.value_name("DIR")
						.takes_value(true)
						.help(&format!("Output directory. Default is {}", OUTPUT_DIR)),
				),
		)
		.get_matches()
}

fn run(matches: &ArgMatches) -> sprites::Result<()> {
	let data_path = Path::new(matches.value_of("data").unwrap_or(DATA_FILE));
	let mut data = SpriteSheetData::load(data_path)?;

	match matches.subcommand() {
		("add", Some(matches)) => {
			let grid = match matches.is_present("no_snap") {
				true => 0,
				false => matches
					.value_of("grid")
					.map(str::parse::<u32>)
					.transpose()?
					.unwrap_or(GRID_SIZE),
			};
			let from = matches.value_of("from").unwrap_or_default().parse::<Point>()?;
			let to = matches.value_of("to").unwrap_or_default().parse::<Point>()?;
			let name = match matches.value_of("name") {
				Some(name) => name.to_string(),
				None => data.next_name(),
			};

			let rect = SpriteRect::from_corners(name, from.snapped(grid), to.snapped(grid));
			if rect.is_empty() {
				warn!("sprite {} covers no pixels and won't be extracted", rect);
			}
			info!("added {}", rect);
			data.push(rect)?;
			data.save(data_path)?;
		}
		("remove", Some(matches)) => {
			let removed = match matches.value_of("name") {
				Some(name) => Some(data.remove(name)?),
				None => data.pop(),
			};
			match removed {
				Some(rect) => info!("removed {}", rect),
				None => warn!("no sprites to remove"),
			}
			data.save(data_path)?;
		}
		("clear", Some(_)) => {
			info!("cleared {} sprites", data.len());
			data.clear();
			data.save(data_path)?;
		}
		("list", Some(_)) => {
			for rect in data.iter() {
				println!("{}", rect);
			}
		}
		("extract", Some(matches)) => {
			let sheet = load_sheet(matches.value_of("sheet").unwrap_or(SHEET_PATH))?;
			let out_dir = Path::new(matches.value_of("out").unwrap_or(OUTPUT_DIR));
			let written = extract_all(&sheet, &data, out_dir)?;
			info!("extracted {} sprites to {}", written, out_dir.display());
		}
		_ => unreachable!("clap requires a subcommand"),
	}

	Ok(())
}
