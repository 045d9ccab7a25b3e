use crate::draw;
use eframe::{egui, epi};
use game::{prelude::*, Result};
use logger::*;
use std::time::{Duration, Instant};

/// Width of the panel with score and question.
pub const PANEL_WIDTH: f32 = 220.0;

/// Keys and commands they send to the game.
const KEYMAP: [(egui::Key, Command); 10] = [
	(egui::Key::ArrowUp, Command::Turn(Direction::Up)),
	(egui::Key::ArrowDown, Command::Turn(Direction::Down)),
	(egui::Key::ArrowLeft, Command::Turn(Direction::Left)),
	(egui::Key::ArrowRight, Command::Turn(Direction::Right)),
	(egui::Key::W, Command::Turn(Direction::Up)),
	(egui::Key::S, Command::Turn(Direction::Down)),
	(egui::Key::A, Command::Turn(Direction::Left)),
	(egui::Key::D, Command::Turn(Direction::Right)),
	(egui::Key::Space, Command::TogglePause),
	(egui::Key::Escape, Command::Quit),
];

pub struct GuiApp {
	game: Game,

	/// Time not yet consumed by ticks.
	lag: Duration,

	/// When the previous frame was drawn.
	last_frame: Instant,

	/// Last thing that happened to the snake, shown in the panel.
	status: String,
}

impl GuiApp {
	/// Return a new [`GuiApp`] running a game with `settings`.
	pub fn new(settings: Settings) -> Result<Self> {
		Ok(Self {
			game: Game::new(settings)?,
			lag: Duration::ZERO,
			last_frame: Instant::now(),
			status: String::new(),
		})
	}

	/// Size of the window fitting the grid and the side panel.
	pub fn window_size(&self) -> egui::Vec2 {
		let settings = self.game.settings();
		let field = settings.grid_size as f32 * settings.cell_size as f32;
		egui::vec2(field + PANEL_WIDTH, field)
	}

	/// Feed pressed keys to the game. Return `true` if player wants to quit.
	fn handle_input(&mut self, ctx: &egui::CtxRef) -> bool {
		let input = ctx.input();
		for (key, command) in KEYMAP {
			if input.key_pressed(key) && self.game.handle(command) == Control::Quit {
				return true;
			}
		}
		false
	}

	/// Run as many ticks as the time since the previous frame holds. Return
	/// `true` if the game is over.
	fn run_ticks(&mut self) -> bool {
		let now = Instant::now();
		self.lag += now - self.last_frame;
		self.last_frame = now;

		let step = self.game.settings().step;
		while self.lag >= step {
			self.lag -= step;
			match self.game.tick() {
				Tick::Paused | Tick::Moved { eaten: None } => {}
				Tick::Moved { eaten: Some(eaten) } => {
					self.status = match (eaten.value, eaten.grows) {
						(Some(value), true) => format!("{} is right!", value),
						(Some(value), false) => format!("{} is wrong", value),
						(None, _) => String::from("Yum"),
					};
				}
				Tick::Reset { score, cause } => {
					self.status = format!("Snake {} with score {}", cause, score);
				}
				Tick::GameOver { score, cause } => {
					info!("Game over: snake {}, final score {}", cause, score);
					return true;
				}
			}
		}
		false
	}
}

impl epi::App for GuiApp {
	fn name(&self) -> &str {
		"Snakulator"
	}

	fn setup(
		&mut self,
		ctx: &egui::CtxRef,
		_frame: &mut epi::Frame<'_>,
		_storage: Option<&dyn epi::Storage>,
	) {
		ctx.set_visuals(egui::Visuals::dark());
		self.last_frame = Instant::now();
	}

	fn update(&mut self, ctx: &egui::CtxRef, frame: &mut epi::Frame<'_>) {
		if self.handle_input(ctx) || self.run_ticks() {
			frame.quit();
			return;
		}

		let scene = self.game.scene();
		let cell_size = self.game.settings().cell_size as f32;

		egui::SidePanel::new(egui::panel::Side::Right, "score_panel")
			.resizable(false)
			.min_width(PANEL_WIDTH)
			.show(ctx, |ui| {
				ui.heading(format!("Score: {}", scene.score));
				if let Some(question) = &scene.question {
					ui.separator();
					ui.heading(question);
				}
				ui.separator();
				ui.label(&self.status);
				if scene.paused {
					ui.label("Paused");
				}
				ui.separator();
				ui.label("Arrows or WASD to turn");
				ui.label("Space to pause, Esc to quit");
			});

		egui::CentralPanel::default()
			.frame(egui::Frame::none().fill(draw::color32(Color::BACKGROUND)))
			.show(ctx, |ui| {
				let origin = ui.max_rect().min;
				draw::paint(ui.painter(), &scene, origin, cell_size);
			});

		ctx.request_repaint();
	}

	fn on_exit(&mut self) {
		info!("Leaving with score {}", self.game.score());
	}
}
