//! Game abstractions crate.
//!
//! [`Game`] owns everything a round needs and is driven from outside: the
//! front end feeds player [`Command`]s as they come and calls
//! [`Game::tick`] on a fixed timer, then draws [`Game::scene`].

pub mod aux;
pub mod error;
pub mod fruit;
pub mod grid;
pub mod quiz;
pub mod scene;
pub mod segment;
pub mod snake;

/// This is an alias for standart [`Result`](std::result::Result) type which
/// represents failure.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Common reexports in one place.
pub mod prelude {
	pub use crate::{
		aux::*, grid::Grid, scene::Scene, segment::*, Command, Control, Failure,
		Game, Settings, Tick, Variant,
	};
}

use aux::Direction;
use error::{GameError, ParseVariantError};
use fruit::Fruit;
use grid::Grid;
use log::{debug, info, trace};
use quiz::Question;
use rand::{rngs::StdRng, Rng, SeedableRng};
use scene::Scene;
use snake::Snake;
use std::{fmt, str::FromStr, time::Duration};

/// Game rules flavour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
	/// One fruit, the game ends on the first crash.
	Classic,

	/// Two numbered fruits, only the one holding the answer to the question
	/// feeds the snake. A crash only restarts the snake.
	Quiz,
}

/// What happens when the snake crashes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverPolicy {
	/// Put the snake back to its spawn and keep playing.
	Reset,

	/// Stop the game.
	Terminate,
}

impl Variant {
	/// Return policy applied when the snake crashes.
	pub fn policy(self) -> GameOverPolicy {
		match self {
			Self::Classic => GameOverPolicy::Terminate,
			Self::Quiz => GameOverPolicy::Reset,
		}
	}
}

impl fmt::Display for Variant {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Classic => write!(f, "classic"),
			Self::Quiz => write!(f, "quiz"),
		}
	}
}

impl FromStr for Variant {
	type Err = ParseVariantError;

	fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
		match s {
			"classic" => Ok(Self::Classic),
			"quiz" => Ok(Self::Quiz),
			_ => Err(ParseVariantError(s.to_string())),
		}
	}
}

/// Game settings. Passed once to [`Game`] and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
	/// Number of cells along each side of the square grid.
	pub grid_size: usize,

	/// Size of one cell on the screen in pixels.
	pub cell_size: u32,

	/// Interval between two ticks.
	pub step: Duration,

	/// Rules flavour.
	pub variant: Variant,

	/// Seed for fruit placement and questions. If it's none, use entropy.
	pub seed: Option<u64>,
}

impl Settings {
	/// Default grid size.
	pub const GRID_SIZE: usize = Grid::DEFAULT_SIZE;

	/// Default cell size in pixels.
	pub const CELL_SIZE: u32 = 40;

	/// Default interval between two ticks.
	pub const STEP: Duration = Duration::from_millis(150);

	/// Default rules flavour.
	pub const VARIANT: Variant = Variant::Quiz;

	/// Check that a game can be played with these settings.
	pub fn validate(&self) -> Result<()> {
		if self.cell_size == 0 {
			return Err(Box::new(GameError::ZeroCellSize));
		}
		if self.step.is_zero() {
			return Err(Box::new(GameError::ZeroStep));
		}
		let grid = Grid::new(self.grid_size);
		if let Some(cell) = Snake::SPAWN.iter().find(|cell| !grid.contains(**cell)) {
			return Err(Box::new(GameError::SpawnOutsideGrid(*cell, self.grid_size)));
		}
		Ok(())
	}
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			grid_size: Self::GRID_SIZE,
			cell_size: Self::CELL_SIZE,
			step: Self::STEP,
			variant: Self::VARIANT,
			seed: None,
		}
	}
}

/// Player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
	/// Turn the snake. Applied on the next tick.
	Turn(Direction),

	/// Stop or resume ticking.
	TogglePause,

	/// Leave the game.
	Quit,
}

/// What the front end should do after handling a [`Command`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
	Continue,
	Quit,
}

/// Why the snake crashed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
	/// Head left the grid.
	Wall,

	/// Head ran into the body.
	SelfCollision,
}

impl fmt::Display for Failure {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Wall => write!(f, "hit the wall"),
			Self::SelfCollision => write!(f, "bit itself"),
		}
	}
}

/// Fruit eaten during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Eaten {
	/// Value printed on the fruit.
	pub value: Option<i32>,

	/// Whether the snake grows from it.
	pub grows: bool,
}

/// Outcome of one [`Game::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
	/// Game is paused, nothing happened.
	Paused,

	/// Snake moved and is alive.
	Moved { eaten: Option<Eaten> },

	/// Snake crashed and was put back to its spawn.
	Reset { score: usize, cause: Failure },

	/// Snake crashed and the game is over.
	GameOver { score: usize, cause: Failure },
}

/// Game state.
#[derive(Debug, Clone)]
pub struct Game<R = StdRng> {
	settings: Settings,
	grid: Grid,
	snake: Snake,

	/// In the quiz variant the first fruit holds the correct answer.
	fruits: Vec<Fruit>,
	question: Option<Question>,
	paused: bool,

	/// Set once a crash ended the game.
	finished: Option<(usize, Failure)>,
	rng: R,
}

impl Game<StdRng> {
	/// Return a new [`Game`] seeded from [`Settings::seed`].
	pub fn new(settings: Settings) -> Result<Self> {
		let rng = match settings.seed {
			Some(seed) => StdRng::seed_from_u64(seed),
			None => StdRng::from_entropy(),
		};
		Self::with_rng(settings, rng)
	}
}

impl<R: Rng> Game<R> {
	/// Return a new [`Game`] taking all randomness from `rng`.
	pub fn with_rng(settings: Settings, mut rng: R) -> Result<Self> {
		settings.validate()?;
		let grid = Grid::new(settings.grid_size);

		let (question, fruits) = match settings.variant {
			Variant::Classic => (None, vec![Fruit::random(&grid, None, &mut rng)]),
			Variant::Quiz => {
				let question = Question::random(&mut rng);
				let answer = question.answer();
				let correct = Fruit::random(&grid, Some(answer), &mut rng);
				let wrong = quiz::wrong_answer(answer, &mut rng);
				let wrong = Fruit::random(&grid, Some(wrong), &mut rng);
				(Some(question), vec![correct, wrong])
			}
		};

		info!(
			"new {} game on {} grid{}",
			settings.variant,
			grid,
			question.map(|q| format!(", question {}", q)).unwrap_or_default()
		);

		Ok(Self {
			settings,
			grid,
			snake: Snake::default(),
			fruits,
			question,
			paused: false,
			finished: None,
			rng,
		})
	}

	/// Apply player input. Input is handled even when the game is paused.
	pub fn handle(&mut self, command: Command) -> Control {
		match command {
			Command::Turn(direction) => {
				self.snake.set_direction(direction);
			}
			Command::TogglePause => {
				self.paused = !self.paused;
				info!("game {}", if self.paused { "paused" } else { "resumed" });
			}
			Command::Quit => return Control::Quit,
		}
		Control::Continue
	}

	/// Advance the game by one step: move the snake, let it eat, then check
	/// whether it crashed.
	pub fn tick(&mut self) -> Tick {
		if let Some((score, cause)) = self.finished {
			return Tick::GameOver { score, cause };
		}
		if self.paused {
			return Tick::Paused;
		}

		self.snake.advance();
		let eaten = self.check_fruits();
		let tick = match self.failure() {
			Some(cause) => self.game_over(cause),
			None => Tick::Moved { eaten },
		};
		trace!("{:?}\n{}", tick, self.scene());
		tick
	}

	/// Relocate fruits the head reached and the ones left under the body.
	fn check_fruits(&mut self) -> Option<Eaten> {
		let head = self.snake.head();
		let mut eaten = None;

		for i in 0..self.fruits.len() {
			let fruit = self.fruits[i];
			if fruit.cell() == head {
				let grows = self.feeds(&fruit);
				if grows {
					self.snake.grow();
				}
				self.fruits[i].randomize(&self.grid, &mut self.rng);
				debug!(
					"fruit {:?} eaten at {}, moved to {}",
					fruit.value(),
					head,
					self.fruits[i].cell()
				);
				eaten = Some(Eaten {
					value: fruit.value(),
					grows,
				});
			}

			if self.snake.covers_without_head(self.fruits[i].cell()) {
				let under = self.fruits[i].cell();
				self.fruits[i].randomize(&self.grid, &mut self.rng);
				debug!(
					"fruit {:?} under the body at {}, moved to {}",
					fruit.value(),
					under,
					self.fruits[i].cell()
				);
			}
		}

		eaten
	}

	/// Return `true` if eating `fruit` lengthens the snake.
	fn feeds(&self, fruit: &Fruit) -> bool {
		match self.question {
			Some(question) => fruit.value() == Some(question.answer()),
			None => true,
		}
	}

	fn failure(&self) -> Option<Failure> {
		if !self.grid.contains(self.snake.head()) {
			Some(Failure::Wall)
		} else if self.snake.bumped() {
			Some(Failure::SelfCollision)
		} else {
			None
		}
	}

	fn game_over(&mut self, cause: Failure) -> Tick {
		let score = self.score();
		match self.settings.variant.policy() {
			GameOverPolicy::Reset => {
				info!("snake {} at {} with score {}, reset", cause, self.snake.head(), score);
				self.snake.reset();
				Tick::Reset { score, cause }
			}
			GameOverPolicy::Terminate => {
				info!("snake {} at {}, game over with score {}", cause, self.snake.head(), score);
				self.finished = Some((score, cause));
				Tick::GameOver { score, cause }
			}
		}
	}

	/// Return everything needed to draw the current frame.
	pub fn scene(&self) -> Scene {
		Scene {
			grid: self.grid,
			segments: self.snake.segments(),
			fruits: self.fruits.clone(),
			score: self.score(),
			question: self.question.map(|q| q.text()),
			paused: self.paused,
		}
	}

	/// Return number of cells the snake has grown since spawn.
	pub fn score(&self) -> usize {
		self.snake.len().saturating_sub(self.snake.initial_len())
	}

	/// Return the snake.
	pub fn snake(&self) -> &Snake {
		&self.snake
	}

	/// Return fruits. In the quiz variant the first one holds the answer.
	pub fn fruits(&self) -> &[Fruit] {
		&self.fruits
	}

	/// Return the question of the quiz variant.
	pub fn question(&self) -> Option<Question> {
		self.question
	}

	/// Return `true` if ticks are ignored.
	pub fn paused(&self) -> bool {
		self.paused
	}

	/// Return `true` once a crash ended the game.
	pub fn is_over(&self) -> bool {
		self.finished.is_some()
	}

	/// Return game grid.
	pub fn grid(&self) -> Grid {
		self.grid
	}

	/// Return game settings.
	pub fn settings(&self) -> &Settings {
		&self.settings
	}
}

#[cfg(test)]
pub mod tests {
	use super::*;
	use aux::Cell;
	use rand::rngs::mock::StepRng;

	/// Game whose fruits always relocate to (0, 0).
	fn game(variant: Variant, body: &[(i32, i32)], direction: Direction, fruits: Vec<Fruit>) -> Game<StepRng> {
		let mut snake = Snake::default();
		snake.body = body.iter().copied().map(Cell::from).collect();
		snake.direction = direction;
		Game {
			settings: Settings {
				variant,
				..Default::default()
			},
			grid: Grid::new(20),
			snake,
			fruits,
			question: match variant {
				Variant::Quiz => Some(Question::new(3, 4)),
				Variant::Classic => None,
			},
			paused: false,
			finished: None,
			rng: StepRng::new(0, 0),
		}
	}

	const BODY: &[(i32, i32)] = &[(5, 10), (4, 10), (3, 10)];

	fn far_fruits() -> Vec<Fruit> {
		vec![
			Fruit::at(Cell::new(15, 15), Some(7)),
			Fruit::at(Cell::new(16, 16), Some(9)),
		]
	}

	#[test]
	fn quiz_setup() -> crate::Result<()> {
		let game = Game::new(Settings {
			seed: Some(5),
			..Default::default()
		})?;
		let question = game.question().expect("quiz game has a question");
		let fruits = game.fruits();

		assert_eq!(fruits.len(), 2);
		assert_eq!(fruits[0].value(), Some(question.answer()));
		assert_ne!(fruits[1].value(), Some(question.answer()));
		assert_eq!(game.snake().body(), Snake::SPAWN);
		assert_eq!(game.snake().direction(), Direction::Neutral);
		assert_eq!(game.score(), 0);

		Ok(())
	}

	#[test]
	fn classic_setup() -> crate::Result<()> {
		let game = Game::new(Settings {
			variant: Variant::Classic,
			seed: Some(5),
			..Default::default()
		})?;

		assert_eq!(game.fruits().len(), 1);
		assert_eq!(game.fruits()[0].value(), None);
		assert!(game.question().is_none());
		assert!(game.scene().question.is_none());

		Ok(())
	}

	#[test]
	fn same_seed_same_game() -> crate::Result<()> {
		let settings = Settings {
			seed: Some(99),
			..Default::default()
		};
		let a = Game::new(settings.clone())?;
		let b = Game::new(settings)?;

		assert_eq!(a.fruits(), b.fruits());
		assert_eq!(a.question(), b.question());

		Ok(())
	}

	#[test]
	fn invalid_settings() {
		let small = Settings {
			grid_size: 10,
			..Default::default()
		};
		assert!(Game::new(small).is_err());

		let no_cells = Settings {
			cell_size: 0,
			..Default::default()
		};
		assert!(no_cells.validate().is_err());

		let no_step = Settings {
			step: Duration::ZERO,
			..Default::default()
		};
		assert!(no_step.validate().is_err());
		assert!(Settings::default().validate().is_ok());
	}

	#[test]
	fn idle_snake_survives() {
		let mut game = game(Variant::Classic, BODY, Direction::Neutral, far_fruits());
		for _ in 0..10 {
			assert_eq!(game.tick(), Tick::Moved { eaten: None });
		}
		assert_eq!(game.snake().body(), Snake::SPAWN);
	}

	#[test]
	fn eat_correct_fruit() {
		let mut game = game(
			Variant::Quiz,
			BODY,
			Direction::Right,
			vec![
				Fruit::at(Cell::new(6, 10), Some(7)),
				Fruit::at(Cell::new(16, 16), Some(9)),
			],
		);

		let tick = game.tick();
		assert_eq!(
			tick,
			Tick::Moved {
				eaten: Some(Eaten {
					value: Some(7),
					grows: true
				})
			}
		);
		assert_eq!(game.fruits()[0].cell(), Cell::new(0, 0));
		assert!(game.snake().growth_pending());
		assert_eq!(game.score(), 0);

		game.tick();
		assert_eq!(game.snake().len(), 4);
		assert_eq!(game.score(), 1);
		assert_eq!(game.scene().score, 1);
	}

	#[test]
	fn eat_wrong_fruit() {
		let mut game = game(
			Variant::Quiz,
			BODY,
			Direction::Right,
			vec![
				Fruit::at(Cell::new(15, 15), Some(7)),
				Fruit::at(Cell::new(6, 10), Some(9)),
			],
		);

		let tick = game.tick();
		assert_eq!(
			tick,
			Tick::Moved {
				eaten: Some(Eaten {
					value: Some(9),
					grows: false
				})
			}
		);
		assert_eq!(game.fruits()[1].cell(), Cell::new(0, 0));
		assert!(!game.snake().growth_pending());
	}

	#[test]
	fn classic_fruit_feeds() {
		let mut game = game(
			Variant::Classic,
			BODY,
			Direction::Right,
			vec![Fruit::at(Cell::new(6, 10), None)],
		);

		game.tick();
		assert!(game.snake().growth_pending());
	}

	#[test]
	fn stray_fruit_relocated() {
		let mut game = game(
			Variant::Quiz,
			BODY,
			Direction::Right,
			vec![
				Fruit::at(Cell::new(15, 15), Some(7)),
				Fruit::at(Cell::new(4, 10), Some(9)),
			],
		);

		assert_eq!(game.tick(), Tick::Moved { eaten: None });
		assert_eq!(game.fruits()[1].cell(), Cell::new(0, 0));
		assert_eq!(game.fruits()[0].cell(), Cell::new(15, 15));
		assert!(!game.snake().growth_pending());
	}

	#[test]
	fn quiz_wall_resets() {
		let mut game = game(
			Variant::Quiz,
			&[(19, 5), (18, 5), (17, 5), (16, 5)],
			Direction::Right,
			far_fruits(),
		);

		assert_eq!(
			game.tick(),
			Tick::Reset {
				score: 1,
				cause: Failure::Wall
			}
		);
		assert_eq!(game.snake().body(), Snake::SPAWN);
		assert_eq!(game.snake().direction(), Direction::Neutral);
		assert_eq!(game.score(), 0);
		assert!(!game.is_over());
	}

	#[test]
	fn classic_wall_ends_game() {
		let mut game = game(
			Variant::Classic,
			&[(5, 0), (5, 1), (5, 2)],
			Direction::Up,
			far_fruits(),
		);

		let over = Tick::GameOver {
			score: 0,
			cause: Failure::Wall,
		};
		assert_eq!(game.tick(), over);
		assert!(game.is_over());
		assert_eq!(game.snake().head(), Cell::new(5, -1));

		// Later ticks don't move anything.
		assert_eq!(game.tick(), over);
		assert_eq!(game.snake().head(), Cell::new(5, -1));
	}

	#[test]
	fn self_collision_fails() {
		let mut game = game(
			Variant::Quiz,
			&[(5, 5), (6, 5), (6, 6), (5, 6), (4, 6), (4, 5)],
			Direction::Down,
			far_fruits(),
		);

		assert_eq!(
			game.tick(),
			Tick::Reset {
				score: 3,
				cause: Failure::SelfCollision
			}
		);
		assert_eq!(game.snake().body(), Snake::SPAWN);
	}

	#[test]
	fn commands() {
		let mut game = game(Variant::Quiz, BODY, Direction::Right, far_fruits());

		assert_eq!(game.handle(Command::Turn(Direction::Left)), Control::Continue);
		assert_eq!(game.snake().direction(), Direction::Right);

		game.handle(Command::TogglePause);
		assert!(game.paused());
		assert_eq!(game.tick(), Tick::Paused);
		assert_eq!(game.snake().head(), Cell::new(5, 10));

		// Turning works while paused.
		game.handle(Command::Turn(Direction::Up));
		assert_eq!(game.snake().direction(), Direction::Up);

		game.handle(Command::TogglePause);
		game.tick();
		assert_eq!(game.snake().head(), Cell::new(5, 9));

		assert_eq!(game.handle(Command::Quit), Control::Quit);
	}

	#[test]
	fn question_survives_answers() {
		let mut game = game(
			Variant::Quiz,
			BODY,
			Direction::Right,
			vec![
				Fruit::at(Cell::new(6, 10), Some(7)),
				Fruit::at(Cell::new(16, 16), Some(9)),
			],
		);

		game.tick();
		game.fruits[0] = Fruit::at(Cell::new(8, 10), Some(7));
		game.tick();
		game.tick();
		game.tick();

		assert_eq!(game.score(), 2);
		assert_eq!(game.question(), Some(Question::new(3, 4)));
		assert_eq!(game.scene().question.as_deref(), Some("3 + 4 = ?"));
	}

	#[test]
	fn variant_from_str() {
		assert_eq!("quiz".parse::<Variant>(), Ok(Variant::Quiz));
		assert_eq!("classic".parse::<Variant>(), Ok(Variant::Classic));
		assert!("arcade".parse::<Variant>().is_err());
		assert_eq!(Variant::Quiz.policy(), GameOverPolicy::Reset);
		assert_eq!(Variant::Classic.policy(), GameOverPolicy::Terminate);
	}
}
