use cgmath::Vector2;
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::collision::{step_ball, step_powerups, BallOutcome};
use crate::constants::{BALL_LAUNCH_SPEED, BALL_MAX_LAUNCH_X_SPEED, INITIAL_LIVES};
use crate::events::GameEvent;
use crate::input::{steer_paddle, FrameInput};
use crate::world_data::{create_world_data, WorldData};

/// Which screen the game is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Menu,
    Instructions,
    /// Ball sits on the paddle waiting to be launched.
    Serve,
    Playing,
    Paused,
    Won,
    Lost,
    Quit,
}

impl GamePhase {
    /// Phases in which a round exists and should be drawn.
    pub fn shows_world(self) -> bool {
        matches!(
            self,
            GamePhase::Serve
                | GamePhase::Playing
                | GamePhase::Paused
                | GamePhase::Won
                | GamePhase::Lost
        )
    }
}

pub struct Game {
    phase: GamePhase,
    world: WorldData,
    rng: StdRng,
    starting_lives: u32,
}

impl Game {
    pub fn new(seed: Option<u64>, starting_lives: u32) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let world = create_world_data(&mut rng, starting_lives);

        Game {
            phase: GamePhase::Menu,
            world,
            rng,
            starting_lives,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn world(&self) -> &WorldData {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut WorldData {
        &mut self.world
    }

    pub fn is_finished(&self) -> bool {
        self.phase == GamePhase::Quit
    }

    /// Runs one simulation tick: phase transitions first, then paddle, ball
    /// and powerups when a round is in progress.
    pub fn update(&mut self, input: &FrameInput) -> Vec<GameEvent> {
        let mut events = Vec::new();

        if let Some(next) = self.next_phase(input) {
            self.transition(next, &mut events);
        }

        match self.phase {
            GamePhase::Serve => {
                steer_paddle(&mut self.world.paddle, input);
                self.world.ball.follow(&self.world.paddle);
                step_powerups(&mut self.world, &mut events);
            }
            GamePhase::Playing => self.step_round(input, &mut events),
            _ => {}
        }

        events
    }

    fn step_round(&mut self, input: &FrameInput, events: &mut Vec<GameEvent>) {
        steer_paddle(&mut self.world.paddle, input);

        let outcome = step_ball(&mut self.world, &mut self.rng, events);
        step_powerups(&mut self.world, events);

        if self.world.blocks_left() == 0 {
            self.transition(GamePhase::Won, events);
        } else if outcome == BallOutcome::Fell {
            if self.world.lives == 0 {
                self.transition(GamePhase::Lost, events);
            } else {
                self.world.reset_ball();
                self.transition(GamePhase::Serve, events);
            }
        }
    }

    fn next_phase(&self, input: &FrameInput) -> Option<GamePhase> {
        match self.phase {
            GamePhase::Menu if input.confirm => Some(GamePhase::Serve),
            GamePhase::Menu if input.instructions => Some(GamePhase::Instructions),
            GamePhase::Menu if input.quit => Some(GamePhase::Quit),
            GamePhase::Instructions if input.back => Some(GamePhase::Menu),
            GamePhase::Serve if input.launch => Some(GamePhase::Playing),
            GamePhase::Playing if input.pause => Some(GamePhase::Paused),
            GamePhase::Paused if input.pause => Some(GamePhase::Playing),
            GamePhase::Won | GamePhase::Lost if input.confirm => Some(GamePhase::Serve),
            GamePhase::Won | GamePhase::Lost if input.quit => Some(GamePhase::Quit),
            _ => None,
        }
    }

    fn transition(&mut self, next: GamePhase, events: &mut Vec<GameEvent>) {
        let previous = self.phase;

        match (previous, next) {
            (GamePhase::Menu | GamePhase::Won | GamePhase::Lost, GamePhase::Serve) => {
                self.world = create_world_data(&mut self.rng, self.starting_lives);
                debug!("New round with {} lives", self.starting_lives);
            }
            (GamePhase::Serve, GamePhase::Playing) => {
                self.launch_ball();
                events.push(GameEvent::BallLaunched);
            }
            _ => {}
        }

        self.phase = next;
        debug!("Phase {:?} -> {:?}", previous, next);
        events.push(GameEvent::PhaseChanged {
            from: previous,
            to: next,
        });
    }

    fn launch_ball(&mut self) {
        let x_speed = self
            .rng
            .gen_range(-BALL_MAX_LAUNCH_X_SPEED..=BALL_MAX_LAUNCH_X_SPEED);
        self.world.ball.velocity = Vector2::new(x_speed, -BALL_LAUNCH_SPEED);
    }

    /// Closing the window ends the game from any screen.
    pub fn quit(&mut self) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.phase != GamePhase::Quit {
            self.transition(GamePhase::Quit, &mut events);
        }
        events
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new(None, INITIAL_LIVES)
    }
}
