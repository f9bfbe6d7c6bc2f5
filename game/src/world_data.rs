use cgmath::Vector2;
use log::debug;
use rand::Rng;

use crate::collision::Rect;
use crate::constants::{
    BALL_RADIUS, BLOCK_COLUMNS, BLOCK_GAP, BLOCK_HITS_LIFE, BLOCK_ROWS, HUD_HEIGHT,
    PADDLE_HEIGHT, PADDLE_SPEED, PADDLE_WIDTH, PADDLE_Y, PIERCING_PROBABILITY,
    POWERUP_PROBABILITY, TOUGH_BLOCK_HITS_LIFE, TOUGH_BLOCK_ROWS, WORLD_HEIGHT, WORLD_WIDTH,
};

pub type Rgb = [u8; 3];

/// Everything that lives for one round: created when a round starts, thrown away when it ends.
#[derive(Debug, Clone)]
pub struct WorldData {
    pub blocks: Vec<Block>,
    pub paddle: Paddle,
    pub ball: Ball,
    pub powerups: Vec<Powerup>,
    pub score: u32,
    pub lives: u32,
}

impl WorldData {
    pub fn alive_blocks(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter().filter(|b| b.alive)
    }

    pub fn blocks_left(&self) -> usize {
        self.alive_blocks().count()
    }

    /// Puts a fresh, motionless ball on top of the paddle.
    pub fn reset_ball(&mut self) {
        self.ball = Ball::resting_on(&self.paddle);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockId {
    pub column: usize,
    pub row: usize,
}

#[derive(Debug, Clone)]
pub struct Block {
    pub id: BlockId,
    /// Top-left corner.
    pub position: Vector2<f32>,
    pub size: Vector2<f32>,
    pub hits_life: u32,
    pub alive: bool,
    pub color: Rgb,
    pub drops_powerup: bool,
}

impl Block {
    pub fn rect(&self) -> Rect {
        Rect::new(self.position, self.size)
    }

    pub fn center(&self) -> Vector2<f32> {
        self.position + self.size / 2.0
    }

    /// Takes one hit. Returns true only on the hit that destroys the block;
    /// a destroyed block never comes back and ignores further hits.
    pub fn take_hit(&mut self) -> bool {
        if !self.alive {
            return false;
        }

        self.hits_life = self.hits_life.saturating_sub(1);

        if self.hits_life == 0 {
            self.alive = false;
            return true;
        }

        false
    }
}

#[derive(Debug, Clone)]
pub struct Paddle {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    /// Horizontal displacement applied during the last tick.
    pub velocity: f32,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            x: WORLD_WIDTH / 2.0 - PADDLE_WIDTH / 2.0,
            y: PADDLE_Y,
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            speed: PADDLE_SPEED,
            velocity: 0.0,
        }
    }
}

impl Paddle {
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn max_x(&self) -> f32 {
        WORLD_WIDTH - self.width
    }

    pub fn rect(&self) -> Rect {
        Rect::new(
            Vector2::new(self.x, self.y),
            Vector2::new(self.width, self.height),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BallModifier {
    /// Ball keeps going through destroyed blocks instead of bouncing.
    Piercing { ticks_left: u32, pierced: u32 },
}

#[derive(Debug, Clone)]
pub struct Ball {
    pub position: Vector2<f32>,
    /// Pixels per simulation tick.
    pub velocity: Vector2<f32>,
    pub radius: f32,
    pub modifier: Option<BallModifier>,
}

impl Ball {
    pub fn resting_on(paddle: &Paddle) -> Self {
        let mut ball = Ball {
            position: Vector2::new(0.0, 0.0),
            velocity: Vector2::new(0.0, 0.0),
            radius: BALL_RADIUS,
            modifier: None,
        };
        ball.follow(paddle);
        ball
    }

    /// Keeps a served ball glued to the middle of the paddle's top face.
    pub fn follow(&mut self, paddle: &Paddle) {
        self.position = Vector2::new(paddle.center_x(), paddle.y - self.radius);
    }

    pub fn is_piercing(&self) -> bool {
        matches!(self.modifier, Some(BallModifier::Piercing { .. }))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerupKind {
    ExtraLife,
    Piercing,
}

impl PowerupKind {
    pub fn roll<R: Rng>(rng: &mut R) -> Self {
        if rng.gen_bool(PIERCING_PROBABILITY) {
            PowerupKind::Piercing
        } else {
            PowerupKind::ExtraLife
        }
    }
}

#[derive(Debug, Clone)]
pub struct Powerup {
    pub kind: PowerupKind,
    pub position: Vector2<f32>,
    pub hitbox_radius: f32,
}

pub fn create_world_data<R: Rng>(rng: &mut R, lives: u32) -> WorldData {
    let cell_width = WORLD_WIDTH / BLOCK_COLUMNS as f32;
    let cell_height = (WORLD_HEIGHT / 3.0 - HUD_HEIGHT) / BLOCK_ROWS as f32;

    let mut blocks: Vec<Block> = Vec::with_capacity(BLOCK_COLUMNS * BLOCK_ROWS);

    for column in 0..BLOCK_COLUMNS {
        for row in 0..BLOCK_ROWS {
            let hits_life = if TOUGH_BLOCK_ROWS.contains(&row) {
                TOUGH_BLOCK_HITS_LIFE
            } else {
                BLOCK_HITS_LIFE
            };

            blocks.push(Block {
                id: BlockId { column, row },
                position: Vector2::new(
                    cell_width * column as f32 + BLOCK_GAP,
                    HUD_HEIGHT + cell_height * row as f32 + BLOCK_GAP,
                ),
                size: Vector2::new(cell_width - 2.0 * BLOCK_GAP, cell_height - 2.0 * BLOCK_GAP),
                hits_life,
                alive: true,
                color: random_bright_color(rng),
                drops_powerup: rng.gen_bool(POWERUP_PROBABILITY),
            });
        }
    }

    let paddle = Paddle::default();
    let ball = Ball::resting_on(&paddle);

    debug!(
        "Created world with {} blocks ({} carrying powerups)",
        blocks.len(),
        blocks.iter().filter(|b| b.drops_powerup).count()
    );

    WorldData {
        blocks,
        paddle,
        ball,
        powerups: Vec::new(),
        score: 0,
        lives,
    }
}

/// Picks a color that stands out against the near-black background.
pub fn random_bright_color<R: Rng>(rng: &mut R) -> Rgb {
    loop {
        let color: Rgb = [rng.gen(), rng.gen(), rng.gen()];
        if is_bright(color) {
            return color;
        }
    }
}

fn is_bright(color: Rgb) -> bool {
    color.iter().any(|&channel| channel >= 20)
}
