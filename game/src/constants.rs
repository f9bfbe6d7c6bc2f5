pub const WORLD_WIDTH: f32 = 800.0;
pub const WORLD_HEIGHT: f32 = 600.0;

/// Space above the brick grid kept free for the score line.
pub const HUD_HEIGHT: f32 = 40.0;

pub const BLOCK_COLUMNS: usize = 9;
pub const BLOCK_ROWS: usize = 5;
pub const BLOCK_GAP: f32 = 2.0;
pub const BLOCK_HITS_LIFE: u32 = 1;
pub const TOUGH_BLOCK_HITS_LIFE: u32 = 2;
pub const TOUGH_BLOCK_ROWS: [usize; 2] = [0, 2];

pub const PADDLE_WIDTH: f32 = 100.0;
pub const PADDLE_HEIGHT: f32 = 10.0;
pub const PADDLE_Y: f32 = 0.9 * WORLD_HEIGHT;
/// Top speed, in pixels per tick. Held keys approach it, pointer steering is capped by it.
pub const PADDLE_SPEED: f32 = 7.0;
/// Velocity gained per tick while a steering key is held.
pub const PADDLE_ACCELERATION: f32 = 1.4;
/// Share of the paddle's velocity lost to air resistance every tick.
pub const PADDLE_DRAG: f32 = 0.2;

/// How far the ball's x velocity is pushed when it hits the very edge of the paddle.
pub const PADDLE_DEFLECTION: f32 = 3.0;
/// Share of the paddle's own motion transferred to the ball on contact.
pub const PADDLE_ENGLISH: f32 = 0.2;

pub const BALL_RADIUS: f32 = 5.0;
pub const BALL_LAUNCH_SPEED: f32 = 5.0;
pub const BALL_MAX_LAUNCH_X_SPEED: f32 = 2.0;
pub const BALL_MAX_X_SPEED: f32 = 6.0;

pub const INITIAL_LIVES: u32 = 3;

pub const POWERUP_PROBABILITY: f64 = 0.4;
pub const PIERCING_PROBABILITY: f64 = 0.8;
pub const POWERUP_FALL_SPEED: f32 = 4.0;
pub const PIERCING_DURATION_TICKS: u32 = 180;
pub const PIERCING_MAX_BLOCKS: u32 = 1;

pub const GAME_LOOP_TIMESTEP_SECONDS: f32 = 1.0 / 60.0;
