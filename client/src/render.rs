use game::constants::{HUD_HEIGHT, WORLD_HEIGHT, WORLD_WIDTH};
use game::world_data::{PowerupKind, Rgb, WorldData};
use game::{Game, GamePhase};
use raylib::color::Color;
use raylib::drawing::RaylibDraw;
use raylib::text::measure_text;

const BACKGROUND: Color = Color::new(10, 10, 10, 255);
const FOREGROUND: Color = Color::new(255, 255, 255, 255);
const PADDLE_COLOR: Color = Color::new(250, 223, 161, 255);
const BALL_COLOR: Color = Color::new(255, 255, 255, 255);
const PIERCING_BALL_COLOR: Color = Color::new(201, 104, 104, 255);
const EXTRA_LIFE_COLOR: Color = Color::new(106, 156, 137, 255);
const PIERCING_COLOR: Color = Color::new(201, 104, 104, 255);

const TITLE_SIZE: f32 = 50.0;
const TEXT_SIZE: f32 = 25.0;
const HUD_TEXT_SIZE: f32 = 20.0;

/// Draws the logical 800x600 world scaled onto the window.
pub struct Renderer {
    scale_x: f32,
    scale_y: f32,
}

impl Renderer {
    pub fn new(window_width: u32, window_height: u32) -> Self {
        Renderer {
            scale_x: window_width as f32 / WORLD_WIDTH,
            scale_y: window_height as f32 / WORLD_HEIGHT,
        }
    }

    pub fn draw<D: RaylibDraw>(&self, draw_handle: &mut D, game: &Game) {
        draw_handle.clear_background(BACKGROUND);

        let phase = game.phase();
        if phase.shows_world() {
            self.draw_world(draw_handle, game.world());
        }

        self.draw_screen_text(draw_handle, phase);
    }

    fn draw_world<D: RaylibDraw>(&self, draw_handle: &mut D, world: &WorldData) {
        for block in world.alive_blocks() {
            let (x, y) = self.to_screen(block.position.x, block.position.y);
            let width = self.scale_len_x(block.size.x);
            let height = self.scale_len_y(block.size.y);

            draw_handle.draw_rectangle(x, y, width, height, rgb(block.color));

            // Blocks that still need more than one hit get a frame.
            if block.hits_life > 1 {
                draw_handle.draw_rectangle_lines(x, y, width, height, FOREGROUND);
            }
        }

        let paddle = &world.paddle;
        let (x, y) = self.to_screen(paddle.x, paddle.y);
        draw_handle.draw_rectangle(
            x,
            y,
            self.scale_len_x(paddle.width),
            self.scale_len_y(paddle.height),
            PADDLE_COLOR,
        );

        for powerup in &world.powerups {
            let (x, y) = self.to_screen(powerup.position.x, powerup.position.y);
            let (color, label) = match powerup.kind {
                PowerupKind::ExtraLife => (EXTRA_LIFE_COLOR, "L"),
                PowerupKind::Piercing => (PIERCING_COLOR, "P"),
            };
            let radius = powerup.hitbox_radius * self.scale_y;

            draw_handle.draw_circle(x, y, radius, color);
            self.draw_centered(draw_handle, label, x, y - radius as i32 / 2, radius, BACKGROUND);
        }

        let ball = &world.ball;
        let (x, y) = self.to_screen(ball.position.x, ball.position.y);
        let ball_color = if ball.is_piercing() {
            PIERCING_BALL_COLOR
        } else {
            BALL_COLOR
        };
        draw_handle.draw_circle(x, y, ball.radius * self.scale_y, ball_color);

        let hud_size = (HUD_TEXT_SIZE * self.scale_y) as i32;
        let hud_y = ((HUD_HEIGHT - HUD_TEXT_SIZE) / 2.0 * self.scale_y) as i32;
        draw_handle.draw_text(
            &format!("Score: {}", world.score),
            (10.0 * self.scale_x) as i32,
            hud_y,
            hud_size,
            FOREGROUND,
        );

        let lives = format!("Lives: {}", world.lives);
        let lives_x = ((WORLD_WIDTH - 10.0) * self.scale_x) as i32 - measure_text(&lives, hud_size);
        draw_handle.draw_text(&lives, lives_x, hud_y, hud_size, FOREGROUND);
    }

    fn draw_screen_text<D: RaylibDraw>(&self, draw_handle: &mut D, phase: GamePhase) {
        for (text, size, height_fraction) in screen_content(phase) {
            let (x, y) = self.to_screen(WORLD_WIDTH / 2.0, height_fraction * WORLD_HEIGHT);
            self.draw_centered(draw_handle, text, x, y, *size * self.scale_y, FOREGROUND);
        }
    }

    fn draw_centered<D: RaylibDraw>(
        &self,
        draw_handle: &mut D,
        text: &str,
        center_x: i32,
        y: i32,
        size: f32,
        color: Color,
    ) {
        let size = size as i32;
        let width = measure_text(text, size);
        draw_handle.draw_text(text, center_x - width / 2, y, size, color);
    }

    fn to_screen(&self, x: f32, y: f32) -> (i32, i32) {
        ((x * self.scale_x) as i32, (y * self.scale_y) as i32)
    }

    fn scale_len_x(&self, length: f32) -> i32 {
        (length * self.scale_x).round() as i32
    }

    fn scale_len_y(&self, length: f32) -> i32 {
        (length * self.scale_y).round() as i32
    }
}

fn rgb(color: Rgb) -> Color {
    Color::new(color[0], color[1], color[2], 255)
}

/// Lines of text for each screen: text, font size and vertical position as a
/// fraction of the world height.
fn screen_content(phase: GamePhase) -> &'static [(&'static str, f32, f32)] {
    match phase {
        GamePhase::Menu => &[
            ("Welcome to Breakout!", TITLE_SIZE, 0.3),
            ("Press Enter to play", TEXT_SIZE, 0.5),
            ("Press I for instructions", TEXT_SIZE, 0.6),
            ("Press Q to quit", TEXT_SIZE, 0.7),
        ],
        GamePhase::Instructions => &[
            ("How to play", TITLE_SIZE, 0.15),
            ("Move the paddle with A/D, the arrows or the mouse", TEXT_SIZE, 0.35),
            ("Press Space to launch the ball", TEXT_SIZE, 0.43),
            ("Press P to pause", TEXT_SIZE, 0.51),
            ("Break every block to win", TEXT_SIZE, 0.59),
            ("Catch capsules: L gives a life, P a piercing ball", TEXT_SIZE, 0.67),
            ("Press M to return to the menu", TEXT_SIZE, 0.85),
        ],
        GamePhase::Serve => &[("Press Space to launch", TEXT_SIZE, 0.6)],
        GamePhase::Paused => &[
            ("PAUSED", TITLE_SIZE, 0.5),
            ("Press P to continue", TEXT_SIZE, 0.75),
        ],
        GamePhase::Won => &[
            ("YOU WIN!", TITLE_SIZE, 0.5),
            ("Press R to play again or Q to quit", TEXT_SIZE, 0.75),
        ],
        GamePhase::Lost => &[
            ("GAME OVER", TITLE_SIZE, 0.5),
            ("Press R to play again or Q to quit", TEXT_SIZE, 0.75),
        ],
        GamePhase::Playing | GamePhase::Quit => &[],
    }
}
