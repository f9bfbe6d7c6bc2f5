use cgmath::Vector2;
use log::debug;
use rand::Rng;

use crate::constants::{
    BALL_MAX_X_SPEED, PADDLE_DEFLECTION, PADDLE_ENGLISH, PIERCING_DURATION_TICKS,
    PIERCING_MAX_BLOCKS, POWERUP_FALL_SPEED, WORLD_HEIGHT, WORLD_WIDTH,
};
use crate::events::GameEvent;
use crate::world_data::{Ball, BallModifier, Paddle, Powerup, PowerupKind, WorldData};

/// Axis-aligned box, anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub position: Vector2<f32>,
    pub size: Vector2<f32>,
}

impl Rect {
    pub fn new(position: Vector2<f32>, size: Vector2<f32>) -> Self {
        Rect { position, size }
    }

    pub fn left(&self) -> f32 {
        self.position.x
    }

    pub fn right(&self) -> f32 {
        self.position.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.position.y
    }

    pub fn bottom(&self) -> f32 {
        self.position.y + self.size.y
    }

    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Grows the box by `margin` on every side.
    pub fn inflate(&self, margin: f32) -> Rect {
        Rect::new(
            self.position - Vector2::new(margin, margin),
            self.size + Vector2::new(margin * 2.0, margin * 2.0),
        )
    }

    pub fn contains(&self, point: Vector2<f32>) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }
}

fn ball_box_at(center: Vector2<f32>, radius: f32) -> Rect {
    Rect::new(
        center - Vector2::new(radius, radius),
        Vector2::new(radius * 2.0, radius * 2.0),
    )
}

pub fn ball_bounding_box(ball: &Ball) -> Rect {
    ball_box_at(ball.position, ball.radius)
}

pub fn is_ball_collided_with_object(ball: &Ball, object: &Rect) -> bool {
    ball_bounding_box(ball).overlaps(object)
}

/// Side of a box the ball came in through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    Top,
    Bottom,
    Left,
    Right,
}

/// Which face of `object` the ball crossed while moving from `previous` to its
/// current position. `None` if the ball does not touch the object now, or was
/// already touching it before the move.
///
/// When the ball crossed a corner, the axis that started overlapping last is
/// the one it came through. Ties go to the top or bottom face.
pub fn entry_face(ball: &Ball, previous: Vector2<f32>, object: &Rect) -> Option<Face> {
    let before = ball_box_at(previous, ball.radius);
    if !is_ball_collided_with_object(ball, object) || before.overlaps(object) {
        return None;
    }

    let motion = ball.position - previous;

    // Share of this tick's move after which each axis overlapped.
    let vertical = if motion.y > 0.0 && before.bottom() <= object.top() {
        Some((Face::Top, (object.top() - before.bottom()) / motion.y))
    } else if motion.y < 0.0 && before.top() >= object.bottom() {
        Some((Face::Bottom, (before.top() - object.bottom()) / -motion.y))
    } else {
        None
    };
    let horizontal = if motion.x > 0.0 && before.right() <= object.left() {
        Some((Face::Left, (object.left() - before.right()) / motion.x))
    } else if motion.x < 0.0 && before.left() >= object.right() {
        Some((Face::Right, (before.left() - object.right()) / -motion.x))
    } else {
        None
    };

    match (vertical, horizontal) {
        (Some((v_face, v_time)), Some((h_face, h_time))) => {
            Some(if h_time > v_time { h_face } else { v_face })
        }
        (Some((face, _)), None) | (None, Some((face, _))) => Some(face),
        (None, None) => None,
    }
}

/// Where along the paddle the ball landed: -1 at the left edge, 0 at the
/// center, 1 at the right edge.
///
/// `paddle.x` is the left edge, so the center has to be derived from the width.
pub fn paddle_offset(paddle: &Paddle, ball_x: f32) -> f32 {
    let half_width = paddle.width / 2.0;
    if half_width <= 0.0 {
        return 0.0;
    }

    ((ball_x - paddle.center_x()) / half_width).clamp(-1.0, 1.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallOutcome {
    InPlay,
    /// The ball left through the bottom edge and a life was taken.
    Fell,
}

/// Moves the ball one tick and resolves everything it touched at its new position.
pub fn step_ball<R: Rng>(
    world: &mut WorldData,
    rng: &mut R,
    events: &mut Vec<GameEvent>,
) -> BallOutcome {
    let previous = world.ball.position;
    let ball_velocity = world.ball.velocity;
    world.ball.position += ball_velocity;

    if resolve_walls(&mut world.ball) {
        events.push(GameEvent::WallHit);
    }

    if let Some(offset) = resolve_paddle(&mut world.ball, &world.paddle) {
        events.push(GameEvent::PaddleHit { offset });
    }

    resolve_blocks(world, previous, rng, events);

    tick_modifier(&mut world.ball, events);

    if world.ball.position.y - world.ball.radius > WORLD_HEIGHT {
        world.lives = world.lives.saturating_sub(1);
        debug!("Ball lost, {} lives left", world.lives);
        events.push(GameEvent::LifeLost {
            lives_left: world.lives,
        });
        return BallOutcome::Fell;
    }

    BallOutcome::InPlay
}

/// Bounces the ball off the side and top walls. A wall only flips the velocity
/// component that points into it, so a ball still overlapping a wall on the
/// next tick is not flipped back.
pub fn resolve_walls(ball: &mut Ball) -> bool {
    let mut hit = false;

    if ball.position.x - ball.radius <= 0.0 && ball.velocity.x < 0.0 {
        ball.velocity.x *= -1.0;
        ball.position.x = ball.radius;
        hit = true;
    } else if ball.position.x + ball.radius >= WORLD_WIDTH && ball.velocity.x > 0.0 {
        ball.velocity.x *= -1.0;
        ball.position.x = WORLD_WIDTH - ball.radius;
        hit = true;
    }

    if ball.position.y - ball.radius <= 0.0 && ball.velocity.y < 0.0 {
        ball.velocity.y *= -1.0;
        ball.position.y = ball.radius;
        hit = true;
    }

    hit
}

/// Sends a falling ball back up and steers it by where it landed on the paddle.
/// Returns the landing offset when a bounce happened.
pub fn resolve_paddle(ball: &mut Ball, paddle: &Paddle) -> Option<f32> {
    if ball.velocity.y <= 0.0 || !is_ball_collided_with_object(ball, &paddle.rect()) {
        return None;
    }

    let offset = paddle_offset(paddle, ball.position.x);

    ball.velocity.y = -ball.velocity.y.abs();
    ball.velocity.x = (ball.velocity.x
        + offset * PADDLE_DEFLECTION
        + paddle.velocity * PADDLE_ENGLISH)
        .clamp(-BALL_MAX_X_SPEED, BALL_MAX_X_SPEED);
    ball.position.y = paddle.y - ball.radius;

    Some(offset)
}

/// Hits every alive block the ball moved into this tick and bounces it off the
/// faces it came through. A block the ball was already inside of is left alone,
/// so one contact is one hit no matter how many ticks the overlap lasts.
fn resolve_blocks<R: Rng>(
    world: &mut WorldData,
    previous: Vector2<f32>,
    rng: &mut R,
    events: &mut Vec<GameEvent>,
) {
    let mut contacts = Vec::new();
    let mut all_destroyed = true;

    for block in world.blocks.iter_mut().filter(|b| b.alive) {
        let rect = block.rect();
        let Some(face) = entry_face(&world.ball, previous, &rect) else {
            continue;
        };

        contacts.push((face, rect));

        if block.take_hit() {
            world.score += 1;
            events.push(GameEvent::BlockDestroyed {
                id: block.id,
                score: world.score,
            });

            if block.drops_powerup {
                let kind = PowerupKind::roll(rng);
                world.powerups.push(Powerup {
                    kind,
                    position: block.center(),
                    hitbox_radius: block.size.y / 2.0,
                });
                debug!("Block {:?} dropped {:?}", block.id, kind);
                events.push(GameEvent::PowerupSpawned(kind));
            }
        } else {
            all_destroyed = false;
            events.push(GameEvent::BlockDamaged {
                id: block.id,
                hits_left: block.hits_life,
            });
        }
    }

    if contacts.is_empty() {
        return;
    }

    if let Some(BallModifier::Piercing { pierced, .. }) = world.ball.modifier.as_mut() {
        if all_destroyed && *pierced < PIERCING_MAX_BLOCKS {
            *pierced += 1;
            return;
        }
        *pierced = 0;
    }

    for (face, rect) in contacts {
        bounce_off(&mut world.ball, face, &rect);
    }
}

/// Points the ball away from `face` and moves it back out of the box. Two
/// contacts on the same face flip the ball only once.
fn bounce_off(ball: &mut Ball, face: Face, rect: &Rect) {
    match face {
        Face::Top => {
            ball.velocity.y = -ball.velocity.y.abs();
            ball.position.y = rect.top() - ball.radius;
        }
        Face::Bottom => {
            ball.velocity.y = ball.velocity.y.abs();
            ball.position.y = rect.bottom() + ball.radius;
        }
        Face::Left => {
            ball.velocity.x = -ball.velocity.x.abs();
            ball.position.x = rect.left() - ball.radius;
        }
        Face::Right => {
            ball.velocity.x = ball.velocity.x.abs();
            ball.position.x = rect.right() + ball.radius;
        }
    }
}

fn tick_modifier(ball: &mut Ball, events: &mut Vec<GameEvent>) {
    if let Some(BallModifier::Piercing { ticks_left, .. }) = ball.modifier.as_mut() {
        *ticks_left = ticks_left.saturating_sub(1);
        if *ticks_left == 0 {
            ball.modifier = None;
            events.push(GameEvent::PiercingExpired);
        }
    }
}

/// Drops every falling powerup one tick, applies the ones the paddle caught
/// and forgets the ones that left the world.
pub fn step_powerups(world: &mut WorldData, events: &mut Vec<GameEvent>) {
    let paddle_rect = world.paddle.rect();
    let mut caught = Vec::new();

    world.powerups.retain_mut(|powerup| {
        powerup.position.y += POWERUP_FALL_SPEED;

        if paddle_rect
            .inflate(powerup.hitbox_radius)
            .contains(powerup.position)
        {
            caught.push(powerup.kind);
            return false;
        }

        powerup.position.y - powerup.hitbox_radius <= WORLD_HEIGHT
    });

    for kind in caught {
        apply_powerup(world, kind);
        events.push(GameEvent::PowerupCollected(kind));
    }
}

pub fn apply_powerup(world: &mut WorldData, kind: PowerupKind) {
    match kind {
        PowerupKind::ExtraLife => {
            world.lives += 1;
            debug!("Extra life collected, {} lives", world.lives);
        }
        PowerupKind::Piercing => {
            world.ball.modifier = Some(BallModifier::Piercing {
                ticks_left: PIERCING_DURATION_TICKS,
                pierced: 0,
            });
            debug!("Ball is piercing for {} ticks", PIERCING_DURATION_TICKS);
        }
    }
}
