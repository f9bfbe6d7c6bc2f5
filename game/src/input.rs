use crate::constants::{PADDLE_ACCELERATION, PADDLE_DRAG};
use crate::world_data::Paddle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Steer {
    #[default]
    None,
    Left,
    Right,
}

impl Steer {
    pub fn from_keys(left: bool, right: bool) -> Self {
        match (left, right) {
            (true, false) => Steer::Left,
            (false, true) => Steer::Right,
            _ => Steer::None,
        }
    }

    fn sign(self) -> f32 {
        match self {
            Steer::None => 0.0,
            Steer::Left => -1.0,
            Steer::Right => 1.0,
        }
    }
}

/// Snapshot of the player's controls for one frame, in world coordinates.
///
/// Held keys go into `steer`; the boolean flags are edge-triggered presses and
/// should only be set on the frame the key went down.
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    pub steer: Steer,
    /// Where the pointer wants the paddle centered, while the pointer is steering.
    pub pointer_x: Option<f32>,
    pub launch: bool,
    pub pause: bool,
    pub confirm: bool,
    pub instructions: bool,
    pub back: bool,
    pub quit: bool,
}

impl FrameInput {
    /// Same held state, presses dropped. Used for the extra ticks of a long frame.
    pub fn held_only(&self) -> Self {
        FrameInput {
            steer: self.steer,
            pointer_x: self.pointer_x,
            ..Default::default()
        }
    }

    /// Keeps presses from a frame that was too short to run a tick.
    pub fn carry_presses(&mut self, earlier: &FrameInput) {
        self.launch |= earlier.launch;
        self.pause |= earlier.pause;
        self.confirm |= earlier.confirm;
        self.instructions |= earlier.instructions;
        self.back |= earlier.back;
        self.quit |= earlier.quit;
    }
}

/// Moves the paddle for one tick and keeps it inside the world.
///
/// Held keys push the paddle with a fixed impulse while drag bleeds its
/// velocity, so it speeds up, coasts and slows down instead of snapping.
/// A pointer target wins over the keys and moves the paddle straight toward
/// it. Either way the paddle travels at most `paddle.speed` per tick, and
/// running into a wall stops it.
pub fn steer_paddle(paddle: &mut Paddle, input: &FrameInput) {
    let wanted = match input.pointer_x {
        Some(target) => target - paddle.center_x(),
        None => {
            let impulse = input.steer.sign() * PADDLE_ACCELERATION;
            paddle.velocity + impulse - PADDLE_DRAG * paddle.velocity
        }
    }
    .clamp(-paddle.speed, paddle.speed);

    let target_x = paddle.x + wanted;
    paddle.x = target_x.clamp(0.0, paddle.max_x());
    paddle.velocity = if paddle.x == target_x { wanted } else { 0.0 };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{PADDLE_SPEED, PADDLE_WIDTH, WORLD_WIDTH};

    fn steer(direction: Steer) -> FrameInput {
        FrameInput {
            steer: direction,
            ..Default::default()
        }
    }

    #[test]
    fn test_held_key_builds_momentum() {
        let mut paddle = Paddle {
            x: 0.0,
            ..Paddle::default()
        };

        steer_paddle(&mut paddle, &steer(Steer::Right));
        assert_eq!(paddle.velocity, PADDLE_ACCELERATION);
        assert_eq!(paddle.x, PADDLE_ACCELERATION);

        let mut last_velocity = paddle.velocity;
        for _ in 0..30 {
            steer_paddle(&mut paddle, &steer(Steer::Right));
            assert!(paddle.velocity > last_velocity);
            assert!(paddle.velocity <= PADDLE_SPEED);
            last_velocity = paddle.velocity;
        }
        assert!(paddle.velocity > 0.99 * PADDLE_SPEED);
    }

    #[test]
    fn test_released_paddle_coasts_to_a_stop() {
        let mut paddle = Paddle {
            x: 0.0,
            ..Paddle::default()
        };
        for _ in 0..30 {
            steer_paddle(&mut paddle, &steer(Steer::Right));
        }

        let mut last_x = paddle.x;
        let mut last_velocity = paddle.velocity;
        steer_paddle(&mut paddle, &steer(Steer::None));
        assert!(paddle.x > last_x);
        assert!(paddle.velocity < last_velocity);

        for _ in 0..100 {
            last_x = paddle.x;
            last_velocity = paddle.velocity;
            steer_paddle(&mut paddle, &steer(Steer::None));
            assert!(paddle.x >= last_x);
            assert!(paddle.velocity <= last_velocity);
        }
        assert!(paddle.velocity.abs() < 0.01);
    }

    #[test]
    fn test_opposite_key_brakes_before_reversing() {
        let mut paddle = Paddle::default();
        for _ in 0..10 {
            steer_paddle(&mut paddle, &steer(Steer::Right));
        }
        let moving_right = paddle.velocity;

        steer_paddle(&mut paddle, &steer(Steer::Left));
        assert!(paddle.velocity > 0.0);
        assert!(paddle.velocity < moving_right);
    }

    #[test]
    fn test_both_keys_cancel() {
        assert_eq!(Steer::from_keys(true, true), Steer::None);
        assert_eq!(Steer::from_keys(true, false), Steer::Left);
        assert_eq!(Steer::from_keys(false, true), Steer::Right);
        assert_eq!(Steer::from_keys(false, false), Steer::None);
    }

    #[test]
    fn test_paddle_is_clamped_to_world() {
        let mut paddle = Paddle::default();

        for _ in 0..500 {
            steer_paddle(&mut paddle, &steer(Steer::Left));
            assert!(paddle.x >= 0.0);
        }
        assert_eq!(paddle.x, 0.0);
        assert_eq!(paddle.velocity, 0.0);

        for _ in 0..500 {
            steer_paddle(&mut paddle, &steer(Steer::Right));
            assert!(paddle.x <= WORLD_WIDTH - PADDLE_WIDTH);
        }
        assert_eq!(paddle.x, WORLD_WIDTH - PADDLE_WIDTH);
        assert_eq!(paddle.velocity, 0.0);
    }

    #[test]
    fn test_pointer_moves_center_toward_target() {
        let mut paddle = Paddle {
            x: 100.0,
            ..Paddle::default()
        };
        let input = FrameInput {
            pointer_x: Some(153.0),
            steer: Steer::Left,
            ..Default::default()
        };

        // center is 150, target is 3 px to the right
        steer_paddle(&mut paddle, &input);
        assert_eq!(paddle.center_x(), 153.0);

        let far = FrameInput {
            pointer_x: Some(WORLD_WIDTH * 2.0),
            ..Default::default()
        };
        steer_paddle(&mut paddle, &far);
        assert_eq!(paddle.velocity, PADDLE_SPEED);

        for _ in 0..500 {
            steer_paddle(&mut paddle, &far);
        }
        assert_eq!(paddle.x, WORLD_WIDTH - PADDLE_WIDTH);
    }

    #[test]
    fn test_carry_presses_keeps_current_steering() {
        let earlier = FrameInput {
            steer: Steer::Left,
            launch: true,
            ..Default::default()
        };
        let mut now = FrameInput {
            steer: Steer::Right,
            pause: true,
            ..Default::default()
        };
        now.carry_presses(&earlier);

        assert_eq!(now.steer, Steer::Right);
        assert!(now.launch);
        assert!(now.pause);
        assert!(!now.confirm);
    }

    #[test]
    fn test_held_only_drops_presses() {
        let input = FrameInput {
            steer: Steer::Right,
            pointer_x: Some(10.0),
            launch: true,
            pause: true,
            confirm: true,
            quit: true,
            ..Default::default()
        };
        let held = input.held_only();

        assert_eq!(held.steer, Steer::Right);
        assert_eq!(held.pointer_x, Some(10.0));
        assert!(!held.launch && !held.pause && !held.confirm && !held.quit);
    }
}
