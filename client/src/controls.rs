use game::constants::WORLD_WIDTH;
use game::{FrameInput, Steer};
use raylib::consts::{KeyboardKey, MouseButton};
use raylib::RaylibHandle;

/// Turns raylib key and mouse state into a `FrameInput` in world coordinates.
pub struct Controls {
    window_width: f32,
    last_mouse_x: Option<i32>,
    pointer_target: Option<f32>,
}

impl Controls {
    pub fn new(window_width: u32) -> Self {
        Controls {
            window_width: window_width as f32,
            last_mouse_x: None,
            pointer_target: None,
        }
    }

    pub fn poll(&mut self, handle: &RaylibHandle) -> FrameInput {
        let left =
            handle.is_key_down(KeyboardKey::KEY_LEFT) || handle.is_key_down(KeyboardKey::KEY_A);
        let right =
            handle.is_key_down(KeyboardKey::KEY_RIGHT) || handle.is_key_down(KeyboardKey::KEY_D);

        if left || right {
            self.pointer_target = None;
        }
        if let Some(target) = self.pointer_moved(handle.get_mouse_x()) {
            self.pointer_target = Some(target);
        }

        FrameInput {
            steer: Steer::from_keys(left, right),
            pointer_x: self.pointer_target,
            launch: handle.is_key_pressed(KeyboardKey::KEY_SPACE)
                || handle.is_key_pressed(KeyboardKey::KEY_L)
                || handle.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT),
            pause: handle.is_key_pressed(KeyboardKey::KEY_P),
            confirm: handle.is_key_pressed(KeyboardKey::KEY_ENTER)
                || handle.is_key_pressed(KeyboardKey::KEY_R),
            instructions: handle.is_key_pressed(KeyboardKey::KEY_I),
            back: handle.is_key_pressed(KeyboardKey::KEY_M)
                || handle.is_key_pressed(KeyboardKey::KEY_BACKSPACE),
            quit: handle.is_key_pressed(KeyboardKey::KEY_Q),
        }
    }

    /// The pointer only takes over once it actually moves, and gives control
    /// back as soon as a steering key is held.
    fn pointer_moved(&mut self, mouse_x: i32) -> Option<f32> {
        let moved = matches!(self.last_mouse_x, Some(last) if last != mouse_x);
        self.last_mouse_x = Some(mouse_x);

        if moved {
            Some(mouse_x as f32 * WORLD_WIDTH / self.window_width)
        } else {
            None
        }
    }
}
