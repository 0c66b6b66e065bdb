//! Keyboard handling.
//!
//! Only key presses count. `z` pulls the camera towards the scene, `Z` pushes
//! it away, `q`/`Q` asks the event loop to stop. Everything else is ignored.

use winit::{
    event::{ElementState, KeyEvent},
    keyboard::Key,
};

use crate::camera::Camera;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Camera z decreased by one step.
    MoveCloser,
    /// Camera z increased by one step.
    MoveAway,
    Exit,
    Ignored,
}

impl KeyAction {
    pub fn from_key(key: &Key) -> Self {
        match key {
            Key::Character(c) => match c.as_str() {
                "z" => KeyAction::MoveCloser,
                "Z" => KeyAction::MoveAway,
                "q" | "Q" => KeyAction::Exit,
                _ => KeyAction::Ignored,
            },
            _ => KeyAction::Ignored,
        }
    }

    /// Whether the frame should be redrawn after this action.
    pub fn needs_redraw(self) -> bool {
        matches!(self, KeyAction::MoveCloser | KeyAction::MoveAway)
    }
}

/// Apply a pressed key to the camera and report what happened.
pub fn handle_key(camera: &mut Camera, step: f32, key: &Key) -> KeyAction {
    let action = KeyAction::from_key(key);
    match action {
        KeyAction::MoveCloser => camera.position.z -= step,
        KeyAction::MoveAway => camera.position.z += step,
        KeyAction::Exit | KeyAction::Ignored => (),
    }
    if action != KeyAction::Ignored {
        log::debug!("{:?}: camera z = {}", action, camera.position.z);
    }
    action
}

/// Like [`handle_key`], but ignores releases.
pub fn handle_key_event(camera: &mut Camera, step: f32, event: &KeyEvent) -> KeyAction {
    match event.state {
        ElementState::Pressed => handle_key(camera, step, &event.logical_key),
        ElementState::Released => KeyAction::Ignored,
    }
}
