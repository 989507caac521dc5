//! Converts raw platform events into engine commands.
//!
//! The `InputProcessor` owns the transient input state (cursor position,
//! button state) and the key-binding map. It is the only thing that sits
//! between raw window events and the engine's
//! [`execute`](crate::OrreryEngine::execute) method.

use glam::Vec2;

use super::event::{InputEvent, MouseButton};
use crate::{engine::command::OrreryCommand, options::KeybindingOptions};

/// Converts raw window events into [`OrreryCommand`]s.
///
/// ```ignore
/// if let Some(cmd) = input_processor.handle_event(event) {
///     engine.execute(cmd);
/// }
/// ```
pub struct InputProcessor {
    /// Last cursor position, `None` before the first move.
    cursor: Option<Vec2>,
    /// Whether the primary mouse button is currently held.
    mouse_pressed: bool,
    /// Key string → action mapping.
    key_bindings: KeybindingOptions,
}

impl InputProcessor {
    /// Processor using `key_bindings`.
    #[must_use]
    pub fn new(key_bindings: KeybindingOptions) -> Self {
        Self {
            cursor: None,
            mouse_pressed: false,
            key_bindings,
        }
    }

    /// Whether the primary mouse button is pressed.
    #[must_use]
    pub fn mouse_pressed(&self) -> bool {
        self.mouse_pressed
    }

    /// Look up a key press and return the corresponding command, if bound.
    #[must_use]
    pub fn handle_key_press(&self, key: &str) -> Option<OrreryCommand> {
        self.key_bindings.lookup(key).map(|action| action.to_command())
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<OrreryCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => self.handle_cursor_moved(x, y),
            InputEvent::MouseButton { button, pressed } => {
                if button == MouseButton::Left {
                    self.mouse_pressed = pressed;
                }
                None
            }
            InputEvent::Scroll { delta } => Some(OrreryCommand::Zoom { delta }),
        }
    }

    /// Cursor moved; drags rotate the camera.
    fn handle_cursor_moved(&mut self, x: f32, y: f32) -> Option<OrreryCommand> {
        let position = Vec2::new(x, y);
        let previous = self.cursor.replace(position)?;
        let delta = position - previous;
        (self.mouse_pressed && delta != Vec2::ZERO)
            .then_some(OrreryCommand::RotateCamera { delta })
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new(KeybindingOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_rotates_camera() {
        let mut input = InputProcessor::default();
        assert_eq!(
            input.handle_event(InputEvent::CursorMoved { x: 10.0, y: 10.0 }),
            None
        );
        assert_eq!(
            input.handle_event(InputEvent::MouseButton {
                button: MouseButton::Left,
                pressed: true,
            }),
            None
        );
        assert_eq!(
            input.handle_event(InputEvent::CursorMoved { x: 14.0, y: 7.0 }),
            Some(OrreryCommand::RotateCamera {
                delta: Vec2::new(4.0, -3.0)
            })
        );
    }

    #[test]
    fn hover_without_button_does_nothing() {
        let mut input = InputProcessor::default();
        let _ = input.handle_event(InputEvent::CursorMoved { x: 0.0, y: 0.0 });
        assert_eq!(
            input.handle_event(InputEvent::CursorMoved { x: 5.0, y: 5.0 }),
            None
        );
    }

    #[test]
    fn scroll_zooms() {
        let mut input = InputProcessor::default();
        assert_eq!(
            input.handle_event(InputEvent::Scroll { delta: 2.0 }),
            Some(OrreryCommand::Zoom { delta: 2.0 })
        );
    }

    #[test]
    fn default_keys() {
        let input = InputProcessor::default();
        assert_eq!(input.handle_key_press("KeyR"), Some(OrreryCommand::Reset));
        assert_eq!(
            input.handle_key_press("KeyH"),
            Some(OrreryCommand::Harmonize)
        );
        assert_eq!(input.handle_key_press("KeyZ"), None);
    }
}
