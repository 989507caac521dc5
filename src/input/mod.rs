//! Input handling: platform-agnostic events, bindable key actions, and the
//! processor that turns both into engine commands.

/// Platform-agnostic input events.
pub mod event;
/// Actions that can be bound to keys.
pub mod keyboard;
/// Converts raw events into engine commands.
pub mod processor;

pub use event::{InputEvent, MouseButton};
pub use keyboard::KeyAction;
pub use processor::InputProcessor;
