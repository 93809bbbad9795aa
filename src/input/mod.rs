//! Input handling: platform-agnostic event types and the processor that
//! converts raw window events into engine commands.

/// Platform-agnostic input events.
pub mod event;
/// Converts raw events into engine commands.
pub mod processor;

pub use event::{InputEvent, MouseButton};
pub use processor::{InputProcessor, KeyBindings};
