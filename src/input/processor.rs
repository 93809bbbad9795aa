//! Converts raw platform events into engine commands.
//!
//! The `InputProcessor` owns all transient input state (cursor tracking,
//! pressed buttons, modifier keys) and the key-binding map. It is the
//! only thing that sits between raw window events and the engine's
//! [`execute`](crate::engine::MeshRenderEngine::execute) method.

use std::collections::HashMap;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::event::{InputEvent, MouseButton};
use crate::camera::{InteractionMode, ProjectionMode};
use crate::engine::command::MiraCommand;

/// Drag deltas shrink by this factor while shift is held.
const PRECISION_FACTOR: f32 = 0.25;

/// Maps physical key strings to [`MiraCommand`] variants.
///
/// Key strings use the `winit::keyboard::KeyCode` debug format:
/// `"KeyG"`, `"Digit0"`, `"Escape"`, etc.
///
/// Only *discrete* commands (toggles, mode switches) make sense as key
/// bindings — parameterized commands like `OrbitDrag` are produced by
/// the mouse gesture interpreter, not key lookups.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KeyBindings {
    /// Forward map: key string → command tag.
    bindings: HashMap<String, KeyCommandTag>,
}

/// Serializable tag for the subset of [`MiraCommand`] that can be
/// key-bound (discrete, parameterless actions).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyCommandTag {
    /// Restore the camera's rest pose.
    ResetCamera,
    /// Switch to perspective projection.
    PerspectiveProjection,
    /// Switch to orthographic projection.
    OrthographicProjection,
    /// Switch to free-look interaction.
    FreeInteraction,
    /// Switch to orbit-around-target interaction.
    TargetInteraction,
    /// Toggle reference-grid visibility.
    ToggleGrid,
    /// Toggle coordinate-axes visibility.
    ToggleAxes,
    /// Log the camera state.
    LogCamera,
}

impl KeyCommandTag {
    /// Convert to the corresponding parameterless [`MiraCommand`].
    fn to_command(self) -> MiraCommand {
        match self {
            Self::ResetCamera => MiraCommand::ResetCamera,
            Self::PerspectiveProjection => {
                MiraCommand::SetProjectionMode(ProjectionMode::Perspective)
            }
            Self::OrthographicProjection => {
                MiraCommand::SetProjectionMode(ProjectionMode::Orthographic)
            }
            Self::FreeInteraction => {
                MiraCommand::SetInteractionMode(InteractionMode::Free)
            }
            Self::TargetInteraction => {
                MiraCommand::SetInteractionMode(InteractionMode::Target)
            }
            Self::ToggleGrid => MiraCommand::ToggleGrid,
            Self::ToggleAxes => MiraCommand::ToggleAxes,
            Self::LogCamera => MiraCommand::LogCamera,
        }
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let bindings = HashMap::from([
            ("Digit0".into(), KeyCommandTag::ResetCamera),
            ("KeyP".into(), KeyCommandTag::PerspectiveProjection),
            ("KeyO".into(), KeyCommandTag::OrthographicProjection),
            ("KeyF".into(), KeyCommandTag::FreeInteraction),
            ("KeyT".into(), KeyCommandTag::TargetInteraction),
            ("KeyG".into(), KeyCommandTag::ToggleGrid),
            ("KeyA".into(), KeyCommandTag::ToggleAxes),
            ("KeyL".into(), KeyCommandTag::LogCamera),
        ]);
        Self { bindings }
    }
}

impl KeyBindings {
    /// Look up the command for a physical key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<MiraCommand> {
        self.bindings.get(key).map(|tag| tag.to_command())
    }
}

/// Converts raw window events into [`MiraCommand`]s.
///
/// Owns all transient input state (cursor position, pressed buttons,
/// modifier keys) and the keyboard binding map.
///
/// # Usage
///
/// ```ignore
/// if let Some(cmd) = input.handle_event(event) {
///     engine.execute(cmd);
/// }
/// if let Some(cmd) = input.handle_key_press("KeyG") {
///     engine.execute(cmd);
/// }
/// ```
pub struct InputProcessor {
    cursor: Vec2,
    left_pressed: bool,
    right_pressed: bool,
    middle_pressed: bool,
    shift_pressed: bool,
    key_bindings: KeyBindings,
}

impl InputProcessor {
    /// Create a new processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cursor: Vec2::ZERO,
            left_pressed: false,
            right_pressed: false,
            middle_pressed: false,
            shift_pressed: false,
            key_bindings: KeyBindings::default(),
        }
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeyBindings) -> Self {
        Self {
            key_bindings,
            ..Self::new()
        }
    }

    /// Current cursor position in physical pixels.
    #[must_use]
    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    /// Whether the shift modifier is held.
    #[must_use]
    pub fn shift_pressed(&self) -> bool {
        self.shift_pressed
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeyBindings {
        &self.key_bindings
    }

    /// Look up a key press and return the corresponding command, if
    /// bound.
    #[must_use]
    pub fn handle_key_press(&self, key: &str) -> Option<MiraCommand> {
        self.key_bindings.lookup(key)
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<MiraCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => {
                self.handle_cursor_moved(x, y)
            }
            InputEvent::MouseButton { button, pressed } => {
                match button {
                    MouseButton::Left => self.left_pressed = pressed,
                    MouseButton::Right => self.right_pressed = pressed,
                    MouseButton::Middle => self.middle_pressed = pressed,
                }
                None
            }
            InputEvent::Scroll { delta } => Some(MiraCommand::Zoom {
                delta,
                precise: self.shift_pressed,
            }),
            InputEvent::ModifiersChanged { shift } => {
                self.shift_pressed = shift;
                None
            }
        }
    }

    /// Cursor moved — compute the delta and route it to the gesture of
    /// the first pressed button (left, then right, then middle).
    fn handle_cursor_moved(&mut self, x: f32, y: f32) -> Option<MiraCommand> {
        let current = Vec2::new(x, y);
        let mut delta = current - self.cursor;
        self.cursor = current;

        if self.shift_pressed {
            delta *= PRECISION_FACTOR;
        }

        if self.left_pressed {
            Some(MiraCommand::OrbitDrag { delta })
        } else if self.right_pressed {
            Some(MiraCommand::RollDrag { delta })
        } else if self.middle_pressed {
            Some(MiraCommand::PanDrag { delta })
        } else {
            None
        }
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(button: MouseButton) -> InputEvent {
        InputEvent::MouseButton {
            button,
            pressed: true,
        }
    }

    #[test]
    fn default_bindings_cover_the_viewer_keys() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.lookup("Digit0"), Some(MiraCommand::ResetCamera));
        assert_eq!(
            bindings.lookup("KeyO"),
            Some(MiraCommand::SetProjectionMode(ProjectionMode::Orthographic))
        );
        assert_eq!(
            bindings.lookup("KeyT"),
            Some(MiraCommand::SetInteractionMode(InteractionMode::Target))
        );
        assert_eq!(bindings.lookup("KeyG"), Some(MiraCommand::ToggleGrid));
        assert_eq!(bindings.lookup("KeyZ"), None);
    }

    #[test]
    fn buttons_route_to_their_gestures() {
        let mut input = InputProcessor::new();
        let _ = input.handle_event(InputEvent::CursorMoved { x: 10.0, y: 10.0 });

        let _ = input.handle_event(press(MouseButton::Left));
        assert_eq!(
            input.handle_event(InputEvent::CursorMoved { x: 14.0, y: 7.0 }),
            Some(MiraCommand::OrbitDrag {
                delta: Vec2::new(4.0, -3.0)
            })
        );

        let _ = input.handle_event(InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: false,
        });
        let _ = input.handle_event(press(MouseButton::Right));
        assert!(matches!(
            input.handle_event(InputEvent::CursorMoved { x: 15.0, y: 7.0 }),
            Some(MiraCommand::RollDrag { .. })
        ));

        let _ = input.handle_event(InputEvent::MouseButton {
            button: MouseButton::Right,
            pressed: false,
        });
        let _ = input.handle_event(press(MouseButton::Middle));
        assert!(matches!(
            input.handle_event(InputEvent::CursorMoved { x: 15.0, y: 8.0 }),
            Some(MiraCommand::PanDrag { .. })
        ));
    }

    #[test]
    fn shift_shrinks_drag_deltas() {
        let mut input = InputProcessor::new();
        let _ = input.handle_event(InputEvent::CursorMoved { x: 0.0, y: 0.0 });
        let _ = input.handle_event(press(MouseButton::Left));
        let _ =
            input.handle_event(InputEvent::ModifiersChanged { shift: true });

        assert_eq!(
            input.handle_event(InputEvent::CursorMoved { x: 8.0, y: -8.0 }),
            Some(MiraCommand::OrbitDrag {
                delta: Vec2::new(2.0, -2.0)
            })
        );
    }

    #[test]
    fn scroll_carries_the_precision_flag() {
        let mut input = InputProcessor::new();
        assert_eq!(
            input.handle_event(InputEvent::Scroll { delta: 1.0 }),
            Some(MiraCommand::Zoom {
                delta: 1.0,
                precise: false
            })
        );

        let _ =
            input.handle_event(InputEvent::ModifiersChanged { shift: true });
        assert_eq!(
            input.handle_event(InputEvent::Scroll { delta: -1.0 }),
            Some(MiraCommand::Zoom {
                delta: -1.0,
                precise: true
            })
        );
    }

    #[test]
    fn release_stops_the_drag() {
        let mut input = InputProcessor::new();
        let _ = input.handle_event(press(MouseButton::Left));
        let _ = input.handle_event(InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: false,
        });
        assert_eq!(
            input.handle_event(InputEvent::CursorMoved { x: 5.0, y: 5.0 }),
            None
        );
    }
}
