//! Standalone visualization window backed by winit.
//!
//! ```no_run
//! # use mira::Viewer;
//! Viewer::builder()
//!     .with_title("Mira")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::{ElementState, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::{
    error::MiraError,
    input::{InputEvent, InputProcessor},
    options::Options,
    scene::SceneData,
    MeshRenderEngine,
};

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    mesh: Option<SceneData>,
    options: Option<Options>,
    title: String,
}

impl ViewerBuilder {
    /// Create a builder with sensible defaults (title "Mira", empty
    /// scene, default options).
    fn new() -> Self {
        Self {
            mesh: None,
            options: None,
            title: "Mira".into(),
        }
    }

    /// Set the mesh to display.
    #[must_use]
    pub fn with_mesh(mut self, mesh: SceneData) -> Self {
        self.mesh = Some(mesh);
        self
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            mesh: self.mesh,
            options: self.options,
            title: self.title,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window that displays a triangle-mesh scene over the
/// reference grid and axes.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    mesh: Option<SceneData>,
    options: Option<Options>,
    title: String,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window
    /// is closed.
    ///
    /// # Errors
    ///
    /// Returns [`MiraError`] if the event loop cannot be created or
    /// exits with an error.
    pub fn run(self) -> Result<(), MiraError> {
        let event_loop =
            EventLoop::new().map_err(|e| MiraError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = ViewerApp {
            window: None,
            engine: None,
            input: InputProcessor::new(),
            mesh: self.mesh,
            options: self.options,
            title: self.title,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| MiraError::Viewer(e.to_string()))
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Arc<Window>>,
    engine: Option<MeshRenderEngine>,
    input: InputProcessor,
    mesh: Option<SceneData>,
    options: Option<Options>,
    title: String,
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let monitor = event_loop
            .primary_monitor()
            .or_else(|| event_loop.available_monitors().next());
        let attrs = if let Some(mon) = &monitor {
            let mon_size = mon.size();
            let scale = mon.scale_factor();
            #[allow(clippy::cast_possible_truncation)]
            let logical_w = (mon_size.width as f64 / scale * 0.75) as u32;
            #[allow(clippy::cast_possible_truncation)]
            let logical_h = (mon_size.height as f64 / scale * 0.75) as u32;
            Window::default_attributes()
                .with_title(&self.title)
                .with_inner_size(winit::dpi::LogicalSize::new(
                    logical_w, logical_h,
                ))
        } else {
            Window::default_attributes().with_title(&self.title)
        };

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let inner = window.inner_size();
        let size = (inner.width.max(1), inner.height.max(1));

        let options = self.options.take().unwrap_or_default();
        self.input =
            InputProcessor::with_key_bindings(options.keybindings.clone());

        let mut engine = match pollster::block_on(MeshRenderEngine::new(
            window.clone(),
            size,
            options,
        )) {
            Ok(e) => e,
            Err(e) => {
                log::error!("Failed to initialize engine: {e}");
                event_loop.exit();
                return;
            }
        };

        if let Some(mesh) = self.mesh.take() {
            engine.set_mesh(&mesh);
        }

        window.request_redraw();
        self.window = Some(window);
        self.engine = Some(engine);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        if matches!(event, WindowEvent::CloseRequested) {
            event_loop.exit();
            return;
        }

        // Guard: both window and engine must be initialised.
        if self.window.is_none() || self.engine.is_none() {
            return;
        }

        match event {
            WindowEvent::Resized(size) => {
                if let Some(engine) = &mut self.engine {
                    engine.resize(size.width.max(1), size.height.max(1));
                }
            }

            WindowEvent::RedrawRequested => {
                if let (Some(window), Some(engine)) =
                    (&self.window, &mut self.engine)
                {
                    match engine.render() {
                        Ok(()) => {}
                        Err(
                            wgpu::SurfaceError::Outdated
                            | wgpu::SurfaceError::Lost,
                        ) => {
                            let inner = window.inner_size();
                            engine.resize(
                                inner.width.max(1),
                                inner.height.max(1),
                            );
                        }
                        Err(e) => {
                            log::error!("render error: {e:?}");
                        }
                    }
                    window.request_redraw();
                }
            }

            WindowEvent::MouseInput { button, state, .. } => {
                let command = self.input.handle_event(InputEvent::MouseButton {
                    button: button.into(),
                    pressed: state == ElementState::Pressed,
                });
                self.dispatch(command);
            }

            WindowEvent::CursorMoved { position, .. } => {
                let command =
                    self.input.handle_event(InputEvent::CursorMoved {
                        x: position.x as f32,
                        y: position.y as f32,
                    });
                self.dispatch(command);
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let scroll = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.01,
                };
                let command = self
                    .input
                    .handle_event(InputEvent::Scroll { delta: scroll });
                self.dispatch(command);
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            WindowEvent::ModifiersChanged(modifiers) => {
                let _ =
                    self.input.handle_event(InputEvent::ModifiersChanged {
                        shift: modifiers.state().shift_key(),
                    });
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed {
                    use winit::keyboard::PhysicalKey;
                    if let PhysicalKey::Code(code) = event.physical_key {
                        let key = format!("{code:?}");
                        let command = self.input.handle_key_press(&key);
                        self.dispatch(command);
                        if let Some(window) = &self.window {
                            window.request_redraw();
                        }
                    }
                }
            }

            _ => (),
        }
    }
}

impl ViewerApp {
    /// Forward a command (if any) to the engine.
    fn dispatch(&mut self, command: Option<crate::MiraCommand>) {
        if let (Some(engine), Some(command)) = (&mut self.engine, command) {
            engine.execute(command);
        }
    }
}
