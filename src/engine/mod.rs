//! The rendering engine: owns the GPU context, the camera, and the
//! mesh/line renderers, and executes interactive commands.

/// The engine's interactive command vocabulary.
pub mod command;

use crate::camera::{Camera, GestureMapper};
use crate::error::MiraError;
use crate::gpu::{DepthTexture, RenderContext};
use crate::options::Options;
use crate::renderer::{pipeline, CameraBinding, LineRenderer, MeshRenderer};
use crate::scene::SceneData;

use self::command::MiraCommand;

/// The viewer's rendering engine.
///
/// Created once per window. The host translates window events into
/// [`MiraCommand`]s, passes them to [`execute`](Self::execute), and
/// calls [`render`](Self::render) once per frame.
pub struct MeshRenderEngine {
    context: RenderContext,
    options: Options,
    camera: Camera,
    gestures: GestureMapper,
    depth: DepthTexture,
    camera_binding: CameraBinding,
    mesh_renderer: MeshRenderer,
    line_renderer: LineRenderer,
}

impl MeshRenderEngine {
    /// Create the engine over the given surface target.
    ///
    /// # Errors
    ///
    /// Returns [`MiraError`] if GPU initialization fails or the camera
    /// configuration in `options` is invalid.
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        size: (u32, u32),
        options: Options,
    ) -> Result<Self, MiraError> {
        let context = RenderContext::new(window, size).await?;

        let mut camera = Camera::new(options.camera.to_config())?;
        camera.set_aspect_ratio(size.0 as f32 / size.1.max(1) as f32);
        camera.subscribe(|event| log::debug!("camera: {event:?}"));

        let gestures = GestureMapper {
            rotate_speed: options.camera.rotate_speed,
            pan_speed: options.camera.pan_speed,
            zoom_step: options.camera.zoom_step,
        };

        let shader = pipeline::flat_shader(&context.device);
        let camera_binding = CameraBinding::new(&context);
        let depth = DepthTexture::new(&context.device, size.0, size.1);
        let mesh_renderer =
            MeshRenderer::new(&context, &shader, &camera_binding.layout);
        let line_renderer = LineRenderer::new(
            &context,
            &shader,
            &camera_binding.layout,
            &options.display,
        );

        Ok(Self {
            context,
            options,
            camera,
            gestures,
            depth,
            camera_binding,
            mesh_renderer,
            line_renderer,
        })
    }

    /// Replace the displayed mesh.
    pub fn set_mesh(&mut self, data: &SceneData) {
        self.mesh_renderer.write(
            &self.context.device,
            &self.context.queue,
            data.triangles(),
        );
    }

    /// Read access to the camera.
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Mutable access to the camera for programmatic control.
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// Current options.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Resize the surface, the depth buffer, and the camera frustum.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context.resize(width, height);
        self.depth.resize(&self.context.device, width, height);
        if height > 0 {
            self.camera
                .set_aspect_ratio(width as f32 / height as f32);
        }
    }

    /// Apply one interactive command.
    pub fn execute(&mut self, command: MiraCommand) {
        match command {
            MiraCommand::OrbitDrag { delta } => {
                self.gestures.orbit(&mut self.camera, delta);
            }
            MiraCommand::RollDrag { delta } => {
                self.gestures.roll(&mut self.camera, delta);
            }
            MiraCommand::PanDrag { delta } => {
                self.gestures.pan(&mut self.camera, delta);
            }
            MiraCommand::Zoom { delta, precise } => {
                self.gestures.zoom(&mut self.camera, delta, precise);
            }
            MiraCommand::SetInteractionMode(mode) => {
                self.camera.set_interaction_mode(mode);
            }
            MiraCommand::SetProjectionMode(mode) => {
                self.camera.set_projection_mode(mode);
            }
            MiraCommand::ResetCamera => self.camera.reset(),
            MiraCommand::LogCamera => {
                log::info!(
                    "camera: position {}, orientation {}, target {}",
                    self.camera.position(),
                    self.camera.orientation(),
                    self.camera.target()
                );
            }
            MiraCommand::ToggleGrid => {
                self.options.display.show_grid =
                    !self.options.display.show_grid;
            }
            MiraCommand::ToggleAxes => {
                self.options.display.show_axes =
                    !self.options.display.show_axes;
            }
        }
    }

    /// Render one frame: upload the camera matrix, clear, draw the mesh,
    /// then the grid and axes.
    ///
    /// # Errors
    ///
    /// Returns [`wgpu::SurfaceError`] if the swapchain texture cannot be
    /// acquired; the caller should resize and retry on
    /// `Lost`/`Outdated`.
    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        self.camera_binding
            .update(&self.context.queue, &mut self.camera);

        let frame = self.context.get_next_frame()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self.context.create_encoder();

        {
            let [r, g, b] = self.options.display.background;
            let mut render_pass =
                encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("Scene Pass"),
                    color_attachments: &[Some(
                        wgpu::RenderPassColorAttachment {
                            view: &view,
                            resolve_target: None,
                            ops: wgpu::Operations {
                                load: wgpu::LoadOp::Clear(wgpu::Color {
                                    r: f64::from(r),
                                    g: f64::from(g),
                                    b: f64::from(b),
                                    a: 1.0,
                                }),
                                store: wgpu::StoreOp::Store,
                            },
                            depth_slice: None,
                        },
                    )],
                    depth_stencil_attachment: Some(
                        wgpu::RenderPassDepthStencilAttachment {
                            view: &self.depth.view,
                            depth_ops: Some(wgpu::Operations {
                                load: wgpu::LoadOp::Clear(1.0),
                                store: wgpu::StoreOp::Store,
                            }),
                            stencil_ops: None,
                        },
                    ),
                    timestamp_writes: None,
                    occlusion_query_set: None,
                });

            render_pass.set_bind_group(
                0,
                &self.camera_binding.bind_group,
                &[],
            );
            self.mesh_renderer.draw(&mut render_pass);
            self.line_renderer.draw(
                &mut render_pass,
                self.options.display.show_grid,
                self.options.display.show_axes,
            );
        }

        self.context.submit(encoder);
        frame.present();
        Ok(())
    }
}
