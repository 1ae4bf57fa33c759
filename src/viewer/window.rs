//! Standalone viewer window backed by winit and wgpu.

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::{ElementState, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{Window, WindowId},
};

use super::{FrameSink, FrameTiming, LoopState, PresentError, ViewerLoop};
use crate::{
    camera::{CameraMatrices, Viewport},
    error::DuplexError,
    geometry::HelixFrame,
    gpu::render_context::RenderContext,
    input::{InputEvent, MouseButton},
    options::Options,
    renderer::{FrameInstances, HelixRenderer},
    sequence::Duplex,
};

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    duplex: Duplex,
    options: Options,
}

impl ViewerBuilder {
    fn new() -> Self {
        Self {
            duplex: Duplex::default(),
            options: Options::default(),
        }
    }

    /// Set the duplex to display.
    #[must_use]
    pub fn with_duplex(mut self, duplex: Duplex) -> Self {
        self.duplex = duplex;
        self
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            duplex: self.duplex,
            options: self.options,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A window showing one duplex as a rotating double helix.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    duplex: Duplex,
    options: Options,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed.
    ///
    /// # Errors
    ///
    /// Returns [`DuplexError::Viewer`] if the event loop cannot start, or
    /// the GPU error that prevented the window from being drawn.
    pub fn run(self) -> Result<(), DuplexError> {
        let event_loop =
            EventLoop::new().map_err(|e| DuplexError::Viewer(e.to_string()))?;

        let mut app = ViewerApp {
            window: None,
            viewer: None,
            pending: Vec::new(),
            timing: FrameTiming::new(self.options.window.target_fps),
            duplex: self.duplex,
            options: self.options,
            error: None,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| DuplexError::Viewer(e.to_string()))?;
        app.error.map_or(Ok(()), Err)
    }
}

// ── wgpu sink ────────────────────────────────────────────────────────────

/// GPU state behind the window; dropped on release.
struct Gpu {
    context: RenderContext,
    renderer: HelixRenderer,
}

/// Presents frames into the window surface.
struct WindowSink {
    gpu: Option<Gpu>,
    uploaded: bool,
}

impl FrameSink for WindowSink {
    fn resize(&mut self, viewport: Viewport) {
        if let Some(gpu) = &mut self.gpu {
            gpu.context.resize(viewport.width, viewport.height);
            gpu.renderer.resize(&gpu.context);
        }
    }

    fn present(
        &mut self,
        frame: &HelixFrame,
        camera: &CameraMatrices,
    ) -> Result<(), PresentError> {
        let Some(gpu) = &mut self.gpu else {
            return Err(PresentError::Failed("GPU resources released".into()));
        };
        // The loop's frame is fixed for its lifetime.
        if !self.uploaded {
            gpu.renderer
                .upload(&gpu.context, &FrameInstances::from_frame(frame));
            self.uploaded = true;
        }
        gpu.renderer.update_camera(&gpu.context, camera);
        gpu.renderer.render(&gpu.context).map_err(|e| match e {
            wgpu::SurfaceError::Outdated | wgpu::SurfaceError::Lost => {
                PresentError::Outdated
            }
            other => PresentError::Failed(other.to_string()),
        })
    }

    fn release(&mut self) {
        if self.gpu.take().is_some() {
            log::debug!("GPU resources released");
        }
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Arc<Window>>,
    viewer: Option<ViewerLoop<WindowSink>>,
    pending: Vec<InputEvent>,
    timing: FrameTiming,
    duplex: Duplex,
    options: Options,
    error: Option<DuplexError>,
}

/// Surface size for the window, never zero.
fn viewport_size(inner: winit::dpi::PhysicalSize<u32>) -> Viewport {
    Viewport::new(inner.width, inner.height)
}

impl ViewerApp {
    fn fail(&mut self, event_loop: &ActiveEventLoop, error: DuplexError) {
        log::error!("{error}");
        self.error = Some(error);
        event_loop.exit();
    }

    fn tick(&mut self, event_loop: &ActiveEventLoop) {
        let Some(viewer) = &mut self.viewer else {
            return;
        };
        let events = std::mem::take(&mut self.pending);
        if viewer.tick(events) == LoopState::Stopped {
            event_loop.exit();
        }
        self.timing.end_frame();
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title(&self.options.window.title)
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.options.window.width,
                self.options.window.height,
            ));
        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                self.fail(event_loop, DuplexError::Viewer(e.to_string()));
                return;
            }
        };

        let viewport = viewport_size(window.inner_size());
        let context = match pollster::block_on(RenderContext::new(
            window.clone(),
            (viewport.width, viewport.height),
        )) {
            Ok(context) => context,
            Err(e) => {
                self.fail(event_loop, DuplexError::Gpu(e));
                return;
            }
        };
        let renderer = HelixRenderer::new(&context, self.options.colors.background);
        let sink = WindowSink {
            gpu: Some(Gpu { context, renderer }),
            uploaded: false,
        };

        self.viewer = Some(ViewerLoop::new(
            &self.duplex,
            &self.options,
            sink,
            viewport,
        ));
        window.request_redraw();
        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                self.pending.push(InputEvent::CloseRequested);
                // Closing must not wait for the next frame deadline.
                self.tick(event_loop);
            }
            WindowEvent::Resized(size) => {
                self.pending.push(InputEvent::Resized {
                    width: size.width,
                    height: size.height,
                });
            }
            WindowEvent::RedrawRequested => self.tick(event_loop),
            WindowEvent::MouseInput { button, state, .. } => {
                self.pending.push(InputEvent::MouseButton {
                    button: MouseButton::from(button),
                    pressed: state == ElementState::Pressed,
                });
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.pending.push(InputEvent::CursorMoved {
                    x: position.x as f32,
                    y: position.y as f32,
                });
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let delta = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.01,
                };
                self.pending.push(InputEvent::Scroll { delta });
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed || event.repeat {
                    return;
                }
                let PhysicalKey::Code(code) = event.physical_key else {
                    return;
                };
                self.pending.push(InputEvent::KeyPressed {
                    key: format!("{code:?}"),
                });
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(window) = &self.window else {
            return;
        };
        if self.timing.should_render() {
            window.request_redraw();
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(
            self.timing.next_deadline(),
        ));
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(viewer) = &mut self.viewer {
            viewer.shutdown();
            log::info!(
                "viewer closed after {} frames at {:.1} fps",
                viewer.frames(),
                self.timing.fps()
            );
        }
    }
}
