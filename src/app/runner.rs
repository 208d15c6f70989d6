//! Window loop shared by every demo

use std::sync::Arc;
use std::time::Instant;

use anyhow::Context as _;
use tracing::{error, info, warn};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

#[cfg(debug_assertions)]
use super::input::KeyCode;

use super::config::AppConfig;
use super::debug_ui::DebugUIState;
use super::demo::{Demo, FrameInput};
use super::input::{GamepadInput, InputCollector};
use super::renderer::Renderer;
use super::window::window_attributes_from_config;

/// Application handler running one demo
pub struct App<D: Demo> {
    config: AppConfig,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    demo: Option<D>,
    debug_ui: DebugUIState,
    started: Instant,
    last_update: Option<Instant>,
    input_collector: InputCollector,
    gamepad: Option<GamepadInput>,
    title: String,
    fatal: Option<anyhow::Error>,
}

impl<D: Demo> App<D> {
    /// Creates the application with the provided configuration
    pub fn new(config: AppConfig) -> Self {
        info!(profile = %config.profile, demo = D::TITLE, "Starting demo");
        info!(?config.window, "Window configuration");

        let title = config.window.title.clone();
        Self {
            config,
            window: None,
            renderer: None,
            demo: None,
            debug_ui: DebugUIState::default(),
            started: Instant::now(),
            last_update: None,
            input_collector: InputCollector::new(),
            gamepad: None,
            title,
            fatal: None,
        }
    }

    /// Creates the application with configuration loaded from environment
    ///
    /// The window title comes from the demo rather than the profile.
    pub fn from_env() -> Self {
        let config = AppConfig::load_from_env().unwrap_or_else(|e| {
            warn!(error = %e, "Failed to load config, using default configuration");
            AppConfig::builtin()
        });
        Self::new(config.with_title(D::TITLE))
    }

    /// Error that stopped the loop, if any
    pub fn take_fatal(&mut self) -> Option<anyhow::Error> {
        self.fatal.take()
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        error!("Initialization failed: {err:#}");
        self.fatal = Some(err);
        event_loop.exit();
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<()> {
        let window_attributes = window_attributes_from_config(&self.config.window);
        let window = event_loop
            .create_window(window_attributes)
            .context("failed to create window")?;

        let size = window.inner_size();
        info!(
            window.width = size.width,
            window.height = size.height,
            "Window created successfully"
        );
        let window = Arc::new(window);

        // winit's event loop is synchronous, so block on the async setup
        let vsync = self.config.window.vsync;
        let renderer = tokio::runtime::Runtime::new()
            .context("failed to create tokio runtime")?
            .block_on(Renderer::new(window.clone(), vsync))?;
        info!("Renderer initialized successfully");

        let demo = D::new(renderer.gpu(), &self.config).context("failed to build demo")?;

        if D::USES_GAMEPAD {
            self.gamepad = Some(GamepadInput::new());
        }
        self.demo = Some(demo);
        self.renderer = Some(renderer);
        self.window = Some(window);
        self.started = Instant::now();
        self.last_update = Some(self.started);
        Ok(())
    }

    /// Feeds input to the demo and advances it
    fn step(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(last_update), Some(demo), Some(renderer)) =
            (self.last_update, &mut self.demo, &self.renderer)
        else {
            return;
        };

        let now = Instant::now();
        let delta_time = (now - last_update).as_secs_f32();
        self.last_update = Some(now);

        let gamepad = self.gamepad.as_mut().and_then(GamepadInput::poll);
        demo.input(&FrameInput {
            state: self.input_collector.state(),
            gamepad,
            now: (now - self.started).as_secs_f64(),
            size: renderer.gpu().size,
        });

        // Advance frame AFTER processing to transition edges to steady states
        self.input_collector.advance_frame();

        demo.update(delta_time);

        if demo.quit_requested() {
            info!("Quit requested, exiting");
            event_loop.exit();
            return;
        }

        if let Some(window) = &self.window {
            let title = demo
                .window_title()
                .unwrap_or_else(|| self.config.window.title.clone());
            if title != self.title {
                window.set_title(&title);
                self.title = title;
            }
            window.request_redraw();
        }
    }
}

impl<D: Demo> ApplicationHandler for App<D> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none()
            && self.fatal.is_none()
            && let Err(err) = self.init(event_loop)
        {
            self.fail(event_loop, err);
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        self.step(event_loop);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Feed events to input collector FIRST (before egui)
        self.input_collector.handle_window_event(&event);

        // Let egui see the event while its window is open
        if self.debug_ui.show_window
            && let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window)
        {
            let _ = renderer.handle_event(window, &event);
        }

        // Handle debug hotkeys (debug builds only)
        #[cfg(debug_assertions)]
        if self
            .input_collector
            .state()
            .keyboard
            .pressed
            .contains(&KeyCode::Backquote)
        {
            self.input_collector
                .state_mut()
                .keyboard
                .pressed
                .retain(|key| *key != KeyCode::Backquote);
            self.debug_ui.toggle_window();
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                info!("Close requested, exiting");
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(new_size);
                    if let Some(demo) = &mut self.demo {
                        demo.resize(renderer.gpu());
                    }
                }
            }
            WindowEvent::RedrawRequested => {
                if let (Some(renderer), Some(window), Some(demo)) =
                    (&mut self.renderer, &self.window, &mut self.demo)
                {
                    match renderer.draw(window, demo, &mut self.debug_ui) {
                        Ok(()) => {}
                        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                            warn!("Surface lost, reconfiguring");
                            let size = window.inner_size();
                            renderer.resize(size);
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => {
                            error!("Out of memory, exiting");
                            event_loop.exit();
                        }
                        Err(e) => {
                            error!(error = %e, "Render error");
                        }
                    }
                }
            }
            _ => {}
        }
    }
}

/// Runs demo `D` until its window closes
///
/// Initialization failures are returned so the binary exits non-zero.
pub fn run<D: Demo>() -> anyhow::Result<()> {
    let event_loop = EventLoop::new().context("failed to create event loop")?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::<D>::from_env();
    event_loop.run_app(&mut app).context("event loop failed")?;

    match app.take_fatal() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
