#![deny(clippy::all)]
#![forbid(unsafe_code)]

mod error;
pub mod font;
mod frame;
mod widgets;

pub use error::AppError;
pub use frame::Frame;
pub use widgets::{Button, Point, Slider};

use error::log_error;
use log::info;
use pixels::wgpu::Color;
use pixels::{Pixels, PixelsBuilder, SurfaceTexture};
use std::sync::Arc;
use std::time::Instant;
use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::{ElementState, KeyEvent, MouseButton, StartCause, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

const BACKGROUND_COLOR: Color = Color::WHITE;

/// Something drawn into the window's frame buffer, one frame-buffer pixel per window pixel.
pub trait Scene {
    fn resize(&mut self, window_size: PhysicalSize<u32>);
    fn draw(&self, frame: &mut Frame<'_>);

    /// When [`on_time_step`](Self::on_time_step) should next run, if ever.
    fn next_wakeup(&self) -> Option<Instant>;

    /// The event handlers return true when the scene needs redrawing.
    fn on_time_step(&mut self, now: Instant) -> bool;
    fn on_pointer(&mut self, event: PointerEvent) -> bool;
    fn on_key(&mut self, code: KeyCode) -> bool;
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Pressed(Point),
    Moved(Point),
    Released(Point),
}

#[derive(Clone, Debug)]
pub struct WindowSettings {
    pub title: String,
    pub inner_size: LogicalSize<f64>,
}

pub fn animate<S, F>(settings: WindowSettings, build_scene: F) -> Result<(), AppError>
where
    S: Scene,
    F: Fn(PhysicalSize<u32>) -> S,
{
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);
    let mut handler = AppEventHandler::new(settings, build_scene);
    event_loop.run_app(&mut handler)?;
    handler.error.map_or(Ok(()), Err)
}

struct App<S: Scene> {
    scene: S,
    window: Arc<Window>,
    pixels: Pixels<'static>,
    buffer_size: PhysicalSize<u32>,
    cursor: Point,
}

impl<S: Scene> App<S> {
    fn new<F>(
        event_loop: &ActiveEventLoop,
        settings: &WindowSettings,
        build_scene: &F,
    ) -> Result<Self, AppError>
    where
        F: Fn(PhysicalSize<u32>) -> S,
    {
        let window = Arc::new(Self::build_window(event_loop, settings)?);
        let buffer_size = Self::buffer_size(window.inner_size());
        let scene = build_scene(buffer_size);
        let pixels = Self::build_pixels(&window, buffer_size)?;
        Ok(Self {
            scene,
            window,
            pixels,
            buffer_size,
            cursor: Point::default(),
        })
    }

    fn build_window(
        event_loop: &ActiveEventLoop,
        settings: &WindowSettings,
    ) -> Result<Window, AppError> {
        let window_attributes = Window::default_attributes()
            .with_title(settings.title.clone())
            .with_inner_size(settings.inner_size)
            .with_min_inner_size(LogicalSize::new(320.0, 240.0))
            .with_visible(false);
        Ok(event_loop.create_window(window_attributes)?)
    }

    fn build_pixels(
        window: &Arc<Window>,
        size: PhysicalSize<u32>,
    ) -> Result<Pixels<'static>, AppError> {
        let surface_texture = SurfaceTexture::new(size.width, size.height, window.clone());
        Ok(PixelsBuilder::new(size.width, size.height, surface_texture)
            .clear_color(BACKGROUND_COLOR)
            .build()?)
    }

    fn buffer_size(window_size: PhysicalSize<u32>) -> PhysicalSize<u32> {
        PhysicalSize::new(window_size.width.max(1), window_size.height.max(1))
    }

    fn on_create(&mut self) {
        self.window.request_redraw();
        self.window.set_visible(true);
    }

    fn on_resize(&mut self, window_size: PhysicalSize<u32>) -> Result<(), AppError> {
        // Minimized windows report a zero size; keep the old buffer until it comes back.
        if window_size.width == 0 || window_size.height == 0 {
            return Ok(());
        }
        info!("Window resized to {}x{}", window_size.width, window_size.height);
        self.pixels
            .resize_surface(window_size.width, window_size.height)?;
        self.pixels
            .resize_buffer(window_size.width, window_size.height)?;
        self.buffer_size = window_size;
        self.scene.resize(window_size);
        self.window.request_redraw();
        Ok(())
    }

    fn on_time_step(&mut self) {
        if self.scene.on_time_step(Instant::now()) {
            self.window.request_redraw();
        }
    }

    fn on_pointer(&mut self, event: PointerEvent) {
        if self.scene.on_pointer(event) {
            self.window.request_redraw();
        }
    }

    fn on_key(&mut self, code: KeyCode) {
        if self.scene.on_key(code) {
            self.window.request_redraw();
        }
    }

    fn on_redraw(&mut self) -> Result<(), AppError> {
        let mut frame = Frame::new(
            self.pixels.frame_mut(),
            self.buffer_size.width,
            self.buffer_size.height,
        );
        self.scene.draw(&mut frame);
        self.pixels.render()?;
        Ok(())
    }
}

struct AppEventHandler<S, F>
where
    S: Scene,
    F: Fn(PhysicalSize<u32>) -> S,
{
    settings: WindowSettings,
    build_scene: F,
    app: Option<App<S>>,
    error: Option<AppError>,
}

impl<S, F> AppEventHandler<S, F>
where
    S: Scene,
    F: Fn(PhysicalSize<u32>) -> S,
{
    fn new(settings: WindowSettings, build_scene: F) -> Self {
        Self {
            settings,
            build_scene,
            app: None,
            error: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, method_name: &str, err: AppError) {
        log_error(method_name, &err);
        self.error = Some(err);
        event_loop.exit();
    }
}

impl<S, F> ApplicationHandler for AppEventHandler<S, F>
where
    S: Scene,
    F: Fn(PhysicalSize<u32>) -> S,
{
    fn new_events(&mut self, _event_loop: &ActiveEventLoop, _cause: StartCause) {
        // Any wakeup may be at or past the scene's deadline, not just the timer's own.
        if let Some(app) = self.app.as_mut() {
            app.on_time_step();
        }
    }

    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.app.is_some() {
            return;
        }
        match App::new(event_loop, &self.settings, &self.build_scene) {
            Ok(mut app) => {
                app.on_create();
                self.app = Some(app);
            }
            Err(err) => self.fail(event_loop, "App::new", err),
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let Some(app) = self.app.as_mut() else {
            return;
        };
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if let Err(err) = app.on_resize(size) {
                    self.fail(event_loop, "on_resize", err);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                app.cursor = Point::new(position.x as f32, position.y as f32);
                app.on_pointer(PointerEvent::Moved(app.cursor));
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                let cursor = app.cursor;
                match state {
                    ElementState::Pressed => app.on_pointer(PointerEvent::Pressed(cursor)),
                    ElementState::Released => app.on_pointer(PointerEvent::Released(cursor)),
                }
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state: ElementState::Released,
                        repeat: false,
                        ..
                    },
                ..
            } => match code {
                KeyCode::Escape | KeyCode::KeyQ | KeyCode::KeyX => {
                    event_loop.exit();
                }
                _ => app.on_key(code),
            },
            WindowEvent::RedrawRequested => {
                if let Err(err) = app.on_redraw() {
                    self.fail(event_loop, "on_redraw", err);
                }
            }
            _ => (),
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let wakeup = self.app.as_ref().and_then(|app| app.scene.next_wakeup());
        event_loop.set_control_flow(wakeup.map_or(ControlFlow::Wait, ControlFlow::WaitUntil));
    }
}
