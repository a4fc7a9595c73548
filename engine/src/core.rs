//! Core engine run loop.

use crate::{
    config::Config, context::Context, event::Event, renderer::Renderer, shader::Shader,
    window::DisplayContext, window::WindowCreateInfo, Result,
};
use std::{
    borrow::Cow,
    fmt::Write,
    thread,
    time::{Duration, Instant},
};
use winit::{
    event::{ElementState, Event as WinitEvent, VirtualKeyCode, WindowEvent},
    event_loop::EventLoop,
};

/// Application callbacks driven by [Engine::run].
pub trait Update {
    /// Called once after the window, GL context, and shader program exist.
    fn on_start(&mut self, _cx: &mut Context) -> Result<()> {
        Ok(())
    }

    /// Called every frame before the draw call is issued.
    fn on_update(&mut self, delta_time: f32, cx: &mut Context) -> Result<()>;

    /// Called on engine shutdown.
    fn on_stop(&mut self, _cx: &mut Context) {}

    /// Called on every event.
    fn on_event(&mut self, _delta_time: f32, _event: Event, _cx: &mut Context) {}
}

/// Owns everything needed to open a window and drive the render loop.
#[derive(Debug)]
#[must_use]
pub struct Engine {
    title: Cow<'static, str>,
    version: Cow<'static, str>,
    window: WindowCreateInfo,
    config: Config,
    shaders: Vec<Shader>,
}

impl Engine {
    pub fn new(title: impl Into<Cow<'static, str>>, version: impl Into<Cow<'static, str>>) -> Self {
        let title = title.into();
        let window = WindowCreateInfo {
            title: title.clone(),
            ..WindowCreateInfo::default()
        };
        Self {
            title,
            version: version.into(),
            window,
            config: Config::default(),
            shaders: vec![],
        }
    }

    pub fn with_window(mut self, mut window: WindowCreateInfo) -> Self {
        window.title = self.title.clone();
        self.window = window;
        self
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn shader(mut self, shader: Shader) -> Self {
        self.shaders.push(shader);
        self
    }

    /// Open the window, compile the shader program, and run the application
    /// until the window closes or Escape is pressed.
    ///
    /// Setup failures are returned before the loop starts; once running, an
    /// update error logs and exits the process with code 1. The loop itself
    /// never returns.
    pub fn run(self, mut app: impl Update + 'static) -> Result<()> {
        tracing::info!(title = %self.title, version = %self.version, "starting engine");

        let event_loop = EventLoop::new();
        let (display, gl) = DisplayContext::create(&event_loop, &self.window)?;
        let renderer = Renderer::initialize(gl, &self.shaders)?;

        let mut cx = Context::new(self.config, renderer);
        cx.renderer.set_clear_color(self.config.clear_color);
        if self.config.depth_test {
            cx.renderer.enable_depth_test();
        }
        let size = display.window().inner_size();
        cx.on_resized(size.width, size.height);

        app.on_start(&mut cx)?;

        let title = self.title;
        event_loop.run(move |event, _window_target, control_flow| {
            control_flow.set_poll();

            let current_time = Instant::now();
            let delta_time = current_time - cx.last_frame_time;

            match &event {
                WinitEvent::MainEventsCleared if cx.is_running() => {
                    if let Err(err) = app.on_update(delta_time.as_secs_f32(), &mut cx) {
                        tracing::error!("failed to update application: {err}");
                        control_flow.set_exit_with_code(1);
                        return;
                    }
                    cx.draw_frame();
                    if let Err(err) = display.swap_buffers() {
                        tracing::error!("failed to swap buffers: {err}");
                        control_flow.set_exit_with_code(1);
                        return;
                    }

                    let elapsed = current_time.elapsed();
                    cx.fps_timer += delta_time;
                    let remaining = cx
                        .target_frame_rate
                        .checked_sub(elapsed)
                        .unwrap_or_default();
                    if remaining.as_millis() > 0 {
                        if cx.config.limit_frame_rate {
                            thread::sleep(remaining - Duration::from_millis(1));
                        }
                        cx.fps_counter += 1;
                    }

                    let one_second = Duration::from_secs(1);
                    if cx.fps_timer > one_second {
                        cx.window_title.clear();
                        let _ = write!(cx.window_title, "{} - FPS: {}", title, cx.fps_counter);
                        display.window().set_title(&cx.window_title);
                        cx.fps_timer -= one_second;
                        cx.fps_counter = 0;
                    }

                    cx.last_frame_time = current_time;
                }
                WinitEvent::WindowEvent { event, .. } => match event {
                    WindowEvent::Resized(size) => {
                        display.resize(size.width, size.height);
                        cx.on_resized(size.width, size.height);
                    }
                    WindowEvent::KeyboardInput { input, .. } => {
                        if matches!(
                            (input.virtual_keycode, input.state),
                            (Some(VirtualKeyCode::Escape), ElementState::Pressed)
                        ) {
                            tracing::debug!("escape pressed");
                            control_flow.set_exit();
                        }
                    }
                    WindowEvent::CloseRequested | WindowEvent::Destroyed => {
                        tracing::debug!("window closed or destroyed");
                        control_flow.set_exit();
                    }
                    _ => (),
                },
                WinitEvent::LoopDestroyed => {
                    tracing::info!("shutting down...");
                    app.on_stop(&mut cx);
                }
                _ => (),
            }

            if !matches!(
                event,
                WinitEvent::MainEventsCleared
                    | WinitEvent::RedrawEventsCleared
                    | WinitEvent::NewEvents(_)
            ) {
                app.on_event(delta_time.as_secs_f32(), event.into(), &mut cx);
            }

            if cx.should_quit {
                control_flow.set_exit();
            }
        });
    }
}
