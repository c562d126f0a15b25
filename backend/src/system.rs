use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::Scancode;
use sdl2::video::{GLContext, Window};
use sdl2::EventPump;

use super::config::WindowConfig;
use super::error::BootstrapError;
use super::glutils::{self, GlFunctions, GlVersion};
use super::platform::{Backend, Key, ResizeDispatch, Surface};

/// SDL with its video subsystem initialized. SDL shuts down once this and
/// every window created from it are gone.
pub struct SdlBackend {
    video_subsystem: sdl2::VideoSubsystem,
    sdl_context: sdl2::Sdl,
}

impl SdlBackend {
    pub fn init() -> Result<SdlBackend, BootstrapError> {
        let sdl_context = sdl2::init().map_err(BootstrapError::Init)?;
        let video_subsystem = sdl_context.video().map_err(BootstrapError::Init)?;
        log::debug!(
            "SDL video initialized, driver = {}",
            video_subsystem.current_video_driver()
        );

        Ok(SdlBackend {
            video_subsystem,
            sdl_context,
        })
    }
}

impl Drop for SdlBackend {
    fn drop(&mut self) {
        log::debug!("terminating SDL");
    }
}

impl Backend for SdlBackend {
    type Surface = SdlWindow;
    type Gl = GlFunctions;

    fn create_window(&self, config: &WindowConfig) -> Result<SdlWindow, BootstrapError> {
        let gl_attr = self.video_subsystem.gl_attr();
        gl_attr.set_context_profile(config.gl_profile);
        gl_attr.set_context_version(config.gl_version.0, config.gl_version.1);

        let window = self
            .video_subsystem
            .window(&config.title, config.width, config.height)
            .opengl()
            .resizable()
            .position_centered()
            .build()
            .map_err(|e| BootstrapError::WindowCreationFailed(e.to_string()))?;

        let gl_ctx = window
            .gl_create_context()
            .map_err(BootstrapError::WindowCreationFailed)?;

        debug_assert_eq!(gl_attr.context_profile(), config.gl_profile);
        debug_assert_eq!(gl_attr.context_version(), config.gl_version);

        let event_pump = self
            .sdl_context
            .event_pump()
            .map_err(BootstrapError::EventPump)?;

        log::info!(
            "created {}x{} window \"{}\" (GL {}.{} {:?})",
            config.width,
            config.height,
            config.title,
            config.gl_version.0,
            config.gl_version.1,
            config.gl_profile
        );

        Ok(SdlWindow {
            resize: ResizeDispatch::default(),
            should_close: false,
            event_pump,
            gl_ctx,
            window,
        })
    }

    fn load_gl(&self, surface: &SdlWindow) -> Result<(GlFunctions, GlVersion), BootstrapError> {
        if !surface.gl_ctx.is_current() {
            log::error!("GL context is not current on this thread");
            return Err(BootstrapError::GraphicsLoadFailed);
        }

        let version = glutils::load_with(|name| {
            self.video_subsystem.gl_get_proc_address(name) as *const _
        });
        if !version.is_loaded() {
            return Err(BootstrapError::GraphicsLoadFailed);
        }

        glutils::log_opengl_info();
        Ok((GlFunctions, version))
    }
}

// Field order is drop order: the context must go before its window.
pub struct SdlWindow {
    resize: ResizeDispatch,
    should_close: bool,
    event_pump: EventPump,
    gl_ctx: GLContext,
    window: Window,
}

impl Surface for SdlWindow {
    fn make_current(&mut self) -> Result<(), BootstrapError> {
        self.window
            .gl_make_current(&self.gl_ctx)
            .map_err(BootstrapError::MakeCurrent)
    }

    // SDL sends no size event for the initial display; registration queues it
    fn resize_dispatch(&mut self) -> &mut ResizeDispatch {
        &mut self.resize
    }

    fn framebuffer_size(&self) -> (u32, u32) {
        self.window.drawable_size()
    }

    fn should_close(&self) -> bool {
        self.should_close
    }

    fn set_should_close(&mut self, value: bool) {
        self.should_close = value;
    }

    fn is_key_pressed(&self, key: Key) -> bool {
        let scancode = match key {
            Key::Escape => Scancode::Escape,
        };
        self.event_pump
            .keyboard_state()
            .is_scancode_pressed(scancode)
    }

    fn swap_buffers(&mut self) {
        self.window.gl_swap_window();
    }

    fn poll_events(&mut self) {
        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::Window {
                    win_event: WindowEvent::Close,
                    ..
                } => self.should_close = true,
                Event::Window {
                    win_event: WindowEvent::SizeChanged(..),
                    ..
                } => {
                    let (w, h) = self.window.drawable_size();
                    self.resize.queue(w, h);
                }
                _ => {}
            }
        }

        if let Some((w, h)) = self.resize.flush() {
            log::debug!("framebuffer resized to {w}x{h}");
        }
    }
}
