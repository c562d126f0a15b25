use super::config::WindowConfig;
use super::error::BootstrapError;
use super::frame_loop::run_frame_loop;
use super::glutils::Gl;
use super::platform::{Backend, Surface};
use super::viewport::Viewport;

/// Opens the window described by `config` and renders until it is closed.
///
/// Takes ownership of `backend` so the library is terminated exactly once,
/// after the window and context, whichever way this returns.
pub fn run<B: Backend>(backend: B, config: &WindowConfig) -> Result<u64, BootstrapError> {
    let mut surface = backend.create_window(config)?;
    surface.make_current()?;

    let (gl, version) = backend.load_gl(&surface)?;
    log::info!("OpenGL {}.{} loaded", version.major, version.minor);

    let resize_gl = gl.clone();
    surface.set_framebuffer_size_callback(Box::new(move |width, height| {
        resize_gl.viewport(Viewport::from_framebuffer(width, height));
    }));

    let frames = run_frame_loop(&mut surface, &gl, config.clear_color);
    log::info!("close requested after {frames} frames");
    Ok(frames)
}
