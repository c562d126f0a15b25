use std::ffi::{c_void, CStr};

use gl::types::*;

use super::config::ClearColor;
use super::viewport::Viewport;

/// The handful of GL state calls the frame loop issues.
///
/// `&self` because GL state lives in the current context, not in the handle.
pub trait Gl {
    fn viewport(&self, vp: Viewport);
    fn clear_color(&self, color: ClearColor);
    fn clear_color_buffer(&self);
}

/// Context version reported by the driver once entry points are loaded.
/// A zero major version means loading failed.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct GlVersion {
    pub major: i32,
    pub minor: i32,
}

impl GlVersion {
    pub fn is_loaded(&self) -> bool {
        self.major != 0
    }
}

/// Calls straight into the loaded `gl` bindings.
#[derive(Debug, Default, Clone, Copy)]
pub struct GlFunctions;

impl Gl for GlFunctions {
    fn viewport(&self, vp: Viewport) {
        unsafe { gl::Viewport(vp.x, vp.y, vp.width, vp.height) };
        check_gl_err("glViewport");
    }

    fn clear_color(&self, color: ClearColor) {
        unsafe { gl::ClearColor(color.r, color.g, color.b, color.a) };
    }

    fn clear_color_buffer(&self) {
        unsafe { gl::Clear(gl::COLOR_BUFFER_BIT) };
    }
}

/// Resolves every GL entry point through `loader` and asks the driver for the
/// context version. Needs a current context.
pub fn load_with<F>(loader: F) -> GlVersion
where
    F: FnMut(&'static str) -> *const c_void,
{
    gl::load_with(loader);

    let required = [
        gl::GetIntegerv::is_loaded(),
        gl::GetString::is_loaded(),
        gl::Viewport::is_loaded(),
        gl::ClearColor::is_loaded(),
        gl::Clear::is_loaded(),
    ];
    if required.contains(&false) {
        return GlVersion::default();
    }

    let mut major: GLint = 0;
    let mut minor: GLint = 0;
    unsafe { gl::GetIntegerv(gl::MAJOR_VERSION, &mut major) };
    unsafe { gl::GetIntegerv(gl::MINOR_VERSION, &mut minor) };
    GlVersion { major, minor }
}

pub fn check_gl_err(call: &str) {
    let err = unsafe { gl::GetError() };
    if err == gl::NO_ERROR {
        return;
    }
    log::error!("{call} raised GL error {err:#06x}");
}

fn gl_string(name: GLenum) -> String {
    let ptr = unsafe { gl::GetString(name) };
    if ptr.is_null() {
        return "<unknown>".to_string();
    }
    unsafe { CStr::from_ptr(ptr.cast()) }
        .to_string_lossy()
        .into_owned()
}

pub fn log_opengl_info() {
    log::info!("GL_VENDOR = {}", gl_string(gl::VENDOR));
    log::info!("GL_RENDERER = {}", gl_string(gl::RENDERER));
    log::info!("GL_VERSION = {}", gl_string(gl::VERSION));
}
