//! Seams between the frame loop and the windowing library.
//!
//! [`Backend`] owns the library's process-wide state: dropping it terminates
//! the library. Everything it creates must be dropped first.

use super::config::WindowConfig;
use super::error::BootstrapError;
use super::glutils::{Gl, GlVersion};

/// Keys the bootstrap reacts to.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Key {
    Escape,
}

/// Receives the new framebuffer size in pixels.
pub type FramebufferSizeCallback = Box<dyn FnMut(u32, u32)>;

/// Holds the framebuffer size callback and the size it has yet to see.
///
/// Size changes queued between two flushes collapse into one call carrying
/// the latest size.
#[derive(Default)]
pub struct ResizeDispatch {
    callback: Option<FramebufferSizeCallback>,
    pending: Option<(u32, u32)>,
}

impl ResizeDispatch {
    /// Replaces the callback and queues `initial`, so the first flush reports
    /// the size the window is first displayed at.
    pub fn register(&mut self, callback: FramebufferSizeCallback, initial: (u32, u32)) {
        self.callback = Some(callback);
        self.pending = Some(initial);
    }

    pub fn queue(&mut self, width: u32, height: u32) {
        self.pending = Some((width, height));
    }

    /// Hands the pending size, if any, to the callback. Returns what was
    /// delivered.
    pub fn flush(&mut self) -> Option<(u32, u32)> {
        let (width, height) = self.pending.take()?;
        if let Some(callback) = self.callback.as_mut() {
            callback(width, height);
        }
        Some((width, height))
    }
}

/// A window together with its GL context.
pub trait Surface {
    fn make_current(&mut self) -> Result<(), BootstrapError>;

    fn resize_dispatch(&mut self) -> &mut ResizeDispatch;

    /// Stores `callback` against this window. It runs from inside
    /// [`Surface::poll_events`] on every framebuffer size change, and once
    /// for the initial size on the first poll after registration.
    fn set_framebuffer_size_callback(&mut self, callback: FramebufferSizeCallback) {
        let initial = self.framebuffer_size();
        self.resize_dispatch().register(callback, initial);
    }

    fn framebuffer_size(&self) -> (u32, u32);

    fn should_close(&self) -> bool;
    fn set_should_close(&mut self, value: bool);

    fn is_key_pressed(&self, key: Key) -> bool;

    fn swap_buffers(&mut self);

    /// Drains pending events without waiting for new ones.
    fn poll_events(&mut self);
}

pub trait Backend {
    type Surface: Surface;
    type Gl: Gl + Clone + 'static;

    fn create_window(&self, config: &WindowConfig) -> Result<Self::Surface, BootstrapError>;

    fn load_gl(&self, surface: &Self::Surface) -> Result<(Self::Gl, GlVersion), BootstrapError>;
}
