//! Scripted stand-ins for SDL and GL so the bootstrap can run headless.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use crate::config::{ClearColor, WindowConfig};
use crate::error::BootstrapError;
use crate::glutils::{Gl, GlVersion};
use crate::platform::{Backend, Key, ResizeDispatch, Surface};
use crate::viewport::Viewport;

#[derive(Debug, Clone, PartialEq)]
pub enum Trace {
    Viewport(Viewport),
    ClearColor(ClearColor),
    Clear,
    Swap,
    Poll,
    DestroyWindow,
    Terminate,
}

/// Shared, ordered record of everything the fakes were asked to do.
#[derive(Debug, Clone, Default)]
pub struct Journal(Rc<RefCell<Vec<Trace>>>);

impl Journal {
    pub fn push(&self, trace: Trace) {
        self.0.borrow_mut().push(trace);
    }

    pub fn entries(&self) -> Vec<Trace> {
        self.0.borrow().clone()
    }
}

/// Events delivered by one `poll_events` call.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptedEvent {
    Resize(u32, u32),
    PressEscape,
    CloseRequested,
}

#[derive(Clone)]
pub struct RecordingGl {
    journal: Journal,
}

impl RecordingGl {
    pub fn new(journal: Journal) -> RecordingGl {
        RecordingGl { journal }
    }
}

impl Gl for RecordingGl {
    fn viewport(&self, vp: Viewport) {
        self.journal.push(Trace::Viewport(vp));
    }

    fn clear_color(&self, color: ClearColor) {
        self.journal.push(Trace::ClearColor(color));
    }

    fn clear_color_buffer(&self) {
        self.journal.push(Trace::Clear);
    }
}

pub struct FakeSurface {
    journal: Journal,
    script: VecDeque<Vec<ScriptedEvent>>,
    framebuffer: (u32, u32),
    resize: ResizeDispatch,
    escape_down: bool,
    should_close: bool,
}

impl FakeSurface {
    pub fn new(
        journal: Journal,
        framebuffer: (u32, u32),
        script: Vec<Vec<ScriptedEvent>>,
    ) -> FakeSurface {
        FakeSurface {
            journal,
            script: script.into(),
            framebuffer,
            resize: ResizeDispatch::default(),
            escape_down: false,
            should_close: false,
        }
    }

    pub fn hold_escape(&mut self, down: bool) {
        self.escape_down = down;
    }
}

impl Surface for FakeSurface {
    fn make_current(&mut self) -> Result<(), BootstrapError> {
        Ok(())
    }

    fn resize_dispatch(&mut self) -> &mut ResizeDispatch {
        &mut self.resize
    }

    fn framebuffer_size(&self) -> (u32, u32) {
        self.framebuffer
    }

    fn should_close(&self) -> bool {
        self.should_close
    }

    fn set_should_close(&mut self, value: bool) {
        self.should_close = value;
    }

    fn is_key_pressed(&self, key: Key) -> bool {
        match key {
            Key::Escape => self.escape_down,
        }
    }

    fn swap_buffers(&mut self) {
        self.journal.push(Trace::Swap);
    }

    fn poll_events(&mut self) {
        self.journal.push(Trace::Poll);
        let events = self
            .script
            .pop_front()
            .expect("frame loop polled past the end of the event script");
        for event in events {
            match event {
                ScriptedEvent::Resize(w, h) => {
                    self.framebuffer = (w, h);
                    self.resize.queue(w, h);
                }
                ScriptedEvent::PressEscape => self.escape_down = true,
                ScriptedEvent::CloseRequested => self.should_close = true,
            }
        }
        self.resize.flush();
    }
}

impl Drop for FakeSurface {
    fn drop(&mut self) {
        self.journal.push(Trace::DestroyWindow);
    }
}

/// Read side of a [`FakeBackend`], usable after the backend was moved away.
pub struct Probe {
    pub journal: Journal,
    terminations: Rc<Cell<u32>>,
    windows: Rc<RefCell<Vec<(u32, u32, String)>>>,
}

impl Probe {
    pub fn terminations(&self) -> u32 {
        self.terminations.get()
    }

    pub fn windows(&self) -> Vec<(u32, u32, String)> {
        self.windows.borrow().clone()
    }
}

pub struct FakeBackend {
    pub fail_window: bool,
    pub fail_load: bool,
    journal: Journal,
    script: RefCell<Vec<Vec<ScriptedEvent>>>,
    terminations: Rc<Cell<u32>>,
    windows: Rc<RefCell<Vec<(u32, u32, String)>>>,
}

impl FakeBackend {
    pub fn new(script: Vec<Vec<ScriptedEvent>>) -> (FakeBackend, Probe) {
        let journal = Journal::default();
        let terminations = Rc::new(Cell::new(0));
        let windows = Rc::new(RefCell::new(Vec::new()));
        let probe = Probe {
            journal: journal.clone(),
            terminations: terminations.clone(),
            windows: windows.clone(),
        };
        let backend = FakeBackend {
            fail_window: false,
            fail_load: false,
            journal,
            script: RefCell::new(script),
            terminations,
            windows,
        };
        (backend, probe)
    }
}

impl Backend for FakeBackend {
    type Surface = FakeSurface;
    type Gl = RecordingGl;

    fn create_window(&self, config: &WindowConfig) -> Result<FakeSurface, BootstrapError> {
        if self.fail_window {
            return Err(BootstrapError::WindowCreationFailed(
                "injected failure".to_string(),
            ));
        }
        self.windows
            .borrow_mut()
            .push((config.width, config.height, config.title.clone()));
        Ok(FakeSurface::new(
            self.journal.clone(),
            (config.width, config.height),
            self.script.take(),
        ))
    }

    fn load_gl(&self, _surface: &FakeSurface) -> Result<(RecordingGl, GlVersion), BootstrapError> {
        if self.fail_load {
            return Err(BootstrapError::GraphicsLoadFailed);
        }
        Ok((
            RecordingGl::new(self.journal.clone()),
            GlVersion { major: 4, minor: 5 },
        ))
    }
}

impl Drop for FakeBackend {
    fn drop(&mut self) {
        self.terminations.set(self.terminations.get() + 1);
        self.journal.push(Trace::Terminate);
    }
}
