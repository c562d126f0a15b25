use sdl2::video::GLProfile;

// settings
pub const WIN_WIDTH: u32 = 800;
pub const WIN_HEIGHT: u32 = 600;
pub const WIN_TITLE: &str = "LearnOpenGL";
pub const GL_VERSION: (u8, u8) = (4, 5);
pub const CLEAR_COLOR: ClearColor = ClearColor::new(0.2, 0.3, 0.3, 1.0);

/// RGBA, each channel normalized to 0..=1.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ClearColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl ClearColor {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> ClearColor {
        ClearColor { r, g, b, a }
    }
}

/// Everything the bootstrap needs to know before the window exists.
///
/// The version and profile are creation hints: they only apply to the next
/// window created with this config.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub gl_version: (u8, u8),
    pub gl_profile: GLProfile,
    pub clear_color: ClearColor,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            width: WIN_WIDTH,
            height: WIN_HEIGHT,
            title: WIN_TITLE.to_string(),
            gl_version: GL_VERSION,
            gl_profile: GLProfile::Core,
            clear_color: CLEAR_COLOR,
        }
    }
}
