/// Maps normalized device coordinates (-1..1) onto a pixel rectangle of the
/// framebuffer. Arguments are in the order `glViewport` takes them.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Viewport {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Viewport {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Viewport {
        Viewport {
            x,
            y,
            width,
            height,
        }
    }

    /// Full-framebuffer viewport: origin at the lower-left corner, extent
    /// equal to the framebuffer's pixel size.
    pub fn from_framebuffer(width: u32, height: u32) -> Viewport {
        Viewport::new(0, 0, clamp_to_i32(width), clamp_to_i32(height))
    }
}

fn clamp_to_i32(v: u32) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}
