use super::config::ClearColor;
use super::glutils::Gl;
use super::platform::{Key, Surface};

/// Query relevant keys for this frame and react. Escape only raises the close
/// flag; the loop notices it at the next iteration boundary.
pub fn process_input<S: Surface>(surface: &mut S) {
    if surface.is_key_pressed(Key::Escape) {
        surface.set_should_close(true);
    }
}

/// Runs until the surface's close flag is set and returns the number of
/// frames presented.
pub fn run_frame_loop<S: Surface, G: Gl>(surface: &mut S, gl: &G, clear_color: ClearColor) -> u64 {
    let mut frames = 0u64;
    while !surface.should_close() {
        process_input(surface);

        // state-setting, then state-using
        gl.clear_color(clear_color);
        gl.clear_color_buffer();

        surface.swap_buffers();
        surface.poll_events();
        frames += 1;
    }
    frames
}
