pub mod bootstrap;
pub mod config;
pub mod error;
pub mod frame_loop;
pub mod glutils;
pub mod logging;
pub mod platform;
pub mod system;
pub mod viewport;

#[cfg(test)]
mod testing;
