use thiserror::Error;

/// Everything that can stop the bootstrap before or while it opens the window.
///
/// None of these are recoverable; `main` prints the message and exits with
/// [`BootstrapError::exit_code`].
#[derive(Error, Debug)]
pub enum BootstrapError {
    #[error("Failed to initialize windowing library: {0}")]
    Init(String),

    #[error("Failed to create window")]
    WindowCreationFailed(String),

    #[error("Failed to make OpenGL context current: {0}")]
    MakeCurrent(String),

    #[error("Failed to initialize OpenGL context")]
    GraphicsLoadFailed,

    #[error("Failed to acquire event pump: {0}")]
    EventPump(String),
}

impl BootstrapError {
    pub fn exit_code(&self) -> i32 {
        -1
    }
}
