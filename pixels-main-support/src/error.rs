use error_iter::ErrorIter as _;
use log::error;
use thiserror::Error;
use winit::error::{EventLoopError, OsError};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("event loop failed")]
    EventLoop(#[from] EventLoopError),
    #[error("could not create the window")]
    Window(#[from] OsError),
    #[error("pixel surface failed")]
    Pixels(#[from] pixels::Error),
    #[error("could not resize the pixel surface")]
    Resize(#[from] pixels::TextureError),
}

pub(crate) fn log_error<E: std::error::Error + 'static>(method_name: &str, err: &E) {
    error!("{method_name}() failed: {err}");
    for source in err.sources().skip(1) {
        error!("  Caused by: {source}");
    }
}
