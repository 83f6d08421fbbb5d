use thiserror::Error;

#[derive(Error, Debug)]
pub enum TimerError {
    #[error("window error: {0}")]
    Window(#[from] eframe::Error),
    #[error("could not start ticker thread: {0}")]
    Ticker(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TimerError>;
