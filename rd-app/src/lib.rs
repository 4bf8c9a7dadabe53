pub mod app;
pub mod error;
pub mod logger;

pub use app::App;
pub use error::{AppError, Result};
