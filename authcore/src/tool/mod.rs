//! 공용 도구 모듈

pub mod error;

pub use error::{AppError, ErrorSeverity};
