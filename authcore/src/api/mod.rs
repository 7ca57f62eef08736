//! 백엔드 API 포트

pub mod backend;

pub use backend::{AuthBackend, HttpAuthBackend};
