//! The underlying OpenGL platform Api.

#[cfg(egl_backend)]
pub mod egl;
