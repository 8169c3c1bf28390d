//! Lists the EGL framebuffer configurations of a platform.
//!
//! A run initializes the default [`Display`], prints every `EGLConfig` it
//! advertises through a [`ConfigEnumerator`] and an [`AttributeReporter`],
//! then builds a [`GlEnv`] on a pbuffer surface to print the EGL and GL
//! vendor, version and extension strings. [`list_configs`] performs the whole
//! run; [`host`] wraps it in the init/step/uninit hooks of an application
//! shell.
//!
//! All the calls into EGL go through the [`Driver`] trait. The system
//! implementation is [`api::egl::Egl`], which opens `libEGL` at runtime.
//!
//! ```no_run
//! use eglconfigs::api::egl::Egl;
//! use eglconfigs::{list_configs, EnvTemplate, LogSink};
//!
//! let egl = Egl::system()?;
//! let mut sink = LogSink::new(std::io::stdout());
//! list_configs(egl, &EnvTemplate::default(), &mut sink)?;
//! # Ok::<(), eglconfigs::error::Error>(())
//! ```
//!
//! [`host`]: crate::host

#![deny(missing_debug_implementations)]

pub mod api;
pub mod config;
pub mod display;
pub mod driver;
pub mod enumerate;
pub mod env;
pub mod error;
pub mod host;
pub mod listing;
pub mod report;

#[cfg(egl_backend)]
mod lib_loading;

pub use crate::config::{EnvTemplate, EnvTemplateBuilder};
pub use crate::display::Display;
pub use crate::driver::Driver;
pub use crate::enumerate::ConfigEnumerator;
pub use crate::env::GlEnv;
pub use crate::listing::list_configs;
pub use crate::report::{AttributeReporter, LogSink, ReportSink};
