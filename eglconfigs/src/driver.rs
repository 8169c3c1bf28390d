//! The EGL driver surface the listing consumes.
//!
//! [`Driver`] is implemented by [`crate::api::egl::Egl`] for the system
//! library. Every handle is an opaque copy of the driver pointer; the driver
//! owns the objects behind them.

use std::fmt;

use eglconfigs_sys::egl::types::{EGLenum, EGLint};
use eglconfigs_sys::gles::types::GLenum;
use eglconfigs_sys::{EGLConfig, EGLContext, EGLDisplay, EGLSurface};

use crate::error::Result;

macro_rules! raw_handle {
    ($(#[$attr:meta])* $name:ident, $raw:ty) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(transparent)]
        pub struct $name($raw);

        impl $name {
            /// Wrap a raw driver pointer.
            #[inline]
            pub fn from_raw(raw: $raw) -> Self {
                Self(raw)
            }

            /// Build a handle from a plain address.
            #[inline]
            pub fn from_addr(addr: usize) -> Self {
                Self(addr as $raw)
            }

            /// The raw driver pointer.
            #[inline]
            pub fn as_raw(self) -> $raw {
                self.0
            }
        }
    };
}

raw_handle!(
    /// An `EGLDisplay`.
    RawDisplay,
    EGLDisplay
);
raw_handle!(
    /// An `EGLConfig`.
    RawConfig,
    EGLConfig
);
raw_handle!(
    /// An `EGLSurface`.
    RawSurface,
    EGLSurface
);
raw_handle!(
    /// An `EGLContext`.
    RawContext,
    EGLContext
);

impl RawConfig {
    /// Placeholder used to fill a buffer before the driver writes into it.
    pub const NONE: RawConfig = RawConfig(std::ptr::null());
}

/// The version pair returned by `eglInitialize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    /// Major version of the Api.
    pub major: u8,
    /// Minor version of the Api.
    pub minor: u8,
}

impl Version {
    /// Create new version with the given `major` and `minor` values.
    pub const fn new(major: u8, minor: u8) -> Self {
        Self { major, minor }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Calls into the EGL and GLES implementation.
///
/// Attribute lists passed in are terminated with `EGL_NONE`.
pub trait Driver {
    /// Acquire the default display.
    fn get_display(&self) -> Result<RawDisplay>;

    /// Initialize the display and return the EGL version it supports.
    fn initialize(&self, display: RawDisplay) -> Result<Version>;

    /// Total number of configurations, as answered by a zero capacity probe.
    fn config_count(&self, display: RawDisplay) -> Result<usize>;

    /// Fill `configs` with up to `configs.len()` configurations and return how
    /// many were written.
    fn configs(&self, display: RawDisplay, configs: &mut [RawConfig]) -> Result<usize>;

    /// Read a single integer attribute of `config`.
    ///
    /// Fails unless the call returned `EGL_TRUE` and left `EGL_SUCCESS` as the
    /// error status.
    fn config_attrib(&self, display: RawDisplay, config: RawConfig, attrib: EGLint)
        -> Result<EGLint>;

    /// Pick the first configuration matching `attribs`.
    fn choose_config(&self, display: RawDisplay, attribs: &[EGLint]) -> Result<RawConfig>;

    fn create_pbuffer_surface(
        &self,
        display: RawDisplay,
        config: RawConfig,
        attribs: &[EGLint],
    ) -> Result<RawSurface>;

    fn create_context(
        &self,
        display: RawDisplay,
        config: RawConfig,
        attribs: &[EGLint],
    ) -> Result<RawContext>;

    /// Bind `context` with `surface` for both drawing and reading. Passing
    /// `None` for both releases the current binding.
    fn make_current(
        &self,
        display: RawDisplay,
        surface: Option<RawSurface>,
        context: Option<RawContext>,
    ) -> Result<()>;

    fn query_surface(&self, display: RawDisplay, surface: RawSurface, attrib: EGLint)
        -> Result<EGLint>;

    /// `eglQueryString`, `None` when the driver returns a null pointer.
    fn query_string(&self, display: RawDisplay, name: EGLenum) -> Option<String>;

    /// `glGetString` on the current context.
    fn gl_string(&self, name: GLenum) -> Option<String>;

    fn destroy_surface(&self, display: RawDisplay, surface: RawSurface);

    fn destroy_context(&self, display: RawDisplay, context: RawContext);

    fn terminate(&self, display: RawDisplay);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_compare_by_address() {
        assert_eq!(RawConfig::from_addr(3), RawConfig::from_addr(3));
        assert_ne!(RawConfig::from_addr(3), RawConfig::from_addr(4));
        assert!(RawConfig::NONE.as_raw().is_null());
    }

    #[test]
    fn handles_share_the_pointer_layout() {
        use std::mem::{align_of, size_of};

        assert_eq!(size_of::<RawConfig>(), size_of::<EGLConfig>());
        assert_eq!(align_of::<RawConfig>(), align_of::<EGLConfig>());

        let mut configs = [RawConfig::NONE; 2];
        let raw = configs.as_mut_ptr().cast::<EGLConfig>();
        unsafe { raw.add(1).write(RawConfig::from_addr(7).as_raw()) };
        assert_eq!(configs, [RawConfig::NONE, RawConfig::from_addr(7)]);
    }

    #[test]
    fn version_display() {
        assert_eq!(Version::new(1, 4).to_string(), "1.4");
        assert!(Version::new(1, 5) > Version::new(1, 4));
    }
}
