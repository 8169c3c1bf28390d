//! Everything related to `EGLDisplay`.

use eglconfigs_sys::egl::types::{EGLenum, EGLint};

use crate::config::Attribute;
use crate::driver::{Driver, RawConfig, RawDisplay, Version};
use crate::error::Result;

/// An initialized default display, terminated on drop.
#[derive(Debug)]
pub struct Display<'d, D: Driver> {
    driver: &'d D,
    raw: RawDisplay,
    version: Version,
}

impl<'d, D: Driver> Display<'d, D> {
    /// Acquire and initialize the default display of `driver`.
    pub fn new(driver: &'d D) -> Result<Self> {
        let raw = driver.get_display()?;
        let version = driver.initialize(raw)?;
        log::info!("EGL version {version}");

        Ok(Self { driver, raw, version })
    }

    /// The EGL version reported by `eglInitialize`.
    #[inline]
    pub fn version(&self) -> Version {
        self.version
    }

    #[inline]
    pub fn raw_display(&self) -> RawDisplay {
        self.raw
    }

    #[inline]
    pub fn driver(&self) -> &'d D {
        self.driver
    }

    /// Read `attribute` of `config`.
    pub fn config_attrib(&self, config: RawConfig, attribute: &Attribute) -> Result<EGLint> {
        self.driver.config_attrib(self.raw, config, attribute.id as EGLint)
    }

    /// `eglQueryString` for this display.
    pub fn query_string(&self, name: EGLenum) -> Option<String> {
        self.driver.query_string(self.raw, name)
    }
}

impl<D: Driver> Drop for Display<'_, D> {
    fn drop(&mut self) {
        self.driver.terminate(self.raw);
    }
}
