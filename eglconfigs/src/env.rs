//! The off-screen rendering environment used to read the GL strings.

use eglconfigs_sys::egl;
use eglconfigs_sys::egl::types::EGLint;

use crate::config::EnvTemplate;
use crate::display::Display;
use crate::driver::{Driver, RawConfig, RawContext, RawSurface};
use crate::error::Result;

/// A pbuffer surface with a context current on it.
///
/// Whatever was acquired is released on drop, including when [`GlEnv::new`]
/// bails out half way.
#[derive(Debug)]
pub struct GlEnv<'a, 'd, D: Driver> {
    display: &'a Display<'d, D>,
    config: RawConfig,
    surface: Option<RawSurface>,
    context: Option<RawContext>,
    current: bool,
    width: EGLint,
    height: EGLint,
}

impl<'a, 'd, D: Driver> GlEnv<'a, 'd, D> {
    /// Choose a config for `template`, create the surface and context, and
    /// make them current.
    pub fn new(display: &'a Display<'d, D>, template: &EnvTemplate) -> Result<Self> {
        let driver = display.driver();
        let raw_display = display.raw_display();

        let config = driver.choose_config(raw_display, &template.config_attributes())?;

        let mut env = Self {
            display,
            config,
            surface: None,
            context: None,
            current: false,
            width: 0,
            height: 0,
        };

        let surface =
            driver.create_pbuffer_surface(raw_display, config, &template.pbuffer_attributes())?;
        env.surface = Some(surface);

        let context = driver.create_context(raw_display, config, &template.context_attributes())?;
        env.context = Some(context);

        driver.make_current(raw_display, Some(surface), Some(context))?;
        env.current = true;

        env.width = driver.query_surface(raw_display, surface, egl::WIDTH as EGLint).unwrap_or(0);
        env.height = driver.query_surface(raw_display, surface, egl::HEIGHT as EGLint).unwrap_or(0);

        Ok(env)
    }

    pub fn display(&self) -> &'a Display<'d, D> {
        self.display
    }

    /// The configuration the surface and context were created with.
    pub fn config(&self) -> RawConfig {
        self.config
    }

    /// Surface size as reported by `eglQuerySurface`, zero when unknown.
    pub fn dimensions(&self) -> (EGLint, EGLint) {
        (self.width, self.height)
    }
}

impl<D: Driver> Drop for GlEnv<'_, '_, D> {
    fn drop(&mut self) {
        let driver = self.display.driver();
        let raw_display = self.display.raw_display();

        if self.current {
            if let Err(err) = driver.make_current(raw_display, None, None) {
                log::error!("failed to release the current context: {err}");
            }
        }

        if let Some(surface) = self.surface.take() {
            driver.destroy_surface(raw_display, surface);
        }

        if let Some(context) = self.context.take() {
            driver.destroy_context(raw_display, context);
        }
    }
}
