//! A scripted in-memory EGL used by the integration tests.
#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use eglconfigs::driver::{Driver, RawConfig, RawContext, RawDisplay, RawSurface, Version};
use eglconfigs::error::{ErrorKind, Result};
use eglconfigs_sys::egl::types::{EGLenum, EGLint};
use eglconfigs_sys::gles::types::GLenum;
use eglconfigs_sys::{egl, gles};

/// Driver call that can be made to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    GetDisplay,
    Initialize,
    ConfigCount,
    Configs,
    ChooseConfig,
    CreateSurface,
    CreateContext,
    MakeCurrent,
}

impl Step {
    fn error_kind(self) -> ErrorKind {
        match self {
            Step::GetDisplay => ErrorKind::DisplayUnavailable,
            Step::Initialize => ErrorKind::InitializationFailed,
            Step::ConfigCount | Step::Configs => ErrorKind::QueryFailed,
            Step::ChooseConfig => ErrorKind::ConfigSelectionFailed,
            Step::CreateSurface => ErrorKind::SurfaceCreationFailed,
            Step::CreateContext => ErrorKind::ContextCreationFailed,
            Step::MakeCurrent => ErrorKind::BindFailed,
        }
    }
}

const DISPLAY: usize = 0x10;
const SURFACE: usize = 0x20;
const CONTEXT: usize = 0x30;

/// Attribute values of a single configuration. Attributes missing from the map
/// fail to query.
pub type FakeConfig = HashMap<EGLenum, EGLint>;

/// A typical RGBA8888 window/pbuffer config with depth and stencil.
pub fn rgba8888(config_id: EGLint) -> FakeConfig {
    [
        (egl::BUFFER_SIZE, 32),
        (egl::ALPHA_SIZE, 8),
        (egl::BLUE_SIZE, 8),
        (egl::GREEN_SIZE, 8),
        (egl::RED_SIZE, 8),
        (egl::DEPTH_SIZE, 24),
        (egl::STENCIL_SIZE, 8),
        (egl::CONFIG_CAVEAT, egl::NONE as EGLint),
        (egl::CONFIG_ID, config_id),
        (egl::LEVEL, 0),
        (egl::MAX_PBUFFER_HEIGHT, 8192),
        (egl::MAX_PBUFFER_PIXELS, 67108864),
        (egl::MAX_PBUFFER_WIDTH, 8192),
        (egl::NATIVE_RENDERABLE, 1),
        (egl::NATIVE_VISUAL_ID, 1),
        (egl::NATIVE_VISUAL_TYPE, -1),
        (egl::SAMPLES, 0),
        (egl::SAMPLE_BUFFERS, 0),
        (egl::SURFACE_TYPE, (egl::WINDOW_BIT | egl::PBUFFER_BIT) as EGLint),
        (egl::TRANSPARENT_TYPE, egl::NONE as EGLint),
        (egl::TRANSPARENT_RED_VALUE, 0),
        (egl::TRANSPARENT_GREEN_VALUE, 0),
        (egl::TRANSPARENT_BLUE_VALUE, 0),
        (egl::BIND_TO_TEXTURE_RGB, 0),
        (egl::BIND_TO_TEXTURE_RGBA, 1),
        (egl::MIN_SWAP_INTERVAL, 0),
        (egl::MAX_SWAP_INTERVAL, 1),
        (egl::LUMINANCE_SIZE, 0),
        (egl::ALPHA_MASK_SIZE, 0),
        (egl::COLOR_BUFFER_TYPE, egl::RGB_BUFFER as EGLint),
        (egl::RENDERABLE_TYPE, (egl::OPENGL_ES2_BIT | egl::OPENGL_ES3_BIT) as EGLint),
        (egl::CONFORMANT, (egl::OPENGL_ES2_BIT | egl::OPENGL_ES3_BIT) as EGLint),
    ]
    .into_iter()
    .collect()
}

#[derive(Debug, Default)]
pub struct FakeDriver {
    pub configs: Vec<FakeConfig>,
    /// Answer to the count probe, the real number of configs when `None`.
    pub probe_count: Option<usize>,
    /// Call that fails.
    pub fail: Option<Step>,
    /// Attribute lists passed to `choose_config`, surface and context creation.
    pub attrib_lists: RefCell<Vec<Vec<EGLint>>>,
    pub initialized: Cell<u32>,
    pub terminated: Cell<u32>,
    pub live_surfaces: Cell<i32>,
    pub live_contexts: Cell<i32>,
    pub current: Cell<bool>,
}

impl FakeDriver {
    pub fn new(configs: Vec<FakeConfig>) -> Self {
        Self { configs, ..Default::default() }
    }

    pub fn with_configs(count: usize) -> Self {
        Self::new((0..count).map(|index| rgba8888(index as EGLint + 1)).collect())
    }

    pub fn failing_at(mut self, step: Step) -> Self {
        self.fail = Some(step);
        self
    }

    /// Nothing acquired from the driver is still alive.
    pub fn all_released(&self) -> bool {
        self.live_surfaces.get() == 0
            && self.live_contexts.get() == 0
            && !self.current.get()
            && self.terminated.get() == self.initialized.get()
    }

    fn check(&self, step: Step) -> Result<()> {
        match self.fail {
            Some(fail) if fail == step => Err(step.error_kind().into()),
            _ => Ok(()),
        }
    }

    fn config_index(config: RawConfig) -> usize {
        config.as_raw() as usize - 1
    }
}

impl Driver for FakeDriver {
    fn get_display(&self) -> Result<RawDisplay> {
        self.check(Step::GetDisplay)?;
        Ok(RawDisplay::from_addr(DISPLAY))
    }

    fn initialize(&self, display: RawDisplay) -> Result<Version> {
        assert_eq!(display, RawDisplay::from_addr(DISPLAY));
        self.check(Step::Initialize)?;
        self.initialized.set(self.initialized.get() + 1);
        Ok(Version::new(1, 4))
    }

    fn config_count(&self, _display: RawDisplay) -> Result<usize> {
        self.check(Step::ConfigCount)?;
        Ok(self.probe_count.unwrap_or(self.configs.len()))
    }

    fn configs(&self, _display: RawDisplay, configs: &mut [RawConfig]) -> Result<usize> {
        self.check(Step::Configs)?;
        let written = configs.len().min(self.configs.len());
        for (index, config) in configs.iter_mut().take(written).enumerate() {
            *config = RawConfig::from_addr(index + 1);
        }
        Ok(written)
    }

    fn config_attrib(
        &self,
        _display: RawDisplay,
        config: RawConfig,
        attrib: EGLint,
    ) -> Result<EGLint> {
        self.configs[Self::config_index(config)]
            .get(&(attrib as EGLenum))
            .copied()
            .ok_or_else(|| ErrorKind::QueryFailed.into())
    }

    fn choose_config(&self, _display: RawDisplay, attribs: &[EGLint]) -> Result<RawConfig> {
        self.attrib_lists.borrow_mut().push(attribs.to_vec());
        self.check(Step::ChooseConfig)?;
        if self.configs.is_empty() {
            return Err(ErrorKind::ConfigSelectionFailed.into());
        }
        Ok(RawConfig::from_addr(1))
    }

    fn create_pbuffer_surface(
        &self,
        _display: RawDisplay,
        _config: RawConfig,
        attribs: &[EGLint],
    ) -> Result<RawSurface> {
        self.attrib_lists.borrow_mut().push(attribs.to_vec());
        self.check(Step::CreateSurface)?;
        self.live_surfaces.set(self.live_surfaces.get() + 1);
        Ok(RawSurface::from_addr(SURFACE))
    }

    fn create_context(
        &self,
        _display: RawDisplay,
        _config: RawConfig,
        attribs: &[EGLint],
    ) -> Result<RawContext> {
        self.attrib_lists.borrow_mut().push(attribs.to_vec());
        self.check(Step::CreateContext)?;
        self.live_contexts.set(self.live_contexts.get() + 1);
        Ok(RawContext::from_addr(CONTEXT))
    }

    fn make_current(
        &self,
        _display: RawDisplay,
        surface: Option<RawSurface>,
        context: Option<RawContext>,
    ) -> Result<()> {
        if context.is_none() {
            assert!(surface.is_none());
            self.current.set(false);
            return Ok(());
        }

        self.check(Step::MakeCurrent)?;
        self.current.set(true);
        Ok(())
    }

    fn query_surface(
        &self,
        _display: RawDisplay,
        surface: RawSurface,
        attrib: EGLint,
    ) -> Result<EGLint> {
        assert_eq!(surface, RawSurface::from_addr(SURFACE));
        match attrib as EGLenum {
            egl::WIDTH | egl::HEIGHT => Ok(1),
            _ => Err(ErrorKind::QueryFailed.into()),
        }
    }

    fn query_string(&self, _display: RawDisplay, name: EGLenum) -> Option<String> {
        match name {
            egl::VENDOR => Some("Fake Vendor".into()),
            egl::VERSION => Some("1.4 fake".into()),
            egl::CLIENT_APIS => Some("OpenGL_ES".into()),
            egl::EXTENSIONS => Some("EGL_KHR_image_base EGL_KHR_fence_sync".into()),
            _ => None,
        }
    }

    fn gl_string(&self, name: GLenum) -> Option<String> {
        assert!(self.current.get(), "glGetString without a current context");
        match name {
            gles::VERSION => Some("OpenGL ES 3.2 fake".into()),
            gles::VENDOR => Some("Fake Vendor".into()),
            gles::RENDERER => Some("Fake Renderer".into()),
            _ => None,
        }
    }

    fn destroy_surface(&self, _display: RawDisplay, surface: RawSurface) {
        assert_eq!(surface, RawSurface::from_addr(SURFACE));
        self.live_surfaces.set(self.live_surfaces.get() - 1);
    }

    fn destroy_context(&self, _display: RawDisplay, context: RawContext) {
        assert_eq!(context, RawContext::from_addr(CONTEXT));
        self.live_contexts.set(self.live_contexts.get() - 1);
    }

    fn terminate(&self, display: RawDisplay) {
        assert_eq!(display, RawDisplay::from_addr(DISPLAY));
        self.terminated.set(self.terminated.get() + 1);
    }
}

/// The `N` of every `Configuration N` line, in output order.
pub fn configuration_markers(lines: &[String]) -> Vec<usize> {
    lines.iter().filter_map(|line| line.strip_prefix("Configuration ")?.parse().ok()).collect()
}

/// The lines of the block printed for configuration `index`, without its marker.
pub fn config_block(lines: &[String], index: usize) -> Vec<String> {
    let marker = format!("Configuration {index}");
    lines
        .iter()
        .skip_while(|line| **line != marker)
        .skip(1)
        .take_while(|line| !line.is_empty())
        .cloned()
        .collect()
}
