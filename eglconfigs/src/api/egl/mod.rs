//! EGL platform Api.
//!
//! The system `libEGL` and `libGLESv2` are opened at runtime and exposed as a
//! [`Driver`].
#![allow(clippy::unnecessary_cast)] // needed for 32bit & 64bit support

use std::ffi::{self, CStr, CString};
use std::fmt;
use std::ops::Deref;
use std::os::raw::c_char;
use std::ptr;

use libloading::Library;
use once_cell::sync::{Lazy, OnceCell};

use eglconfigs_sys::egl::types::{EGLenum, EGLint};
use eglconfigs_sys::gles::types::GLenum;
use eglconfigs_sys::{egl, gles};

use crate::driver::{Driver, RawConfig, RawContext, RawDisplay, RawSurface, Version};
use crate::error::{Error, ErrorKind, Result};
use crate::lib_loading::{SymLoading, SymWrapper};

#[cfg(windows)]
const EGL_PATHS: &[&str] = &["libEGL.dll", "atioglxx.dll"];
#[cfg(android_platform)]
const EGL_PATHS: &[&str] = &["libEGL.so"];
#[cfg(free_unix)]
const EGL_PATHS: &[&str] = &["libEGL.so.1", "libEGL.so"];

#[cfg(windows)]
const GLES_PATHS: &[&str] = &["libGLESv2.dll"];
#[cfg(android_platform)]
const GLES_PATHS: &[&str] = &["libGLESv2.so"];
#[cfg(free_unix)]
const GLES_PATHS: &[&str] = &["libGLESv2.so.2", "libGLESv2.so"];

/// The system EGL, `None` when the library could not be opened.
pub static EGL: Lazy<Option<Egl>> = Lazy::new(|| unsafe { SymWrapper::new(EGL_PATHS).map(Egl) });

type EglGetProcAddress = unsafe extern "system" fn(*const c_char) -> *const ffi::c_void;

impl SymLoading for egl::Egl {
    unsafe fn load_with(lib: &Library) -> Self {
        let get_proc_address = lib
            .get::<EglGetProcAddress>(b"eglGetProcAddress\0")
            .ok()
            .map(|sym| *sym);

        egl::Egl::load_with(|sym| load_symbol(lib, sym, get_proc_address))
    }
}

impl SymLoading for gles::Gles2 {
    unsafe fn load_with(lib: &Library) -> Self {
        let egl = EGL.as_ref().filter(|egl| egl.GetProcAddress.is_loaded());

        gles::Gles2::load_with(|sym| {
            let addr = load_symbol(lib, sym, None);
            match (egl, CString::new(sym)) {
                (Some(egl), Ok(sym)) if addr.is_null() => {
                    egl.GetProcAddress(sym.as_ptr()) as *const _
                },
                _ => addr,
            }
        })
    }
}

/// Look the symbol up in the library itself and fall back to
/// `eglGetProcAddress` for the ones only exposed through it.
unsafe fn load_symbol(
    lib: &Library,
    sym: &str,
    get_proc_address: Option<EglGetProcAddress>,
) -> *const ffi::c_void {
    let sym = match CString::new(sym) {
        Ok(sym) => sym,
        Err(_) => return ptr::null(),
    };

    if let Ok(sym) = lib.get::<*const ffi::c_void>(sym.as_bytes_with_nul()) {
        return *sym;
    }

    match get_proc_address {
        Some(get_proc_address) => get_proc_address(sym.as_ptr()),
        None => ptr::null(),
    }
}

/// The system EGL implementation.
pub struct Egl(SymWrapper<egl::Egl>);

unsafe impl Sync for Egl {}
unsafe impl Send for Egl {}

impl fmt::Debug for Egl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Egl").finish_non_exhaustive()
    }
}

impl Deref for Egl {
    type Target = egl::Egl;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// The GLES library matching the system EGL.
struct Gles(SymWrapper<gles::Gles2>);

unsafe impl Sync for Gles {}
unsafe impl Send for Gles {}

impl Deref for Gles {
    type Target = gles::Gles2;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Egl {
    /// The process wide EGL.
    pub fn system() -> Result<&'static Egl> {
        EGL.as_ref().ok_or_else(|| ErrorKind::NotFound.into())
    }

    fn gles(&self) -> Option<&Gles> {
        static GLES: OnceCell<Option<Gles>> = OnceCell::new();
        GLES.get_or_init(|| unsafe { SymWrapper::new(GLES_PATHS).map(Gles) }).as_ref()
    }

    /// Turn the pending EGL error into an [`Error`] of the given `kind`.
    ///
    /// Returns `Ok` when `eglGetError` reports `EGL_SUCCESS`.
    fn check_error(&self, kind: ErrorKind) -> Result<()> {
        let raw_code = unsafe { self.GetError() } as EGLenum;
        if raw_code == egl::SUCCESS {
            return Ok(());
        }

        Err(Error::new(Some(raw_code as i64), Some(error_name(raw_code).into()), kind))
    }

    /// Error for a call that reported failure; the error status is attached when
    /// the driver set one.
    fn last_error(&self, kind: ErrorKind) -> Error {
        self.check_error(kind).err().unwrap_or_else(|| kind.into())
    }
}

impl Driver for Egl {
    fn get_display(&self) -> Result<RawDisplay> {
        let display = unsafe { self.GetDisplay(egl::DEFAULT_DISPLAY) };
        if display == egl::NO_DISPLAY {
            log::debug!("eglGetDisplay returned EGL_NO_DISPLAY.");
            return Err(self.last_error(ErrorKind::DisplayUnavailable));
        }

        Ok(RawDisplay::from_raw(display))
    }

    fn initialize(&self, display: RawDisplay) -> Result<Version> {
        let (mut major, mut minor) = (0, 0);
        if unsafe { self.Initialize(display.as_raw(), &mut major, &mut minor) } == egl::FALSE {
            log::debug!("eglInitialize failed");
            return Err(self.last_error(ErrorKind::InitializationFailed));
        }

        Ok(Version::new(major as u8, minor as u8))
    }

    fn config_count(&self, display: RawDisplay) -> Result<usize> {
        let mut num_configs = 0;
        let result =
            unsafe { self.GetConfigs(display.as_raw(), ptr::null_mut(), 0, &mut num_configs) };
        if result == egl::FALSE {
            log::debug!("eglGetConfigs fail");
            return Err(self.last_error(ErrorKind::QueryFailed));
        }

        Ok(num_configs.max(0) as usize)
    }

    fn configs(&self, display: RawDisplay, configs: &mut [RawConfig]) -> Result<usize> {
        let capacity = EGLint::try_from(configs.len()).unwrap_or(EGLint::MAX);
        let mut num_configs = 0;
        let raw_configs = configs.as_mut_ptr().cast();
        let result =
            unsafe { self.GetConfigs(display.as_raw(), raw_configs, capacity, &mut num_configs) };
        if result == egl::FALSE {
            let err = self.last_error(ErrorKind::QueryFailed);
            log::error!("eglGetConfigs() returned {result}: {err}");
            return Err(err);
        }

        Ok((num_configs.max(0) as usize).min(configs.len()))
    }

    fn config_attrib(
        &self,
        display: RawDisplay,
        config: RawConfig,
        attrib: EGLint,
    ) -> Result<EGLint> {
        let mut value = -1;
        let result = unsafe {
            self.GetConfigAttrib(display.as_raw(), config.as_raw(), attrib, &mut value)
        };
        // The error status is read on both paths so a stale error can't leak
        // into the next query.
        let status = self.check_error(ErrorKind::QueryFailed);
        if result == egl::FALSE {
            return Err(status.err().unwrap_or_else(|| ErrorKind::QueryFailed.into()));
        }

        status.map(|_| value)
    }

    fn choose_config(&self, display: RawDisplay, attribs: &[EGLint]) -> Result<RawConfig> {
        let mut config = ptr::null();
        let mut num_configs = 0;
        let result = unsafe {
            self.ChooseConfig(display.as_raw(), attribs.as_ptr(), &mut config, 1, &mut num_configs)
        };
        if result == egl::FALSE || num_configs < 1 {
            log::debug!("eglChooseConfig fail");
            return Err(self.last_error(ErrorKind::ConfigSelectionFailed));
        }

        Ok(RawConfig::from_raw(config))
    }

    fn create_pbuffer_surface(
        &self,
        display: RawDisplay,
        config: RawConfig,
        attribs: &[EGLint],
    ) -> Result<RawSurface> {
        let surface = unsafe {
            self.CreatePbufferSurface(display.as_raw(), config.as_raw(), attribs.as_ptr())
        };
        if surface == egl::NO_SURFACE {
            let err = self.last_error(ErrorKind::SurfaceCreationFailed);
            log::debug!("eglCreatePbufferSurface error {err}");
            return Err(err);
        }

        Ok(RawSurface::from_raw(surface))
    }

    fn create_context(
        &self,
        display: RawDisplay,
        config: RawConfig,
        attribs: &[EGLint],
    ) -> Result<RawContext> {
        let context = unsafe {
            self.CreateContext(display.as_raw(), config.as_raw(), egl::NO_CONTEXT, attribs.as_ptr())
        };
        if context == egl::NO_CONTEXT {
            log::debug!("eglCreateContext failed");
            return Err(self.last_error(ErrorKind::ContextCreationFailed));
        }

        Ok(RawContext::from_raw(context))
    }

    fn make_current(
        &self,
        display: RawDisplay,
        surface: Option<RawSurface>,
        context: Option<RawContext>,
    ) -> Result<()> {
        let surface = surface.map_or(egl::NO_SURFACE, RawSurface::as_raw);
        let context = context.map_or(egl::NO_CONTEXT, RawContext::as_raw);
        if unsafe { self.MakeCurrent(display.as_raw(), surface, surface, context) } == egl::FALSE {
            let err = self.last_error(ErrorKind::BindFailed);
            log::error!("eglMakeCurrent() returned {}: {err}", egl::FALSE);
            return Err(err);
        }

        Ok(())
    }

    fn query_surface(
        &self,
        display: RawDisplay,
        surface: RawSurface,
        attrib: EGLint,
    ) -> Result<EGLint> {
        let mut value = 0;
        if unsafe { self.QuerySurface(display.as_raw(), surface.as_raw(), attrib, &mut value) }
            == egl::FALSE
        {
            let err = self.last_error(ErrorKind::QueryFailed);
            log::error!("eglQuerySurface() failed: {err}");
            return Err(err);
        }

        Ok(value)
    }

    fn query_string(&self, display: RawDisplay, name: EGLenum) -> Option<String> {
        unsafe {
            let string = self.QueryString(display.as_raw(), name as EGLint);
            (!string.is_null()).then(|| CStr::from_ptr(string).to_string_lossy().into_owned())
        }
    }

    fn gl_string(&self, name: GLenum) -> Option<String> {
        let gles = self.gles()?;
        if !gles.GetString.is_loaded() || !gles.GetError.is_loaded() {
            return None;
        }

        unsafe {
            let string = gles.GetString(name);
            let string = (!string.is_null())
                .then(|| CStr::from_ptr(string.cast()).to_string_lossy().into_owned());
            let mut error = gles.GetError();
            while error != gles::NO_ERROR {
                log::error!("after glGetString() glError (0x{error:x})");
                error = gles.GetError();
            }
            string
        }
    }

    fn destroy_surface(&self, display: RawDisplay, surface: RawSurface) {
        unsafe {
            self.DestroySurface(display.as_raw(), surface.as_raw());
        }
    }

    fn destroy_context(&self, display: RawDisplay, context: RawContext) {
        unsafe {
            self.DestroyContext(display.as_raw(), context.as_raw());
        }
    }

    fn terminate(&self, display: RawDisplay) {
        unsafe {
            self.Terminate(display.as_raw());
        }
    }
}

/// The `EGL_*` spelling of an `eglGetError` code.
pub fn error_name(code: EGLenum) -> &'static str {
    match code {
        egl::SUCCESS => "EGL_SUCCESS",
        egl::NOT_INITIALIZED => "EGL_NOT_INITIALIZED",
        egl::BAD_ACCESS => "EGL_BAD_ACCESS",
        egl::BAD_ALLOC => "EGL_BAD_ALLOC",
        egl::BAD_ATTRIBUTE => "EGL_BAD_ATTRIBUTE",
        egl::BAD_CONFIG => "EGL_BAD_CONFIG",
        egl::BAD_CONTEXT => "EGL_BAD_CONTEXT",
        egl::BAD_CURRENT_SURFACE => "EGL_BAD_CURRENT_SURFACE",
        egl::BAD_DISPLAY => "EGL_BAD_DISPLAY",
        egl::BAD_MATCH => "EGL_BAD_MATCH",
        egl::BAD_NATIVE_PIXMAP => "EGL_BAD_NATIVE_PIXMAP",
        egl::BAD_NATIVE_WINDOW => "EGL_BAD_NATIVE_WINDOW",
        egl::BAD_PARAMETER => "EGL_BAD_PARAMETER",
        egl::BAD_SURFACE => "EGL_BAD_SURFACE",
        egl::CONTEXT_LOST => "EGL_CONTEXT_LOST",
        _ => "unknown EGL error",
    }
}
