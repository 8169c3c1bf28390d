//! The EGL attributes the report covers and the decoding of their values.
#![allow(clippy::unnecessary_cast)] // needed for 32bit & 64bit support

use std::num::NonZeroU32;

use bitflags::bitflags;

use eglconfigs_sys::egl;
use eglconfigs_sys::egl::types::{EGLenum, EGLint};

/// A named integer attribute of an `EGLConfig`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Attribute {
    /// The `EGL_*` attribute identifier.
    pub id: EGLenum,
    /// The name of the identifier as spelled in the EGL headers.
    pub name: &'static str,
}

macro_rules! attribute {
    ($name:ident) => {
        Attribute { id: egl::$name, name: concat!("EGL_", stringify!($name)) }
    };
}

/// Every attribute the report prints, in report order.
pub const ATTRIBUTES: [Attribute; 32] = [
    attribute!(BUFFER_SIZE),
    attribute!(ALPHA_SIZE),
    attribute!(BLUE_SIZE),
    attribute!(GREEN_SIZE),
    attribute!(RED_SIZE),
    attribute!(DEPTH_SIZE),
    attribute!(STENCIL_SIZE),
    attribute!(CONFIG_CAVEAT),
    attribute!(CONFIG_ID),
    attribute!(LEVEL),
    attribute!(MAX_PBUFFER_HEIGHT),
    attribute!(MAX_PBUFFER_PIXELS),
    attribute!(MAX_PBUFFER_WIDTH),
    attribute!(NATIVE_RENDERABLE),
    attribute!(NATIVE_VISUAL_ID),
    attribute!(NATIVE_VISUAL_TYPE),
    attribute!(SAMPLES),
    attribute!(SAMPLE_BUFFERS),
    attribute!(SURFACE_TYPE),
    attribute!(TRANSPARENT_TYPE),
    attribute!(TRANSPARENT_RED_VALUE),
    attribute!(TRANSPARENT_GREEN_VALUE),
    attribute!(TRANSPARENT_BLUE_VALUE),
    attribute!(BIND_TO_TEXTURE_RGB),
    attribute!(BIND_TO_TEXTURE_RGBA),
    attribute!(MIN_SWAP_INTERVAL),
    attribute!(MAX_SWAP_INTERVAL),
    attribute!(LUMINANCE_SIZE),
    attribute!(ALPHA_MASK_SIZE),
    attribute!(COLOR_BUFFER_TYPE),
    attribute!(RENDERABLE_TYPE),
    attribute!(CONFORMANT),
];

/// Labels for the low three bits of `EGL_SURFACE_TYPE`, indexed by
/// `PBUFFER_BIT | PIXMAP_BIT | WINDOW_BIT`.
const SURFACE_TYPE_LABELS: [&str; 8] = [
    "None!",
    "PBuffer",
    "Pixmap",
    "PBuffer+Pixmap",
    "Window",
    "Window+PBuffer",
    "Window+Pixmap",
    "Window+Pixmap+PBuffer",
];

/// Decode `EGL_CONFIG_CAVEAT`.
pub fn decode_caveat(value: EGLint) -> &'static str {
    match value as EGLenum {
        egl::NONE => "Normal",
        egl::SLOW_CONFIG => "Slow",
        egl::NON_CONFORMANT_CONFIG => "Non-conformant",
        _ => "Unknown EGL_CONFIG_CAVEAT",
    }
}

/// Decode `EGL_SURFACE_TYPE`.
///
/// Only the window, pixmap and pbuffer bits are looked at.
pub fn decode_surface(value: EGLint) -> &'static str {
    SURFACE_TYPE_LABELS[(value & 7) as usize]
}

/// Decode `EGL_COLOR_BUFFER_TYPE`.
pub fn decode_color_buffer(value: EGLint) -> &'static str {
    match value as EGLenum {
        egl::RGB_BUFFER => "EGL_RGB_BUFFER",
        egl::LUMINANCE_BUFFER => "EGL_LUMINANCE_BUFFER",
        _ => "Unknown EGL_COLOR_BUFFER_TYPE",
    }
}

/// The readable label for `value` if `attribute` is one of the decoded
/// attributes.
pub fn decode(attribute: EGLenum, value: EGLint) -> Option<&'static str> {
    match attribute {
        egl::CONFIG_CAVEAT => Some(decode_caveat(value)),
        egl::SURFACE_TYPE => Some(decode_surface(value)),
        egl::COLOR_BUFFER_TYPE => Some(decode_color_buffer(value)),
        _ => None,
    }
}

bitflags! {
    /// The types of the surfaces a config must support.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ConfigSurfaceTypes: u32 {
        /// Context must support windows.
        const WINDOW  = egl::WINDOW_BIT as u32;

        /// Context must support pixmaps.
        const PIXMAP  = egl::PIXMAP_BIT as u32;

        /// Context must support pbuffers.
        const PBUFFER = egl::PBUFFER_BIT as u32;
    }
}

bitflags! {
    /// The Api a config must be renderable with.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Api: u32 {
        /// Context supports OpenGL API.
        const OPENGL = egl::OPENGL_BIT as u32;

        /// Context supports OpenGL ES 1 API.
        const GLES1 = egl::OPENGL_ES_BIT as u32;

        /// Context supports OpenGL ES 2 API.
        const GLES2 = egl::OPENGL_ES2_BIT as u32;

        /// Context supports OpenGL ES 3 API.
        const GLES3 = egl::OPENGL_ES3_BIT as u32;
    }
}

/// What the rendering environment is built from once the configurations have
/// been listed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvTemplate {
    pub(crate) config_surface_types: ConfigSurfaceTypes,
    pub(crate) api: Api,
    pub(crate) pbuffer_width: NonZeroU32,
    pub(crate) pbuffer_height: NonZeroU32,
    pub(crate) client_version: u8,
}

impl Default for EnvTemplate {
    fn default() -> Self {
        EnvTemplate {
            config_surface_types: ConfigSurfaceTypes::WINDOW,
            api: Api::GLES2,
            pbuffer_width: NonZeroU32::MIN,
            pbuffer_height: NonZeroU32::MIN,
            client_version: 2,
        }
    }
}

impl EnvTemplate {
    /// Attributes for `eglChooseConfig`.
    pub fn config_attributes(&self) -> Vec<EGLint> {
        vec![
            egl::SURFACE_TYPE as EGLint,
            self.config_surface_types.bits() as EGLint,
            egl::RENDERABLE_TYPE as EGLint,
            self.api.bits() as EGLint,
            // Push `egl::NONE` to terminate the list.
            egl::NONE as EGLint,
        ]
    }

    /// Attributes for `eglCreatePbufferSurface`.
    pub fn pbuffer_attributes(&self) -> Vec<EGLint> {
        vec![
            egl::WIDTH as EGLint,
            self.pbuffer_width.get() as EGLint,
            egl::HEIGHT as EGLint,
            self.pbuffer_height.get() as EGLint,
            egl::NONE as EGLint,
        ]
    }

    /// Attributes for `eglCreateContext`.
    pub fn context_attributes(&self) -> Vec<EGLint> {
        vec![
            egl::CONTEXT_CLIENT_VERSION as EGLint,
            self.client_version as EGLint,
            egl::NONE as EGLint,
        ]
    }
}

/// Builder for the [`EnvTemplate`].
#[derive(Debug, Default, Clone)]
pub struct EnvTemplateBuilder {
    template: EnvTemplate,
}

impl EnvTemplateBuilder {
    /// Create a new builder with the defaults: a window capable GLES2 config, a
    /// 1x1 pbuffer and a client version 2 context.
    #[inline]
    pub fn new() -> Self {
        Default::default()
    }

    /// The types of the surfaces the chosen config must support.
    #[inline]
    pub fn with_surface_type(mut self, config_surface_types: ConfigSurfaceTypes) -> Self {
        self.template.config_surface_types = config_surface_types;
        self
    }

    /// The Api the chosen config must be renderable with.
    #[inline]
    pub fn with_api(mut self, api: Api) -> Self {
        self.template.api = api;
        self
    }

    /// Size of the off-screen surface.
    #[inline]
    pub fn with_pbuffer_sizes(mut self, width: NonZeroU32, height: NonZeroU32) -> Self {
        self.template.pbuffer_width = width;
        self.template.pbuffer_height = height;
        self
    }

    /// `EGL_CONTEXT_CLIENT_VERSION` of the context.
    #[inline]
    pub fn with_client_version(mut self, client_version: u8) -> Self {
        self.template.client_version = client_version;
        self
    }

    /// Build the template.
    #[must_use]
    pub fn build(self) -> EnvTemplate {
        self.template
    }
}
