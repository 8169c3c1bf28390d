//! Text output of the listing.

use std::io::{self, Write};

use eglconfigs_sys::egl::types::EGLint;

use crate::config::{self, Attribute, ATTRIBUTES};
use crate::display::Display;
use crate::driver::{Driver, RawConfig};

/// Log target the report lines are mirrored to.
pub const REPORT_TARGET: &str = "eglconfigs::report";

/// Destination of the report, one line at a time.
pub trait ReportSink {
    /// Emit a single line, without the trailing newline.
    fn write_line(&mut self, line: &str);
}

impl ReportSink for Vec<String> {
    fn write_line(&mut self, line: &str) {
        self.push(line.to_owned());
    }
}

/// Writes every line to `W` and repeats it as an `info` record on
/// [`REPORT_TARGET`].
#[derive(Debug)]
pub struct LogSink<W> {
    writer: W,
}

impl<W: Write> LogSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl LogSink<io::Stderr> {
    /// The sink used on Android, where stdout isn't collected.
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write> ReportSink for LogSink<W> {
    fn write_line(&mut self, line: &str) {
        if let Err(err) = writeln!(self.writer, "{line}") {
            log::warn!("failed to write report line: {err}");
        }

        log::info!(target: REPORT_TARGET, "{line}");
    }
}

/// Prints every attribute of a single configuration.
///
/// Attributes that can't be read are left out of the block. `EGL_CONFIG_CAVEAT`,
/// `EGL_SURFACE_TYPE` and `EGL_COLOR_BUFFER_TYPE` get a decoded line before
/// their raw line.
#[derive(Debug, Clone, Copy)]
pub struct AttributeReporter<'a> {
    attributes: &'a [Attribute],
}

impl Default for AttributeReporter<'static> {
    fn default() -> Self {
        Self { attributes: &ATTRIBUTES }
    }
}

impl<'a> AttributeReporter<'a> {
    /// Report only the given `attributes`, in their order.
    pub fn with_attributes(attributes: &'a [Attribute]) -> Self {
        Self { attributes }
    }

    pub fn report<D: Driver>(
        &self,
        display: &Display<'_, D>,
        config: RawConfig,
        sink: &mut dyn ReportSink,
    ) {
        for attribute in self.attributes {
            let value = match display.config_attrib(config, attribute) {
                Ok(value) => value,
                Err(err) => {
                    log::trace!("skipping {}: {err}", attribute.name);
                    continue;
                },
            };

            if let Some(label) = config::decode(attribute.id, value) {
                sink.write_line(&decoded_line(attribute.name, label, value));
            }

            sink.write_line(&raw_line(attribute.name, value));
        }

        sink.write_line("");
    }
}

fn decoded_line(name: &str, label: &str, value: EGLint) -> String {
    format!("\t{name:<32}: {label:>10} (0x{:08x})", value as u32)
}

fn raw_line(name: &str, value: EGLint) -> String {
    format!("\t{name:<32}: {value:>10} (0x{:08x})", value as u32)
}
