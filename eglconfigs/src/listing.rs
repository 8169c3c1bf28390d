//! The complete report: every configuration, then the strings of the
//! environment built on top of the display.

use eglconfigs_sys::{egl, gles};

use crate::config::EnvTemplate;
use crate::display::Display;
use crate::driver::Driver;
use crate::enumerate::ConfigEnumerator;
use crate::env::GlEnv;
use crate::error::Result;
use crate::report::ReportSink;

/// Print every configuration of the default display of `driver`, then set up
/// the environment described by `template` and print the EGL and GL strings.
///
/// Everything acquired is released before returning, on success and failure.
pub fn list_configs<D: Driver>(
    driver: &D,
    template: &EnvTemplate,
    sink: &mut dyn ReportSink,
) -> Result<()> {
    let display = Display::new(driver)?;

    ConfigEnumerator::new(&display).report(sink)?;

    let env = GlEnv::new(&display, template)?;
    report_environment(&env, sink);

    Ok(())
}

fn report_environment<D: Driver>(env: &GlEnv<'_, '_, D>, sink: &mut dyn ReportSink) {
    let display = env.display();
    let (width, height) = env.dimensions();

    let egl_string = |name| display.query_string(name).unwrap_or_else(|| "(null)".into());

    sink.write_line("");
    sink.write_line(&format!("Window dimensions: {width} x {height}"));
    sink.write_line(&format!("Egl Version is:  {}", display.version()));
    sink.write_line(&format!("EGL vendor string:  {}", egl_string(egl::VENDOR)));
    sink.write_line(&format!("EGL version string:  {}", egl_string(egl::VERSION)));
    sink.write_line(&format!("EGL client APIs:  {}", egl_string(egl::CLIENT_APIS)));
    sink.write_line("EGL extensions string:");
    sink.write_line(&format!("    {}", egl_string(egl::EXTENSIONS)));
    sink.write_line("");

    for (label, name) in [
        ("Version", gles::VERSION),
        ("Vendor", gles::VENDOR),
        ("Renderer", gles::RENDERER),
        ("Extensions", gles::EXTENSIONS),
    ] {
        let value = display.driver().gl_string(name);
        sink.write_line(&format!("GL {label} = {}", value.as_deref().unwrap_or("(null)")));
    }
}
