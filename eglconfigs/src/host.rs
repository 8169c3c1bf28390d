//! Entry points called by a host application over its lifecycle.
//!
//! Only [`init`] does any work. Failures are logged and never reach the host.

use crate::config::EnvTemplate;
use crate::driver::Driver;
use crate::listing::list_configs;
use crate::report::ReportSink;

/// Run the listing against the system EGL. The surface size of the host is
/// not used.
#[cfg(egl_backend)]
pub fn init(_width: i32, _height: i32) {
    let egl = match crate::api::egl::Egl::system() {
        Ok(egl) => egl,
        Err(err) => {
            log::error!("{err}");
            return;
        },
    };

    run(egl, &mut platform_sink());
}

/// There's no EGL to list on this platform.
#[cfg(not(egl_backend))]
pub fn init(_width: i32, _height: i32) {
    log::error!("{}", crate::error::Error::from(crate::error::ErrorKind::NotFound));
}

/// Nothing is drawn.
pub fn step() {}

/// Everything was released by [`init`].
pub fn uninit() {}

/// Run one listing with the default environment, returning whether it
/// completed.
pub fn run<D: Driver>(driver: &D, sink: &mut dyn ReportSink) -> bool {
    match list_configs(driver, &EnvTemplate::default(), sink) {
        Ok(()) => true,
        Err(err) => {
            log::error!("listing EGL configurations failed: {err}");
            false
        },
    }
}

#[cfg(android_platform)]
fn platform_sink() -> crate::report::LogSink<std::io::Stderr> {
    crate::report::LogSink::stderr()
}

#[cfg(all(egl_backend, not(android_platform)))]
fn platform_sink() -> crate::report::LogSink<std::io::Stdout> {
    crate::report::LogSink::new(std::io::stdout())
}
