//! Listing every `EGLConfig` of a display.

use crate::display::Display;
use crate::driver::{Driver, RawConfig};
use crate::error::{ErrorKind, Result};
use crate::report::{AttributeReporter, ReportSink};

/// Walks the configurations of a display and hands each one to an
/// [`AttributeReporter`].
#[derive(Debug)]
pub struct ConfigEnumerator<'a, 'd, D: Driver> {
    display: &'a Display<'d, D>,
    reporter: AttributeReporter<'a>,
}

impl<'a, 'd, D: Driver> ConfigEnumerator<'a, 'd, D> {
    pub fn new(display: &'a Display<'d, D>) -> Self {
        Self { display, reporter: AttributeReporter::default() }
    }

    /// Use `reporter` for the per config blocks.
    pub fn with_reporter(mut self, reporter: AttributeReporter<'a>) -> Self {
        self.reporter = reporter;
        self
    }

    /// Number of configurations the display advertises.
    pub fn configs_number(&self) -> Result<usize> {
        self.display.driver().config_count(self.display.raw_display())
    }

    /// All the configurations of the display, in driver order.
    pub fn enumerate(&self) -> Result<Vec<RawConfig>> {
        let configs_number = self.configs_number()?;
        self.fetch(configs_number)
    }

    /// Print the configuration count followed by one block per
    /// configuration, returning how many blocks were printed.
    pub fn report(&self, sink: &mut dyn ReportSink) -> Result<usize> {
        let configs_number = self.configs_number()?;
        sink.write_line(&format!("Number of EGL configuration: {configs_number}"));

        let configs = self.fetch(configs_number)?;
        for (index, config) in configs.iter().enumerate() {
            sink.write_line(&format!("Configuration {index}"));
            self.reporter.report(self.display, *config, sink);
        }

        Ok(configs.len())
    }

    /// Retrieve up to `configs_number` configurations.
    ///
    /// The count the driver writes wins over the probed one.
    fn fetch(&self, configs_number: usize) -> Result<Vec<RawConfig>> {
        let mut configs = Vec::new();
        if configs.try_reserve_exact(configs_number).is_err() {
            log::debug!("Could not allocate configs.");
            return Err(ErrorKind::AllocationFailed.into());
        }
        configs.resize(configs_number, RawConfig::NONE);

        let written = self.display.driver().configs(self.display.raw_display(), &mut configs)?;
        configs.truncate(written);

        if written != configs_number {
            log::debug!("eglGetConfigs wrote {written} of {configs_number} configs");
        }

        Ok(configs)
    }
}
