use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    #[cfg(egl_backend)]
    listing::run()?;

    #[cfg(not(egl_backend))]
    log::error!("EGL isn't available on this platform");

    Ok(())
}

#[cfg(egl_backend)]
mod listing {
    use std::error::Error;
    use std::io;

    use eglconfigs::api::egl::Egl;
    use eglconfigs::{list_configs, EnvTemplate, LogSink};

    pub fn run() -> Result<(), Box<dyn Error>> {
        let egl = Egl::system()?;
        let mut sink = LogSink::new(io::stdout().lock());
        list_configs(egl, &EnvTemplate::default(), &mut sink)?;
        Ok(())
    }
}
