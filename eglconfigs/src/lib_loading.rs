//! Runtime loading of the EGL and GLES libraries.

use std::ops::Deref;
use std::sync::Arc;

use libloading::Library;

#[cfg(windows)]
use libloading::os::windows::{Library as WinLibrary, LOAD_LIBRARY_SEARCH_DEFAULT_DIRS};

pub trait SymLoading {
    /// # Safety
    /// The library must be ensured to live long enough.
    unsafe fn load_with(lib: &Library) -> Self;
}

/// Loaded function table together with the library that backs it.
#[derive(Clone)]
pub struct SymWrapper<T> {
    sym: T,
    _lib: Arc<Library>,
}

impl<T: SymLoading> SymWrapper<T> {
    /// Try each of `lib_paths` in order and load the symbols from the first
    /// library that opens.
    ///
    /// # Safety
    /// Opening a library runs its initializers.
    pub unsafe fn new(lib_paths: &[&str]) -> Option<Self> {
        for path in lib_paths {
            #[cfg(windows)]
            let lib = WinLibrary::load_with_flags(path, LOAD_LIBRARY_SEARCH_DEFAULT_DIRS)
                .map(From::from);

            #[cfg(not(windows))]
            let lib = Library::new(path);

            match lib {
                Ok(lib) => {
                    log::debug!("loaded {path}");
                    return Some(SymWrapper { sym: T::load_with(&lib), _lib: Arc::new(lib) });
                },
                Err(err) => log::debug!("failed to open {path}: {err}"),
            }
        }

        None
    }
}

impl<T> Deref for SymWrapper<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.sym
    }
}
