//! Host interception shim
//!
//! Two trampolines stand in for the host's localization entry points:
//!
//! - [`set_language_hook`] forwards to the original, then rebuilds the
//!   catalog for the new language.
//! - [`get_string_hook`] serves catalog hits through the host's own string
//!   assignment and case folding, and forwards misses to the original.
//!
//! The shim is process-wide. [`install`] arms it once the host binding is
//! known; before that both trampolines return `0`.
//!
//! ```text
//! UNINITIALIZED --install--> ARMED --set_language--> LIVE --set_language--> LIVE
//! ```

mod binding;
mod hooks;

use std::ffi::CStr;
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

pub use binding::{
    EnforceCaseFn, GetStringFn, HashFn, HostBinding, HostObject, SetLanguageFn, StringAssignFn,
};
pub use hooks::{SERVED, Shim, ShimState};

use crate::catalog::Key;
use crate::config::{CONFIG_FILE_NAME, LoaderConfig};

lazy_static::lazy_static! {
    static ref SHIM: RwLock<Option<Arc<Shim>>> = RwLock::new(None);
}

/// Install the process-wide shim, reading `textloader.toml` from the
/// working directory if present.
pub fn install(binding: HostBinding) -> Arc<Shim> {
    install_with_config(binding, LoaderConfig::load_or_default(Path::new(CONFIG_FILE_NAME)))
}

/// Install the process-wide shim with an explicit configuration.
///
/// Installing again replaces the previous shim and its catalog.
pub fn install_with_config(binding: HostBinding, config: LoaderConfig) -> Arc<Shim> {
    tracing::info!(
        "Installing localization shim (plugin root {})",
        config.plugin_root.display()
    );
    let shim = Arc::new(Shim::new(binding, config));
    let mut slot = SHIM.write().unwrap_or_else(PoisonError::into_inner);
    if slot.is_some() {
        tracing::warn!("Localization shim was already installed; replacing it");
    }
    *slot = Some(Arc::clone(&shim));
    shim
}

/// The installed shim, if any
pub fn installed() -> Option<Arc<Shim>> {
    SHIM.read().unwrap_or_else(PoisonError::into_inner).clone()
}

/// Trampoline for the host's "set language"
pub fn set_language_hook(this: HostObject, language: &CStr, country: &CStr) -> i32 {
    installed().map_or(0, |shim| shim.set_language(this, language, country))
}

/// Trampoline for the host's "get string"
pub fn get_string_hook(this: HostObject, dest: HostObject, key: Key, case_mode: u32) -> i32 {
    installed().map_or(0, |shim| shim.get_string(this, dest, key, case_mode))
}
