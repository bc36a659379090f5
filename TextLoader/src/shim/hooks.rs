//! Replacements for the host's "set language" and "get string" routines

use std::ffi::CStr;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use super::binding::{HashFn, HostBinding, HostObject};
use crate::catalog::{Catalog, Key, LoadSummary, load_catalog};
use crate::config::LoaderConfig;

/// Value returned by `get_string` when the catalog served the request
pub const SERVED: i32 = 1;

/// Lifecycle of an installed shim
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShimState {
    /// Installed, no language loaded yet: every lookup goes to the host
    Armed,
    /// A catalog for `language` is in place
    Live { language: String },
}

/// One catalog build, swapped in whole on each language switch
struct Generation {
    language: String,
    catalog: Arc<Catalog>,
}

/// Interception shim over the host localization interface
pub struct Shim {
    binding: HostBinding,
    config: LoaderConfig,
    generation: RwLock<Option<Generation>>,
    /// Held across a whole language switch so the host and catalog agree
    switching: Mutex<()>,
}

impl Shim {
    pub fn new(binding: HostBinding, config: LoaderConfig) -> Self {
        let missing = binding.missing();
        if !missing.is_empty() {
            tracing::warn!("Host binding incomplete, missing: {}", missing.join(", "));
        }
        Self {
            binding,
            config,
            generation: RwLock::new(None),
            switching: Mutex::new(()),
        }
    }

    pub fn binding(&self) -> &HostBinding {
        &self.binding
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    pub fn state(&self) -> ShimState {
        let generation = self.generation.read().unwrap_or_else(PoisonError::into_inner);
        match generation.as_ref() {
            None => ShimState::Armed,
            Some(g) => ShimState::Live {
                language: g.language.clone(),
            },
        }
    }

    /// The catalog currently served, if a language has been loaded
    pub fn catalog(&self) -> Option<Arc<Catalog>> {
        let generation = self.generation.read().unwrap_or_else(PoisonError::into_inner);
        generation.as_ref().map(|g| Arc::clone(&g.catalog))
    }

    /// Hook for the host's "set language".
    ///
    /// Forwards to the original first, then rebuilds the catalog for the new
    /// language, so the host has already switched while files are scanned.
    /// Returns the original's result unchanged. Overlapping calls run one
    /// after the other; lookups keep using the previous catalog meanwhile.
    pub fn set_language(&self, this: HostObject, language: &CStr, country: &CStr) -> i32 {
        let Some(original) = self.binding.set_language else {
            tracing::warn!("set_language called without an original routine");
            return 0;
        };
        let _switching = self.switching.lock().unwrap_or_else(PoisonError::into_inner);
        let result = original(this, language, country);

        match self.binding.hash {
            Some(hash) => {
                self.rebuild(&language.to_string_lossy(), hash);
            }
            None => tracing::debug!("No host hash bound; catalog left unchanged"),
        }
        result
    }

    /// Hook for the host's "get string".
    ///
    /// On a catalog hit the translation is assigned to `dest`, the host's case
    /// folding is applied and [`SERVED`] is returned. Misses go to the
    /// original untouched.
    pub fn get_string(&self, this: HostObject, dest: HostObject, key: Key, case_mode: u32) -> i32 {
        if let (Some(assign), Some(enforce_case)) =
            (self.binding.string_assign, self.binding.enforce_case)
        {
            let catalog = self.catalog();
            if let Some(translation) = catalog.as_deref().and_then(|c| c.get(key)) {
                assign(dest, translation);
                enforce_case(this, dest, case_mode);
                return SERVED;
            }
        }

        match self.binding.get_string {
            Some(original) => original(this, dest, key, case_mode),
            None => 0,
        }
    }

    /// Rebuild the catalog for `language` and swap it in.
    ///
    /// Files are read before the lock is taken; readers keep the previous
    /// catalog until the swap.
    pub fn rebuild(&self, language: &str, hash: HashFn) -> LoadSummary {
        let (catalog, summary) = load_catalog(&self.config, language, hash);
        let mut generation = self.generation.write().unwrap_or_else(PoisonError::into_inner);
        *generation = Some(Generation {
            language: language.to_string(),
            catalog: Arc::new(catalog),
        });
        summary
    }
}
