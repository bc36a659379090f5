//! Host binding: the callables the shim needs from the host
//!
//! Resolving these inside a particular host build is the job of the code
//! that installs the hooks; the shim only sees the record below. Any handle
//! may be absent and the shim degrades around it.

use std::ffi::{CStr, c_void};
use std::fmt;

use crate::catalog::Key;

/// Opaque pointer to a host object (`this`, or a host string object)
pub type HostObject = *mut c_void;

/// Original "set language": `(this, language, country) -> result`
pub type SetLanguageFn = fn(this: HostObject, language: &CStr, country: &CStr) -> i32;

/// Original "get string": `(this, dest, key, case_mode) -> result`
pub type GetStringFn = fn(this: HostObject, dest: HostObject, key: Key, case_mode: u32) -> i32;

/// Host string assignment: writes `value` into the string object `dest`
pub type StringAssignFn = fn(dest: HostObject, value: &CStr);

/// Host case folding applied to `dest` after assignment
pub type EnforceCaseFn = fn(this: HostObject, dest: HostObject, case_mode: u32);

/// Host string hash producing catalog keys
pub type HashFn = fn(value: &CStr) -> Key;

/// Function handles supplied by the host at install time
#[derive(Clone, Copy, Default)]
pub struct HostBinding {
    pub set_language: Option<SetLanguageFn>,
    pub get_string: Option<GetStringFn>,
    pub string_assign: Option<StringAssignFn>,
    pub enforce_case: Option<EnforceCaseFn>,
    pub hash: Option<HashFn>,
}

impl HostBinding {
    /// Whether catalog hits can be written back into host strings
    pub fn can_serve(&self) -> bool {
        self.string_assign.is_some() && self.enforce_case.is_some()
    }

    /// Whether a language switch can rebuild the catalog
    pub fn can_rebuild(&self) -> bool {
        self.set_language.is_some() && self.hash.is_some()
    }

    /// Names of the handles that were not supplied
    pub fn missing(&self) -> Vec<&'static str> {
        [
            ("set_language", self.set_language.is_none()),
            ("get_string", self.get_string.is_none()),
            ("string_assign", self.string_assign.is_none()),
            ("enforce_case", self.enforce_case.is_none()),
            ("hash", self.hash.is_none()),
        ]
        .into_iter()
        .filter_map(|(name, missing)| missing.then_some(name))
        .collect()
    }
}

impl fmt::Debug for HostBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostBinding")
            .field("set_language", &self.set_language.is_some())
            .field("get_string", &self.get_string.is_some())
            .field("string_assign", &self.string_assign.is_some())
            .field("enforce_case", &self.enforce_case.is_some())
            .field("hash", &self.hash.is_some())
            .finish()
    }
}
