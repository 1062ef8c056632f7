//! Existence Probe - exported library surface
//!
//! The export concern stays here: the probe logic in `probe-core` knows
//! nothing about symbol visibility or calling conventions.
//!
//! C callers link the `cdylib` and declare:
//!
//! ```text
//! #include <stdbool.h>
//! bool probe_file_exists(const char *path);
//! ```

use std::ffi::{c_char, CStr};
use std::sync::OnceLock;

use probe_core::application::ExistenceCheck;
use probe_core::port::ExistenceProbe;
use probe_core::ProbeConfig;
use probe_infra_fs::std_existence_probe;
use tracing::warn;

pub use probe_core::VERSION;

fn probe() -> &'static ExistenceCheck {
    static PROBE: OnceLock<ExistenceCheck> = OnceLock::new();
    PROBE.get_or_init(|| std_existence_probe(ProbeConfig::from_build()))
}

/// BUILD_CONFIG as compiled into this library
pub fn probe_config() -> ProbeConfig {
    probe().config()
}

/// Whether an entry exists at `path`, printing one diagnostic line to stdout
pub fn file_exists(path: &str) -> bool {
    probe().file_exists(path)
}

/// C ABI entry point for [`file_exists`]
///
/// Returns `false` for a null pointer or a path that is not valid UTF-8.
///
/// # Safety
/// `path` must be null or point to a NUL-terminated string that stays valid
/// for the duration of the call.
#[no_mangle]
pub unsafe extern "C" fn probe_file_exists(path: *const c_char) -> bool {
    if path.is_null() {
        warn!("probe_file_exists called with a null path");
        return false;
    }

    // SAFETY: non-null and NUL-terminated per the function contract
    let raw = unsafe { CStr::from_ptr(path) };
    match raw.to_str() {
        Ok(path) => file_exists(path),
        Err(e) => {
            warn!(error = %e, "probe_file_exists called with a non-UTF-8 path");
            false
        }
    }
}
