// Build-time configuration injected into every probe component

/// Text printed by the host when the flag is enabled
pub const FLAG_SET_LINE: &str = "BUILD_CONFIG set";

/// Text printed by the host when the flag is disabled
pub const FLAG_NOT_SET_LINE: &str = "BUILD_CONFIG not set";

/// Configuration fixed at compile time.
///
/// Components never read the `build-config` feature themselves. The
/// composition root builds one `ProbeConfig` and hands it to each of them, so
/// the library and the host cannot disagree about the flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProbeConfig {
    /// `BUILD_CONFIG`: controls diagnostic text only
    pub build_config: bool,
}

impl ProbeConfig {
    /// Explicit configuration (tests, embedders)
    pub const fn new(build_config: bool) -> Self {
        Self { build_config }
    }

    /// Configuration as compiled into this build
    ///
    /// # Example
    /// ```text
    /// cargo build -p probe-host --features build-config
    /// ```
    pub const fn from_build() -> Self {
        Self::new(cfg!(feature = "build-config"))
    }

    /// Line the host emits on startup
    pub const fn flag_line(&self) -> &'static str {
        if self.build_config {
            FLAG_SET_LINE
        } else {
            FLAG_NOT_SET_LINE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_line() {
        assert_eq!(ProbeConfig::new(true).flag_line(), "BUILD_CONFIG set");
        assert_eq!(ProbeConfig::new(false).flag_line(), "BUILD_CONFIG not set");
    }

    #[test]
    fn test_from_build_matches_feature() {
        assert_eq!(
            ProbeConfig::from_build().build_config,
            cfg!(feature = "build-config")
        );
    }

    #[test]
    fn test_default_is_unset() {
        assert!(!ProbeConfig::default().build_config);
    }
}
