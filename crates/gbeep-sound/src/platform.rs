//! Platform family detection.

/// Closed set of platform families the emitter distinguishes.
///
/// Anything that is neither Windows nor macOS is treated as Linux, which
/// shares the speaker-beep-then-bell fallback with the other unixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOs,
    Linux,
}

impl Platform {
    /// Detects the platform family the binary was built for.
    pub fn detect() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Linux
        }
    }

    /// Human-readable name for diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Windows => "windows",
            Platform::MacOs => "macos",
            Platform::Linux => "linux",
        }
    }
}
