//! Runtime target detection for the welcome presentation.
//!
//! Detects whether the process can present the full windowed welcome video
//! or should use the degraded web/embedded presentation.

use wg_core::RuntimeTarget;

/// Environment variable overriding detection, for tests and deployments.
pub const RUNTIME_TARGET_ENV: &str = "WELCOME_RUNTIME_TARGET";

/// Detect the runtime target of the current process.
///
/// # Detection Logic
///
/// - `WELCOME_RUNTIME_TARGET=native|web` overrides everything
/// - **macOS**: Always `Native` (windowed presentation available)
/// - **Windows**: Always `Native`
/// - **Linux**: `Native` when a display server is reachable, `Web` otherwise
/// - **Other**: `Web`
pub fn detect_runtime_target() -> RuntimeTarget {
    match std::env::var(RUNTIME_TARGET_ENV) {
        Ok(value) if value.eq_ignore_ascii_case("native") => {
            log::info!("runtime target forced to native via {RUNTIME_TARGET_ENV}");
            return RuntimeTarget::Native;
        }
        Ok(value) if value.eq_ignore_ascii_case("web") => {
            log::info!("runtime target forced to web via {RUNTIME_TARGET_ENV}");
            return RuntimeTarget::Web;
        }
        Ok(other) => {
            log::warn!("ignoring unrecognized {RUNTIME_TARGET_ENV}={other}");
        }
        Err(_) => {}
    }

    #[cfg(target_os = "macos")]
    {
        return RuntimeTarget::Native;
    }

    #[cfg(target_os = "windows")]
    {
        return RuntimeTarget::Native;
    }

    #[cfg(target_os = "linux")]
    {
        if has_display_server() {
            log::info!("display server detected, using native welcome presentation");
            RuntimeTarget::Native
        } else {
            log::warn!("no display server detected, using web welcome presentation");
            RuntimeTarget::Web
        }
    }

    #[cfg(not(any(target_os = "macos", target_os = "windows", target_os = "linux")))]
    {
        RuntimeTarget::Web
    }
}

/// Detect a reachable X11 or Wayland display server.
#[cfg(target_os = "linux")]
fn has_display_server() -> bool {
    std::env::var("DISPLAY").is_ok() || std::env::var("WAYLAND_DISPLAY").is_ok()
}
