//! Profiling utilities based on the `puffin` crate.
//!
//! Scopes are recorded only after [`enable`] (or `init_profiling` with the
//! `profiling-server` feature) has been called, so the macros are cheap to
//! leave in widget code.

pub use puffin::{GlobalProfiler, profile_function, profile_scope};

/// Turn scope recording on or off.
pub fn enable(on: bool) {
    puffin::set_scopes_on(on);
}

/// Profiling backend options.
#[cfg(feature = "profiling-server")]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfilingBackend {
    /// Send profiling data to puffin_viewer via HTTP.
    PuffinHttp,
}

#[cfg(feature = "profiling-server")]
static PROFILING_SERVER: std::sync::OnceLock<puffin_http::Server> = std::sync::OnceLock::new();

/// Initialize profiling with the specified backend.
///
/// # Example
/// ```no_run
/// use smart_buttons_core::profiling::{init_profiling, ProfilingBackend};
///
/// init_profiling(ProfilingBackend::PuffinHttp);
/// ```
#[cfg(feature = "profiling-server")]
pub fn init_profiling(backend: ProfilingBackend) {
    match backend {
        ProfilingBackend::PuffinHttp => {
            puffin::set_scopes_on(true);

            match puffin_http::Server::new("0.0.0.0:8585") {
                Ok(server) => {
                    tracing::info!("Puffin profiler server started on http://0.0.0.0:8585");
                    let _ = PROFILING_SERVER.set(server);
                }
                Err(e) => {
                    tracing::error!("Failed to start puffin server: {}", e);
                }
            }
        }
    }
}

/// Mark the start of a new profiling frame.
///
/// Hosts call this once per processed batch of input events.
#[inline]
pub fn new_frame() {
    puffin::GlobalProfiler::lock().new_frame();
}
