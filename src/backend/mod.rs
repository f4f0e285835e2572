/// Backend submodules for the scholarship service
///
/// - `api`: service endpoints and their HTTP client
/// - `handlers`: submission and chat handling against the session
/// - `main_loop`: the thread loop that owns the runtime and the session
pub mod api;
pub mod handlers;
mod main_loop;

// Re-export the main backend entry points
pub use api::{HttpApi, ScholarshipApi};
pub use main_loop::{run_backend, run_backend_with};
