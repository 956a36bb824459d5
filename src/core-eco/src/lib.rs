pub mod client;
pub mod common;
pub mod errors;
pub mod page;

pub use client::BackendClient;
pub use common::{env_check::non_empty_env, logging::setup_logging};
pub use errors::Error;
pub use page::{check_backend, render_text};
