//! Collaborators outside the app: the hosted verse backend and audio hosting.

mod backend;
pub mod error;
pub mod models;
mod probe;

pub use backend::BackendClient;
pub use error::ApiError;
pub use models::*;
pub use probe::asset_exists;

use once_cell::sync::Lazy;

pub(crate) static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);
