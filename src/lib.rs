pub mod config;
pub mod error;
pub mod fetch;
pub mod form;
pub mod form_rankings;
pub mod http_client;
pub mod model;
pub mod pipeline;
pub mod player_filter;
pub mod prompt;
pub mod report_export;

pub use error::{FormError, Result};
