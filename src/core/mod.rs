pub mod auth;
pub mod dispatcher;
pub mod params;
pub mod resource;
pub mod shaper;

pub use crate::domain::model::{ApiResponse, ApiResult, HttpMethod, PostSummary, RequestSpec, Site};
pub use crate::domain::ports::{ConfigSource, Dispatcher};
pub use crate::utils::error::Result;
