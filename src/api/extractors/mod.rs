//! Custom extractors mapping rejections into `AppError`.

mod json_body;
mod query_params;

pub use json_body::JsonBody;
pub use query_params::QueryParams;
