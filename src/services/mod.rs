pub mod error;
pub mod http;
pub mod api_client;

#[cfg(test)]
pub mod testing;

pub use error::ApiError;
pub use http::{FetchTransport, HttpTransport};
pub use api_client::{ApiClient, DonationFilter};
