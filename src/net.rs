mod fetch;
mod response;

pub use fetch::{fetch, Fetcher, HttpFetcher};
pub use response::Response;
