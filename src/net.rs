//! Network layer: a single buffered HTTP GET.

mod fetch;
mod response;

pub use fetch::{build_client, fetch};
pub use response::Response;
