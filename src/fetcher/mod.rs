// Data acquisition: the product list and image reachability.

pub mod traits;
pub mod http;
pub mod image_probe;

#[cfg(test)]
pub(crate) mod test_server;

pub use http::HttpProductSource;
pub use image_probe::HttpImageProbe;
pub use traits::ProductSource;
