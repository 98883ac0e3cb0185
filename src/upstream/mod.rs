//! Upstream functionality for sending metered requests to external APIs.

pub mod hyper_transport;
pub mod metered;
pub mod transport;



// Re-export main types
pub use hyper_transport::HyperTransport;
pub use metered::MeteredTransport;
pub use transport::{OutboundRequest, Response, Transport, TransportError};
