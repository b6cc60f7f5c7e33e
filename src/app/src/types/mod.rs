//! Domain-based type organization
//!
//! Types are organized by domain to match the structure in `update/`:
//! - network: scanned networks, signal buckets and credentials
//! - scan: scan loop state
//! - connect: connect flow state and password prompt
//! - banner: status banner

pub mod banner;
pub mod connect;
pub mod network;
pub mod scan;

pub use banner::*;
pub use connect::*;
pub use network::*;
pub use scan::*;
