//! Host information reporter.
//!
//! [`query_static_info`] reports OS, CPU and memory capacity;
//! [`query_load`] reports CPU and memory utilization. Both print their
//! record to stdout as indented JSON and return it.

pub mod config;
pub mod errors;
pub mod probe;
pub mod report;
pub mod system;

pub use errors::Errors;
pub use probe::{LoadInfo, StaticInfo, query_load, query_static_info};
pub use system::{HostSource, MemoryUsage, SysinfoHost};
