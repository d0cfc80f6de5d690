//! Host probes.
//!
//! Each probe collects one record, prints it to stdout as indented JSON and
//! returns it. Failures never escape as panics: they are printed as a
//! diagnostic line and returned as `Err`, which callers may simply ignore.

mod load;
mod static_info;

pub use load::{LOAD_ERROR_LABEL, LoadInfo, collect_load, query_load, query_load_with};
pub use static_info::{
    STATIC_INFO_ERROR_LABEL, StaticInfo, collect_static_info, query_static_info,
    query_static_info_with,
};

/// Rounds `value` to `decimals` places after the point.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Converts a byte count to GiB, rounded to two decimals.
pub fn bytes_to_gib(bytes: u64) -> f64 {
    round_to(
        bytes as f64 / crate::config::BYTES_PER_GIB,
        crate::config::MEMORY_GIB_DECIMALS,
    )
}
