use std::io::Write;

use crate::{
    config::{CPU_SAMPLE_INTERVAL, USAGE_PERCENT_DECIMALS},
    errors,
    report,
    system::{HostSource, MemoryUsage, SysinfoHost},
};

use super::round_to;

pub const LOAD_ERROR_LABEL: &str = "시스템 부하 조회 에러";

/// Current CPU and memory utilization, both in `[0, 100]`.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LoadInfo {
    #[serde(rename = "CPU_실시간_사용량_%")]
    pub cpu_usage_percent: f64,
    #[serde(rename = "메모리_실시간_사용량_%")]
    pub memory_usage_percent: f64,
}

/// Samples CPU usage over [`CPU_SAMPLE_INTERVAL`] and reads current memory usage.
///
/// Blocks for the full sampling window.
pub fn collect_load<H: HostSource + ?Sized>(host: &mut H) -> errors::Result<LoadInfo> {
    log::debug!(
        "Sampling CPU usage over {} ms",
        CPU_SAMPLE_INTERVAL.as_millis()
    );

    let cpu_usage = f64::from(host.cpu_usage_over(CPU_SAMPLE_INTERVAL)?);
    let memory = host.memory()?;

    Ok(LoadInfo {
        cpu_usage_percent: to_percent(cpu_usage, "CPU usage")?,
        memory_usage_percent: to_percent(memory_usage_ratio(memory)?, "memory usage")?,
    })
}

/// Queries the local machine and prints the result to stdout.
pub fn query_load() -> errors::Result<LoadInfo> {
    let outcome = SysinfoHost::new().and_then(|mut host| collect_load(&mut host));
    let mut stdout = std::io::stdout().lock();

    report::emit(&mut stdout, LOAD_ERROR_LABEL, outcome)
}

/// Same as [`query_load`], against an arbitrary host and output.
pub fn query_load_with<H: HostSource + ?Sized, W: Write>(
    host: &mut H,
    out: &mut W,
) -> errors::Result<LoadInfo> {
    report::emit(out, LOAD_ERROR_LABEL, collect_load(host))
}

// 사용 중인 메모리 = total - available
fn memory_usage_ratio(memory: MemoryUsage) -> errors::Result<f64> {
    if memory.total == 0 {
        return Err(errors::Errors::MemoryUnavailable(
            "host reported 0 bytes of total memory".to_string(),
        ));
    }

    let used = memory.total.saturating_sub(memory.available);
    Ok(used as f64 / memory.total as f64 * 100.0)
}

fn to_percent(value: f64, what: &str) -> errors::Result<f64> {
    if !value.is_finite() {
        return Err(errors::Errors::InvalidMetric(format!(
            "{} is not a finite number: {}",
            what, value
        )));
    }

    Ok(round_to(value, USAGE_PERCENT_DECIMALS).clamp(0.0, 100.0))
}
