use std::io::Write;

use crate::{
    errors,
    report,
    system::{HostSource, SysinfoHost},
};

use super::bytes_to_gib;

pub const STATIC_INFO_ERROR_LABEL: &str = "시스템 정보 조회 에러";

/// Host attributes that do not change while the program runs.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StaticInfo {
    #[serde(rename = "운영체계")]
    pub os_name: String,
    #[serde(rename = "운영체계_버전")]
    pub os_version: String,
    #[serde(rename = "CPU_타입")]
    pub cpu_type: String,
    #[serde(rename = "CPU_코어_수")]
    pub cpu_core_count: usize,
    #[serde(rename = "메모리_크기_GB")]
    pub memory_total_gib: f64,
}

/// Reads every static attribute from `host`. Any failing read fails the whole record.
pub fn collect_static_info<H: HostSource + ?Sized>(host: &mut H) -> errors::Result<StaticInfo> {
    log::debug!("Collecting static host information");

    let os_name = host.os_name()?;
    let os_version = host.os_version()?;
    let cpu_type = host.cpu_type()?;

    let cpu_core_count = host.physical_core_count()?;
    if cpu_core_count == 0 {
        return Err(errors::Errors::CoreCountUnavailable(
            "host reported 0 physical cores".to_string(),
        ));
    }

    let memory = host.memory()?;

    Ok(StaticInfo {
        os_name,
        os_version,
        cpu_type,
        cpu_core_count,
        memory_total_gib: bytes_to_gib(memory.total),
    })
}

/// Queries the local machine and prints the result to stdout.
pub fn query_static_info() -> errors::Result<StaticInfo> {
    let outcome = SysinfoHost::new().and_then(|mut host| collect_static_info(&mut host));
    let mut stdout = std::io::stdout().lock();

    report::emit(&mut stdout, STATIC_INFO_ERROR_LABEL, outcome)
}

/// Same as [`query_static_info`], against an arbitrary host and output.
pub fn query_static_info_with<H: HostSource + ?Sized, W: Write>(
    host: &mut H,
    out: &mut W,
) -> errors::Result<StaticInfo> {
    report::emit(out, STATIC_INFO_ERROR_LABEL, collect_static_info(host))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::FakeHost;

    #[test]
    fn test_collect_from_idle_host() {
        let mut host = FakeHost::idle();
        let info = collect_static_info(&mut host).unwrap();

        assert_eq!(info.os_name, "Linux");
        assert_eq!(info.cpu_type, "Intel(R) Xeon(R) CPU E5-2680 v4 @ 2.40GHz");
        assert_eq!(info.cpu_core_count, 8);
        assert_eq!(info.memory_total_gib, 16.00);
    }

    #[test]
    fn test_empty_cpu_type_is_not_an_error() {
        let mut host = FakeHost::idle();
        host.cpu_type = String::new();

        let info = collect_static_info(&mut host).unwrap();
        assert_eq!(info.cpu_type, "");
    }

    #[test]
    fn test_missing_core_count_fails_whole_record() {
        let mut host = FakeHost::idle();
        host.physical_cores = None;

        let mut out = Vec::new();
        let result = query_static_info_with(&mut host, &mut out);

        assert!(matches!(
            result,
            Err(errors::Errors::CoreCountUnavailable(_))
        ));
        let printed = String::from_utf8(out).unwrap();
        assert!(printed.starts_with("시스템 정보 조회 에러: Core Count Unavailable"));
    }

    #[test]
    fn test_zero_core_count_is_rejected() {
        let mut host = FakeHost::idle();
        host.physical_cores = Some(0);

        let mut out = Vec::new();
        let result = query_static_info_with(&mut host, &mut out);

        assert!(matches!(
            result,
            Err(errors::Errors::CoreCountUnavailable(_))
        ));
        let printed = String::from_utf8(out).unwrap();
        assert_eq!(
            printed,
            "시스템 정보 조회 에러: Core Count Unavailable: host reported 0 physical cores\n"
        );
    }

    #[test]
    fn test_injected_failure_prints_diagnostic() {
        let mut host = FakeHost::failing(errors::Errors::UnsupportedSystem(
            "permission denied".to_string(),
        ));

        let mut out = Vec::new();
        let result = query_static_info_with(&mut host, &mut out);

        assert!(result.is_err());
        let printed = String::from_utf8(out).unwrap();
        assert_eq!(
            printed,
            "시스템 정보 조회 에러: Unsupported System: permission denied\n"
        );
    }

    #[test]
    fn test_printed_json_keeps_field_order() {
        let mut host = FakeHost::idle();
        let mut out = Vec::new();
        let info = query_static_info_with(&mut host, &mut out).unwrap();

        let printed = String::from_utf8(out).unwrap();
        let labels = [
            "\"운영체계\"",
            "\"운영체계_버전\"",
            "\"CPU_타입\"",
            "\"CPU_코어_수\"",
            "\"메모리_크기_GB\"",
        ];
        let positions: Vec<usize> = labels
            .iter()
            .map(|label| printed.find(label).unwrap())
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(printed.contains("\n    \"CPU_코어_수\": 8,\n"));

        let parsed: StaticInfo = serde_json::from_str(&printed).unwrap();
        assert_eq!(parsed, info);
    }

    #[test]
    fn test_query_static_info_on_local_host() {
        if !sysinfo::IS_SUPPORTED_SYSTEM {
            return;
        }

        if let Ok(info) = query_static_info() {
            assert!(info.cpu_core_count >= 1);
            assert!(info.memory_total_gib >= 0.0);
            assert!(!info.os_name.is_empty());
        }
    }

    #[test]
    fn test_query_local_host() {
        let mut out = Vec::new();
        let Ok(mut host) = SysinfoHost::new() else {
            return;
        };

        // 물리 코어 수를 제공하지 않는 호스트도 있음
        if let Ok(info) = query_static_info_with(&mut host, &mut out) {
            assert!(info.cpu_core_count >= 1);
            assert!(info.memory_total_gib >= 0.0);
        }
    }
}
