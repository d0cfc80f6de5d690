use std::time::Duration;

// CPU 사용률을 평균내는 고정 샘플링 구간
pub const CPU_SAMPLE_INTERVAL: Duration = Duration::from_secs(1);

pub const BYTES_PER_GIB: f64 = (1024u64 * 1024 * 1024) as f64; // 1024^3

pub const MEMORY_GIB_DECIMALS: i32 = 2;
pub const USAGE_PERCENT_DECIMALS: i32 = 1;

pub const JSON_INDENT: &[u8] = b"    ";

pub const STATIC_INFO_HEADER: &str = "--- 미션 컴퓨터 시스템 정보 ---";
pub const LOAD_HEADER: &str = "--- 미션 컴퓨터 부하 상태 ---";

pub const DEFAULT_LOG_LEVEL: &str = "warn";
