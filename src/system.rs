use std::time::Duration;

use sysinfo::System;

use crate::errors;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryUsage {
    pub total: u64,     // bytes
    pub available: u64, // bytes
}

/// Host introspection used by the probes.
///
/// [`SysinfoHost`] reads the real machine; tests swap in a scripted host.
pub trait HostSource {
    /// Platform family ("Linux", "Windows", "Darwin", ...).
    fn os_name(&self) -> errors::Result<String>;

    fn os_version(&self) -> errors::Result<String>;

    /// Processor identifier. An empty string is a valid answer.
    fn cpu_type(&mut self) -> errors::Result<String>;

    /// Physical cores only, hyperthreads excluded.
    fn physical_core_count(&self) -> errors::Result<usize>;

    fn memory(&mut self) -> errors::Result<MemoryUsage>;

    /// Global CPU utilization averaged over `window`. Blocks the caller for the whole window.
    fn cpu_usage_over(&mut self, window: Duration) -> errors::Result<f32>;
}

pub struct SysinfoHost {
    sys: System,
}

impl SysinfoHost {
    pub fn new() -> errors::Result<Self> {
        if !sysinfo::IS_SUPPORTED_SYSTEM {
            return Err(errors::Errors::UnsupportedSystem(format!(
                "sysinfo cannot read metrics on {}",
                std::env::consts::OS
            )));
        }

        Ok(Self { sys: System::new() })
    }
}

impl HostSource for SysinfoHost {
    fn os_name(&self) -> errors::Result<String> {
        Ok(os_family(std::env::consts::OS).to_string())
    }

    fn os_version(&self) -> errors::Result<String> {
        // unix는 uname의 version, 그 외에는 커널/OS 버전으로 대체
        Ok(platform_version()
            .or_else(System::kernel_version)
            .or_else(System::os_version)
            .unwrap_or_default())
    }

    fn cpu_type(&mut self) -> errors::Result<String> {
        self.sys.refresh_cpu_all();

        Ok(self
            .sys
            .cpus()
            .first()
            .map(|cpu| cpu.brand().trim().to_string())
            .unwrap_or_default())
    }

    fn physical_core_count(&self) -> errors::Result<usize> {
        // 0개 보고는 collect_static_info에서 거부
        System::physical_core_count().ok_or_else(|| {
            errors::Errors::CoreCountUnavailable(
                "physical core count is not available on this host".to_string(),
            )
        })
    }

    fn memory(&mut self) -> errors::Result<MemoryUsage> {
        self.sys.refresh_memory();

        Ok(MemoryUsage {
            total: self.sys.total_memory(),
            available: self.sys.available_memory(),
        })
    }

    fn cpu_usage_over(&mut self, window: Duration) -> errors::Result<f32> {
        // 첫 refresh는 기준점만 잡고, window 뒤의 refresh와의 차이로 사용률을 계산
        self.sys.refresh_cpu_usage();
        std::thread::sleep(window);
        self.sys.refresh_cpu_usage();

        Ok(self.sys.global_cpu_usage())
    }
}

/// Build/version string of the running kernel (`uname -v`).
#[cfg(unix)]
fn platform_version() -> Option<String> {
    let mut uts: libc::utsname = unsafe { std::mem::zeroed() };

    if unsafe { libc::uname(&mut uts) } != 0 {
        log::warn!("uname failed: {}", std::io::Error::last_os_error());
        return None;
    }

    let version = unsafe { std::ffi::CStr::from_ptr(uts.version.as_ptr()) };
    Some(version.to_string_lossy().trim().to_string())
}

#[cfg(not(unix))]
fn platform_version() -> Option<String> {
    None
}

fn os_family(os: &str) -> &str {
    match os {
        "linux" => "Linux",
        "windows" => "Windows",
        "macos" => "Darwin",
        "freebsd" => "FreeBSD",
        "netbsd" => "NetBSD",
        "openbsd" => "OpenBSD",
        "android" => "Android",
        "ios" => "iOS",
        other => other,
    }
}

#[cfg(test)]
pub(crate) struct FakeHost {
    pub os_name: String,
    pub os_version: String,
    pub cpu_type: String,
    pub physical_cores: Option<usize>,
    pub memory: MemoryUsage,
    pub cpu_usage: f32,
    pub failure: Option<errors::Errors>,
    pub sampled_windows: Vec<Duration>,
}

#[cfg(test)]
impl FakeHost {
    // 8 physical cores, 16 GiB, idle
    pub fn idle() -> Self {
        Self {
            os_name: "Linux".to_string(),
            os_version: "#1 SMP PREEMPT_DYNAMIC".to_string(),
            cpu_type: "Intel(R) Xeon(R) CPU E5-2680 v4 @ 2.40GHz".to_string(),
            physical_cores: Some(8),
            memory: MemoryUsage {
                total: 17_179_869_184,
                available: 12_884_901_888,
            },
            cpu_usage: 0.0,
            failure: None,
            sampled_windows: vec![],
        }
    }

    pub fn failing(error: errors::Errors) -> Self {
        Self {
            failure: Some(error),
            ..Self::idle()
        }
    }

    fn check(&self) -> errors::Result<()> {
        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
impl HostSource for FakeHost {
    fn os_name(&self) -> errors::Result<String> {
        self.check()?;
        Ok(self.os_name.clone())
    }

    fn os_version(&self) -> errors::Result<String> {
        self.check()?;
        Ok(self.os_version.clone())
    }

    fn cpu_type(&mut self) -> errors::Result<String> {
        self.check()?;
        Ok(self.cpu_type.clone())
    }

    fn physical_core_count(&self) -> errors::Result<usize> {
        self.check()?;
        self.physical_cores.ok_or_else(|| {
            errors::Errors::CoreCountUnavailable("fake host has no core count".to_string())
        })
    }

    fn memory(&mut self) -> errors::Result<MemoryUsage> {
        self.check()?;
        Ok(self.memory)
    }

    fn cpu_usage_over(&mut self, window: Duration) -> errors::Result<f32> {
        self.check()?;
        self.sampled_windows.push(window);
        Ok(self.cpu_usage)
    }
}
