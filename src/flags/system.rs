//! Host machine facts

use crate::di::SystemResources;
use sysinfo::{CpuRefreshKind, RefreshKind, System};

/// Reads memory and CPU information from the running machine
#[derive(Debug, Default, Clone, Copy)]
pub struct HostSystem;

impl HostSystem {
    pub fn new() -> Self {
        Self
    }
}

impl SystemResources for HostSystem {
    fn total_memory_bytes(&self) -> u64 {
        let mut system = System::new();
        system.refresh_memory();
        system.total_memory()
    }

    /// Every logical CPU on the machine, regardless of cgroup or affinity
    /// limits on this process
    fn logical_cpus(&self) -> usize {
        let system =
            System::new_with_specifics(RefreshKind::new().with_cpu(CpuRefreshKind::new()));
        system.cpus().len().max(1)
    }
}
