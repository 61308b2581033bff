// CLASSIFICATION: COMMUNITY
// Filename: vm.rs v0.1
// Author: Lukas Bower
// Date Modified: 2027-08-20

use sysctl_codec::LoadAverages;

use crate::field::{Field, ReadWrite};
use crate::namespace::Root;

const CTL_VM: i32 = 2;
const VM_LOADAVG: i32 = 2;

crate::namespace! {
    /// The virtual memory namespace (`vm`).
    pub struct VirtualMemory: Root = "vm", mib = CTL_VM;
}

impl VirtualMemory {
    /// 1, 5 and 15 minute load averages (`loadavg`).
    pub fn load_average(&self) -> Field<Self, LoadAverages> {
        Field::new(VM_LOADAVG, "loadavg")
    }

    /// Whether swapping is enabled (`swap_enabled`).
    pub fn swap_enabled(&self) -> Field<Self, bool, ReadWrite> {
        Field::named("swap_enabled")
    }
}

impl Root {
    /// The virtual memory values (`vm`).
    pub fn virtual_memory(&self) -> VirtualMemory {
        VirtualMemory
    }
}
