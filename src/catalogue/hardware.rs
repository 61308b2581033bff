// CLASSIFICATION: COMMUNITY
// Filename: hardware.rs v0.1
// Author: Lukas Bower
// Date Modified: 2027-08-20

use crate::field::Field;
use crate::namespace::Root;

const CTL_HW: i32 = 6;
const HW_MACHINE: i32 = 1;
const HW_MODEL: i32 = 2;
const HW_NCPU: i32 = 3;
const HW_PAGESIZE: i32 = 7;
#[cfg(any(target_os = "macos", target_os = "ios"))]
const HW_MEMSIZE: i32 = 24;

crate::namespace! {
    /// The hardware namespace (`hw`).
    pub struct Hardware: Root = "hw", mib = CTL_HW;
}

impl Hardware {
    /// Machine class (`machine`).
    pub fn machine(&self) -> Field<Self, String> {
        Field::new(HW_MACHINE, "machine")
    }

    /// Model identifier (`model`).
    pub fn model(&self) -> Field<Self, String> {
        Field::new(HW_MODEL, "model")
    }

    /// Number of logical CPUs (`ncpu`).
    pub fn cpu_count(&self) -> Field<Self, i32> {
        Field::new(HW_NCPU, "ncpu")
    }

    /// Number of physical CPUs (`physicalcpu`).
    pub fn physical_cpus(&self) -> Field<Self, i32> {
        Field::named("physicalcpu")
    }

    /// Page size in bytes (`pagesize`).
    pub fn page_size(&self) -> Field<Self, i32> {
        Field::new(HW_PAGESIZE, "pagesize")
    }

    /// Physical memory in bytes (`memsize`).
    #[cfg(any(target_os = "macos", target_os = "ios"))]
    pub fn memory_size(&self) -> Field<Self, i64> {
        Field::new(HW_MEMSIZE, "memsize")
    }

    /// Physical memory in bytes (`memsize`).
    #[cfg(not(any(target_os = "macos", target_os = "ios")))]
    pub fn memory_size(&self) -> Field<Self, i64> {
        Field::named("memsize")
    }
}

impl Root {
    /// The hardware values (`hw`).
    pub fn hardware(&self) -> Hardware {
        Hardware
    }
}
