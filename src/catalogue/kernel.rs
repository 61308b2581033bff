// CLASSIFICATION: COMMUNITY
// Filename: kernel.rs v0.1
// Author: Lukas Bower
// Date Modified: 2027-08-20

use std::time::SystemTime;

use sysctl_codec::ClockInfo;

use crate::field::{Field, ReadWrite};
use crate::namespace::Root;

const CTL_KERN: i32 = 1;
const KERN_OSTYPE: i32 = 1;
const KERN_OSRELEASE: i32 = 2;
const KERN_OSREV: i32 = 3;
const KERN_VERSION: i32 = 4;
const KERN_MAXVNODES: i32 = 5;
const KERN_MAXPROC: i32 = 6;
const KERN_MAXFILES: i32 = 7;
const KERN_HOSTNAME: i32 = 10;
const KERN_HOSTID: i32 = 11;
const KERN_CLOCKRATE: i32 = 12;
const KERN_PROC: i32 = 14;
const KERN_JOB_CONTROL: i32 = 19;
const KERN_BOOTTIME: i32 = 21;
#[cfg(any(target_os = "freebsd", target_os = "dragonfly"))]
const KERN_MAXFILESPERPROC: i32 = 27;
#[cfg(any(target_os = "freebsd", target_os = "dragonfly"))]
const KERN_MAXPROCPERUID: i32 = 28;
#[cfg(not(any(target_os = "freebsd", target_os = "dragonfly")))]
const KERN_MAXFILESPERPROC: i32 = 29;
#[cfg(not(any(target_os = "freebsd", target_os = "dragonfly")))]
const KERN_MAXPROCPERUID: i32 = 30;
#[cfg(any(target_os = "macos", target_os = "ios"))]
const KERN_OSVERSION: i32 = 65;
const KERN_PROC_PID: i32 = 1;

crate::namespace! {
    /// The kernel namespace (`kern`).
    pub struct Kernel: Root = "kern", mib = CTL_KERN;
}

crate::namespace! {
    /// Hypervisor support (`kern.hv`).
    pub struct Hypervisor: Kernel = "hv";
}

crate::namespace! {
    /// Process table (`kern.proc`).
    pub struct Processes: Kernel = "proc", mib = KERN_PROC;
}

crate::namespace! {
    /// Process records selected by id (`kern.proc.pid`).
    pub struct ProcessById: Processes = "pid", mib = KERN_PROC_PID;
}

impl Kernel {
    /// Operating system type (`ostype`).
    pub fn os_type(&self) -> Field<Self, String> {
        Field::new(KERN_OSTYPE, "ostype")
    }

    /// Operating system release (`osrelease`).
    pub fn os_release(&self) -> Field<Self, String> {
        Field::new(KERN_OSRELEASE, "osrelease")
    }

    /// Operating system revision (`osrevision`).
    pub fn os_revision(&self) -> Field<Self, i32> {
        Field::new(KERN_OSREV, "osrevision")
    }

    /// Kernel version banner (`version`).
    pub fn version(&self) -> Field<Self, String> {
        Field::new(KERN_VERSION, "version")
    }

    /// Operating system build (`osversion`).
    #[cfg(any(target_os = "macos", target_os = "ios"))]
    pub fn os_version(&self) -> Field<Self, String> {
        Field::new(KERN_OSVERSION, "osversion")
    }

    /// Operating system build (`osversion`).
    #[cfg(not(any(target_os = "macos", target_os = "ios")))]
    pub fn os_version(&self) -> Field<Self, String> {
        Field::named("osversion")
    }

    /// Host identifier (`hostid`).
    pub fn host_id(&self) -> Field<Self, i32, ReadWrite> {
        Field::new(KERN_HOSTID, "hostid")
    }

    /// Host name (`hostname`).
    pub fn hostname(&self) -> Field<Self, String, ReadWrite> {
        Field::new(KERN_HOSTNAME, "hostname")
    }

    /// Time the system booted (`boottime`).
    pub fn boot_time(&self) -> Field<Self, SystemTime> {
        Field::new(KERN_BOOTTIME, "boottime")
    }

    /// Clock rates (`clockrate`).
    pub fn clock_rate(&self) -> Field<Self, ClockInfo> {
        Field::new(KERN_CLOCKRATE, "clockrate")
    }

    /// Whether the system booted single-user (`singleuser`).
    pub fn single_user(&self) -> Field<Self, bool> {
        Field::named("singleuser")
    }

    /// Whether job control is available (`job_control`).
    pub fn job_control(&self) -> Field<Self, bool> {
        Field::new(KERN_JOB_CONTROL, "job_control")
    }

    /// Maximum open files (`maxfiles`).
    pub fn max_files(&self) -> Field<Self, i32, ReadWrite> {
        Field::new(KERN_MAXFILES, "maxfiles")
    }

    /// Maximum open files per process (`maxfilesperproc`).
    pub fn max_files_per_process(&self) -> Field<Self, i32, ReadWrite> {
        Field::new(KERN_MAXFILESPERPROC, "maxfilesperproc")
    }

    /// Maximum processes (`maxproc`).
    pub fn max_processes(&self) -> Field<Self, i32> {
        Field::new(KERN_MAXPROC, "maxproc")
    }

    /// Maximum processes per user id (`maxprocperuid`).
    pub fn max_processes_per_user(&self) -> Field<Self, i32, ReadWrite> {
        Field::new(KERN_MAXPROCPERUID, "maxprocperuid")
    }

    /// Maximum vnodes (`maxvnodes`).
    pub fn max_vnodes(&self) -> Field<Self, i32, ReadWrite> {
        Field::new(KERN_MAXVNODES, "maxvnodes")
    }

    /// Hypervisor values (`hv`).
    pub fn hypervisor(&self) -> Hypervisor {
        Hypervisor
    }

    /// Process table (`proc`).
    pub fn processes(&self) -> Processes {
        Processes
    }
}

impl Hypervisor {
    /// Whether the hypervisor framework is usable (`supported`).
    pub fn supported(&self) -> Field<Self, bool> {
        Field::named("supported")
    }
}

impl Processes {
    /// Process records selected by id (`pid`).
    pub fn by_id(&self) -> ProcessById {
        ProcessById
    }
}

impl ProcessById {
    /// Raw process record of `pid`. Addressable by number only.
    pub fn record(&self, pid: i32) -> Field<Self, Vec<u8>> {
        Field::numeric(pid)
    }
}

impl Root {
    /// The kernel values (`kern`).
    pub fn kernel(&self) -> Kernel {
        Kernel
    }
}
