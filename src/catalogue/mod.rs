// CLASSIFICATION: COMMUNITY
// Filename: mod.rs v0.1
// Author: Lukas Bower
// Date Modified: 2027-08-20

//! Declarative catalogue of well-known registry namespaces and fields.
//!
//! Numbers follow the Darwin headers. Where FreeBSD assigns a different number
//! the constant is switched on the target; fields that only exist by name on a
//! platform are declared by name there.

mod hardware;
mod kernel;
mod machdep;
mod network;
mod user;
mod vm;

pub use hardware::Hardware;
pub use kernel::{Hypervisor, Kernel, ProcessById, Processes};
pub use machdep::{Machdep, MachdepCpu};
pub use network::{Inet, Inet6, Inet6Icmp, Inet6Ip, InetIcmp, InetIp, InetUdp, Networking};
pub use user::User;
pub use vm::VirtualMemory;
