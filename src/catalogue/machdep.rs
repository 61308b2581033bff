// CLASSIFICATION: COMMUNITY
// Filename: machdep.rs v0.1
// Author: Lukas Bower
// Date Modified: 2027-08-20

use crate::field::Field;
use crate::namespace::Root;

const CTL_MACHDEP: i32 = 7;

crate::namespace! {
    /// Machine-dependent values (`machdep`).
    pub struct Machdep: Root = "machdep", mib = CTL_MACHDEP;
}

crate::namespace! {
    /// CPU description (`machdep.cpu`).
    pub struct MachdepCpu: Machdep = "cpu";
}

impl Machdep {
    /// CPU values (`cpu`).
    pub fn cpu(&self) -> MachdepCpu {
        MachdepCpu
    }
}

impl MachdepCpu {
    /// Marketing name of the CPU (`brand_string`).
    pub fn brand_string(&self) -> Field<Self, String> {
        Field::named("brand_string")
    }
}

impl Root {
    /// The machine-dependent values (`machdep`).
    pub fn machine_dependent(&self) -> Machdep {
        Machdep
    }
}
