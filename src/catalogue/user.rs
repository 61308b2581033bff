// CLASSIFICATION: COMMUNITY
// Filename: user.rs v0.1
// Author: Lukas Bower
// Date Modified: 2027-08-20

use crate::field::{Field, ReadWrite};
use crate::namespace::Root;

const CTL_USER: i32 = 8;
const USER_CS_PATH: i32 = 1;

crate::namespace! {
    /// The user-level namespace (`user`).
    pub struct User: Root = "user", mib = CTL_USER;
}

impl User {
    /// Default search path for standard utilities (`cs_path`).
    pub fn cs_path(&self) -> Field<Self, String, ReadWrite> {
        Field::new(USER_CS_PATH, "cs_path")
    }
}

impl Root {
    /// The user-level values (`user`).
    pub fn user(&self) -> User {
        User
    }
}
