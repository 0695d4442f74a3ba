#![allow(unused_imports)]

pub(crate) mod jwt_helper;
pub(crate) mod stubs;
pub(crate) mod test_server;

pub use jwt_helper::*;
