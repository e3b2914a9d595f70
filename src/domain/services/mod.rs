//! Domain Services
//!
//! Pure business logic over domain entities. No I/O.

pub mod grammar;
pub mod sidecar;

pub use grammar::{parse as parse_name, Rejection, SIDECAR_SUFFIX};
pub use sidecar::{declared_name, SidecarValidator, Violation};
