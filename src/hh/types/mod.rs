pub mod applicant;
pub mod common;
pub mod employer;
pub mod shared;

pub use applicant::*;
pub use common::*;
pub use employer::*;
pub use shared::*;
