pub mod allowlist;
pub mod participants;
pub mod sale;
pub mod vesting;

pub use allowlist::*;
pub use participants::*;
pub use sale::*;
pub use vesting::*;
