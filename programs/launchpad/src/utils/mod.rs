pub mod access;
pub mod math;
pub mod merkle;
pub mod schedule;
pub mod transfer;
