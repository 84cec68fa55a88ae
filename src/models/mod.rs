pub mod notice;
pub mod session;
pub mod submission;
