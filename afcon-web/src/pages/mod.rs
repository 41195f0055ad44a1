pub mod dashboard;
pub mod error;
pub mod home;
pub mod login;
pub mod matches;
pub mod teams;
pub mod tickets;
pub mod under_construction;
