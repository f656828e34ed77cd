pub mod activity_log;
pub mod user;
