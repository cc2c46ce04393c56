pub mod backup;
pub mod log;
pub mod messages;
pub mod purge;
pub mod register;
pub mod resolver;
pub mod worker;
