pub mod discord;
pub mod file;
pub mod github;
pub mod status;
