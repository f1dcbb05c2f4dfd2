pub mod changelog;
pub mod release;
