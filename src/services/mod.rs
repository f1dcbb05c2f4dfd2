pub mod publisher;
pub mod reporter;
pub mod repository;

pub use publisher::ChangelogPublisher;
pub use reporter::StatusReporter;
pub use repository::{Comparison, RepositoryService};
