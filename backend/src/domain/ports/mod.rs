//! Domain ports and supporting types for the hexagonal boundary.

mod application_command;
mod application_query;
mod application_repository;
mod feedback_command;
mod feedback_repository;
mod job_command;
mod job_query;
mod job_repository;
mod notifier;

#[cfg(test)]
pub use application_command::MockApplicationCommand;
pub use application_command::{ApplicationCommand, FixtureApplicationCommand, SubmitApplicationOutcome};
#[cfg(test)]
pub use application_query::MockApplicationQuery;
pub use application_query::{ApplicationQuery, FixtureApplicationQuery};
#[cfg(test)]
pub use application_repository::MockApplicationRepository;
pub use application_repository::{ApplicationRepository, ApplicationRepositoryError};
#[cfg(test)]
pub use feedback_command::MockFeedbackCommand;
pub use feedback_command::{FeedbackCommand, FixtureFeedbackCommand};
#[cfg(test)]
pub use feedback_repository::MockFeedbackRepository;
pub use feedback_repository::{FeedbackRepository, FeedbackRepositoryError};
#[cfg(test)]
pub use job_command::MockJobCommand;
pub use job_command::{FixtureJobCommand, JobCommand};
#[cfg(test)]
pub use job_query::MockJobQuery;
pub use job_query::{FixtureJobQuery, JobQuery};
#[cfg(test)]
pub use job_repository::MockJobRepository;
pub use job_repository::{JobRepository, JobRepositoryError};
#[cfg(test)]
pub use notifier::MockFeedbackNotifier;
pub use notifier::{FeedbackNotifier, NotifierError};
