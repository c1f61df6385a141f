pub mod bids;
pub mod conversations;
pub mod job_categories;
pub mod jobs;
pub mod messages;
pub mod notifications;
pub mod tool_categories;
pub mod tools;
pub mod transactions;
pub mod users;
