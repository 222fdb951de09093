// Read-only views over the static tables, for populating the submission form.

pub mod catalog;
pub mod handlers;
