//! Contact form submissions.
//!
//! A submission is built from user input, validated, sent once and dropped.
//! Nothing here is stored.

pub mod response;
pub mod submission;

pub use response::{ApiResponse, DEMO_ACKNOWLEDGEMENT};
pub use submission::{ContactSubmission, InquiryType, ValidatedSubmission};
