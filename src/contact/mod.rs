//! Lead Capture Module
//!
//! Handles the website's contact form and sample-report request endpoints.
//!
//! ## Workflow
//! 1. **Validate**: Required fields must be non-blank and the email address
//!    must look deliverable.
//! 2. **Record**: Accepted submissions are logged with a generated reference
//!    id so they can be followed up out of band. No mail is sent from here.
//! 3. **Acknowledge**: The caller gets a success/failure JSON body; rejected
//!    submissions name the first failed check.

pub mod handlers;
pub mod types;
