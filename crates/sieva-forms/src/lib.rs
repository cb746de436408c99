//! Form-validation schemas for the site's submission flows: job
//! application, sign-up, sign-in, and profile edits.
//!
//! Validation is collecting, not bailing: every rule runs and every
//! issue lands in the [`FormReport`], so a form can mark all offending
//! fields in one pass.

pub mod report;
pub mod rules;
pub mod schemas;

pub use report::FormReport;
pub use schemas::{ApplicationForm, ProfileForm, SignInForm, SignUpForm};
