//! PostgreSQL queries, one module per table.

pub mod contact_submissions;
pub mod faqs;
pub mod portfolio;
pub mod process_steps;
pub mod services;
pub mod testimonials;
