pub mod contact;
pub mod faq;
pub mod portfolio;
pub mod process_step;
pub mod service;
pub mod testimonial;

pub use contact::ContactSubmission;
pub use faq::Faq;
pub use portfolio::PortfolioProject;
pub use process_step::ProcessStep;
pub use service::Service;
pub use testimonial::Testimonial;
