//! Site pages
//!
//! - Home (hero, highlights, CRM modules, directory statistics)
//! - Features (client app orbit, CRM features, local discovery)
//! - How It Works (launch steps)
//! - Pricing (currency and billing cycle selection)
//! - FAQ (category filter, accordion)
//! - Contact (validated form)
//! - Not found

mod contact;
mod faq;
mod features;
mod home;
mod how_it_works;
mod not_found;
mod pricing;
mod sections;

pub use contact::ContactPage;
pub use faq::{FaqAccordion, FaqPage};
pub use features::FeaturesPage;
pub use home::HomePage;
pub use how_it_works::HowItWorksPage;
pub use not_found::NotFoundPage;
pub use pricing::PricingPage;
