//! Core models of the site: animation state machines, pricing and form
//! validation, plus the server-side exchange-rate endpoint.
//!
//! Everything here is independent of the browser so it can be unit tested.

#[cfg(feature = "ssr")]
pub mod config;
#[cfg(feature = "ssr")]
pub mod exchange_rates;

pub mod contact;
pub mod content;
pub mod counter;
pub mod frame;
pub mod orbit;
pub mod pricing;
pub mod reveal;
pub mod trail;

pub use contact::{ContactError, ContactField, ContactForm};
pub use counter::CountUp;
pub use frame::{FrameClock, FrameControl};
pub use orbit::{NodePlacement, OrbitState};
pub use pricing::{BillingCycle, Currency, ExchangeRates, PriceQuote, RateStatus, RatesResponse};
pub use reveal::{Direction, RevealConfig, RevealState, RevealStyle};
pub use trail::{TrailConfig, TrailField};
