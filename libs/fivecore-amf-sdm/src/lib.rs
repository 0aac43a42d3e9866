//! FiveCore AMF SDM Consumer
//!
//! AMF-side client for the UDM's SubscriberDataManagement service
//! (Nudm_SDM): retrieve subscriber profile data, subscribe to data-change
//! notifications, and fold the results into the per-UE record.
//!
//! Every operation resolves to exactly one of three outcomes: `Ok`
//! (record updated per the operation's merge rule), a structured
//! [`ProblemDetails`](fivecore_sbi::models::ProblemDetails) the UDM sent
//! ([`SdmError::Problem`]), or a transport failure
//! ([`SdmError::NoResponse`] / [`SdmError::Transport`]). Callers branch
//! on the error variant to decide whether a rejection is recoverable.

pub mod consumer;
pub mod context;
pub mod error;
pub mod nudm_build;
pub mod nudm_handler;


pub use consumer::SdmConsumer;
pub use context::AmfUe;
pub use error::{SdmError, SdmResult};
