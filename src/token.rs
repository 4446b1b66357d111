//! Wire models for the `verifyCustomToken` exchange plus the redacting secret wrapper.

pub mod request;
pub mod response;
pub mod secret;
pub mod service;

pub use request::*;
pub use response::*;
pub use secret::*;
pub use service::*;
