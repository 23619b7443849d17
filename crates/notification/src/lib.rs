mod service;
mod sms;
pub(crate) mod template;

pub use service::*;
pub use sms::*;
