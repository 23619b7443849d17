mod error;
pub mod memory;
mod notify;
mod phone;
mod relay;
mod store;
mod submission;
mod value_object;

pub use error::*;
pub use notify::*;
pub use phone::*;
pub use relay::*;
pub use store::*;
pub use submission::*;
pub use value_object::*;
