mod server;

pub use server::{relay, serve};
