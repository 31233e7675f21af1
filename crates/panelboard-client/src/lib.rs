#![doc = include_str!("../README.md")]

mod client;
mod error;
mod types;

pub use client::PanelboardClient;
pub use error::ClientError;
pub use types::*;
