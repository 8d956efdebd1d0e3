mod auth;
mod client;
mod register;
mod utils;

pub use client::CeremonyClient;
