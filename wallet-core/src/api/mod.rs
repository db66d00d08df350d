// wallet-core/src/api/mod.rs

//! Collaborator-facing API. UI / CLI chỉ gọi vào [`WalletEngine`].

pub mod engine;

pub use engine::WalletEngine;
