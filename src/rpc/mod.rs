//! HTTP JSON-RPC implementation of [`ChainReader`](crate::traits::ChainReader).
//!
//! Available with the `rpc` feature (on by default).

mod client;

pub use client::JsonRpcChainReader;
