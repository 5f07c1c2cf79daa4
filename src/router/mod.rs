//! Router, pair, factory and ERC-20 call encoding.
//!
//! Everything the swap flow sends to or reads from the chain is built here
//! from `sol!`-generated bindings, so the calldata is byte-for-byte what the
//! deployed contracts expect.

pub mod abi;
mod operation;
mod pair;
mod transaction;

pub use operation::SwapOperation;
pub use pair::{pair_address, INIT_CODE_HASH};
pub use transaction::{
    approve, decode_allowance, decode_balance_of, decode_get_pair, decode_get_reserves,
    encode_allowance, encode_balance_of, encode_get_pair, encode_get_reserves, TransactionRequest,
};
