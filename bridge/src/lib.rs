//! Token Bridge Contract - Single-Asset Cross-Network Transfers
//!
//! This contract moves one fungible CW20 asset between two networks by
//! locking it here and letting a trusted relay release the equivalent
//! amount on the other side.
//!
//! # Outbound Flow (Cross)
//! 1. User approves the bridge on the locked asset, then calls `Cross`
//! 2. The bridge pulls the gross amount into custody, forwards the flat
//!    fee to the relay, and issues a per-route monotonic nonce
//! 3. The off-system relayer observes the crossing record and submits a
//!    `Deliver` on the destination network for the net amount
//!
//! # Inbound Flow (Deliver)
//! 1. The relay submits `Deliver` with the source route and nonce
//! 2. The (route, nonce) pair is checked against the replay set and marked
//!    consumed before any funds move
//! 3. Tokens are released from custody to the recipient
//!
//! # Roles
//! - Owner: full administration, handed over via a two-step protocol
//! - Relay: the single identity trusted to execute deliveries
//! - Guardian: may only unset the relay (emergency shutoff)
//!
//! The entry points act as the control proxy: they own all storage and
//! dispatch calls to the logic handlers, while the logic pointer stays
//! swappable by the owner without touching persistent state.

pub mod contract;
pub mod error;
mod execute;
pub mod msg;
mod query;
pub mod state;

pub use crate::error::ContractError;
