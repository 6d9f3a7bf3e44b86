//! Capabilities the pool consumes from its host.
//!
//! The pool owns its reserve accounting and share ledger, but never the
//! assets themselves: balances and transfers belong to an external
//! [`AssetLedger`].

mod asset_ledger;

pub use asset_ledger::AssetLedger;
