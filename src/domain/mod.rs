//! Fundamental domain value types used throughout the pool library.
//!
//! Addresses, amounts, liquidity shares, the asset pair, operation receipts
//! and events.  All types are small `Copy` newtypes or plain records with
//! validated constructors where an invariant exists.

mod address;
mod amount;
mod asset_pair;
mod event;
mod liquidity;
mod receipt;

pub use address::Address;
pub use amount::Amount;
pub use asset_pair::{AssetPair, Side};
pub use event::PoolEvent;
pub use liquidity::Liquidity;
pub use receipt::{DepositReceipt, SwapReceipt, WithdrawalReceipt};
