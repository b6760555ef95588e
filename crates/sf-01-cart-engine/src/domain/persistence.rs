//! # Persisted Cart Slot
//!
//! One slot per category, keyed by `CategoryId::storage_key()`, holding the
//! full ledger as a JSON object:
//!
//! ```text
//! andrew-poultry-farm-cart  →  {"p1":3,"p4":1}
//! ```
//!
//! There is no version field. Content that does not decode into a ledger of
//! positive integers (bad JSON, non-object, zero or negative quantities) is
//! treated as corrupt.

use super::errors::SlotCodecError;
use super::ledger::CartLedger;

/// Serialize the full ledger for its slot.
pub fn encode_ledger(ledger: &CartLedger) -> Result<String, SlotCodecError> {
    serde_json::to_string(ledger).map_err(|e| SlotCodecError(e.to_string()))
}

/// Decode slot content into a ledger.
///
/// # Errors
/// Returns `SlotCodecError` for any content that is not a valid ledger.
pub fn decode_ledger(raw: &str) -> Result<CartLedger, SlotCodecError> {
    serde_json::from_str(raw).map_err(|e| SlotCodecError(e.to_string()))
}
