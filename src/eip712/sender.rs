use alloy::primitives::B256;

use super::SigningError;
use crate::types::Subaccount;

/// Maximum length of a subaccount name in bytes.
pub const SUBACCOUNT_NAME_BYTES: usize = 12;

/// Collapses a subaccount into the `bytes32` sender of signed requests.
pub trait SenderEncoder {
    fn encode(&self, subaccount: &Subaccount) -> Result<B256, SigningError>;
}

/// Owner address followed by the UTF-8 name right-padded with zeroes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PackedSender;

impl SenderEncoder for PackedSender {
    fn encode(&self, subaccount: &Subaccount) -> Result<B256, SigningError> {
        let name = subaccount.name().as_bytes();
        if name.len() > SUBACCOUNT_NAME_BYTES {
            return Err(SigningError::SubaccountNameTooLong(
                subaccount.name().to_string(),
            ));
        }
        let mut sender = B256::ZERO;
        sender[..20].copy_from_slice(subaccount.owner().as_slice());
        sender[20..20 + name.len()].copy_from_slice(name);
        Ok(sender)
    }
}
