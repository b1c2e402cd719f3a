use alloy::primitives::Address;

/// Sub-ledger under one wallet, identified by the owner and a short name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Subaccount {
    owner: Address,
    name: String,
}

impl Subaccount {
    pub fn new(owner: Address, name: impl Into<String>) -> Self {
        Self {
            owner,
            name: name.into(),
        }
    }

    pub fn owner(&self) -> Address {
        self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
