//! Account key set.
//!
//! Keys arrive already serialized; the wallet passes them along without
//! inspecting them.

use std::fmt;

#[derive(Clone)]
pub struct AccountKeySet {
    /// Serialized payment address; used as the trader address.
    pub payment_address: String,
    /// Serialized public key; recorded in history.
    pub public_key: String,
    private_key: String,
}

impl AccountKeySet {
    pub fn new(
        payment_address: impl Into<String>,
        public_key: impl Into<String>,
        private_key: impl Into<String>,
    ) -> Self {
        Self {
            payment_address: payment_address.into(),
            public_key: public_key.into(),
            private_key: private_key.into(),
        }
    }

    /// Serialized private key handed to the proof engine for signing.
    pub fn private_key(&self) -> &str {
        &self.private_key
    }
}

impl fmt::Debug for AccountKeySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccountKeySet")
            .field("payment_address", &self.payment_address)
            .field("public_key", &self.public_key)
            .field("private_key", &"<redacted>")
            .finish()
    }
}
