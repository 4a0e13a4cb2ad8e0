//! Owned coins (unspent outputs) as seen by the wallet.

use crate::amount::{Amount, AmountError};
use serde::{Deserialize, Serialize};

/// An unspent value record owned by the wallet.
///
/// `serial_number` identifies the coin once spent and is unique per coin.
/// `snd` is the coin's reference as cached by the wallet (its serial number
/// derivator); it is carried through to history records so caches can mark
/// the coin pending. `payload` holds the commitment and ciphertext blob the
/// proof engine needs; nothing in this workspace interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
    pub serial_number: String,
    #[serde(default)]
    pub snd: String,
    pub value: Amount,
    #[serde(default, with = "hex_bytes")]
    pub payload: Vec<u8>,
}

impl Coin {
    pub fn new(serial_number: impl Into<String>, value: Amount) -> Self {
        Self {
            serial_number: serial_number.into(),
            snd: String::new(),
            value,
            payload: Vec::new(),
        }
    }

    pub fn with_snd(mut self, snd: impl Into<String>) -> Self {
        self.snd = snd.into();
        self
    }

    pub fn with_payload(mut self, payload: Vec<u8>) -> Self {
        self.payload = payload;
        self
    }

    /// Checked total value of a set of coins.
    pub fn total(coins: &[Coin]) -> Result<Amount, AmountError> {
        Amount::sum(coins.iter().map(|c| c.value))
    }
}

mod hex_bytes {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&hex::encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<u8>, D::Error> {
        let s = String::deserialize(d)?;
        hex::decode(&s).map_err(serde::de::Error::custom)
    }
}
