//! Payment outputs and the per-request privacy setting.

use crate::amount::Amount;
use serde::{Deserialize, Serialize};

/// A single payment output: where the value goes and how much.
///
/// Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentInfo {
    #[serde(rename = "paymentAddressStr")]
    payment_address: String,
    amount: Amount,
    #[serde(default)]
    message: String,
}

impl PaymentInfo {
    pub fn new(payment_address: impl Into<String>, amount: Amount, message: impl Into<String>) -> Self {
        Self {
            payment_address: payment_address.into(),
            amount,
            message: message.into(),
        }
    }

    pub fn payment_address(&self) -> &str {
        &self.payment_address
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Whether outputs and amounts are hidden by the proof engine.
///
/// There is intentionally no `Default`: every request states its choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Privacy {
    Enabled,
    Disabled,
}

impl Privacy {
    pub fn is_enabled(self) -> bool {
        matches!(self, Privacy::Enabled)
    }
}

impl From<bool> for Privacy {
    fn from(enabled: bool) -> Self {
        if enabled {
            Privacy::Enabled
        } else {
            Privacy::Disabled
        }
    }
}

impl Serialize for Privacy {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_bool(self.is_enabled())
    }
}

impl<'de> Deserialize<'de> for Privacy {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        bool::deserialize(d).map(Privacy::from)
    }
}
