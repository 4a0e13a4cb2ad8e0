//! Coin selection.
//!
//! Greedy, order-preserving accumulation: coins are taken from the front of
//! the pool, in the caller's order, until the running total covers
//! `target + fee`. The selection is always a prefix of the pool, so the same
//! pool and target always yield the same coins.

use crate::TxError;
use pdex_types::{Amount, Coin};

/// Result of coin selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoinSelection {
    /// Selected coins, in pool order.
    pub coins: Vec<Coin>,
    /// Total value of the selected coins.
    pub total: Amount,
    /// The amount the selection had to cover (target + fee).
    pub needed: Amount,
    /// Change amount (total - needed).
    pub change: Amount,
}

impl CoinSelection {
    /// Serial numbers of the selected coins, in selection order.
    pub fn serial_numbers(&self) -> Vec<&str> {
        self.coins.iter().map(|c| c.serial_number.as_str()).collect()
    }

    /// Verify `total == outputs + fee + change`.
    pub fn check_conservation(&self, outputs: Amount, fee: Amount) -> Result<(), TxError> {
        let spent = outputs.checked_add(fee)?.checked_add(self.change)?;
        if spent != self.total {
            return Err(TxError::Conservation {
                inputs: self.total,
                outputs,
                fee,
                change: self.change,
            });
        }
        Ok(())
    }
}

/// Select coins from `pool` covering `target + fee`.
///
/// Fails with [`TxError::InsufficientFunds`] when the whole pool is not
/// enough, and with an amount overflow if `target + fee` cannot be
/// represented. The pool is only read.
pub fn select_coins(pool: &[Coin], target: Amount, fee: Amount) -> Result<CoinSelection, TxError> {
    let needed = target.checked_add(fee)?;

    let mut total = Amount::ZERO;
    let mut taken = 0usize;
    for coin in pool {
        if total >= needed {
            break;
        }
        total = total.checked_add(coin.value)?;
        taken += 1;
    }

    if total < needed {
        return Err(TxError::InsufficientFunds {
            need: needed,
            have: total,
        });
    }

    let change = total.checked_sub(needed)?;
    log::debug!(
        "selected {} of {} coins: total {}, needed {}, change {}",
        taken,
        pool.len(),
        total,
        needed,
        change
    );

    Ok(CoinSelection {
        coins: pool[..taken].to_vec(),
        total,
        needed,
        change,
    })
}
