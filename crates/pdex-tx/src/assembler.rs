//! Trade request transaction assembly.
//!
//! Runs payment planning, coin selection and metadata construction, then
//! asks the proof engine for the signed transaction. All local checks
//! (amount arithmetic, funds, conservation) happen before the engine is
//! called.

use crate::engine::{ProofEngine, SignedTransaction, TradeTxRequest};
use crate::metadata::TradeMetadata;
use crate::payment::PaymentPlan;
use crate::selection::{select_coins, CoinSelection};
use crate::TxError;
use pdex_types::{Amount, Coin, Privacy};
use serde::{Deserialize, Serialize};

/// What the trader asks for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeOrder {
    pub token_id_to_buy: String,
    pub token_id_to_sell: String,
    pub sell_amount: Amount,
    /// Fee paid to the exchange, burned together with the sell amount.
    pub trading_fee: Amount,
    /// Fee paid to the network for the transaction itself.
    pub network_fee: Amount,
    pub min_acceptable_amount: Amount,
}

/// Inputs to [`assemble_trade_tx`].
pub struct TradeTxParams<'a> {
    /// Spendable coins, in the order they should be considered.
    pub pool: &'a [Coin],
    pub order: &'a TradeOrder,
    pub burn_address: &'a str,
    pub trader_address: &'a str,
    pub signing_key: &'a str,
    pub privacy: Privacy,
}

/// A signed trade request and the ledger it was built from.
#[derive(Debug, Clone)]
pub struct AssembledTrade {
    pub signed: SignedTransaction,
    /// Inputs actually spent: the engine's report if it gave one,
    /// otherwise the local selection.
    pub consumed_inputs: Vec<Coin>,
    pub selection: CoinSelection,
    pub plan: PaymentPlan,
    pub metadata: TradeMetadata,
    pub fee: Amount,
    pub privacy: Privacy,
}

impl AssembledTrade {
    pub fn payment_amount(&self) -> Amount {
        self.plan.total()
    }

    pub fn change(&self) -> Amount {
        self.selection.change
    }
}

/// Assemble and sign a trade request transaction.
pub async fn assemble_trade_tx<E>(
    engine: &E,
    params: TradeTxParams<'_>,
) -> Result<AssembledTrade, TxError>
where
    E: ProofEngine + ?Sized,
{
    let order = params.order;

    let plan = PaymentPlan::trade_request(
        params.burn_address,
        order.sell_amount,
        order.trading_fee,
        "",
    )?;
    let selection = select_coins(params.pool, plan.total(), order.network_fee)?;
    selection.check_conservation(plan.total(), order.network_fee)?;

    let metadata = TradeMetadata::trade_request(
        &order.token_id_to_buy,
        &order.token_id_to_sell,
        order.sell_amount,
        params.trader_address,
        order.min_acceptable_amount,
        order.trading_fee,
    );

    log::debug!(
        "requesting trade tx: {} inputs, payment {}, fee {}, privacy {:?}",
        selection.coins.len(),
        plan.total(),
        order.network_fee,
        params.privacy
    );

    let signed = engine
        .init_trade_tx(TradeTxRequest {
            inputs: &selection.coins,
            outputs: plan.outputs(),
            fee: order.network_fee,
            privacy: params.privacy,
            metadata: &metadata,
            signing_key: params.signing_key,
        })
        .await?;

    let consumed_inputs = match &signed.consumed_inputs {
        Some(reported) => {
            if *reported != selection.coins {
                log::warn!(
                    "proof engine spent {} inputs instead of the {} selected; using engine set",
                    reported.len(),
                    selection.coins.len()
                );
            }
            reported.clone()
        }
        None => selection.coins.clone(),
    };

    Ok(AssembledTrade {
        signed,
        consumed_inputs,
        selection,
        plan,
        metadata,
        fee: order.network_fee,
        privacy: params.privacy,
    })
}
