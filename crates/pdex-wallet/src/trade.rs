//! Trade request submission.
//!
//! The flow is strictly linear: select coins, plan the burn payment, build
//! the signed transaction, submit it, then reconcile a history record. A
//! record exists only after the node has accepted the transaction, so a
//! failed submission never leaves coins marked as spent.

use crate::config::WalletConfig;
use crate::error::WalletError;
use crate::history::{self, HistoryRecord, HistoryStore};
use crate::keys::AccountKeySet;
use pdex_rpc::{Broadcaster, NodeRpc};
use pdex_tx::{assemble_trade_tx, ProofEngine, TradeOrder, TradeTxParams};
use pdex_types::constants::BURNING_ADDRESS;
use pdex_types::{Coin, Privacy};

/// One trade request.
pub struct TradeRequest<'a> {
    pub keys: &'a AccountKeySet,
    /// Spendable native coins, in the order selection should consider them.
    pub coins: &'a [Coin],
    pub order: &'a TradeOrder,
    pub burn_address: &'a str,
    pub privacy: Privacy,
    /// Annotation stored on the resulting history record.
    pub note: &'a str,
}

/// Build, sign and submit a trade request, returning its history record.
///
/// Nothing is retried. Errors say which stage failed.
pub async fn send_trade_request<E, B>(
    engine: &E,
    broadcaster: &B,
    request: TradeRequest<'_>,
) -> Result<HistoryRecord, WalletError>
where
    E: ProofEngine + ?Sized,
    B: Broadcaster + ?Sized,
{
    let trade = assemble_trade_tx(
        engine,
        TradeTxParams {
            pool: request.coins,
            order: request.order,
            burn_address: request.burn_address,
            trader_address: &request.keys.payment_address,
            signing_key: request.keys.private_key(),
            privacy: request.privacy,
        },
    )
    .await?;

    let tx_id = broadcaster
        .send_raw_transaction(&trade.signed.payload)
        .await
        .map_err(WalletError::Submit)?;

    log::info!(
        "trade request {} submitted: sold {} of {}, spent {} coins",
        tx_id,
        trade.metadata.sell_amount(),
        trade.metadata.token_id_to_sell(),
        trade.consumed_inputs.len()
    );

    Ok(history::reconcile(
        tx_id,
        &trade,
        &request.keys.public_key,
        request.note,
    ))
}

/// Trade client bound to a fullnode and a proof engine.
pub struct TradeClient<E> {
    config: WalletConfig,
    node: NodeRpc,
    engine: E,
}

impl<E: ProofEngine> TradeClient<E> {
    pub fn new(config: WalletConfig, engine: E) -> Self {
        let node = NodeRpc::with_config(config.to_rpc_config());
        Self {
            config,
            node,
            engine,
        }
    }

    pub fn config(&self) -> &WalletConfig {
        &self.config
    }

    pub fn node(&self) -> &NodeRpc {
        &self.node
    }

    /// The burn address to pay: the configured override, else the node's
    /// answer. The built-in address is used only when
    /// `builtin_burn_fallback` is set.
    pub async fn burn_address(&self) -> Result<String, WalletError> {
        if let Some(addr) = &self.config.burn_address {
            return Ok(addr.clone());
        }
        match self
            .node
            .get_burning_address(self.config.burn_address_beacon_height)
            .await
        {
            Ok(addr) => Ok(addr),
            Err(e) if self.config.builtin_burn_fallback => {
                log::warn!("burn address lookup failed, using built-in address: {}", e);
                Ok(BURNING_ADDRESS.to_string())
            }
            Err(e) => Err(WalletError::BurnAddress(e)),
        }
    }

    /// Submit a native-token trade request and append its record to `store`.
    ///
    /// The native leg is always sent with privacy disabled.
    pub async fn trade_native<S: HistoryStore>(
        &self,
        keys: &AccountKeySet,
        coins: &[Coin],
        order: &TradeOrder,
        store: &mut S,
    ) -> Result<HistoryRecord, WalletError> {
        let burn_address = self.burn_address().await?;
        let record = send_trade_request(
            &self.engine,
            &self.node,
            TradeRequest {
                keys,
                coins,
                order,
                burn_address: &burn_address,
                privacy: Privacy::Disabled,
                note: &self.config.history_note,
            },
        )
        .await?;

        if !store.append(record.clone()) {
            log::warn!("history already contains {}", record.tx_id());
        }
        Ok(record)
    }
}
