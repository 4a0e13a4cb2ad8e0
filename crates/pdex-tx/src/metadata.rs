//! Trade request metadata.
//!
//! Serialized with the field names the proof engine and the exchange expect.

use crate::TxError;
use pdex_types::constants::PDE_TRADE_REQUEST_META;
use pdex_types::Amount;
use serde::{Deserialize, Serialize};

/// Order parameters carried by a trade request transaction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TradeMetadata {
    #[serde(rename = "TokenIDToBuyStr")]
    token_id_to_buy: String,
    #[serde(rename = "TokenIDToSellStr")]
    token_id_to_sell: String,
    #[serde(rename = "SellAmount")]
    sell_amount: Amount,
    #[serde(rename = "TraderAddressStr")]
    trader_address: String,
    #[serde(rename = "Type")]
    meta_type: u32,
    #[serde(rename = "MinAcceptableAmount")]
    min_acceptable_amount: Amount,
    #[serde(rename = "TradingFee")]
    trading_fee: Amount,
}

impl TradeMetadata {
    pub fn trade_request(
        token_id_to_buy: &str,
        token_id_to_sell: &str,
        sell_amount: Amount,
        trader_address: &str,
        min_acceptable_amount: Amount,
        trading_fee: Amount,
    ) -> Self {
        Self {
            token_id_to_buy: token_id_to_buy.to_string(),
            token_id_to_sell: token_id_to_sell.to_string(),
            sell_amount,
            trader_address: trader_address.to_string(),
            meta_type: PDE_TRADE_REQUEST_META,
            min_acceptable_amount,
            trading_fee,
        }
    }

    pub fn builder() -> TradeMetadataBuilder {
        TradeMetadataBuilder::default()
    }

    pub fn token_id_to_buy(&self) -> &str {
        &self.token_id_to_buy
    }

    pub fn token_id_to_sell(&self) -> &str {
        &self.token_id_to_sell
    }

    pub fn sell_amount(&self) -> Amount {
        self.sell_amount
    }

    pub fn trader_address(&self) -> &str {
        &self.trader_address
    }

    pub fn meta_type(&self) -> u32 {
        self.meta_type
    }

    pub fn min_acceptable_amount(&self) -> Amount {
        self.min_acceptable_amount
    }

    pub fn trading_fee(&self) -> Amount {
        self.trading_fee
    }
}

/// Field-by-field builder for [`TradeMetadata`]; setters may be called in
/// any order.
#[derive(Debug, Clone, Default)]
pub struct TradeMetadataBuilder {
    token_id_to_buy: Option<String>,
    token_id_to_sell: Option<String>,
    sell_amount: Option<Amount>,
    trader_address: Option<String>,
    min_acceptable_amount: Option<Amount>,
    trading_fee: Option<Amount>,
}

impl TradeMetadataBuilder {
    pub fn token_id_to_buy(mut self, token_id: &str) -> Self {
        self.token_id_to_buy = Some(token_id.to_string());
        self
    }

    pub fn token_id_to_sell(mut self, token_id: &str) -> Self {
        self.token_id_to_sell = Some(token_id.to_string());
        self
    }

    pub fn sell_amount(mut self, amount: Amount) -> Self {
        self.sell_amount = Some(amount);
        self
    }

    pub fn trader_address(mut self, address: &str) -> Self {
        self.trader_address = Some(address.to_string());
        self
    }

    pub fn min_acceptable_amount(mut self, amount: Amount) -> Self {
        self.min_acceptable_amount = Some(amount);
        self
    }

    pub fn trading_fee(mut self, amount: Amount) -> Self {
        self.trading_fee = Some(amount);
        self
    }

    /// Finish the metadata; every field must have been set.
    pub fn build(self) -> Result<TradeMetadata, TxError> {
        Ok(TradeMetadata {
            token_id_to_buy: self
                .token_id_to_buy
                .ok_or(TxError::MissingField("token_id_to_buy"))?,
            token_id_to_sell: self
                .token_id_to_sell
                .ok_or(TxError::MissingField("token_id_to_sell"))?,
            sell_amount: self.sell_amount.ok_or(TxError::MissingField("sell_amount"))?,
            trader_address: self
                .trader_address
                .ok_or(TxError::MissingField("trader_address"))?,
            meta_type: PDE_TRADE_REQUEST_META,
            min_acceptable_amount: self
                .min_acceptable_amount
                .ok_or(TxError::MissingField("min_acceptable_amount"))?,
            trading_fee: self.trading_fee.ok_or(TxError::MissingField("trading_fee"))?,
        })
    }
}
