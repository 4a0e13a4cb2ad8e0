//! Transaction history records.
//!
//! A [`HistoryRecord`] is produced once per successfully submitted
//! transaction and never changes afterwards. The spent set it carries comes
//! from the inputs the proof engine actually consumed, so a wallet that
//! applies the record to its coin pool never sees a coin as both spent and
//! available.

use pdex_tx::{AssembledTrade, TradeMetadata};
use pdex_types::constants::TX_NORMAL_TYPE;
use pdex_types::{Amount, Coin, PaymentInfo, Privacy};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// ---------------------------------------------------------------------------
// HistoryRecord
// ---------------------------------------------------------------------------

/// Local audit entry for a submitted transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    tx_id: String,
    lock_time: u64,
    payment_infos: Vec<PaymentInfo>,
    fee: Amount,
    spent_serial_numbers: Vec<String>,
    spent_coin_refs: Vec<String>,
    payment_amount: Amount,
    tx_type: String,
    trader_public_key: String,
    privacy: Privacy,
    metadata: TradeMetadata,
    note: String,
}

impl HistoryRecord {
    pub fn tx_id(&self) -> &str {
        &self.tx_id
    }

    pub fn lock_time(&self) -> u64 {
        self.lock_time
    }

    pub fn payment_infos(&self) -> &[PaymentInfo] {
        &self.payment_infos
    }

    pub fn fee(&self) -> Amount {
        self.fee
    }

    /// Serial numbers of every coin the transaction spent.
    pub fn spent_serial_numbers(&self) -> &[String] {
        &self.spent_serial_numbers
    }

    /// Cache references (`snd`) of the spent coins, same order as
    /// [`spent_serial_numbers`](Self::spent_serial_numbers).
    pub fn spent_coin_refs(&self) -> &[String] {
        &self.spent_coin_refs
    }

    pub fn payment_amount(&self) -> Amount {
        self.payment_amount
    }

    pub fn tx_type(&self) -> &str {
        &self.tx_type
    }

    pub fn trader_public_key(&self) -> &str {
        &self.trader_public_key
    }

    pub fn privacy(&self) -> Privacy {
        self.privacy
    }

    pub fn metadata(&self) -> &TradeMetadata {
        &self.metadata
    }

    pub fn note(&self) -> &str {
        &self.note
    }

    /// Whether the record spends the coin with this serial number.
    pub fn spends(&self, serial_number: &str) -> bool {
        self.spent_serial_numbers.iter().any(|sn| sn == serial_number)
    }

    /// Coins of `pool` that remain spendable once this record is applied.
    pub fn unspent_after(&self, pool: &[Coin]) -> Vec<Coin> {
        let spent: HashSet<&str> = self.spent_serial_numbers.iter().map(String::as_str).collect();
        pool.iter()
            .filter(|c| !spent.contains(c.serial_number.as_str()))
            .cloned()
            .collect()
    }
}

/// Build the history record for a submitted trade.
///
/// Pure: the spent set is read from `trade.consumed_inputs`, which already
/// prefers the engine's report over the local selection.
pub fn reconcile(
    tx_id: String,
    trade: &AssembledTrade,
    trader_public_key: &str,
    note: &str,
) -> HistoryRecord {
    let (spent_serial_numbers, spent_coin_refs): (Vec<String>, Vec<String>) = trade
        .consumed_inputs
        .iter()
        .map(|c| (c.serial_number.clone(), c.snd.clone()))
        .unzip();

    HistoryRecord {
        tx_id,
        lock_time: trade.signed.lock_time,
        payment_infos: trade.plan.outputs().to_vec(),
        fee: trade.fee,
        spent_serial_numbers,
        spent_coin_refs,
        payment_amount: trade.payment_amount(),
        tx_type: TX_NORMAL_TYPE.to_string(),
        trader_public_key: trader_public_key.to_string(),
        privacy: trade.privacy,
        metadata: trade.metadata.clone(),
        note: note.to_string(),
    }
}

// ---------------------------------------------------------------------------
// HistoryStore
// ---------------------------------------------------------------------------

/// Destination for history records. Append-only.
pub trait HistoryStore {
    /// Append a record. Returns `false` if a record with the same tx id is
    /// already stored, in which case the store is unchanged.
    fn append(&mut self, record: HistoryRecord) -> bool;

    fn get(&self, tx_id: &str) -> Option<&HistoryRecord>;
}

/// In-memory history, in submission order.
#[derive(Debug, Clone, Default)]
pub struct MemoryHistory {
    records: Vec<HistoryRecord>,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[HistoryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Coins of `pool` not spent by any stored record.
    pub fn unspent(&self, pool: &[Coin]) -> Vec<Coin> {
        let spent: HashSet<&str> = self
            .records
            .iter()
            .flat_map(|r| r.spent_serial_numbers.iter().map(String::as_str))
            .collect();
        pool.iter()
            .filter(|c| !spent.contains(c.serial_number.as_str()))
            .cloned()
            .collect()
    }
}

impl HistoryStore for MemoryHistory {
    fn append(&mut self, record: HistoryRecord) -> bool {
        if self.records.iter().any(|r| r.tx_id == record.tx_id) {
            return false;
        }
        self.records.push(record);
        true
    }

    fn get(&self, tx_id: &str) -> Option<&HistoryRecord> {
        self.records.iter().find(|r| r.tx_id == tx_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdex_tx::{select_coins, PaymentPlan, SignedTransaction};
    use pdex_types::constants::TRADE_REQUEST_NOTE;

    fn coin(sn: &str, value: u64) -> Coin {
        Coin::new(sn, Amount::from(value)).with_snd(format!("snd_{}", sn))
    }

    fn trade(pool: &[Coin], consumed: Option<Vec<Coin>>) -> AssembledTrade {
        let plan = PaymentPlan::trade_request("burn", Amount::new(80), Amount::new(10), "").unwrap();
        let selection = select_coins(pool, plan.total(), Amount::new(5)).unwrap();
        let consumed_inputs = consumed.clone().unwrap_or_else(|| selection.coins.clone());
        AssembledTrade {
            signed: SignedTransaction {
                payload: vec![0xaa],
                lock_time: 42,
                consumed_inputs: consumed,
            },
            consumed_inputs,
            selection,
            plan,
            metadata: TradeMetadata::trade_request(
                "buy",
                "sell",
                Amount::new(80),
                "trader",
                Amount::new(1),
                Amount::new(10),
            ),
            fee: Amount::new(5),
            privacy: Privacy::Disabled,
        }
    }

    // -- reconcile ----------------------------------------------------------

    #[test]
    fn reconcile_fills_every_field() {
        let pool = vec![coin("a", 100), coin("b", 50)];
        let t = trade(&pool, None);
        let rec = reconcile("tx1".into(), &t, "pubkey", TRADE_REQUEST_NOTE);

        assert_eq!(rec.tx_id(), "tx1");
        assert_eq!(rec.lock_time(), 42);
        assert_eq!(rec.payment_infos().len(), 1);
        assert_eq!(rec.payment_infos()[0].amount(), Amount::new(90));
        assert_eq!(rec.fee(), Amount::new(5));
        assert_eq!(rec.spent_serial_numbers(), ["a".to_string()]);
        assert_eq!(rec.spent_coin_refs(), ["snd_a".to_string()]);
        assert_eq!(rec.payment_amount(), Amount::new(90));
        assert_eq!(rec.tx_type(), "n");
        assert_eq!(rec.trader_public_key(), "pubkey");
        assert_eq!(rec.privacy(), Privacy::Disabled);
        assert_eq!(rec.metadata().sell_amount(), Amount::new(80));
        assert_eq!(rec.note(), "native token trade request");
    }

    #[test]
    fn reconcile_is_deterministic() {
        let pool = vec![coin("a", 100), coin("b", 50)];
        let t = trade(&pool, None);
        assert_eq!(
            reconcile("tx1".into(), &t, "pk", ""),
            reconcile("tx1".into(), &t, "pk", "")
        );
    }

    #[test]
    fn reconcile_uses_engine_consumed_set() {
        let pool = vec![coin("a", 100), coin("b", 50)];
        let t = trade(&pool, Some(vec![coin("b", 50), coin("a", 100)]));
        let rec = reconcile("tx2".into(), &t, "pk", "");
        assert_eq!(rec.spent_serial_numbers(), ["b".to_string(), "a".to_string()]);
        assert!(rec.unspent_after(&pool).is_empty());
    }

    #[test]
    fn unspent_after_excludes_spent() {
        let pool = vec![coin("a", 100), coin("b", 50), coin("c", 1)];
        let rec = reconcile("tx".into(), &trade(&pool, None), "pk", "");
        let left = rec.unspent_after(&pool);
        let sns: Vec<_> = left.iter().map(|c| c.serial_number.as_str()).collect();
        assert_eq!(sns, vec!["b", "c"]);
        for c in &left {
            assert!(!rec.spends(&c.serial_number));
        }
        assert!(rec.spends("a"));
    }

    #[test]
    fn record_json_roundtrip() {
        let pool = vec![coin("a", 100)];
        let rec = reconcile("tx".into(), &trade(&pool, None), "pk", "note");
        let json = serde_json::to_string(&rec).unwrap();
        let back: HistoryRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rec);
    }

    // -- MemoryHistory ------------------------------------------------------

    #[test]
    fn store_append_and_get() {
        let pool = vec![coin("a", 100), coin("b", 50)];
        let mut store = MemoryHistory::new();
        assert!(store.is_empty());

        let rec = reconcile("tx1".into(), &trade(&pool, None), "pk", "");
        assert!(store.append(rec.clone()));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("tx1"), Some(&rec));
        assert!(store.get("missing").is_none());
    }

    #[test]
    fn store_rejects_duplicate_tx_id() {
        let pool = vec![coin("a", 100)];
        let mut store = MemoryHistory::new();
        let rec = reconcile("tx1".into(), &trade(&pool, None), "pk", "first");
        let dup = reconcile("tx1".into(), &trade(&pool, None), "pk", "second");
        assert!(store.append(rec));
        assert!(!store.append(dup));
        assert_eq!(store.len(), 1);
        assert_eq!(store.records()[0].note(), "first");
    }

    #[test]
    fn store_unspent_across_records() {
        let pool = vec![coin("a", 100), coin("b", 100), coin("c", 7)];
        let mut store = MemoryHistory::new();
        store.append(reconcile("tx1".into(), &trade(&pool, None), "pk", ""));
        let rest = store.unspent(&pool);
        store.append(reconcile("tx2".into(), &trade(&rest, None), "pk", ""));

        let left = store.unspent(&pool);
        assert_eq!(left, vec![coin("c", 7)]);
    }
}
