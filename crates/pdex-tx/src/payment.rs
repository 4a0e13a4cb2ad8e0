//! Payment plan: the outputs a transaction pays and their total.

use crate::TxError;
use pdex_types::{Amount, PaymentInfo};

/// An ordered list of payment outputs with its total.
///
/// The total is derived from the outputs every time the list changes and
/// cannot be set independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentPlan {
    outputs: Vec<PaymentInfo>,
    total: Amount,
}

impl PaymentPlan {
    /// Build a plan from explicit outputs. A plan pays at least one output.
    pub fn from_outputs(outputs: Vec<PaymentInfo>) -> Result<Self, TxError> {
        if outputs.is_empty() {
            return Err(TxError::NoOutputs);
        }
        let total = Amount::sum(outputs.iter().map(PaymentInfo::amount))?;
        Ok(Self { outputs, total })
    }

    /// The single burn-address output of a trade request: `sell + trading_fee`.
    pub fn trade_request(
        burn_address: &str,
        sell_amount: Amount,
        trading_fee: Amount,
        message: &str,
    ) -> Result<Self, TxError> {
        let amount = sell_amount.checked_add(trading_fee)?;
        Self::from_outputs(vec![PaymentInfo::new(burn_address, amount, message)])
    }

    /// Append another output.
    pub fn with_output(mut self, output: PaymentInfo) -> Result<Self, TxError> {
        self.outputs.push(output);
        Self::from_outputs(self.outputs)
    }

    pub fn outputs(&self) -> &[PaymentInfo] {
        &self.outputs
    }

    pub fn total(&self) -> Amount {
        self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdex_types::AmountError;

    #[test]
    fn test_trade_request_output() {
        let plan = PaymentPlan::trade_request("burn", Amount::new(80), Amount::new(10), "").unwrap();
        assert_eq!(plan.outputs().len(), 1);
        assert_eq!(plan.outputs()[0].payment_address(), "burn");
        assert_eq!(plan.outputs()[0].amount(), Amount::new(90));
        assert_eq!(plan.total(), Amount::new(90));
    }

    #[test]
    fn test_trade_request_overflow() {
        let err = PaymentPlan::trade_request("burn", Amount::MAX, Amount::new(1), "").unwrap_err();
        assert!(matches!(err, TxError::Amount(AmountError::Overflow)));
    }

    #[test]
    fn test_total_follows_outputs() {
        let plan = PaymentPlan::trade_request("burn", Amount::new(80), Amount::new(10), "")
            .unwrap()
            .with_output(PaymentInfo::new("other", Amount::new(7), "memo"))
            .unwrap();
        assert_eq!(plan.outputs().len(), 2);
        assert_eq!(plan.total(), Amount::new(97));
    }

    #[test]
    fn test_empty_plan_rejected() {
        let err = PaymentPlan::from_outputs(Vec::new()).unwrap_err();
        assert!(matches!(err, TxError::NoOutputs));
    }

    #[test]
    fn test_zero_amount_output_is_kept() {
        let plan = PaymentPlan::trade_request("burn", Amount::ZERO, Amount::ZERO, "").unwrap();
        assert_eq!(plan.outputs().len(), 1);
        assert_eq!(plan.total(), Amount::ZERO);
    }

    #[test]
    fn test_outputs_overflow() {
        let err = PaymentPlan::from_outputs(vec![
            PaymentInfo::new("a", Amount::MAX, ""),
            PaymentInfo::new("b", Amount::new(1), ""),
        ])
        .unwrap_err();
        assert!(matches!(err, TxError::Amount(AmountError::Overflow)));
    }
}
