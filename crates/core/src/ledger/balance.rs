//! Net movement over a set of transactions.

use bookholder_shared::types::{AccountId, Amount};

use super::types::Transaction;

/// Sums the signed movement booked on `account`.
///
/// Debit transactions add their amount, credit transactions subtract it.
/// Transactions booked on another account are ignored, including those
/// where `account` is only the offset side.
#[must_use]
pub fn net_movement<'a, I>(account: AccountId, transactions: I) -> Amount
where
    I: IntoIterator<Item = &'a Transaction>,
{
    transactions
        .into_iter()
        .filter(|t| t.account == account)
        .map(|t| if t.debit { t.amount } else { -t.amount })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookholder_shared::types::TransactionId;
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;

    fn make_transaction(account: i64, offset: i64, amount: Amount, debit: bool) -> Transaction {
        Transaction {
            id: TransactionId(1),
            amount,
            debit,
            offset_account: AccountId(offset),
            account: AccountId(account),
            date: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            description: String::new(),
        }
    }

    #[test]
    fn test_debits_add_credits_subtract() {
        let transactions = vec![
            make_transaction(31, 30, Amount::new(dec!(100.00)), true),
            make_transaction(31, 30, Amount::new(dec!(40.25)), false),
        ];
        assert_eq!(
            net_movement(AccountId(31), &transactions),
            Amount::new(dec!(59.75))
        );
    }

    #[test]
    fn test_offset_side_ignored() {
        let transactions = vec![make_transaction(31, 30, Amount::new(dec!(10)), true)];
        assert_eq!(net_movement(AccountId(30), &transactions), Amount::ZERO);
    }

    #[test]
    fn test_empty_is_zero() {
        let none: Vec<Transaction> = Vec::new();
        assert_eq!(net_movement(AccountId(1), &none), Amount::ZERO);
    }
}
