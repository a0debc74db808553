//! Property-based tests for transaction validation and period bounds.

use bookholder_shared::types::{AccountId, Amount};
use chrono::{DateTime, Datelike, TimeZone, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::error::ValidationError;
use super::period::Period;
use super::types::TransactionInput;
use super::validation::validate_transaction;

/// Strategy to generate a non-zero amount with at most two fractional digits.
fn cent_amount() -> impl Strategy<Value = Amount> {
    prop_oneof![
        (1i64..100_000_000i64).prop_map(|cents| Amount::new(Decimal::new(cents, 2))),
        (1i64..100_000_000i64).prop_map(|cents| Amount::new(Decimal::new(-cents, 2))),
    ]
}

/// Strategy to generate a positive account id.
fn account_id() -> impl Strategy<Value = AccountId> {
    (1i64..1_000_000i64).prop_map(AccountId)
}

/// Strategy to generate a UTC timestamp between 1970 and 2100.
fn timestamp() -> impl Strategy<Value = DateTime<Utc>> {
    (0i64..4_102_444_800i64).prop_map(|secs| {
        Utc.timestamp_opt(secs, 0)
            .single()
            .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
    })
}

fn make_input(
    amount: Amount,
    debit: bool,
    offset_account: AccountId,
    account: AccountId,
    date: Option<DateTime<Utc>>,
) -> TransactionInput {
    TransactionInput {
        amount,
        debit,
        offset_account,
        account,
        date,
        description: "prop".to_string(),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Any input with distinct sides, a non-zero cent amount and a date passes,
    /// and the minor units convert back to the same amount.
    #[test]
    fn prop_valid_input_accepted(
        amount in cent_amount(),
        debit in any::<bool>(),
        offset in account_id(),
        account in account_id(),
        date in timestamp(),
    ) {
        prop_assume!(offset != account);

        let input = make_input(amount, debit, offset, account, Some(date));
        let validated = validate_transaction(&input);
        prop_assert!(validated.is_ok());
        let validated = validated.unwrap();
        prop_assert_eq!(Amount::from_minor_units(validated.minor_units), amount);
        prop_assert_eq!(validated.date, date);
        prop_assert_eq!(validated.debit, debit);
    }

    /// Booking an account against itself is always rejected.
    #[test]
    fn prop_same_account_rejected(
        amount in cent_amount(),
        account in account_id(),
        date in timestamp(),
    ) {
        let result = validate_transaction(&make_input(amount, true, account, account, Some(date)));
        prop_assert_eq!(result, Err(ValidationError::SameAccount));
    }

    /// A zero amount is rejected whatever its scale.
    #[test]
    fn prop_zero_amount_rejected(
        scale in 0u32..10,
        offset in account_id(),
        account in account_id(),
        date in timestamp(),
    ) {
        prop_assume!(offset != account);

        let zero = Amount::new(Decimal::new(0, scale));
        let result = validate_transaction(&make_input(zero, false, offset, account, Some(date)));
        prop_assert_eq!(result, Err(ValidationError::ZeroAmount));
    }

    /// Amounts with a non-zero third fractional digit are rejected.
    #[test]
    fn prop_sub_cent_amount_rejected(
        mills in 1i64..100_000_000i64,
        offset in account_id(),
        account in account_id(),
        date in timestamp(),
    ) {
        prop_assume!(offset != account);
        prop_assume!(mills % 10 != 0);

        let amount = Amount::new(Decimal::new(mills, 3));
        let result = validate_transaction(&make_input(amount, true, offset, account, Some(date)));
        prop_assert_eq!(result, Err(ValidationError::AmountPrecision));
    }

    /// A timestamp always falls in its own month and year periods, and in no
    /// neighbouring month.
    #[test]
    fn prop_period_contains_own_month(date in timestamp()) {
        let month = Period::new(date.year(), Some(date.month())).unwrap();
        let year = Period::year(date.year()).unwrap();

        prop_assert!(month.contains(date));
        prop_assert!(year.contains(date));
        prop_assert!(year.start() <= month.start());
        prop_assert!(month.end() <= year.end());

        let next = if date.month() == 12 {
            Period::new(date.year() + 1, Some(1)).unwrap()
        } else {
            Period::new(date.year(), Some(date.month() + 1)).unwrap()
        };
        prop_assert!(!next.contains(date));
        prop_assert_eq!(month.end(), next.start());
    }
}
