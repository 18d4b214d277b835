//! Unit tests for the Money module
//!
//! Tests cover money creation, parsing, arithmetic, rounding to the
//! currency's minor unit and display formatting.

use core_kernel::{Money, Currency, MoneyError};
use rust_decimal_macros::dec;

mod creation {
    use super::*;

    #[test]
    fn test_new_creates_money_with_correct_amount() {
        let m = Money::new(dec!(100.50), Currency::USD);
        assert_eq!(m.amount(), dec!(100.50));
        assert_eq!(m.currency(), Currency::USD);
    }

    #[test]
    fn test_new_keeps_full_precision() {
        let m = Money::new(dec!(100.123456789), Currency::USD);
        assert_eq!(m.amount(), dec!(100.123456789));
    }

    #[test]
    fn test_parsed_amount_rounds_once_to_currency() {
        let m = Money::parse("1.00505", Currency::USD).unwrap();
        assert_eq!(m.round_to_currency().amount(), dec!(1.01));
    }

    #[test]
    fn test_from_minor_converts_cents_correctly() {
        let m = Money::from_minor(10050, Currency::USD);
        assert_eq!(m.amount(), dec!(100.50));
    }

    #[test]
    fn test_from_minor_handles_jpy_no_decimals() {
        let m = Money::from_minor(10000, Currency::JPY);
        assert_eq!(m.amount(), dec!(10000));
    }

    #[test]
    fn test_zero_creates_zero_amount() {
        let m = Money::zero(Currency::EUR);
        assert!(m.is_zero());
        assert_eq!(m.currency(), Currency::EUR);
    }
}

mod parsing {
    use super::*;

    #[test]
    fn test_parse_plain_number() {
        let m = Money::parse("30", Currency::USD).unwrap();
        assert_eq!(m.amount(), dec!(30));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let m = Money::parse("  12.75\n", Currency::USD).unwrap();
        assert_eq!(m.amount(), dec!(12.75));
    }

    #[test]
    fn test_parse_negative_is_allowed_at_kernel_level() {
        let m = Money::parse("-4", Currency::USD).unwrap();
        assert!(m.is_negative());
    }

    #[test]
    fn test_parse_rejects_text() {
        let result = Money::parse("lunch", Currency::USD);
        assert!(matches!(result, Err(MoneyError::InvalidAmount(_))));
    }

    #[test]
    fn test_parse_rejects_empty() {
        let result = Money::parse("", Currency::USD);
        assert!(matches!(result, Err(MoneyError::InvalidAmount(_))));
    }
}

mod predicates {
    use super::*;

    #[test]
    fn test_is_positive_false_for_zero() {
        assert!(!Money::zero(Currency::USD).is_positive());
    }

    #[test]
    fn test_is_negative_false_for_zero() {
        assert!(!Money::zero(Currency::USD).is_negative());
    }

    #[test]
    fn test_positive_part() {
        let owed = Money::new(dec!(-10), Currency::USD);
        let due = Money::new(dec!(20), Currency::USD);
        assert!(owed.positive_part().is_zero());
        assert_eq!(due.positive_part(), due);
        assert_eq!((-owed).positive_part().amount(), dec!(10));
    }
}

mod arithmetic {
    use super::*;

    #[test]
    fn test_checked_add_same_currency() {
        let a = Money::new(dec!(100.00), Currency::USD);
        let b = Money::new(dec!(50.00), Currency::USD);
        let result = a.checked_add(&b).unwrap();
        assert_eq!(result.amount(), dec!(150.00));
    }

    #[test]
    fn test_checked_add_currency_mismatch() {
        let a = Money::new(dec!(100.00), Currency::USD);
        let b = Money::new(dec!(50.00), Currency::EUR);
        let result = a.checked_add(&b);
        assert!(matches!(result, Err(MoneyError::CurrencyMismatch(_, _))));
    }

    #[test]
    fn test_checked_sub_can_go_negative() {
        let a = Money::new(dec!(30.00), Currency::USD);
        let b = Money::new(dec!(100.00), Currency::USD);
        let result = a.checked_sub(&b).unwrap();
        assert_eq!(result.amount(), dec!(-70.00));
    }

    #[test]
    fn test_negation() {
        let m = Money::new(dec!(10), Currency::USD);
        assert_eq!((-m).amount(), dec!(-10));
    }

    #[test]
    fn test_divide_by_scalar() {
        let m = Money::new(dec!(30), Currency::USD);
        assert_eq!(m.divide(dec!(3)).unwrap().amount(), dec!(10));
    }

    #[test]
    fn test_divide_by_zero_error() {
        let m = Money::new(dec!(30), Currency::USD);
        assert_eq!(m.divide(dec!(0)), Err(MoneyError::DivisionByZero));
    }

    #[test]
    fn test_try_sum() {
        let parts = [
            Money::new(dec!(10), Currency::USD),
            Money::new(dec!(2.5), Currency::USD),
            Money::new(dec!(-1), Currency::USD),
        ];
        let total = Money::try_sum(&parts, Currency::USD).unwrap();
        assert_eq!(total.amount(), dec!(11.5));
    }

    #[test]
    fn test_try_sum_of_nothing_is_zero() {
        let none: [Money; 0] = [];
        let total = Money::try_sum(&none, Currency::GBP).unwrap();
        assert!(total.is_zero());
        assert_eq!(total.currency(), Currency::GBP);
    }

    #[test]
    fn test_try_sum_rejects_mixed_currencies() {
        let parts = [
            Money::new(dec!(10), Currency::USD),
            Money::new(dec!(10), Currency::EUR),
        ];
        assert!(Money::try_sum(&parts, Currency::USD).is_err());
    }
}

mod rounding {
    use super::*;

    #[test]
    fn test_round_to_currency_usd() {
        let m = Money::new(dec!(10.5678), Currency::USD);
        assert_eq!(m.round_to_currency().amount(), dec!(10.57));
    }

    #[test]
    fn test_round_to_currency_jpy() {
        let m = Money::new(dec!(1000.6), Currency::JPY);
        assert_eq!(m.round_to_currency().amount(), dec!(1001));
    }

    #[test]
    fn test_round_half_even() {
        assert_eq!(Money::new(dec!(2.345), Currency::USD).round_to_currency().amount(), dec!(2.34));
        assert_eq!(Money::new(dec!(2.355), Currency::USD).round_to_currency().amount(), dec!(2.36));
    }

    #[test]
    fn test_minor_unit() {
        assert_eq!(Currency::USD.minor_unit(), dec!(0.01));
        assert_eq!(Currency::JPY.minor_unit(), dec!(1));
    }
}

mod currency {
    use super::*;

    #[test]
    fn test_all_currencies_have_symbols() {
        for currency in Currency::ALL {
            assert!(!currency.symbol().is_empty());
            assert!(!currency.code().is_empty());
        }
    }

    #[test]
    fn test_currency_decimal_places() {
        assert_eq!(Currency::USD.decimal_places(), 2);
        assert_eq!(Currency::EUR.decimal_places(), 2);
        assert_eq!(Currency::JPY.decimal_places(), 0);
    }

    #[test]
    fn test_currency_parse_roundtrip() {
        for currency in Currency::ALL {
            assert_eq!(currency.code().parse::<Currency>().unwrap(), currency);
        }
    }

    #[test]
    fn test_currency_serde_uses_code() {
        let json = serde_json::to_string(&Currency::EUR).unwrap();
        assert_eq!(json, "\"EUR\"");
        let parsed: Currency = serde_json::from_str("\"JPY\"").unwrap();
        assert_eq!(parsed, Currency::JPY);
    }

    #[test]
    fn test_default_currency_is_usd() {
        assert_eq!(Currency::default(), Currency::USD);
    }
}

mod display {
    use super::*;

    #[test]
    fn test_money_display_usd() {
        let m = Money::new(dec!(1234.5), Currency::USD);
        assert_eq!(m.to_string(), "$ 1234.50");
    }

    #[test]
    fn test_money_display_jpy() {
        let m = Money::new(dec!(12345), Currency::JPY);
        assert_eq!(m.to_string(), "¥ 12345");
    }

    #[test]
    fn test_format_amount_pads_to_two_places() {
        assert_eq!(Money::new(dec!(10), Currency::USD).format_amount(), "10.00");
        assert_eq!(Money::new(dec!(3.3), Currency::USD).format_amount(), "3.30");
    }
}
