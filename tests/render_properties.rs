use money_render::currency::{group_digits, render, Money};
use proptest::prelude::*;

fn valid_brl() -> impl Strategy<Value = Money> {
    (0i64..=i64::MAX, 0i32..1_000_000_000, any::<bool>()).prop_map(|(units, nanos, negative)| {
        if negative {
            Money::new("BRL", -units, -nanos)
        } else {
            Money::new("BRL", units, nanos)
        }
    })
}

proptest! {
    #[test]
    fn brl_prefix_and_single_sign(money in valid_brl()) {
        let rendered = render(&money);
        prop_assert!(rendered.starts_with("R$ "));
        let body = &rendered["R$ ".len()..];
        let negative = money.units < 0 || money.nanos < 0;
        prop_assert_eq!(body.starts_with('-'), negative);
        prop_assert!(!body.trim_start_matches('-').contains('-'));
    }

    #[test]
    fn regrouping_reproduces_output(money in valid_brl()) {
        let rendered = render(&money);
        let (whole, cents) = rendered.rsplit_once(',').unwrap();
        let sign_prefix = if money.is_negative() { "R$ -" } else { "R$ " };
        let digits = whole[sign_prefix.len()..].replace('.', "");
        let rebuilt = format!("{sign_prefix}{},{cents}", group_digits(&digits, '.'));
        prop_assert_eq!(rebuilt, rendered);
    }

    #[test]
    fn hundredths_are_truncated(money in valid_brl()) {
        let rendered = render(&money);
        let cents = rendered.rsplit_once(',').unwrap().1;
        let expected = money.nanos.unsigned_abs() / 10_000_000;
        prop_assert_eq!(cents, format!("{expected:02}"));
    }

    #[test]
    fn non_brl_has_no_grouping(units in any::<i64>(), nanos in 0i32..1_000_000_000, code in "[A-Z]{3}") {
        prop_assume!(code != "BRL");
        let nanos = if units < 0 { -nanos } else { nanos };
        let rendered = render(&Money::new(code, units, nanos));
        let sign = if units < 0 || nanos < 0 { "-" } else { "" };
        let expected = format!(
            "${sign}{}.{:02}",
            units.unsigned_abs(),
            nanos.unsigned_abs() / 10_000_000
        );
        prop_assert_eq!(rendered, expected);
    }

    #[test]
    fn malformed_amounts_never_panic(code in ".{0,4}", units in any::<i64>(), nanos in any::<i32>()) {
        let _ = render(&Money::new(code, units, nanos));
    }
}
