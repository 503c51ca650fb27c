use money_render::currency::{render, Money};
use regex::Regex;

struct Case {
    name: &'static str,
    input: Money,
    want: &'static str,
}

#[test]
fn renders_brl_amounts() {
    let cases = [
        Case {
            name: "basic",
            input: Money::new("BRL", 1234, 560_000_000),
            want: "R$ 1.234,56",
        },
        Case {
            name: "large number",
            input: Money::new("BRL", 1_234_567, 0),
            want: "R$ 1.234.567,00",
        },
        Case {
            name: "negative",
            input: Money::new("BRL", -9876, -540_000_000),
            want: "R$ -9.876,54",
        },
        Case {
            name: "zero",
            input: Money::new("BRL", 0, 0),
            want: "R$ 0,00",
        },
        Case {
            name: "truncates instead of carrying",
            input: Money::new("BRL", 999, 999_999_999),
            want: "R$ 999,99",
        },
        Case {
            name: "half cent truncates down",
            input: Money::new("BRL", 7, 565_000_000),
            want: "R$ 7,56",
        },
    ];

    for case in cases {
        assert_eq!(render(&case.input), case.want, "case `{}`", case.name);
    }
}

#[test]
fn non_brl_currencies_are_unchanged() {
    assert_eq!(render(&Money::new("USD", 1234, 560_000_000)), "$1234.56");
    assert_eq!(render(&Money::new("JPY", 1_000_000, 0)), "$1000000.00");
    assert_eq!(render(&Money::new("", 1, 10_000_000)), "$1.01");
}

#[test]
fn brl_output_has_grouped_shape() {
    let shape = Regex::new(r"^R\$ -?\d{1,3}(\.\d{3})*,\d{2}$").unwrap();
    for units in [0, 7, 42, 999, 1_000, 65_536, 1_000_000, 123_456_789_012] {
        for sign in [1, -1] {
            let rendered = render(&Money::new("BRL", units * sign, 120_000_000 * sign as i32));
            assert!(shape.is_match(&rendered), "{rendered}");
            assert_eq!(rendered.matches('-').count(), usize::from(sign < 0), "{rendered}");
        }
    }
}
