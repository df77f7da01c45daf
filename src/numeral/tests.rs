use quickcheck::QuickCheck;
use quickcheck_macros::quickcheck;
use rstest::rstest;

use super::units::{self, GROUP_BOUNDARIES};
use super::*;

const SAMPLE_LIMIT: u128 = 100_000_000_000_000_000_000; // 10^20

/// Reads a numeral produced by the converter back into an integer.
///
/// Only understands canonical output; good enough to check the converter.
fn parse_chinese(text: &str) -> Option<u128> {
    let mut rest = text;
    let mut total = 0u128;
    let mut section = 0u128;
    let mut digit: Option<u128> = None;

    while let Some(ch) = rest.chars().next() {
        if let Some((index, unit)) = group_unit_prefix(rest) {
            let group = section + digit.take().unwrap_or(0);
            let scale = 10u128.checked_pow(4 * u32::try_from(index).ok()?)?;
            total = total.checked_add(group.checked_mul(scale)?)?;
            section = 0;
            rest = &rest[unit.len()..];
            continue;
        }

        match ch {
            '零' => {}
            '十' => section += digit.take().unwrap_or(1) * 10,
            '百' => section += digit.take()? * 100,
            '千' => section += digit.take()? * 1000,
            _ => {
                let value = "零一二三四五六七八九".chars().position(|c| c == ch)?;
                digit = Some(value as u128);
            }
        }
        rest = &rest[ch.len_utf8()..];
    }

    Some(total + section + digit.unwrap_or(0))
}

fn group_unit_prefix(text: &str) -> Option<(usize, &'static str)> {
    (1..GROUP_BOUNDARIES.len())
        .filter_map(|i| units::group_unit(i).map(|unit| (i, unit)))
        .find(|(_, unit)| text.starts_with(unit))
}

/// Table indices of the large units in the order they appear.
fn group_units_in(text: &str) -> Vec<usize> {
    let mut found = Vec::new();
    let mut rest = text;
    while let Some(ch) = rest.chars().next() {
        match group_unit_prefix(rest) {
            Some((index, unit)) => {
                found.push(index);
                rest = &rest[unit.len()..];
            }
            None => rest = &rest[ch.len_utf8()..],
        }
    }
    found
}

#[rstest]
#[case(0, "零")]
#[case(10, "十")]
#[case(11, "十一")]
#[case(15, "十五")]
#[case(20, "二十")]
#[case(100, "一百")]
#[case(101, "一百零一")]
#[case(110, "一百十")]
#[case(1_000, "一千")]
#[case(10_000, "一萬")]
#[case(100_000_001, "一億零一")]
#[case(123_456, "十二萬三千四百五十六")]
#[case(9_999, "九千九百九十九")]
#[case(1_000_000, "一百萬")]
#[case(20_000_000_000, "二百億")]
fn renders_reference_cases(#[case] n: u128, #[case] expected: &str) {
    assert_eq!(to_chinese(n), expected);
}

#[test]
fn text_and_integer_inputs_agree() {
    let mut out = String::new();
    convert_decimal("123456", &mut out).unwrap();
    assert_eq!(out, to_chinese(123_456));

    let mut out = String::new();
    convert(100_000_001, &mut out).unwrap();
    assert_eq!(out, "一億零一");

    let n: Numeral = "20000000000".parse().unwrap();
    assert_eq!(format!("第{n}章"), "第二百億章");
}

#[test]
fn invalid_input_writes_nothing() {
    let mut out = String::new();
    let err = convert_decimal("-15", &mut out).unwrap_err();
    assert_eq!(err, NumeralError::Negative);
    assert!(out.is_empty());

    let too_big = format!("1{}", "0".repeat(MAX_DIGITS));
    assert!(matches!(
        convert_decimal(&too_big, &mut out),
        Err(NumeralError::TooLarge { .. })
    ));
    assert!(out.is_empty());
}

#[test]
fn signed_inputs_reject_negatives() {
    assert_eq!(Numeral::try_from(-1i64), Err(NumeralError::Negative));
    assert_eq!(Numeral::try_from(42i64).unwrap().to_string(), "四十二");
    assert_eq!(Numeral::from(7u8).to_string(), "七");
}

#[test]
fn teens_start_with_bare_ten() {
    for n in 10..=19 {
        let out = to_chinese(n);
        assert!(out.starts_with('十'), "{n} -> {out}");
        assert!(!out.starts_with("一十"), "{n} -> {out}");
    }
}

#[quickcheck]
fn conversion_is_deterministic(n: u128) -> bool {
    let mut via_sink = String::new();
    convert(n, &mut via_sink).is_ok() && via_sink == to_chinese(n) && via_sink == to_chinese(n)
}

#[quickcheck]
fn never_doubles_zero(n: u128) -> bool {
    !to_chinese(n).contains("零零")
}

#[quickcheck]
fn large_units_descend(n: u128) -> bool {
    let found = group_units_in(&to_chinese(n));
    found.windows(2).all(|w| w[0] > w[1])
}

#[quickcheck]
fn empty_group_leaves_one_zero(high: u16, low: u16) -> bool {
    let high = u128::from(high % 9_999 + 1);
    let low = u128::from(low % 9_999 + 1);
    let out = to_chinese(high * 100_000_000 + low);

    let Some((_, after)) = out.split_once('億') else {
        return false;
    };
    !out.contains('萬') && after.starts_with('零') && !after[ZERO_LEN..].starts_with('零')
}

#[quickcheck]
fn consecutive_empty_groups_leave_one_zero(high: u16, low: u16) -> bool {
    let high = u128::from(high % 9_999 + 1);
    let low = u128::from(low % 9_999 + 1);
    let out = to_chinese(high * 1_000_000_000_000 + low);

    let Some((_, after)) = out.split_once('兆') else {
        return false;
    };
    !out.contains('億')
        && !out.contains('萬')
        && after.starts_with('零')
        && !after[ZERO_LEN..].starts_with('零')
}

#[rstest]
#[case(1_000_000_000_001, "一兆零一")]
#[case(10_000_000_000_000_000, "一京")]
#[case(10_000_000_000_010_000, "一京零一萬")]
fn skips_runs_of_empty_groups(#[case] n: u128, #[case] expected: &str) {
    assert_eq!(to_chinese(n), expected);
}

const ZERO_LEN: usize = '零'.len_utf8();

#[test]
fn parser_recovers_sampled_integers() {
    fn prop(n: u128) -> bool {
        let n = n % SAMPLE_LIMIT;
        parse_chinese(&to_chinese(n)) == Some(n)
    }

    QuickCheck::new()
        .tests(10_000)
        .quickcheck(prop as fn(u128) -> bool);
}

#[test]
fn parser_understands_the_reference_forms() {
    assert_eq!(parse_chinese("一百十"), Some(110));
    assert_eq!(parse_chinese("十二萬三千四百五十六"), Some(123_456));
    assert_eq!(parse_chinese("一億零一"), Some(100_000_001));
}
