use dishmenu_core::Price;
use proptest::prelude::*;

proptest! {
    #[test]
    fn displayed_price_parses_back(minor in any::<i64>()) {
        let price = Price::from_minor(minor);
        let text = price.to_string();

        let (_, frac) = text.split_once('.').expect("display always has a decimal point");
        prop_assert_eq!(frac.len(), 2);
        prop_assert_eq!(text.parse::<Price>().unwrap(), price);
    }

    #[test]
    fn three_fractional_digits_are_rejected(units in 0i64..1_000_000, frac in 0u32..1000) {
        let input = format!("{}.{:03}", units, frac);
        prop_assert!(input.parse::<Price>().is_err());
    }
}
