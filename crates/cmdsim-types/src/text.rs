//! Text formatting helpers shared by listings and system reports.

/// Format an integer with `,` thousands separators (`1234567` -> `1,234,567`).
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_numbers_unchanged() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(7), "7");
        assert_eq!(group_thousands(999), "999");
    }

    #[test]
    fn separators_every_three_digits() {
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(16_384), "16,384");
        assert_eq!(group_thousands(999_999_999_999), "999,999,999,999");
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn stripping_commas_restores_digits(n in any::<u64>()) {
                let grouped = group_thousands(n);
                prop_assert_eq!(grouped.replace(',', ""), n.to_string());
            }

            #[test]
            fn groups_are_three_wide(n in any::<u64>()) {
                let grouped = group_thousands(n);
                for group in grouped.split(',').skip(1) {
                    prop_assert_eq!(group.len(), 3);
                }
            }
        }
    }
}
