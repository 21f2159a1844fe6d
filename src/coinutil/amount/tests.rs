#[cfg(test)]
mod amount {
    use std::str::FromStr;

    use crate::coinutil::amount::{Amount, AmountError};

    #[test]
    fn test_amount_from_str() {
        struct Test<'a> {
            name: &'a str,
            input: &'a str,
            valid: bool,
        }

        let tests = vec![
            Test {
                name: "zero",
                input: "0",
                valid: true,
            },
            Test {
                name: "fee per kb",
                input: "2000000000",
                valid: true,
            },
            Test {
                name: "beyond 64 bits",
                input: "340282366920938463463374607431768211456",
                valid: true,
            },
            Test {
                name: "empty",
                input: "",
                valid: false,
            },
            Test {
                name: "negative",
                input: "-1",
                valid: false,
            },
            Test {
                name: "explicit sign",
                input: "+1",
                valid: false,
            },
            Test {
                name: "leading zero",
                input: "0100",
                valid: false,
            },
            Test {
                name: "fraction",
                input: "1.5",
                valid: false,
            },
            Test {
                name: "exponent",
                input: "2e9",
                valid: false,
            },
            Test {
                name: "underscore",
                input: "1_000",
                valid: false,
            },
        ];

        for test in tests {
            match Amount::from_str(test.input) {
                Ok(amount) => {
                    if !test.valid {
                        panic!("{}: invalid amount parsed as {}", test.name, amount);
                    }

                    // Parsing then formatting reproduces the input digits.
                    assert_eq!(test.input, amount.to_string(), "{}", test.name);
                }

                Err(e) => {
                    if test.valid {
                        panic!("{}: valid amount failed with error: {}", test.name, e);
                    }
                }
            }
        }
    }

    #[test]
    fn test_amount_format() {
        struct Test<'a> {
            name: &'a str,
            atoms: u64,
            places: u32,
            formatted: &'a str,
        }

        let tests = vec![
            Test {
                name: "zero",
                atoms: 0,
                places: 12,
                formatted: "0",
            },
            Test {
                name: "fee per kb",
                atoms: 2_000_000_000,
                places: 12,
                formatted: "0.002",
            },
            Test {
                name: "one coin",
                atoms: 1_000_000_000_000,
                places: 12,
                formatted: "1",
            },
            Test {
                name: "one atom",
                atoms: 1,
                places: 12,
                formatted: "0.000000000001",
            },
            Test {
                name: "mixed",
                atoms: 44_433_322_211_100,
                places: 9,
                formatted: "44433.3222111",
            },
            Test {
                name: "no places",
                atoms: 120,
                places: 0,
                formatted: "120",
            },
        ];

        for test in tests {
            let amount = Amount::from_atoms(test.atoms);
            assert_eq!(test.formatted, amount.format(test.places), "{}", test.name);

            // Display strings parse back to the same atoms.
            let parsed = Amount::parse_coins(test.formatted, test.places)
                .unwrap_or_else(|e| panic!("{}: {}", test.name, e));
            assert_eq!(amount, parsed, "{}", test.name);
        }
    }

    #[test]
    fn test_parse_coins_errors() {
        assert_eq!(
            Amount::parse_coins("0.0000000000001", 12),
            Err(AmountError::TooPrecise {
                amount: "0.0000000000001".to_string(),
                places: 12,
            })
        );

        for input in ["", ".5", "5.", "1.2.3", "-1", "abc", "1,5"] {
            assert!(
                Amount::parse_coins(input, 12).is_err(),
                "{:?} should not parse",
                input
            );
        }
    }

    #[test]
    fn test_amount_arithmetic() {
        let fee = Amount::from_atoms(2_000_000_000);

        assert_eq!(Amount::from_atoms(6_000_000_000), &fee * 3);
        assert_eq!(Amount::from_atoms(4_000_000_000), &fee + &fee);
        assert_eq!(Amount::from_atoms(1_000_000_000), fee.mul_ratio(500_000u64, 1_000_000u64));
        assert_eq!(Amount::zero(), fee.mul_ratio(1u64, 0u64));

        assert_eq!(
            Some(Amount::from_atoms(1_000_000_000)),
            fee.checked_sub(&Amount::from_atoms(1_000_000_000))
        );
        assert_eq!(None, Amount::zero().checked_sub(&fee));

        // No overflow past 64 bits.
        let big = Amount::from_atoms(u64::MAX) * 16;
        assert_eq!(None, big.to_u64());
        assert_eq!("295147905179352825840", big.to_string());
    }

    #[test]
    fn test_amount_ordering() {
        let mut amounts = vec![
            Amount::from_atoms(9_000_000_000_000),
            Amount::from_atoms(0),
            Amount::from_str("18446744073709551616").unwrap(),
            Amount::from_atoms(3),
        ];
        amounts.sort();

        assert_eq!(
            vec!["0", "3", "9000000000000", "18446744073709551616"],
            amounts.iter().map(|a| a.to_string()).collect::<Vec<_>>()
        );
    }
}
