//! The one built-in default configuration.
//!
//! Every entry point that needs defaults (the settings loader, the command
//! line, tests) takes them from here. The calculators in `levy-core` never
//! fall back to these values on their own.

use levy_core::{BracketTable, IncomeTaxBracket, SocialSecurityRates, TaxConfiguration};
use rust_decimal::Decimal;

/// VAT 15%, NHIL 2.5%, GETFund 2.5%, no custom levies.
pub fn tax_configuration() -> TaxConfiguration {
    TaxConfiguration {
        vat_rate: Decimal::new(15, 2),
        nhil_rate: Decimal::new(25, 3),
        getfund_rate: Decimal::new(25, 3),
        custom_levies: Vec::new(),
    }
}

/// SSNIT: employee 5.5%, employer 13%.
pub fn social_security_rates() -> SocialSecurityRates {
    SocialSecurityRates {
        employee_rate: Decimal::new(55, 3),
        employer_rate: Decimal::new(13, 2),
    }
}

/// Seven-band monthly PAYE schedule, zero-rated first band, 35% top band.
///
/// | Band | From | To | Rate |
/// |------|------|----|------|
/// | 1 | 0 | 490 | 0% |
/// | 2 | 490 | 600 | 5% |
/// | 3 | 600 | 730 | 10% |
/// | 4 | 730 | 3,730 | 17.5% |
/// | 5 | 3,730 | 20,730 | 25% |
/// | 6 | 20,730 | 50,730 | 30% |
/// | 7 | 50,730 | | 35% |
pub fn income_tax_brackets() -> BracketTable {
    const BANDS: [(i64, Option<i64>, i64, u32); 7] = [
        (0, Some(490), 0, 0),
        (490, Some(600), 5, 2),
        (600, Some(730), 10, 2),
        (730, Some(3730), 175, 3),
        (3730, Some(20730), 25, 2),
        (20730, Some(50730), 30, 2),
        (50730, None, 35, 2),
    ];

    let brackets = BANDS
        .iter()
        .map(|&(lower, upper, rate, scale)| {
            IncomeTaxBracket::new(
                Decimal::from(lower),
                upper.map(Decimal::from),
                Decimal::new(rate, scale),
            )
        })
        .collect();

    BracketTable::new(brackets).expect("built-in bracket table is contiguous")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn tax_configuration_matches_statutory_rates() {
        let config = tax_configuration();

        assert_eq!(config.vat_rate, dec!(0.15));
        assert_eq!(config.nhil_rate, dec!(0.025));
        assert_eq!(config.getfund_rate, dec!(0.025));
        assert!(config.custom_levies.is_empty());
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn social_security_rates_match_ssnit() {
        let rates = social_security_rates();

        assert_eq!(rates.employee_rate, dec!(0.055));
        assert_eq!(rates.employer_rate, dec!(0.13));
        assert_eq!(rates.validate(), Ok(()));
    }

    #[test]
    fn income_tax_brackets_have_seven_bands() {
        let table = income_tax_brackets();

        assert_eq!(table.brackets().len(), 7);
        assert_eq!(table.brackets()[0].rate, Decimal::ZERO);
        assert_eq!(table.brackets()[3].rate, dec!(0.175));
        assert_eq!(table.top_rate(), dec!(0.35));
        assert!(table.brackets()[6].is_open_ended());
    }
}
