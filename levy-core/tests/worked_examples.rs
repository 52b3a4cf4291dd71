//! End-to-end checks of the published worked examples, plus concurrent use
//! of shared configuration.

use std::thread;

use levy_core::calculations::{
    PayrollCalculator, TaxCascadeCalculator, compute_income_tax, split_social_security,
};
use levy_core::{
    BracketTable, CalculationError, ConfigurationError, IncomeTaxBracket, PayrollBreakdown,
    SocialSecurityRates, TaxConfiguration, TaxableIncomeBasis,
};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn seven_bands() -> Vec<IncomeTaxBracket> {
    vec![
        IncomeTaxBracket::new(dec!(0), Some(dec!(490)), dec!(0)),
        IncomeTaxBracket::new(dec!(490), Some(dec!(600)), dec!(0.05)),
        IncomeTaxBracket::new(dec!(600), Some(dec!(730)), dec!(0.10)),
        IncomeTaxBracket::new(dec!(730), Some(dec!(3730)), dec!(0.175)),
        IncomeTaxBracket::new(dec!(3730), Some(dec!(20730)), dec!(0.25)),
        IncomeTaxBracket::new(dec!(20730), Some(dec!(50730)), dec!(0.30)),
        IncomeTaxBracket::new(dec!(50730), None, dec!(0.35)),
    ]
}

#[test]
fn invoice_levies_on_one_thousand() {
    let config = TaxConfiguration {
        vat_rate: dec!(0.15),
        nhil_rate: dec!(0.025),
        getfund_rate: dec!(0.025),
        custom_levies: Vec::new(),
    };

    let breakdown = TaxCascadeCalculator::new(&config)
        .compute(dec!(1000))
        .unwrap();

    assert_eq!(breakdown.vat_amount, dec!(150.00));
    assert_eq!(breakdown.nhil_amount, dec!(25.00));
    assert_eq!(breakdown.getfund_amount, dec!(25.00));
    assert_eq!(breakdown.total_levies, dec!(200.00));
    assert_eq!(breakdown.total_amount, dec!(1200.00));
}

#[test]
fn paye_on_one_thousand() {
    let table = BracketTable::new(seven_bands()).unwrap();

    assert_eq!(compute_income_tax(dec!(1000), &table).unwrap(), dec!(65.75));
}

#[test]
fn ssnit_on_one_thousand() {
    let rates = SocialSecurityRates {
        employee_rate: dec!(0.055),
        employer_rate: dec!(0.13),
    };

    let split = split_social_security(dec!(1000), &rates).unwrap();

    assert_eq!(split.employee_contribution, dec!(55.00));
    assert_eq!(split.employer_contribution, dec!(130.00));
}

#[test]
fn gap_after_second_bracket_is_rejected() {
    let mut brackets = seven_bands();
    brackets[2].lower_bound = dec!(610);

    let result = BracketTable::new(brackets);

    assert_eq!(
        result,
        Err(CalculationError::InvalidConfiguration(ConfigurationError::Gap {
            index: 2,
            lower_bound: dec!(610),
            previous_upper: dec!(600),
        }))
    );
}

#[test]
fn payroll_run_across_threads_matches_sequential_run() {
    let rates = SocialSecurityRates {
        employee_rate: dec!(0.055),
        employer_rate: dec!(0.13),
    };
    let table = BracketTable::new(seven_bands()).unwrap();
    let payroll = PayrollCalculator::new(&rates, &table);

    let gross_pays: Vec<Decimal> = (1..=64).map(|i| Decimal::new(i * 137_531, 2)).collect();

    let sequential: Vec<PayrollBreakdown> = gross_pays
        .iter()
        .map(|&gross| {
            payroll
                .calculate(gross, TaxableIncomeBasis::GrossLessEmployeeContribution)
                .unwrap()
        })
        .collect();

    let concurrent: Vec<PayrollBreakdown> = thread::scope(|scope| {
        let handles: Vec<_> = gross_pays
            .iter()
            .map(|&gross| {
                scope.spawn(move || {
                    payroll.calculate(gross, TaxableIncomeBasis::GrossLessEmployeeContribution)
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().unwrap().unwrap())
            .collect()
    });

    assert_eq!(concurrent, sequential);

    let run_total: Decimal = concurrent.iter().map(|b| b.income_tax).sum();
    assert!(run_total > Decimal::ZERO);
}
