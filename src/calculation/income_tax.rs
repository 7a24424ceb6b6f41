//! Progressive income tax with credit points.
//!
//! The monthly gross is annualised, run through the six-band schedule, and the
//! annual tax divided back to a monthly figure. Credit points are then
//! subtracted; the result is floored at zero.
//!
//! ## Annual schedule (₪)
//!
//! | Band | Up to   | Rate |
//! |------|---------|------|
//! | 1    | 84,120  | 10%  |
//! | 2    | 120,720 | 14%  |
//! | 3    | 193,800 | 20%  |
//! | 4    | 269,280 | 31%  |
//! | 5    | 560,280 | 35%  |
//! | 6    | none    | 47%  |

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::BandTax;

/// One band of the annual income tax schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxBracket {
    /// Annual income at which the band ends; `None` for the top band.
    pub upper: Option<Decimal>,
    /// Marginal rate applied within the band.
    pub rate: Decimal,
}

/// The annual income tax schedule, lowest band first.
pub const INCOME_TAX_BRACKETS: [TaxBracket; 6] = [
    TaxBracket {
        upper: Some(dec!(84120)),
        rate: dec!(0.10),
    },
    TaxBracket {
        upper: Some(dec!(120720)),
        rate: dec!(0.14),
    },
    TaxBracket {
        upper: Some(dec!(193800)),
        rate: dec!(0.20),
    },
    TaxBracket {
        upper: Some(dec!(269280)),
        rate: dec!(0.31),
    },
    TaxBracket {
        upper: Some(dec!(560280)),
        rate: dec!(0.35),
    },
    TaxBracket {
        upper: None,
        rate: dec!(0.47),
    },
];

/// Monthly value of a single tax credit point.
pub const CREDIT_POINT_VALUE: Decimal = dec!(242);

const MONTHS_PER_YEAR: Decimal = dec!(12);

/// The unrounded income tax of a month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomeTax {
    /// Monthly tax before credit points.
    pub before_credits: Decimal,
    /// Credit actually applied (at most `before_credits`).
    pub credit: Decimal,
    /// Monthly tax after credit points, never negative.
    pub tax: Decimal,
    /// Annual tax per band, for bands that received income.
    pub bands: Vec<BandTax>,
}

/// Applies the progressive schedule to an annual income.
///
/// Each band taxes only the portion of income that falls inside it. Bands
/// above the income are omitted from the breakdown.
///
/// # Example
///
/// ```
/// use pension_engine::calculation::annual_tax_by_band;
/// use rust_decimal_macros::dec;
///
/// let bands = annual_tax_by_band(dec!(100000));
/// assert_eq!(bands.len(), 2);
/// assert_eq!(bands[0].tax, dec!(8412));        // 84,120 × 10%
/// assert_eq!(bands[1].taxable_amount, dec!(15880));
/// ```
pub fn annual_tax_by_band(annual_income: Decimal) -> Vec<BandTax> {
    let mut bands = Vec::new();
    let mut lower = Decimal::ZERO;

    for (index, bracket) in INCOME_TAX_BRACKETS.iter().enumerate() {
        if annual_income <= lower {
            break;
        }

        let ceiling = match bracket.upper {
            Some(upper) if annual_income > upper => upper,
            _ => annual_income,
        };
        let taxable_amount = ceiling - lower;

        bands.push(BandTax {
            band: index as u32 + 1,
            lower,
            upper: bracket.upper,
            rate: bracket.rate,
            taxable_amount,
            tax: taxable_amount * bracket.rate,
        });

        match bracket.upper {
            Some(upper) => lower = upper,
            None => break,
        }
    }

    bands
}

/// Computes the monthly income tax for a monthly gross.
///
/// # Example
///
/// ```
/// use pension_engine::calculation::calculate_income_tax;
/// use rust_decimal::Decimal;
/// use rust_decimal_macros::dec;
///
/// // Annual 144,000: 8,412 + 5,124 + 4,656 = 18,192 → 1,516 per month
/// let tax = calculate_income_tax(dec!(12000), Decimal::ZERO);
/// assert_eq!(tax.tax, dec!(1516));
///
/// // Credit points can never make the tax negative.
/// let tax = calculate_income_tax(dec!(5000), dec!(10));
/// assert_eq!(tax.tax, Decimal::ZERO);
/// ```
pub fn calculate_income_tax(monthly_gross: Decimal, credit_points: Decimal) -> IncomeTax {
    let bands = annual_tax_by_band(monthly_gross * MONTHS_PER_YEAR);
    let annual_tax: Decimal = bands.iter().map(|b| b.tax).sum();
    let before_credits = annual_tax / MONTHS_PER_YEAR;

    let available_credit = credit_points * CREDIT_POINT_VALUE;
    let credit = available_credit.min(before_credits);

    IncomeTax {
        before_credits,
        credit,
        tax: before_credits - credit,
        bands,
    }
}
