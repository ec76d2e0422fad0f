use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display(
        "Invalid precision: {} significant digits (expected 1..={})",
        digits,
        super::precision::MAX_SIGNIFICANT_DIGITS
    ))]
    InvalidPrecision { digits: usize },

    #[snafu(display("Invalid bounds `{}`: {}", input, details))]
    InvalidBounds { input: String, details: String },
}
