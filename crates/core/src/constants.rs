use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Format used by stored purchase and goal dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Minimum number of purchases before a lump-sum comparison is meaningful
pub const MIN_PURCHASES_FOR_COMPARISON: usize = 2;

/// Bounds accepted by the DCA projection calculator, in months
pub const MIN_PROJECTION_MONTHS: u32 = 1;
pub const MAX_PROJECTION_MONTHS: u32 = 600;

/// Smallest accepted capital or price: one minor currency unit
pub const MIN_MONETARY_AMOUNT: Decimal = dec!(0.01);

/// Smallest accepted quantity: one satoshi
pub const MIN_QUANTITY: Decimal = dec!(0.00000001);

/// Largest accepted amount, quantity, price, or running total.
/// Keeps every derived value and percentage inside the `Decimal` range.
pub const MAX_AMOUNT: Decimal = dec!(1000000000000);
