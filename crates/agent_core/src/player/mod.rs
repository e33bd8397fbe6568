//! Player rating, valuation and development

pub mod development;
pub mod position_weights;
pub mod valuation;

pub use development::DevelopmentCalculator;
pub use position_weights::PositionWeights;
pub use valuation::{format_currency, market_value};
