//! Market value and salary formulas

use crate::models::Position;

/// Annual salary as a share of market value
pub const SALARY_SHARE: f64 = 0.05;

/// Value premium per point of headroom between potential and overall
const POTENTIAL_GAP_PRICE: f64 = 100_000.0;

pub fn position_multiplier(position: Position) -> f64 {
    match position {
        Position::Goalkeeper => 0.9,
        Position::Defender => 1.0,
        Position::Midfielder => 1.2,
        Position::Forward => 1.5,
    }
}

/// `(overall³ / age + (potential - overall) × 100000) × position multiplier`
///
/// The potential gap never goes negative, so a player past their visible
/// ceiling is not valued below the base term.
pub fn market_value(overall: u8, age: u8, potential: u8, position: Position) -> f64 {
    let overall_f = overall as f64;
    let base = overall_f.powi(3) / age.max(1) as f64;
    let gap = potential.saturating_sub(overall) as f64;
    (base + gap * POTENTIAL_GAP_PRICE) * position_multiplier(position)
}

pub fn base_salary(value: f64) -> f64 {
    value * SALARY_SHARE
}

/// Format a money amount the way notifications print it: `€1.5M`, `€12.0K`, `€950`
pub fn format_currency(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let abs = amount.abs();
    if abs >= 1_000_000.0 {
        format!("{}€{:.1}M", sign, abs / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("{}€{:.1}K", sign, abs / 1_000.0)
    } else {
        format!("{}€{:.0}", sign, abs)
    }
}
