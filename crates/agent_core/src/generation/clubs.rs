//! Club generation

use super::data::world_data;
use crate::models::{
    AssistantQuality, Club, CoachExperience, Division, Facilities, Formation, ManagerStyle,
    MarketingLevel, PlayStyle, Staff,
};
use crate::random::GameRng;

/// Fame from the club's rank in its country list: 10 for the first four,
/// one less every four places, never below 1
pub fn fame_for_rank(rank: usize) -> u8 {
    (10 - (rank / 4) as i64).clamp(1, 10) as u8
}

/// Budget skewed toward the top of the division range for higher-ranked
/// clubs, then randomized ±20%
pub fn budget_for_rank(rank: usize, division: Division, rng: &mut GameRng) -> f64 {
    let (min, max) = division.budget_range();
    let factor = 1.0 - (rank % 10) as f64 / 10.0;
    let base = min + (max - min) * factor;
    base * rng.float_range(0.8, 1.2) * 1_000_000.0
}

fn pick<T: Copy>(rng: &mut GameRng, options: &[T]) -> T {
    *rng.pick(options).unwrap_or(&options[0])
}

fn random_staff(rng: &mut GameRng) -> Staff {
    Staff {
        coach: pick(rng, &[CoachExperience::Experienced, CoachExperience::Beginner, CoachExperience::Veteran]),
        assistant_coach: pick(rng, &[AssistantQuality::Good, AssistantQuality::Regular, AssistantQuality::Beginner]),
        manager: pick(rng, &[ManagerStyle::Efficient, ManagerStyle::Bureaucratic, ManagerStyle::Charismatic]),
        scouts: rng.int_inclusive(1, 5) as u8,
        physios: rng.int_inclusive(1, 3) as u8,
        psychologists: rng.int_inclusive(0, 2) as u8,
        fitness_coaches: rng.int_inclusive(1, 3) as u8,
        marketing: pick(rng, &[MarketingLevel::Expert, MarketingLevel::Regular, MarketingLevel::Beginner]),
    }
}

fn random_facilities(rng: &mut GameRng) -> Facilities {
    Facilities {
        stadium: rng.int_inclusive(1, 5) as u8,
        training_center: rng.int_inclusive(1, 5) as u8,
        medical_center: rng.int_inclusive(1, 5) as u8,
        youth_academy: rng.int_inclusive(1, 5) as u8,
    }
}

/// Build every club of every country. Strength is filled in later by the
/// strength model once rosters exist.
pub fn generate_clubs(rng: &mut GameRng) -> Vec<Club> {
    let mut clubs = Vec::new();
    for (&country, names) in &world_data().clubs {
        for (rank, name) in names.iter().enumerate() {
            let division = Division::for_rank(rank);
            let budget = budget_for_rank(rank, division, rng);
            clubs.push(Club {
                name: name.clone(),
                country,
                division,
                budget,
                base_budget: budget,
                fame: fame_for_rank(rank),
                popularity: rng.int_inclusive(1, 100) as u8,
                strength: 0.0,
                staff: random_staff(rng),
                facilities: random_facilities(rng),
                play_style: pick(rng, &PlayStyle::ALL),
                formation: pick(rng, &Formation::ALL),
            });
        }
    }
    clubs
}
