// Fixed score table, used verbatim by tests.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Threat {
    None,
    Two,
    BrokenThree,
    Three,
    BrokenFour,
    Four,
    StraightFour,
    Five,
}

impl Threat {
    pub const fn base_score(&self) -> i32 {
        match self {
            Threat::Five => 1_000_000,
            Threat::StraightFour => 100_000,
            Threat::Four => 10_000,
            Threat::BrokenFour => 1_000,
            Threat::Three => 1_000,
            Threat::BrokenThree => 100,
            Threat::Two => 10,
            Threat::None => 0,
        }
    }
}

pub const NEAR_ENEMY: i32 = 1;
const COMBO_THREE_FOUR: i32 = 200_000;
const COMBO_THREE_THREE: i32 = 50_000;
const COMBO_THREE_BROKEN_THREE: i32 = 10_000;

// Bonus for a pair of threats, seen through intersecting lines of the same
// cell. Only the pairs the spec names carry a bonus; everything else is 0.
pub fn combination_bonus(a: Threat, b: Threat) -> i32 {
    use Threat::*;
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    match (lo, hi) {
        (Three, Four) | (Three, StraightFour) => COMBO_THREE_FOUR,
        (Three, Three) => COMBO_THREE_THREE,
        (BrokenThree, Three) => COMBO_THREE_BROKEN_THREE,
        _ => 0,
    }
}
