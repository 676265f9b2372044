//! "Did you know" facts shown on the home screen.

const FACTS: [&str; 5] = [
    "Over 30% of medicines in developing countries may be counterfeit. Always verify before use!",
    "Counterfeit medicines kill over 250,000 children worldwide each year.",
    "Check the packaging for spelling errors - they're often signs of fake medicines.",
    "Always buy medicines from licensed pharmacies with valid NDA certificates.",
    "Store medicines in cool, dry places away from direct sunlight to maintain effectiveness.",
];

/// All facts in rotation order.
pub fn all_facts() -> &'static [&'static str] {
    &FACTS
}

/// The fact for a rotation tick. Wraps around so callers can keep counting.
pub fn fact_at(tick: usize) -> &'static str {
    FACTS[tick % FACTS.len()]
}
