use super::*;

/// A sponsor with no special effect, no scoring weights and no achievements
pub fn plain_sponsor(time_limit: f64) -> SponsorProfile {
    SponsorProfile {
        key: "TEST".to_string(),
        name: "Test Sponsor".to_string(),
        description: "Does nothing special".to_string(),
        special: SpecialEffect {
            name: "None".to_string(),
            kind: ModifierKind::None,
            value: 1.0,
        },
        objectives: Objectives {
            main: "Balance anywhere".to_string(),
            bonus: "Balance for a while".to_string(),
            time_limit,
        },
        scoring: ScoringWeights::default(),
        achievements: Vec::new(),
    }
}

pub fn sponsor_with_effect(kind: ModifierKind, value: f64) -> SponsorProfile {
    let mut sponsor = plain_sponsor(120.0);
    sponsor.special = SpecialEffect {
        name: format!("{:?}", kind),
        kind,
        value,
    };
    sponsor
}
