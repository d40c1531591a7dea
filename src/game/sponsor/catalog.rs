use super::*;

fn builtin(
    key: &str,
    name: &str,
    description: &str,
    special: (&str, ModifierKind, f64),
    objectives: (&str, &str, f64),
    scoring: ScoringWeights,
    achievements: Vec<AchievementRule>,
) -> SponsorProfile {
    SponsorProfile {
        key: key.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        special: SpecialEffect {
            name: special.0.to_string(),
            kind: special.1,
            value: special.2,
        },
        objectives: Objectives {
            main: objectives.0.to_string(),
            bonus: objectives.1.to_string(),
            time_limit: objectives.2,
        },
        scoring,
        achievements,
    }
}

lazy_static::lazy_static! {
    static ref BUILTIN_SPONSORS: Vec<SponsorProfile> = vec![
        builtin(
            "NASA",
            "NASA",
            "Focus on precise scientific exploration and Lagrange point studies.",
            ("Enhanced Stability", ModifierKind::StabilityBonus, 1.5),
            (
                "Maintain position within 1 unit of any Lagrange point",
                "Visit all 5 Lagrange points",
                180.0,
            ),
            ScoringWeights {
                stability_multiplier: Some(2.0),
                ..ScoringWeights::default()
            },
            vec![
                AchievementRule::new("Precise Positioning", Criterion::PrecisionUnder, 0.5),
                AchievementRule::new("Multi-Point Explorer", Criterion::VisitedPointsAtLeast, 5.0),
                AchievementRule::new("Stability Master", Criterion::StabilityTimeOver, 30.0),
            ],
        ),
        builtin(
            "ESA",
            "European Space Agency",
            "Efficient exploration and sustainable space operations.",
            ("Energy Efficiency", ModifierKind::ReducedDrift, 0.7),
            (
                "Find the most efficient path between Lagrange points",
                "Minimize total distance traveled",
                240.0,
            ),
            ScoringWeights {
                efficiency_multiplier: Some(1.5),
                ..ScoringWeights::default()
            },
            vec![
                AchievementRule::new("Efficient Navigator", Criterion::TotalDistanceUnder, 300.0),
                AchievementRule::new("Path Optimizer", Criterion::VisitedPointsAtLeast, 3.0),
                AchievementRule::new("Energy Conservator", Criterion::TopSpeedUnder, 0.2),
            ],
        ),
        builtin(
            "SpaceX",
            "SpaceX",
            "Push the boundaries of speed and innovation in space.",
            ("Rapid Acceleration", ModifierKind::SpeedBoost, 1.3),
            (
                "Reach all Lagrange points as quickly as possible",
                "Achieve maximum velocity",
                120.0,
            ),
            ScoringWeights {
                speed_multiplier: Some(2.0),
                ..ScoringWeights::default()
            },
            vec![
                AchievementRule::new("Speed Demon", Criterion::TopSpeedOver, 0.45),
                AchievementRule::new("Quick Explorer", Criterion::FinishedWithin, 60.0),
                AchievementRule::new("Momentum Master", Criterion::TotalDistanceOver, 500.0),
            ],
        ),
    ];
}

/// Layout of a sponsors TOML file: any number of [[sponsor]] tables
#[derive(Deserialize)]
struct SponsorFile {
    #[serde(default)]
    sponsor: Vec<SponsorProfile>,
}

/// The sponsors a mission can be started with
#[derive(Debug, Clone)]
pub struct SponsorCatalog {
    profiles: Vec<SponsorProfile>,
}

impl SponsorCatalog {
    /// NASA, ESA and SpaceX
    pub fn builtin() -> Self {
        Self {
            profiles: BUILTIN_SPONSORS.clone(),
        }
    }

    pub fn keys(&self) -> Vec<&str> {
        self.profiles.iter().map(|p| p.key.as_str()).collect()
    }

    /// Adds a profile, replacing any existing one with the same key
    pub fn insert(&mut self, profile: SponsorProfile) -> Result<(), SessionError> {
        profile.validate()?;
        match self
            .profiles
            .iter_mut()
            .find(|p| p.key.eq_ignore_ascii_case(&profile.key))
        {
            Some(existing) => {
                info!("sponsor {} replaced", profile.key);
                *existing = profile;
            }
            None => self.profiles.push(profile),
        }
        Ok(())
    }

    /// Adds every sponsor in a TOML document
    pub fn extend_from_toml(&mut self, source: &str, contents: &str) -> Result<(), Box<dyn Error>> {
        let file: SponsorFile =
            toml::from_str(contents).map_err(|e| format!("failed to parse {}: {}", source, e))?;
        for profile in file.sponsor {
            self.insert(profile)
                .map_err(|e| format!("{}: {}", source, e))?;
        }
        Ok(())
    }

    pub fn extend_from_file(&mut self, path: &str, fs: &Filesystem) -> Result<(), Box<dyn Error>> {
        let contents = fs
            .read_to_string(path)
            .map_err(|e| format!("failed to read sponsors file {}: {}", path, e))?;
        self.extend_from_toml(path, &contents)
    }

    /// Looks a sponsor up by key, ignoring case
    pub fn select(&self, key: &str) -> Result<SponsorProfile, SessionError> {
        self.profiles
            .iter()
            .find(|p| p.key.eq_ignore_ascii_case(key))
            .cloned()
            .ok_or_else(|| SessionError::UnknownSponsor(key.to_string()))
    }
}
