use super::*;

/// Only this many of the best results are kept
pub const MAX_HIGH_SCORES: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighScore {
    pub sponsor: String,
    pub outcome: SessionStatus,
    pub mission_score: u64,
    pub score: f64,
    pub satisfaction: f64,
    pub elapsed: f64,
    #[serde(default)]
    pub achievements: Vec<String>,
}

impl From<&MissionReport> for HighScore {
    fn from(report: &MissionReport) -> Self {
        Self {
            sponsor: report.sponsor.clone(),
            outcome: report.outcome,
            mission_score: report.mission_score,
            score: report.score,
            satisfaction: report.satisfaction,
            elapsed: report.stats.elapsed,
            achievements: report.achievements.clone(),
        }
    }
}

/// The best mission results, highest mission score first. Persistence is best-effort: a
/// missing or broken file is treated as an empty table.
#[derive(Debug, Clone, PartialEq)]
pub struct HighScores {
    path: String,
    entries: Vec<HighScore>,
}

impl HighScores {
    pub fn load(path: &str, fs: &Filesystem) -> Self {
        let entries = if fs.is_file(path) {
            fs.read_to_string(path)
                .map_err(|e| e.to_string())
                .and_then(|contents| {
                    serde_json::from_str::<Vec<HighScore>>(&contents).map_err(|e| e.to_string())
                })
                .or_log_warn(&format!("ignoring high score file {}", path))
                .unwrap_or_default()
        } else {
            Vec::new()
        };
        let mut scores = Self {
            path: path.to_string(),
            entries,
        };
        scores.sort_and_trim();
        scores
    }

    #[allow(dead_code)]
    pub fn entries(&self) -> &[HighScore] {
        &self.entries
    }

    fn sort_and_trim(&mut self) {
        // Stable, so earlier results stay ahead of later ones with the same score
        self.entries
            .sort_by(|a, b| b.mission_score.cmp(&a.mission_score));
        self.entries.truncate(MAX_HIGH_SCORES);
    }

    /// Adds a result. Returns its zero-based rank, or None if it did not make the table.
    pub fn record(&mut self, entry: HighScore) -> Option<usize> {
        let rank = self
            .entries
            .iter()
            .position(|e| e.mission_score < entry.mission_score)
            .unwrap_or_else(|| self.entries.len());
        if rank >= MAX_HIGH_SCORES {
            return None;
        }
        self.entries.insert(rank, entry);
        self.entries.truncate(MAX_HIGH_SCORES);
        Some(rank)
    }

    pub fn save(&self, fs: &Filesystem) -> Result<(), Box<dyn Error>> {
        let json = serde_json::to_string_pretty(&self.entries)?;
        fs.write_string(&self.path, &json)
            .map_err(|e| format!("failed to write {}: {}", self.path, e))?;
        Ok(())
    }
}
