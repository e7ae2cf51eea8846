//! Student records and the roster that holds them.

/// Weight of the peer-review total in the final score.
pub const PEER_REVIEW_WEIGHT: f64 = 0.4;

/// Weight of the daily score in the final score.
pub const DAILY_WEIGHT: f64 = 0.6;

/// One roster row.
///
/// The final score is derived from `peer_review_total` and `daily_score` on
/// every read, so it cannot drift from its formula. The daily score is the
/// only component that changes after load, and only upward.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentRecord {
    pub id: String,
    pub name: String,
    pub gender: String,
    pub objective_score: f64,
    pub subjective_score: f64,
    peer_review_total: f64,
    daily_score: f64,
}

impl StudentRecord {
    /// Create a record from its loaded score components.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        gender: impl Into<String>,
        objective_score: f64,
        subjective_score: f64,
        peer_review_total: f64,
        daily_score: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            gender: gender.into(),
            objective_score,
            subjective_score,
            peer_review_total,
            daily_score,
        }
    }

    #[must_use]
    pub fn peer_review_total(&self) -> f64 {
        self.peer_review_total
    }

    #[must_use]
    pub fn daily_score(&self) -> f64 {
        self.daily_score
    }

    /// `peer_review_total * 0.4 + daily_score * 0.6`.
    #[must_use]
    pub fn final_score(&self) -> f64 {
        self.peer_review_total * PEER_REVIEW_WEIGHT + self.daily_score * DAILY_WEIGHT
    }

    /// Daily score needed for the final score to reach `target`.
    #[must_use]
    pub fn daily_required_for(&self, target: f64) -> f64 {
        (target - self.peer_review_total * PEER_REVIEW_WEIGHT) / DAILY_WEIGHT
    }

    /// Replace the daily score if `candidate` is higher.
    ///
    /// Returns `true` if the score changed.
    pub fn raise_daily_score(&mut self, candidate: f64) -> bool {
        if candidate > self.daily_score {
            self.daily_score = candidate;
            true
        } else {
            false
        }
    }
}

/// Ordered collection of all student records for one run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    records: Vec<StudentRecord>,
}

impl Roster {
    #[must_use]
    pub fn new(records: Vec<StudentRecord>) -> Self {
        Self { records }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }

    pub fn records_mut(&mut self) -> &mut [StudentRecord] {
        &mut self.records
    }

    /// Stable sort ascending by current final score.
    ///
    /// Equal scores keep their relative order.
    pub fn sort_by_final_score(&mut self) {
        self.records
            .sort_by(|a, b| a.final_score().total_cmp(&b.final_score()));
    }

    #[must_use]
    pub fn into_records(self) -> Vec<StudentRecord> {
        self.records
    }
}

impl FromIterator<StudentRecord> for Roster {
    fn from_iter<I: IntoIterator<Item = StudentRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(peer: f64, daily: f64) -> StudentRecord {
        StudentRecord::new("1", "A", "F", 0.0, 0.0, peer, daily)
    }

    #[test]
    fn final_score_follows_weights() {
        let r = record(50.0, 50.0);
        assert!((r.final_score() - 50.0).abs() < 1e-9);

        let r = record(100.0, 0.0);
        assert!((r.final_score() - 40.0).abs() < 1e-9);
    }

    #[test]
    fn raise_only_moves_up() {
        let mut r = record(50.0, 70.0);
        assert!(!r.raise_daily_score(60.0));
        assert!((r.daily_score() - 70.0).abs() < 1e-12);

        assert!(r.raise_daily_score(80.0));
        assert!((r.daily_score() - 80.0).abs() < 1e-12);
        assert!((r.final_score() - (20.0 + 48.0)).abs() < 1e-9);
    }

    #[test]
    fn daily_required_inverts_final_score() {
        let r = record(50.0, 0.0);
        let required = r.daily_required_for(60.0);
        assert!((required - 40.0 / 0.6).abs() < 1e-9);
    }

    #[test]
    fn sort_is_stable_for_ties() {
        let mut roster: Roster = vec![
            StudentRecord::new("b", "B", "M", 0.0, 0.0, 70.0, 70.0),
            StudentRecord::new("a", "A", "F", 0.0, 0.0, 50.0, 50.0),
            StudentRecord::new("c", "C", "F", 0.0, 0.0, 70.0, 70.0),
        ]
        .into_iter()
        .collect();

        roster.sort_by_final_score();

        let ids: Vec<&str> = roster.records().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }
}
