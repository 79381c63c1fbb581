//! Vote tallying for consensus
//!
//! Each prediction record casts one vote for its class code. The tally also
//! keeps the confidences reported with those votes for tie-breaking.

use crate::core::class_code::ClassCode;
use crate::prediction::PredictionRecord;
use std::collections::BTreeMap;

/// Score given to a tied candidate whose votes carry no confidence
pub const NEUTRAL_CONFIDENCE: f64 = 0.5;

/// Mean confidences closer than this are level
pub const CONFIDENCE_EPSILON: f64 = 1e-9;

/// Votes cast for one class code
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VoteTally {
    /// Number of records that predicted this code
    pub votes: usize,
    /// Confidences of the votes that reported one
    pub confidences: Vec<f64>,
}

impl VoteTally {
    /// Mean confidence of the confidence-bearing votes
    ///
    /// Returns [`NEUTRAL_CONFIDENCE`] when no vote reported a confidence.
    /// The sum is taken in ascending order, so the result does not depend on
    /// the order the records arrived in.
    pub fn mean_confidence(&self) -> f64 {
        if self.confidences.is_empty() {
            return NEUTRAL_CONFIDENCE;
        }
        let mut sorted = self.confidences.clone();
        sorted.sort_by(f64::total_cmp);
        sorted.iter().sum::<f64>() / sorted.len() as f64
    }
}

/// Tally of votes across a batch of records, keyed by class code
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VoteCount {
    tallies: BTreeMap<ClassCode, VoteTally>,
}

impl VoteCount {
    /// Count one vote per record
    pub fn from_records(records: &[PredictionRecord]) -> Self {
        let mut tallies: BTreeMap<ClassCode, VoteTally> = BTreeMap::new();
        for record in records {
            let tally = tallies.entry(record.class_code()).or_default();
            tally.votes += 1;
            if let Some(confidence) = record.confidence() {
                tally.confidences.push(confidence);
            }
        }
        Self { tallies }
    }

    /// Highest vote count, 0 for an empty batch
    pub fn max_votes(&self) -> usize {
        self.tallies.values().map(|t| t.votes).max().unwrap_or(0)
    }

    /// Codes reaching the highest vote count, in ascending code order
    pub fn leaders(&self) -> Vec<ClassCode> {
        let max_votes = self.max_votes();
        self.tallies
            .iter()
            .filter(|(_, t)| t.votes == max_votes)
            .map(|(code, _)| *code)
            .collect()
    }

    pub fn get(&self, code: ClassCode) -> Option<&VoteTally> {
        self.tallies.get(&code)
    }

    pub fn votes_for(&self, code: ClassCode) -> usize {
        self.get(code).map(|t| t.votes).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.tallies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::labels::ClassLabels;
    use crate::prediction::ProbabilityDistribution;

    fn record(code: i64, confidence: Option<f64>) -> PredictionRecord {
        let labels = ClassLabels::cancer_subtypes();
        let record = PredictionRecord::new("m", ClassCode::new(code), &labels);
        match confidence {
            Some(c) => {
                let dist = ProbabilityDistribution::new(vec![c, 1.0 - c]).unwrap();
                record.with_distribution(&dist, &labels)
            }
            None => record,
        }
    }

    #[test]
    fn test_counts_votes_per_code() {
        let records = vec![record(1, None), record(1, None), record(2, None)];
        let count = VoteCount::from_records(&records);

        assert_eq!(count.votes_for(ClassCode::new(1)), 2);
        assert_eq!(count.votes_for(ClassCode::new(2)), 1);
        assert_eq!(count.votes_for(ClassCode::new(3)), 0);
        assert_eq!(count.max_votes(), 2);
        assert_eq!(count.leaders(), vec![ClassCode::new(1)]);
    }

    #[test]
    fn test_leaders_ordered_by_code() {
        let records = vec![record(3, None), record(0, None)];
        let count = VoteCount::from_records(&records);
        assert_eq!(count.leaders(), vec![ClassCode::new(0), ClassCode::new(3)]);
    }

    #[test]
    fn test_mean_confidence_only_over_reported_values() {
        let records = vec![record(1, Some(0.9)), record(1, None), record(1, Some(0.7))];
        let count = VoteCount::from_records(&records);
        let tally = count.get(ClassCode::new(1)).unwrap();

        assert_eq!(tally.votes, 3);
        assert!((tally.mean_confidence() - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_neutral_confidence_without_reports() {
        let tally = VoteTally {
            votes: 2,
            confidences: vec![],
        };
        assert_eq!(tally.mean_confidence(), NEUTRAL_CONFIDENCE);
    }

    #[test]
    fn test_mean_confidence_ignores_record_order() {
        let forward = VoteTally {
            votes: 3,
            confidences: vec![0.5, 0.6, 0.55],
        };
        let mut reversed = forward.clone();
        reversed.confidences.reverse();
        let shuffled = VoteTally {
            votes: 3,
            confidences: vec![0.6, 0.5, 0.55],
        };

        assert_eq!(
            forward.mean_confidence().to_bits(),
            reversed.mean_confidence().to_bits()
        );
        assert_eq!(
            forward.mean_confidence().to_bits(),
            shuffled.mean_confidence().to_bits()
        );
    }

    #[test]
    fn test_empty_batch() {
        let count = VoteCount::from_records(&[]);
        assert!(count.is_empty());
        assert_eq!(count.max_votes(), 0);
        assert!(count.leaders().is_empty());
    }
}
