//! Dashboard Aggregator
//!
//! Read-only summary over the static dataset. Always renders: without a
//! dataset it returns a zeroed snapshot.

use crate::logic::dataset::Dataset;
use crate::models::{
    CandidateRow, DashboardCharts, DashboardMetrics, DashboardSnapshot, FeatureImportance,
};

/// Rows shown in the top-candidate table
pub const TOP_CANDIDATES: usize = 5;

// Placeholders, not computed from the model
pub const AVG_SCORE: f64 = 0.042;
pub const BEST_MODEL: &str = "Random Forest";
pub const CANDIDATE_PROBABILITY: f64 = 0.95;

const NO_MODEL: &str = "N/A";

const IMPORTANCE_LABELS: [&str; 5] = ["Radius", "Mass", "EqTemp", "Insolation", "Period"];
const IMPORTANCE_VALUES: [f64; 5] = [0.35, 0.25, 0.20, 0.15, 0.05];

pub fn snapshot(dataset: Option<&Dataset>) -> DashboardSnapshot {
    let Some(dataset) = dataset else {
        return empty_snapshot();
    };

    let total = dataset.total() as u64;
    let habitable = dataset.habitable_count() as u64;

    let table = dataset
        .rows()
        .iter()
        .filter(|row| row.is_habitable())
        .take(TOP_CANDIDATES)
        .map(|row| CandidateRow {
            name: row.name.clone(),
            radius: row.radius,
            eq_temp: row.eq_temp,
            habitability_probability: CANDIDATE_PROBABILITY,
        })
        .collect();

    DashboardSnapshot {
        metrics: DashboardMetrics {
            total,
            habitable,
            non_habitable: total - habitable,
            avg_score: AVG_SCORE,
            best_model: BEST_MODEL.to_string(),
        },
        table,
        charts: DashboardCharts {
            feature_importance: FeatureImportance {
                labels: IMPORTANCE_LABELS.iter().map(|s| s.to_string()).collect(),
                values: IMPORTANCE_VALUES.to_vec(),
            },
        },
    }
}

pub fn empty_snapshot() -> DashboardSnapshot {
    DashboardSnapshot {
        metrics: DashboardMetrics {
            total: 0,
            habitable: 0,
            non_habitable: 0,
            avg_score: 0.0,
            best_model: NO_MODEL.to_string(),
        },
        table: Vec::new(),
        charts: DashboardCharts::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlanetRecord;
    use std::io::Write;

    fn row(i: usize, habitable: u8) -> PlanetRecord {
        PlanetRecord {
            name: format!("Kepler-{i}"),
            radius: Some(1.0 + i as f64 * 0.01),
            mass: Some(1.0),
            eq_temp: Some(280.0 + i as f64),
            insolation: Some(1.0),
            period: Some(365.0),
            habitable,
            semi_major_axis: None,
            density: None,
            star_temp: None,
            star_lum: None,
            star_met: None,
            star_type: None,
        }
    }

    #[test]
    fn test_empty_without_dataset() {
        let snap = snapshot(None);
        assert_eq!(snap.metrics.total, 0);
        assert_eq!(snap.metrics.avg_score, 0.0);
        assert_eq!(snap.metrics.best_model, "N/A");
        assert!(snap.table.is_empty());
        assert!(snap.charts.feature_importance.labels.is_empty());
        assert!(snap.charts.feature_importance.values.is_empty());
    }

    #[test]
    fn test_counts_and_table() {
        let rows: Vec<PlanetRecord> = (0..10).map(|i| row(i, (i % 2 == 0) as u8)).collect();
        let dataset = Dataset::new(rows);
        let snap = snapshot(Some(&dataset));

        assert_eq!(snap.metrics.total, 10);
        assert_eq!(snap.metrics.habitable, 5);
        assert_eq!(snap.metrics.non_habitable, 5);
        assert_eq!(snap.metrics.avg_score, AVG_SCORE);
        assert_eq!(snap.metrics.best_model, BEST_MODEL);

        let names: Vec<&str> = snap.table.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Kepler-0", "Kepler-2", "Kepler-4", "Kepler-6", "Kepler-8"]);
        assert!(snap.table.iter().all(|r| r.habitability_probability == 0.95));
    }

    #[test]
    fn test_table_capped_at_five() {
        let dataset = Dataset::new((0..12).map(|i| row(i, 1)).collect());
        assert_eq!(snapshot(Some(&dataset)).table.len(), TOP_CANDIDATES);
    }

    #[test]
    fn test_fewer_than_five_habitable() {
        let dataset = Dataset::new(vec![row(0, 0), row(1, 1), row(2, 0)]);
        let snap = snapshot(Some(&dataset));
        assert_eq!(snap.table.len(), 1);
        assert_eq!(snap.table[0].eq_temp, Some(281.0));
    }

    #[test]
    fn test_rejected_rows_count_as_non_habitable() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Name,Radius,EqTemp,Habitable").unwrap();
        writeln!(file, "Kepler-0,oops,281,1").unwrap();
        writeln!(file, "Kepler-1,1.2,290,").unwrap();
        writeln!(file, "Kepler-2,2.0,400,0").unwrap();

        let dataset = Dataset::load(file.path()).unwrap();
        let snap = snapshot(Some(&dataset));
        assert_eq!(snap.metrics.total, 3);
        assert_eq!(snap.metrics.habitable, 1);
        assert_eq!(snap.metrics.non_habitable, 2);
        assert_eq!(snap.table[0].radius, None);
        assert_eq!(snap.table[0].eq_temp, Some(281.0));
    }

    #[test]
    fn test_chart_independent_of_data() {
        let empty = Dataset::default();
        let snap = snapshot(Some(&empty));
        assert_eq!(snap.metrics.total, 0);
        assert_eq!(snap.charts.feature_importance.labels.len(), 5);
        assert_eq!(snap.charts.feature_importance.values, vec![0.35, 0.25, 0.20, 0.15, 0.05]);
    }
}
