//! Summary statistics over per-RNTI series.
//!
//! Standard deviations are population standard deviations (divide by N).
//! Empty sequences report 0 for both mean and deviation.

use super::series::{EntitySeries, SeriesMap};
use crate::parser::record::Rnti;
use crate::parser::schema::EntitySummary;
use log::debug;

/// Arithmetic mean, 0 for an empty slice
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation, 0 for an empty slice
pub fn population_std(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Summarize one RNTI's series
///
/// **Public** - used by summarize_all and by callers holding a single series
pub fn summarize_entity(rnti: Rnti, series: &EntitySeries) -> EntitySummary {
    let mcs: Vec<f64> = series.mcs_values().into_iter().map(|v| v as f64).collect();
    let sinr = series.sinr_values();

    EntitySummary {
        rnti,
        length: series.len(),
        mcs_avg: mean(&mcs),
        mcs_std: population_std(&mcs),
        sinr_avg: mean(&sinr),
        sinr_std: population_std(&sinr),
    }
}

/// Summarize every RNTI, ascending by RNTI
///
/// **Public** - main entry point for summary calculation
pub fn summarize_all(series: &SeriesMap) -> Vec<EntitySummary> {
    debug!("Summarizing {} RNTIs", series.len());

    series
        .iter()
        .map(|(rnti, s)| summarize_entity(*rnti, s))
        .collect()
}

impl EntitySummary {
    /// Three-line block used in summary.txt
    pub fn text_block(&self) -> String {
        format!(
            "RNTI {}:\n  MCS - Length: {}, Avg: {:.2}, Std: {:.2}\n  SINR - Avg: {:.2}, Std: {:.2}\n",
            self.rnti, self.length, self.mcs_avg, self.mcs_std, self.sinr_avg, self.sinr_std
        )
    }

    /// Single status line mirrored to stdout
    pub fn status_line(&self) -> String {
        format!(
            "RNTI {} Length: {}, MCS Avg: {:.2}, MCS Std: {:.2}, SINR Avg: {:.2}, SINR Std: {:.2}",
            self.rnti, self.length, self.mcs_avg, self.mcs_std, self.sinr_avg, self.sinr_std
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::series::Sample;

    fn series_of(pairs: &[(i64, f64)]) -> EntitySeries {
        pairs
            .iter()
            .enumerate()
            .map(|(i, &(mcs, sinr))| Sample {
                time: 0.1 + i as f64 * 0.01,
                mcs,
                sinr,
            })
            .collect()
    }

    #[test]
    fn test_mean_and_std() {
        let values = [4.0, 6.0, 8.0];
        assert_eq!(mean(&values), 6.0);
        assert!((population_std(&values) - 1.63).abs() < 0.01);
    }

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(population_std(&[]), 0.0);
    }

    #[test]
    fn test_single_value_has_zero_std() {
        assert_eq!(population_std(&[12.5]), 0.0);
    }

    #[test]
    fn test_summarize_entity() {
        let series = series_of(&[(4, 10.0), (6, 11.0), (8, 12.0)]);
        let summary = summarize_entity(3, &series);

        assert_eq!(summary.rnti, 3);
        assert_eq!(summary.length, 3);
        assert_eq!(summary.mcs_avg, 6.0);
        assert_eq!(summary.sinr_avg, 11.0);
        assert_eq!(
            summary.text_block(),
            "RNTI 3:\n  MCS - Length: 3, Avg: 6.00, Std: 1.63\n  SINR - Avg: 11.00, Std: 0.82\n"
        );
    }

    #[test]
    fn test_summarize_empty_series() {
        let summary = summarize_entity(1, &EntitySeries::new());
        assert_eq!(summary.length, 0);
        assert_eq!(
            summary.status_line(),
            "RNTI 1 Length: 0, MCS Avg: 0.00, MCS Std: 0.00, SINR Avg: 0.00, SINR Std: 0.00"
        );
    }

    #[test]
    fn test_summarize_all_sorted() {
        let mut map = SeriesMap::new();
        map.insert(9, series_of(&[(1, 1.0)]));
        map.insert(2, series_of(&[(2, 2.0)]));
        map.insert(5, series_of(&[(3, 3.0)]));

        let rntis: Vec<Rnti> = summarize_all(&map).iter().map(|s| s.rnti).collect();
        assert_eq!(rntis, vec![2, 5, 9]);
    }
}
