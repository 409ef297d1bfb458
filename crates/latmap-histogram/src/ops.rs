//! Frequency tables derived from histograms

use crate::types::Histogram;
use latmap_core::Interval;
use std::fmt;

const INTERVAL_HEADER: &str = "Interval";
const COUNT_HEADER: &str = "Count";
const PERCENTAGE_HEADER: &str = "%";
const CUMULATIVE_HEADER: &str = "Sum of %";

/// One row of a frequency table
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyRow<T> {
    pub interval: Interval<T>,
    pub count: usize,
    /// Share of all counted samples, in percent
    pub percentage: f64,
    /// Running total of `percentage` up to and including this row
    pub cumulative_percentage: f64,
}

/// Per-bin counts with percentage and cumulative percentage columns
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyTable<T> {
    rows: Vec<FrequencyRow<T>>,
}

impl<T: Clone> FrequencyTable<T> {
    /// Tabulate a histogram; percentages are relative to the bins shown
    pub fn from_histogram(histogram: &Histogram<T>) -> Self {
        let shown: usize = histogram.bins().iter().map(|b| b.count).sum();
        let mut cumulative = 0.0;
        let rows = histogram
            .bins()
            .iter()
            .map(|bin| {
                let percentage = if shown > 0 {
                    bin.count as f64 * 100.0 / shown as f64
                } else {
                    0.0
                };
                cumulative += percentage;
                FrequencyRow {
                    interval: bin.interval.clone(),
                    count: bin.count,
                    percentage,
                    cumulative_percentage: cumulative,
                }
            })
            .collect();
        Self { rows }
    }
}

impl<T> FrequencyTable<T> {
    pub fn rows(&self) -> &[FrequencyRow<T>] {
        &self.rows
    }

    /// Render as aligned text, formatting interval ends with `formatter`
    pub fn render<F>(&self, formatter: F) -> String
    where
        F: Fn(&T) -> String,
    {
        let labels: Vec<String> = self
            .rows
            .iter()
            .map(|row| row.interval.display_with(&formatter))
            .collect();
        let interval_width = labels
            .iter()
            .map(String::len)
            .chain(std::iter::once(INTERVAL_HEADER.len()))
            .max()
            .unwrap_or(0);
        let count_width = self
            .rows
            .iter()
            .map(|row| row.count.to_string().len())
            .chain(std::iter::once(COUNT_HEADER.len()))
            .max()
            .unwrap_or(0);
        // "100.00%"
        let pct_width = 7.max(PERCENTAGE_HEADER.len());
        let cum_width = 7.max(CUMULATIVE_HEADER.len());

        let mut out = format!(
            "{INTERVAL_HEADER:>interval_width$}   {COUNT_HEADER:>count_width$}   {PERCENTAGE_HEADER:>pct_width$}   {CUMULATIVE_HEADER:>cum_width$}\n"
        );
        for (row, label) in self.rows.iter().zip(&labels) {
            let pct = format!("{:.2}%", row.percentage);
            let cum = format!("{:.2}%", row.cumulative_percentage);
            out.push_str(&format!(
                "{label:>interval_width$}   {:>count_width$}   {pct:>pct_width$}   {cum:>cum_width$}\n",
                row.count
            ));
        }
        out
    }
}

impl<T: fmt::Display> fmt::Display for FrequencyTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(|v| v.to_string()))
    }
}

impl<T: Clone> Histogram<T> {
    /// Frequency table over this histogram's bins
    pub fn frequency_table(&self) -> FrequencyTable<T> {
        FrequencyTable::from_histogram(self)
    }
}
