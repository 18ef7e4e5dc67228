//! Plain-text table, line chart and CSV export of projection results

use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::projection::ProjectionSeries;
use crate::rates::RateSeries;

/// Width of one year column in the chart
const CHART_COLUMN_WIDTH: usize = 6;

/// Render the Year / Property Value table
pub fn render_table(series: &ProjectionSeries) -> String {
    let mut out = format!("{:>6} {:>20}\n", "Year", "Property Value ($)");
    out.push_str(&format!("{}\n", "-".repeat(27)));
    for point in series.iter() {
        out.push_str(&format!("{:>6} {:>20.2}\n", point.year, point.value));
    }
    out
}

/// Render a line chart of value by year, `height` rows tall
///
/// Returns an empty string for an empty series.
pub fn render_chart(series: &ProjectionSeries, height: usize) -> String {
    if series.is_empty() {
        return String::new();
    }
    let height = height.max(2);

    let values: Vec<f64> = series.iter().map(|p| p.value).collect();
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = if max > min { max - min } else { 1.0 };

    let levels: Vec<usize> = values
        .iter()
        .map(|v| (((v - min) / range) * (height - 1) as f64).round() as usize)
        .collect();

    let mut out = String::new();
    for row in (0..height).rev() {
        let label = min + range * row as f64 / (height - 1) as f64;
        out.push_str(&format!("{:>14.2} |", label));
        for (i, &level) in levels.iter().enumerate() {
            let mark = if level == row {
                '*'
            } else if i > 0 && between(row, levels[i - 1], level) {
                // Vertical connector between consecutive points
                '|'
            } else {
                ' '
            };
            out.push_str(&format!("{:^width$}", mark, width = CHART_COLUMN_WIDTH));
        }
        out.push('\n');
    }

    out.push_str(&format!(
        "{:>15}{}\n",
        "+",
        "-".repeat(levels.len() * CHART_COLUMN_WIDTH)
    ));
    out.push_str(&" ".repeat(16));
    for point in series.iter() {
        out.push_str(&format!("{:^width$}", point.year, width = CHART_COLUMN_WIDTH));
    }
    out.push('\n');
    out
}

/// Strictly between two levels
fn between(row: usize, a: usize, b: usize) -> bool {
    let (lo, hi) = if a < b { (a, b) } else { (b, a) };
    row > lo && row < hi
}

/// Write the projection table as CSV
pub fn write_projection_csv<P: AsRef<Path>>(path: P, series: &ProjectionSeries) -> Result<()> {
    write_projection_csv_to(std::fs::File::create(path)?, series)
}

/// Write the projection table as CSV to any writer
pub fn write_projection_csv_to<W: Write>(writer: W, series: &ProjectionSeries) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for point in series.iter() {
        csv_writer.serialize(point)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write the extracted rate series as CSV (`Year,Rate`)
pub fn write_rates_csv<P: AsRef<Path>>(path: P, rates: &RateSeries) -> Result<()> {
    write_rates_csv_to(std::fs::File::create(path)?, rates)
}

pub fn write_rates_csv_to<W: Write>(writer: W, rates: &RateSeries) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for point in rates {
        csv_writer.serialize(point)?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rates::RatePoint;

    fn sample() -> ProjectionSeries {
        let mut series = ProjectionSeries::new(2020, 100_000.0);
        series.add_point(2020, 105_000.0);
        series.add_point(2021, 108_150.0);
        series.add_point(2022, 103_000.5);
        series
    }

    #[test]
    fn test_table_rows() {
        let table = render_table(&sample());
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].contains("Property Value ($)"));
        assert_eq!(lines[2].split_whitespace().collect::<Vec<_>>(), vec!["2020", "105000.00"]);
        assert_eq!(lines[4].split_whitespace().collect::<Vec<_>>(), vec!["2022", "103000.50"]);
    }

    #[test]
    fn test_chart_marks_every_year() {
        let chart = render_chart(&sample(), 5);
        assert_eq!(chart.matches('*').count(), 3);
        assert!(chart.contains("2020") && chart.contains("2022"));

        // Top row holds the maximum
        let top = chart.lines().next().unwrap();
        assert!(top.contains("108150.00") && top.contains('*'));
    }

    #[test]
    fn test_chart_flat_and_empty() {
        let mut flat = ProjectionSeries::new(2020, 0.0);
        flat.add_point(2020, 0.0);
        flat.add_point(2021, 0.0);
        assert_eq!(render_chart(&flat, 4).matches('*').count(), 2);

        assert!(render_chart(&ProjectionSeries::new(2020, 1.0), 4).is_empty());
    }

    #[test]
    fn test_projection_csv() {
        let mut buf = Vec::new();
        write_projection_csv_to(&mut buf, &sample()).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("Year,Property Value ($)"));
        assert_eq!(lines.next(), Some("2020,105000.0"));
        assert_eq!(text.lines().count(), 4);
    }

    #[test]
    fn test_rates_csv_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rates.csv");
        let rates = RateSeries::from_points(vec![RatePoint::new(2021, 0.07), RatePoint::new(2020, -0.0325)]);

        write_rates_csv(&path, &rates).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "Year,Rate\n2020,-0.0325\n2021,0.07\n");
    }
}
