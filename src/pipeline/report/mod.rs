mod gps;
mod wellness;

use crate::types::report::{Axis, Chart, ChartSeries, SeriesKind};

pub use gps::{acwr_summary, athletes, player_report, session_days, session_report};
pub use wellness::{wellness_daily, wellness_dates, wellness_players, wellness_trend, ALL_PLAYERS};

pub const DEFAULT_TREND_DAYS: i64 = 30;

fn bar(name: &str, values: Vec<Option<f64>>) -> ChartSeries {
    ChartSeries {
        name: name.to_string(),
        kind: SeriesKind::Bar,
        axis: Axis::Primary,
        values,
    }
}

fn line(name: &str, values: Vec<Option<f64>>) -> ChartSeries {
    ChartSeries {
        name: name.to_string(),
        kind: SeriesKind::Line,
        axis: Axis::Secondary,
        values,
    }
}

fn chart(id: &str, title: &str, y_label: &str, y2_label: Option<&str>, x: Vec<String>, series: Vec<ChartSeries>) -> Chart {
    Chart {
        id: id.to_string(),
        title: title.to_string(),
        y_label: y_label.to_string(),
        y2_label: y2_label.map(str::to_string),
        x,
        series,
    }
}

fn mean(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}
