//! Horizontal bar chart.
//!
//! Bars are drawn in the order given, each as wide as its share of the
//! largest value in the series.

use leptos::*;

use crate::types::ViewEntry;

/// Width of a bar as a percentage of the largest value.
pub fn bar_percent(value: f64, max: f64) -> f64 {
    if !value.is_finite() || !max.is_finite() || max <= 0.0 {
        return 0.0;
    }
    (value / max * 100.0).clamp(0.0, 100.0)
}

/// Largest value of the series, 0 when empty.
pub fn series_max(entries: &[ViewEntry]) -> f64 {
    entries
        .iter()
        .map(|e| e.value)
        .filter(|v| v.is_finite())
        .fold(0.0, f64::max)
}

/// Format a value for a bar label: integers with thousands separators,
/// fractional values with two decimals.
pub fn format_value(value: f64) -> String {
    if !value.is_finite() {
        return "-".to_string();
    }
    if value.fract() != 0.0 {
        return format!("{:.2}", value);
    }

    let digits = format!("{}", value.abs() as u64);
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if value < 0.0 {
        grouped.insert(0, '-');
    }
    grouped
}

#[component]
pub fn BarChart(
    /// Chart heading
    title: String,
    entries: Vec<ViewEntry>,
    /// Appended to every value label, e.g. " €"
    #[prop(optional)]
    unit: &'static str,
) -> impl IntoView {
    let max = series_max(&entries);
    let empty = entries.is_empty();

    let bars = entries
        .into_iter()
        .map(|entry| {
            let width = format!("width: {:.1}%", bar_percent(entry.value, max));
            view! {
                <div class="bar-row">
                    <span class="bar-label" title=entry.label.clone()>{entry.label.clone()}</span>
                    <div class="bar-track">
                        <div class="bar-fill" style=width></div>
                    </div>
                    <span class="bar-value">{format!("{}{}", format_value(entry.value), unit)}</span>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="chart">
            <div class="chart-title">{title}</div>
            <Show when=move || empty fallback=|| view! {}>
                <div class="chart-empty">"No data"</div>
            </Show>
            <div class="chart-bars">{bars}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(label: &str, value: f64) -> ViewEntry {
        ViewEntry {
            label: label.to_string(),
            value,
        }
    }

    #[test]
    fn test_bar_percent_scales_to_max() {
        assert_eq!(bar_percent(5.0, 5.0), 100.0);
        assert_eq!(bar_percent(2.5, 5.0), 50.0);
        assert_eq!(bar_percent(0.0, 5.0), 0.0);
    }

    #[test]
    fn test_bar_percent_degenerate_series() {
        assert_eq!(bar_percent(1.0, 0.0), 0.0);
        assert_eq!(bar_percent(f64::NAN, 5.0), 0.0);
        assert_eq!(bar_percent(-1.0, 5.0), 0.0);
    }

    #[test]
    fn test_series_max() {
        assert_eq!(series_max(&[]), 0.0);
        assert_eq!(series_max(&[entry("A", 3.0), entry("B", 7.5), entry("C", 1.0)]), 7.5);
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(4.5), "4.50");
        assert_eq!(format_value(1_250_000.0), "1,250,000");
        assert_eq!(format_value(950.0), "950");
        assert_eq!(format_value(0.0), "0");
        assert_eq!(format_value(f64::NAN), "-");
    }
}
