use linechart::config::{DisplayMode, LineChartStyle};
use linechart::data::{ChartData, ChartDataPoint};
use linechart::labels::{format_value, main_label, secondary_label, LabelText};

fn weekly() -> ChartData {
    ChartData::new(vec![
        ChartDataPoint::new(12.5).with_label("Mon"),
        ChartDataPoint::new(1234.567),
        ChartDataPoint::new(-3.0).with_label("Wed"),
    ])
}

#[test]
fn default_mode_formats_value_with_affixes() {
    let style = LineChartStyle {
        prefix: Some("$".to_string()),
        suffix: Some(" USD".to_string()),
        ..Default::default()
    };
    assert_eq!(main_label(&weekly(), &style, 0).as_deref(), Some("$12.50 USD"));
    assert_eq!(secondary_label(&weekly(), &style, 0).as_deref(), Some("Mon"));
}

#[test]
fn precision_controls_fraction_digits() {
    let style = LineChartStyle {
        precision: 1,
        ..Default::default()
    };
    assert_eq!(main_label(&weekly(), &style, 1).as_deref(), Some("1234.6"));
    assert_eq!(format_value(1234.567, 0), "1235");
}

#[test]
fn missing_label_gives_no_secondary_line() {
    let style = LineChartStyle::default();
    let text = LabelText::for_index(&weekly(), &style, 1);
    assert_eq!(text.main.as_deref(), Some("1234.57"));
    assert_eq!(text.secondary, None);
}

#[test]
fn no_values_mode_shows_label_only() {
    let style = LineChartStyle {
        display_mode: DisplayMode::NoValues,
        prefix: Some("$".to_string()),
        ..Default::default()
    };
    let text = LabelText::for_index(&weekly(), &style, 2);
    assert_eq!(text.main.as_deref(), Some("Wed"));
    assert_eq!(text.secondary, None);
    assert_eq!(main_label(&weekly(), &style, 1), None);
}

#[test]
fn out_of_range_index_omits_text() {
    for mode in [DisplayMode::Default, DisplayMode::NoValues] {
        let style = LineChartStyle {
            display_mode: mode,
            ..Default::default()
        };
        assert_eq!(LabelText::for_index(&weekly(), &style, 3), LabelText::default());
        assert_eq!(LabelText::for_index(&ChartData::default(), &style, 0), LabelText::default());
    }
}
