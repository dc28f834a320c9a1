use crate::application::submission::PredictionOutcome;
use crate::interfaces::design_system::DesignSystem;
use egui::Ui;
use egui_plot::{Bar, BarChart, Legend, Plot};

const REGION_LABELS: [&str; 5] = ["North America", "Europe", "Japan", "Other", "Predicted Global"];

/// Bar comparison of the four regional inputs against the predicted global
/// figure.
pub fn render_sales_chart(ui: &mut Ui, outcome: &PredictionOutcome) {
    let regional = [
        outcome.request.na_sales,
        outcome.request.eu_sales,
        outcome.request.jp_sales,
        outcome.request.other_sales,
    ];

    let regional_bars: Vec<Bar> = regional
        .iter()
        .enumerate()
        .map(|(i, v)| {
            Bar::new(i as f64, *v)
                .name(REGION_LABELS[i])
                .width(0.6)
                .fill(DesignSystem::ACCENT_PRIMARY)
        })
        .collect();

    let predicted_bars = vec![
        Bar::new(4.0, outcome.prediction)
            .name(REGION_LABELS[4])
            .width(0.6)
            .fill(DesignSystem::SUCCESS),
    ];

    Plot::new("sales_by_region")
        .height(280.0)
        .show_grid([false, true])
        .legend(Legend::default())
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .x_axis_formatter(|mark, _range| {
            let rounded = mark.value.round();
            if (mark.value - rounded).abs() < 1e-6 && (0.0..=4.0).contains(&rounded) {
                REGION_LABELS[rounded as usize].to_string()
            } else {
                String::new()
            }
        })
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new("Regional (input)", regional_bars));
            plot_ui.bar_chart(BarChart::new("Predicted Global", predicted_bars));
        });
}
