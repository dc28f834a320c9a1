use crate::domain::catalog::{
    self, Genre, Platform, Publisher, EU_SALES_MAX, JP_SALES_MAX, NA_SALES_MAX, OTHER_SALES_MAX,
};
use crate::domain::columns;
use crate::domain::request::PredictionRequest;
use crate::interfaces::app::SalesApp;
use crate::interfaces::components::{banner, charts};
use crate::interfaces::design_system::DesignSystem;
use chrono::Utc;
use eframe::egui;

impl eframe::App for SalesApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(DesignSystem::theme());

        // Drain logs and the in-flight submission before painting
        self.poll();

        // --- Top status bar ---
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("🎮 Video Game Global Sales Prediction");
                ui.separator();
                ui.label(
                    egui::RichText::new(format!("Model: {}", self.predictor_label()))
                        .color(DesignSystem::TEXT_SECONDARY)
                        .small(),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if self.in_flight() {
                        ui.label(
                            egui::RichText::new("● PREDICTING")
                                .color(DesignSystem::WARNING)
                                .small(),
                        );
                    } else {
                        ui.label(
                            egui::RichText::new("● READY")
                                .color(DesignSystem::SUCCESS)
                                .small(),
                        );
                    }
                    ui.label(
                        egui::RichText::new(format!("UTC {}", Utc::now().format("%H:%M:%S")))
                            .color(DesignSystem::TEXT_MUTED)
                            .small(),
                    );
                });
            });
        });

        // --- Left sidebar: input form ---
        egui::SidePanel::left("input_panel")
            .default_width(330.0)
            .min_width(280.0)
            .resizable(true)
            .show(ctx, |ui| {
                ui.add_space(DesignSystem::SPACING_SMALL);
                ui.heading("Input Features");
                ui.separator();
                ui.add_space(DesignSystem::SPACING_SMALL);

                self.render_form(ui);

                ui.add_space(DesignSystem::SPACING_MEDIUM);

                let button = egui::Button::new(
                    egui::RichText::new("Predict Global Sales")
                        .color(DesignSystem::TEXT_PRIMARY)
                        .strong(),
                )
                .fill(DesignSystem::ACCENT_PRIMARY)
                .min_size(egui::vec2(ui.available_width(), 32.0));

                if ui.add_enabled(!self.in_flight(), button).clicked() {
                    self.submit();
                }

                ui.add_space(DesignSystem::SPACING_MEDIUM);
                ui.separator();
                ui.label(egui::RichText::new("About").strong().small());
                ui.label(
                    egui::RichText::new(
                        "Predicts global video game sales from regional sales and game \
                         information. The model was trained on historical sales data.",
                    )
                    .color(DesignSystem::TEXT_MUTED)
                    .small(),
                );
            });

        // --- Bottom panel: log feed ---
        egui::TopBottomPanel::bottom("log_panel")
            .resizable(true)
            .default_height(120.0)
            .show(ctx, |ui| {
                ui.label(egui::RichText::new("Logs").strong().small());
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        for line in &self.log_feed {
                            let color = if line.contains("ERROR") {
                                DesignSystem::DANGER
                            } else if line.contains("WARN") {
                                DesignSystem::WARNING
                            } else {
                                DesignSystem::TEXT_SECONDARY
                            };
                            ui.label(egui::RichText::new(line).color(color).small());
                        }
                    });
            });

        // --- Central panel: result ---
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Prediction");
            ui.add_space(DesignSystem::SPACING_SMALL);

            if self.in_flight() {
                ui.horizontal(|ui| {
                    ui.add(egui::Spinner::new().color(DesignSystem::ACCENT_PRIMARY));
                    ui.label("Calculating prediction...");
                });
                ui.add_space(DesignSystem::SPACING_SMALL);
            }

            match &self.outcome {
                Some(Ok(outcome)) => {
                    DesignSystem::card_frame().show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        render_input_record(ui, &outcome.request);
                    });
                    ui.add_space(DesignSystem::SPACING_SMALL);

                    banner::success(
                        ui,
                        &format!(
                            "The predicted global sales is: {:.2} million units",
                            outcome.prediction
                        ),
                    );
                    ui.add_space(DesignSystem::SPACING_SMALL);
                    banner::info(
                        ui,
                        &format!(
                            "Sum of regional sales: {:.2} million units",
                            outcome.regional_sum
                        ),
                    );

                    ui.add_space(DesignSystem::SPACING_MEDIUM);
                    ui.label(egui::RichText::new("Sales by Region").strong());
                    ui.add_space(DesignSystem::SPACING_SMALL);
                    charts::render_sales_chart(ui, outcome);
                }
                Some(Err(e)) => {
                    banner::error(ui, &format!("An error occurred: {}", e));
                }
                None => {
                    if !self.in_flight() {
                        ui.label(
                            egui::RichText::new(
                                "Fill in the features on the left and press Predict Global Sales.",
                            )
                            .color(DesignSystem::TEXT_MUTED),
                        );
                    }
                }
            }
        });

        // Keep polling the worker and the log channel even without input
        ctx.request_repaint();
    }
}

impl SalesApp {
    fn render_form(&mut self, ui: &mut egui::Ui) {
        ui.label("Game Name");
        ui.text_edit_singleline(&mut self.name);
        ui.add_space(DesignSystem::SPACING_SMALL);

        egui::ComboBox::from_label("Platform")
            .selected_text(self.platform.to_string())
            .show_ui(ui, |ui| {
                for p in Platform::ALL {
                    ui.selectable_value(&mut self.platform, p, p.to_string());
                }
            });
        egui::ComboBox::from_label("Genre")
            .selected_text(self.genre.to_string())
            .show_ui(ui, |ui| {
                for g in Genre::ALL {
                    ui.selectable_value(&mut self.genre, g, g.to_string());
                }
            });
        egui::ComboBox::from_label("Publisher")
            .selected_text(self.publisher.to_string())
            .show_ui(ui, |ui| {
                for p in Publisher::ALL {
                    ui.selectable_value(&mut self.publisher, p, p.to_string());
                }
            });

        ui.add_space(DesignSystem::SPACING_SMALL);
        ui.separator();
        ui.add_space(DesignSystem::SPACING_SMALL);

        ui.spacing_mut().slider_width = 190.0;

        ui.label("Release Year");
        ui.add(egui::Slider::new(
            &mut self.year,
            catalog::YEAR_MIN..=catalog::YEAR_MAX,
        ));
        ui.add_space(DesignSystem::SPACING_SMALL);

        ui.label("North America Sales (millions)");
        ui.add(
            egui::Slider::new(&mut self.na_sales, 0.0..=NA_SALES_MAX)
                .step_by(catalog::SALES_STEP)
                .fixed_decimals(1),
        );
        ui.label("Europe Sales (millions)");
        ui.add(
            egui::Slider::new(&mut self.eu_sales, 0.0..=EU_SALES_MAX)
                .step_by(catalog::SALES_STEP)
                .fixed_decimals(1),
        );
        ui.label("Japan Sales (millions)");
        ui.add(
            egui::Slider::new(&mut self.jp_sales, 0.0..=JP_SALES_MAX)
                .step_by(catalog::SALES_STEP)
                .fixed_decimals(1),
        );
        ui.label("Other Regions Sales (millions)");
        ui.add(
            egui::Slider::new(&mut self.other_sales, 0.0..=OTHER_SALES_MAX)
                .step_by(catalog::SALES_STEP)
                .fixed_decimals(1),
        );
    }
}

/// The echoed input record, one header row and one value row in the fixed
/// column order.
fn render_input_record(ui: &mut egui::Ui, request: &PredictionRequest) {
    ui.label(
        egui::RichText::new("Input Data")
            .strong()
            .color(DesignSystem::TEXT_SECONDARY),
    );
    ui.add_space(DesignSystem::SPACING_SMALL);

    egui::ScrollArea::horizontal().show(ui, |ui| {
        egui::Grid::new("input_record")
            .striped(true)
            .min_col_width(64.0)
            .show(ui, |ui| {
                for name in columns::COLUMN_NAMES {
                    ui.label(egui::RichText::new(*name).strong().small());
                }
                ui.end_row();

                for value in columns::request_to_row(request) {
                    ui.label(value);
                }
                ui.end_row();
            });
    });
}
