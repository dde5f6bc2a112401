use eframe::egui;

use crate::{
    catalog::{default_for, list_models, resolutions_for},
    models::Resolution,
};

pub struct ResolutionSelectorApp {
    pub model: &'static str,
    pub resolutions: Vec<String>,
    pub resolution: String,
    pub warning: Option<String>,
}

impl ResolutionSelectorApp {
    pub fn new() -> Self {
        let model = list_models()[0];
        let resolutions = resolutions_for(model);
        let resolution = default_for(model);

        Self {
            model,
            resolutions,
            resolution,
            warning: None,
        }
    }

    pub fn refresh_resolutions(&mut self) {
        let resolutions = resolutions_for(self.model);

        if resolutions.is_empty() {
            self.warning = Some(format!("No resolutions found for model {}", self.model));
            return;
        }
        self.warning = None;

        // Prefer the model's default; otherwise keep the current value if it
        // is still offered, else drop to the first entry.
        let default = default_for(self.model);
        if resolutions.contains(&default) {
            self.resolution = default;
        } else if !resolutions.contains(&self.resolution) {
            self.resolution = resolutions[0].clone();
        }

        self.resolutions = resolutions;
    }

    pub fn selected_dimensions(&self) -> Option<Resolution> {
        Resolution::parse(&self.resolution)
    }
}

impl eframe::App for ResolutionSelectorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame {
                inner_margin: egui::Margin::symmetric(20.0, 20.0),
                fill: ctx.style().visuals.panel_fill,
                ..Default::default()
            })
            .show(ctx, |ui| {
                // Model selection
                let prev_model = self.model;
                ui.horizontal(|ui| {
                    ui.label("Model:");
                    egui::ComboBox::from_id_source("model_combo")
                        .selected_text(self.model)
                        .show_ui(ui, |ui| {
                            for model in list_models() {
                                ui.selectable_value(&mut self.model, model, model);
                            }
                        });
                });
                if prev_model != self.model {
                    self.refresh_resolutions();
                }

                ui.separator();

                // Dependent resolution selection; monospace keeps the padded
                // aspect/orientation columns aligned.
                ui.horizontal(|ui| {
                    ui.label("Resolution:");
                    egui::ComboBox::from_id_source("resolution_combo")
                        .width(260.0)
                        .selected_text(egui::RichText::new(&self.resolution).monospace())
                        .show_ui(ui, |ui| {
                            for label in &self.resolutions {
                                ui.selectable_value(
                                    &mut self.resolution,
                                    label.clone(),
                                    egui::RichText::new(label).monospace(),
                                );
                            }
                        });
                });

                ui.separator();

                match self.selected_dimensions() {
                    Some(resolution) => {
                        ui.label(format!(
                            "Width: {}  Height: {}",
                            resolution.width, resolution.height
                        ));
                    }
                    None => {
                        ui.label("Width: --  Height: --");
                    }
                }

                if let Some(warning) = &self.warning {
                    ui.add_space(10.0);
                    ui.colored_label(egui::Color32::RED, warning);
                }
            });
    }
}
