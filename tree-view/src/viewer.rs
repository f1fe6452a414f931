//! Interactive ASCII tree viewer built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns the garden state
//! (trees, configuration, random source) and implements [`eframe::App`]
//! to render and control the growth through an egui UI.

use eframe::App;
use rand::rngs::StdRng;
use tree_core::{Garden, Variant, config::Config};

/// Main application state for the interactive viewer.
///
/// The typical per-frame update is:
/// 1. Handle UI interactions / input.
/// 2. If `running` is `true` and enough time has passed, call [`Viewer::step_once`].
/// 3. Render every tree side by side in a monospace font.
///
/// ### Fields
/// - `garden` - Trees currently growing.
/// - `cfg` - Sunlight, water and the planted variants.
/// - `rng` - Random source for growth, seeded from `cfg`.
///
/// - `running` - Whether the garden is currently auto-advancing.
///
/// - `step_interval` - Target time step between automatic growth ticks (seconds).
/// - `last_step_time` - Time stamp of the last tick (egui time).
/// - `last_step_dt` - Actual time delta between the last two ticks (for display only).
pub struct Viewer {
    garden: Garden,
    cfg: Config,

    rng: StdRng,

    running: bool,

    step_interval: f64,
    last_step_time: f64,
    last_step_dt: f64,
}

impl Viewer {
    /// Creates a viewer with one fresh tree per configured variant.
    pub fn new(cfg: Config) -> Self {
        let rng = cfg.rng();
        let garden = Garden::from_config(&cfg);

        Self {
            garden,
            cfg,
            rng,
            running: false,
            step_interval: 0.5,
            last_step_time: 0.0,
            last_step_dt: 0.0,
        }
    }

    /// Replants every tree in its initial state and stops auto-running.
    ///
    /// The configuration and random source are kept, so a reset garden
    /// continues the same random stream rather than replaying it.
    fn reset(&mut self) {
        self.garden = Garden::from_config(&self.cfg);
        self.running = false;
    }

    /// Removes every tree, leaving a blank canvas.
    fn clear(&mut self) {
        self.garden.clear();
        self.running = false;
    }

    /// Grows every tree by a single tick with the configured sunlight and water.
    fn step_once(&mut self) {
        self.garden.step(self.cfg.sunlight, self.cfg.water, &mut self.rng);
    }

    /// Plants or removes a variant and replants the garden.
    ///
    /// Planted variants are always kept in [`Variant::ALL`] order.
    fn set_variant(&mut self, variant: Variant, planted: bool) {
        let mut wanted: Vec<Variant> = self
            .cfg
            .variants
            .iter()
            .copied()
            .filter(|&v| v != variant)
            .collect();
        if planted {
            wanted.push(variant);
        }
        self.cfg.variants = Variant::ALL
            .into_iter()
            .filter(|v| wanted.contains(v))
            .collect();
        self.reset();
    }

    /// Helper to draw a labeled `u32` [`egui::DragValue`].
    fn labeled_drag_u32(
        ui: &mut egui::Ui,
        label: &str,
        value: &mut u32,
        range: std::ops::RangeInclusive<u32>,
        speed: f64,
    ) {
        ui.horizontal(|ui| {
            ui.label(label);
            ui.add(egui::DragValue::new(value).range(range).speed(speed));
        });
    }

    /// Builds the top panel UI (run controls, stepping, reset).
    fn ui_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui
                    .button(if self.running { "⏸ Pause" } else { "▶ Run" })
                    .clicked()
                {
                    self.running = !self.running;
                }

                ui.add(
                    egui::DragValue::new(&mut self.step_interval)
                        .prefix("dt target = ")
                        .range(0.05..=5.0)
                        .speed(0.01),
                );

                if ui.button("Step").clicked() {
                    let now = ctx.input(|i| i.time);
                    if self.last_step_time > 0.0 {
                        self.last_step_dt = now - self.last_step_time;
                    }
                    self.step_once();
                    self.last_step_time = now;
                }

                if ui.button("Reset").clicked() {
                    self.reset();
                }

                if ui.button("Clear").clicked() {
                    self.clear();
                }
            });
        });
    }

    /// Builds the bottom status bar (time step, tick count, tree count).
    fn ui_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("dt target = {:.3} s", self.step_interval));
                ui.label(format!("dt last = {:.3} s", self.last_step_dt));
                ui.separator();
                ui.label(format!("ticks = {}", self.garden.ticks()));
                ui.label(format!("trees = {}", self.garden.trees().len()));
            });
        });
    }

    /// Builds the right-hand configuration panel for growth conditions.
    fn ui_config_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::right("config_panel")
            .resizable(true)
            .default_width(200.0)
            .show(ctx, |ui| {
                ui.heading("Config");

                ui.separator();
                ui.label("Conditions");
                Self::labeled_drag_u32(ui, "sunlight:", &mut self.cfg.sunlight, 0..=50, 0.2);
                Self::labeled_drag_u32(ui, "water:", &mut self.cfg.water, 0..=50, 0.2);

                ui.separator();
                ui.label("Planted");
                for variant in Variant::ALL {
                    let mut planted = self.cfg.variants.contains(&variant);
                    if ui.checkbox(&mut planted, variant.label()).changed() {
                        self.set_variant(variant, planted);
                    }
                }

                ui.separator();
                if ui.button("Reset cfg to default").clicked() {
                    self.cfg = Config {
                        seed: self.cfg.seed,
                        ..Config::default()
                    };
                    self.reset();
                }
            });
    }

    /// Builds the central panel where every tree is drawn side by side.
    fn ui_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::both().show(ui, |ui| {
                ui.horizontal_top(|ui| {
                    for tree in self.garden.trees() {
                        ui.vertical(|ui| {
                            ui.strong(tree.variant().label());
                            ui.label(egui::RichText::new(tree.render()).monospace());
                        });
                        ui.separator();
                    }
                });
            });

            // Auto-run growth if requested.
            if self.running {
                let now = ctx.input(|i| i.time);
                let elapsed = now - self.last_step_time;
                if elapsed >= self.step_interval {
                    if self.last_step_time > 0.0 {
                        self.last_step_dt = elapsed;
                    }
                    self.step_once();
                    self.last_step_time = now;
                }

                ctx.request_repaint();
            }
        });
    }
}

impl App for Viewer {
    /// eframe callback that builds all UI panels for each frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui_top_panel(ctx);
        self.ui_status_bar(ctx);
        self.ui_config_panel(ctx);
        self.ui_central_panel(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tree_core::Tree;

    fn seeded() -> Viewer {
        Viewer::new(Config {
            seed: Some(31),
            ..Config::default()
        })
    }

    #[test]
    fn new_plants_one_tree_per_variant() {
        let viewer = seeded();
        assert_eq!(viewer.garden.trees().len(), Variant::ALL.len());
        assert_eq!(viewer.garden.ticks(), 0);
        assert!(!viewer.running);
    }

    #[test]
    fn step_once_advances_the_garden() {
        let mut viewer = seeded();
        viewer.cfg.sunlight = 0;
        viewer.cfg.water = 0;

        viewer.step_once();

        assert_eq!(viewer.garden.ticks(), 1);
        // Without water no trunk can grow.
        assert!(viewer.garden.trees().iter().all(|t| t.trunk_height() == 1));
    }

    #[test]
    fn reset_restores_basic_state() {
        let mut viewer = seeded();
        for _ in 0..3 {
            viewer.step_once();
        }
        viewer.running = true;

        viewer.reset();

        assert_eq!(viewer.garden, Garden::from_config(&viewer.cfg));
        assert!(!viewer.running);
    }

    #[test]
    fn clear_removes_all_content() {
        let mut viewer = seeded();
        assert!(!viewer.garden.is_empty());

        viewer.clear();

        assert!(viewer.garden.is_empty());
        assert_eq!(viewer.garden.ticks(), 0);
    }

    #[test]
    fn set_variant_keeps_canonical_order() {
        let mut viewer = seeded();
        viewer.set_variant(Variant::Even, false);
        viewer.set_variant(Variant::Pine, false);
        viewer.set_variant(Variant::Even, true);

        let planted: Vec<Variant> = viewer.garden.trees().iter().map(Tree::variant).collect();
        assert_eq!(
            planted,
            vec![
                Variant::Plain,
                Variant::Even,
                Variant::UpsideDown,
                Variant::Wide,
                Variant::Quick,
                Variant::Fruit,
            ]
        );
        assert_eq!(viewer.cfg.variants, planted);
    }
}
