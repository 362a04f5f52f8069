use std::time::Instant;

use core::{
    ContourExtractor, FieldParams, HeightField2D, NoiseGenerator, NoiseOffset, Perlin2D,
    Simplex2D, utils::elevation_to_rgb,
};
use eframe::{App, Frame, NativeOptions, egui, run_native};
use egui::{Color32, Rect, Sense, Stroke, Vec2};

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
enum NoiseType {
    Perlin2D,
    Simplex2D,
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
enum RenderMode {
    Cells,    // every grid point as a hue-colored rectangle
    Contours, // isoline segments at the threshold elevation
}

struct ContourApp {
    // generation parameters
    params: FieldParams,
    threshold: f32,
    seed: u64,
    noise_type: NoiseType,

    // animation state: the only value carried across ticks
    offset: NoiseOffset,
    animate: bool,

    // display
    render_mode: RenderMode,
    noise: Box<dyn NoiseGenerator>,
    noise_key: (NoiseType, u64),
    status_message: String,
}

// The generator's own octave stack is fixed; the UI varies the field's
// sampling frequency instead, like the sketch's 0.1 coordinate step
fn build_noise(noise_type: NoiseType, seed: u64) -> Box<dyn NoiseGenerator> {
    match noise_type {
        NoiseType::Perlin2D => Box::new(Perlin2D::new(seed, 1.0, 0.5, 4)),
        NoiseType::Simplex2D => Box::new(Simplex2D::new(seed, 1.0, 0.5, 4)),
    }
}

impl Default for ContourApp {
    fn default() -> Self {
        let seed = 2025;
        let noise_type = NoiseType::Perlin2D;
        Self {
            params: FieldParams::default(),
            threshold: 5.0,
            seed,
            noise_type,
            offset: NoiseOffset::default(),
            animate: true,
            render_mode: RenderMode::Contours,
            noise: build_noise(noise_type, seed),
            noise_key: (noise_type, seed),
            status_message: String::new(),
        }
    }
}

impl App for ContourApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        egui::SidePanel::left("controls").show(ctx, |ui| {
            ui.heading("Terrain Contours");
            ui.separator();

            ui.label("Render Mode");
            egui::ComboBox::from_label("Style")
                .selected_text(format!("{:?}", self.render_mode))
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut self.render_mode, RenderMode::Cells, "Cells");
                    ui.selectable_value(&mut self.render_mode, RenderMode::Contours, "Contours");
                });

            ui.label("Noise Type");
            egui::ComboBox::from_label("Noise Algorithm")
                .selected_text(format!("{:?}", self.noise_type))
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut self.noise_type, NoiseType::Perlin2D, "Perlin2D");
                    ui.selectable_value(&mut self.noise_type, NoiseType::Simplex2D, "Simplex2D");
                });

            ui.label("Seed");
            ui.add(egui::DragValue::new(&mut self.seed).speed(1.0));

            ui.label("Cell Scale");
            ui.add(egui::Slider::new(&mut self.params.scale, 4.0..=40.0));

            ui.label("Edge Buffer");
            ui.add(egui::Slider::new(&mut self.params.buffer, 0.0..=0.45));

            ui.label("Noise Frequency");
            ui.add(egui::Slider::new(&mut self.params.frequency, 0.01..=0.5));

            ui.label("Animation Speed");
            ui.add(egui::Slider::new(&mut self.params.speed, 0.0..=0.05));

            if self.render_mode == RenderMode::Contours {
                ui.label("Contour Threshold");
                ui.add(egui::Slider::new(
                    &mut self.threshold,
                    self.params.elevation_min..=self.params.elevation_max,
                ));
            }

            ui.checkbox(&mut self.params.smoothing, "Neighbor-Rule Smoothing");
            if self.params.smoothing {
                ui.label("Smoothing Threshold");
                ui.add(egui::Slider::new(
                    &mut self.params.smooth_threshold,
                    self.params.elevation_min..=self.params.elevation_max,
                ));
                ui.label("Smoothing Delta");
                ui.add(egui::Slider::new(&mut self.params.smooth_delta, 0.0..=25.0));
            }

            ui.separator();
            ui.checkbox(&mut self.animate, "Animate");
            if ui.button("Reset Animation").clicked() {
                self.offset = NoiseOffset::default();
            }

            ui.separator();
            ui.label(&self.status_message);
        });

        // Changing seed or algorithm rebuilds the generator; everything
        // else takes effect on the next tick since every frame is a
        // full regeneration anyway
        if self.noise_key != (self.noise_type, self.seed) {
            self.noise = build_noise(self.noise_type, self.seed);
            self.noise_key = (self.noise_type, self.seed);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            let start = Instant::now();
            let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::hover());
            let canvas = response.rect;

            // The live panel size is the viewport: a resize just changes
            // the grid dimensions on this regeneration
            let field = HeightField2D {
                noise: self.noise.as_ref(),
                params: self.params,
            };
            let map = field.generate(canvas.width() as f64, canvas.height() as f64, self.offset);
            let rows = map.len();
            let cols = map.first().map_or(0, |row| row.len());

            // Center the trimmed grid in the canvas like the sketch does
            let scale = self.params.scale as f32;
            let origin = canvas.min
                + Vec2::new(
                    (canvas.width() - cols as f32 * scale) * 0.5,
                    (canvas.height() - rows as f32 * scale) * 0.5,
                );

            let mut segment_count = 0;
            match self.render_mode {
                RenderMode::Cells => {
                    for (y, row) in map.iter().enumerate() {
                        for (x, &elevation) in row.iter().enumerate() {
                            let [r, g, b] = elevation_to_rgb(
                                elevation,
                                self.params.elevation_min,
                                self.params.elevation_max,
                            );
                            let min = origin + Vec2::new(x as f32 * scale, y as f32 * scale);
                            painter.rect_filled(
                                Rect::from_min_size(min, Vec2::splat(scale)),
                                0.0,
                                Color32::from_rgb(r, g, b),
                            );
                        }
                    }
                }
                RenderMode::Contours => {
                    let segments = ContourExtractor {
                        threshold: self.threshold,
                    }
                    .extract(&map);
                    segment_count = segments.len();
                    let stroke = Stroke::new(0.5, Color32::WHITE);
                    for seg in &segments {
                        let a = origin + Vec2::new(seg.start.x * scale, seg.start.y * scale);
                        let b = origin + Vec2::new(seg.end.x * scale, seg.end.y * scale);
                        painter.line_segment([a, b], stroke);
                    }
                }
            }

            self.status_message = format!(
                "{}x{} grid, {} segments, {:.2} ms",
                cols,
                rows,
                segment_count,
                start.elapsed().as_secs_f32() * 1000.0
            );
        });

        // Advance the drift once per frame and keep the loop running
        if self.animate {
            self.offset = self.offset.advanced(self.params.speed);
            ctx.request_repaint();
        }
    }
}

fn main() {
    let opts = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };
    run_native(
        "Terrain Contours",
        opts,
        Box::new(|_cc| Ok(Box::new(ContourApp::default()))),
    )
    .unwrap();
}
