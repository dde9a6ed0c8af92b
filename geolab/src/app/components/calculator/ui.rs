use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Sense, Stroke, Vec2};
use figure_calc::format::format_result;
use figure_calc::{REGISTRY, UNIT};
use svg_export::{Anchor, Shape, Style};

use crate::app::events::{SelectFigure, SetParameter, UpdateParameter};
use crate::app::EguiApp;
use app_core::event::EventQueue;

impl super::Calculator {
    pub fn render(
        &mut self,
        event_queue: &mut EventQueue<EguiApp>,
        ui: &mut egui::Ui,
        ctx: &egui::Context,
    ) {
        let active = self.active();

        // Figure selector.
        ui.horizontal(|ui| {
            for kind in REGISTRY {
                if ui.selectable_label(kind == active, kind.name()).clicked() {
                    event_queue.queue_event(Box::new(SelectFigure::new(kind.key().to_string())));
                }
            }
        });
        ui.separator();

        egui::Grid::new("parameter_grid")
            .num_columns(3)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                for def in active.parameters() {
                    ui.label(def.label);

                    let mut value = self.state.value(def.key).unwrap_or(def.min);
                    let slider = egui::Slider::new(&mut value, def.min..=def.max)
                        .step_by(def.step)
                        .show_value(false);
                    if ui.add(slider).changed() {
                        event_queue.queue_event(Box::new(SetParameter::new(
                            def.key.to_string(),
                            value,
                        )));
                    }

                    ui.horizontal(|ui| {
                        let response = ui.add(
                            egui::TextEdit::singleline(self.input_buffer_mut(def.key))
                                .desired_width(64.0),
                        );
                        if response.changed() {
                            self.mark_input_edited(def.key);
                        }
                        if response.lost_focus() && self.take_input_edit(def.key) {
                            event_queue.queue_event(Box::new(UpdateParameter::new(
                                def.key.to_string(),
                                self.input_text(def.key).to_string(),
                            )));
                        }
                        ui.label(def.unit);
                    });
                    ui.end_row();
                }
            });
        ui.separator();

        ui.horizontal_top(|ui| {
            ui.vertical(|ui| self.render_results(ui));
            ui.add_space(24.0);
            ui.vertical(|ui| {
                self.render_diagram(ui);
                if ui.button("SVG kopieren").clicked() {
                    log::debug!("copying diagram markup to clipboard");
                    ctx.copy_text(self.diagram_markup());
                }
            });
        });
    }

    fn render_results(&self, ui: &mut egui::Ui) {
        let result = self.state.result();
        ui.heading(self.active().name());
        for step in &result.steps {
            ui.monospace(step);
        }
        ui.add_space(6.0);
        for extra in &result.extras {
            ui.label(format!("{}: {} {UNIT}", extra.label, format_result(extra.value)));
        }
        ui.strong(format!(
            "Flächeninhalt A: {} {UNIT}²",
            format_result(result.area)
        ));
        ui.strong(format!("Umfang u: {} {UNIT}", format_result(result.perimeter)));
    }

    fn render_diagram(&self, ui: &mut egui::Ui) {
        let diagram = self.diagram();
        let size = Vec2::new(diagram.width as f32, diagram.height as f32);
        let (response, painter) = ui.allocate_painter(size, Sense::hover());
        let origin = response.rect.min;

        painter.rect_filled(response.rect, 4.0, Color32::WHITE);
        for shape in diagram.shapes() {
            paint_shape(&painter, origin, shape);
        }
        if !diagram.label.is_empty() {
            response.on_hover_text(diagram.label.clone());
        }
    }
}

fn to_pos(origin: Pos2, [x, y]: [f64; 2]) -> Pos2 {
    origin + Vec2::new(x as f32, y as f32)
}

fn to_color(hex: &Option<String>) -> Color32 {
    match hex {
        Some(hex) => Color32::from_hex(hex).unwrap_or_else(|_| {
            log::warn!("invalid color '{hex}' in diagram");
            Color32::GRAY
        }),
        None => Color32::TRANSPARENT,
    }
}

fn to_stroke(style: &Style) -> Stroke {
    match style.stroke {
        Some(_) => Stroke::new(style.stroke_width as f32, to_color(&style.stroke)),
        None => Stroke::NONE,
    }
}

fn paint_shape(painter: &Painter, origin: Pos2, shape: &Shape) {
    match shape {
        Shape::Rect {
            x,
            y,
            width,
            height,
            style,
        } => {
            let rect = Rect::from_min_size(
                to_pos(origin, [*x, *y]),
                Vec2::new(*width as f32, *height as f32),
            );
            painter.rect(rect, 0.0, to_color(&style.fill), to_stroke(style));
        }
        Shape::Polygon { points, style } => {
            let points = points.iter().map(|p| to_pos(origin, *p)).collect();
            painter.add(egui::Shape::convex_polygon(
                points,
                to_color(&style.fill),
                to_stroke(style),
            ));
        }
        Shape::Line { from, to, style } => {
            painter.line_segment([to_pos(origin, *from), to_pos(origin, *to)], to_stroke(style));
        }
        Shape::Circle {
            center,
            radius,
            style,
        } => {
            painter.circle(
                to_pos(origin, *center),
                *radius as f32,
                to_color(&style.fill),
                to_stroke(style),
            );
        }
        Shape::Text {
            pos,
            text,
            anchor,
            style,
        } => {
            let align = match anchor {
                Anchor::Start => Align2::LEFT_BOTTOM,
                Anchor::Middle => Align2::CENTER_BOTTOM,
                Anchor::End => Align2::RIGHT_BOTTOM,
            };
            painter.text(
                to_pos(origin, *pos),
                align,
                text,
                FontId::proportional(style.font_size as f32),
                to_color(&style.fill),
            );
        }
    }
}
