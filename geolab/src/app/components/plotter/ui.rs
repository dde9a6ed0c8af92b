use egui::{Align2, Color32, FontId, Painter, Pos2, Sense, Stroke, Vec2};
use plane_plotter::{Coord, PlotterMode, Rgba, SceneItem};

use crate::app::events::{CanvasClicked, ResetPlotter, SetPlotterMode};
use crate::app::EguiApp;
use app_core::event::EventQueue;

impl super::Plotter {
    pub fn render(&mut self, event_queue: &mut EventQueue<EguiApp>, ui: &mut egui::Ui) {
        let mode = self.state.mode();

        ui.horizontal(|ui| {
            if ui
                .selectable_label(mode == PlotterMode::Point, "Punkt setzen")
                .clicked()
            {
                event_queue.queue_event(Box::new(SetPlotterMode::new(PlotterMode::Point)));
            }
            if ui
                .selectable_label(mode == PlotterMode::Segment, "Strecke messen")
                .clicked()
            {
                event_queue.queue_event(Box::new(SetPlotterMode::new(PlotterMode::Segment)));
            }
            ui.separator();
            if ui.button("Zurücksetzen").clicked() {
                event_queue.queue_event(Box::new(ResetPlotter::new()));
            }
        });

        ui.label(self.state.status().to_string());
        ui.add_space(4.0);

        let settings = self.state.settings();
        let size = Vec2::new(settings.width as f32, settings.height as f32);
        let (response, painter) = ui.allocate_painter(size, Sense::click());
        let origin = response.rect.min;

        painter.rect_filled(response.rect, 4.0, Color32::WHITE);
        for item in self.state.scene() {
            paint_item(&painter, origin, item);
        }

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let rel = pos - origin;
                log::debug!("canvas clicked at ({}, {})", rel.x, rel.y);
                event_queue.queue_event(Box::new(CanvasClicked::new(rel.x as f64, rel.y as f64)));
            }
        }

        ui.add_space(8.0);
        ui.columns(2, |columns| {
            columns[0].strong("Punkte");
            for entry in self.state.point_list() {
                columns[0].label(entry);
            }
            columns[1].strong("Strecken");
            for entry in self.state.segment_list() {
                columns[1].label(entry);
            }
        });
    }
}

fn to_pos(origin: Pos2, coord: Coord) -> Pos2 {
    origin + Vec2::new(coord.x as f32, coord.y as f32)
}

fn to_color(Rgba(r, g, b, a): Rgba) -> Color32 {
    Color32::from_rgba_unmultiplied(r, g, b, a)
}

fn paint_item(painter: &Painter, origin: Pos2, item: SceneItem) {
    match item {
        SceneItem::Line {
            from,
            to,
            color,
            width,
        } => {
            painter.line_segment(
                [to_pos(origin, from), to_pos(origin, to)],
                Stroke::new(width as f32, to_color(color)),
            );
        }
        SceneItem::Circle {
            center,
            radius,
            fill,
            stroke,
            stroke_width,
        } => {
            painter.circle(
                to_pos(origin, center),
                radius as f32,
                to_color(fill),
                Stroke::new(stroke_width as f32, to_color(stroke)),
            );
        }
        SceneItem::Text {
            pos,
            text,
            centered,
            color,
            size,
        } => {
            let anchor = if centered {
                Align2::CENTER_BOTTOM
            } else {
                Align2::LEFT_BOTTOM
            };
            painter.text(
                to_pos(origin, pos),
                anchor,
                text,
                FontId::proportional(size as f32),
                to_color(color),
            );
        }
    }
}
