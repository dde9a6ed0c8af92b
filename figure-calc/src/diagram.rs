use svg_export::{Anchor, Diagram, Shape, Style};

use crate::figure::{FigureKind, Params, UNIT};
use crate::format::{format_input, format_result};

const FILL: &str = "#dbeafe";
const OUTLINE: &str = "#2563eb";
const TEXT: &str = "#0f172a";
const HELPER: &str = "#64748b";
const FONT_SIZE: f64 = 13.0;

/// Viewport sizes and scaling constants of the figure diagrams.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DiagramSettings {
    /// Viewport of the rectangle and triangle diagrams.
    pub polygon_view: [f64; 2],
    /// Top left corner of the area polygons are fitted into.
    pub drawing_origin: [f64; 2],
    pub drawing_area: [f64; 2],
    pub circle_view: [f64; 2],
    pub circle_px_per_unit: f64,
    pub circle_max_radius: f64,
}

impl Default for DiagramSettings {
    fn default() -> Self {
        Self {
            polygon_view: [280.0, 180.0],
            drawing_origin: [60.0, 20.0],
            drawing_area: [160.0, 120.0],
            circle_view: [240.0, 220.0],
            circle_px_per_unit: 18.0,
            circle_max_radius: 90.0,
        }
    }
}

impl DiagramSettings {
    /// Uniform scale fitting a `width` x `height` figure into the drawing
    /// area, `None` for degenerate sizes.
    fn fit(&self, width: f64, height: f64) -> Option<f64> {
        if !(is_length(width) && is_length(height)) {
            return None;
        }
        let [area_w, area_h] = self.drawing_area;
        let scale = (area_w / width).min(area_h / height);
        (scale.is_finite() && scale > 0.0).then_some(scale)
    }

    /// Top left corner for a `width` x `height` box centered in the drawing
    /// area.
    fn centered(&self, width: f64, height: f64) -> [f64; 2] {
        let [ox, oy] = self.drawing_origin;
        let [area_w, area_h] = self.drawing_area;
        [ox + (area_w - width) / 2.0, oy + (area_h - height) / 2.0]
    }
}

impl FigureKind {
    pub fn diagram(&self, params: &Params, settings: &DiagramSettings) -> Diagram {
        match self {
            FigureKind::Rectangle => rectangle(params.get("a"), params.get("b"), settings),
            FigureKind::RightTriangle => triangle(params.get("a"), params.get("h"), settings),
            FigureKind::Circle => circle(params.get("r"), settings),
        }
    }

    /// The diagram as SVG markup.
    pub fn diagram_markup(&self, params: &Params, settings: &DiagramSettings) -> String {
        self.diagram(params, settings).render()
    }
}

fn is_length(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn label(pos: [f64; 2], anchor: Anchor, text: String) -> Shape {
    Shape::Text {
        pos,
        text,
        anchor,
        style: Style::text(TEXT, FONT_SIZE),
    }
}

fn length(name: &str, value: f64) -> String {
    format!("{name} = {} {UNIT}", format_input(value))
}

fn placeholder(mut diagram: Diagram) -> Diagram {
    let (w, h) = (diagram.width, diagram.height);
    diagram.add(label(
        [w / 2.0, h / 2.0],
        Anchor::Middle,
        crate::format::PLACEHOLDER.to_string(),
    ));
    diagram
}

fn rectangle(a: f64, b: f64, settings: &DiagramSettings) -> Diagram {
    let [view_w, view_h] = settings.polygon_view;
    let diagram = Diagram::new(view_w, view_h).with_label(&format!(
        "Rechteck mit {} und {}",
        length("a", a),
        length("b", b)
    ));
    let Some(scale) = settings.fit(a, b) else {
        return placeholder(diagram);
    };
    let (w, h) = (a * scale, b * scale);
    let [x, y] = settings.centered(w, h);

    let mut diagram = diagram;
    diagram.add(Shape::Rect {
        x,
        y,
        width: w,
        height: h,
        style: Style::stroke(OUTLINE, 2.0).with_fill(FILL),
    });
    diagram.add(label([x + w / 2.0, y + h + 18.0], Anchor::Middle, length("a", a)));
    diagram.add(label([x + w + 8.0, y + h / 2.0 + 5.0], Anchor::Start, length("b", b)));
    diagram
}

fn triangle(a: f64, h: f64, settings: &DiagramSettings) -> Diagram {
    let [view_w, view_h] = settings.polygon_view;
    let diagram = Diagram::new(view_w, view_h).with_label(&format!(
        "Rechtwinkliges Dreieck mit {} und {}",
        length("a", a),
        length("h", h)
    ));
    let Some(scale) = settings.fit(a, h) else {
        return placeholder(diagram);
    };
    let (w, hh) = (a * scale, h * scale);
    let [x0, y0] = settings.centered(w, hh);
    let corner = [x0, y0 + hh];

    let mut diagram = diagram;
    diagram.add(Shape::Polygon {
        points: vec![corner, [x0 + w, y0 + hh], [x0, y0]],
        style: Style::stroke(OUTLINE, 2.0).with_fill(FILL),
    });
    // right angle marker
    let m = 10.0_f64.min(w / 3.0).min(hh / 3.0);
    diagram.add(Shape::Rect {
        x: corner[0],
        y: corner[1] - m,
        width: m,
        height: m,
        style: Style::stroke(HELPER, 1.0),
    });
    diagram.add(label(
        [x0 + w / 2.0, y0 + hh + 18.0],
        Anchor::Middle,
        length("a", a),
    ));
    diagram.add(label(
        [x0 - 8.0, y0 + hh / 2.0 + 5.0],
        Anchor::End,
        length("h", h),
    ));
    diagram.add(label(
        [x0 + w / 2.0 + 8.0, y0 + hh / 2.0 - 6.0],
        Anchor::Start,
        format!("c = {} {UNIT}", format_result(a.hypot(h))),
    ));
    diagram
}

fn circle(r: f64, settings: &DiagramSettings) -> Diagram {
    let [view_w, view_h] = settings.circle_view;
    let diagram =
        Diagram::new(view_w, view_h).with_label(&format!("Kreis mit {}", length("r", r)));
    if !is_length(r) {
        return placeholder(diagram);
    }
    let radius = (r * settings.circle_px_per_unit).min(settings.circle_max_radius);
    let center = [view_w / 2.0, view_h / 2.0];

    let mut diagram = diagram;
    diagram.add(Shape::Circle {
        center,
        radius,
        style: Style::stroke(OUTLINE, 2.0).with_fill(FILL),
    });
    diagram.add(Shape::Line {
        from: center,
        to: [center[0] + radius, center[1]],
        style: Style::stroke(HELPER, 1.5),
    });
    diagram.add(Shape::Circle {
        center,
        radius: 3.0,
        style: Style::stroke(TEXT, 1.0).with_fill(TEXT),
    });
    diagram.add(label(
        [center[0] + radius / 2.0, center[1] - 8.0],
        Anchor::Middle,
        length("r", r),
    ));
    diagram
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn texts(diagram: &Diagram) -> Vec<String> {
        diagram
            .shapes()
            .iter()
            .filter_map(|shape| match shape {
                Shape::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_rectangle_fits_drawing_area() {
        let settings = DiagramSettings::default();
        let params = Params::default().with("a", 6.0).with("b", 4.0);
        let diagram = FigureKind::Rectangle.diagram(&params, &settings);

        let Shape::Rect {
            x,
            y,
            width,
            height,
            ..
        } = &diagram.shapes()[0]
        else {
            panic!("first shape should be the rectangle");
        };
        // width limits the scale: 160 / 6
        assert_relative_eq!(*width, 160.0);
        assert_relative_eq!(*width / *height, 1.5);
        assert_relative_eq!(*x, 60.0);
        assert!(*y >= 20.0 && *y + *height <= 140.0);
        assert_eq!(texts(&diagram), ["a = 6 cm", "b = 4 cm"]);
    }

    #[test]
    fn test_tall_rectangle_is_limited_by_height() {
        let settings = DiagramSettings::default();
        let params = Params::default().with("a", 2.0).with("b", 12.0);
        let diagram = FigureKind::Rectangle.diagram(&params, &settings);
        let Shape::Rect { width, height, .. } = &diagram.shapes()[0] else {
            panic!("first shape should be the rectangle");
        };
        assert_relative_eq!(*height, 120.0);
        assert_relative_eq!(*width, 20.0);
    }

    #[test]
    fn test_triangle_labels() {
        let settings = DiagramSettings::default();
        let params = Params::default().with("a", 6.0).with("h", 3.0);
        let diagram = FigureKind::RightTriangle.diagram(&params, &settings);
        assert_eq!(texts(&diagram), ["a = 6 cm", "h = 3 cm", "c = 6,71 cm"]);

        let Shape::Polygon { points, .. } = &diagram.shapes()[0] else {
            panic!("first shape should be the triangle");
        };
        let base = points[1][0] - points[0][0];
        let height = points[0][1] - points[2][1];
        assert_relative_eq!(base / height, 2.0);
    }

    #[test]
    fn test_circle_radius_is_capped() {
        let settings = DiagramSettings::default();
        let radius_for = |r: f64| {
            let diagram = FigureKind::Circle.diagram(&Params::default().with("r", r), &settings);
            match &diagram.shapes()[0] {
                Shape::Circle { radius, .. } => *radius,
                _ => panic!("first shape should be the circle"),
            }
        };
        assert_relative_eq!(radius_for(3.0), 54.0);
        assert_relative_eq!(radius_for(5.0), 90.0);
        assert_relative_eq!(radius_for(15.0), 90.0);
    }

    #[test]
    fn test_markup_contains_labels() {
        let settings = DiagramSettings::default();
        let markup = FigureKind::Circle
            .diagram_markup(&Params::default().with("r", 2.5), &settings);
        assert!(markup.starts_with("<svg width=\"240\" height=\"220\""));
        assert!(markup.contains("aria-label=\"Kreis mit r = 2,5 cm\""));
        assert!(markup.contains(">r = 2,5 cm</text>"));
    }

    #[test]
    fn test_degenerate_input_renders_placeholder() {
        let settings = DiagramSettings::default();
        let diagram = FigureKind::Rectangle.diagram(&Params::default(), &settings);
        assert_eq!(texts(&diagram), [crate::format::PLACEHOLDER]);

        let params = Params::default().with("r", f64::NAN);
        let diagram = FigureKind::Circle.diagram(&params, &settings);
        assert_eq!(texts(&diagram), [crate::format::PLACEHOLDER]);
    }
}
