//! A small scene description for labeled diagrams.
//!
//! A `Diagram` is a fixed-size viewport holding primitive shapes in viewport
//! coordinates (origin top left, y pointing down). It can be rendered to SVG
//! markup or walked shape by shape by any other painter.

use crate::svg::{self, Params, Tag};

/// Horizontal alignment of a text label relative to its anchor point. The
/// anchor's y coordinate is the text baseline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

impl Anchor {
    fn identifier(&self) -> &'static str {
        match self {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
            Anchor::End => "end",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Style {
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub stroke_width: f64,
    pub font_size: f64,
}

impl Style {
    /// Outline only.
    pub fn stroke(color: &str, width: f64) -> Self {
        Self {
            fill: None,
            stroke: Some(color.to_string()),
            stroke_width: width,
            font_size: 0.0,
        }
    }

    /// Filled text without outline.
    pub fn text(color: &str, font_size: f64) -> Self {
        Self {
            fill: Some(color.to_string()),
            stroke: None,
            stroke_width: 0.0,
            font_size,
        }
    }

    pub fn with_fill(mut self, color: &str) -> Self {
        self.fill = Some(color.to_string());
        self
    }

    fn to_params(&self, is_text: bool) -> Params {
        let mut params = Params::new();
        params.push((
            "fill".to_string(),
            self.fill.clone().unwrap_or_else(|| "none".to_string()),
        ));
        if let Some(stroke) = &self.stroke {
            params.push(("stroke".to_string(), stroke.clone()));
            params.push(("stroke-width".to_string(), format!("{}", self.stroke_width)));
        }
        if is_text {
            params.push(("font-size".to_string(), format!("{}px", self.font_size)));
            params.push((
                "font-family".to_string(),
                "Inter, system-ui, sans-serif".to_string(),
            ));
        }
        params
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        style: Style,
    },
    Polygon {
        points: Vec<[f64; 2]>,
        style: Style,
    },
    Line {
        from: [f64; 2],
        to: [f64; 2],
        style: Style,
    },
    Circle {
        center: [f64; 2],
        radius: f64,
        style: Style,
    },
    Text {
        pos: [f64; 2],
        text: String,
        anchor: Anchor,
        style: Style,
    },
}

impl Shape {
    fn to_tag(&self) -> Box<dyn svg::RenderTag> {
        match self {
            Shape::Rect {
                x,
                y,
                width,
                height,
                style,
            } => Box::new(Tag::<svg::Rect>::new(
                *x,
                *y,
                *width,
                *height,
                Some(style.to_params(false)),
            )),
            Shape::Polygon { points, style } => Box::new(Tag::<svg::Polygon>::new(
                points,
                Some(style.to_params(false)),
            )),
            Shape::Line { from, to, style } => Box::new(Tag::<svg::Line>::new(
                from[0],
                from[1],
                to[0],
                to[1],
                Some(style.to_params(false)),
            )),
            Shape::Circle {
                center,
                radius,
                style,
            } => Box::new(Tag::<svg::Circle>::new(
                center[0],
                center[1],
                *radius,
                Some(style.to_params(false)),
            )),
            Shape::Text {
                pos,
                text,
                anchor,
                style,
            } => Box::new(Tag::<svg::Text>::new(
                pos[0],
                pos[1],
                anchor.identifier(),
                text,
                Some(style.to_params(true)),
            )),
        }
    }
}

/// The Diagram defines the viewport size and holds the shapes in drawing
/// order.
#[derive(Clone, Debug, PartialEq)]
pub struct Diagram {
    pub width: f64,
    pub height: f64,
    /// Accessible description, rendered as `aria-label` on the root tag.
    pub label: String,
    shapes: Vec<Shape>,
}

impl Diagram {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            label: String::new(),
            shapes: Vec::new(),
        }
    }

    pub fn with_label(mut self, label: &str) -> Self {
        self.label = label.to_owned();
        self
    }

    pub fn add(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Render this `Diagram` to raw SVG markup.
    pub fn render(&self) -> String {
        let mut root = Tag::<svg::Svg>::new(self.width, self.height, None);
        if !self.label.is_empty() {
            root.set_param("role", "img");
            root.set_param("aria-label", &self.label);
        }
        root.add_children(self.shapes.iter().map(Shape::to_tag).collect());
        log::trace!("rendering diagram with {} shapes", self.shapes.len());
        svg::render(&root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_is_deterministic() {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut diagram = Diagram::new(100.0, 50.0).with_label("Test");
        diagram.add(Shape::Rect {
            x: 10.0,
            y: 10.0,
            width: 20.0,
            height: 5.0,
            style: Style::stroke("#2563eb", 2.0).with_fill("#dbeafe"),
        });
        diagram.add(Shape::Text {
            pos: [20.0, 30.0],
            text: "a = 6 cm".to_string(),
            anchor: Anchor::Middle,
            style: Style::text("#0f172a", 13.0),
        });

        let markup = diagram.render();
        assert_eq!(markup, diagram.clone().render());
        assert!(markup.starts_with("<svg width=\"100\" height=\"50\""));
        assert!(markup.contains("role=\"img\" aria-label=\"Test\""));
        assert!(markup.contains(
            "<rect x=\"10\" y=\"10\" width=\"20\" height=\"5\" \
             style=\"fill:#dbeafe;stroke:#2563eb;stroke-width:2\" />"
        ));
        assert!(markup.contains("text-anchor=\"middle\""));
        assert!(markup.contains(">a = 6 cm</text></svg>"));
    }

    #[test]
    fn test_outline_has_no_fill() {
        let mut diagram = Diagram::new(10.0, 10.0);
        diagram.add(Shape::Line {
            from: [0.0, 0.0],
            to: [10.0, 10.0],
            style: Style::stroke("#111827", 1.5),
        });
        assert!(diagram
            .render()
            .contains("style=\"fill:none;stroke:#111827;stroke-width:1.5\""));
        assert_eq!(diagram.shapes().len(), 1);
    }
}
