// This code is a thin Rust wrapper to handle SVG tags and render them to
// markup.

use std::fmt::Write;

// ----------------------------------------------------------------------------
//
//
// Rust representation and rendering of SVG tags.
//
//
// ----------------------------------------------------------------------------

/// Ordered key/value pairs. Attribute order is kept so that rendering the
/// same tag twice yields identical markup.
pub type Params = Vec<(String, String)>;

pub trait RenderTag: std::fmt::Debug {
    fn render(&self, buf: &mut String);
}

impl<T> RenderTag for Tag<T>
where
    T: Identifier + std::fmt::Debug,
{
    fn render(&self, buf: &mut String) {
        write!(buf, "<{}", self.kind.identifier()).expect(FAILED_STRING_WRITE);
        for (k, v) in self.parameters.iter() {
            write!(buf, " {k}=\"{v}\"").expect(FAILED_STRING_WRITE);
        }
        if !self.style.is_empty() {
            write!(buf, " style=\"").expect(FAILED_STRING_WRITE);
            for (k, v) in self.style.iter() {
                write!(buf, "{k}:{v};").expect(FAILED_STRING_WRITE);
            }
            // Remove last surplus semicolon.
            buf.pop();
            write!(buf, "\"").expect(FAILED_STRING_WRITE);
        }
        if !self.closing {
            write!(buf, " /").expect(FAILED_STRING_WRITE);
        }
        write!(buf, ">").expect(FAILED_STRING_WRITE);
        for c in self.children.iter() {
            c.render(buf);
        }
        if self.closing {
            write!(buf, "</{}>", self.kind.identifier()).expect(FAILED_STRING_WRITE);
        }
    }
}

/// Raw text content. Escaped on rendering.
impl RenderTag for String {
    fn render(&self, buf: &mut String) {
        buf.push_str(&escape(self));
    }
}

pub fn render(svg_tag: &Tag<Svg>) -> String {
    let mut raw_svg = String::new();
    svg_tag.render(&mut raw_svg);
    raw_svg
}

#[derive(Debug)]
pub struct Tag<T>
where
    T: std::fmt::Debug,
{
    parameters: Params,
    style: Params,
    children: Vec<Box<dyn RenderTag>>,
    closing: bool,
    kind: T,
}

impl<T> Tag<T>
where
    T: std::fmt::Debug,
{
    fn with_kind(kind: T, parameters: Params, style: Option<Params>, closing: bool) -> Self {
        Self {
            parameters,
            style: style.unwrap_or_default(),
            children: Vec::new(),
            closing,
            kind,
        }
    }

    pub fn add_child(&mut self, child: impl RenderTag + 'static) {
        self.children.push(Box::new(child));
    }

    pub fn add_children(&mut self, children: Vec<Box<dyn RenderTag>>) {
        self.children.extend(children);
    }

    /// Set an additional attribute, e.g. an `aria-label`.
    pub fn set_param(&mut self, key: &str, value: &str) {
        if let Some(entry) = self.parameters.iter_mut().find(|(k, _)| k == key) {
            entry.1 = value.to_string();
        } else {
            self.parameters.push((key.to_string(), value.to_string()));
        }
    }
}

fn params<const N: usize>(items: [(&str, String); N]) -> Params {
    items
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}

// ----------------------------------------------------------------------------
//
//
// Creation of `new` tags.
//
//
// ----------------------------------------------------------------------------

impl Tag<Svg> {
    pub fn new(width: f64, height: f64, style: Option<Params>) -> Self {
        let parameters = params([
            ("width", format!("{width}")),
            ("height", format!("{height}")),
            ("viewBox", format!("0 0 {width} {height}")),
            ("xmlns", "http://www.w3.org/2000/svg".to_string()),
        ]);
        Self::with_kind(Svg {}, parameters, style, true)
    }
}

impl Tag<Circle> {
    pub fn new(cx: f64, cy: f64, r: f64, style: Option<Params>) -> Self {
        let parameters = params([
            ("cx", format!("{cx}")),
            ("cy", format!("{cy}")),
            ("r", format!("{r}")),
        ]);
        Self::with_kind(Circle {}, parameters, style, false)
    }
}

impl Tag<Rect> {
    pub fn new(x: f64, y: f64, width: f64, height: f64, style: Option<Params>) -> Self {
        let parameters = params([
            ("x", format!("{x}")),
            ("y", format!("{y}")),
            ("width", format!("{width}")),
            ("height", format!("{height}")),
        ]);
        Self::with_kind(Rect {}, parameters, style, false)
    }
}

impl Tag<Text> {
    /// `anchor` is the SVG `text-anchor` value (`start`, `middle`, `end`).
    pub fn new(x: f64, y: f64, anchor: &str, text: &str, style: Option<Params>) -> Self {
        let parameters = params([
            ("x", format!("{x}")),
            ("y", format!("{y}")),
            ("text-anchor", anchor.to_string()),
        ]);
        let mut res = Self::with_kind(Text {}, parameters, style, true);
        res.add_child(text.to_string());
        res
    }
}

impl Tag<Line> {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64, style: Option<Params>) -> Self {
        let parameters = params([
            ("x1", format!("{x1}")),
            ("y1", format!("{y1}")),
            ("x2", format!("{x2}")),
            ("y2", format!("{y2}")),
        ]);
        Self::with_kind(Line {}, parameters, style, false)
    }
}

impl Tag<Polygon> {
    pub fn new(points: &[[f64; 2]], style: Option<Params>) -> Self {
        let raw_points = points
            .iter()
            .map(|[x, y]| format!("{x},{y}"))
            .collect::<Vec<_>>()
            .join(" ");
        Self::with_kind(Polygon {}, params([("points", raw_points)]), style, false)
    }
}

// ----------------------------------------------------------------------------
//
//
// SVG tag kinds and their str representation (`identifier`)
//
//
// ----------------------------------------------------------------------------

#[derive(Debug)]
pub struct Svg {}
#[derive(Debug)]
pub struct Circle {}
#[derive(Debug)]
pub struct Rect {}
#[derive(Debug)]
pub struct Text {}
#[derive(Debug)]
pub struct Line {}
#[derive(Debug)]
pub struct Polygon {}

pub trait Identifier {
    fn identifier(&self) -> &'static str;
}

impl Identifier for Svg {
    fn identifier(&self) -> &'static str {
        "svg"
    }
}

impl Identifier for Circle {
    fn identifier(&self) -> &'static str {
        "circle"
    }
}

impl Identifier for Rect {
    fn identifier(&self) -> &'static str {
        "rect"
    }
}

impl Identifier for Text {
    fn identifier(&self) -> &'static str {
        "text"
    }
}

impl Identifier for Line {
    fn identifier(&self) -> &'static str {
        "line"
    }
}

impl Identifier for Polygon {
    fn identifier(&self) -> &'static str {
        "polygon"
    }
}

const FAILED_STRING_WRITE: &str = "Failed to write into string.";

pub fn opts(items: &[(&str, &str)]) -> Option<Params> {
    Some(
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    )
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
