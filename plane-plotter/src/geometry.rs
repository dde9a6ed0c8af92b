/// A position either in canvas pixels (y down) or in math units (y up).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Coord {
    pub x: f64,
    pub y: f64,
}

impl Coord {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Coord) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    pub fn midpoint(&self, other: &Coord) -> Coord {
        Coord::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

/// Round to one decimal. Negative zero is normalized so it never shows up
/// as "-0" in labels.
pub fn round1(value: f64) -> f64 {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Convert a pixel position into math coordinates: origin at the canvas
/// center, y axis pointing up, one unit per `grid_size` pixels.
pub fn canvas_to_math(pixel: Coord, width: f64, height: f64, grid_size: f64) -> Coord {
    let centered_x = pixel.x - width / 2.0;
    let centered_y = height / 2.0 - pixel.y;
    Coord::new(round1(centered_x / grid_size), round1(centered_y / grid_size))
}

/// Shortest decimal form, as used in point labels ("2", "-1.5").
pub fn format_coord(value: f64) -> String {
    format!("{}", round1(value))
}
