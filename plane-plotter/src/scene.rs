use crate::geometry::Coord;
use crate::state::PlotterState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba(pub u8, pub u8, pub u8, pub u8);

const GRID_COLOR: Rgba = Rgba(148, 163, 184, 60);
const AXIS_COLOR: Rgba = Rgba(37, 99, 235, 102);
const SEGMENT_COLOR: Rgba = Rgba(0x11, 0x18, 0x27, 255);
const SEGMENT_TEXT_COLOR: Rgba = Rgba(0x1f, 0x29, 0x37, 255);
const POINT_FILL: Rgba = Rgba(0x25, 0x63, 0xeb, 255);
const SELECTED_POINT_FILL: Rgba = Rgba(0x1e, 0x3a, 0x8a, 255);
const POINT_STROKE: Rgba = Rgba(0x0f, 0x17, 0x2a, 255);

pub const FONT_SIZE: f64 = 14.0;

/// Grid lines closer than this many pixels are not drawn.
pub const MIN_GRID_SPACING: f64 = 1.0;
const MAX_GRID_LINES: usize = 10_000;

/// Drawing primitives in canvas pixels, in painting order.
#[derive(Clone, Debug, PartialEq)]
pub enum SceneItem {
    Line {
        from: Coord,
        to: Coord,
        color: Rgba,
        width: f64,
    },
    Circle {
        center: Coord,
        radius: f64,
        fill: Rgba,
        stroke: Rgba,
        stroke_width: f64,
    },
    /// `pos` is the bottom edge of the text; horizontally it is either the
    /// left edge or the center.
    Text {
        pos: Coord,
        text: String,
        centered: bool,
        color: Rgba,
        size: f64,
    },
}

impl PlotterState {
    /// Full description of the canvas for the current state: grid, axes,
    /// segments with their lengths and finally the points.
    pub fn scene(&self) -> Vec<SceneItem> {
        let settings = self.settings();
        let (width, height) = (settings.width, settings.height);
        let center = Coord::new(width / 2.0, height / 2.0);
        let mut items = Vec::with_capacity(
            2 * self.segments().len() + 2 * self.points().len() + 2,
        );

        if let Some(count) = grid_line_count(width, height, settings.grid_size) {
            items.reserve(count);
            for x in grid_positions(center.x, width, settings.grid_size) {
                items.push(SceneItem::Line {
                    from: Coord::new(x, 0.0),
                    to: Coord::new(x, height),
                    color: GRID_COLOR,
                    width: 1.0,
                });
            }
            for y in grid_positions(center.y, height, settings.grid_size) {
                items.push(SceneItem::Line {
                    from: Coord::new(0.0, y),
                    to: Coord::new(width, y),
                    color: GRID_COLOR,
                    width: 1.0,
                });
            }
        } else {
            log::debug!("grid of {} px skipped", settings.grid_size);
        }

        // y axis, then x axis
        items.push(SceneItem::Line {
            from: Coord::new(center.x, 0.0),
            to: Coord::new(center.x, height),
            color: AXIS_COLOR,
            width: 1.5,
        });
        items.push(SceneItem::Line {
            from: Coord::new(0.0, center.y),
            to: Coord::new(width, center.y),
            color: AXIS_COLOR,
            width: 1.5,
        });

        let points = self.points();
        for segment in self.segments() {
            let (start, end) = (points[segment.start].pixel, points[segment.end].pixel);
            items.push(SceneItem::Line {
                from: start,
                to: end,
                color: SEGMENT_COLOR,
                width: 2.0,
            });
            let mid = start.midpoint(&end);
            items.push(SceneItem::Text {
                pos: Coord::new(mid.x, mid.y - 10.0),
                text: segment.list_entry(),
                centered: true,
                color: SEGMENT_TEXT_COLOR,
                size: FONT_SIZE,
            });
        }

        for (index, point) in points.iter().enumerate() {
            let is_selected = self.selected() == Some(index);
            items.push(SceneItem::Circle {
                center: point.pixel,
                radius: if is_selected { 8.0 } else { 6.0 },
                fill: if is_selected {
                    SELECTED_POINT_FILL
                } else {
                    POINT_FILL
                },
                stroke: POINT_STROKE,
                stroke_width: if is_selected { 3.0 } else { 2.0 },
            });
            items.push(SceneItem::Text {
                pos: Coord::new(point.pixel.x + 10.0, point.pixel.y - 8.0),
                text: point.caption(),
                centered: false,
                color: POINT_STROKE,
                size: FONT_SIZE,
            });
        }

        items
    }
}

/// Upper bound of grid lines for a canvas, `None` if the lines would be
/// closer than `MIN_GRID_SPACING` or too many to draw.
fn grid_line_count(width: f64, height: f64, grid_size: f64) -> Option<usize> {
    if !(grid_size.is_finite() && grid_size >= MIN_GRID_SPACING) {
        return None;
    }
    let count = 2.0 * (width / grid_size + height / grid_size) + 4.0;
    (count.is_finite() && count <= MAX_GRID_LINES as f64).then_some(count as usize)
}

/// Positions of grid lines on one axis, excluding the axis itself.
fn grid_positions(center: f64, extent: f64, step: f64) -> Vec<f64> {
    let steps = (center / step).floor() as i64;
    (-steps..=steps)
        .filter(|k| *k != 0)
        .map(|k| center + k as f64 * step)
        .filter(|pos| (0.0..=extent).contains(pos))
        .collect()
}
