use crate::geometry::{canvas_to_math, format_coord, Coord};
use crate::label::label_for;
use crate::status::StatusMessage;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlotterMode {
    Point,
    Segment,
}

impl PlotterMode {
    pub fn next(&self) -> Self {
        match self {
            PlotterMode::Point => PlotterMode::Segment,
            PlotterMode::Segment => PlotterMode::Point,
        }
    }
}

/// Canvas geometry and picking tolerance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotterSettings {
    pub width: f64,
    pub height: f64,
    /// Pixels per math unit.
    pub grid_size: f64,
    /// Maximum pixel distance for a click to hit an existing point.
    pub pick_radius: f64,
}

impl Default for PlotterSettings {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 400.0,
            grid_size: 50.0,
            pick_radius: 14.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Point {
    pub pixel: Coord,
    pub math: Coord,
    pub label: String,
}

impl Point {
    /// "A (2; -1.5)", drawn next to the point on the canvas.
    pub fn caption(&self) -> String {
        format!(
            "{} ({}; {})",
            self.label,
            format_coord(self.math.x),
            format_coord(self.math.y)
        )
    }

    pub fn list_entry(&self) -> String {
        format!(
            "{} = ({}; {})",
            self.label,
            format_coord(self.math.x),
            format_coord(self.math.y)
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    pub start: usize,
    pub end: usize,
    pub label: String,
    /// Length in math units.
    pub length: f64,
}

impl Segment {
    /// "AB = 5.00", used for the list and the canvas label.
    pub fn list_entry(&self) -> String {
        format!("{} = {:.2}", self.label, self.length)
    }
}

/// Session state of the plotter. Points and segments only ever grow until
/// `reset` clears both at once, so segment indices always stay valid.
#[derive(Debug)]
pub struct PlotterState {
    settings: PlotterSettings,
    mode: PlotterMode,
    points: Vec<Point>,
    segments: Vec<Segment>,
    selected: Option<usize>,
    point_counter: usize,
    status: StatusMessage,
}

impl PlotterState {
    pub fn new(settings: PlotterSettings) -> Self {
        Self {
            settings,
            mode: PlotterMode::Point,
            points: Vec::new(),
            segments: Vec::new(),
            selected: None,
            point_counter: 0,
            status: StatusMessage::Mode(PlotterMode::Point),
        }
    }

    pub fn settings(&self) -> &PlotterSettings {
        &self.settings
    }

    pub fn mode(&self) -> PlotterMode {
        self.mode
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Index of the first point picked in segment mode, if any.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn status(&self) -> &StatusMessage {
        &self.status
    }

    /// Switch the interaction mode. Entering segment mode needs at least two
    /// points; otherwise the mode is kept and `false` is returned.
    pub fn set_mode(&mut self, mode: PlotterMode) -> bool {
        if mode == PlotterMode::Segment && self.points.len() < 2 {
            log::debug!("refusing segment mode with {} points", self.points.len());
            self.status = StatusMessage::NeedTwoPoints;
            return false;
        }
        log::debug!("switching plotter mode to {:?}", mode);
        self.mode = mode;
        self.selected = None;
        self.status = StatusMessage::Mode(mode);
        true
    }

    /// Handle a click at `pixel`, given relative to the canvas' top left
    /// corner.
    pub fn handle_click(&mut self, pixel: Coord) {
        match self.mode {
            PlotterMode::Point => self.add_point(pixel),
            PlotterMode::Segment => self.pick_point(pixel),
        }
    }

    pub fn reset(&mut self) {
        log::debug!(
            "resetting plotter ({} points, {} segments)",
            self.points.len(),
            self.segments.len()
        );
        self.points.clear();
        self.segments.clear();
        self.selected = None;
        self.point_counter = 0;
        self.mode = PlotterMode::Point;
        self.status = StatusMessage::Reset;
    }

    /// First point (in insertion order) within the pick radius of `pixel`.
    pub fn find_point_near(&self, pixel: Coord) -> Option<usize> {
        self.points
            .iter()
            .position(|point| point.pixel.distance(&pixel) <= self.settings.pick_radius)
    }

    pub fn point_list(&self) -> Vec<String> {
        if self.points.is_empty() {
            return vec!["Noch keine Punkte.".to_string()];
        }
        self.points.iter().map(Point::list_entry).collect()
    }

    pub fn segment_list(&self) -> Vec<String> {
        if self.segments.is_empty() {
            return vec!["Noch keine Strecken.".to_string()];
        }
        self.segments.iter().map(Segment::list_entry).collect()
    }

    fn add_point(&mut self, pixel: Coord) {
        let PlotterSettings {
            width,
            height,
            grid_size,
            ..
        } = self.settings;
        let math = canvas_to_math(pixel, width, height, grid_size);
        let label = label_for(self.point_counter);
        self.point_counter += 1;

        log::debug!("adding point {} at {:?}", label, math);
        self.status = StatusMessage::PointAdded {
            label: label.clone(),
            x: format_coord(math.x),
            y: format_coord(math.y),
        };
        self.points.push(Point { pixel, math, label });
    }

    fn pick_point(&mut self, pixel: Coord) {
        let Some(index) = self.find_point_near(pixel) else {
            self.status = StatusMessage::NoPointNearby;
            return;
        };

        match self.selected.take() {
            None => {
                self.selected = Some(index);
                self.status = StatusMessage::FirstPointSelected {
                    label: self.points[index].label.clone(),
                };
            }
            Some(start) => self.add_segment(start, index),
        }
    }

    fn add_segment(&mut self, start: usize, end: usize) {
        if start == end {
            self.status = StatusMessage::SamePointTwice;
            return;
        }
        let (a, b) = (&self.points[start], &self.points[end]);
        let label = format!("{}{}", a.label, b.label);
        let length = a.math.distance(&b.math);

        log::debug!("adding segment {} with length {}", label, length);
        self.status = StatusMessage::SegmentAdded {
            label: label.clone(),
            length,
        };
        self.segments.push(Segment {
            start,
            end,
            label,
            length,
        });
    }
}

impl Default for PlotterState {
    fn default() -> Self {
        Self::new(PlotterSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Pixel position of math coordinates on the default canvas.
    fn px(x: f64, y: f64) -> Coord {
        Coord::new(300.0 + x * 50.0, 200.0 - y * 50.0)
    }

    fn state_with_points(points: &[(f64, f64)]) -> PlotterState {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut state = PlotterState::default();
        for (x, y) in points {
            state.handle_click(px(*x, *y));
        }
        state
    }

    #[test]
    fn test_points_get_sequential_labels() {
        let state = state_with_points(&[(0.0, 0.0), (3.0, 0.0), (0.0, -2.5)]);
        let labels: Vec<_> = state.points().iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, ["A", "B", "C"]);
        assert_eq!(state.points()[2].math, Coord::new(0.0, -2.5));
        assert_eq!(
            state.status().to_string(),
            "Punkt C bei (0; -2.5) gesetzt."
        );
        assert_eq!(state.point_list()[1], "B = (3; 0)");
    }

    #[test]
    fn test_segment_mode_needs_two_points() {
        let mut state = state_with_points(&[(1.0, 1.0)]);
        assert!(!state.set_mode(PlotterMode::Segment));
        assert_eq!(state.mode(), PlotterMode::Point);
        assert_eq!(state.status(), &StatusMessage::NeedTwoPoints);

        state.handle_click(px(2.0, 2.0));
        assert!(state.set_mode(PlotterMode::Segment));
        assert_eq!(state.mode(), PlotterMode::Segment);
        assert_eq!(state.selected(), None);
        assert_eq!(state.status().to_string(), "Modus: Strecke messen");
    }

    #[test]
    fn test_segment_length_uses_math_coordinates() {
        let mut state = state_with_points(&[(0.0, 0.0), (3.0, 4.0)]);
        state.set_mode(PlotterMode::Segment);

        state.handle_click(px(0.0, 0.0));
        assert_eq!(state.selected(), Some(0));
        assert_eq!(
            state.status().to_string(),
            "Erster Punkt: A. Wähle einen zweiten Punkt."
        );

        state.handle_click(px(3.0, 4.0));
        assert_eq!(state.selected(), None);
        let segment = &state.segments()[0];
        assert_eq!((segment.start, segment.end), (0, 1));
        assert_eq!(segment.label, "AB");
        assert_relative_eq!(segment.length, 5.0);
        assert_eq!(segment.list_entry(), "AB = 5.00");
        assert_eq!(
            state.status().to_string(),
            "Strecke AB hat eine Länge von 5.00 Einheiten."
        );
    }

    #[test]
    fn test_pick_uses_pixel_radius() {
        let mut state = state_with_points(&[(0.0, 0.0), (2.0, 0.0)]);
        state.set_mode(PlotterMode::Segment);

        // 14 px away is still a hit, 15 px is not.
        assert_eq!(state.find_point_near(Coord::new(314.0, 200.0)), Some(0));
        assert_eq!(state.find_point_near(Coord::new(300.0, 215.0)), None);

        state.handle_click(Coord::new(300.0, 215.0));
        assert_eq!(state.status(), &StatusMessage::NoPointNearby);
        assert_eq!(state.selected(), None);
        assert!(state.segments().is_empty());
    }

    #[test]
    fn test_same_point_twice_is_rejected() {
        let mut state = state_with_points(&[(0.0, 0.0), (1.0, 0.0)]);
        state.set_mode(PlotterMode::Segment);
        state.handle_click(px(0.0, 0.0));
        state.handle_click(px(0.0, 0.0));

        assert!(state.segments().is_empty());
        assert_eq!(state.selected(), None);
        assert_eq!(state.status(), &StatusMessage::SamePointTwice);
    }

    #[test]
    fn test_mode_switch_clears_pending_selection() {
        let mut state = state_with_points(&[(0.0, 0.0), (1.0, 0.0)]);
        state.set_mode(PlotterMode::Segment);
        state.handle_click(px(1.0, 0.0));
        assert_eq!(state.selected(), Some(1));

        state.set_mode(PlotterMode::Segment);
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_reset_restarts_labels() {
        let mut state = state_with_points(&[(0.0, 0.0), (1.0, 1.0)]);
        state.set_mode(PlotterMode::Segment);
        state.handle_click(px(0.0, 0.0));
        state.handle_click(px(1.0, 1.0));
        assert_eq!(state.segments().len(), 1);

        state.reset();
        assert!(state.points().is_empty());
        assert!(state.segments().is_empty());
        assert_eq!(state.mode(), PlotterMode::Point);
        assert_eq!(state.point_list(), ["Noch keine Punkte."]);
        assert_eq!(state.segment_list(), ["Noch keine Strecken."]);
        assert_eq!(
            state.status().to_string(),
            "Alles zurückgesetzt. Modus: Punkt setzen"
        );

        state.handle_click(px(2.0, 2.0));
        assert_eq!(state.points()[0].label, "A");
    }

    #[test]
    fn test_counter_survives_mode_switches() {
        let mut state = state_with_points(&[(0.0, 0.0), (1.0, 0.0)]);
        state.set_mode(PlotterMode::Segment);
        state.set_mode(PlotterMode::Point);
        state.handle_click(px(-1.0, 0.0));
        assert_eq!(state.points()[2].label, "C");
    }
}
