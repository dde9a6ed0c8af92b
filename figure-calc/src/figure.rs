use std::collections::BTreeMap;
use std::f64::consts::PI;

use crate::format::{format_input as inp, format_result as res};

/// Length unit of all parameters.
pub const UNIT: &str = "cm";

/// Metadata of one adjustable input of a figure.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParameterDef {
    pub key: &'static str,
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub unit: &'static str,
    pub default: f64,
}

impl ParameterDef {
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}

/// Current parameter values keyed by parameter key. Missing keys read as NaN,
/// which turns every derived result into the placeholder.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Params(BTreeMap<&'static str, f64>);

impl Params {
    pub fn from_defaults(defs: &[ParameterDef]) -> Self {
        Self(defs.iter().map(|def| (def.key, def.default)).collect())
    }

    pub fn with(mut self, key: &'static str, value: f64) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: &'static str, value: f64) {
        self.0.insert(key, value);
    }

    pub fn get(&self, key: &str) -> f64 {
        self.0.get(key).copied().unwrap_or(f64::NAN)
    }
}

/// A figure-specific derived value such as the hypotenuse.
#[derive(Clone, Debug, PartialEq)]
pub struct Extra {
    pub label: &'static str,
    pub value: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FigureResult {
    pub area: f64,
    pub perimeter: f64,
    pub extras: Vec<Extra>,
    /// Formula narration, one line per computation step.
    pub steps: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FigureKind {
    Rectangle,
    RightTriangle,
    Circle,
}

/// All figures in display order.
pub const REGISTRY: [FigureKind; 3] = [
    FigureKind::Rectangle,
    FigureKind::RightTriangle,
    FigureKind::Circle,
];

const RECTANGLE_PARAMS: [ParameterDef; 2] = [
    ParameterDef {
        key: "a",
        label: "Breite a",
        min: 1.0,
        max: 20.0,
        step: 0.5,
        unit: UNIT,
        default: 6.0,
    },
    ParameterDef {
        key: "b",
        label: "Höhe b",
        min: 1.0,
        max: 20.0,
        step: 0.5,
        unit: UNIT,
        default: 4.0,
    },
];

const TRIANGLE_PARAMS: [ParameterDef; 2] = [
    ParameterDef {
        key: "a",
        label: "Grundseite a",
        min: 1.0,
        max: 20.0,
        step: 0.5,
        unit: UNIT,
        default: 6.0,
    },
    ParameterDef {
        key: "h",
        label: "Höhe h",
        min: 1.0,
        max: 20.0,
        step: 0.5,
        unit: UNIT,
        default: 3.0,
    },
];

const CIRCLE_PARAMS: [ParameterDef; 1] = [ParameterDef {
    key: "r",
    label: "Radius r",
    min: 1.0,
    max: 15.0,
    step: 0.5,
    unit: UNIT,
    default: 5.0,
}];

impl FigureKind {
    pub fn from_key(key: &str) -> Option<Self> {
        REGISTRY.into_iter().find(|kind| kind.key() == key)
    }

    pub fn key(&self) -> &'static str {
        match self {
            FigureKind::Rectangle => "rectangle",
            FigureKind::RightTriangle => "triangle",
            FigureKind::Circle => "circle",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FigureKind::Rectangle => "Rechteck",
            FigureKind::RightTriangle => "Rechtwinkliges Dreieck",
            FigureKind::Circle => "Kreis",
        }
    }

    pub fn parameters(&self) -> &'static [ParameterDef] {
        match self {
            FigureKind::Rectangle => &RECTANGLE_PARAMS,
            FigureKind::RightTriangle => &TRIANGLE_PARAMS,
            FigureKind::Circle => &CIRCLE_PARAMS,
        }
    }

    pub fn parameter(&self, key: &str) -> Option<&'static ParameterDef> {
        self.parameters().iter().find(|def| def.key == key)
    }

    pub fn default_params(&self) -> Params {
        Params::from_defaults(self.parameters())
    }

    pub fn compute(&self, params: &Params) -> FigureResult {
        match self {
            FigureKind::Rectangle => rectangle(params.get("a"), params.get("b")),
            FigureKind::RightTriangle => right_triangle(params.get("a"), params.get("h")),
            FigureKind::Circle => circle(params.get("r")),
        }
    }
}

fn rectangle(a: f64, b: f64) -> FigureResult {
    let area = a * b;
    let perimeter = 2.0 * (a + b);
    let diagonal = a.hypot(b);
    FigureResult {
        area,
        perimeter,
        extras: vec![Extra {
            label: "Diagonale d",
            value: diagonal,
        }],
        steps: vec![
            format!(
                "A = a · b = {} · {} = {} {UNIT}²",
                inp(a),
                inp(b),
                res(area)
            ),
            format!(
                "u = 2 · (a + b) = 2 · ({} + {}) = {} {UNIT}",
                inp(a),
                inp(b),
                res(perimeter)
            ),
            format!("d = √(a² + b²) = {} {UNIT}", res(diagonal)),
        ],
    }
}

fn right_triangle(a: f64, h: f64) -> FigureResult {
    let c = a.hypot(h);
    let area = a * h / 2.0;
    let perimeter = a + h + c;
    FigureResult {
        area,
        perimeter,
        extras: vec![Extra {
            label: "Hypotenuse c",
            value: c,
        }],
        steps: vec![
            format!(
                "c = √(a² + h²) = √({}² + {}²) = {} {UNIT}",
                inp(a),
                inp(h),
                res(c)
            ),
            format!(
                "A = a · h / 2 = {} · {} / 2 = {} {UNIT}²",
                inp(a),
                inp(h),
                res(area)
            ),
            format!(
                "u = a + h + c = {} + {} + {} = {} {UNIT}",
                inp(a),
                inp(h),
                res(c),
                res(perimeter)
            ),
        ],
    }
}

fn circle(r: f64) -> FigureResult {
    let area = PI * r * r;
    let perimeter = 2.0 * PI * r;
    let diameter = 2.0 * r;
    FigureResult {
        area,
        perimeter,
        extras: vec![Extra {
            label: "Durchmesser d",
            value: diameter,
        }],
        steps: vec![
            format!("A = π · r² = π · {}² = {} {UNIT}²", inp(r), res(area)),
            format!(
                "u = 2 · π · r = 2 · π · {} = {} {UNIT}",
                inp(r),
                res(perimeter)
            ),
            format!("d = 2 · r = {} {UNIT}", res(diameter)),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_registry_lookup() {
        for kind in REGISTRY {
            assert_eq!(FigureKind::from_key(kind.key()), Some(kind));
            assert!(!kind.parameters().is_empty());
        }
        assert_eq!(FigureKind::from_key("hexagon"), None);
    }

    #[test]
    fn test_defaults_within_bounds() {
        for kind in REGISTRY {
            for def in kind.parameters() {
                assert!(def.min <= def.default && def.default <= def.max);
                assert!(def.step > 0.0);
            }
        }
    }

    #[test]
    fn test_rectangle() {
        let params = Params::default().with("a", 6.0).with("b", 4.0);
        let result = FigureKind::Rectangle.compute(&params);
        assert_relative_eq!(result.area, 24.0);
        assert_relative_eq!(result.perimeter, 20.0);
        assert_eq!(res(result.area), "24,00");
        assert_eq!(res(result.perimeter), "20,00");
        assert_eq!(result.steps[0], "A = a · b = 6 · 4 = 24,00 cm²");
        assert_eq!(result.steps[1], "u = 2 · (a + b) = 2 · (6 + 4) = 20,00 cm");
    }

    #[test]
    fn test_right_triangle() {
        let params = Params::default().with("a", 6.0).with("h", 3.0);
        let result = FigureKind::RightTriangle.compute(&params);
        assert_relative_eq!(result.extras[0].value, 45.0_f64.sqrt());
        assert_relative_eq!(result.area, 9.0);
        assert_eq!(res(result.extras[0].value), "6,71");
        assert_eq!(res(result.area), "9,00");
        assert_eq!(res(result.perimeter), "15,71");
        assert_eq!(result.steps[0], "c = √(a² + h²) = √(6² + 3²) = 6,71 cm");
    }

    #[test]
    fn test_circle() {
        let params = FigureKind::Circle.default_params();
        let result = FigureKind::Circle.compute(&params);
        assert_eq!(res(result.area), "78,54");
        assert_eq!(res(result.perimeter), "31,42");
        assert_eq!(result.steps[0], "A = π · r² = π · 5² = 78,54 cm²");
    }

    #[test]
    fn test_fractional_inputs_in_steps() {
        let params = Params::default().with("r", 2.5);
        let result = FigureKind::Circle.compute(&params);
        assert_eq!(result.steps[1], "u = 2 · π · r = 2 · π · 2,5 = 15,71 cm");
    }

    #[test]
    fn test_missing_parameter_gives_placeholder() {
        let params = Params::default().with("a", 6.0);
        let result = FigureKind::Rectangle.compute(&params);
        assert!(result.area.is_nan());
        assert_eq!(res(result.area), crate::format::PLACEHOLDER);
        assert_eq!(result.steps[0], "A = a · b = 6 · – = – cm²");
    }
}
