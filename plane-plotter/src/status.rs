use std::fmt::Display;

use crate::state::PlotterMode;

/// Everything the status line can say after a user action.
#[derive(Clone, Debug, PartialEq)]
pub enum StatusMessage {
    Mode(PlotterMode),
    PointAdded { label: String, x: String, y: String },
    NeedTwoPoints,
    NoPointNearby,
    FirstPointSelected { label: String },
    SamePointTwice,
    SegmentAdded { label: String, length: f64 },
    Reset,
}

impl Display for StatusMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusMessage::Mode(PlotterMode::Point) => write!(f, "Modus: Punkt setzen"),
            StatusMessage::Mode(PlotterMode::Segment) => write!(f, "Modus: Strecke messen"),
            StatusMessage::PointAdded { label, x, y } => {
                write!(f, "Punkt {label} bei ({x}; {y}) gesetzt.")
            }
            StatusMessage::NeedTwoPoints => write!(
                f,
                "Lege mindestens zwei Punkte an, um eine Strecke zu messen."
            ),
            StatusMessage::NoPointNearby => write!(f, "Bitte wähle einen vorhandenen Punkt."),
            StatusMessage::FirstPointSelected { label } => {
                write!(f, "Erster Punkt: {label}. Wähle einen zweiten Punkt.")
            }
            StatusMessage::SamePointTwice => write!(f, "Wähle zwei verschiedene Punkte."),
            StatusMessage::SegmentAdded { label, length } => write!(
                f,
                "Strecke {label} hat eine Länge von {length:.2} Einheiten."
            ),
            StatusMessage::Reset => write!(f, "Alles zurückgesetzt. Modus: Punkt setzen"),
        }
    }
}
