use derive_new::new;
use plane_plotter::{Coord, PlotterMode};

use super::EguiApp;
use app_core::event::AppEvent;

// ---------------------------------------------------------------------------
//
//
// Events
//
//
// ---------------------------------------------------------------------------

#[derive(new)]
pub struct SetPlotterMode {
    mode: PlotterMode,
}

/// A click on the canvas, in pixels relative to its top left corner.
#[derive(new)]
pub struct CanvasClicked {
    x: f64,
    y: f64,
}

#[derive(new)]
pub struct ResetPlotter {}

/// Activate a figure and restore its default parameters.
#[derive(new)]
pub struct SelectFigure {
    key: String,
}

/// Raw text typed into a parameter field.
#[derive(new)]
pub struct UpdateParameter {
    key: String,
    raw: String,
}

/// Numeric value from a parameter slider.
#[derive(new)]
pub struct SetParameter {
    key: String,
    value: f64,
}

// ---------------------------------------------------------------------------
//
//
// apply()
//
//
// ---------------------------------------------------------------------------

impl AppEvent for SetPlotterMode {
    type App = EguiApp;

    fn apply(&self, app: &mut Self::App) -> Result<(), String> {
        // A refused switch is reported through the status line.
        app.plotter.state.set_mode(self.mode);
        Ok(())
    }

    fn describe(&self) -> &str {
        "set plotter mode"
    }
}

impl AppEvent for CanvasClicked {
    type App = EguiApp;

    fn apply(&self, app: &mut Self::App) -> Result<(), String> {
        let settings = app.plotter.state.settings();
        if !(0.0..=settings.width).contains(&self.x) || !(0.0..=settings.height).contains(&self.y)
        {
            return Err(format!(
                "click at ({}, {}) is outside of the canvas",
                self.x, self.y
            ));
        }
        app.plotter.state.handle_click(Coord::new(self.x, self.y));
        Ok(())
    }

    fn describe(&self) -> &str {
        "canvas clicked"
    }
}

impl AppEvent for ResetPlotter {
    type App = EguiApp;

    fn apply(&self, app: &mut Self::App) -> Result<(), String> {
        app.plotter.state.reset();
        Ok(())
    }

    fn describe(&self) -> &str {
        "reset plotter"
    }
}

impl AppEvent for SelectFigure {
    type App = EguiApp;

    fn apply(&self, app: &mut Self::App) -> Result<(), String> {
        app.calculator.select_figure(&self.key)
    }

    fn describe(&self) -> &str {
        "select figure"
    }
}

impl AppEvent for UpdateParameter {
    type App = EguiApp;

    fn apply(&self, app: &mut Self::App) -> Result<(), String> {
        app.calculator.update_parameter(&self.key, &self.raw)
    }

    fn describe(&self) -> &str {
        "update parameter from text"
    }
}

impl AppEvent for SetParameter {
    type App = EguiApp;

    fn apply(&self, app: &mut Self::App) -> Result<(), String> {
        app.calculator.set_parameter(&self.key, self.value)
    }

    fn describe(&self) -> &str {
        "set parameter"
    }
}
