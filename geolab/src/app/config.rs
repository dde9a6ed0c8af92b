use app_core::string_error::ErrorStringExt;
use figure_calc::DiagramSettings;
use plane_plotter::{PlotterSettings, MIN_GRID_SPACING};
use std::{io::Read, path::PathBuf};

const CONFIG_FILE: &str = ".geolab";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub window_width: f32,
    pub window_height: f32,
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub grid_size: f64,
    pub pick_radius: f64,
    pub circle_px_per_unit: f64,
    pub circle_max_radius: f64,
}

impl Default for Config {
    fn default() -> Self {
        let plotter = PlotterSettings::default();
        let diagram = DiagramSettings::default();

        Self {
            window_width: 1000.0,
            window_height: 640.0,
            canvas_width: plotter.width,
            canvas_height: plotter.height,
            grid_size: plotter.grid_size,
            pick_radius: plotter.pick_radius,
            circle_px_per_unit: diagram.circle_px_per_unit,
            circle_max_radius: diagram.circle_max_radius,
        }
    }
}

impl Config {
    /// Load `~/.geolab`. Missing keys keep their defaults.
    pub fn from_config_file() -> Result<Self, String> {
        #[allow(deprecated)]
        let Some(home) = std::env::home_dir() else {
            return Err("could not determine home directory to load config file".into());
        };
        let config_raw = {
            let path = home.join(PathBuf::from(CONFIG_FILE));
            let mut file = std::fs::File::open(path).err_to_string("could not open config file")?;
            let mut buf = String::new();
            file.read_to_string(&mut buf)
                .err_to_string("could not load config file")?;
            buf
        };
        Ok(Self::parse(&config_raw))
    }

    /// Parse `key=value` lines. Lines starting with "#" are comments;
    /// unknown keys are ignored and bad values are reported and skipped.
    pub fn parse(config_raw: &str) -> Self {
        let mut config = Self::default();
        for line in config_raw.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, val)) = line.split_once('=') else {
                log::warn!("ignoring config line without '=': {line}");
                continue;
            };
            let (key, val) = (key.trim(), val.trim());
            match key {
                "window_width" => set_positive(&mut config.window_width, key, val),
                "window_height" => set_positive(&mut config.window_height, key, val),
                "canvas_width" => set_positive(&mut config.canvas_width, key, val),
                "canvas_height" => set_positive(&mut config.canvas_height, key, val),
                "grid_size" => set_positive(&mut config.grid_size, key, val),
                "pick_radius" => set_positive(&mut config.pick_radius, key, val),
                "circle_px_per_unit" => set_positive(&mut config.circle_px_per_unit, key, val),
                "circle_max_radius" => set_positive(&mut config.circle_max_radius, key, val),
                _ => log::debug!("unknown config key '{key}'"),
            }
        }
        if config.grid_size < MIN_GRID_SPACING {
            log::warn!(
                "grid_size must be at least {MIN_GRID_SPACING} px, using default"
            );
            config.grid_size = PlotterSettings::default().grid_size;
        }
        config
    }

    pub fn plotter_settings(&self) -> PlotterSettings {
        PlotterSettings {
            width: self.canvas_width,
            height: self.canvas_height,
            grid_size: self.grid_size,
            pick_radius: self.pick_radius,
        }
    }

    pub fn diagram_settings(&self) -> DiagramSettings {
        DiagramSettings {
            circle_px_per_unit: self.circle_px_per_unit,
            circle_max_radius: self.circle_max_radius,
            ..Default::default()
        }
    }
}

fn set_positive<T>(target: &mut T, key: &str, val: &str)
where
    T: std::str::FromStr + PartialOrd + Default,
{
    match val.parse::<T>() {
        Ok(parsed) if parsed > T::default() => *target = parsed,
        _ => log::warn!("could not parse '{key}' as positive number"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_overrides_and_defaults() {
        let config = Config::parse(
            "# geometry lab\n\
             grid_size = 40\n\
             pick_radius=20\n\
             canvas_width=800\n\
             unknown=1\n",
        );
        assert_eq!(config.grid_size, 40.0);
        assert_eq!(config.pick_radius, 20.0);
        assert_eq!(config.canvas_width, 800.0);
        assert_eq!(config.canvas_height, 400.0);
        assert_eq!(config.plotter_settings().grid_size, 40.0);
    }

    #[test]
    fn test_bad_values_are_skipped() {
        let config = Config::parse("grid_size=-5\npick_radius=abc\nno separator\n");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_tiny_grid_size_falls_back_to_default() {
        let config = Config::parse("grid_size=1e-300");
        assert_eq!(config.grid_size, 50.0);
        assert_eq!(Config::parse("grid_size=0.5").grid_size, 50.0);
        assert_eq!(Config::parse("grid_size=1").grid_size, 1.0);
    }

    #[test]
    fn test_diagram_settings() {
        let config = Config::parse("circle_max_radius=60");
        let settings = config.diagram_settings();
        assert_eq!(settings.circle_max_radius, 60.0);
        assert_eq!(settings.circle_px_per_unit, 18.0);
        assert_eq!(settings.drawing_area, [160.0, 120.0]);
    }
}
