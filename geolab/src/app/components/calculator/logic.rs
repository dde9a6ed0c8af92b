use figure_calc::format::format_input;
use figure_calc::FigureKind;
use svg_export::Diagram;

impl super::Calculator {
    pub fn active(&self) -> FigureKind {
        self.state.active()
    }

    pub fn select_figure(&mut self, key: &str) -> Result<(), String> {
        self.state.select_figure(key)?;
        self.sync_inputs();
        Ok(())
    }

    /// Store text typed into a parameter field. The field shows the value
    /// actually stored afterwards, which may be clamped.
    pub fn update_parameter(&mut self, key: &str, raw: &str) -> Result<(), String> {
        let value = self.state.update_parameter(key, raw)?;
        log::debug!("parameter '{}' set to {} from '{}'", key, value, raw);
        self.sync_inputs();
        Ok(())
    }

    pub fn set_parameter(&mut self, key: &str, value: f64) -> Result<(), String> {
        self.state.set_parameter(key, value)?;
        self.sync_inputs();
        Ok(())
    }

    /// Rebuild the text buffers from the stored values of the active figure.
    pub fn sync_inputs(&mut self) {
        let active = self.state.active();
        self.input_buffers = active
            .parameters()
            .iter()
            .map(|def| {
                let value = self.state.value(def.key).unwrap_or(def.min);
                (def.key, format_input(value))
            })
            .collect();
        self.edited_inputs.clear();
    }

    pub fn input_text(&self, key: &str) -> &str {
        self.input_buffers.get(key).map(String::as_str).unwrap_or("")
    }

    pub(super) fn input_buffer_mut(&mut self, key: &'static str) -> &mut String {
        self.input_buffers.entry(key).or_default()
    }

    pub(super) fn mark_input_edited(&mut self, key: &'static str) {
        self.edited_inputs.insert(key);
    }

    /// Whether the buffer of `key` holds typed text that has not been
    /// committed yet. Clears the mark.
    pub(super) fn take_input_edit(&mut self, key: &str) -> bool {
        self.edited_inputs.remove(key)
    }

    pub fn diagram(&self) -> Diagram {
        self.state.diagram(&self.diagram_settings)
    }

    pub fn diagram_markup(&self) -> String {
        self.diagram().render()
    }
}

#[cfg(test)]
mod tests {
    use crate::app::components::Calculator;
    use figure_calc::{DiagramSettings, FigureKind};

    fn init() -> Calculator {
        let _ = env_logger::builder().is_test(true).try_init();
        Calculator::new(DiagramSettings::default())
    }

    #[test]
    fn test_buffers_follow_active_figure() {
        let mut calculator = init();
        assert_eq!(calculator.input_text("a"), "6");
        assert_eq!(calculator.input_text("b"), "4");

        calculator.select_figure("circle").unwrap();
        assert_eq!(calculator.active(), FigureKind::Circle);
        assert_eq!(calculator.input_text("r"), "5");
        assert_eq!(calculator.input_text("a"), "");
    }

    #[test]
    fn test_text_and_slider_stay_in_sync() {
        let mut calculator = init();
        calculator.update_parameter("a", " 7,5 ").unwrap();
        assert_eq!(calculator.state.value("a"), Some(7.5));
        assert_eq!(calculator.input_text("a"), "7,5");

        calculator.update_parameter("b", "99").unwrap();
        assert_eq!(calculator.state.value("b"), Some(20.0));
        assert_eq!(calculator.input_text("b"), "20");

        calculator.set_parameter("b", 0.0).unwrap();
        assert_eq!(calculator.input_text("b"), "1");

        calculator.update_parameter("a", "abc").unwrap();
        assert_eq!(calculator.input_text("a"), "1");
    }

    #[test]
    fn test_failed_update_keeps_buffers() {
        let mut calculator = init();
        *calculator.input_buffer_mut("a") = "12".to_string();
        assert!(calculator.update_parameter("r", "3").is_err());
        assert!(calculator.select_figure("hexagon").is_err());
        assert_eq!(calculator.input_text("a"), "12");
    }

    #[test]
    fn test_untouched_input_is_not_committed_again() {
        let mut calculator = init();
        calculator.update_parameter("a", "7,333").unwrap();
        assert_eq!(calculator.state.value("a"), Some(7.333));
        assert_eq!(calculator.input_text("a"), "7,33");
        // losing focus without typing must not round the stored value
        assert!(!calculator.take_input_edit("a"));

        calculator.mark_input_edited("a");
        assert!(calculator.take_input_edit("a"));
        assert!(!calculator.take_input_edit("a"));

        calculator.mark_input_edited("b");
        calculator.set_parameter("a", 3.0).unwrap();
        assert!(!calculator.take_input_edit("b"));
    }

    #[test]
    fn test_diagram_uses_current_values() {
        let mut calculator = init();
        calculator.select_figure("triangle").unwrap();
        calculator.update_parameter("h", "4").unwrap();
        let markup = calculator.diagram_markup();
        assert!(markup.contains(">h = 4 cm</text>"));
        assert!(markup.contains(">c = 7,21 cm</text>"));
    }
}
