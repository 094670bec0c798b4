/// Uniform scale that fits fixed-resolution content into a measured container.
///
/// The factor is always derived from the latest valid container width and the
/// current native width. Non-positive or non-finite measurements are ignored so
/// the previous factor survives transient zero-size layouts.
#[derive(Clone, Debug, PartialEq)]
pub struct ScaleState {
    measured_width: Option<f64>,
    native_width: f64,
    scale: f64,
}

impl ScaleState {
    pub fn new(native_width: f64) -> Self {
        Self {
            measured_width: None,
            native_width: if is_usable(native_width) { native_width } else { 1.0 },
            scale: 1.0,
        }
    }

    /// Records a container measurement. Returns whether the scale changed.
    pub fn observe(&mut self, width: f64) -> bool {
        if !is_usable(width) {
            return false;
        }
        self.measured_width = Some(width);
        self.recompute()
    }

    /// Switches to a new native width and recomputes from the last measurement.
    pub fn rebase(&mut self, native_width: f64) -> bool {
        if !is_usable(native_width) || native_width == self.native_width {
            return false;
        }
        self.native_width = native_width;
        self.recompute()
    }

    fn recompute(&mut self) -> bool {
        let Some(width) = self.measured_width else {
            return false;
        };
        let next = width / self.native_width;
        if next == self.scale {
            return false;
        }
        self.scale = next;
        true
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[cfg(test)]
    pub fn native_width(&self) -> f64 {
        self.native_width
    }

    #[cfg(test)]
    pub fn measured_width(&self) -> Option<f64> {
        self.measured_width
    }

    #[cfg(test)]
    /// Width the native content occupies on screen after scaling.
    pub fn rendered_width(&self) -> f64 {
        self.native_width * self.scale
    }
}

fn is_usable(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn scale_is_width_over_native() {
        let mut state = ScaleState::new(1440.0);
        for width in [1.0, 320.0, 720.0, 1440.0, 2880.0, 913.37] {
            state.observe(width);
            assert!((state.scale() - width / 1440.0).abs() < EPS);
            assert!((state.rendered_width() - width).abs() < 1e-6);
        }
    }

    #[test]
    fn degenerate_widths_keep_previous_scale() {
        let mut state = ScaleState::new(390.0);
        state.observe(195.0);
        let before = state.scale();
        for width in [0.0, -10.0, f64::NAN, f64::INFINITY] {
            assert!(!state.observe(width));
            assert_eq!(state.scale(), before);
        }
        assert_eq!(state.measured_width(), Some(195.0));
    }

    #[test]
    fn initial_degenerate_measurement_keeps_unit_scale() {
        let mut state = ScaleState::new(390.0);
        assert!(!state.observe(0.0));
        assert_eq!(state.scale(), 1.0);
    }

    #[test]
    fn observe_is_idempotent() {
        let mut state = ScaleState::new(1440.0);
        assert!(state.observe(600.0));
        let first = state.scale();
        assert!(!state.observe(600.0));
        assert_eq!(state.scale(), first);
    }

    #[test]
    fn rebase_recomputes_with_new_native_width() {
        let mut state = ScaleState::new(1440.0);
        state.observe(500.0);
        assert!(state.rebase(390.0));
        assert!((state.scale() - 500.0 / 390.0).abs() < EPS);
        assert!(!state.rebase(0.0));
        assert_eq!(state.native_width(), 390.0);
    }

    #[test]
    fn rebase_before_measurement_only_stores_native_width() {
        let mut state = ScaleState::new(1440.0);
        assert!(!state.rebase(390.0));
        assert_eq!(state.scale(), 1.0);
        state.observe(390.0);
        assert!((state.scale() - 1.0).abs() < EPS);
    }
}
