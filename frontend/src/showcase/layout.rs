use super::device::DeviceMode;

/// How the showcase arranges its catalog for the current viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutMode {
    /// Single column, each card carries its own inline preview.
    Stacked,
    /// Project list beside one shared preview panel.
    Split,
}

impl LayoutMode {
    pub fn for_viewport(viewport_width: f64, breakpoint_px: f64) -> Self {
        if viewport_width < breakpoint_px {
            LayoutMode::Stacked
        } else {
            LayoutMode::Split
        }
    }

    /// Narrow viewports always preview on the phone frame. Wide ones honour
    /// whatever the visitor picked.
    pub fn effective_mode(self, selected: DeviceMode) -> DeviceMode {
        match self {
            LayoutMode::Stacked => DeviceMode::Mobile,
            LayoutMode::Split => selected,
        }
    }

    pub fn is_stacked(self) -> bool {
        self == LayoutMode::Stacked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_is_exclusive() {
        assert_eq!(LayoutMode::for_viewport(767.9, 768.0), LayoutMode::Stacked);
        assert_eq!(LayoutMode::for_viewport(768.0, 768.0), LayoutMode::Split);
        assert_eq!(LayoutMode::for_viewport(1920.0, 768.0), LayoutMode::Split);
    }

    #[test]
    fn narrow_viewport_forces_mobile() {
        let layout = LayoutMode::for_viewport(375.0, 768.0);
        assert_eq!(layout.effective_mode(DeviceMode::Desktop), DeviceMode::Mobile);
        assert_eq!(layout.effective_mode(DeviceMode::Mobile), DeviceMode::Mobile);
    }

    #[test]
    fn wide_viewport_keeps_selection() {
        let layout = LayoutMode::for_viewport(1280.0, 768.0);
        assert_eq!(layout.effective_mode(DeviceMode::Desktop), DeviceMode::Desktop);
        assert_eq!(layout.effective_mode(DeviceMode::Mobile), DeviceMode::Mobile);
    }
}
