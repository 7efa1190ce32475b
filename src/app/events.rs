use crate::core::error::CoreError;
use crate::tools::brush::PointerButton;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    PointerDown { index: usize, button: PointerButton },
    PointerEnter { index: usize },
    PointerUp,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEffect {
    None,
    RedrawCanvas,
    /// Rejected because a replay is running.
    Busy,
    Error(CoreError),
}

impl EngineEffect {
    pub fn merge(self, other: EngineEffect) -> EngineEffect {
        match (self, other) {
            (EngineEffect::Error(e), _) => EngineEffect::Error(e),
            (_, EngineEffect::Error(e)) => EngineEffect::Error(e),
            (EngineEffect::RedrawCanvas, _) | (_, EngineEffect::RedrawCanvas) => EngineEffect::RedrawCanvas,
            (EngineEffect::Busy, _) | (_, EngineEffect::Busy) => EngineEffect::Busy,
            (EngineEffect::None, EngineEffect::None) => EngineEffect::None,
        }
    }

    pub fn is_redraw(&self) -> bool {
        matches!(self, EngineEffect::RedrawCanvas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_priority() {
        let err = EngineEffect::Error(CoreError::InvalidColor("x".into()));
        assert_eq!(EngineEffect::RedrawCanvas.merge(err.clone()), err);
        assert_eq!(EngineEffect::Busy.merge(EngineEffect::RedrawCanvas), EngineEffect::RedrawCanvas);
        assert_eq!(EngineEffect::None.merge(EngineEffect::Busy), EngineEffect::Busy);
        assert_eq!(EngineEffect::None.merge(EngineEffect::None), EngineEffect::None);
    }
}
