use crate::app::events::{EngineEffect, InputEvent};
use crate::app::state::AppState;

pub struct InputHandler;

impl InputHandler {
    pub fn dispatch(app: &mut AppState, event: InputEvent) {
        let effect = app.engine.handle_input(event);
        Self::handle_engine_effect(app, effect);
    }

    pub fn handle_engine_effect(app: &mut AppState, effect: EngineEffect) {
        match effect {
            EngineEffect::None | EngineEffect::Busy => {}
            EngineEffect::RedrawCanvas => {
                app.view.needs_full_redraw = true;
            }
            EngineEffect::Error(e) => {
                log::warn!("{}", e);
                app.ui.error_message = Some(e.to_string());
            }
        }
    }
}
