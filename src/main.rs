use pixart::app::command_handler::CommandHandler;
use pixart::app::config::{EditorConfig, CONFIG_FILE_NAME};
use pixart::app::state::AppState;
use pixart::render::compositor::{Compositor, Viewport};
use pixart::ui::framework::GuiFramework;
use pixart::ui::gui::Gui;

use pixels::{Pixels, SurfaceTexture};
use rust_i18n::t;
use std::path::Path;
use std::time::Instant;
use winit::{
    dpi::LogicalSize,
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

rust_i18n::i18n!("locales", fallback = "en");

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = EditorConfig::load_or_default(Path::new(CONFIG_FILE_NAME));
    rust_i18n::set_locale(&config.locale);

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(t!("app.title"))
        .with_inner_size(LogicalSize::new(1024.0, 768.0))
        .with_min_inner_size(LogicalSize::new(400.0, 300.0))
        .build(&event_loop)?;

    let window_size = window.inner_size();
    let mut app_state = AppState::new(config);
    app_state.view.update_viewport(window_size.width as f32, window_size.height as f32);

    let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, &window);
    let mut pixels = match Pixels::new(window_size.width, window_size.height, surface_texture) {
        Ok(p) => p,
        Err(e) => {
            log::error!("pixels init failed: {}", e);
            rfd::MessageDialog::new()
                .set_title(&t!("error.hardware_init_title"))
                .set_description(&t!("error.hardware_init_desc", error = e.to_string()))
                .set_level(rfd::MessageLevel::Error)
                .show();
            return Err(e.into());
        }
    };

    let mut framework = GuiFramework::new(
        window_size.width,
        window_size.height,
        window.scale_factor() as f32,
        &pixels,
        Gui::new(),
        &event_loop,
    );

    let mut last_frame_inst = Instant::now();
    let mut buffer_size = (0u32, 0u32);

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Poll;

        match event {
            Event::WindowEvent { event, window_id } if window_id == window.id() => {
                let _ = framework.handle_event(&event);

                match event {
                    WindowEvent::CloseRequested => *control_flow = ControlFlow::Exit,
                    WindowEvent::Resized(size) => {
                        if size.width > 0 && size.height > 0 {
                            let _ = pixels.resize_surface(size.width, size.height);
                            framework.resize(size.width, size.height);
                            app_state.view.update_viewport(size.width as f32, size.height as f32);
                        }
                    }
                    WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                        framework.scale_factor(scale_factor as f32);
                    }
                    _ => {}
                }
            }
            Event::MainEventsCleared => window.request_redraw(),
            Event::RedrawRequested(_) => {
                let now = Instant::now();
                let dt = now.duration_since(last_frame_inst);
                last_frame_inst = now;

                // 回放按帧推进
                app_state.tick(dt);

                if CommandHandler::execute_all(&mut app_state) {
                    *control_flow = ControlFlow::Exit;
                    return;
                }

                framework.prepare(&window);
                framework.run_ui(&mut app_state);

                let width = app_state.view.width as u32;
                let height = app_state.view.height as u32;
                if width == 0 || height == 0 { return; }

                if buffer_size != (width, height) {
                    if let Err(e) = pixels.resize_buffer(width, height) {
                        log::error!("resize buffer failed: {}", e);
                        *control_flow = ControlFlow::Exit;
                        return;
                    }
                    buffer_size = (width, height);
                    app_state.view.needs_full_redraw = true;
                }

                if app_state.view.needs_full_redraw {
                    let viewport = Viewport::from_view(&app_state.view, app_state.engine.grid(), width, height);
                    Compositor::render(app_state.engine.grid(), pixels.frame_mut(), viewport);
                    app_state.view.needs_full_redraw = false;
                }

                let render_result = pixels.render_with(|encoder, render_target, context| {
                    context.scaling_renderer.render(encoder, render_target);
                    framework.render(encoder, render_target, context);
                    Ok(())
                });

                if let Err(e) = render_result {
                    log::error!("render failed: {}", e);
                    *control_flow = ControlFlow::Exit;
                }
            }
            _ => (),
        }
    });
}
