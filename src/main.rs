// src/main.rs

mod app;
mod rendering_lib;
mod ui;

use anyhow::Context as _;
use log::error;
use winit::{
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop, EventLoopWindowTarget},
    window::WindowBuilder,
};

use app::ChaosApp;
use chaos_game::Settings;

pub async fn run() -> anyhow::Result<()> {
    env_logger::init();

    let settings = Settings::from_env();

    let event_loop = EventLoop::new().context("failed to create the event loop")?;
    let window = std::sync::Arc::new(
        WindowBuilder::new()
            .with_title(settings.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(settings.window_width, settings.window_height))
            .build(&event_loop)
            .context("failed to open the window")?,
    );

    let mut app_state = ChaosApp::new(window.clone(), settings).await?;
    let mut last_time = std::time::Instant::now();

    event_loop
        .run(move |event, target: &EventLoopWindowTarget<()>| {
            target.set_control_flow(ControlFlow::Poll);

            match event {
                Event::WindowEvent {
                    ref event,
                    window_id,
                } if window_id == window.id() => {
                    if !app_state.handle_window_event(event, &window) {
                        match event {
                            WindowEvent::CloseRequested => {
                                target.exit();
                            }
                            WindowEvent::Resized(physical_size) => {
                                app_state.resize(*physical_size);
                            }
                            WindowEvent::RedrawRequested => { /* In AboutToWait */ }
                            _ => {}
                        }
                    }
                    if app_state.exit_requested() {
                        target.exit();
                    }
                }
                Event::AboutToWait => {
                    let now = std::time::Instant::now();
                    let dt = (now - last_time).as_secs_f32();
                    last_time = now;

                    app_state.update(dt);
                    match app_state.render(&window) {
                        Ok(_) => {}
                        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                            app_state.reconfigure();
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => {
                            error!("WGPU Out Of Memory! Exiting.");
                            target.exit();
                        }
                        Err(e) => error!("Surface error: {:?}", e),
                    }

                    if !target.exiting() {
                        window.request_redraw();
                    }
                }
                _ => {}
            }
        })
        .context("event loop terminated with an error")?;

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    run().await
}
