use winit::dpi::PhysicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

mod app;
mod constants;

use app::NativeApp;
use constants::{WINDOW_SIZE, WINDOW_TITLE};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title(WINDOW_TITLE)
        .with_inner_size(PhysicalSize::new(WINDOW_SIZE[0], WINDOW_SIZE[1]))
        .build(&event_loop)?;
    let size = window.inner_size();
    let mut app = NativeApp::new(size.width, size.height);
    let mut title = app.title();
    log::info!("drag-native starting ({}x{})", size.width, size.height);

    event_loop.run(move |event, elwt| {
        elwt.set_control_flow(ControlFlow::Wait);
        let Event::WindowEvent { event, .. } = event else {
            return;
        };
        if matches!(event, WindowEvent::CloseRequested) {
            elwt.exit();
            return;
        }
        if let Err(e) = app.handle(&event) {
            log::error!("[drag] {}", e);
        }
        for ev in app.drain_events() {
            log::info!("[event] {} {}", ev.kind(), ev.object());
        }
        window.set_cursor_icon(app.cursor_icon());
        let next = app.title();
        if next != title {
            window.set_title(&next);
            title = next;
        }
    })?;
    Ok(())
}
