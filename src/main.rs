use clap::Parser;
use winit::dpi::PhysicalSize;
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::Window;

use animate_notification::application::Application;
use animate_notification::theme::Theme;
use animate_notification::{AppError, Settings};

#[derive(Parser, Debug)]
#[command(version, about = "A swinging notification bell demo")]
struct Args {
    /// Display mode at startup
    #[arg(long, value_enum, default_value_t = Theme::Light)]
    theme: Theme,

    /// Duration of one sway cycle in milliseconds
    #[arg(long, default_value_t = 1000)]
    cycle_ms: u32,
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();
    run(Settings {
        theme: args.theme,
        cycle_ms: args.cycle_ms,
    })
}

fn run(settings: Settings) -> Result<(), AppError> {
    #[cfg(target_arch = "wasm32")]
    {
        std::panic::set_hook(Box::new(console_error_panic_hook::hook));
        console_log::init_with_level(log::Level::Info).expect("Couldn't initialize logger");
    }
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let event_loop = EventLoop::with_user_event().build()?;
    event_loop.set_control_flow(ControlFlow::Poll);
    let radio = event_loop.create_proxy();

    #[allow(unused_mut)]
    let mut window_attributes = Window::default_attributes()
        .with_title("Animate Notification")
        .with_inner_size(PhysicalSize::new(480, 800));
    #[cfg(target_arch = "wasm32")]
    {
        use winit::platform::web::WindowAttributesExtWebSys;
        window_attributes = window_attributes.with_append(true);
    }

    let mut application = Application::new(window_attributes, settings, radio);
    event_loop.run_app(&mut application)?;
    Ok(())
}
