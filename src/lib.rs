use std::fmt::{Display, Formatter, Result as FmtResult};

use winit::dpi::PhysicalPosition;

use crate::theme::Theme;
use crate::wgpu::Wgpu;

pub mod animation;
pub mod application;
pub mod bell;
pub mod keyboard;
pub mod pointer;
pub mod scene;
pub mod theme;
pub mod wgpu;

#[derive(Debug, Clone)]
pub enum AppEvent {
    ContextCreated { wgpu: Wgpu, mobile_device: bool },
    Toggle,
    FlipTheme,
    PointerChanged(PointerChange),
    ExitRequested,
}

pub type Radio = winit::event_loop::EventLoopProxy<AppEvent>;

impl AppEvent {
    pub fn send(self, radio: &Radio) {
        radio.send_event(self).expect("Radio working")
    }
}

#[derive(Debug, Clone)]
pub enum PointerChange {
    Moved(PhysicalPosition<f64>),
    Pressed,
    Released,
    TouchTapped(PhysicalPosition<f64>),
}

/// Errors that can occur while bringing the app up.
/// The animation itself has no failure modes.
#[derive(Debug)]
pub enum AppError {
    EventLoop(String),
    Font(String),
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            AppError::EventLoop(detail) => write!(f, "Event loop failure: {detail}"),
            AppError::Font(detail) => write!(f, "No usable font: {detail}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<winit::error::EventLoopError> for AppError {
    fn from(error: winit::error::EventLoopError) -> Self {
        AppError::EventLoop(error.to_string())
    }
}

/// Startup settings, resolved from the command line before the window opens.
/// Display mode is an explicit flag here rather than an ambient query.
#[derive(Debug, Clone, Copy)]
pub struct Settings {
    pub theme: Theme,
    pub cycle_ms: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            cycle_ms: 1000,
        }
    }
}
