use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, Touch, TouchPhase, WindowEvent};

use crate::{AppEvent, PointerChange, Radio};

/// Converts raw mouse and touch events into pointer changes on the radio.
/// Where the tap landed is the scene's business, not ours.
pub struct PointerHandler {
    touch_started: Option<PhysicalPosition<f64>>,
    radio: Radio,
}

impl PointerHandler {
    pub fn new(radio: Radio) -> Self {
        Self {
            touch_started: None,
            radio,
        }
    }

    pub fn process_window_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::Touch(touch_event) => {
                self.handle_touch_event(touch_event);
            }
            WindowEvent::CursorMoved { position, .. } => {
                AppEvent::PointerChanged(PointerChange::Moved(*position)).send(&self.radio);
            }
            WindowEvent::MouseInput { state, .. } => {
                let change = match state {
                    ElementState::Pressed => PointerChange::Pressed,
                    ElementState::Released => PointerChange::Released,
                };
                AppEvent::PointerChanged(change).send(&self.radio);
            }
            _ => {}
        }
    }

    fn handle_touch_event(&mut self, touch: &Touch) {
        match touch.phase {
            TouchPhase::Started => {
                self.touch_started = Some(touch.location);
            }
            TouchPhase::Ended => {
                if self.touch_started.take().is_some() {
                    AppEvent::PointerChanged(PointerChange::TouchTapped(touch.location))
                        .send(&self.radio);
                }
            }
            TouchPhase::Cancelled => {
                self.touch_started = None;
            }
            TouchPhase::Moved => {}
        }
    }
}
