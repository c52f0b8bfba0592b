use std::fmt::Display;

use winit::event::KeyEvent;
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::bell::ToggleState;
use crate::{AppEvent, Radio};

struct KeyAction {
    code: KeyCode,
    description: String,
    app_event: AppEvent,
    radio: Radio,
    is_active_in: Box<dyn Fn(&ToggleState) -> bool>,
}

impl KeyAction {
    pub fn execute(&self) {
        self.app_event.clone().send(&self.radio);
    }
}

impl Display for KeyAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description)
    }
}

pub struct Keyboard {
    radio: Radio,
    actions: Vec<KeyAction>,
}

impl Keyboard {
    pub fn new(radio: Radio) -> Self {
        Self {
            radio,
            actions: Default::default(),
        }
    }

    pub fn with_actions(mut self) -> Self {
        self.add_action(
            KeyCode::Space,
            "Space to ring the bell",
            AppEvent::Toggle,
            Box::new(|state| matches!(state, ToggleState::Idle)),
        );
        self.add_action(
            KeyCode::Space,
            "Space to settle the bell",
            AppEvent::Toggle,
            Box::new(|state| matches!(state, ToggleState::Move)),
        );
        self.add_action(
            KeyCode::KeyD,
            "D for dark/light",
            AppEvent::FlipTheme,
            Box::new(|_| true),
        );
        self.add_action(
            KeyCode::Escape,
            "ESC to quit",
            AppEvent::ExitRequested,
            Box::new(|_| true),
        );
        self
    }

    pub fn handle_key_event(&self, key_event: KeyEvent, toggle_state: &ToggleState) {
        if key_event.state.is_pressed() {
            if let KeyEvent {
                physical_key: PhysicalKey::Code(code),
                ..
            } = key_event
            {
                self.actions
                    .iter()
                    .filter(|action| action.code == code && (action.is_active_in)(toggle_state))
                    .for_each(|action| action.execute());
            }
        }
    }

    pub fn legend(&self, toggle_state: &ToggleState) -> Vec<String> {
        self.actions
            .iter()
            .filter(|action| (action.is_active_in)(toggle_state))
            .map(|action| action.description.clone())
            .collect()
    }

    fn add_action(
        &mut self,
        code: KeyCode,
        description: &str,
        app_event: AppEvent,
        is_active_in: Box<dyn Fn(&ToggleState) -> bool>,
    ) {
        self.actions.push(KeyAction {
            code,
            description: description.into(),
            app_event,
            radio: self.radio.clone(),
            is_active_in,
        });
    }
}
