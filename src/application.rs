use std::sync::Arc;

use log::info;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes, WindowId};

use crate::keyboard::Keyboard;
use crate::pointer::PointerHandler;
use crate::scene::Scene;
use crate::wgpu::Wgpu;
use crate::{AppEvent, Radio, Settings};

pub struct Application {
    window_attributes: WindowAttributes,
    window: Option<Arc<Window>>,
    scene: Option<Scene>,
    settings: Settings,
    keyboard: Keyboard,
    pointer_handler: PointerHandler,
    radio: Radio,
    auto_toggled: bool,
}

impl Application {
    pub fn new(window_attributes: WindowAttributes, settings: Settings, radio: Radio) -> Self {
        Self {
            window_attributes,
            window: None,
            scene: None,
            settings,
            keyboard: Keyboard::new(radio.clone()).with_actions(),
            pointer_handler: PointerHandler::new(radio.clone()),
            radio,
            auto_toggled: false,
        }
    }

    fn refresh_legend(&mut self) {
        if let Some(scene) = &mut self.scene {
            let legend = self.keyboard.legend(&scene.bell_state());
            scene.set_keyboard_legend(legend);
        }
    }
}

impl ApplicationHandler<AppEvent> for Application {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let window = Arc::new(
            event_loop
                .create_window(self.window_attributes.clone())
                .expect("create window"),
        );
        self.window = Some(window.clone());
        let mobile_device = cfg!(target_arch = "wasm32");
        Wgpu::create_and_send(mobile_device, window, self.radio.clone());
    }

    fn user_event(&mut self, event_loop: &ActiveEventLoop, event: AppEvent) {
        match event {
            AppEvent::ContextCreated {
                wgpu,
                mobile_device,
            } => {
                self.scene = Some(Scene::new(wgpu, self.settings, mobile_device));
                self.refresh_legend();
                // the bell rings once as soon as it appears
                if !self.auto_toggled {
                    self.auto_toggled = true;
                    AppEvent::Toggle.send(&self.radio);
                }
            }
            AppEvent::Toggle => {
                if let Some(scene) = &mut self.scene {
                    scene.toggle();
                    info!("Bell is now {}", scene.bell_state());
                }
                self.refresh_legend();
            }
            AppEvent::FlipTheme => {
                if let Some(scene) = &mut self.scene {
                    scene.flip_theme();
                    info!("Theme is now {}", scene.theme());
                }
            }
            AppEvent::PointerChanged(change) => {
                if let Some(scene) = &mut self.scene {
                    scene.pointer_changed(change, &self.radio);
                }
            }
            AppEvent::ExitRequested => {
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if let Some(scene) = &self.scene {
                    self.keyboard.handle_key_event(event, &scene.bell_state());
                }
            }
            WindowEvent::Resized(size) => {
                if let Some(scene) = &mut self.scene {
                    scene.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => {}
            _ => {
                self.pointer_handler.process_window_event(&event);
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(scene) = &mut self.scene {
            scene.redraw();
        }
    }
}
