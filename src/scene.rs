use glam::{Mat4, Vec2};
use instant::Instant;
use log::warn;
use winit::dpi::PhysicalPosition;

use crate::bell::{Bell, ToggleState};
use crate::theme::Theme;
use crate::wgpu::shape_renderer::ShapeRenderer;
use crate::wgpu::text_renderer::TextRenderer;
use crate::wgpu::Wgpu;
use crate::{AppEvent, PointerChange, Radio, Settings};

/// Cap on the per-frame delta so a stalled window does not teleport the
/// animation to its end pose.
const MAX_FRAME_MS: f32 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Screen layout in physical pixels, mirroring the original's geometry:
/// a button, then a 15dp gap, then a 120dp container holding the icon
/// and the clapper assembly, the whole stack centered.
#[derive(Debug, Clone, Copy)]
pub struct Layout {
    pub dp: f32,
    pub width: f32,
    pub height: f32,
    pub button: Rect,
    pub container: Rect,
}

const CONTAINER_DP: f32 = 120.0;
const ICON_DP: f32 = 100.0;
const BUTTON_WIDTH_DP: f32 = 180.0;
const BUTTON_HEIGHT_DP: f32 = 48.0;
const GAP_DP: f32 = 15.0;
const SPACER_FRACTION: f32 = 0.9;
const WEIGHT_WIDTH_DP: f32 = 24.0;

impl Layout {
    pub fn new(width: f32, height: f32) -> Self {
        // design size 480x800; dp scales with whichever dimension binds
        let dp = (height / 800.0).min(width / 480.0).max(0.1);
        let stack_height = (BUTTON_HEIGHT_DP + GAP_DP + CONTAINER_DP) * dp;
        let top = (height - stack_height) / 2.0;
        let button = Rect::new(
            (width - BUTTON_WIDTH_DP * dp) / 2.0,
            top,
            BUTTON_WIDTH_DP * dp,
            BUTTON_HEIGHT_DP * dp,
        );
        let container = Rect::new(
            (width - CONTAINER_DP * dp) / 2.0,
            top + (BUTTON_HEIGHT_DP + GAP_DP) * dp,
            CONTAINER_DP * dp,
            CONTAINER_DP * dp,
        );
        Self {
            dp,
            width,
            height,
            button,
            container,
        }
    }

    /// Icon top edge; also the icon's rotation pivot height.
    pub fn icon_top(&self) -> f32 {
        self.container.y + (CONTAINER_DP - ICON_DP) / 2.0 * self.dp
    }

    pub fn icon_height(&self) -> f32 {
        ICON_DP * self.dp
    }

    /// The clapper weight: the bottom 10% of the container, under the
    /// transparent spacer.
    pub fn weight_rect(&self) -> Rect {
        let height = self.container.height * (1.0 - SPACER_FRACTION);
        Rect::new(
            self.container.center().x - WEIGHT_WIDTH_DP * self.dp / 2.0,
            self.container.y + self.container.height * SPACER_FRACTION,
            WEIGHT_WIDTH_DP * self.dp,
            height,
        )
    }
}

pub struct Scene {
    wgpu: Wgpu,
    bell: Bell,
    theme: Theme,
    layout: Layout,
    shape_renderer: ShapeRenderer,
    text_renderer: Option<TextRenderer>,
    cursor: Option<PhysicalPosition<f64>>,
    pressed: bool,
    last_frame: Instant,
}

impl Scene {
    pub fn new(wgpu: Wgpu, settings: Settings, mobile_device: bool) -> Self {
        let (width, height) = wgpu.surface_size();
        let layout = Layout::new(width as f32, height as f32);
        let shape_renderer = wgpu.create_shape_renderer();
        let text_renderer = match wgpu.create_text_renderer(mobile_device, settings.theme) {
            Ok(text_renderer) => Some(text_renderer),
            Err(error) => {
                warn!("{error}, rendering without labels");
                None
            }
        };
        let mut scene = Self {
            wgpu,
            bell: Bell::new(settings.cycle_ms),
            theme: settings.theme,
            layout,
            shape_renderer,
            text_renderer,
            cursor: None,
            pressed: false,
            last_frame: Instant::now(),
        };
        scene.refresh_view();
        scene
    }

    pub fn toggle(&mut self) {
        self.bell.toggle();
    }

    pub fn bell_state(&self) -> ToggleState {
        self.bell.state()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn flip_theme(&mut self) {
        self.theme = self.theme.flipped();
        if let Some(text_renderer) = &mut self.text_renderer {
            text_renderer.set_theme(self.theme);
        }
    }

    pub fn set_keyboard_legend(&mut self, legend: Vec<String>) {
        if let Some(text_renderer) = &mut self.text_renderer {
            text_renderer.set_keyboard_legend(legend.join("   "));
        }
    }

    /// A tap lands either on the button or anywhere in the icon container;
    /// both mean toggle. Everything else is ignored.
    pub fn pointer_changed(&mut self, change: PointerChange, radio: &Radio) {
        match change {
            PointerChange::Moved(position) => self.cursor = Some(position),
            PointerChange::Pressed => self.pressed = true,
            PointerChange::Released => {
                if self.pressed {
                    self.pressed = false;
                    if let Some(position) = self.cursor {
                        self.tap(position, radio);
                    }
                }
            }
            PointerChange::TouchTapped(position) => self.tap(position, radio),
        }
    }

    fn tap(&self, position: PhysicalPosition<f64>, radio: &Radio) {
        let (x, y) = (position.x as f32, position.y as f32);
        if self.layout.button.contains(x, y) || self.layout.container.contains(x, y) {
            AppEvent::Toggle.send(radio);
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.wgpu.resize((width, height));
        self.refresh_view();
    }

    fn refresh_view(&mut self) {
        let (width, height) = self.wgpu.surface_size();
        let (width, height) = (width as f32, height as f32);
        self.layout = Layout::new(width, height);
        self.wgpu
            .update_view_matrix(Mat4::orthographic_rh(0.0, width, height, 0.0, -1.0, 1.0));
        if let Some(text_renderer) = &mut self.text_renderer {
            text_renderer.set_layout(&self.layout, &self.wgpu);
        }
    }

    /// One frame: advance elapsed time, recompute both angles, then draw.
    pub fn redraw(&mut self) {
        let now = Instant::now();
        let dt_ms = (now - self.last_frame).as_secs_f32() * 1000.0;
        self.last_frame = now;
        self.bell.advance(dt_ms.min(MAX_FRAME_MS));

        self.shape_renderer
            .update(&self.wgpu, &self.layout, &self.bell, self.theme);

        let frame = match self.wgpu.get_surface_texture() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let (width, height) = self.wgpu.surface_size();
                self.wgpu.resize((width, height));
                return;
            }
            Err(error) => {
                warn!("Dropping frame: {error}");
                return;
            }
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self.wgpu.create_encoder();
        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    depth_slice: None,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(background(self.theme)),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });
            self.wgpu.set_bind_group(&mut render_pass);
            self.shape_renderer.render(&mut render_pass);
            if let Some(text_renderer) = &mut self.text_renderer {
                text_renderer.draw(&mut render_pass, &self.wgpu);
            }
        }
        self.wgpu.queue.submit(Some(encoder.finish()));
        frame.present();
    }
}

fn background(theme: Theme) -> wgpu::Color {
    let [r, g, b, a] = theme.background();
    wgpu::Color {
        r: r as f64,
        g: g as f64,
        b: b as f64,
        a: a as f64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stack_is_centered_with_container_below_button() {
        let layout = Layout::new(480.0, 800.0);
        assert_eq!(layout.dp, 1.0);
        assert_eq!(layout.button.width, 180.0);
        assert_eq!(layout.container.width, 120.0);
        assert_eq!(
            layout.container.y,
            layout.button.y + layout.button.height + 15.0
        );
        let center_x = 240.0;
        assert_eq!(layout.button.center().x, center_x);
        assert_eq!(layout.container.center().x, center_x);
    }

    #[test]
    fn tap_targets_contain_their_own_centers() {
        let layout = Layout::new(1080.0, 1920.0);
        let button_center = layout.button.center();
        assert!(layout.button.contains(button_center.x, button_center.y));
        let container_center = layout.container.center();
        assert!(layout
            .container
            .contains(container_center.x, container_center.y));
        assert!(!layout.button.contains(0.0, 0.0));
    }

    #[test]
    fn weight_sits_in_the_bottom_tenth_of_the_container() {
        let layout = Layout::new(480.0, 800.0);
        let weight = layout.weight_rect();
        assert!((weight.height - 12.0).abs() < 1e-3);
        assert!((weight.y - (layout.container.y + 108.0)).abs() < 1e-3);
        assert_eq!(weight.center().x, layout.container.center().x);
    }

    #[test]
    fn icon_pivot_sits_at_top_center() {
        let layout = Layout::new(480.0, 800.0);
        assert!((layout.icon_height() - 100.0).abs() < 1e-3);
        assert!((layout.icon_top() - (layout.container.y + 10.0)).abs() < 1e-3);
    }
}
