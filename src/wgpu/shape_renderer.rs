use bytemuck::cast_slice;
use glam::vec2;
use wgpu::util::DeviceExt;
use wgpu::RenderPass;

use crate::bell::Bell;
use crate::scene::Layout;
use crate::theme::{Theme, CLAPPER_RED};
use crate::wgpu::shape::{
    bell_outline, fan, rotate_about, rounded_bottom_rect_outline, rounded_rect_outline,
    ShapeVertex,
};
use crate::wgpu::Wgpu;

const MAX_SHAPE_VERTICES: usize = 512;
const BUTTON_CORNER_DP: f32 = 12.0;
const WEIGHT_CORNER_DP: f32 = 6.0;

/// Draws the whole screen's flat geometry: button, bell glyph, clapper
/// weight. Vertices are rebuilt on the CPU every frame from the current
/// sway angles and written into one buffer.
pub struct ShapeRenderer {
    vertices: Vec<ShapeVertex>,
    pipeline: wgpu::RenderPipeline,
    buffer: wgpu::Buffer,
}

impl ShapeRenderer {
    pub fn new(wgpu: &Wgpu) -> Self {
        let vertices = vec![ShapeVertex::default(); MAX_SHAPE_VERTICES];
        let pipeline = wgpu
            .device
            .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some("Shape Pipeline"),
                layout: Some(&wgpu.pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &wgpu.shader,
                    entry_point: Some("shape_vertex"),
                    compilation_options: Default::default(),
                    buffers: &[ShapeVertex::desc()],
                },
                fragment: Some(wgpu::FragmentState {
                    module: &wgpu.shader,
                    entry_point: Some("shape_fragment"),
                    compilation_options: Default::default(),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: wgpu.surface_format(),
                        blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                }),
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleList,
                    strip_index_format: None,
                    ..Default::default()
                },
                depth_stencil: None,
                multisample: wgpu::MultisampleState::default(),
                multiview_mask: None,
                cache: None,
            });
        let buffer = wgpu
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Shape Buffer"),
                contents: cast_slice(&vertices),
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            });
        Self {
            vertices,
            pipeline,
            buffer,
        }
    }

    pub fn update(&mut self, wgpu: &Wgpu, layout: &Layout, bell: &Bell, theme: Theme) {
        let primary = bell.primary_angle();
        let reverse = bell.reverse_angle();
        self.vertices.clear();

        self.vertices.extend(fan(
            &rounded_rect_outline(layout.button, BUTTON_CORNER_DP * layout.dp),
            theme.button_fill(),
        ));

        // the icon swings about its top-center, like a hanging bell
        let pivot = vec2(layout.container.center().x, layout.icon_top());
        let mut glyph = bell_outline(pivot.x, pivot.y, layout.icon_height());
        rotate_about(&mut glyph, pivot, primary);
        self.vertices.extend(fan(&glyph, theme.icon_tint()));

        // two-joint pendulum: the weight counter-swings about its own
        // center, then the whole assembly swings about the container center
        let weight_rect = layout.weight_rect();
        let mut weight = rounded_bottom_rect_outline(weight_rect, WEIGHT_CORNER_DP * layout.dp);
        rotate_about(&mut weight, weight_rect.center(), primary);
        rotate_about(&mut weight, layout.container.center(), reverse);
        self.vertices.extend(fan(&weight, CLAPPER_RED));

        self.vertices.truncate(MAX_SHAPE_VERTICES);
        wgpu.queue
            .write_buffer(&self.buffer, 0, cast_slice(&self.vertices));
    }

    pub fn render<'a>(&'a self, render_pass: &mut RenderPass<'a>) {
        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_vertex_buffer(0, self.buffer.slice(..));
        render_pass.draw(0..self.vertices.len() as u32, 0..1);
    }
}
