use wgpu::RenderPass;
use wgpu_text::glyph_brush::ab_glyph::FontVec;
use wgpu_text::{BrushBuilder, TextBrush};

use crate::scene::Layout;
use crate::theme::Theme;
use crate::wgpu::text_state::TextState;
use crate::wgpu::Wgpu;
use crate::AppError;

/// Likely font locations, tried in order. The repo ships no glyph assets,
/// so the first readable system font wins; labels are cosmetic and the
/// scene renders without them when none is found.
#[cfg(not(target_arch = "wasm32"))]
const FONT_CANDIDATES: &[&str] = &[
    "assets/font.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation-sans/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\segoeui.ttf",
];

pub struct TextRenderer {
    text_state: TextState,
    brush: TextBrush<FontVec>,
}

impl TextRenderer {
    pub fn new(mobile_device: bool, theme: Theme, wgpu: &Wgpu) -> Result<Self, AppError> {
        let font = load_font()?;
        let (width, height) = wgpu.surface_size();
        let brush = BrushBuilder::using_font(font).build(
            &wgpu.device,
            width,
            height,
            wgpu.surface_format(),
        );
        let text_state = TextState::new(mobile_device, theme, width, height);
        Ok(TextRenderer { brush, text_state })
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.text_state.set_theme(theme);
    }

    pub fn set_keyboard_legend(&mut self, legend: String) {
        self.text_state.set_keyboard_legend(legend);
    }

    pub fn set_layout(&mut self, layout: &Layout, wgpu: &Wgpu) {
        self.brush
            .resize_view(layout.width, layout.height, &wgpu.queue);
        self.text_state.set_layout(layout);
    }

    pub fn draw<'a>(&'a mut self, render_pass: &mut RenderPass<'a>, wgpu: &Wgpu) {
        self.brush
            .queue(
                &wgpu.device,
                &wgpu.queue,
                self.text_state.sections().clone(),
            )
            .unwrap();
        self.brush.draw(render_pass);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn load_font() -> Result<FontVec, AppError> {
    let bytes = FONT_CANDIDATES
        .iter()
        .find_map(|path| std::fs::read(path).ok())
        .ok_or_else(|| AppError::Font("no candidate font file found".to_string()))?;
    FontVec::try_from_vec(bytes).map_err(|error| AppError::Font(error.to_string()))
}

#[cfg(target_arch = "wasm32")]
fn load_font() -> Result<FontVec, AppError> {
    Err(AppError::Font(
        "font files are not reachable on the web target".to_string(),
    ))
}
