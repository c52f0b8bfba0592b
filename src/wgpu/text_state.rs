use std::default::Default;

use wgpu_text::glyph_brush::{
    BuiltInLineBreaker, HorizontalAlign, Layout as TextLayout, OwnedSection, OwnedText,
    VerticalAlign,
};

use crate::scene::Layout;
use crate::theme::Theme;

#[derive(Clone, Debug, Copy)]
pub enum SectionName {
    Title = 0,
    ButtonLabel = 1,
    Legend = 2,
}

impl SectionName {
    const fn count() -> usize {
        3
    }
}

const TITLE: &str = "Animate Notification";
const BUTTON_LABEL: &str = "Repeat Animation!";

/// Owns the on-screen text: the title bar text, the button caption, and
/// the keyboard legend. Rebuilt whenever layout or theme changes.
#[derive(Clone, Debug)]
pub struct TextState {
    mobile_device: bool,
    width: f32,
    height: f32,
    dp: f32,
    theme: Theme,
    button_center: [f32; 2],
    keyboard_legend: Option<String>,
    sections: [Option<OwnedSection>; SectionName::count()],
}

enum TextInstance {
    Nothing,
    Normal(String),
    Large(String),
}

impl TextInstance {
    pub fn scale_dp(&self) -> f32 {
        match self {
            TextInstance::Nothing => 10.0,
            TextInstance::Normal(_) => 22.0,
            TextInstance::Large(_) => 34.0,
        }
    }
}

impl TextState {
    pub fn new(mobile_device: bool, theme: Theme, width: u32, height: u32) -> Self {
        let mut fresh = Self {
            mobile_device,
            width: width as f32,
            height: height as f32,
            dp: 1.0,
            theme,
            button_center: [width as f32 / 2.0, height as f32 / 2.0],
            keyboard_legend: None,
            sections: Default::default(),
        };
        fresh.update_sections();
        fresh
    }

    pub fn set_layout(&mut self, layout: &Layout) {
        self.width = layout.width;
        self.height = layout.height;
        self.dp = layout.dp;
        let center = layout.button.center();
        self.button_center = [center.x, center.y];
        self.update_sections();
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.update_sections();
    }

    pub fn set_keyboard_legend(&mut self, legend: String) {
        self.keyboard_legend = Some(legend);
        self.update_sections();
    }

    pub fn sections(&self) -> Vec<&OwnedSection> {
        self.sections.iter().flatten().collect()
    }

    fn update_sections(&mut self) {
        use TextInstance::*;
        self.update_section(
            SectionName::Title,
            Large(TITLE.to_string()),
            self.theme.text(),
        );
        self.update_section(
            SectionName::ButtonLabel,
            Normal(BUTTON_LABEL.to_string()),
            self.theme.button_label(),
        );
        // no keyboard on a touch device
        let legend = if self.mobile_device {
            Nothing
        } else {
            match &self.keyboard_legend {
                None => Nothing,
                Some(legend) => Normal(legend.clone()),
            }
        };
        self.update_section(SectionName::Legend, legend, self.theme.text());
    }

    fn update_section(
        &mut self,
        section_name: SectionName,
        text_instance: TextInstance,
        color: [f32; 4],
    ) {
        use TextInstance::*;
        let section = self.create_section(section_name);
        let scale = text_instance.scale_dp() * self.dp;
        self.sections[section_name as usize] = Some(match text_instance {
            Nothing => section,
            Normal(text) | Large(text) => section.add_text(
                OwnedText::new(text)
                    .with_color(color)
                    .with_scale(scale),
            ),
        })
    }

    fn create_section(&self, section_name: SectionName) -> OwnedSection {
        OwnedSection::default()
            .with_layout(Self::create_layout(section_name))
            .with_bounds(self.create_bounds(section_name))
            .with_screen_position(self.create_position(section_name))
    }

    fn create_layout(section_name: SectionName) -> TextLayout<BuiltInLineBreaker> {
        use SectionName::*;
        TextLayout::default()
            .v_align(match section_name {
                Title => VerticalAlign::Top,
                ButtonLabel => VerticalAlign::Center,
                Legend => VerticalAlign::Bottom,
            })
            .h_align(HorizontalAlign::Center)
    }

    fn create_bounds(&self, _section_name: SectionName) -> [f32; 2] {
        [self.width, self.height]
    }

    fn create_position(&self, section_name: SectionName) -> [f32; 2] {
        use SectionName::*;
        let middle_h = self.width / 2.0;
        let margin = 30.0 * self.dp;
        match section_name {
            Title => [middle_h, margin],
            ButtonLabel => self.button_center,
            Legend => [middle_h, self.height - margin],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section_color(state: &TextState, section_name: SectionName) -> [f32; 4] {
        state.sections[section_name as usize]
            .as_ref()
            .expect("section exists")
            .text
            .first()
            .expect("section has text")
            .extra
            .color
    }

    #[test]
    fn sections_are_colored_for_the_constructed_theme() {
        let dark = TextState::new(false, Theme::Dark, 480, 800);
        assert_eq!(section_color(&dark, SectionName::Title), Theme::Dark.text());
        assert_eq!(
            section_color(&dark, SectionName::ButtonLabel),
            Theme::Dark.button_label()
        );

        let light = TextState::new(false, Theme::Light, 480, 800);
        assert_eq!(
            section_color(&light, SectionName::Title),
            Theme::Light.text()
        );
    }

    #[test]
    fn theme_change_recolors_the_sections() {
        let mut state = TextState::new(false, Theme::Light, 480, 800);
        state.set_theme(Theme::Dark);
        assert_eq!(
            section_color(&state, SectionName::Title),
            Theme::Dark.text()
        );
    }
}
