use eframe::egui::{
    self,
    Color32,
    RichText,
};

/// Dracula palette, dark only.
#[derive(Clone)]
pub struct Theme {
    pub background: Color32,
    pub current_line: Color32,
    pub foreground: Color32,
    pub comment: Color32,
    pub purple: Color32,
    pub orange: Color32,
    pub red: Color32,
    pub green: Color32,
}

impl Theme {
    pub fn dracula() -> Self {
        Self {
            background: Color32::from_rgb(0x28, 0x2a, 0x36),
            current_line: Color32::from_rgb(0x44, 0x47, 0x5a),
            foreground: Color32::from_rgb(0xf8, 0xf8, 0xf2),
            comment: Color32::from_rgb(0x62, 0x72, 0xa4),
            purple: Color32::from_rgb(0xbd, 0x93, 0xf9),
            orange: Color32::from_rgb(0xff, 0xb8, 0x6c),
            red: Color32::from_rgb(0xff, 0x55, 0x55),
            green: Color32::from_rgb(0x50, 0xfa, 0x7b),
        }
    }

    pub fn heading(&self, content: &str) -> RichText {
        RichText::new(content).color(self.purple)
    }

    pub fn bold(&self, content: &str) -> RichText {
        RichText::new(content).color(self.orange).strong()
    }

    pub fn muted(&self, content: &str) -> RichText {
        RichText::new(content).color(self.comment)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dracula()
    }
}

pub fn set_theme(ctx: &egui::Context, theme: &Theme) {
    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = theme.background;
    visuals.window_fill = theme.background;
    visuals.extreme_bg_color = theme.current_line;
    visuals.override_text_color = Some(theme.foreground);
    visuals.selection.bg_fill = theme.comment;
    visuals.hyperlink_color = theme.purple;
    ctx.set_visuals(visuals);
}
