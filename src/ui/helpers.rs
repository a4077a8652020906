// src/ui/helpers.rs
use crate::model::{Classification, Tier};
use egui::{Button, Color32, RichText, Ui, Vec2};

pub const CORRECT: Color32 = Color32::from_rgb(60, 170, 90);
pub const INCORRECT: Color32 = Color32::from_rgb(200, 70, 70);
pub const PARTIAL: Color32 = Color32::from_rgb(220, 160, 40);

pub fn big_list_button(ui: &mut Ui, label: String, width: f32, height: f32, enabled: bool) -> bool {
    ui.add_enabled(enabled, Button::new(label).min_size(Vec2::new(width, height))).clicked()
}

pub fn tier_color(tier: Tier) -> Color32 {
    match tier {
        Tier::High => CORRECT,
        Tier::Medium => PARTIAL,
        Tier::Low => INCORRECT,
    }
}

pub fn tier_label(tier: Tier) -> &'static str {
    match tier {
        Tier::High => "Most effective",
        Tier::Medium => "Partly effective",
        Tier::Low => "Least effective",
    }
}

pub fn classification_color(classification: Classification) -> Color32 {
    match classification {
        Classification::Correct => CORRECT,
        Classification::Incorrect => INCORRECT,
        Classification::Tiered(tier) => tier_color(tier),
    }
}

/// Botón de respuesta. Una vez visible el feedback queda deshabilitado y,
/// si `highlight` trae color, se pinta con él.
pub fn option_button(
    ui: &mut Ui,
    text: &str,
    width: f32,
    enabled: bool,
    highlight: Option<Color32>,
) -> bool {
    let mut button = Button::new(RichText::new(text)).min_size(Vec2::new(width, 32.0));
    if let Some(color) = highlight {
        button = button.fill(color);
    }
    ui.add_enabled(enabled, button).clicked()
}
