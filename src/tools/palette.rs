use egui::Color32;

/// The fixed set of colors offered by the color picker
pub const PALETTE: [(Color32, &str); 16] = [
    (Color32::from_rgb(0, 0, 0), "Black"),
    (Color32::from_rgb(255, 255, 255), "White"),
    (Color32::from_rgb(158, 158, 158), "Grey"),
    (Color32::from_rgb(121, 85, 72), "Brown"),
    (Color32::from_rgb(244, 67, 54), "Red"),
    (Color32::from_rgb(233, 30, 99), "Pink"),
    (Color32::from_rgb(156, 39, 176), "Purple"),
    (Color32::from_rgb(103, 58, 183), "Deep purple"),
    (Color32::from_rgb(63, 81, 181), "Indigo"),
    (Color32::from_rgb(33, 150, 243), "Blue"),
    (Color32::from_rgb(0, 188, 212), "Cyan"),
    (Color32::from_rgb(0, 150, 136), "Teal"),
    (Color32::from_rgb(76, 175, 80), "Green"),
    (Color32::from_rgb(205, 220, 57), "Lime"),
    (Color32::from_rgb(255, 235, 59), "Yellow"),
    (Color32::from_rgb(255, 152, 0), "Orange"),
];

pub fn palette_color_name(color: Color32) -> Option<&'static str> {
    PALETTE
        .iter()
        .find(|(entry, _)| *entry == color)
        .map(|(_, name)| *name)
}
