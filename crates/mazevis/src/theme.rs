use eframe::egui::Color32;

#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color32,
    pub text: Color32,
    pub info: Color32,
    pub grid_line: Color32,
    pub wall: Color32,
    pub floor: Color32,
    pub start: Color32,
    pub goal: Color32,
    pub visited: Color32,
    pub visited_active: Color32,
    pub path_trail: Color32,
    pub path_active: Color32,
    pub toast_background: Color32,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            background: Color32::from_rgb(20, 23, 32),
            text: Color32::from_rgb(235, 235, 235),
            info: Color32::from_rgb(144, 164, 174),
            grid_line: Color32::from_rgb(15, 17, 24),
            wall: Color32::from_rgb(48, 52, 70),
            floor: Color32::from_rgb(223, 223, 223),
            start: Color32::from_rgb(102, 187, 106),
            goal: Color32::from_rgb(239, 83, 80),
            visited: Color32::from_rgb(100, 181, 246),
            visited_active: Color32::from_rgb(187, 222, 251),
            path_trail: Color32::from_rgb(255, 213, 79),
            path_active: Color32::from_rgb(255, 241, 118),
            toast_background: Color32::from_rgb(0x2D, 0x2D, 0x2D),
        }
    }

    pub fn light() -> Self {
        Self {
            background: Color32::WHITE,
            text: Color32::from_rgb(0x1A, 0x1A, 0x2E),
            info: Color32::from_rgb(84, 110, 122),
            grid_line: Color32::from_rgb(200, 200, 200),
            wall: Color32::from_rgb(55, 71, 79),
            floor: Color32::from_rgb(250, 250, 250),
            start: Color32::from_rgb(67, 160, 71),
            goal: Color32::from_rgb(229, 57, 53),
            visited: Color32::from_rgb(66, 165, 245),
            visited_active: Color32::from_rgb(21, 101, 192),
            path_trail: Color32::from_rgb(255, 179, 0),
            path_active: Color32::from_rgb(255, 111, 0),
            toast_background: Color32::from_rgb(0xF5, 0xF5, 0xF5),
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Apply opacity to a color
    pub fn with_opacity(color: Color32, opacity: f32) -> Color32 {
        Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), (opacity * 255.0) as u8)
    }
}
