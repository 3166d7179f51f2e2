// Catppuccin Mocha color palette, shared by every page

use ratatui::style::Color;

pub const BASE: Color = Color::Rgb(30, 30, 46); // #1e1e2e
pub const TEXT: Color = Color::Rgb(205, 214, 244); // #cdd6f4
pub const SUBTEXT0: Color = Color::Rgb(166, 173, 200); // #a6adc8
pub const SUBTEXT1: Color = Color::Rgb(186, 194, 222); // #bac2de
pub const SURFACE1: Color = Color::Rgb(69, 71, 90); // #45475a
pub const SURFACE2: Color = Color::Rgb(88, 91, 112); // #585b70
pub const BLUE: Color = Color::Rgb(137, 180, 250); // #89b4fa
pub const LAVENDER: Color = Color::Rgb(180, 190, 254); // #b4befe
pub const SKY: Color = Color::Rgb(137, 220, 235); // #89dceb
pub const GREEN: Color = Color::Rgb(166, 227, 161); // #a6e3a1
pub const YELLOW: Color = Color::Rgb(249, 226, 175); // #f9e2af
pub const RED: Color = Color::Rgb(243, 139, 168); // #f38ba8
pub const MAUVE: Color = Color::Rgb(203, 166, 247); // #cba6f7
