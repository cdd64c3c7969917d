use ratatui::style::Color;

use crate::theme::Theme;

/// Light palette for the design-system brand
pub fn light() -> Theme {
    Theme {
        bg0: Color::Rgb(0xff, 0xff, 0xff),
        bg1: Color::Rgb(0xf6, 0xf8, 0xfa),
        bg2: Color::Rgb(0xea, 0xee, 0xf2),
        bg3: Color::Rgb(0xd0, 0xd7, 0xde),
        fg0: Color::Rgb(0x1f, 0x23, 0x28),
        fg1: Color::Rgb(0x42, 0x4a, 0x53),
        grey0: Color::Rgb(0x8c, 0x95, 0x9f),
        grey1: Color::Rgb(0x6e, 0x77, 0x81),
        grey2: Color::Rgb(0x57, 0x60, 0x6a),
        accent: Color::Rgb(0x09, 0x69, 0xda),
        brand: Color::Rgb(0x1a, 0x7f, 0x37),
        error: Color::Rgb(0xcf, 0x22, 0x2e),
        success: Color::Rgb(0x1a, 0x7f, 0x37),
        warning: Color::Rgb(0x9a, 0x67, 0x00),
    }
}
