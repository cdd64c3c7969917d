use ratatui::style::Color;

use crate::theme::Theme;

/// Dark palette for the design-system brand
pub fn dark() -> Theme {
    Theme {
        bg0: Color::Rgb(0x0d, 0x11, 0x17),
        bg1: Color::Rgb(0x16, 0x1b, 0x22),
        bg2: Color::Rgb(0x21, 0x26, 0x2d),
        bg3: Color::Rgb(0x30, 0x36, 0x3d),
        fg0: Color::Rgb(0xe6, 0xed, 0xf3),
        fg1: Color::Rgb(0xc9, 0xd1, 0xd9),
        grey0: Color::Rgb(0x48, 0x4f, 0x58),
        grey1: Color::Rgb(0x6e, 0x76, 0x81),
        grey2: Color::Rgb(0x8b, 0x94, 0x9e),
        accent: Color::Rgb(0x58, 0xa6, 0xff),
        brand: Color::Rgb(0x3f, 0xb9, 0x50),
        error: Color::Rgb(0xf8, 0x51, 0x49),
        success: Color::Rgb(0x3f, 0xb9, 0x50),
        warning: Color::Rgb(0xd2, 0x99, 0x22),
    }
}
