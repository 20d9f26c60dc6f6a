use ratatui::style::Color;

pub const PRIMARY: Color = Color::from_u32(0x000d9488);
pub const SECONDARY: Color = Color::from_u32(0x005eead4);
pub const NEUTRAL: Color = Color::from_u32(0x0094a3b8);
pub const MUTED: Color = Color::from_u32(0x00475569);
pub const TEXT: Color = Color::from_u32(0x00e2e8f0);
pub const BACKGROUND: Color = Color::from_u32(0x000f172a);
pub const DANGER: Color = Color::from_u32(0x00ef4444);
