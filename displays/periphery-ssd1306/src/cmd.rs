//! SSD1306 controller commands
//!
//! Command bytes and the fixed arguments the bring-up sequence sends with
//! them. Values follow the SSD1306 datasheet.

pub const DISPLAY_OFF: u8 = 0xAE;
pub const DISPLAY_ON: u8 = 0xAF;
pub const SET_DISPLAY_CLOCK_DIV: u8 = 0xD5;
pub const SET_MULTIPLEX: u8 = 0xA8;
pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
pub const SET_START_LINE: u8 = 0x40;
pub const CHARGE_PUMP: u8 = 0x8D;
pub const MEMORY_MODE: u8 = 0x20;
/// OR with 0x1 to reverse column mapping
pub const SEG_REMAP: u8 = 0xA0;
pub const COM_SCAN_INC: u8 = 0xC0;
pub const COM_SCAN_DEC: u8 = 0xC8;
pub const SET_COM_PINS: u8 = 0xDA;
pub const SET_CONTRAST: u8 = 0x81;
pub const SET_PRECHARGE: u8 = 0xD9;
pub const SET_VCOM_DETECT: u8 = 0xDB;
pub const DISPLAY_ALL_ON_RESUME: u8 = 0xA4;
pub const NORMAL_DISPLAY: u8 = 0xA6;
pub const DEACTIVATE_SCROLL: u8 = 0x2E;
pub const COLUMN_ADDR: u8 = 0x21;
pub const PAGE_ADDR: u8 = 0x22;

/// Arguments
pub const CLOCK_DIV_DEFAULT: u8 = 0x80;
pub const DISPLAY_OFFSET_NONE: u8 = 0x00;
pub const MEMORY_MODE_PAGE: u8 = 0x00;
pub const CHARGE_PUMP_EXTERNAL: u8 = 0x10;
pub const CHARGE_PUMP_INTERNAL: u8 = 0x14;
pub const PRECHARGE_EXTERNAL: u8 = 0x22;
pub const PRECHARGE_INTERNAL: u8 = 0xF1;
pub const VCOM_DETECT_DEFAULT: u8 = 0x40;

/// Supply modes
pub const EXTERNAL_VCC: u8 = 0x1;
pub const SWITCH_CAP_VCC: u8 = 0x2;

/// Default I2C address
pub const ADDRESS: u8 = 0x3D;
/// I2C address used by most 128x32 modules
pub const ADDRESS_128_32: u8 = 0x3C;

/// COM-pin configuration and contrast for one known panel size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelTuning {
    pub width: u16,
    pub height: u16,
    pub com_pins: u8,
    pub contrast_external: u8,
    pub contrast_internal: u8,
}

/// Panel sizes with known COM-pin/contrast settings
pub const PANEL_TUNINGS: &[PanelTuning] = &[
    PanelTuning {
        width: 128,
        height: 64,
        com_pins: 0x12,
        contrast_external: 0x9F,
        contrast_internal: 0xCF,
    },
    PanelTuning {
        width: 64,
        height: 48,
        com_pins: 0x12,
        contrast_external: 0x9F,
        contrast_internal: 0xCF,
    },
    PanelTuning {
        width: 128,
        height: 32,
        com_pins: 0x02,
        contrast_external: 0x8F,
        contrast_internal: 0x8F,
    },
    PanelTuning {
        width: 96,
        height: 16,
        com_pins: 0x02,
        contrast_external: 0x10,
        contrast_internal: 0xAF,
    },
];

/// Look up the tuning block for a panel size
pub fn panel_tuning(width: u16, height: u16) -> Option<&'static PanelTuning> {
    PANEL_TUNINGS
        .iter()
        .find(|t| t.width == width && t.height == height)
}
