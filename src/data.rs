//! Boot ROM variants and their embedded byte buffers.

/// Identifies which boot ROM image is (or should be) loaded into
/// the bottom of address space before the cartridge takes over at
/// 0x0100.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BootRom {
    /// Original DMG boot ROM.
    Dmg,
    /// Original Super Game Boy boot ROM (DMG-compatible).
    Sgb,
    /// Open source DMG-compatible boot ROM replacement.
    DmgBootix,
    /// Open source MGB (Game Boy Pocket) compatible boot ROM replacement.
    MgbBootix,
    /// Original CGB boot ROM.
    Cgb,
    /// Custom CGB-compatible boot ROM replacement.
    CgbBoytacean,
    /// A boot ROM loaded from an arbitrary, caller-provided buffer or
    /// file path whose DMG/CGB compatibility is not tracked.
    Other,
    /// No boot ROM, the emulator starts at the post-boot power-up state.
    None,
}

impl BootRom {
    /// Returns `true` if this boot ROM can be run in DMG mode.
    pub fn is_dmg_compat(&self) -> bool {
        matches!(
            self,
            Self::Dmg | Self::Sgb | Self::DmgBootix | Self::MgbBootix | Self::Other | Self::None
        )
    }

    /// Returns `true` if this boot ROM can be run in CGB mode.
    pub fn is_cgb_compat(&self) -> bool {
        matches!(self, Self::Cgb | Self::CgbBoytacean | Self::Other | Self::None)
    }
}

/// Original DMG boot ROM, 256 bytes.
pub static DMG_BOOT: &[u8] = include_bytes!("../res/boot/dmg_boot.bin");

/// Original Super Game Boy boot ROM, 256 bytes.
pub static SGB_BOOT: &[u8] = include_bytes!("../res/boot/sgb_boot.bin");

/// Open source DMG-compatible boot ROM replacement, 256 bytes.
pub static DMG_BOOTIX: &[u8] = include_bytes!("../res/boot/dmg_bootix.bin");

/// Open source MGB-compatible boot ROM replacement, 256 bytes.
pub static MGB_BOOTIX: &[u8] = include_bytes!("../res/boot/mgb_bootix.bin");

/// Original CGB boot ROM, 2304 bytes.
pub static CGB_BOOT: &[u8] = include_bytes!("../res/boot/cgb_boot.bin");

/// Custom CGB-compatible boot ROM replacement, 2304 bytes.
pub static CGB_BOYTACEAN: &[u8] = include_bytes!("../res/boot/cgb_boytacean.bin");
