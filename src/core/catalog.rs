use crate::error::{Result, SeleneError};

/// A downloadable artifact with a fixed destination filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub key: &'static str,
    pub name: &'static str,
    pub url: &'static str,
    pub filename: &'static str,
}

pub const CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        key: "twrp",
        name: "TWRP Recovery",
        url: "https://drive.google.com/uc?export=download&id=17ebo3DD077HihnncSpQ6X0beChycxJRu",
        filename: "twrp-selene.img",
    },
    CatalogEntry {
        key: "firmware_12",
        name: "Stock Firmware 12.5",
        url: "https://bigota.d.miui.com/V12.5.20.0.RKUMIXM/miui_SELENEGlobal_V12.5.20.0.RKUMIXM_37f0d4aaa7_11.0.zip",
        filename: "selene_12.5.20.zip",
    },
    CatalogEntry {
        key: "firmware_14",
        name: "Stock Firmware 14",
        url: "https://bigota.d.miui.com/V14.0.7.0.TKUMIXM/selene_global_images_V14.0.7.0.TKUMIXM_20240517.0000.00_13.0_global_63a8c6a62f.tgz",
        filename: "selene_14.0.7.tgz",
    },
    CatalogEntry {
        key: "mtkclient",
        name: "MTKClient",
        url: "https://github.com/bkerler/mtkclient/archive/refs/heads/main.zip",
        filename: "mtkclient-main.zip",
    },
    CatalogEntry {
        key: "payload_dumper",
        name: "Payload Dumper",
        url: "https://github.com/vm03/payload_dumper/archive/refs/heads/master.zip",
        filename: "payload_dumper-master.zip",
    },
    CatalogEntry {
        key: "adb",
        name: "ADB Platform Tools",
        url: "https://dl.google.com/android/repository/platform-tools-latest-linux.zip",
        filename: "platform-tools-latest-linux.zip",
    },
    CatalogEntry {
        key: "magisk",
        name: "Magisk",
        url: "https://github.com/topjohnwu/Magisk/releases/download/v27.0/Magisk-v27.0.apk",
        filename: "magisk27.apk",
    },
    CatalogEntry {
        key: "abootloop",
        name: "Anti-Bootloop",
        url: "https://github.com/Mishu-bepo/abootloop/releases/download/1.0/abootloop-1.0.zip",
        filename: "abootloop.zip",
    },
];

/// Custom ROM builds are picked by hand from this page.
pub const CUSTOM_ROM_PAGE: &str = "https://sourceforge.net/projects/hasan6034-builds/files/selene/";

pub const CUSTOM_ROM_DEFAULT_FILENAME: &str = "custom_rom.zip";

/// Menu choice 8.
pub const MAGISK_GROUP: &[&str] = &["magisk", "abootloop"];

/// Menu choice 9, in download order. The custom ROM is never part of it.
pub const DOWNLOAD_ALL: &[&str] = &[
    "twrp",
    "firmware_12",
    "firmware_14",
    "mtkclient",
    "payload_dumper",
    "adb",
    "magisk",
    "abootloop",
];

pub fn lookup(key: &str) -> Result<&'static CatalogEntry> {
    CATALOG
        .iter()
        .find(|entry| entry.key == key)
        .ok_or_else(|| SeleneError::unknown_entry(key))
}

/// Resolves a list of keys in order, failing on the first unknown one.
pub fn resolve(keys: &[&str]) -> Result<Vec<&'static CatalogEntry>> {
    keys.iter().map(|key| lookup(key)).collect()
}
