use std::sync::atomic::{AtomicBool, Ordering};

use esp_idf_svc::nvs::{EspCustomNvsPartition, EspNvs, NvsCustom};

use crate::string_error::StringError;
use crate::watering;

static IS_NVS_TAKEN: AtomicBool = AtomicBool::new(false);

const PARTITION_NAME: &str = "config";
const NAMESPACE: &str = "config";

pub const KEY_NAME: &str = "NAME";
pub const KEY_DRY_THRESHOLD: &str = "DRYTHRES";
pub const KEY_SETTLE: &str = "SETTLE";
pub const KEY_SWEEP_PAUSE: &str = "SWEEPPAUSE";

/// Device settings stored in the custom `config` NVS partition. Every
/// getter falls back to the compiled-in default when the key is unset;
/// the keys are provisioned at flash time.
pub struct NvsConfiguration {
    nvs: EspNvs<NvsCustom>,
}

impl NvsConfiguration {
    pub fn new() -> Result<Self, StringError> {
        if IS_NVS_TAKEN.load(Ordering::Relaxed) {
            return Err(StringError("MainConfiguration NVS already taken"));
        }

        IS_NVS_TAKEN.store(true, Ordering::Relaxed);

        let nvs_custom = match EspCustomNvsPartition::take(PARTITION_NAME) {
            Ok(nvs) => nvs,
            Err(_) => return Err(StringError("Fail to take partition")),
        };

        match EspNvs::new(nvs_custom, NAMESPACE, true) {
            Ok(nvs) => Ok(Self { nvs }),
            Err(_) => Err(StringError("Failed to create EspNvs. Bad namespace ?")),
        }
    }

    pub fn get_name(&self) -> String {
        self.read_string(KEY_NAME, "")
    }

    pub fn get_dry_threshold(&self) -> u16 {
        self.read_u16(KEY_DRY_THRESHOLD, watering::DEFAULT_DRY_THRESHOLD)
    }

    pub fn get_settle_ms(&self) -> u32 {
        self.read_u32(KEY_SETTLE, watering::DEFAULT_SETTLE_MS)
    }

    pub fn get_sweep_pause_ms(&self) -> u32 {
        self.read_u32(KEY_SWEEP_PAUSE, watering::DEFAULT_SWEEP_PAUSE_MS)
    }

    pub fn read_string(&self, key: &str, default: &str) -> String {
        let size = self.nvs.str_len(key).unwrap_or(None).unwrap_or(0);
        let mut buf = vec![0; size];

        if size == 0 {
            return default.to_string();
        }

        self.nvs
            .get_str(key, &mut buf)
            .unwrap_or(None)
            .unwrap_or(default)
            .to_string()
    }

    pub fn read_u16(&self, key: &str, default: u16) -> u16 {
        self.nvs.get_u16(key).unwrap_or(None).unwrap_or(default)
    }

    pub fn read_u32(&self, key: &str, default: u32) -> u32 {
        self.nvs.get_u32(key).unwrap_or(None).unwrap_or(default)
    }
}

impl Drop for NvsConfiguration {
    fn drop(&mut self) {
        IS_NVS_TAKEN.store(false, Ordering::Relaxed);
    }
}
