use serde::{
    Deserialize,
    Serialize,
};

pub const SETTINGS_FILE: &str = "settings.json";

#[derive(Clone, Serialize, Deserialize)]
pub struct SettingsData {
    pub auto_flip: bool,
    pub flip_delay_ms: u64,
    /// Overrides the default dataset location when set. The progress file is
    /// kept next to the dataset it belongs to.
    #[serde(default)]
    pub dataset_path: Option<String>,
}

impl Default for SettingsData {
    fn default() -> Self {
        Self { auto_flip: true, flip_delay_ms: 3000, dataset_path: None }
    }
}
