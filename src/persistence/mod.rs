use std::{
    fs,
    path::PathBuf,
};

use serde::{
    de::DeserializeOwned,
    Deserialize,
    Serialize,
};

use crate::core::VerbarioError;

const APP_NAME: &str = "verbario";

pub const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct SettingsData {
    pub remote_base_url: Option<String>,
}

impl SettingsData {
    /// The configured remote base URL, or None when unset or blank.
    pub fn remote_url(&self) -> Option<&str> {
        let url = self.remote_base_url.as_deref()?.trim();
        if url.is_empty() {
            None
        } else {
            Some(url)
        }
    }
}

pub fn get_app_data_dir() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        let app_dir = data_dir.join(APP_NAME);
        let _ = fs::create_dir_all(&app_dir);
        app_dir
    } else {
        PathBuf::from(".")
    }
}

pub fn get_data_file_path(filename: &str) -> PathBuf {
    get_app_data_dir().join(filename)
}

pub fn save_json<T: Serialize>(data: &T, filename: &str) -> Result<(), VerbarioError> {
    let file_path = get_data_file_path(filename);
    let json = serde_json::to_string_pretty(data)?;
    fs::write(&file_path, json)?;
    Ok(())
}

pub fn load_json<T: DeserializeOwned + Default>(filename: &str) -> Result<T, VerbarioError> {
    let file_path = get_data_file_path(filename);

    if !file_path.exists() {
        return Ok(T::default());
    }

    let json = fs::read_to_string(&file_path)?;
    let data: T = serde_json::from_str(&json)?;
    Ok(data)
}

pub fn load_json_or_default<T: DeserializeOwned + Default>(filename: &str) -> T {
    match load_json::<T>(filename) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("Failed to load {}: {}. Using defaults.", filename, e);
            T::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_round_trip_through_json() {
        let settings =
            SettingsData { remote_base_url: Some("https://example.test/store".to_string()) };
        let json = serde_json::to_string(&settings).unwrap();
        let back: SettingsData = serde_json::from_str(&json).unwrap();
        assert_eq!(back.remote_url(), Some("https://example.test/store"));
    }

    #[test]
    fn remote_url_treats_blank_as_unset() {
        assert_eq!(SettingsData::default().remote_url(), None);
        let blank = SettingsData { remote_base_url: Some("  ".to_string()) };
        assert_eq!(blank.remote_url(), None);
    }
}
