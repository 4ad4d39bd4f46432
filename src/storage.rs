// Copyright 2026 Muvon Un Limited
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::DATA_DIR_ENV;

/// Get the system-wide storage directory for faqrank
/// `$FAQRANK_DATA_DIR` wins; otherwise follows the XDG Base Directory
/// specification on Unix-like systems and platform conventions elsewhere
pub fn get_system_storage_dir() -> Result<PathBuf> {
    let base_dir = if let Ok(data_dir) = std::env::var(DATA_DIR_ENV) {
        PathBuf::from(data_dir)
    } else if cfg!(target_os = "macos") {
        // macOS: ~/.local/share/faqrank
        dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Unable to determine home directory"))?
            .join(".local")
            .join("share")
            .join("faqrank")
    } else if cfg!(target_os = "windows") {
        // Windows: %APPDATA%/faqrank
        dirs::data_dir()
            .ok_or_else(|| anyhow::anyhow!("Unable to determine data directory"))?
            .join("faqrank")
    } else if let Ok(xdg_data_home) = std::env::var("XDG_DATA_HOME") {
        PathBuf::from(xdg_data_home).join("faqrank")
    } else {
        dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Unable to determine home directory"))?
            .join(".local")
            .join("share")
            .join("faqrank")
    };

    if !base_dir.exists() {
        fs::create_dir_all(&base_dir)?;
    }

    Ok(base_dir)
}

/// Get the system config file path
pub fn get_system_config_path() -> Result<PathBuf> {
    Ok(get_system_storage_dir()?.join("config.toml"))
}

/// Directory for rotated log files
pub fn get_log_dir() -> Result<PathBuf> {
    Ok(get_system_storage_dir()?.join("logs"))
}

/// Resolve a catalog file name against `base_dir` unless it is already absolute
pub fn resolve_catalog_path(base_dir: &Path, file: &str) -> PathBuf {
    let path = Path::new(file);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}
