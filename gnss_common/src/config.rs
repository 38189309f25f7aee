/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

//! RON based configuration lookup.
//!
//! Configs are looked up in this order:
//!   1. an explicit path (usually from a `--config` command line option)
//!   2. `$GNSS_POPUP_CONFIG_DIR/<filename>`
//!   3. `./configs/<filename>`
//!
//! If none of them exists the caller falls back to the `Default` of the config type.

use std::{env, path::{Path,PathBuf}};
use serde::Deserialize;
use thiserror::Error;

use crate::{debug, fs::filepath_contents};

pub const CONFIG_DIR_ENV: &str = "GNSS_POPUP_CONFIG_DIR";
pub const LOCAL_CONFIG_DIR: &str = "configs";

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Error,Debug)]
pub enum ConfigError {
    #[error("IO error {0}")]
    IOError( #[from] std::io::Error),

    #[error("config RON error {0}")]
    RonError( #[from] ron::error::SpannedError),

    #[error("config not found {0}")]
    ConfigNotFoundError(String),
}

/// deserialize a RON config from a known file path
pub fn load_config_path<C,P> (path: P) -> Result<C> where C: for <'a> Deserialize<'a>, P: AsRef<Path> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err( ConfigError::ConfigNotFoundError( format!("{path:?}")))
    }

    let data = filepath_contents( &path)?;
    Ok( ron::de::from_bytes( data.as_slice())? )
}

/// find the first existing config file for `filename` in our lookup dirs
pub fn find_config_file (filename: &str) -> Option<PathBuf> {
    let mut candidates: Vec<PathBuf> = Vec::with_capacity(2);
    if let Ok(dir) = env::var(CONFIG_DIR_ENV) {
        candidates.push( Path::new(&dir).join(filename));
    }
    candidates.push( Path::new(LOCAL_CONFIG_DIR).join(filename));

    candidates.into_iter().find( |p| p.is_file())
}

/// load config from explicit path if given, otherwise from the first lookup dir that has `filename`,
/// otherwise return the Default value of the config type.
/// Note that an explicit path that does not exist is an error - we do not silently replace what the user asked for
pub fn load_config_or_default<C> (opt_path: Option<&Path>, filename: &str) -> Result<C> where C: for <'a> Deserialize<'a> + Default {
    if let Some(path) = opt_path {
        debug!("loading config from {:?}", path);
        load_config_path( path)

    } else if let Some(path) = find_config_file( filename) {
        debug!("loading config from {:?}", path);
        load_config_path( path)

    } else {
        debug!("no {} found, using default config", filename);
        Ok( C::default() )
    }
}
