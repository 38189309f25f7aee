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

//! configure popup formats and visibility of the GNSS metadata fields in feature service and web map items

use std::{path::Path, time::Duration};
use serde::{Serialize,Deserialize};
use serde_with::{serde_as, DurationSeconds};
use gnss_common::config::load_config_or_default;

pub mod errors;
pub use errors::{GnssPopupError, Result};

pub mod field_rules;
pub use field_rules::{FieldFormat, FieldRule, FormatMode, GNSS_FIELD_RULES, rule_for, gnss_field_names};

pub mod popup;
pub use popup::{ItemKind, configure_layer_popup};

pub mod portal;
pub use portal::{Portal, ItemDetails};

pub mod configure;
pub use configure::{ConfigureOptions, ConfigureOutcome, configure_feature_service, configure_webmap};

pub mod cli;

pub const CONFIG_FILE: &str = "gnss_popup.ron";

/* #region config  ************************************************************************************/

#[serde_as]
#[derive(Deserialize,Serialize,Debug,Clone,PartialEq)]
#[serde(default)]
pub struct PortalConfig {
    pub referer: String,
    pub token_expiration: u32, // minutes

    #[serde_as(as = "DurationSeconds<u64>")]
    pub request_timeout: Duration,

    pub user_agent: String,
    pub search_limit: usize, // max number of web map search results we look at
}

impl Default for PortalConfig {
    fn default()->Self {
        PortalConfig {
            referer: "https://www.arcgis.com".to_string(),
            token_expiration: 60,
            request_timeout: Duration::from_secs(60),
            user_agent: concat!( env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
            search_limit: 10,
        }
    }
}

/// load config from explicit path, the config dirs, or use the defaults
pub fn load_portal_config (opt_path: Option<&Path>)->Result<PortalConfig> {
    Ok( load_config_or_default( opt_path, CONFIG_FILE)? )
}

/* #endregion config */
