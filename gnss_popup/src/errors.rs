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

use thiserror::Error;
use gnss_common::{config::ConfigError, net::NetError};

pub type Result<T> = std::result::Result<T,GnssPopupError>;

#[derive(Error,Debug)]
pub enum GnssPopupError {
    #[error("IO error {0}")]
    IOError( #[from] std::io::Error),

    #[error("net error {0}")]
    NetError( #[from] NetError),

    #[error("JSON error {0}")]
    JsonError( #[from] serde_json::Error),

    #[error("config error {0}")]
    ConfigError( #[from] ConfigError),

    /// the error envelope the portal returns with a 200 status
    #[error("portal error {code}: {message}{}", fmt_details(.details))]
    PortalError { code: i64, message: String, details: Vec<String> },

    #[error("no such item {0}")]
    NoSuchItem(String),

    #[error("no such layer {0}")]
    NoSuchLayer(usize),

    #[error("layer {0} has no popupInfo")]
    NoPopupInfo(usize),

    #[error("invalid item document: {0}")]
    InvalidDocument(String),

    #[error("operation failed {0}")]
    OpFailed(String)
}

fn fmt_details (details: &[String])->String {
    if details.is_empty() { String::new() } else { format!(" ({})", details.join("; ")) }
}

pub fn invalid_document (msg: impl ToString)->GnssPopupError {
    GnssPopupError::InvalidDocument(msg.to_string())
}

macro_rules! op_failed {
    ($fmt:literal $(, $arg:expr )* ) => {
        $crate::errors::GnssPopupError::OpFailed( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use op_failed;
