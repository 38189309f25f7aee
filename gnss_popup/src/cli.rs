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

//! argument groups and result reporting shared by the configure_.. executables

use std::{io::{self,Write}, path::{Path,PathBuf}, process::ExitCode};
use serde_json::Value;
use clap::Args;
use gnss_common::{error, info, fs::set_filepath_contents, log::{init_tracing, cli_level}, net::get_http_client};

use crate::{PortalConfig, Portal, ConfigureOptions, ConfigureOutcome, FormatMode, load_portal_config};

#[derive(Args, Debug)]
pub struct PortalArgs {
    /// organization url
    pub url: String,

    /// organization username
    pub username: String,

    /// organization password
    pub password: String,
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// feature layer index
    #[arg(default_value_t = 0)]
    pub layer_index: usize,

    /// optional path of RON config file (default is configs/gnss_popup.ron if it exists)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// how rule formats are written into existing format properties (default depends on item type)
    #[arg(long, value_enum)]
    pub format_mode: Option<FormatMode>,

    /// configure the item document but don't update the item
    #[arg(long)]
    pub dry_run: bool,

    /// where to store the configured item document in a dry run (default is stdout)
    #[arg(short, long, requires = "dry_run")]
    pub output: Option<PathBuf>,

    /// run verbose
    #[arg(short, long)]
    pub verbose: bool,
}

impl RunArgs {
    pub fn configure_options (&self)->ConfigureOptions {
        ConfigureOptions { format_mode: self.format_mode, dry_run: self.dry_run }
    }

    pub fn init_logging (&self) {
        init_tracing( cli_level( self.verbose));
    }

    pub fn load_config (&self)->crate::Result<PortalConfig> {
        load_portal_config( self.config.as_deref())
    }
}

pub async fn sign_in (config: &PortalConfig, args: &PortalArgs)->crate::Result<Portal> {
    let client = get_http_client( config.request_timeout, &config.user_agent)?;
    Portal::sign_in( client, config, &args.url, &args.username, &args.password).await
}

/// the single place where we report the outcome of a configure run
pub fn report (result: anyhow::Result<ConfigureOutcome>, args: &RunArgs)->ExitCode {
    match result.and_then( |outcome| Ok( output_document( &outcome, args).map(|_| outcome)? )) {
        Ok(outcome) => {
            info!("{} ({}) layer {}: {}", outcome.item.title, outcome.item.id, outcome.layer_index, outcome.updated_fields.join(","));
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Error..{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn output_document (outcome: &ConfigureOutcome, args: &RunArgs)->crate::Result<()> {
    if args.dry_run {
        write_document( &outcome.document, args.output.as_deref(), &mut io::stdout().lock())?;
    }
    Ok(())
}

/// write the pretty printed JSON document to `path` if given, or to `out` otherwise.
/// Nothing else goes to `out`, our log output is on stderr
pub fn write_document (document: &Value, path: Option<&Path>, out: &mut impl Write)->crate::Result<()> {
    let json = serde_json::to_string_pretty( document)?;

    if let Some(path) = path {
        set_filepath_contents( path, json.as_bytes())?;
        info!("configured item document stored in {:?}", path);
    } else {
        writeln!( out, "{json}")?;
        out.flush()?;
    }
    Ok(())
}
