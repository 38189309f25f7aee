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

//! configure GNSS metadata field popup and visibility of a web map operational layer.
//! The web map is looked up by name, an exact title match is preferred over other search results

use std::process::ExitCode;
use anyhow::{Context,Result};
use clap::Parser;

use gnss_popup::{configure_webmap, ConfigureOutcome, cli::{self, PortalArgs, RunArgs}};

#[derive(Parser, Debug)]
#[command(version, about = "Configure GNSS metadata fields visibility and popup of a web map layer")]
struct Args {
    #[command(flatten)]
    portal: PortalArgs,

    /// web map name
    webmap_name: String,

    #[command(flatten)]
    run: RunArgs,
}

#[tokio::main]
async fn main()->ExitCode {
    let args = Args::parse();
    args.run.init_logging();

    let result = run( &args).await;
    cli::report( result, &args.run)
}

async fn run (args: &Args)->Result<ConfigureOutcome> {
    let config = args.run.load_config().context("loading config")?;
    let portal = cli::sign_in( &config, &args.portal).await.context("signing in")?;

    Ok( configure_webmap( &portal, &args.webmap_name, args.run.layer_index, &args.run.configure_options()).await? )
}
