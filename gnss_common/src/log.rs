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

use tracing::Level;
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

// re-exported so that the logging macros below do not require a direct tracing dependency
pub use tracing;

/*
 * we intercept logging/tracing macros here to have a central place where we can remove/replace them
 */

#[macro_export]
macro_rules! trace {
    ( $( $id:ident = $e:expr ),* ) => { $crate::log::tracing::trace!( $( $id = $e ),* ) };
    ( $( $e: expr ),* ) => { $crate::log::tracing::trace!( $( $e ),* ) }
}

#[macro_export]
macro_rules! debug {
    ( $( $id:ident = $e:expr ),* ) => { $crate::log::tracing::debug!( $( $id = $e ),* ) };
    ( $( $e: expr ),* ) => { $crate::log::tracing::debug!( $( $e ),* ) }
}

#[macro_export]
macro_rules! info {
    ( $( $id:ident = $e:expr ),* ) => { $crate::log::tracing::info!( $( $id = $e ),* ) };
    ( $( $e: expr ),* ) => { $crate::log::tracing::info!( $( $e ),* ) }
}

#[macro_export]
macro_rules! warn {
    ( $( $id:ident = $e:expr ),* ) => { $crate::log::tracing::warn!( $( $id = $e ),* ) };
    ( $( $e: expr ),* ) => { $crate::log::tracing::warn!( $( $e ),* ) }
}

#[macro_export]
macro_rules! error {
    ( $( $id:ident = $e:expr ),* ) => { $crate::log::tracing::error!( $( $id = $e ),* ) };
    ( $( $e: expr ),* ) => { $crate::log::tracing::error!( $( $e ),* ) }
}

/// initialize a global fmt subscriber that writes to stderr, stdout is reserved for tool output.
/// RUST_LOG takes precedence over the provided default level.
/// Note this only succeeds if there is no global subscriber set yet, which is why we do not report an error
pub fn init_tracing (default_level: Level) {
    let filter = EnvFilter::builder()
        .with_default_directive( LevelFilter::from_level(default_level).into())
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter( filter)
        .with_writer( std::io::stderr)
        .with_target( false)
        .without_time()
        .try_init();
}

/// default level for our command line tools
pub fn cli_level (verbose: bool)->Level {
    if verbose { Level::DEBUG } else { Level::INFO }
}
