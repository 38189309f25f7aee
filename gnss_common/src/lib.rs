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

//! shared plumbing for the GNSS popup tools: error/cli sugar macros, logging, http form requests,
//! RON config lookup and file helpers

pub mod macros;
pub mod log;
pub mod fs;
pub mod config;
pub mod net;

/// true if the string is empty or only contains whitespace
#[inline] pub fn is_blank (s: &str)->bool { s.trim().is_empty() }
