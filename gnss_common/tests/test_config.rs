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

use std::path::{Path,PathBuf};
use serde::Deserialize;
use gnss_common::{config::{load_config_path, load_config_or_default, find_config_file, ConfigError}, fs::set_filepath_contents};

#[derive(Deserialize,Debug,PartialEq)]
#[serde(default)]
struct TestConfig {
    name: String,
    retries: u32,
}

impl Default for TestConfig {
    fn default()->Self { TestConfig { name: "default".to_string(), retries: 3 } }
}

fn tmp_path (filename: &str)->PathBuf {
    std::env::temp_dir().join( format!("gnss_common_test_{}", std::process::id())).join(filename)
}

#[test]
fn test_load_config_path () {
    let path = tmp_path("test_config.ron");
    set_filepath_contents( &path, b"// a comment\nTestConfig( name: \"test\" )\n").unwrap();

    let config: TestConfig = load_config_path( &path).unwrap();
    assert_eq!( config, TestConfig { name: "test".to_string(), retries: 3 }); // missing fields use defaults

    let config: TestConfig = load_config_or_default( Some(path.as_path()), "test_config.ron").unwrap();
    assert_eq!( config.name, "test");
}

#[test]
fn test_config_errors () {
    let missing = tmp_path("missing.ron");
    let res: Result<TestConfig,_> = load_config_path( &missing);
    assert!( matches!( res, Err(ConfigError::ConfigNotFoundError(_))), "got {res:?}");

    // an explicit path that does not exist does not fall back to the default
    let res: Result<TestConfig,_> = load_config_or_default( Some(missing.as_path()), "missing.ron");
    assert!( matches!( res, Err(ConfigError::ConfigNotFoundError(_))), "got {res:?}");

    let malformed = tmp_path("malformed.ron");
    set_filepath_contents( &malformed, b"TestConfig( name: 42 ").unwrap();
    let res: Result<TestConfig,_> = load_config_path( &malformed);
    assert!( matches!( res, Err(ConfigError::RonError(_))), "got {res:?}");
}

#[test]
fn test_default_config () {
    assert!( find_config_file("gnss_common_no_such_config.ron").is_none());

    let config: TestConfig = load_config_or_default( None::<&Path>, "gnss_common_no_such_config.ron").unwrap();
    assert_eq!( config, TestConfig::default());
}
