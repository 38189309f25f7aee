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

use std::fs::File;
use std::io::{self,Read,Write,ErrorKind};
use std::path::Path;

use crate::io_error;

type Result<T> = std::result::Result<T,std::io::Error>;

pub fn ensure_dir (path: impl AsRef<Path>)->io::Result<()> {
    let path = path.as_ref();
    if !path.is_dir() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

pub fn filepath_contents <P: AsRef<Path>> (path: &P) -> Result<Vec<u8>> {
    let mut file = File::open(path)?;
    let len = file.metadata()?.len();
    if len > 0 {
        let mut contents: Vec<u8> = Vec::with_capacity(len as usize);
        file.read_to_end(&mut contents)?;
        Ok(contents)

    } else { Err(io_error!(ErrorKind::Other, "file empty: {:?}", path.as_ref())) }
}

/// create or truncate file and write contents. Parent dirs are created if they don't exist yet
pub fn set_filepath_contents (path: impl AsRef<Path>, new_contents: &[u8]) -> Result<()> {
    let path = path.as_ref();
    if let Some(dir) = path.parent() && !dir.as_os_str().is_empty() {
        ensure_dir( dir)?;
    }

    let mut file = File::create( path)?;
    file.write_all( new_contents)?;
    file.flush()
}
