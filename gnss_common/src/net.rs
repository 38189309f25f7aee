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

//! common utility functions for network operations

use std::time::Duration;
use reqwest::{header::{HeaderValue,ACCEPT}, Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

use crate::{define_error, trace};

define_error!{ pub NetError =
    IOError(#[from] std::io::Error) : "IO error: {0}",
    NotFoundError(String) : "not found {0}",
    HttpError(#[from] reqwest::Error) : "http error: {0}",
    StatusError(StatusCode, String) : "response status {0} for {1}",
    UrlError(#[from] url::ParseError) : "invalid url: {0}",
    OpFailed(String) : "operation failed: {0}",
    ParseError(String) : "parse error: {0}"
}

pub type Result<T> = std::result::Result<T, NetError>;

/// create a reqwest client with a request timeout and our user agent
pub fn get_http_client (timeout: Duration, user_agent: &str) -> Result<Client> {
    Ok( Client::builder()
        .timeout( timeout)
        .user_agent( user_agent)
        .build()? )
}

/// parse a base url and append path segments, each of which is percent-encoded if required.
/// Empty segments are skipped, which lets callers pass optional path elements as ""
pub fn endpoint_url (base: &str, segments: &[&str]) -> Result<Url> {
    let mut url = Url::parse( base.trim_end_matches('/'))?;
    {
        let mut path = url.path_segments_mut()
            .map_err(|_| NetError::OpFailed(format!("not a base url: {base}")))?;
        path.pop_if_empty();
        for seg in segments.iter().filter(|s| !s.is_empty()) {
            path.push( seg);
        }
    }
    Ok(url)
}

/// POST a form-encoded query and deserialize the JSON response
pub async fn post_form_query<T> (client: &Client, url: Url, params: &[(&str,&str)]) -> Result<T> where T: DeserializeOwned {
    trace!("POST {}", url);

    let response = client.post( url.clone())
        .header( ACCEPT, HeaderValue::from_static("application/json"))
        .form( params)
        .send()
        .await?;

    match response.status() {
        status if status.is_success() => {
            from_json( response).await
        }
        StatusCode::NOT_FOUND => {
            Err( NetError::NotFoundError( url.to_string()))
        }
        other => {
            Err( NetError::StatusError( other, url.to_string()))
        }
    }
}

// the reqwest::Response::json() alternative does not preserve enough error information
pub async fn from_json<T> (response: Response)->Result<T> where T: DeserializeOwned {
    let bytes = response.bytes().await?;
    serde_json::from_slice( &bytes).map_err(|e| NetError::ParseError(e.to_string()))
}
