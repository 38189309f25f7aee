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

//! minimal client for the organization sharing REST API (ArcGIS Online / Enterprise portal).
//! All requests are form encoded POSTs with `f=json`, responses are checked for the error
//! envelope the portal uses instead of http status codes

use reqwest::{Client, Url};
use serde::{de::DeserializeOwned,Deserialize,Serialize};
use serde_json::Value;
use serde_with::{serde_as, DefaultOnNull};
use gnss_common::{debug, info, is_blank, net::{endpoint_url, post_form_query}};

use crate::PortalConfig;
use crate::errors::{GnssPopupError, Result, invalid_document, op_failed};
use crate::popup::ItemKind;

const SHARING_REST: [&str;2] = ["sharing", "rest"];
const F_JSON: (&str,&str) = ("f", "json");

/* #region response types *************************************************************************/

#[derive(Deserialize,Debug)]
pub struct TokenResponse {
    pub token: String,
    pub expires: Option<i64>, // epoch millis
    pub ssl: Option<bool>,
}

/// the item properties we need to locate and update an item
#[derive(Deserialize,Serialize,Debug,Clone,PartialEq)]
#[serde(rename_all="camelCase")]
pub struct ItemDetails {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(rename="type", default)]
    pub item_type: String,
    pub owner: String,
    pub owner_folder: Option<String>, // null if item is in the owner root folder
}

#[derive(Deserialize,Debug)]
pub struct SearchResponse {
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub results: Vec<ItemDetails>,
}

#[derive(Deserialize,Debug)]
pub struct UpdateResponse {
    pub success: bool,
    pub id: Option<String>,
}

#[derive(Deserialize,Debug)]
struct ErrorEnvelope {
    error: ErrorInfo
}

// portals send missing, null and empty properties alike
#[serde_as]
#[derive(Deserialize,Debug)]
struct ErrorInfo {
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    code: i64,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    message: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    details: Vec<String>,
}

/// turn a raw JSON response into the expected type, mapping the portal error envelope into a PortalError
pub fn from_portal_response<T> (response: Value)->Result<T> where T: DeserializeOwned {
    if response.get("error").is_some() {
        let envelope: ErrorEnvelope = serde_json::from_value( response)?;
        let ErrorInfo { code, message, details } = envelope.error;
        Err( GnssPopupError::PortalError { code, message, details })
    } else {
        Ok( serde_json::from_value( response)? )
    }
}

/* #endregion response types */

/// url of a sharing REST endpoint. Each path element is a single (encoded) url path segment
fn sharing_url (base_url: &str, path: &[&str])->Result<Url> {
    let mut segments: Vec<&str> = Vec::with_capacity( path.len() + SHARING_REST.len());
    segments.extend_from_slice( &SHARING_REST);
    segments.extend_from_slice( path);
    Ok( endpoint_url( base_url, &segments)? )
}

/// item ids and owners are required path segments, blank values would address a different endpoint
fn require_item_id (item_id: &str)->Result<&str> {
    if is_blank(item_id) { Err( GnssPopupError::NoSuchItem( "blank item id".to_string())) } else { Ok(item_id) }
}

/// a signed in connection to an organization
#[derive(Debug)]
pub struct Portal {
    client: Client,
    base_url: String,
    username: String,
    token: String,
    search_limit: usize,
}

impl Portal {
    /// obtain a token for the given user and return a Portal that uses it for all subsequent requests
    pub async fn sign_in (client: Client, config: &PortalConfig, url: &str, username: &str, password: &str)->Result<Portal> {
        let base_url = url.trim_end_matches('/').to_string();
        let token_url = sharing_url( &base_url, &["generateToken"])?;
        let expiration = config.token_expiration.to_string();

        let params = [
            ("username", username),
            ("password", password),
            ("referer", config.referer.as_str()),
            ("client", "referer"),
            ("expiration", expiration.as_str()),
            F_JSON
        ];
        let response: Value = post_form_query( &client, token_url, &params).await?;
        let token_response: TokenResponse = from_portal_response( response)?;
        if is_blank( &token_response.token) {
            return Err( op_failed!("no token for user {}", username))
        }

        info!("Signed into organization {} as {}", base_url, username);
        Ok( Portal {
            client,
            base_url,
            username: username.to_string(),
            token: token_response.token,
            search_limit: config.search_limit,
        })
    }

    pub fn base_url (&self)->&str { self.base_url.as_str() }
    pub fn username (&self)->&str { self.username.as_str() }

    async fn post<T> (&self, path: &[&str], extra_params: &[(&str,&str)])->Result<T> where T: DeserializeOwned {
        let url = sharing_url( &self.base_url, path)?;

        let mut params: Vec<(&str,&str)> = Vec::with_capacity( extra_params.len() + 2);
        params.push( ("token", self.token.as_str()));
        params.extend_from_slice( extra_params);
        params.push( F_JSON);

        let response: Value = post_form_query( &self.client, url, &params).await?;
        from_portal_response( response)
    }

    /// the JSON document stored with an item (layer definitions for feature services, map definition for web maps)
    pub async fn get_item_data (&self, item_id: &str)->Result<Value> {
        let item_id = require_item_id( item_id)?;
        debug!("fetching data of item {}", item_id);
        let data: Value = self.post( &["content", "items", item_id, "data"], &[]).await?;
        if data.is_object() {
            Ok(data)
        } else {
            Err( GnssPopupError::NoSuchItem( format!("{item_id} has no item data")))
        }
    }

    pub async fn get_item_details (&self, item_id: &str)->Result<ItemDetails> {
        let item_id = require_item_id( item_id)?;
        debug!("fetching details of item {}", item_id);
        self.post( &["content", "items", item_id], &[]).await
    }

    /// free text search restricted to a portal item type
    pub async fn search_items (&self, query: &str, item_type: &str)->Result<Vec<ItemDetails>> {
        let q = format!("{query} type:\"{item_type}\"");
        let num = self.search_limit.to_string();
        debug!("searching items with q={}", q);

        let response: SearchResponse = self.post( &["search"], &[("q", q.as_str()), ("num", num.as_str())]).await?;
        Ok( response.results)
    }

    /// find a web map by name. An exact (case insensitive) title match wins, otherwise we take the first search result
    pub async fn find_webmap (&self, name: &str)->Result<ItemDetails> {
        let mut items = self.search_items( name, &ItemKind::WebMap.to_string()).await?;

        if let Some(idx) = items.iter().position( |item| item.title.eq_ignore_ascii_case(name)) {
            Ok( items.swap_remove(idx))
        } else if !items.is_empty() {
            Ok( items.swap_remove(0))
        } else {
            Err( GnssPopupError::NoSuchItem( format!("no web map found for '{name}'")))
        }
    }

    /// replace the item data with `text`. Items in the root folder of their owner have no folder path segment
    pub async fn update_item_data (&self, item: &ItemDetails, text: &str)->Result<UpdateResponse> {
        let item_id = require_item_id( &item.id)?;
        if is_blank( &item.owner) {
            return Err( invalid_document( format!("item {item_id} has no owner")))
        }
        let folder = item.owner_folder.as_deref().filter( |f| !is_blank(f) && *f != "/").unwrap_or("");
        debug!("updating item {} of {} in folder '{}'", item.id, item.owner, folder);

        let path = ["content", "users", item.owner.as_str(), folder, "items", item_id, "update"];
        let response: UpdateResponse = self.post( &path, &[("text", text)]).await?;
        if response.success {
            Ok(response)
        } else {
            Err( op_failed!("update of item {} not successful", item.id))
        }
    }
}
