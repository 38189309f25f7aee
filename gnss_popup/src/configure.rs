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

use serde_json::Value;
use gnss_common::{info, warn};

use crate::errors::Result;
use crate::field_rules::FormatMode;
use crate::popup::{ItemKind, configure_layer_popup};
use crate::portal::{ItemDetails, Portal};

#[derive(Debug,Clone,Default)]
pub struct ConfigureOptions {
    /// overrides the default format mode of the item kind
    pub format_mode: Option<FormatMode>,
    /// configure the document but don't write it back
    pub dry_run: bool,
}

#[derive(Debug)]
pub struct ConfigureOutcome {
    pub item: ItemDetails,
    pub kind: ItemKind,
    pub layer_index: usize,
    pub updated_fields: Vec<String>,
    pub document: Value,
    pub written: bool,
}

/// configure popup of layer `layer_index` in the feature service item with id `item_id`
pub async fn configure_feature_service (portal: &Portal, item_id: &str, layer_index: usize, opts: &ConfigureOptions)->Result<ConfigureOutcome> {
    info!("Started configuring popup and visibility..");

    let data = portal.get_item_data( item_id).await?;
    let details = portal.get_item_details( item_id).await?;

    configure_item( portal, ItemKind::FeatureService, details, data, layer_index, opts).await
}

/// configure popup of operational layer `layer_index` in the web map found for `name`
pub async fn configure_webmap (portal: &Portal, name: &str, layer_index: usize, opts: &ConfigureOptions)->Result<ConfigureOutcome> {
    info!("Started configuring popup and visibility..");

    let details = portal.find_webmap( name).await?;
    let data = portal.get_item_data( &details.id).await?;

    configure_item( portal, ItemKind::WebMap, details, data, layer_index, opts).await
}

async fn configure_item (portal: &Portal, kind: ItemKind, item: ItemDetails, mut document: Value, layer_index: usize, opts: &ConfigureOptions)->Result<ConfigureOutcome> {
    if !item.item_type.is_empty() && item.item_type != kind.to_string() {
        warn!("item {} is a '{}', not a '{}'", item.id, item.item_type, kind);
    }

    let mode = opts.format_mode.unwrap_or( kind.default_format_mode());
    let updated_fields = configure_layer_popup( &mut document, kind, layer_index, mode)?;
    if updated_fields.is_empty() {
        warn!("no GNSS metadata fields in popup of layer {} of '{}'", layer_index, item.title);
    } else {
        info!("configured {} GNSS metadata fields of '{}'", updated_fields.len(), item.title);
    }

    let written = if opts.dry_run {
        info!("dry run, item {} not updated", item.id);
        false
    } else {
        let text = serde_json::to_string( &document)?;
        portal.update_item_data( &item, &text).await?;
        info!("Successfully configured popup and visibility..");
        true
    };

    Ok( ConfigureOutcome { item, kind, layer_index, updated_fields, document, written })
}
