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
use strum::{Display,EnumString};
use gnss_common::{if_let, debug};

use crate::errors::{GnssPopupError, Result, invalid_document};
use crate::field_rules::{apply_rule, FormatMode};

pub const POPUP_INFO: &str = "popupInfo";
pub const FIELD_INFOS: &str = "fieldInfos";

/// the portal item types we can configure. The Display value is the portal item type name
#[derive(Debug,Clone,Copy,PartialEq,Eq,Display,EnumString)]
pub enum ItemKind {
    #[strum(serialize="Feature Service")]
    FeatureService,

    #[strum(serialize="Web Map")]
    WebMap,
}

impl ItemKind {
    /// the item document property that holds the layer array
    pub fn layers_key (&self)->&'static str {
        match self {
            ItemKind::FeatureService => "layers",
            ItemKind::WebMap => "operationalLayers",
        }
    }

    /// feature service item data is written by us wholesale, web maps keep whatever format the map author added
    pub fn default_format_mode (&self)->FormatMode {
        match self {
            ItemKind::FeatureService => FormatMode::Replace,
            ItemKind::WebMap => FormatMode::Merge,
        }
    }
}

/// get the mutable `fieldInfos` array of the popup for layer `layer_index` of an item document
pub fn field_infos_mut (doc: &mut Value, kind: ItemKind, layer_index: usize)->Result<&mut Vec<Value>> {
    let layers_key = kind.layers_key();

    if_let! {
        Some(layers) = { doc.get_mut(layers_key).and_then(Value::as_array_mut) } else {
            Err( invalid_document( format!("item has no '{layers_key}' array")))
        },
        Some(layer) = { layers.get_mut(layer_index) } else {
            Err( GnssPopupError::NoSuchLayer(layer_index))
        },
        Some(popup_info) = { layer.get_mut(POPUP_INFO).filter(|v| v.is_object()) } else {
            Err( GnssPopupError::NoPopupInfo(layer_index))
        },
        Some(field_infos) = { popup_info.get_mut(FIELD_INFOS).and_then(Value::as_array_mut) } else {
            Err( invalid_document( format!("popupInfo of layer {layer_index} has no '{FIELD_INFOS}' array")))
        } => {
            Ok(field_infos)
        }
    }
}

/// apply the GNSS field rules to all matching field descriptors and return the names of the updated fields
/// (in document order). Non-GNSS descriptors are not touched
pub fn apply_gnss_rules (field_infos: &mut [Value], mode: FormatMode)->Vec<String> {
    let mut updated: Vec<String> = Vec::new();

    for field_info in field_infos.iter_mut() {
        if let Some(rule) = apply_rule( field_info, mode) {
            debug!("configured {} as {:?}", rule.field_name, rule.format);
            updated.push( rule.field_name.to_string());
        }
    }

    updated
}

/// configure the GNSS fields in the popup of layer `layer_index` of an item document
pub fn configure_layer_popup (doc: &mut Value, kind: ItemKind, layer_index: usize, mode: FormatMode)->Result<Vec<String>> {
    let field_infos = field_infos_mut( doc, kind, layer_index)?;
    Ok( apply_gnss_rules( field_infos, mode))
}
