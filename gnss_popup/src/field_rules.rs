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

//! the static popup rules for the GNSS metadata fields that field apps add to a feature layer.
//! Each rule sets the display format (if any) and makes the field visible and read-only

use std::collections::HashMap;
use lazy_static::lazy_static;
use serde::{Serialize,Deserialize};
use serde_json::{Map,Value,json};
use clap::ValueEnum;

pub const FIELD_NAME: &str = "fieldName";
pub const FORMAT: &str = "format";
pub const VISIBLE: &str = "visible";
pub const IS_EDITABLE: &str = "isEditable";

pub const PLACES: &str = "places";
pub const DATE_FORMAT: &str = "dateFormat";
pub const TIMEZONE: &str = "timezone";

pub const SHORT_DATE_SHORT_TIME: &str = "shortDateShortTime";
pub const UTC: &str = "utc";

/// how a rule format is written into a field descriptor that already has a `format` object
#[derive(Debug,Clone,Copy,PartialEq,Eq,Serialize,Deserialize,ValueEnum)]
#[serde(rename_all="snake_case")]
pub enum FormatMode {
    /// the `format` object is replaced by the rule format
    Replace,
    /// rule format keys are written into the existing `format` object, which is created if missing
    Merge,
}

#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum FieldFormat {
    /// don't touch the `format` object
    Unchanged,
    /// number of decimal places
    Places(u32),
    Date { date_format: &'static str, timezone: &'static str },
}

impl FieldFormat {
    /// the JSON properties this format sets, or None if the format object is left alone
    pub fn to_json_map (&self)->Option<Map<String,Value>> {
        match self {
            FieldFormat::Unchanged => None,
            FieldFormat::Places(n) => {
                let mut map = Map::new();
                map.insert( PLACES.to_string(), json!(n));
                Some(map)
            }
            FieldFormat::Date { date_format, timezone } => {
                let mut map = Map::new();
                map.insert( DATE_FORMAT.to_string(), json!(date_format));
                map.insert( TIMEZONE.to_string(), json!(timezone));
                Some(map)
            }
        }
    }
}

#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub struct FieldRule {
    pub field_name: &'static str, // upper case
    pub format: FieldFormat,
    pub visible: bool,
    pub is_editable: bool,
}

impl FieldRule {
    const fn with_places (field_name: &'static str, places: u32)->Self {
        FieldRule { field_name, format: FieldFormat::Places(places), visible: true, is_editable: false }
    }

    const fn with_date (field_name: &'static str, date_format: &'static str, timezone: &'static str)->Self {
        FieldRule { field_name, format: FieldFormat::Date{ date_format, timezone }, visible: true, is_editable: false }
    }

    const fn visible_only (field_name: &'static str)->Self {
        FieldRule { field_name, format: FieldFormat::Unchanged, visible: true, is_editable: false }
    }

    /// apply this rule to a (JSON) field descriptor. Properties not covered by the rule are kept
    pub fn apply (&self, field_info: &mut Map<String,Value>, mode: FormatMode) {
        if let Some(rule_format) = self.format.to_json_map() {
            let merged = match (mode, field_info.get_mut(FORMAT)) {
                (FormatMode::Merge, Some(Value::Object(format))) => {
                    for (k,v) in rule_format.iter() { format.insert( k.clone(), v.clone()); }
                    true
                }
                _ => false // replace, or nothing to merge into
            };

            if !merged {
                field_info.insert( FORMAT.to_string(), Value::Object(rule_format));
            }
        }

        field_info.insert( VISIBLE.to_string(), Value::Bool(self.visible));
        field_info.insert( IS_EDITABLE.to_string(), Value::Bool(self.is_editable));
    }
}

/// the GNSS metadata field rules, in the order in which field apps create the fields
pub static GNSS_FIELD_RULES: [FieldRule;18] = [
    FieldRule::visible_only( "ESRIGNSS_RECEIVER"),
    FieldRule::with_places(  "ESRIGNSS_H_RMS", 2),
    FieldRule::with_places(  "ESRIGNSS_V_RMS", 2),
    FieldRule::with_places(  "ESRIGNSS_LATITUDE", 8),
    FieldRule::with_places(  "ESRIGNSS_LONGITUDE", 8),
    FieldRule::with_places(  "ESRIGNSS_ALTITUDE", 2),
    FieldRule::with_places(  "ESRIGNSS_PDOP", 2),
    FieldRule::with_places(  "ESRIGNSS_HDOP", 2),
    FieldRule::with_places(  "ESRIGNSS_VDOP", 2),
    FieldRule::visible_only( "ESRIGNSS_FIXTYPE"),
    FieldRule::with_places(  "ESRIGNSS_CORRECTIONAGE", 2),
    FieldRule::visible_only( "ESRIGNSS_STATIONID"),
    FieldRule::visible_only( "ESRIGNSS_NUMSATS"),
    FieldRule::with_date(    "ESRIGNSS_FIXDATETIME", SHORT_DATE_SHORT_TIME, UTC),
    FieldRule::visible_only( "ESRIGNSS_AVG_POSITIONS"),
    FieldRule::with_places(  "ESRIGNSS_AVG_H_RMS", 2),
    FieldRule::with_places(  "ESRIGNSS_AVG_V_RMS", 2),
    FieldRule::with_places(  "ESRIGNSS_H_STDDEV", 3),
];

lazy_static! {
    static ref RULE_MAP: HashMap<&'static str, &'static FieldRule> = {
        GNSS_FIELD_RULES.iter().map( |r| (r.field_name, r)).collect()
    };
}

/// case insensitive rule lookup
pub fn rule_for (field_name: &str)->Option<&'static FieldRule> {
    RULE_MAP.get( field_name.to_uppercase().as_str()).copied()
}

pub fn gnss_field_names ()->impl Iterator<Item=&'static str> {
    GNSS_FIELD_RULES.iter().map( |r| r.field_name)
}

/// apply the matching rule (if any) to a JSON field descriptor and return the rule that was applied.
/// Descriptors that are not objects or don't have a string `fieldName` are not GNSS fields
pub fn apply_rule (field_info: &mut Value, mode: FormatMode)->Option<&'static FieldRule> {
    let map = field_info.as_object_mut()?;
    let rule = map.get(FIELD_NAME).and_then(Value::as_str).and_then(rule_for)?;
    rule.apply( map, mode);
    Some(rule)
}
