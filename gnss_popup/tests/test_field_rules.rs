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

use serde_json::{json, Value};
use gnss_popup::field_rules::{apply_rule, rule_for, gnss_field_names, FieldFormat, FormatMode, GNSS_FIELD_RULES};

/// (field name, expected format JSON or None if format is untouched)
fn expected_rules ()->Vec<(&'static str, Option<Value>)> {
    vec![
        ("ESRIGNSS_H_RMS",         Some(json!({"places": 2}))),
        ("ESRIGNSS_V_RMS",         Some(json!({"places": 2}))),
        ("ESRIGNSS_LATITUDE",      Some(json!({"places": 8}))),
        ("ESRIGNSS_LONGITUDE",     Some(json!({"places": 8}))),
        ("ESRIGNSS_ALTITUDE",      Some(json!({"places": 2}))),
        ("ESRIGNSS_PDOP",          Some(json!({"places": 2}))),
        ("ESRIGNSS_HDOP",          Some(json!({"places": 2}))),
        ("ESRIGNSS_VDOP",          Some(json!({"places": 2}))),
        ("ESRIGNSS_CORRECTIONAGE", Some(json!({"places": 2}))),
        ("ESRIGNSS_FIXDATETIME",   Some(json!({"dateFormat": "shortDateShortTime", "timezone": "utc"}))),
        ("ESRIGNSS_AVG_H_RMS",     Some(json!({"places": 2}))),
        ("ESRIGNSS_AVG_V_RMS",     Some(json!({"places": 2}))),
        ("ESRIGNSS_H_STDDEV",      Some(json!({"places": 3}))),
        ("ESRIGNSS_RECEIVER",      None),
        ("ESRIGNSS_STATIONID",     None),
        ("ESRIGNSS_FIXTYPE",       None),
        ("ESRIGNSS_NUMSATS",       None),
        ("ESRIGNSS_AVG_POSITIONS", None),
    ]
}

#[test]
fn test_rule_table () {
    let expected = expected_rules();
    assert_eq!( GNSS_FIELD_RULES.len(), expected.len());

    for (name, format) in &expected {
        let rule = rule_for(name).expect("known GNSS field");
        assert_eq!( rule.field_name, *name);
        assert!( rule.visible, "{name} should be visible");
        assert!( !rule.is_editable, "{name} should not be editable");
        assert_eq!( rule.format.to_json_map().map(Value::Object), *format, "format of {name}");
    }

    let mut names: Vec<&str> = gnss_field_names().collect();
    names.sort();
    let mut expected_names: Vec<&str> = expected.iter().map(|(n,_)| *n).collect();
    expected_names.sort();
    assert_eq!( names, expected_names);
}

#[test]
fn test_case_insensitive_lookup () {
    assert_eq!( rule_for("esrignss_latitude").map(|r| r.format), Some(FieldFormat::Places(8)));
    assert_eq!( rule_for("EsriGnss_H_StdDev").map(|r| r.format), Some(FieldFormat::Places(3)));
    assert!( rule_for("ESRIGNSS_LATITUDE ").is_none()); // no trimming
    assert!( rule_for("LATITUDE").is_none());
    assert!( rule_for("").is_none());
}

#[test]
fn test_apply_produces_documented_triple () {
    for (name, format) in expected_rules() {
        let mut field_info = json!({
            "fieldName": name.to_lowercase(),
            "label": "some label",
            "isEditable": true,
            "visible": false
        });

        let rule = apply_rule( &mut field_info, FormatMode::Replace);
        assert_eq!( rule.map(|r| r.field_name), Some(name));

        assert_eq!( field_info["visible"], json!(true));
        assert_eq!( field_info["isEditable"], json!(false));
        assert_eq!( field_info.get("format").cloned(), format, "format of {name}");
        assert_eq!( field_info["label"], json!("some label"));
        assert_eq!( field_info["fieldName"], json!(name.to_lowercase())); // name is not normalized
    }
}

#[test]
fn test_unknown_fields_unmodified () {
    let originals = vec![
        json!({"fieldName": "OBJECTID", "isEditable": false, "visible": false}),
        json!({"fieldName": "ESRIGNSS_SOMETHING_ELSE", "isEditable": true, "visible": false, "format": {"places": 5}}),
        json!({"fieldName": "GNSS_H_RMS", "isEditable": true, "visible": false}),
        json!({"label": "no field name", "visible": false}),
        json!({"fieldName": 42, "visible": false}),
        json!("not an object"),
    ];

    for original in originals {
        let mut field_info = original.clone();
        assert!( apply_rule( &mut field_info, FormatMode::Replace).is_none());
        assert!( apply_rule( &mut field_info, FormatMode::Merge).is_none());
        assert_eq!( field_info, original);
    }
}

#[test]
fn test_replace_vs_merge () {
    let original = json!({
        "fieldName": "ESRIGNSS_ALTITUDE",
        "isEditable": true,
        "visible": false,
        "format": { "places": 6, "digitSeparator": true }
    });

    let mut replaced = original.clone();
    apply_rule( &mut replaced, FormatMode::Replace);
    assert_eq!( replaced["format"], json!({"places": 2}));

    let mut merged = original.clone();
    apply_rule( &mut merged, FormatMode::Merge);
    assert_eq!( merged["format"], json!({"places": 2, "digitSeparator": true}));

    // merging into a missing or null format creates it
    let mut no_format = json!({"fieldName": "ESRIGNSS_FIXDATETIME", "format": null});
    apply_rule( &mut no_format, FormatMode::Merge);
    assert_eq!( no_format["format"], json!({"dateFormat": "shortDateShortTime", "timezone": "utc"}));

    // rules without format never touch an existing format
    let mut receiver = json!({"fieldName": "ESRIGNSS_NUMSATS", "format": {"places": 0, "digitSeparator": true}});
    apply_rule( &mut receiver, FormatMode::Replace);
    assert_eq!( receiver["format"], json!({"places": 0, "digitSeparator": true}));
    assert_eq!( receiver["visible"], json!(true));
}
