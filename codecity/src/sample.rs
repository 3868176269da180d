// Copyright 2025 the Codecity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A small real-world dataset: a slice of the jsoup HTML parser.
//!
//! Four packages, eight classes and a handful of references into the
//! `org.jsoup.examples` package. Colours are picked from the palette by
//! position, so the dataset is the same on every call.

use codecity_layout::{BuildingSpec, Color, DistrictSpec};

/// The package that every reference in [`jsoup`] points into.
pub const JSOUP_EXAMPLES: &str = "org.jsoup.examples";

/// Districts and buildings of the jsoup sample.
pub fn jsoup() -> (Vec<DistrictSpec>, Vec<BuildingSpec>) {
    let districts = ["org.jsoup", JSOUP_EXAMPLES, "org.jsoup.helper", "org.jsoup.nodes"]
        .into_iter()
        .map(DistrictSpec::new)
        .collect();

    let method_notes = [
        "READ: Line 55",
        "REFERENCE: Line 43",
        "REFERENCE: Line 45",
        "REFERENCE: Line 43",
        "REFERENCE: Line 45",
    ];
    let element_notes = [
        "REFERENCE: Line 26",
        "REFERENCE: Line 36",
        "REFERENCE: Line 41",
        "INVOCATION: Line 42",
        "REFERENCE: Line 46",
        "REFERENCE: Line 61",
        "REFERENCE: Line 19",
        "INHERITANCE: Line 19",
        "INSTANTIATION: Line 62",
        "INSTANTIATION: Line 63",
        "REFERENCE: Line 62",
        "REFERENCE: Line 63",
        "INVOCATION: Line 62",
        "INVOCATION: Line 63",
        "OVERRIDING: Line 29",
        "INVOCATION: Line 31",
    ];

    let raw: [(&str, f64, f64, f64, &str, &[&str], &[&str]); 10] = [
        ("HtmlToPlainText", 2.0, 1.0, 2.0, JSOUP_EXAMPLES, &[], &[]),
        ("Wikipedia", 2.0, 1.0, 2.0, JSOUP_EXAMPLES, &[], &[]),
        ("MyOwnExample", 2.0, 10.0, 2.0, JSOUP_EXAMPLES, &[], &[]),
        ("ListLinks", 2.0, 3.0, 2.0, JSOUP_EXAMPLES, &[], &[]),
        ("UncheckedIOException", 1.0, 1.0, 1.0, "org.jsoup", &[], &[]),
        ("Method", 10.0, 10.0, 10.0, "org.jsoup", &["MyOwnExample"], &method_notes),
        ("Method1", 10.0, 10.0, 10.0, "org.jsoup", &["MyOwnExample"], &method_notes),
        (
            "Element",
            10.0,
            6.0,
            10.0,
            "org.jsoup.nodes",
            &["ListLinks", "HtmlToPlainText", "Wikipedia", "MyOwnExample"],
            &element_notes,
        ),
        ("DocumentType", 1.0, 1.0, 1.0, "org.jsoup.nodes", &[], &[]),
        ("DataUtil", 1.0, 1.0, 1.0, "org.jsoup.helper", &[], &[]),
    ];

    let buildings = raw
        .into_iter()
        .enumerate()
        .map(|(i, (label, w, h, d, package, connections, notes))| {
            let mut spec =
                BuildingSpec::new(label, package, w, h, d).with_color(Color::palette_pick(i));
            spec.connections = connections.iter().map(|c| (*c).to_owned()).collect();
            spec.annotations = notes.iter().map(|n| (*n).to_owned()).collect();
            spec
        })
        .collect();

    (districts, buildings)
}
