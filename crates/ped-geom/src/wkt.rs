//! Minimal WKT serialization of the selected polygon.
//!
//! Debug sink only: the output mirrors the geometry the motion engine was
//! given so it can be inspected in external GIS tooling.  Not a general
//! WKT writer.

use std::fmt::Write as _;

use geo::{LineString, Polygon};

/// Serialize a polygon (exterior + holes) as a WKT `POLYGON` string.
pub fn polygon_wkt(polygon: &Polygon<f64>) -> String {
    let mut out = String::from("POLYGON (");
    write_ring(&mut out, polygon.exterior());
    for interior in polygon.interiors() {
        out.push_str(", ");
        write_ring(&mut out, interior);
    }
    out.push(')');
    out
}

fn write_ring(out: &mut String, ring: &LineString<f64>) {
    out.push('(');
    for (i, c) in ring.coords().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "{} {}", c.x, c.y);
    }
    out.push(')');
}
