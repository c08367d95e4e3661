// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Segtorus Inc.

//! SVG schematic of the layer segments, for visual checking only

use crate::geometry::{layer_outline, Measurements, SegmentOutline, TorusParameters};
use crate::utils::math::fmt_coord;
use anyhow::Result;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::Cursor;

/// Layer fill colors, cycled by layer index
pub const PALETTE: [&str; 7] = ["FC0", "CF0", "0CF", "0FC", "D70", "07D", "70D"];

/// Margin around the ring in the view box
const MARGIN: f64 = 20.0;

/// Rendered size in pixels
const SIZE: u32 = 640;

/// Vertical spacing of layer labels
const LABEL_SPACING: f64 = 20.0;

pub fn layer_color(index: usize) -> String {
    format!("#{}", PALETTE[index % PALETTE.len()])
}

/// Render a plan view of every layer plus the ideal torus outline.
pub fn render_schematic(params: &TorusParameters, measurements: &Measurements) -> Result<String> {
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);

    let ring_radius = params.ring_radius();
    let origin = -ring_radius - MARGIN;
    let extent = ring_radius * 2.0 + MARGIN * 2.0;
    let view_box = format!(
        "{} {} {} {}",
        fmt_coord(origin),
        fmt_coord(origin),
        fmt_coord(extent),
        fmt_coord(extent)
    );
    let size = SIZE.to_string();

    let mut svg = BytesStart::new("svg");
    svg.push_attribute(("xmlns", "http://www.w3.org/2000/svg"));
    svg.push_attribute(("viewBox", view_box.as_str()));
    svg.push_attribute(("width", size.as_str()));
    svg.push_attribute(("height", size.as_str()));
    writer.write_event(Event::Start(svg))?;

    for (index, layer) in measurements.layers.iter().enumerate() {
        let color = layer_color(index);
        let id = format!("layer-{}", index);

        let mut group = BytesStart::new("g");
        group.push_attribute(("id", id.as_str()));
        writer.write_event(Event::Start(group))?;

        for outline in layer_outline(layer, index, params.num_segments) {
            let d = path_data(&outline);
            let mut path = BytesStart::new("path");
            path.push_attribute(("d", d.as_str()));
            path.push_attribute(("fill", color.as_str()));
            path.push_attribute(("stroke", "#777"));
            path.push_attribute(("stroke-width", "1"));
            path.push_attribute(("stroke-opacity", "0.8"));
            path.push_attribute(("fill-opacity", "0.8"));
            writer.write_event(Event::Empty(path))?;
        }

        let y = fmt_coord(index as f64 * LABEL_SPACING);
        let mut text = BytesStart::new("text");
        text.push_attribute(("y", y.as_str()));
        text.push_attribute(("fill", color.as_str()));
        text.push_attribute(("stroke", "#000"));
        text.push_attribute(("stroke-width", "0.1"));
        writer.write_event(Event::Start(text))?;
        writer.write_event(Event::Text(BytesText::new(&format!("Layer {}", index))))?;
        writer.write_event(Event::End(BytesEnd::new("text")))?;

        writer.write_event(Event::End(BytesEnd::new("g")))?;
    }

    write_outline(&mut writer, params, measurements)?;

    writer.write_event(Event::End(BytesEnd::new("svg")))?;

    let result = writer.into_inner().into_inner();
    Ok(String::from_utf8(result)?)
}

/// Closed path through the four corners of a segment
fn path_data(outline: &SegmentOutline) -> String {
    let [p0, p1, p2, p3] = outline.corners;
    format!(
        "M {},{} L {},{} L {},{} L {},{} Z",
        fmt_coord(p0.x),
        fmt_coord(p0.y),
        fmt_coord(p1.x),
        fmt_coord(p1.y),
        fmt_coord(p2.x),
        fmt_coord(p2.y),
        fmt_coord(p3.x),
        fmt_coord(p3.y)
    )
}

/// Dashed outer and inner edges of the ideal torus, and its tube as a band
fn write_outline(
    writer: &mut Writer<Cursor<Vec<u8>>>,
    params: &TorusParameters,
    measurements: &Measurements,
) -> Result<()> {
    let center = measurements.ring_center_radius;
    let torus_radius = params.torus_radius();

    let dashed = [(center + torus_radius, "0.7"), (center - torus_radius, "0.5")];
    for (radius, opacity) in dashed {
        // A negative radius is invalid SVG; happens for the empty measurement
        if radius <= 0.0 {
            continue;
        }
        let r = fmt_coord(radius);
        let mut circle = BytesStart::new("circle");
        circle.push_attribute(("cx", "0"));
        circle.push_attribute(("cy", "0"));
        circle.push_attribute(("r", r.as_str()));
        circle.push_attribute(("fill", "none"));
        circle.push_attribute(("stroke-width", "1"));
        circle.push_attribute(("stroke-dasharray", "10 10"));
        circle.push_attribute(("stroke", "#333"));
        circle.push_attribute(("opacity", opacity));
        writer.write_event(Event::Empty(circle))?;
    }

    if center > 0.0 {
        let r = fmt_coord(center);
        let width = fmt_coord(params.torus_diameter);
        let mut band = BytesStart::new("circle");
        band.push_attribute(("cx", "0"));
        band.push_attribute(("cy", "0"));
        band.push_attribute(("r", r.as_str()));
        band.push_attribute(("fill", "none"));
        band.push_attribute(("stroke-width", width.as_str()));
        band.push_attribute(("stroke", "#d48"));
        band.push_attribute(("opacity", "0.2"));
        writer.write_event(Event::Empty(band))?;
    }

    Ok(())
}
