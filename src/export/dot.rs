//! GraphViz statement writers.

use std::io::Write;

use crate::config::GraphAttributes;
use crate::decompose::{LineStyle, Weight};
use crate::model::EntityId;
use crate::Result;

/// Quote an id for dot, escaping embedded quotes and backslashes.
pub fn quote(label: &str) -> String {
    let mut out = String::with_capacity(label.len() + 2);
    out.push('"');
    for c in label.chars() {
        if c == '"' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}

pub fn write_header(writer: &mut dyn Write, graph: &GraphAttributes) -> Result<()> {
    writeln!(writer, "strict graph G {{")?;
    writeln!(
        writer,
        "graph [overlap={},splines={},rankdir={}];",
        graph.overlap, graph.splines, graph.rankdir
    )?;
    Ok(())
}

pub fn write_footer(writer: &mut dyn Write) -> Result<()> {
    writeln!(writer, "}}")?;
    Ok(())
}

/// `"#1=IfcWall" [color="#9999ff",style=filled];`
pub fn write_node(writer: &mut dyn Write, label: &str, fill: &str) -> Result<()> {
    writeln!(writer, "{} [color={},style=filled];", quote(label), quote(fill))?;
    Ok(())
}

/// `"#1=IfcWall"--"#2=IfcDoor" [weight=9,style=solid];`
pub fn write_edge(
    writer: &mut dyn Write,
    relating: &str,
    related: &str,
    weight: Weight,
    style: LineStyle,
) -> Result<()> {
    writeln!(
        writer,
        "{}--{} [weight={},style={}];",
        quote(relating),
        quote(related),
        weight,
        style
    )?;
    Ok(())
}

pub fn open_cluster(writer: &mut dyn Write, root: EntityId) -> Result<()> {
    writeln!(writer, "subgraph id_{root} {{")?;
    writeln!(writer, "cluster=true;")?;
    Ok(())
}

/// Bare member statement inside a cluster; attributes come from the node statement.
pub fn write_member(writer: &mut dyn Write, label: &str) -> Result<()> {
    writeln!(writer, "{};", quote(label))?;
    Ok(())
}

pub fn close_cluster(writer: &mut dyn Write) -> Result<()> {
    writeln!(writer, "}}")?;
    Ok(())
}
