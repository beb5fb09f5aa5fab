//! # Dot
//!
//! We only use basic functionality of the Dot-Format: every vertex and every edge is written in
//! its own statement, weights become edge labels, and a matching is highlighted by drawing its
//! edges bold in a separate color and filling its vertices.
//!
//! ```
//! use graph_matching::{prelude::*, io::*};
//!
//! let graph = WeightedGraph::try_from_weighted_edges([(0, 1, 3), (1, 2, 4)]).unwrap();
//! let matching = Matching::from_edges([(1, 2)]).unwrap();
//!
//! let mut buffer = Vec::new();
//! graph.try_write_dot_with_matching(&mut buffer, &matching).unwrap();
//!
//! let dot = String::from_utf8(buffer).unwrap();
//! assert!(dot.contains("u0 -- u1 [label=\"3\"];"));
//! assert!(dot.contains("u1 -- u2 [label=\"4\", color=red, style=bold];"));
//! ```
use std::fmt::Display;

use super::*;

/// A writer for the Dot-Format
#[derive(Debug, Clone)]
pub struct DotWriter {
    /// Increment nodes by 1 before writing
    inc_nodes: bool,
    /// Prefix of a node (default: 'u')
    prefix: String,
    /// Color of matched edges
    edge_color: DotColor,
    /// Fill color of matched vertices
    fill_color: DotColor,
}

impl Default for DotWriter {
    fn default() -> Self {
        Self {
            inc_nodes: false,
            prefix: "u".to_string(),
            edge_color: DotColor::Red,
            fill_color: DotColor::LightBlue,
        }
    }
}

impl DotWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// If *true*, nodes are written 1-based
    pub fn inc_nodes(mut self, inc_nodes: bool) -> Self {
        self.inc_nodes = inc_nodes;
        self
    }

    /// Set the prefix of a node (`u` by default)
    pub fn node_prefix<S>(mut self, prefix: S) -> Self
    where
        S: Into<String>,
    {
        self.prefix = prefix.into();
        self
    }

    /// Set the color of matched edges (`red` by default)
    pub fn edge_color(mut self, color: DotColor) -> Self {
        self.edge_color = color;
        self
    }

    /// Set the fill color of matched vertices (`lightblue` by default)
    pub fn fill_color(mut self, color: DotColor) -> Self {
        self.fill_color = color;
        self
    }

    /// Writes the opening brackets of the graph
    pub fn start_graph<W>(&self, writer: &mut W) -> Result<()>
    where
        W: Write,
    {
        writeln!(writer, "graph {{")
    }

    /// Formats a node depending on `self.prefix, self.inc_nodes`
    fn format_node(&self, u: Node) -> String {
        let u = u + self.inc_nodes as Node;
        format!("{}{u}", self.prefix)
    }

    /// Writes a statement for each node; nodes covered by `matching` are filled
    pub fn write_nodes<W, I>(
        &self,
        writer: &mut W,
        nodes: I,
        matching: Option<&Matching>,
    ) -> Result<()>
    where
        W: Write,
        I: IntoIterator<Item = Node>,
    {
        for u in nodes {
            if matching.is_some_and(|m| m.has_vertex(u)) {
                writeln!(
                    writer,
                    "  {} [style=filled, fillcolor={}];",
                    self.format_node(u),
                    self.fill_color
                )?;
            } else {
                writeln!(writer, "  {};", self.format_node(u))?;
            }
        }
        Ok(())
    }

    /// Writes each edge with its optional label; edges in `matching` are highlighted
    pub fn write_edges<W, I>(
        &self,
        writer: &mut W,
        edges: I,
        matching: Option<&Matching>,
    ) -> Result<()>
    where
        W: Write,
        I: IntoIterator<Item = (Edge, Option<String>)>,
    {
        for (Edge(u, v), label) in edges {
            let mut attributes = Vec::with_capacity(3);
            if let Some(label) = label {
                attributes.push(format!("label=\"{label}\""));
            }
            if matching.is_some_and(|m| m.has_edge(u, v)) {
                attributes.push(format!("color={}", self.edge_color));
                attributes.push("style=bold".to_string());
            }

            write!(writer, "  {} -- {}", self.format_node(u), self.format_node(v))?;
            if !attributes.is_empty() {
                write!(writer, " [{}]", attributes.join(", "))?;
            }
            writeln!(writer, ";")?;
        }
        Ok(())
    }

    /// Closes the Dot-Graph, thus finishing the graph
    pub fn finish_graph<W>(&self, writer: &mut W) -> Result<()>
    where
        W: Write,
    {
        writeln!(writer, "}}")
    }

    /// Writes the complete graph (and the optional matching) to `writer`
    pub fn write_graph<G, W>(
        &self,
        graph: &G,
        mut writer: W,
        matching: Option<&Matching>,
    ) -> Result<()>
    where
        G: DotLabels,
        W: Write,
    {
        self.start_graph(&mut writer)?;
        self.write_nodes(&mut writer, graph.vertices(), matching)?;
        self.write_edges(
            &mut writer,
            graph
                .ordered_edges(true)
                .map(|Edge(u, v)| (Edge(u, v), graph.edge_label(u, v))),
            matching,
        )?;
        self.finish_graph(&mut writer)
    }
}

/// Graphs that can be written in the Dot-Format, with an optional label per edge
pub trait DotLabels: AdjacencyList {
    /// Label of edge `{u, v}`, if any
    fn edge_label(&self, _u: Node, _v: Node) -> Option<String> {
        None
    }
}

impl DotLabels for Graph {}

impl DotLabels for Bigraph {}

impl<G, W> DotLabels for Weighted<G, W>
where
    G: AdjacencyList + AdjacencyTest + GraphEdgeOrder,
    W: Weight,
{
    fn edge_label(&self, u: Node, v: Node) -> Option<String> {
        self.w(u, v).ok().map(|w| w.to_string())
    }
}

/// Trait for writing a graph to a writer in the Dot-Format.
/// Shorthand for default settings.
pub trait DotWrite {
    /// Tries to write the graph to a writer
    fn try_write_dot<W>(&self, writer: W) -> Result<()>
    where
        W: Write;

    /// Tries to write the graph to a writer, highlighting the edges and vertices of `matching`
    fn try_write_dot_with_matching<W>(&self, writer: W, matching: &Matching) -> Result<()>
    where
        W: Write;

    /// Tries to write the graph to a file
    fn try_write_dot_file<P>(&self, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        let writer = BufWriter::new(File::create(path)?);
        self.try_write_dot(writer)
    }
}

impl<G> DotWrite for G
where
    G: DotLabels,
{
    fn try_write_dot<W>(&self, writer: W) -> Result<()>
    where
        W: Write,
    {
        DotWriter::default().write_graph(self, writer, None)
    }

    fn try_write_dot_with_matching<W>(&self, writer: W, matching: &Matching) -> Result<()>
    where
        W: Write,
    {
        DotWriter::default().write_graph(self, writer, Some(matching))
    }
}

impl Display for DotColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", format!("{self:?}").to_lowercase())
    }
}

/// Colors used for highlighting, a subset of the SVG colors of
/// `https://graphviz.gitlab.io/doc/info/colors.html#svg`
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DotColor {
    Black,
    Blue,
    DarkGreen,
    Gold,
    Gray,
    Green,
    LightBlue,
    LightGray,
    Orange,
    Purple,
    Red,
}
