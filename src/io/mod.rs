/*!
# IO

Writes graphs, optionally together with a matching, in the
[DOT language](https://graphviz.org/doc/info/lang.html) of [GraphViz](https://graphviz.org/).

- [`DotWriter`] configures the output (node names, highlight colors) and writes a graph to
  any [`Write`](std::io::Write) instance,
- [`DotWrite`] is implemented by all graph representations and writes them with default
  settings.

Edge weights of [`Weighted`](crate::repr::Weighted) graphs are written as edge labels.
Errors are plain [`std::io::Error`]s.
*/

pub mod dot;

use std::{
    fs::File,
    io::{BufWriter, Result, Write},
    path::Path,
};

use crate::prelude::*;

pub use dot::*;
