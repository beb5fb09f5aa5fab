/*!
# Graph Algorithms

This module provides the **matching algorithms** of this crate together with the graph
routines they build upon (breadth-first search, connected components, bipartiteness).
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use graph_matching::algo::*;
```
*/

mod bipartite;
mod connectivity;
mod matching;
mod traversal;

use crate::prelude::*;

pub use bipartite::*;
pub use connectivity::*;
pub use matching::*;
pub use traversal::*;
