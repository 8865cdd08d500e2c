/*!
# Graph Representations

- [`CsrGraphUndir`]: unlabelled, immutable, undirected CSR graph with sorted neighbor slices.
- [`LabelledGraph`]: a [`CsrGraphUndir`] whose nodes carry string labels, with ids assigned in
  ascending label order. This is what the searches and the report run against.
*/

use crate::prelude::*;

mod csr;
mod labelled;

pub use csr::*;
pub use labelled::*;
