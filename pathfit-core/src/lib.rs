// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
`pathfit-core` parses SVG path data and transform lists, re-expresses path
data under an affine transform and derives the transforms that fit a source
viewport into a target box.

Path data keeps its original form: relative commands stay relative,
shorthand commands stay shorthand and elliptical arcs stay arcs.

```
use pathfit_core::{PathData, TransformList, Transformer, WriteOptions, write_path};

let path: PathData = "M0 0 80 80".parse().unwrap();
let list: TransformList = "rotate(90 40,40)".parse().unwrap();
let rotated = Transformer::new(&list).transform(&path);
assert_eq!(write_path(&rotated, &WriteOptions::default()), "M80 0 0 80");
```
*/

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

mod error;
mod fit;
pub(crate) mod parser;
mod transformer;
mod tree;
mod writer;

pub use kurbo::Point;

pub use crate::error::*;
pub use crate::fit::*;
pub use crate::transformer::*;
pub use crate::tree::*;
pub use crate::writer::*;
