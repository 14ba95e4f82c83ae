//! Shape and rich-text rendering core for the friendship-book page editor.
//!
//! This crate turns element descriptions coming out of the editor store into
//! deterministic drawing instructions: positioned text runs for styled text,
//! and SVG path strings plus presentation props for shapes and borders. Both
//! the interactive canvas and the export rasterizer call into it, so every
//! function here is pure and reproducible: identical inputs always produce
//! identical outputs.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`style`] | Rich text styles, segments and line-height tables |
//! | [`measure`] | Text measurement against an injected [`measure::MeasureSurface`] |
//! | [`wrap`] | Greedy word wrapping |
//! | [`runs`] | Rich run layout inside a padded box |
//! | [`qna`] | Question/answer layout (inline and block variants) |
//! | [`ruled`] | Ruled guide lines for lined-paper boxes |
//! | [`shape`] | Theme strategies producing path geometry and stroke props |
//! | [`crop`] | Cover-fit image cropping |
//! | [`geom`] | Points, sizes and rectangles |
//! | [`color`] | Hex color parsing and `rgba()` formatting |
//! | [`config`] | Tunable layout and theme constants |
//! | [`consts`] | Shared numeric constants |
//! | `web` | Canvas2D adapter (feature `web`) |

pub mod color;
pub mod config;
pub mod consts;
pub mod crop;
pub mod geom;
pub mod measure;
pub mod qna;
pub mod ruled;
pub mod runs;
pub mod shape;
pub mod style;
pub mod wrap;

#[cfg(feature = "web")]
pub mod web;

pub use crop::{CropAnchor, CropRect, get_crop};
pub use measure::{MeasureSurface, measure_text};
pub use qna::{LayoutVariant, QnaElement, QnaLayoutEngine};
pub use ruled::{RuledLine, generate_ruled_lines};
pub use runs::{LayoutResult, LinePosition, RunBox, TextRun, layout_rich_runs};
pub use shape::{ShapeDescriptor, ShapeKind, StrokeProps, Theme, generate_path, stroke_props};
pub use style::{RichTextStyle, StyledTextSegment};
