//! Layout primitives
//!
//! Each primitive is a widget / render-object pair implementing one sizing
//! or painting policy. They are generic over their child widget, so any of
//! them can wrap any other and the composed tree is fully static.

pub mod border;
pub mod center;
pub mod circular_border;
pub mod cleared;
pub mod container;
pub mod padding;
pub mod positioned;
pub mod sized_box;
pub mod spacer;

pub use border::{Border, BorderRenderObject};
pub use center::{Center, CenterRenderObject};
pub use circular_border::{CircularBorder, CircularBorderRenderObject};
pub use cleared::{Cleared, ClearedRenderObject};
pub use container::{Container, container};
pub use padding::{Padding, PaddingRenderObject};
pub use positioned::{Positioned, PositionedRenderObject};
pub use sized_box::{SizedBox, SizedBoxRenderObject};
pub use spacer::{Spacer, SpacerRenderObject};
