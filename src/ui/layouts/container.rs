//! Padding, border and margin in one call

use crate::ui::geometry::Insets;

use super::border::Border;
use super::padding::Padding;

/// Widget type produced by [`container`].
pub type Container<C> = Padding<Border<Padding<C>>>;

/// Wrap `child` in inner padding, a border and an outer margin.
///
/// Equivalent to `Padding(Border(Padding(child, padding), border), margin)`;
/// pass `Insets::default()` to skip any of the three.
///
/// # Examples
///
/// ```
/// use epd_layout::ui::layouts::{Cleared, Spacer, container};
/// use epd_layout::ui::{Insets, Widget};
///
/// let card = container(
///     Cleared::new(Spacer::new()),
///     Insets::all(4),
///     Insets::all(1),
///     Insets::symmetric(8, 16),
/// );
/// assert_eq!(card.insets, Insets::symmetric(8, 16));
/// assert_eq!(card.child.size, Insets::all(1));
/// let _render_object = card.create_render_object();
/// ```
pub fn container<C>(child: C, padding: Insets, border: Insets, margin: Insets) -> Container<C> {
    Padding::new(Border::new(Padding::new(child, padding), border), margin)
}
