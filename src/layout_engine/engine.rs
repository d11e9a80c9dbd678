//! Greedy placement of switch badges so that none of them collide.
//!
//! Badges start at the top-left corner of their window. They are visited
//! left to right (top to bottom within a column) and each one is pushed
//! right or down past every earlier badge it collides with. A badge may be
//! pushed several times while being placed; earlier badges never move again.

use tracing::{instrument, trace};

use super::graph::{Orientation, PopupBox, Shift};
use crate::common::config::LayoutSettings;
use crate::model::registry::SwitchRegistry;
use crate::sys::geometry::Point;

#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    settings: LayoutSettings,
}

impl LayoutEngine {
    pub fn new(settings: LayoutSettings) -> Self { Self { settings } }

    /// Rewrites `popup_position` of every switch in the registry.
    #[instrument(level = "debug", skip_all, fields(switches = registry.len()))]
    pub fn arrange(&self, registry: &mut SwitchRegistry) {
        let boxes: Vec<PopupBox> = registry
            .iter()
            .map(|s| PopupBox::new(s.popup_position.clamp_to_screen(), s.popup_size))
            .collect();
        let placed = self.place(&boxes);
        for (switch, origin) in registry.iter_mut().zip(placed) {
            switch.popup_position = origin;
        }
    }

    /// Returns final origins, index-aligned with `boxes`.
    pub fn place(&self, boxes: &[PopupBox]) -> Vec<Point> {
        let mut order: Vec<usize> = (0..boxes.len()).collect();
        order.sort_by_key(|&i| (boxes[i].origin.x, boxes[i].origin.y));

        let mut placed: Vec<PopupBox> = Vec::with_capacity(boxes.len());
        let mut origins = vec![Point::default(); boxes.len()];
        for i in order {
            let mut current = boxes[i];
            for previous in &placed {
                if !current.overlaps(previous) {
                    continue;
                }
                let shift = self.shift_past(&current, previous);
                trace!(index = i, ?shift, from = ?current.origin, "badge collides");
                current.origin = shift.apply(current.origin);
            }
            origins[i] = current.origin;
            placed.push(current);
        }
        origins
    }

    /// Picks the cheaper of clearing `previous` to the right or below, with
    /// vertical moves discounted by `y_weight`. Distances are taken in `i64`
    /// so badges near the edge of the coordinate space cannot overflow.
    fn shift_past(&self, current: &PopupBox, previous: &PopupBox) -> Shift {
        let LayoutSettings { margin_x, margin_y, y_weight } = self.settings;
        let dx = i64::from(previous.origin.x) + i64::from(previous.size.width) + i64::from(margin_x)
            - i64::from(current.origin.x);
        let dy = i64::from(previous.origin.y) + i64::from(previous.size.height) + i64::from(margin_y)
            - i64::from(current.origin.y);
        if dx as f64 <= dy as f64 * y_weight {
            Shift { orientation: Orientation::Horizontal, amount: dx }
        } else {
            Shift { orientation: Orientation::Vertical, amount: dy }
        }
    }
}
