//! Vertical placement of ordered events.

use super::spacing::allocate;
use crate::config::TimelineConfig;
use crate::model::timeline::{Event, Timeline};
use crate::text::TextBox;
use log::debug;

/// Height an event occupies on the axis.
///
/// Undated events take one line. Dated events add a box holding the date line
/// followed by the wrapped label.
pub fn event_height(event: &Event, config: &TimelineConfig) -> u32 {
    let line = config.line_pitch();
    match &event.date {
        Some(date) => {
            let mut label = TextBox::new(&event.label, config.label_width_chars);
            label.prepend(date.as_str());
            line + label.height(config.font_size, config.line_height)
        }
        None => line,
    }
}

/// Assigns vertical positions to all ordered events of `timeline`.
pub fn place(timeline: &mut Timeline, config: &TimelineConfig) {
    let ids = timeline.ordered_event_ids().to_vec();
    let heights: Vec<u32> = ids
        .iter()
        .map(|id| event_height(timeline.event(*id), config))
        .collect();
    let positions = allocate(&heights, config.line_pitch(), config.drawing_height());

    for (id, y) in ids.iter().zip(positions) {
        timeline.event_mut(*id).set_vertical_position(y);
    }
    debug!(
        "event=layout_placed module=layout status=ok events={} available={}",
        ids.len(),
        config.drawing_height()
    );
}
