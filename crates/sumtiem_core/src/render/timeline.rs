//! Timeline drawing on a [`DrawTarget`].

use super::{
    Anchor, DrawTarget, Fill, GradientStop, LineCap, LinearGradient, Point, Stroke, SvgDocument,
    TextStyle, Transform,
};
use crate::config::TimelineConfig;
use crate::layout::LayoutResult;
use crate::model::timeline::{Event, Extent, Timeline};
use crate::text::TextBox;

/// Baseline nudge that aligns a bar label with the top of its bar.
const LABEL_BASELINE_SHIFT: f64 = 8.0;

struct PlacedEvent<'t> {
    event: &'t Event,
    y: f64,
}

struct Bar<'t> {
    extent: &'t Extent,
    x: f64,
    top: f64,
    height: f64,
    color: &'t str,
    from_dated: bool,
    to_dated: bool,
}

/// Draws a placed timeline.
///
/// # Errors
/// - `PrematureAccess` when an event has no position or an extent has no
///   final column; nothing is drawn in that case.
pub fn render_timeline(
    timeline: &Timeline,
    config: &TimelineConfig,
    target: &mut dyn DrawTarget,
) -> LayoutResult<()> {
    let events = timeline
        .events()
        .map(|event| {
            Ok(PlacedEvent {
                event,
                y: f64::from(event.vertical_position()?),
            })
        })
        .collect::<LayoutResult<Vec<_>>>()?;
    let bars = timeline
        .extents()
        .iter()
        .map(|extent| bar(timeline, extent, config))
        .collect::<LayoutResult<Vec<_>>>()?;

    let font = f64::from(config.font_size);
    let half_stroke = f64::from(config.half_stroke());
    target.begin_group(Transform::translate(
        f64::from(config.margin.left),
        f64::from(config.margin.top),
    ));
    target.begin_group(Transform::translate(
        f64::from(config.label_width_pixels + config.label_padding + config.tick_length)
            + half_stroke,
        (font / 2.0).floor(),
    ));

    draw_events(&events, config, target);
    draw_axis(&events, config, target);

    target.begin_group(Transform::translate(half_stroke + 0.5, -half_stroke - 0.5));
    for bar in &bars {
        draw_bar(bar, config, target);
    }
    target.end_group();

    target.end_group();
    target.end_group();
    Ok(())
}

/// Renders `timeline` into a standalone SVG document of the canvas size.
pub fn render_svg(timeline: &Timeline, config: &TimelineConfig) -> LayoutResult<String> {
    let mut document = SvgDocument::new(
        f64::from(config.canvas.width),
        f64::from(config.canvas.height),
    );
    render_timeline(timeline, config, &mut document)?;
    Ok(document.finish())
}

fn bar<'t>(
    timeline: &'t Timeline,
    extent: &'t Extent,
    config: &'t TimelineConfig,
) -> LayoutResult<Bar<'t>> {
    let column = extent.column()?;
    let from = timeline.event(extent.from);
    let to = timeline.event(extent.to);
    let top = f64::from(from.vertical_position()?);
    let bottom = f64::from(to.vertical_position()?);
    Ok(Bar {
        extent,
        x: f64::from(config.column_x(column)),
        top,
        height: (bottom - top + f64::from(config.stroke_width)).max(1.0),
        color: config.column_color(column),
        from_dated: from.is_dated(),
        to_dated: to.is_dated(),
    })
}

fn axis_stroke(config: &TimelineConfig, linecap: LineCap) -> Stroke {
    Stroke {
        color: config.axis_color.clone(),
        width: f64::from(config.stroke_width),
        linecap,
    }
}

fn text_style(config: &TimelineConfig, color: &str, anchor: Anchor, bold: bool) -> TextStyle {
    TextStyle {
        color: color.to_string(),
        family: config.font_family.clone(),
        size: f64::from(config.font_size),
        bold,
        anchor,
    }
}

/// Ticks and labels; undated events get neither.
fn draw_events(events: &[PlacedEvent<'_>], config: &TimelineConfig, target: &mut dyn DrawTarget) {
    let font = f64::from(config.font_size);
    let tick = f64::from(config.tick_length);
    let pitch = font * config.line_height;
    let stroke = axis_stroke(config, LineCap::Butt);
    let style = text_style(config, &config.label_color, Anchor::End, false);

    for placed in events.iter().filter(|p| p.event.is_dated()) {
        target.line(Point::new(0.0, placed.y), Point::new(-tick, placed.y), &stroke);
    }

    target.begin_group(Transform::translate(
        -f64::from(config.label_padding + config.tick_length),
        (font / 2.0).floor() - 5.0,
    ));
    for placed in events {
        let Some(date) = &placed.event.date else {
            continue;
        };
        let mut label = TextBox::new(&placed.event.label, config.label_width_chars);
        label.prepend(date.as_str());
        target.text(Point::new(0.0, placed.y), label.lines(), pitch, &style);
    }
    target.end_group();
}

fn draw_axis(events: &[PlacedEvent<'_>], config: &TimelineConfig, target: &mut dyn DrawTarget) {
    let (Some(first), Some(last)) = (events.first(), events.last()) else {
        return;
    };
    if events.len() > 1 && events.iter().any(|p| p.event.is_dated()) {
        target.line(
            Point::new(0.0, first.y),
            Point::new(0.0, last.y),
            &axis_stroke(config, LineCap::Square),
        );
    }
}

fn draw_bar(bar: &Bar<'_>, config: &TimelineConfig, target: &mut dyn DrawTarget) {
    let font = f64::from(config.font_size);
    let fill = bar_fill(bar, config, target);
    target.rect(
        Point::new(bar.x, bar.top),
        f64::from(config.bar_width),
        bar.height,
        &fill,
    );

    let marker = text_style(config, bar.color, Anchor::Start, true);
    let question = ["?".to_string()];
    if !bar.from_dated {
        target.text(
            Point::new(bar.x + 1.0, bar.top + font - LABEL_BASELINE_SHIFT),
            &question,
            0.0,
            &marker,
        );
    }
    if !bar.to_dated {
        target.text(
            Point::new(bar.x + 1.0, bar.top + bar.height),
            &question,
            0.0,
            &marker,
        );
    }

    let label = TextBox::new(&bar.extent.label, config.label_width_chars);
    target.text(
        Point::new(
            bar.x + f64::from(config.bar_width + config.label_padding),
            bar.top + font - LABEL_BASELINE_SHIFT,
        ),
        label.lines(),
        font * config.line_height,
        &text_style(config, bar.color, Anchor::Start, false),
    );
}

/// Solid for fully dated bars; undated ends fade out.
fn bar_fill(bar: &Bar<'_>, config: &TimelineConfig, target: &mut dyn DrawTarget) -> Fill {
    let height = bar.height;
    let fade_start = f64::from(config.font_size) / height;
    let fade_end = f64::from(config.gradient_offset) / height;
    let stop = |offset: f64, opacity: f64| GradientStop {
        offset,
        opacity,
        color: bar.color.to_string(),
    };
    let top_down = (Point::new(0.0, 0.0), Point::new(0.0, 1.0));

    let (stops, (from, to)) = match (bar.from_dated, bar.to_dated) {
        (true, true) => return Fill::Solid(bar.color.to_string()),
        (false, false) => (
            vec![
                stop(0.0, 0.0),
                stop(fade_start, 0.0),
                stop(fade_end, 1.0),
                stop(1.0 - fade_end, 1.0),
                stop(1.0 - fade_start, 0.0),
                stop(1.0, 0.0),
            ],
            top_down,
        ),
        (false, true) => (
            vec![
                stop(0.0, 0.0),
                stop(fade_start, 0.0),
                stop(fade_end, 1.0),
                stop(1.0, 1.0),
            ],
            top_down,
        ),
        (true, false) => (
            vec![
                stop(0.0, 0.0),
                stop(fade_start, 0.0),
                stop(fade_end, 1.0),
                stop(1.0, 1.0),
            ],
            (Point::new(0.0, 1.0), Point::new(0.0, 0.0)),
        ),
    };
    target.linear_gradient(LinearGradient { stops, from, to })
}
