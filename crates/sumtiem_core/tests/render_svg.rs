mod common;

use common::Facts;
use sumtiem_core::{
    layout, materialize, render_svg, resolve, LayoutError, NoopObserver, PropertyMap, Timeline,
    TimelineConfig,
};

fn laid_out(facts: &[sumtiem_core::Fact], config: &TimelineConfig) -> Timeline {
    layout(
        &materialize(&PropertyMap::default(), facts),
        config,
        &NoopObserver,
    )
    .expect("layout")
}

#[test]
fn undated_end_fades_and_gets_no_tick() {
    let facts = Facts::new()
        .event("birth", "Birth", Some("1900"))
        .event("death", "Death", Some("XXXX"))
        .extent("life", "Life", "birth", "death")
        .build();
    let config = TimelineConfig::default();

    let svg = render_svg(&laid_out(&facts, &config), &config).expect("render");

    assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" width="980" height="1669""#));
    // One tick for the dated event, one axis line.
    assert_eq!(svg.matches(r#"stroke-linecap="butt""#).count(), 1);
    assert_eq!(svg.matches(r#"stroke-linecap="square""#).count(), 1);
    assert!(svg.contains(">1900</tspan>"));
    assert!(svg.contains(">Birth</tspan>"));
    assert!(!svg.contains(">Death</tspan>"));
    assert!(svg.contains(">Life</tspan>"));

    assert_eq!(svg.matches("<linearGradient").count(), 1);
    assert!(svg.contains(r#"fill="url(#gradient1)""#));
    assert_eq!(svg.matches(r#"font-weight="bold""#).count(), 1);
    assert!(svg.contains(">?</tspan>"));
    assert_eq!(svg.matches("<g ").count(), svg.matches("</g>").count());
}

#[test]
fn fully_dated_bar_is_solid() {
    let facts = Facts::new()
        .event("birth", "Birth", Some("1900"))
        .event("death", "Death", Some("1950"))
        .extent("life", "Life", "birth", "death")
        .build();
    let config = TimelineConfig::default();

    let svg = render_svg(&laid_out(&facts, &config), &config).expect("render");

    assert!(!svg.contains("<defs>"));
    assert!(svg.contains(r##"fill="#1b9e77"/>"##));
    assert!(!svg.contains(">?</tspan>"));
    assert_eq!(svg.matches(r#"stroke-linecap="butt""#).count(), 2);
}

#[test]
fn columns_take_palette_colours() {
    let facts = Facts::new()
        .event("a", "A", Some("1900"))
        .event("b", "B", Some("1950"))
        .extent("p", "P", "a", "b")
        .extent("q", "Q", "a", "b")
        .right_of("q", "p")
        .build();
    let config = TimelineConfig::default();

    let svg = render_svg(&laid_out(&facts, &config), &config).expect("render");

    assert!(svg.contains(r##"<rect x="10.00""##));
    assert!(svg.contains(r##"<rect x="236.00""##));
    assert!(svg.contains(r##"fill="#1b9e77""##));
    assert!(svg.contains(r##"fill="#d95f02""##));
}

#[test]
fn undated_only_timeline_has_no_axis() {
    let facts = Facts::new()
        .event("a", "A", None)
        .event("b", "B", None)
        .extent("p", "P", "a", "b")
        .build();
    let config = TimelineConfig::default();

    let svg = render_svg(&laid_out(&facts, &config), &config).expect("render");

    assert!(!svg.contains("<line"));
    assert_eq!(svg.matches(r#"font-weight="bold""#).count(), 2);
    assert_eq!(svg.matches("<stop ").count(), 6);
}

#[test]
fn rendering_before_placement_fails_without_output() {
    let facts = Facts::new()
        .event("a", "A", Some("1900"))
        .event("b", "B", Some("1950"))
        .extent("p", "P", "a", "b")
        .build();
    let config = TimelineConfig::default();
    let timeline = resolve(&materialize(&PropertyMap::default(), &facts), &NoopObserver)
        .expect("resolve");

    let err = render_svg(&timeline, &config).unwrap_err();

    assert!(matches!(err, LayoutError::PrematureAccess(_)));
}
