//! Testimonials: two auto-scrolling lanes of customer cards.
//!
//! The view owns a [`MarqueeDriver`] signal and ticks it from a frame loop.
//! Each strip is measured once it mounts (and again every frame while the
//! measurement is unusable), then on every resize; the driver's offset is
//! rendered as a transform relative to the strip's resting edge.

use std::rc::Rc;

use dioxus::prelude::*;

use crate::i18n::use_i18n;
use crate::marquee::{duplicated, use_frame_loop, MarqueeConfig, MarqueeDriver, TrackId};

/// Testimonial numbers per lane (`testimonial<N>-name` and friends).
const SLOW_LANE: [u8; 4] = [1, 2, 3, 4];
const FAST_LANE: [u8; 4] = [5, 6, 7, 8];

const LANES: [TrackId; 2] = [TrackId::Slow, TrackId::Fast];

fn slot(id: TrackId) -> usize {
    match id {
        TrackId::Slow => 0,
        TrackId::Fast => 1,
    }
}

fn strip_style(shift: f64) -> String {
    format!("transform: translate3d({shift}px, 0, 0);")
}

async fn measure(
    id: TrackId,
    strip: Rc<MountedData>,
    mut driver: Signal<MarqueeDriver>,
    mut pending: Signal<[bool; 2]>,
) {
    match strip.get_client_rect().await {
        Ok(rect) => {
            tracing::debug!(?id, width = rect.width(), "[marquee] strip measured");
            driver.write().set_width(id, Some(rect.width()));
        }
        Err(err) => tracing::debug!(?id, ?err, "[marquee] strip not measurable yet"),
    }
    pending.write()[slot(id)] = false;
}

#[component]
pub fn Testimonials(#[props(default)] config: MarqueeConfig) -> Element {
    let i18n = use_i18n()?;
    let driver = use_signal(|| MarqueeDriver::new(&config));
    let mut strips = use_signal(|| [None::<Rc<MountedData>>, None]);
    let mut pending = use_signal(|| [false; 2]);

    use_frame_loop(move || {
        for id in LANES {
            if driver.peek().track(id).midpoint().is_some() || pending.peek()[slot(id)] {
                continue;
            }
            let Some(strip) = strips.peek()[slot(id)].clone() else {
                continue;
            };
            pending.write()[slot(id)] = true;
            spawn(measure(id, strip, driver, pending));
        }
        let mut driver = driver;
        driver.write().tick(i18n.peek_direction());
    });

    let lane = |id: TrackId, items: &'static [u8]| {
        let mut driver = driver;
        let style = strip_style(driver.read().track(id).translation(i18n.direction()));
        rsx! {
            div {
                class: "marquee__lane",
                onmouseenter: move |_| driver.write().set_hovering(true),
                onmouseleave: move |_| driver.write().set_hovering(false),
                div {
                    class: "marquee__strip",
                    style: "{style}",
                    onmounted: move |evt: MountedEvent| strips.write()[slot(id)] = Some(evt.data()),
                    onresize: move |evt: ResizeEvent| match evt.get_border_box_size() {
                        Ok(size) => driver.write().set_width(id, Some(size.width)),
                        Err(err) => tracing::debug!(?id, ?err, "[marquee] resize without a size"),
                    },
                    {duplicated(items).map(|(copy, number)| rsx! {
                        TestimonialCard { key: "{copy}-{number}", number: *number }
                    })}
                }
            }
        }
    };

    rsx! {
        section { class: "testimonials",
            span { class: "section-eyebrow", {i18n.t("testimonials-title")} }
            h2 { class: "section-title",
                {i18n.t("testimonials-heading-prefix")}
                " "
                span { class: "highlight", {i18n.digits(&i18n.t("testimonials-count"))} }
                " "
                {i18n.t("testimonials-heading-suffix")}
            }
            div { class: "marquee",
                {lane(TrackId::Slow, &SLOW_LANE)}
                {lane(TrackId::Fast, &FAST_LANE)}
            }
        }
    }
}

#[component]
fn TestimonialCard(number: u8) -> Element {
    let i18n = use_i18n()?;
    let name = i18n.t(&format!("testimonial{number}-name"));
    let initial = name.chars().next().map(String::from).unwrap_or_default();

    rsx! {
        article { class: "testimonial-card",
            header { class: "testimonial-card__header",
                span { class: "testimonial-card__avatar", aria_hidden: "true", "{initial}" }
                div {
                    strong { class: "testimonial-card__name", "{name}" }
                    span { class: "testimonial-card__location",
                        {i18n.t(&format!("testimonial{number}-location"))}
                    }
                }
                span { class: "testimonial-card__stars", aria_hidden: "true", "★★★★★" }
            }
            p { class: "testimonial-card__text", {i18n.t(&format!("testimonial{number}-text"))} }
        }
    }
}
