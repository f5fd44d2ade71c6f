//! Carousel components.

use carousel_core::{
    load_products, render_stylesheet, starts_drag, toggle_favorite, CarouselConfig, Direction,
    DragTracker, Favorites, Product, ProductId, Store, StructuredLogger, TrackMetrics,
};
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::{provide_meta_context, Style};

use crate::dom;
use crate::source::HttpSource;
use crate::storage::BrowserStorage;

const HEART_PATH: &str = "M12 21.35l-1.45-1.32C5.4 15.36 2 12.28 2 8.5 2 6.01 4.01 4 6.5 4c1.74 0 3.41 1.01 4.5 2.09C12.09 5.01 13.76 4 15.5 4 17.99 4 20 6.01 20 8.5c0 3.78-3.4 6.86-8.55 11.54L12 21.35z";

/// The "You Might Also Like" carousel.
///
/// Mounting registers the stylesheet and all listeners, then starts loading
/// products. The item list is rebuilt whenever the product list changes.
#[component]
pub fn Carousel(config: CarouselConfig, logger: StructuredLogger) -> impl IntoView {
    provide_meta_context();

    let css = render_stylesheet(&config.breakpoints, &config.settle_transition);
    let title = config.title.clone();
    let settle_transition = config.settle_transition.clone();

    let storage = Store::new(BrowserStorage::local()).with_logger(logger.clone());
    if !storage.backend().is_available() {
        logger.warn("localStorage unavailable, favorites and cache will not persist");
    }
    let load_store = storage.clone();
    let store = StoredValue::new_local(storage);

    let products = RwSignal::new(Vec::<Product>::new());
    let favorites = RwSignal::new(Favorites::new());
    let offset = RwSignal::new(0.0_f64);
    let animate = RwSignal::new(true);
    let tracker = StoredValue::new(DragTracker::new(config.drag_mode(), config.click_slop_px));

    let wrapper_ref = NodeRef::<html::Div>::new();
    let track_ref = NodeRef::<html::Div>::new();

    let measure = move || -> Option<TrackMetrics> {
        let wrapper = wrapper_ref.get_untracked()?;
        let track = track_ref.get_untracked()?;
        Some(dom::measure_track(&wrapper, &track))
    };

    let on_pointer_down = move |ev: web_sys::PointerEvent| {
        if !starts_drag(ev.is_primary(), ev.button()) {
            return;
        }
        let Some(metrics) = measure() else {
            return;
        };
        let current = track_ref
            .get_untracked()
            .and_then(|track| dom::rendered_offset(&track))
            .unwrap_or_else(|| offset.get_untracked());

        tracker.update_value(|t| t.begin(f64::from(ev.page_x()), current, metrics));
        animate.set(false);
        offset.set(current);
    };

    let on_pointer_move = move |ev: web_sys::PointerEvent| {
        let next = tracker
            .try_update_value(|t| t.move_to(f64::from(ev.page_x())))
            .flatten();
        if let Some(next) = next {
            offset.set(next);
        }
    };

    let on_release = move |_ev: web_sys::PointerEvent| {
        if !tracker.with_value(|t| t.is_dragging()) {
            return;
        }
        let Some(metrics) = measure() else {
            return;
        };
        let Some(target) = tracker.try_update_value(|t| t.release(metrics)).flatten() else {
            return;
        };

        let already_there = (offset.get_untracked() - target).abs() < 0.5;
        animate.set(true);
        offset.set(target);
        if already_there {
            tracker.update_value(|t| t.finish_settle());
        }
    };

    let on_transition_end = move |ev: web_sys::TransitionEvent| {
        if ev.property_name() == "transform" {
            tracker.update_value(|t| t.finish_settle());
        }
    };

    let log = StoredValue::new(logger.clone());
    let breakpoints = StoredValue::new(config.breakpoints.clone());

    let slide = move |direction: Direction| {
        let Some(metrics) = measure() else {
            return;
        };
        let target = metrics.step(offset.get_untracked(), direction);
        animate.set(true);
        offset.set(target);

        let items_visible = dom::window_width()
            .map(|width| breakpoints.with_value(|b| b.items_visible(width)));
        log.with_value(|l| {
            let mut entry = l
                .debug_builder("Carousel paged")
                .field_f64("offset", target)
                .field_i64("items_per_page", metrics.items_per_page() as i64);
            if let Some(items_visible) = items_visible {
                entry = entry.field_f64("items_visible", items_visible);
            }
            entry.emit();
        });
    };

    let favorites_key = config.favorites_key.clone();
    let on_toggle = Callback::new(move |id: ProductId| {
        if tracker.try_update_value(|t| t.take_click_suppression()).unwrap_or(false) {
            return;
        }
        let updated =
            store.with_value(|s| log.with_value(|l| toggle_favorite(s, &favorites_key, &id, l)));
        favorites.set(updated);
    });

    let on_open = Callback::new(move |url: String| {
        // The click ending a drag gesture is not a navigation.
        if tracker.try_update_value(|t| t.take_click_suppression()).unwrap_or(false) {
            return;
        }
        log.with_value(|l| dom::open_in_new_tab(&url, l));
    });

    let currency_suffix = config.currency_suffix.clone();
    let items = move || {
        products
            .get()
            .into_iter()
            .map(|product| {
                view! {
                    <CarouselItem
                        product=product
                        currency_suffix=currency_suffix.clone()
                        favorites=favorites
                        on_toggle=on_toggle
                        on_open=on_open
                    />
                }
            })
            .collect_view()
    };

    let source = HttpSource::new(config.products_url.clone());
    let products_key = config.products_key.clone();
    let favorites_key = config.favorites_key.clone();
    spawn_local(async move {
        let outcome = load_products(&load_store, &source, &products_key, &logger).await;
        logger
            .info_builder("Carousel ready")
            .field("source", outcome.source_name())
            .field_i64("count", outcome.products().len() as i64)
            .emit();

        favorites.set(Favorites::load(&load_store, &favorites_key));
        products.set(outcome.into_products());
    });

    view! {
        <Style id="carousel-style">{css}</Style>
        <div class="custom-carousel">
            <h2>{title}</h2>
            <button class="custom-carousel-arrow left" on:click=move |_| slide(Direction::Left)>
                <ArrowIcon direction=Direction::Left/>
            </button>
            <div class="carousel-wrapper" node_ref=wrapper_ref>
                <div
                    class="carousel-track"
                    node_ref=track_ref
                    style:transform=move || format!("translateX({}px)", offset.get())
                    style:transition=move || {
                        if animate.get() { settle_transition.clone() } else { "none".to_string() }
                    }
                    on:pointerdown=on_pointer_down
                    on:pointermove=on_pointer_move
                    on:pointerup=on_release
                    on:pointercancel=on_release
                    on:pointerleave=on_release
                    on:dragstart=|ev: web_sys::DragEvent| ev.prevent_default()
                    on:transitionend=on_transition_end
                >
                    {items}
                </div>
            </div>
            <button class="custom-carousel-arrow right" on:click=move |_| slide(Direction::Right)>
                <ArrowIcon direction=Direction::Right/>
            </button>
        </div>
    }
}

/// One product card. Carries `data-id` and `data-url` for the host page.
#[component]
fn CarouselItem(
    product: Product,
    currency_suffix: String,
    favorites: RwSignal<Favorites>,
    on_toggle: Callback<ProductId>,
    on_open: Callback<String>,
) -> impl IntoView {
    let price = product.price_label(&currency_suffix);
    let Product { id, name, img, url, .. } = product;

    let data_id = id.to_string();
    let filled = Signal::derive({
        let id = id.clone();
        move || favorites.with(|f| f.contains(&id))
    });
    let image_url = url.clone();
    let name_url = url.clone();
    let alt = name.clone();

    view! {
        <div class="carousel-item" data-id=data_id data-url=url>
            <img src=img alt=alt on:click=move |_| on_open.run(image_url.clone())/>
            <div
                class="heart"
                class:filled=move || filled.get()
                on:click=move |_| on_toggle.run(id.clone())
            >
                <HeartIcon filled=filled/>
            </div>
            <div class="product-name" on:click=move |_| on_open.run(name_url.clone())>
                {name}
            </div>
            <div class="price">{price}</div>
        </div>
    }
}

#[component]
fn HeartIcon(filled: Signal<bool>) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width="24"
            height="24"
            viewBox="0 0 24 24"
            fill=move || if filled.get() { "blue" } else { "none" }
        >
            <path
                d=HEART_PATH
                stroke=move || if filled.get() { "none" } else { "#000" }
                stroke-width="0.8"
            />
        </svg>
    }
}

#[component]
fn ArrowIcon(direction: Direction) -> impl IntoView {
    let path = match direction {
        Direction::Left => "M15 19L8 12l7-7",
        Direction::Right => "M9 5l7 7-7 7",
    };

    view! {
        <svg xmlns="http://www.w3.org/2000/svg" width="40" height="40" fill="none" viewBox="0 0 24 24">
            <path
                d=path
                stroke="#000"
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
            />
        </svg>
    }
}
