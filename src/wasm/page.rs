use std::cell::Cell;
use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    Document, Element, Event, IntersectionObserver, IntersectionObserverEntry, ScrollBehavior,
    ScrollIntoViewOptions, Window,
};

use crate::constants::{COUNT_UP_TICK_MS, PRELOADER_SETTLE_MS, PRELOADER_TICK_MS};
use crate::page::{nav_scrolled, parse_stat, CountUp, LoadState, Preloader};

/// Wire up the preloader, navbar and stat counters. Each one is skipped when
/// its anchor element is missing.
pub fn init(window: &Window, document: &Document) -> Result<(), JsValue> {
    preloader(window, document)?;
    navigation(window, document)?;
    stats(document)?;
    Ok(())
}

fn preloader(window: &Window, document: &Document) -> Result<(), JsValue> {
    let Some(el) = document.query_selector(".preloader")? else {
        log::warn!(".preloader not found, skipping");
        return Ok(());
    };
    let body = document.body();

    let timer = Rc::new(Cell::new(0));
    let mut state = Preloader::new();
    let mut rng = rand::thread_rng();
    let tick = {
        let timer = timer.clone();
        Closure::<dyn FnMut()>::new(move || {
            if state.advance(&mut rng) == LoadState::Loading {
                return;
            }
            let Some(win) = web_sys::window() else {
                return;
            };
            win.clear_interval_with_handle(timer.get());
            let el = el.clone();
            let body = body.clone();
            let settle = Closure::once_into_js(move || {
                if let Err(e) = el.class_list().add_1("loaded") {
                    log::warn!("preloader not hidden: {e:?}");
                }
                if let Some(body) = body {
                    if let Err(e) = body.class_list().add_1("loaded") {
                        log::warn!("body not marked loaded: {e:?}");
                    }
                }
            });
            if let Err(e) = win.set_timeout_with_callback_and_timeout_and_arguments_0(
                settle.unchecked_ref(),
                PRELOADER_SETTLE_MS,
            ) {
                log::warn!("preloader settle not scheduled: {e:?}");
            }
        })
    };
    let id = window.set_interval_with_callback_and_timeout_and_arguments_0(
        tick.as_ref().unchecked_ref(),
        PRELOADER_TICK_MS,
    )?;
    timer.set(id);
    tick.forget();
    Ok(())
}

fn navigation(window: &Window, document: &Document) -> Result<(), JsValue> {
    match document.query_selector(".navbar")? {
        Some(navbar) => {
            let on_scroll = Closure::<dyn FnMut()>::new(move || {
                let y = web_sys::window()
                    .and_then(|w| w.scroll_y().ok())
                    .unwrap_or(0.0);
                if let Err(e) = navbar
                    .class_list()
                    .toggle_with_force("scrolled", nav_scrolled(y))
                {
                    log::warn!("navbar scroll state not updated: {e:?}");
                }
            });
            window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())?;
            on_scroll.forget();
        }
        None => log::warn!(".navbar not found, skipping scroll state"),
    }

    // Smooth scroll
    let links = document.query_selector_all("a[href^=\"#\"]")?;
    for i in 0..links.length() {
        let Some(link) = links.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let href = link.get_attribute("href").unwrap_or_default();
        let on_click = Closure::<dyn FnMut(Event)>::new(move |e: Event| {
            e.prevent_default();
            let target = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.query_selector(&href).ok().flatten());
            if let Some(target) = target {
                let opts = ScrollIntoViewOptions::new();
                opts.set_behavior(ScrollBehavior::Smooth);
                target.scroll_into_view_with_scroll_into_view_options(&opts);
            }
        });
        link.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }
    Ok(())
}

fn stats(document: &Document) -> Result<(), JsValue> {
    let stats = document.query_selector_all(".stat-number")?;
    if stats.length() == 0 {
        return Ok(());
    }

    let on_visible = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let el = entry.target();
                let target = parse_stat(&el.text_content().unwrap_or_default());
                count_up(el.clone(), target);
                observer.unobserve(&el);
            }
        },
    );
    let observer = IntersectionObserver::new(on_visible.as_ref().unchecked_ref())?;
    on_visible.forget();

    for i in 0..stats.length() {
        if let Some(el) = stats.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            observer.observe(&el);
        }
    }
    Ok(())
}

fn count_up(el: Element, target: i64) {
    let Some(win) = web_sys::window() else {
        return;
    };
    let timer = Rc::new(Cell::new(0));
    let mut labels = CountUp::new(target);
    let tick = {
        let timer = timer.clone();
        Closure::<dyn FnMut()>::new(move || match labels.next() {
            Some(label) => el.set_text_content(Some(&label)),
            None => {
                if let Some(w) = web_sys::window() {
                    w.clear_interval_with_handle(timer.get());
                }
            }
        })
    };
    match win.set_interval_with_callback_and_timeout_and_arguments_0(
        tick.as_ref().unchecked_ref(),
        COUNT_UP_TICK_MS,
    ) {
        Ok(id) => {
            timer.set(id);
            tick.forget();
        }
        Err(e) => log::warn!("stat counter not started: {e:?}"),
    }
}
