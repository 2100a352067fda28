#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

use lexfolio::lifecycle::{navigate_to_section, LoadingGate, ScrollMonitor};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

#[wasm_bindgen_test]
async fn gate_fires_exactly_once_after_delay() {
    let fired = Rc::new(Cell::new(0u32));
    let gate = {
        let fired = fired.clone();
        LoadingGate::start(20, move || fired.set(fired.get() + 1))
    };
    assert_eq!(fired.get(), 0);
    TimeoutFuture::new(60).await;
    assert_eq!(fired.get(), 1);
    TimeoutFuture::new(60).await;
    assert_eq!(fired.get(), 1);
    drop(gate);
}

#[wasm_bindgen_test]
async fn dropped_gate_never_fires() {
    let fired = Rc::new(Cell::new(false));
    let gate = {
        let fired = fired.clone();
        LoadingGate::start(40, move || fired.set(true))
    };
    TimeoutFuture::new(10).await;
    drop(gate);
    TimeoutFuture::new(80).await;
    assert!(!fired.get());
}

#[wasm_bindgen_test]
fn unknown_section_id_is_a_silent_noop() {
    assert!(!navigate_to_section("nonexistent-id"));
}

#[wasm_bindgen_test]
fn known_section_id_resolves() {
    let document = document();
    let element = document.create_element("div").unwrap();
    element.set_id("contact");
    document.body().unwrap().append_child(&element).unwrap();

    assert!(navigate_to_section("contact"));

    element.remove();
    assert!(!navigate_to_section("contact"));
}

#[wasm_bindgen_test]
fn monitor_republishes_per_event_and_deregisters_on_drop() {
    let seen = Rc::new(Cell::new(0u32));
    let last = Rc::new(Cell::new(true));
    let monitor = {
        let seen = seen.clone();
        let last = last.clone();
        ScrollMonitor::attach(50.0, move |past| {
            seen.set(seen.get() + 1);
            last.set(past);
        })
    };

    let window = web_sys::window().unwrap();
    let event = web_sys::Event::new("scroll").unwrap();
    window.dispatch_event(&event).unwrap();
    assert_eq!(seen.get(), 1);
    // The test page never scrolls, so the offset stays at the top.
    assert!(!last.get());

    window.dispatch_event(&web_sys::Event::new("scroll").unwrap()).unwrap();
    assert_eq!(seen.get(), 2);
    assert!(!last.get());

    drop(monitor);
    window.dispatch_event(&web_sys::Event::new("scroll").unwrap()).unwrap();
    assert_eq!(seen.get(), 2);
}

#[wasm_bindgen_test]
fn smooth_scroll_override_is_scoped_to_monitor_lifetime() {
    let root: web_sys::HtmlElement = document()
        .document_element()
        .unwrap()
        .dyn_into()
        .unwrap();

    let before = root.style().get_property_value("scroll-behavior").unwrap();
    let monitor = ScrollMonitor::attach(50.0, |_| {});
    assert_eq!(
        root.style().get_property_value("scroll-behavior").unwrap(),
        "smooth"
    );
    drop(monitor);
    assert_eq!(
        root.style().get_property_value("scroll-behavior").unwrap(),
        before
    );
}

// Mounts the whole app; runs last so its live scroll monitor and overlay
// timer cannot interfere with the assertions above.
#[wasm_bindgen_test]
async fn shell_reveals_once_and_menu_double_toggle_restores_state() {
    let document = document();
    let host = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&host).unwrap();
    yew::Renderer::<lexfolio::App>::with_root(host.clone()).render();
    TimeoutFuture::new(50).await;

    // Still inside the intro delay: overlay up, content veiled.
    assert!(document.query_selector(".loading-overlay").unwrap().is_some());
    let shell = document.query_selector(".portfolio-shell").unwrap().unwrap();
    assert!(shell.class_name().contains("veiled"));

    let burger: web_sys::HtmlElement = document
        .query_selector(".burger-menu")
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap();

    let menu_class = || {
        document
            .query_selector(".nav-right")
            .unwrap()
            .unwrap()
            .class_name()
    };
    assert!(!menu_class().contains("mobile-menu-open"));

    burger.click();
    TimeoutFuture::new(50).await;
    assert!(menu_class().contains("mobile-menu-open"));

    burger.click();
    TimeoutFuture::new(50).await;
    assert!(!menu_class().contains("mobile-menu-open"));

    // Past the intro delay: overlay gone, shell revealed, and it stays that
    // way.
    TimeoutFuture::new(1200).await;
    assert!(document.query_selector(".loading-overlay").unwrap().is_none());
    let shell = document.query_selector(".portfolio-shell").unwrap().unwrap();
    assert!(shell.class_name().contains("revealed"));
}
