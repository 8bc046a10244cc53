// SPDX-License-Identifier: MPL-2.0
use pedidos_backoffice::config;
use pedidos_backoffice::domain::Order;
use pedidos_backoffice::ui::modals::{self, Delete, Detail};
use pedidos_backoffice::ui::notifications::{Manager, Notification, FADE_DURATION};
use pedidos_backoffice::ui::orders;
use pedidos_backoffice::ui::overlay::OverlayController;
use std::time::{Duration, Instant};
use tempfile::tempdir;

#[test]
fn malformed_settings_fall_back_to_defaults_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "[api\nbase_url = ")
        .expect("Failed to write settings file");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert_eq!(loaded, config::Config::default());
    assert!(warning.is_some());
}

#[test]
fn settings_file_drives_runtime_values() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(
        dir.path().join("settings.toml"),
        "[api]\nbase_url = \"https://pedidos.example.com/api/\"\n\n[orders]\nsearch_debounce_ms = 150\n",
    )
    .expect("Failed to write settings file");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert!(warning.is_none());
    assert_eq!(loaded.api_base_url(), "https://pedidos.example.com/api");
    assert_eq!(loaded.search_debounce(), Duration::from_millis(150));
    assert_eq!(loaded.highlight_duration(), Duration::from_millis(2500));
}

#[test]
fn only_one_modal_is_shown_and_escape_releases_the_page() {
    let mut overlay = OverlayController::new();
    let mut detail = Detail::new(&mut overlay);
    let mut delete = Delete::new(&mut overlay);

    let _ = detail.open("P-1", &mut overlay);
    assert!(overlay.is_backdrop_visible());
    assert!(overlay.is_scroll_locked());

    let _ = delete.open("P-1", &mut overlay);
    assert!(!overlay.is_open(detail.modal()));
    assert_eq!(overlay.active(), Some(delete.modal()));

    let escape = iced::Event::Keyboard(iced::keyboard::Event::KeyPressed {
        key: iced::keyboard::Key::Named(iced::keyboard::key::Named::Escape),
        modified_key: iced::keyboard::Key::Named(iced::keyboard::key::Named::Escape),
        physical_key: iced::keyboard::key::Physical::Code(iced::keyboard::key::Code::Escape),
        location: iced::keyboard::Location::Standard,
        modifiers: iced::keyboard::Modifiers::default(),
        text: None,
        repeat: false,
    });
    assert!(overlay.handle_event(&escape));

    assert_eq!(overlay.active(), None);
    assert!(!overlay.is_backdrop_visible());
    assert!(!overlay.is_scroll_locked());
}

#[test]
fn reply_for_a_closed_modal_is_not_rendered() {
    let mut overlay = OverlayController::new();
    let mut detail = Detail::new(&mut overlay);

    let events = detail.open("P-1", &mut overlay);
    let ticket = match &events[0] {
        modals::Event::Api(request) => request.ticket,
        other => panic!("unexpected event {other:?}"),
    };
    overlay.dismiss();

    let order = Order {
        id: "P-1".into(),
        ..Order::default()
    };
    let events = detail.update(
        modals::detail::Message::Reply(ticket, modals::Reply::Order(Ok(Some(order)))),
        &mut overlay,
    );

    assert!(events.is_empty());
    assert!(detail.content().is_loading());
}

#[test]
fn toast_queue_caps_and_expires() {
    let mut manager = Manager::with_limits(4, Duration::from_millis(3000));
    let start = Instant::now();

    for n in 0..5 {
        manager.push(Notification::info(format!("aviso {n}")).issued_at(start));
    }

    let shown: Vec<_> = manager.visible().map(|n| n.message().to_string()).collect();
    assert_eq!(shown, ["aviso 4", "aviso 3", "aviso 2", "aviso 1"]);

    manager.tick(start + Duration::from_millis(3000));
    assert_eq!(manager.visible_count(), 4);

    manager.tick(start + Duration::from_millis(3000) + FADE_DURATION);
    assert!(!manager.has_notifications());
}

#[test]
fn orders_search_applies_after_the_debounce() {
    let mut state = orders::State::new(Duration::from_millis(300), Duration::from_millis(2500));
    let start = Instant::now();
    let order = |id: &str, cliente: &str| Order {
        id: id.into(),
        cliente: Some(cliente.into()),
        ..Order::default()
    };
    let _ = orders::update(
        &mut state,
        orders::Message::Loaded(Ok(vec![order("1", "Ana"), order("2", "Luis")])),
        start,
    );

    let _ = orders::update(&mut state, orders::Message::SearchChanged("ana".into()), start);
    state.tick(start + Duration::from_millis(100));
    assert_eq!(state.visible().len(), 2);

    state.tick(start + Duration::from_millis(300));
    let visible: Vec<_> = state.visible().iter().map(|o| o.id.clone()).collect();
    assert_eq!(visible, ["1"]);
}
