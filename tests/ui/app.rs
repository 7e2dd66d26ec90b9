use portalist::config::Config;
use portalist::ui::core::{Action, AppContext, Component};
use portalist::ui::App;

fn overlay_count(app: &App) -> usize {
    app.context.portal.with_host(|host| host.manager().map(|m| m.len()).unwrap_or(0))
}

#[test]
fn test_welcome_toast_is_queued_before_attach() {
    let app = App::new(AppContext::new(Config::default()));

    app.context.portal.with_host(|host| {
        assert!(!host.is_attached());
        assert_eq!(host.pending().len(), 1);
    });
}

#[test]
fn test_init_attaches_and_drains_the_welcome_toast() {
    let mut app = App::new(AppContext::new(Config::default()));
    app.init().unwrap();

    app.context.portal.with_host(|host| {
        assert!(host.is_attached());
        assert!(host.pending().is_empty());
        assert_eq!(host.manager().unwrap().len(), 1);
    });

    app.shutdown();
}

#[test]
fn test_modal_toggles_through_the_portal() {
    let mut app = App::new(AppContext::new(Config::default()));
    app.init().unwrap();
    let base = overlay_count(&app);

    app.update(Action::ToggleModal);
    assert_eq!(overlay_count(&app), base + 1);

    app.update(Action::ToggleModal);
    assert_eq!(overlay_count(&app), base);

    app.shutdown();
}

#[test]
fn test_confirmed_picker_unmounts_popup_and_toasts_the_choice() {
    let mut app = App::new(AppContext::new(Config::default()));
    app.init().unwrap();
    let base = overlay_count(&app);

    app.update(Action::OpenPicker);
    assert_eq!(overlay_count(&app), base + 1);

    app.update(Action::PickerDown);
    app.update(Action::ClosePicker { confirmed: true });

    // Popup gone, confirmation toast mounted in its place
    assert_eq!(overlay_count(&app), base + 1);

    app.shutdown();
}

#[test]
fn test_quit_action_sets_the_quit_flag() {
    let mut app = App::new(AppContext::new(Config::default()));
    assert!(!app.should_quit);

    app.update(Action::Quit);
    assert!(app.should_quit);
}
