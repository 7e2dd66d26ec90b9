use portalist::ui::components::{Toast, ToastKind};

#[test]
fn test_constructors_set_kind() {
    assert_eq!(Toast::info("i").kind(), ToastKind::Info);
    assert_eq!(Toast::success("s").kind(), ToastKind::Success);
    assert_eq!(Toast::error("e").kind(), ToastKind::Error);
    assert_eq!(Toast::new("w", ToastKind::Warning).kind(), ToastKind::Warning);
}

#[test]
fn test_message_is_preserved() {
    let toast = Toast::info("saved 3 items");
    assert_eq!(toast.message(), "saved 3 items");
}
