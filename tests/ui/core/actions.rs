use portalist::ui::core::actions::Action;
use portalist::ui::components::ToastKind;

#[test]
fn test_action_enum_exists() {
    // Test that Action enum is accessible and has a valid size
    let action_size = std::mem::size_of::<Action>();
    assert!(action_size > 0, "Action enum should have a non-zero size");
}

#[test]
fn test_actions_are_cloneable() {
    let action = Action::ShowToast {
        message: "hello".to_string(),
        kind: ToastKind::Info,
    };
    let copy = action.clone();
    assert!(matches!(copy, Action::ShowToast { .. }));
}
