use crate::portal::PortalKey;
use crate::ui::components::toast::ToastKind;

#[derive(Debug, Clone)]
pub enum Action {
    // Overlay operations
    ShowToast { message: String, kind: ToastKind },
    ShowBridgeToast(String),
    ToggleModal,
    ToggleLogs,
    DismissOverlay(PortalKey),

    // Picker operations
    OpenPicker,
    ClosePicker { confirmed: bool },
    PickerUp,
    PickerDown,

    // Pager operations
    NextPage,
    PreviousPage,

    // Tag operations
    NextTag,
    PreviousTag,
    ToggleTag,
    CloseTag,

    // App control
    Quit,
    None,
}
