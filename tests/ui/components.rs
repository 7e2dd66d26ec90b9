

#[path = "components/tag.rs"]
mod tag;

#[path = "components/toast.rs"]
mod toast;
