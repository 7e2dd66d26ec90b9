use portalist::ui::components::Tag;

#[test]
fn test_toggle_flips_selection() {
    let mut tag = Tag::new("alpha");
    assert!(!tag.is_selected());

    assert!(tag.toggle());
    assert!(tag.is_selected());

    assert!(!tag.toggle());
    assert!(!tag.is_selected());
}

#[test]
fn test_disabled_tag_ignores_toggle() {
    let mut tag = Tag::new("alpha").disabled(true);

    assert!(!tag.toggle());
    assert!(!tag.is_selected());
}

#[test]
fn test_only_closable_tags_close() {
    let mut plain = Tag::new("plain");
    plain.close();
    assert!(!plain.is_closed());

    let mut closable = Tag::new("closable").closable(true);
    closable.close();
    assert!(closable.is_closed());
}

#[test]
fn test_closed_tag_renders_nothing_and_stops_reacting() {
    let mut tag = Tag::new("beta").closable(true).selected(true);
    assert!(tag.as_span(false).is_some());

    tag.close();
    assert!(tag.as_span(false).is_none());

    // Selection no longer reacts once closed
    tag.toggle();
    assert!(tag.is_selected());
}

#[test]
fn test_span_contains_close_marker_for_closable_tags() {
    let tag = Tag::new("beta").closable(true);
    let span = tag.as_span(false).unwrap();
    assert!(span.content.contains("beta"));
    assert!(span.content.contains("x"));
}
