use todo_core::{
    NewTodoItem, TodoItem, ValidationError, STRIKE_CHARACTER, TODO_TEXT_MAX_CHARS,
};

fn item(text: &str, done: bool) -> TodoItem {
    TodoItem {
        id: 1,
        text: text.to_string(),
        done,
    }
}

#[test]
fn pending_item_displays_raw_text() {
    assert_eq!(item("Buy milk", false).display_text(), "Buy milk");
    assert_eq!(item("Buy milk", false).to_string(), "Buy milk");
}

#[test]
fn done_item_displays_struck_text() {
    assert_eq!(
        item("Buy milk", true).display_text(),
        "B\u{0336}u\u{0336}y\u{0336} \u{0336}m\u{0336}i\u{0336}l\u{0336}k\u{0336}"
    );
}

#[test]
fn struck_text_interleaves_every_character() {
    for text in ["", "a", "Buy milk", "naïve café", "日本語", "  "] {
        let original: Vec<char> = text.chars().collect();
        let striked: Vec<char> = item(text, true).display_text().chars().collect();

        assert_eq!(striked.len(), original.len() * 2, "text {text:?}");
        for (index, ch) in striked.iter().enumerate() {
            if index % 2 == 0 {
                assert_eq!(*ch, original[index / 2]);
            } else {
                assert_eq!(*ch, STRIKE_CHARACTER);
            }
        }
    }
}

#[test]
fn display_is_recomputed_after_mutation() {
    let mut todo = item("walk dog", false);
    assert_eq!(todo.display_text(), "walk dog");

    todo.mark_done();
    assert_eq!(todo.display_text(), todo.striked_text());

    todo.text = "ab".to_string();
    assert_eq!(todo.display_text(), "a\u{0336}b\u{0336}");

    todo.toggle();
    assert_eq!(todo.display_text(), "ab");
}

#[test]
fn empty_text_is_valid_and_displays_empty() {
    let todo = item("", true);
    assert!(todo.validate().is_ok());
    assert_eq!(todo.display_text(), "");
}

#[test]
fn length_boundary_is_counted_in_characters() {
    assert!(NewTodoItem::new("x".repeat(TODO_TEXT_MAX_CHARS)).validate().is_ok());
    assert!(NewTodoItem::new("é".repeat(TODO_TEXT_MAX_CHARS)).validate().is_ok());

    let err = NewTodoItem::new("x".repeat(TODO_TEXT_MAX_CHARS + 1))
        .validate()
        .unwrap_err();
    assert_eq!(err, ValidationError::TextTooLong { len: 201, max: 200 });
}

#[test]
fn serialization_uses_plain_field_names() {
    let json = serde_json::to_value(item("Buy milk", true)).unwrap();
    assert_eq!(json, serde_json::json!({"id": 1, "text": "Buy milk", "done": true}));

    let decoded: NewTodoItem = serde_json::from_value(serde_json::json!({"text": "a"})).unwrap();
    assert!(!decoded.done);
}
