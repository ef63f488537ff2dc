//! Completion behavior as seen from the text area

use sol_editor::{complete, suggest, templates, Dictionary, Editor, Key, MAX_SUGGESTIONS};

#[test]
fn test_pragma_phrase() {
    let labels = suggest("pragma so", 9);
    assert_eq!(labels, vec!["pragma solidity"]);
}

#[test]
fn test_member_access() {
    assert!(suggest("msg.se", 6).contains(&"msg.sender".to_string()));
}

#[test]
fn test_single_char_prefix() {
    assert!(suggest("x", 1).is_empty());
}

#[test]
fn test_prefix_before_cursor_only() {
    // Text after the cursor does not take part
    let buffer = "emit Transfer(msg.va, to);";
    let offset = buffer.find(", to").unwrap();
    assert_eq!(suggest(buffer, offset), vec!["msg.value"]);
}

#[test]
fn test_bounds_and_exclusion_over_every_prefix() {
    let dict = Dictionary::solidity();
    for entry in dict.entries() {
        for end in 1..=entry.len() {
            let prefix = &entry[..end];
            let labels = suggest(prefix, prefix.len());
            assert!(labels.len() <= MAX_SUGGESTIONS);
            let token = prefix.rsplit(' ').next().unwrap().to_lowercase();
            assert!(
                labels.iter().all(|l| l.to_lowercase() != token),
                "{:?} suggested its own prefix",
                prefix
            );
        }
    }
}

#[test]
fn test_accepting_replaces_prefix_span() {
    let buffer = "address a = addr;";
    let offset = buffer.find(';').unwrap();
    let completion = complete(buffer, offset);
    assert_eq!(completion.prefix, "addr");
    assert_eq!(completion.labels(), vec!["address", "address(0)"]);

    let applied = completion.apply(buffer, 1).unwrap();
    assert_eq!(applied.text, "address a = address(0);");
    assert_eq!(applied.cursor, "address a = address(0)".len());
    assert!(completion.apply(buffer, 5).is_none());
}

#[test]
fn test_accepting_phrase_replaces_both_words() {
    let buffer = "// header\npragma so";
    let completion = complete(buffer, buffer.len());
    let applied = completion.apply(buffer, 0).unwrap();
    assert_eq!(applied.text, "// header\npragma solidity");
    assert_eq!(applied.cursor, applied.text.len());
}

#[test]
fn test_custom_dictionary() {
    let dict = Dictionary::new(["onlyOwner", "owner", "ownerOf"]);
    assert_eq!(dict.suggest("own", 3), vec!["owner", "ownerOf"]);
    assert_eq!(dict.suggest("ONLY", 4), vec!["onlyOwner"]);
}

#[test]
fn test_editing_a_template() {
    let source = templates::find("blank").unwrap().source;
    let marker = "// Write your code here";
    let at = source.find(marker).unwrap() + marker.len();

    let mut editor = Editor::new(source);
    editor.set_cursor(at);
    editor.handle_key(Key::Enter);
    editor.type_str("modifier guard {");
    assert_eq!(&editor.text()[at..at + 21], "\n    modifier guard {");
    assert_eq!(editor.text()[at + 21..].chars().next(), Some('}'));

    editor.handle_key(Key::Enter);
    editor.type_str("emit");
    assert!(editor.popup().is_none());

    let line = editor.position().line;
    assert_eq!(editor.buffer().line_before_cursor(), "        emit");
    assert!(line > 1);
}

#[test]
fn test_completion_json_shape() {
    let completion = complete("owner = msg.se", 14);
    let json = serde_json::to_value(&completion).unwrap();
    assert_eq!(json["prefix"], "msg.se");
    assert_eq!(json["prefix_start"], 8);
    assert_eq!(json["items"][0]["label"], "msg.sender");
    assert_eq!(json["items"][0]["replace"]["start"], 8);
    assert_eq!(json["items"][0]["replace"]["end"], 14);

    let back: sol_editor::Completion = serde_json::from_value(json).unwrap();
    assert_eq!(back, completion);
}
