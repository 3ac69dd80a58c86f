use tactile_style::{Declaration, Pseudo, StyleError, StyleMap};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn missing_selector_is_absent() {
    init_logging();
    let map = StyleMap::new();
    assert!(map.lookup("p").is_none());
    assert!(map.declarations("p").is_none());
}

#[test]
fn declarations_keep_source_order() {
    init_logging();
    let mut map = StyleMap::new();
    map.insert("p", ["margin:1px", "line-height:6"]);
    map.insert("p", ["margin:2px"]);
    assert_eq!(
        map.lookup("p"),
        Some(&["margin:1px".to_owned(), "line-height:6".to_owned(), "margin:2px".to_owned()][..])
    );
}

#[test]
fn selector_lists_expand_to_each_selector() {
    init_logging();
    let mut map = StyleMap::new();
    map.insert_rule("h1, h2,,h3", ["padding:1"]);
    assert_eq!(map.len(), 3);
    for selector in ["h1", "h2", "h3"] {
        assert_eq!(map.lookup(selector).map(<[String]>::len), Some(1));
    }
}

#[test]
fn pseudo_declarations_parse_with_their_tag() {
    init_logging();
    let map: StyleMap = [("li", vec!["before|content:\"•\"".to_owned(), "after|content:'.'".to_owned()])]
        .into_iter()
        .collect();
    let Some(Ok(declarations)) = map.declarations("li") else {
        panic!("li declarations should parse");
    };
    assert_eq!(declarations[0].pseudo, Some(Pseudo::Before));
    assert_eq!(declarations[1].pseudo, Some(Pseudo::After));
    assert_eq!(declarations[1].unquoted_value(), ".");
}

#[test]
fn malformed_declaration_propagates() {
    init_logging();
    let mut map = StyleMap::new();
    map.insert("p", ["margin:1px", "broken"]);
    assert_eq!(
        map.declarations("p"),
        Some(Err(StyleError::MalformedDeclaration("broken".to_owned())))
    );
    assert!(Declaration::parse("margin:1px").is_ok());
}
