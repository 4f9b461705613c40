use zconv::{from_xml_str, Object, Value, XmlConfig};

fn object(entries: &[(&str, Value)]) -> Value {
    Value::Object(
        entries
            .iter()
            .map(|(key, value)| (key.to_string(), value.clone()))
            .collect::<Object>(),
    )
}

fn strings(items: &[&str]) -> Value {
    items.iter().copied().map(Value::from).collect::<Vec<_>>().into()
}

#[test]
fn test_single_text_child_collapses_into_parent() -> zconv::Result<()> {
    let document = from_xml_str("<a><b>5</b></a>")?;
    assert_eq!(document.get("a"), Some(&Value::from("5")));
    Ok(())
}

#[test]
fn test_repeated_tags_become_a_sequence() -> zconv::Result<()> {
    let document = from_xml_str("<a><item>1</item><item>2</item></a>")?;
    assert_eq!(
        Value::Object(document),
        object(&[("a", object(&[("item", strings(&["1", "2"]))]))])
    );
    Ok(())
}

#[test]
fn test_attributes_and_text() -> zconv::Result<()> {
    let document = from_xml_str(r#"<a id="7">hi</a>"#)?;
    assert_eq!(
        document.get("a"),
        Some(&object(&[("@id", Value::from("7")), ("#text", Value::from("hi"))]))
    );
    Ok(())
}

#[test]
fn test_groups_keep_first_seen_order() -> zconv::Result<()> {
    let document = from_xml_str("<r><x>1</x><y>2</y><x>3</x></r>")?;
    let r = document.get("r").and_then(Value::as_object).cloned();
    let keys: Vec<String> = r.iter().flat_map(|r| r.keys().cloned()).collect();
    assert_eq!(keys, ["x", "y"]);
    assert_eq!(r.and_then(|r| r.get("x").cloned()), Some(strings(&["1", "3"])));
    Ok(())
}

#[test]
fn test_wrapper_chain_collapses_to_leaf() -> zconv::Result<()> {
    let document = from_xml_str("<a><b><c><d>deep</d></c></b></a>")?;
    assert_eq!(document.get("a"), Some(&Value::from("deep")));
    Ok(())
}

#[test]
fn test_wrapper_with_attributes_is_kept() -> zconv::Result<()> {
    let document = from_xml_str(r#"<a v="1"><b>x</b></a>"#)?;
    assert_eq!(
        document.get("a"),
        Some(&object(&[("@v", Value::from("1")), ("b", Value::from("x"))]))
    );
    Ok(())
}

#[test]
fn test_empty_elements_are_null() -> zconv::Result<()> {
    assert_eq!(from_xml_str("<a/>")?.get("a"), Some(&Value::Null));
    assert_eq!(
        Value::Object(from_xml_str("<a><b/><c></c></a>")?),
        object(&[("a", object(&[("b", Value::Null), ("c", Value::Null)]))])
    );
    Ok(())
}

#[test]
fn test_text_is_trimmed_and_entities_decoded() -> zconv::Result<()> {
    let document = from_xml_str("<a>\n   fish &amp; chips  \n</a>")?;
    assert_eq!(document.get("a"), Some(&Value::from("fish & chips")));
    Ok(())
}

#[test]
fn test_lossless_config_reads_typed_item_lists() -> zconv::Result<()> {
    let xml = "<r><n>12</n><ok>true</ok><zip>007</zip><list><item>1.5</item><item>x</item></list></r>";
    let document = zconv::xml::from_str(xml, &XmlConfig::lossless())?;
    assert_eq!(
        Value::Object(document),
        object(&[(
            "r",
            object(&[
                ("n", Value::from(12.0)),
                ("ok", Value::from(true)),
                ("zip", Value::from("007")),
                ("list", Value::from(vec![Value::from(1.5), Value::from("x")])),
            ])
        )])
    );
    Ok(())
}

#[test]
fn test_custom_item_name() -> zconv::Result<()> {
    let config = XmlConfig::new().with_item_name("entry");
    let xml = zconv::xml::to_string(&Value::from(vec![Value::from("a")]), &config)?;
    assert!(xml.contains("<root>\n  <entry>a</entry>\n</root>"));
    Ok(())
}
