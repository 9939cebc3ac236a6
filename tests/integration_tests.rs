use serde::Serialize;
use serde_dictxml::{
    dict, sanitize, to_string, to_string_with_options, to_value, to_writer, Error, Renderer,
    Value, XmlOptions,
};

#[derive(Serialize, Debug)]
struct User {
    id: u32,
    name: String,
    active: bool,
    tags: Vec<String>,
}

#[derive(Serialize, Debug)]
struct Product {
    sku: String,
    price: f64,
    quantity: u32,
}

#[derive(Serialize, Debug)]
struct Order {
    order_id: u32,
    customer: User,
    items: Vec<Product>,
    note: Option<String>,
}

const PROLOG: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;

#[test]
fn test_nested_mapping_document() {
    let data = dict!({ "a": { "b": "c" } });
    let xml = to_string(&data, "root").unwrap();
    assert_eq!(xml, format!("{}<root ><a><b>c</b></a></root>", PROLOG));
}

#[test]
fn test_sequence_scenario() {
    let data = dict!({ "items": ["x", "y"] });
    let renderer = Renderer::new(&data, XmlOptions::new("list")).unwrap();
    assert_eq!(renderer.body(), "<items>x</items><items>y</items>");
}

#[test]
fn test_sequence_element_count() {
    let items: Vec<Value> = (0..25i64).map(Value::from).collect();
    let data = Value::Object(
        vec![("n".to_string(), Value::Array(items))]
            .into_iter()
            .collect(),
    );
    let body = Renderer::new(&data, XmlOptions::new("root")).unwrap().body();

    assert_eq!(body.matches("<n>").count(), 25);
    assert_eq!(body.matches("</n>").count(), 25);
    assert!(body.starts_with("<n>0</n><n>1</n>"));
    assert!(body.ends_with("<n>24</n>"));
}

#[test]
fn test_null_handling() {
    let data = dict!({ "key": null });
    let xml = to_string_with_options(&data, XmlOptions::new("root").with_prolog(false)).unwrap();
    assert_eq!(xml, "<root ><key></key></root>");
}

#[test]
fn test_root_attributes() {
    let data = dict!({});
    let options = XmlOptions::new("root").with_attribute("id", "1");
    let renderer = Renderer::new(&data, options).unwrap();
    assert!(renderer.xml(true).contains(r#"<root id="1">"#));
    assert_eq!(renderer.xml(false), r#"<root id="1"></root>"#);
}

#[test]
fn test_prolog_suppression() {
    let data = dict!({ "a": 1 });
    let renderer = Renderer::new(&data, XmlOptions::new("root")).unwrap();

    let without = renderer.xml(false);
    assert!(without.starts_with("<root"));
    assert!(!without.contains("<?xml"));

    let with = renderer.xml(true);
    assert_eq!(with, format!("{}{}", renderer.prolog(), without));
}

#[test]
fn test_escaping_example() {
    assert_eq!(sanitize("<a>&'\""), "&lt;a&gt;&amp;&apos;&quot;");
    assert_eq!(sanitize("&amp;"), "&amp;amp;");
}

#[test]
fn test_nested_struct() {
    let order = Order {
        order_id: 12345,
        customer: User {
            id: 123,
            name: "Alice".to_string(),
            active: true,
            tags: vec!["vip".to_string()],
        },
        items: vec![
            Product {
                sku: "WIDGET-001".to_string(),
                price: 29.99,
                quantity: 2,
            },
            Product {
                sku: "GADGET-002".to_string(),
                price: 49.0,
                quantity: 1,
            },
        ],
        note: None,
    };

    let xml = to_string(&order, "order").unwrap();
    println!("Order XML:\n{}", xml);

    assert_eq!(
        xml,
        format!(
            "{}<order ><order_id>12345</order_id>\
             <customer><id>123</id><name>Alice</name><active>true</active><tags>vip</tags></customer>\
             <items><sku>WIDGET-001</sku><price>29.99</price><quantity>2</quantity></items>\
             <items><sku>GADGET-002</sku><price>49.0</price><quantity>1</quantity></items>\
             <note></note></order>",
            PROLOG
        )
    );
}

#[test]
fn test_from_json_input() {
    let json = r#"{"library": {"name": "City & County", "books": [{"title": "A"}, {"title": "B"}], "open": false}}"#;
    let data: Value = serde_json::from_str(json).unwrap();

    let xml = to_string_with_options(&data, XmlOptions::new("catalog").with_prolog(false)).unwrap();
    assert_eq!(
        xml,
        "<catalog ><library><name>City &amp; County</name>\
         <books><title>A</title></books><books><title>B</title></books>\
         <open>false</open></library></catalog>"
    );
}

#[test]
fn test_value_round_trips_through_json() {
    let data = dict!({ "a": [1, 2], "b": { "c": null } });
    let json = serde_json::to_string(&data).unwrap();
    assert_eq!(json, r#"{"a":[1,2],"b":{"c":null}}"#);

    let back: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(back, data);
}

#[test]
fn test_matrix_flattens() {
    let data = dict!({ "cell": [[1, 2], [3, 4]] });
    let renderer = Renderer::new(&data, XmlOptions::new("grid")).unwrap();
    assert_eq!(
        renderer.body(),
        "<cell>1</cell><cell>2</cell><cell>3</cell><cell>4</cell>"
    );
}

#[test]
fn test_invalid_inputs() {
    let list = dict!([1, 2]);
    assert!(matches!(
        Renderer::new(&list, XmlOptions::new("root")),
        Err(Error::InvalidInput { .. })
    ));

    let data = dict!({});
    assert!(matches!(
        Renderer::new(&data, XmlOptions::new("")),
        Err(Error::InvalidRootName(_))
    ));

    assert!(matches!(to_string(&42, "root"), Err(Error::InvalidInput { .. })));
}

#[test]
fn test_custom_declaration() {
    let data = dict!({ "v": 1 });
    let options = XmlOptions::new("root")
        .with_version("1.1")
        .with_encoding("ISO-8859-1");
    let xml = to_string_with_options(&data, options).unwrap();
    assert_eq!(
        xml,
        r#"<?xml version="1.1" encoding="ISO-8859-1"?><root ><v>1</v></root>"#
    );
}

#[test]
fn test_to_writer() {
    let mut buffer = Vec::new();
    to_writer(&mut buffer, &dict!({ "a": "b" }), "root").unwrap();
    assert_eq!(
        String::from_utf8(buffer).unwrap(),
        format!("{}<root ><a>b</a></root>", PROLOG)
    );
}

#[test]
fn test_to_value_keeps_field_order() {
    let user = User {
        id: 1,
        name: "x".to_string(),
        active: false,
        tags: vec![],
    };
    let value = to_value(&user).unwrap();
    let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
    assert_eq!(keys, vec!["id", "name", "active", "tags"]);

    // an empty Vec renders no elements at all
    let xml = to_string_with_options(&user, XmlOptions::new("u").with_prolog(false)).unwrap();
    assert_eq!(xml, "<u ><id>1</id><name>x</name><active>false</active></u>");
}
