use prefix_ast::{source, target, SerializedNode};
use serde_json::json;

#[test]
fn source_tree_uses_type_tags() {
    let tree = source::Node::program(vec![source::Node::call(
        "add",
        vec![source::Node::number("2"), source::Node::string("x")],
    )]);
    let value = serde_json::to_value(&tree).unwrap();
    assert_eq!(
        value,
        json!({
            "type": "Program",
            "body": [{
                "type": "CallExpression",
                "name": "add",
                "params": [
                    { "type": "NumberLiteral", "value": "2" },
                    { "type": "StringLiteral", "value": "x" }
                ]
            }]
        })
    );
}

#[test]
fn target_callee_is_tagged_identifier() {
    let tree = target::Node::statement(target::Node::call("add", vec![target::Node::number("2")]));
    let value = serde_json::to_value(&tree).unwrap();
    assert_eq!(
        value,
        json!({
            "type": "ExpressionStatement",
            "expression": {
                "type": "CallExpression",
                "callee": { "type": "Identifier", "name": "add" },
                "arguments": [{ "type": "NumberLiteral", "value": "2" }]
            }
        })
    );
    let back: target::Node = serde_json::from_value(value).unwrap();
    assert_eq!(back, tree);
}

#[test]
fn serialized_node_reads_target_json() {
    let raw: SerializedNode = serde_json::from_str(
        r#"{"type":"CallExpression","callee":{"type":"Identifier","name":"f"},"arguments":[]}"#,
    )
    .unwrap();
    let typed = target::Node::call("f", Vec::new());
    assert_eq!(raw, SerializedNode::from(&typed));
}

#[test]
fn serialized_node_skips_absent_fields() {
    let raw = SerializedNode::from(&source::Node::number("9"));
    let text = serde_json::to_string(&raw).unwrap();
    assert_eq!(text, r#"{"type":"NumberLiteral","value":"9"}"#);
}
