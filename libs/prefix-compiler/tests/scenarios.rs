//! End-to-end behaviour of the compiler.

use prefix_ast::{source, target, NodeKind, SerializedNode};
use prefix_compiler::{
    compile, compile_batch, generate, parse, tokenize, transform, traverse, Compilation,
    CompileError, Stage,
};
use prefix_parser::{LexError, ParseError, Token, TokenKind};
use prefix_transform::{EventLog, Phase, TraverseError};

// =============================================================================
// SCENARIOS
// =============================================================================

#[test]
fn test_bare_number() {
    assert_eq!(compile("123").unwrap(), "123");
}

#[test]
fn test_simple_call() {
    assert_eq!(compile("(add 123 456)").unwrap(), "add(123, 456);");
}

#[test]
fn test_nested_call_with_string() {
    assert_eq!(
        compile(r#"(subtract 123 (add 456 "999"))"#).unwrap(),
        r#"subtract(123, add(456, "999"));"#
    );
}

#[test]
fn test_unknown_character() {
    assert_eq!(
        compile("(add 1 #)").unwrap_err(),
        CompileError::Lex(LexError::UnexpectedCharacter {
            character: '#',
            position: 8
        })
    );
}

#[test]
fn test_sibling_top_level_calls() {
    assert_eq!(
        compile("(add 1 2) (subtract 3 4)").unwrap(),
        "add(1, 2);\nsubtract(3, 4);"
    );
}

#[test]
fn test_original_walkthrough() {
    let input = "(add 2 (subtract 4 2))";
    let tokens = tokenize(input).unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::new(TokenKind::ParenOpen, "("),
            Token::new(TokenKind::Name, "add"),
            Token::new(TokenKind::Number, "2"),
            Token::new(TokenKind::ParenOpen, "("),
            Token::new(TokenKind::Name, "subtract"),
            Token::new(TokenKind::Number, "4"),
            Token::new(TokenKind::Number, "2"),
            Token::new(TokenKind::ParenClose, ")"),
            Token::new(TokenKind::ParenClose, ")"),
        ]
    );

    let ast = parse(tokens).unwrap();
    assert_eq!(
        ast,
        source::Node::program(vec![source::Node::call(
            "add",
            vec![
                source::Node::number("2"),
                source::Node::call(
                    "subtract",
                    vec![source::Node::number("4"), source::Node::number("2")]
                ),
            ]
        )])
    );

    let new_ast = transform(&ast).unwrap();
    assert_eq!(
        new_ast,
        target::Node::program(vec![target::Node::statement(target::Node::call(
            "add",
            vec![
                target::Node::number("2"),
                target::Node::call(
                    "subtract",
                    vec![target::Node::number("4"), target::Node::number("2")]
                ),
            ]
        ))])
    );

    assert_eq!(generate(&new_ast).unwrap(), "add(2, subtract(4, 2));");
}

// =============================================================================
// ERRORS BY STAGE
// =============================================================================

#[test]
fn test_errors_report_their_stage() {
    let cases = [
        ("(add \"open", Stage::Lex),
        ("(add 1 @)", Stage::Lex),
        ("(add 1", Stage::Parse),
        (")", Stage::Parse),
        ("(1 2)", Stage::Parse),
        ("()", Stage::Parse),
    ];
    for (input, stage) in cases {
        let err = compile(input).unwrap_err();
        assert_eq!(err.stage(), stage, "input {input:?}");
    }
}

#[test]
fn test_unterminated_string_position() {
    assert_eq!(
        compile("(f \"abc").unwrap_err(),
        CompileError::Lex(LexError::UnterminatedString { position: 4 })
    );
}

#[test]
fn test_end_of_input_inside_call() {
    assert_eq!(
        compile("(add 1 (sub 2 3)").unwrap_err(),
        CompileError::Parse(ParseError::UnexpectedEndOfInput)
    );
}

#[test]
fn test_transform_error_wraps() {
    for inner in [Vec::new(), vec![source::Node::string("s")]] {
        let nested = source::Node::program(vec![source::Node::call(
            "f",
            vec![source::Node::number("1"), source::Node::program(inner)],
        )]);
        let err = CompileError::from(transform(&nested).unwrap_err());
        assert_eq!(err.stage(), Stage::Transform);
        assert_eq!(
            err,
            CompileError::Transform(TraverseError::DetachedNode {
                kind: NodeKind::Program
            })
        );
    }
}

#[test]
fn test_generate_error_wraps() {
    let err = CompileError::from(generate(&SerializedNode::new("Loop")).unwrap_err());
    assert_eq!(err.stage(), Stage::Generate);
}

// =============================================================================
// PROPERTIES
// =============================================================================

const CORPUS: &[&str] = &[
    "",
    "1",
    "\"text\"",
    "(now)",
    "(add 1 2)",
    "(a (b (c 1) \"x\") 2) (d) 7",
    "(outer (inner (deepest 1 2 3)))",
];

#[test]
fn test_compile_is_deterministic() {
    for input in CORPUS {
        assert_eq!(compile(input), compile(input));
    }
}

#[test]
fn test_shape_is_preserved() {
    for input in CORPUS {
        let run = Compilation::run(input).unwrap();
        assert_eq!(run.source.children().len(), run.target.children().len());
        assert_eq!(
            run.source.count(NodeKind::CallExpression),
            run.target.count(NodeKind::CallExpression)
        );
        let top_level_calls = run
            .source
            .children()
            .iter()
            .filter(|n| n.kind() == NodeKind::CallExpression)
            .count();
        assert_eq!(run.target.count(NodeKind::ExpressionStatement), top_level_calls);
        assert_eq!(
            run.output.matches(';').count(),
            top_level_calls,
            "input {input:?}"
        );
    }
}

#[test]
fn test_traversal_brackets_every_node() {
    for input in CORPUS {
        let ast = parse(tokenize(input).unwrap()).unwrap();
        let mut log = EventLog::default();
        traverse(&ast, &mut log).unwrap();

        let mut depth = 0usize;
        for event in &log.events {
            match event.phase {
                Phase::Enter => depth += 1,
                Phase::Exit => depth -= 1,
            }
        }
        assert_eq!(depth, 0);
        let nodes = NodeKind::ALL.iter().map(|k| ast.count(*k)).sum::<usize>();
        assert_eq!(log.events.len(), nodes * 2);
    }
}

#[test]
fn test_deeply_nested_input() {
    let depth = 20_000;
    let input = format!("{}1{}", "(f ".repeat(depth), ")".repeat(depth));
    let output = compile(&input).unwrap();
    assert!(output.starts_with("f(f(f("));
    assert!(output.ends_with(");"));
    assert_eq!(output.matches('(').count(), depth);
}

#[test]
fn test_batch_matches_sequential() {
    let sequential: Vec<_> = CORPUS.iter().map(|input| compile(input)).collect();
    assert_eq!(compile_batch(CORPUS), sequential);
}

#[test]
fn test_compilation_serializes() {
    let run = Compilation::run("(f \"a\")").unwrap();
    let json = serde_json::to_value(&run.target).unwrap();
    assert_eq!(json["body"][0]["type"], "ExpressionStatement");
    assert_eq!(json["body"][0]["expression"]["callee"]["name"], "f");
    let tokens = serde_json::to_value(&run.tokens).unwrap();
    assert_eq!(tokens[2]["kind"], "string");
}
