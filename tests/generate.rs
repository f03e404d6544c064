use pretty_assertions::assert_eq;

use visitgen::generators::{JavaGenerator, PhpGenerator, PythonGenerator, TypeScriptGenerator};
use visitgen::{parse_grammar, Emitter, Error, FieldSpec, Language, LOX_EXPR_GRAMMAR};

fn languages() -> [&'static dyn Language; 4] {
    [&PhpGenerator, &TypeScriptGenerator, &JavaGenerator, &PythonGenerator]
}

/// Positions of `needles` in `haystack`, panicking if one is missing.
fn positions(haystack: &str, needles: &[String]) -> Vec<usize> {
    needles
        .iter()
        .map(|needle| {
            haystack
                .find(needle.as_str())
                .unwrap_or_else(|| panic!("`{}` not found in:\n{}", needle, haystack))
        })
        .collect()
}

#[test]
fn every_dispatch_call_has_a_visitor_method() {
    let types = parse_grammar(LOX_EXPR_GRAMMAR).unwrap();

    for lang in languages() {
        let out = Emitter::new(lang).emit("Expr", &types).unwrap();

        for ty in &types {
            let visit = format!("visit{}Expr", ty.name);
            let dispatch = match lang.lang_id() {
                "php" => format!("return $visitor->{}($this);", visit),
                "py" => format!("return visitor.{}(self)", visit),
                _ => format!("return visitor.{}(this);", visit),
            };

            assert_eq!(out.matches(&dispatch).count(), 1, "{}: {}", lang.lang_id(), dispatch);
            // Declared once in the visitor, called once from the node
            assert_eq!(out.matches(&format!("{}(", visit)).count(), 2, "{}", lang.lang_id());
        }
    }
}

#[test]
fn output_is_idempotent() {
    for lang in languages() {
        let first = Emitter::new(lang)
            .with_namespace("lox")
            .generate("Expr", LOX_EXPR_GRAMMAR)
            .unwrap();
        let second = Emitter::new(lang)
            .with_namespace("lox")
            .generate("Expr", LOX_EXPR_GRAMMAR)
            .unwrap();

        assert_eq!(first, second);
    }
}

#[test]
fn grammar_order_is_preserved() {
    let forward = ["Unary : Token operator, Expr right", "Binary : Expr left, Expr right"];
    let backward = [forward[1], forward[0]];

    let visits = |out: &str| {
        positions(
            out,
            &[
                "function visitUnaryExpr(".to_string(),
                "function visitBinaryExpr(".to_string(),
                "class Unary ".to_string(),
                "class Binary ".to_string(),
            ],
        )
    };

    let out = Emitter::new(&PhpGenerator).generate("Expr", forward).unwrap();
    let p = visits(&out.contents);
    assert!(p[0] < p[1] && p[2] < p[3], "{:?}", p);

    let out = Emitter::new(&PhpGenerator).generate("Expr", backward).unwrap();
    let p = visits(&out.contents);
    assert!(p[1] < p[0] && p[3] < p[2], "{:?}", p);
}

#[test]
fn blocks_come_base_then_visitor_then_nodes() {
    let out = Emitter::new(&JavaGenerator)
        .generate("Expr", LOX_EXPR_GRAMMAR)
        .unwrap();

    let p = positions(
        &out.contents,
        &[
            "abstract class Expr {".to_string(),
            "interface Visitor<R> {".to_string(),
            "final class Binary extends Expr {".to_string(),
            "final class Grouping extends Expr {".to_string(),
            "final class Literal extends Expr {".to_string(),
            "final class Unary extends Expr {".to_string(),
        ],
    );

    let mut sorted = p.clone();
    sorted.sort_unstable();
    assert_eq!(p, sorted);
}

#[test]
fn empty_grammar_emits_nothing() {
    for lang in languages() {
        let err = Emitter::new(lang)
            .generate("Expr", Vec::<String>::new())
            .unwrap_err();

        assert_eq!(
            err,
            Error::EmptyGrammar {
                base_name: "Expr".to_string()
            }
        );
    }
}

#[test]
fn binary_and_literal_scenario() {
    let grammar = ["Binary : Expr left, Token operator, Expr right", "Literal : mixed value"];

    let types = parse_grammar(grammar).unwrap();
    assert_eq!(
        types[0].fields,
        vec![
            FieldSpec::new("Expr", "left"),
            FieldSpec::new("Token", "operator"),
            FieldSpec::new("Expr", "right"),
        ]
    );
    assert_eq!(types[1].fields, vec![FieldSpec::new("mixed", "value")]);

    let unit = Emitter::new(&TypeScriptGenerator)
        .generate("Expr", grammar)
        .unwrap();
    let out = unit.contents;

    assert_eq!(unit.file_name, "Expr.ts");
    assert_eq!(out.matches("abstract accept<R>(").count(), 1);
    assert!(out.contains(
        "export interface Visitor<R> {\n  visitBinaryExpr(expr: Binary): R;\n  visitLiteralExpr(expr: Literal): R;\n}\n"
    ));
    assert!(out.contains("    readonly left: Expr,\n    readonly operator: Token,\n    readonly right: Expr,\n"));
    assert!(out.contains("    readonly value: mixed,\n"));
    assert!(out.contains("return visitor.visitBinaryExpr(this);"));
    assert!(out.contains("return visitor.visitLiteralExpr(this);"));
}

#[test]
fn missing_colon_is_reported() {
    let err = Emitter::new(&PhpGenerator)
        .generate("Expr", ["Binary Expr left"])
        .unwrap_err();

    assert_eq!(
        err,
        Error::MalformedGrammarLine {
            line: "Binary Expr left".to_string()
        }
    );
    assert_eq!(
        err.to_string(),
        "malformed grammar line `Binary Expr left`: expected `Name : Type field, ...`"
    );
}

#[test]
fn trailing_comma_is_reported() {
    let err = Emitter::new(&PhpGenerator)
        .generate("Expr", ["Binary : Expr left, Expr right,"])
        .unwrap_err();

    assert_eq!(
        err,
        Error::MalformedFieldSpec {
            line: "Binary : Expr left, Expr right,".to_string(),
            token: "Expr right,".to_string(),
        }
    );
}

#[test]
fn file_names_follow_the_language() {
    let names: Vec<_> = languages()
        .iter()
        .map(|lang| lang.file_name("Stmt"))
        .collect();

    assert_eq!(names, ["Stmt.php", "Stmt.ts", "Stmt.java", "stmt.py"]);
}
