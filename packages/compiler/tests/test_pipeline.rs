/// Pipeline tests - compiled style objects merged at use time
///
/// These tests validate that:
/// - Later objects override earlier ones key by key, including resets
/// - Stylesheet order puts longhands after shorthands and contexts last
/// - Grid placement shorthands reset and yield to their longhands
/// - The JSON surface round-trips through the runtime

use quark_compiler::{
    classify, BuildStore, Compiler, CompilerOptions, Namespace, SelectorContext, StyleProperty,
    StyleSheetInput,
};
use quark_runtime::{merge, merge_json, props};

fn compile(input: &StyleSheetInput) -> quark_compiler::CompiledModule {
    let store = BuildStore::new();
    Compiler::new(&store, CompilerOptions::default())
        .compile(input, Some("pipeline.style.json"))
        .expect("Compilation failed")
}

#[test]
fn test_shorthand_namespace_overrides_earlier_longhand() {
    let module = compile(
        &StyleSheetInput::new()
            .namespace("side", Namespace::new().value("marginLeft", 8).value("color", "red"))
            .namespace("all", Namespace::new().value("margin", 0)),
    );
    let side = module.namespace("side").unwrap();
    let all = module.namespace("all").unwrap();

    let merged = merge(&[side.into(), all.into()]);
    assert_eq!(merged.len(), 2);
    assert!(merged.contains(all.get("margin").unwrap().unwrap()));
    assert!(merged.contains(side.get("color").unwrap().unwrap()));
    assert!(!merged.contains(side.get("marginLeft").unwrap().unwrap()));
}

#[test]
fn test_explicit_null_namespace_removes_class() {
    let module = compile(
        &StyleSheetInput::new()
            .namespace("base", Namespace::new().value("color", "red").value("display", "flex"))
            .namespace("reset", Namespace::new().null("color")),
    );
    let base = module.namespace("base").unwrap();
    let reset = module.namespace("reset").unwrap();

    let class_name = props!(base, reset);
    assert_eq!(class_name, base.get("display").unwrap().unwrap());
}

#[test]
fn test_stylesheet_respects_cascade() {
    let module = compile(&StyleSheetInput::new().namespace(
        "card",
        Namespace::new()
            .value("border", "1px solid red")
            .value("borderTopWidth", "2px")
            .conditional(
                SelectorContext::pseudo(":hover"),
                vec![StyleProperty::raw("borderTopWidth", "3px")],
            )
            .conditional(
                SelectorContext::at_rule("@media print"),
                vec![StyleProperty::raw("border", "none")],
            ),
    ));

    let css = module.stylesheet().to_css();
    let position = |needle: &str| css.find(needle).unwrap_or_else(|| panic!("missing {}", needle));

    assert!(position("{border:1px solid red}") < position("{border-top-width:2px}"));
    assert!(position("{border-top-width:2px}") < position(":hover{border-top-width:3px}"));
    assert!(position(":hover{border-top-width:3px}") < position("@media print{"));
}

#[test]
fn test_classifier_properties() {
    let hover = SelectorContext::pseudo(":focus");
    let media = SelectorContext::at_rule("@media (min-width: 768px)");

    for property in ["color", "padding", "padding-top", "padding-inline-start"] {
        let plain = classify(property, &SelectorContext::None);
        assert!(classify(property, &hover) > plain);
        assert!(classify(property, &media) > classify(property, &hover));
    }
    assert!(classify("padding-top", &SelectorContext::None) > classify("padding", &SelectorContext::None));
}

#[test]
fn test_json_output_feeds_runtime() {
    let store = BuildStore::new();
    let module = Compiler::new(&store, CompilerOptions::default())
        .compile_json(
            r#"{
                "foo": { "display": "block", "marginInlineStart": 10 },
                "bar": { "display": "flex", "marginLeft": 4 }
            }"#,
            None,
        )
        .expect("Compilation failed");

    let json = module.to_json();
    let merged = merge_json(&[json["bar"].clone(), json["foo"].clone()]).unwrap();

    let foo = module.namespace("foo").unwrap();
    assert_eq!(merged.len(), 2);
    assert!(merged.contains(foo.get("display").unwrap().unwrap()));
    assert!(merged.contains(foo.get("marginInlineStart").unwrap().unwrap()));
}

#[test]
fn test_grid_row_shorthand_yields_to_longhand() {
    let store = BuildStore::new();
    let module = Compiler::new(&store, CompilerOptions::default())
        .compile_json(
            r#"{ "a": { "gridRowStart": "2" }, "b": { "gridRow": "1 / 3" } }"#,
            None,
        )
        .expect("Compilation failed");
    let a = module.namespace("a").unwrap();
    let b = module.namespace("b").unwrap();

    assert_eq!(b.get("gridRowStart"), Some(None));
    assert_eq!(b.get("gridRowEnd"), Some(None));

    let css = module.stylesheet().to_css();
    let shorthand = css.find("{grid-row:1/3}").expect("missing grid-row rule");
    let longhand = css.find("{grid-row-start:2}").expect("missing grid-row-start rule");
    assert!(shorthand < longhand, "{}", css);

    let merged = merge(&[a.into(), b.into()]);
    assert_eq!(merged.len(), 1);
    assert!(merged.contains(b.get("gridRow").unwrap().unwrap()));

    let merged = merge(&[b.into(), a.into()]);
    assert_eq!(merged.len(), 2);
}
