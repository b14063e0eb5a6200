//! End-to-end compilation of merged style fragments.

use cssgen::{
    CompileOptions, CssGenError, StyleNode, UnitPolicy, collect_descendant_names, compile,
    generate_css, merge_styles,
};
use insta::assert_snapshot;

fn css(style: StyleNode) -> String {
    generate_css(".a", &[style], &CompileOptions::new()).unwrap()
}

// ============================================================================
// Important marking
// ============================================================================

#[test]
fn important_is_on_by_default() {
    let out = css(StyleNode::new().with("color", "red"));
    assert_eq!(out, ".a{color:red !important;}");
}

#[test]
fn important_can_be_turned_off() {
    let out = generate_css(
        ".a",
        &[StyleNode::new().with("color", "red")],
        &CompileOptions::new().important(false),
    )
    .unwrap();
    assert_eq!(out, ".a{color:red;}");
}

#[test]
fn important_unset_option_keeps_marking() {
    let out = generate_css(
        ".a",
        &[StyleNode::new().with("color", "red")],
        &CompileOptions::new().important(None::<bool>),
    )
    .unwrap();
    assert_eq!(out, ".a{color:red !important;}");
}

// ============================================================================
// Scopes
// ============================================================================

#[test]
fn pseudo_selector_concatenation() {
    let out = css(
        StyleNode::new()
            .with("color", "red")
            .with(":hover", StyleNode::new().with("color", "blue")),
    );
    assert_snapshot!(out, @".a{color:red !important;}.a:hover{color:blue !important;}");
}

#[test]
fn media_query_wrapping() {
    let out = css(StyleNode::new().with(
        "@media (min-width:100px)",
        StyleNode::new().with("color", "red"),
    ));
    assert_snapshot!(out, @"@media (min-width:100px){.a{color:red !important;}}");
}

#[test]
fn descendant_fan_out() {
    let out = css(StyleNode::new().with(
        ">> span",
        StyleNode::new().named("x").named("y").with("color", "green"),
    ));
    assert_snapshot!(out, @".a .x{color:green !important;}.a .y{color:green !important;}");
}

#[test]
fn descendant_missing_from_name_map_is_dropped() {
    let style = StyleNode::new()
        .with("color", "red")
        .with(">> span", StyleNode::new().named("x").with("color", "green"));
    let merged = merge_styles(&[style]).unwrap();

    let out = compile(".a", &merged, &CompileOptions::new(), &Default::default()).unwrap();
    assert_eq!(out, ".a{color:red !important;}");
}

#[test]
fn empty_scopes_never_emit_bare_selector() {
    let out = css(
        StyleNode::new()
            .with(":hover", StyleNode::new())
            .with("@media print", StyleNode::new().with(":focus", StyleNode::new())),
    );
    assert!(!out.contains("{}"));
    assert_eq!(out, "");
}

#[test]
fn full_emission_order() {
    let style = StyleNode::new()
        .with(">>icon", StyleNode::new().named("icon_1").with("opacity", 0.5))
        .with("@media print", StyleNode::new().with("display", "none"))
        .with(":active", StyleNode::new().with("color", "black"))
        .with("padding", 4);

    let out = generate_css(".btn", &[style], &CompileOptions::new().important(false)).unwrap();
    assert_snapshot!(
        out,
        @".btn{padding:4px;}.btn:active{color:black;}@media print{.btn{display:none;}}.btn .icon_1{opacity:0.5;}"
    );
}

#[test]
fn nested_descendants_chain_selectors() {
    let style = StyleNode::new().with(
        ">>row",
        StyleNode::new()
            .named("row_1")
            .with("margin", 0)
            .with(">>cell", StyleNode::new().named("cell_1").with("flexGrow", 1)),
    );

    let out = generate_css(".grid", &[style], &CompileOptions::new().important(false)).unwrap();
    assert_eq!(
        out,
        ".grid .row_1{margin:0px;}.grid .row_1 .cell_1{flex-grow:1;}"
    );
}

#[test]
fn descendant_keys_sharing_a_spelling_both_emit() {
    let style = StyleNode::new()
        .with(">>a", StyleNode::new().named("bc").with("color", "red"))
        .with(">>ab", StyleNode::new().named("c").with("color", "blue"));

    let out = generate_css(".s", &[style], &CompileOptions::new().important(false)).unwrap();
    assert_eq!(out, ".s .bc{color:red;}.s .c{color:blue;}");
}

// ============================================================================
// Merging
// ============================================================================

#[test]
fn merged_fragments_compile_as_one_tree() {
    let out = generate_css(
        ".a",
        &[
            StyleNode::new()
                .with("color", "red")
                .with(":hover", StyleNode::new().with("color", "blue").with("margin", 1)),
            StyleNode::new()
                .with("color", "green")
                .with(":hover", StyleNode::new().with("color", "white")),
        ],
        &CompileOptions::new().important(false),
    )
    .unwrap();

    assert_eq!(out, ".a{color:green;}.a:hover{color:white;margin:1px;}");
}

#[test]
fn descendant_names_from_several_fragments() {
    let fragments = [
        StyleNode::new().with(">>label", StyleNode::new().named("l1").with("color", "red")),
        StyleNode::new().with(">>label", StyleNode::new().named("l2")),
    ];
    let merged = merge_styles(&fragments).unwrap();
    let names = collect_descendant_names(&merged).unwrap();
    assert_eq!(names.get(">>label"), ["l1", "l2"]);

    let out = compile(".a", &merged, &CompileOptions::new().important(false), &names).unwrap();
    assert_eq!(out, ".a .l1{color:red;}.a .l2{color:red;}");
}

// ============================================================================
// Values
// ============================================================================

#[test]
fn unitless_and_length_numbers() {
    assert_eq!(
        css(StyleNode::new().with("opacity", 0.5)),
        ".a{opacity:0.5 !important;}"
    );
    assert_eq!(
        css(StyleNode::new().with("margin", 10)),
        ".a{margin:10px !important;}"
    );
}

#[test]
fn unit_policy_is_configurable() {
    let options = CompileOptions::new()
        .important(false)
        .units(UnitPolicy::default().default_unit("em").unitless("flexBasis"));
    let out = generate_css(
        ".a",
        &[StyleNode::new().with("fontSize", 2).with("flexBasis", 0)],
        &options,
    )
    .unwrap();
    assert_eq!(out, ".a{font-size:2em;flex-basis:0;}");
}

#[test]
fn string_handlers_format_values() {
    let options = CompileOptions::new()
        .important(false)
        .handler("fontFamily", |value: &cssgen::StyleValue| match value {
            cssgen::StyleValue::List(fonts) => cssgen::StyleValue::Str(
                fonts
                    .iter()
                    .filter_map(|f| match f {
                        cssgen::StyleValue::Str(s) => Some(s.as_str()),
                        _ => None,
                    })
                    .collect::<Vec<_>>()
                    .join(","),
            ),
            other => other.clone(),
        });

    let out = generate_css(
        ".a",
        &[StyleNode::new().with("fontFamily", vec!["Georgia", "serif"])],
        &options,
    )
    .unwrap();
    assert_eq!(out, ".a{font-family:Georgia,serif;}");
}

// ============================================================================
// Malformed input
// ============================================================================

#[test]
fn leaf_under_pseudo_key_fails() {
    let err = generate_css(".a", &[StyleNode::new().with(":hover", "red")], &CompileOptions::new())
        .unwrap_err();
    assert!(matches!(err, CssGenError::InvalidNesting { .. }));
}

#[test]
fn nested_block_under_property_fails() {
    let err = generate_css(
        ".a",
        &[StyleNode::new().with("color", StyleNode::new())],
        &CompileOptions::new(),
    )
    .unwrap_err();
    assert!(err.to_string().contains("color"));
}
