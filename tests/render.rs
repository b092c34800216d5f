use serde_json::json;

use whisker::{render, Options};

#[track_caller]
fn render_default(template: &str, ctx: serde_json::Value) -> String {
    render(template, &ctx, &Options::default()).unwrap()
}

#[test]
fn render_empty_template() {
    assert_eq!(render_default("", json!({ "a": 1 })), "");
}

#[test]
fn render_no_tags_is_identity() {
    for template in [
        "lorem ipsum",
        "lorem { ipsum } dolor",
        "lorem }} ipsum",
        "multi\nline\n\ttext with ünïcödé",
    ] {
        assert_eq!(render_default(template, json!({})), template);
        assert_eq!(render_default(template, json!(null)), template);
        assert_eq!(render_default(template, json!("scalar")), template);
    }
}

#[test]
fn render_variable_string() {
    assert_eq!(
        render_default("lorem {{ipsum}}", json!({ "ipsum": "dolor" })),
        "lorem dolor"
    );
}

#[test]
fn render_variable_with_whitespace() {
    assert_eq!(
        render_default("lorem {{ ipsum }} sit", json!({ " ipsum ": "dolor" })),
        "lorem dolor sit"
    );
    assert_eq!(
        render_default("{{ name }}|{{name}}", json!({ "name": "x" })),
        "|x"
    );
}

#[test]
fn render_spaced_implicit_iterator_is_a_member_lookup() {
    assert_eq!(render_default("[{{ . }}]", json!("x")), "[]");
}

#[test]
fn render_variable_bool() {
    assert_eq!(
        render_default("{{a}} {{b}}", json!({ "a": true, "b": false })),
        "true false"
    );
}

#[test]
fn render_variable_integers() {
    assert_eq!(
        render_default("{{a}} {{b}}", json!({ "a": 123, "b": -123 })),
        "123 -123"
    );
}

#[test]
fn render_variable_float() {
    assert_eq!(
        render_default("{{a}}", json!({ "a": 123.4 })),
        "123.400000"
    );
}

#[test]
fn render_variable_null() {
    assert_eq!(render_default("[{{a}}]", json!({ "a": null })), "[null]");
}

#[test]
fn render_variable_missing_renders_empty() {
    assert_eq!(render_default("{{missing}}", json!({ "x": 1 })), "");
    assert_eq!(render_default("a{{missing}}b", json!({})), "ab");
}

#[test]
fn render_variable_on_scalar_context_renders_empty() {
    assert_eq!(render_default("a{{missing}}b", json!(42)), "ab");
}

#[test]
fn render_variable_map_is_json() {
    assert_eq!(
        render_default("{{&a}}", json!({ "a": { "b": [1, 2] } })),
        r#"{"b":[1,2]}"#
    );
}

#[test]
fn render_variable_list_is_escaped_json() {
    assert_eq!(
        render_default("{{a}}", json!({ "a": ["x"] })),
        "[&quot;x&quot;]"
    );
}

#[test]
fn render_variable_escaped_by_default() {
    assert_eq!(render_default("{{x}}", json!({ "x": "<b>" })), "&lt;b&gt;");
}

#[test]
fn render_variable_escapes_all_special_characters() {
    assert_eq!(
        render_default("{{x}}", json!({ "x": r#"a & b < c > d " e ' f / g"# })),
        "a &amp; b &lt; c &gt; d &quot; e &#39; f &#x2F; g"
    );
}

#[test]
fn render_variable_ampersand_is_unescaped() {
    assert_eq!(render_default("{{&x}}", json!({ "x": "<b>" })), "<b>");
    assert_eq!(render_default("{{& x }}", json!({ " x ": "<b>" })), "<b>");
}

#[test]
fn render_variable_triple_mustache_is_unescaped() {
    assert_eq!(render_default("{{{x}}}", json!({ "x": "<b>" })), "<b>");
}

#[test]
fn render_variable_triple_mustache_surrounded() {
    assert_eq!(
        render_default("a{{{x}}}b{{x}}c", json!({ "x": "<b>" })),
        "a<b>b&lt;b&gt;c"
    );
}

#[test]
fn render_literal_text_is_not_escaped() {
    assert_eq!(
        render_default("<p>{{x}}</p>", json!({ "x": "&" })),
        "<p>&amp;</p>"
    );
}

#[test]
fn render_implicit_iterator_on_root() {
    assert_eq!(render_default("{{.}}", json!("<root>")), "&lt;root&gt;");
    assert_eq!(render_default("{{}}", json!(7)), "7");
}

#[test]
fn render_implicit_iterator_on_map_is_json() {
    assert_eq!(render_default("{{&.}}", json!({ "a": 1 })), r#"{"a":1}"#);
}

#[test]
fn render_member_named_dot_wins() {
    assert_eq!(render_default("{{.}}", json!({ ".": "dot" })), "dot");
}

#[test]
fn render_comment_is_echoed() {
    assert_eq!(render_default("{{!note}}X", json!({})), "{{!note}}X");
    assert_eq!(
        render_default("a {{! some <note> }} b", json!({})),
        "a {{! some <note> }} b"
    );
}

#[test]
fn render_custom_delimiters() {
    let options = Options::new("<%", "%>");
    let result = render("<%msg%>", &json!({ "msg": "hi" }), &options).unwrap();
    assert_eq!(result, "hi");
}

#[test]
fn render_custom_delimiters_default_tags_are_literal() {
    let options = Options::new("<%", "%>");
    let result = render(
        "{{msg}} <%msg%> {{{msg}}} {{#a}}",
        &json!({ "msg": "hi" }),
        &options,
    )
    .unwrap();
    assert_eq!(result, "{{msg}} hi {{{msg}}} {{#a}}");
}

#[test]
fn render_custom_delimiters_sections() {
    let options = Options::builder().delimiters("[[", "]]").build();
    let result = render(
        "[[#list]]<[[.]]>[[/list]][[^list]]never[[/list]]",
        &json!({ "list": ["a", "b"] }),
        &options,
    )
    .unwrap();
    assert_eq!(result, "<a><b>");
}

#[test]
fn render_custom_delimiters_no_triple_form() {
    let options = Options::new("{{", "%>");
    let result = render("{{{x%>", &json!({ "x": "<b>" }), &options).unwrap();
    assert_eq!(result, "&lt;b&gt;");
}

#[test]
fn render_multibyte_delimiters() {
    let options = Options::new("«", "»");
    let result = render("héllo «name»!", &json!({ "name": "wörld" }), &options).unwrap();
    assert_eq!(result, "héllo wörld!");
}

#[test]
fn render_unicode_text_around_tags() {
    assert_eq!(
        render_default("😀{{a}}😀", json!({ "a": "ü" })),
        "😀ü😀"
    );
}

#[test]
fn render_is_deterministic() {
    let ctx = json!({ "a": "x", "list": [1, 2], "b": true });
    let template = "{{a}} {{#list}}{{.}},{{/list}} {{#b}}yes{{/b}}";
    let first = render_default(template, ctx.clone());
    for _ in 0..10 {
        assert_eq!(render_default(template, ctx.clone()), first);
    }
    assert_eq!(first, "x 1,2, yes");
}
