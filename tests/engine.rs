mod helpers;

use std::sync::Arc;
use std::thread;

use serde_json::json;

use whisker::{render_to_writer, Engine, ErrorKind, Options, Value};

use crate::helpers::Writer;

#[test]
fn engine_debug() {
    format!("{:?}", Engine::new());
}

#[test]
fn engine_default_options() {
    let engine = Engine::new();
    assert_eq!(engine.options().open(), "{{");
    assert_eq!(engine.options().close(), "}}");
}

#[test]
fn engine_send_and_sync() {
    let engine = Arc::new(Engine::new());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || {
                engine
                    .render("{{lorem}}", json!({ "lorem": i }))
                    .to_string()
                    .unwrap()
            })
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), i.to_string());
    }
}

#[test]
fn engine_render_non_static_source() -> whisker::Result<()> {
    let engine = Engine::new();
    let source = String::from("{{lorem}}");
    let result = engine.render(&source, json!({ "lorem": "ipsum" })).to_string()?;
    assert_eq!(result, "ipsum");
    Ok(())
}

#[test]
fn engine_render_from_borrowed_context() -> whisker::Result<()> {
    let engine = Engine::new();
    let ctx = Value::from([("lorem", "ipsum")]);
    let result = engine.render_from("{{lorem}}", &ctx).to_string()?;
    assert_eq!(result, "ipsum");

    let ctx = json!({ "lorem": "ipsum" });
    let result = engine.render_from("{{lorem}}", &ctx).to_string()?;
    assert_eq!(result, "ipsum");
    Ok(())
}

#[test]
fn engine_render_with_options() -> whisker::Result<()> {
    let engine = Engine::with_options(Options::new("<%", "%>"));
    let result = engine
        .render("<%a%> {{a}}", json!({ "a": "x" }))
        .to_string()?;
    assert_eq!(result, "x {{a}}");
    Ok(())
}

#[test]
fn engine_render_serialize_error() {
    let mut ctx = std::collections::BTreeMap::new();
    ctx.insert(vec![1, 2], "value");
    let err = Engine::new().render("{{a}}", ctx).to_string().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Serialize);
    assert_eq!(err.range(), None);
}

#[test]
fn engine_render_to_writer() -> whisker::Result<()> {
    let mut w = Writer::new();
    Engine::new()
        .render("lorem {{ipsum}}", json!({ "ipsum": "<dolor>" }))
        .to_writer(&mut w)?;
    assert_eq!(w.into_string(), "lorem &lt;dolor&gt;");
    Ok(())
}

#[test]
fn engine_render_to_writer_io_error() {
    let mut w = Writer::with_max(1);
    let err = Engine::new()
        .render("lorem {{ipsum}}", json!({ "ipsum": "dolor" }))
        .to_writer(&mut w)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);
    assert_eq!(err.to_string(), "writer closed");
}

#[test]
fn engine_render_to_writer_template_error() {
    let mut w = Writer::new();
    let err = Engine::new()
        .render("lorem {{/ipsum}}", json!({}))
        .to_writer(&mut w)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedTag);
}

#[test]
fn render_to_writer_function() -> whisker::Result<()> {
    let mut w = Writer::new();
    let ctx = json!({ "list": ["a", "b"] });
    render_to_writer(&mut w, "{{#list}}{{.}}{{/list}}", &ctx, &Options::default())?;
    assert_eq!(w.into_string(), "ab");
    Ok(())
}

#[test]
fn render_to_writer_keeps_partial_output() {
    let mut w = Writer::new();
    let result = render_to_writer(
        &mut w,
        "lorem {{/ipsum}}",
        &json!({}),
        &Options::default(),
    );
    assert!(result.is_err());
    assert_eq!(w.into_string(), "lorem ");
}
