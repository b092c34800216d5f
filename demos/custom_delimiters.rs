use std::io;

fn main() -> whisker::Result<()> {
    let options = whisker::Options::builder()
        .delimiters("<%", "%>") // `{{ }}` is left alone in the output
        .build();

    let ctx = serde_json::json!({
        "title": "Release notes",
        "items": [
            { "text": "Faster rendering", "new": true },
            { "text": "Tag <b> is escaped", "new": false },
        ],
        "draft": false,
    });

    let stdout = io::BufWriter::new(io::stdout());
    whisker::render_to_writer(
        stdout,
        "
<%title%> {{ not a tag }}
<%#items%>- <%text%><%#new%> (new)<%/new%>
<%/items%><%^draft%>published<%/draft%>
",
        &ctx,
        &options,
    )?;

    Ok(())
}
