use serde::Serialize;

#[derive(Serialize)]
struct Employee {
    name: &'static str,
}

#[derive(Serialize)]
struct Context {
    message: &'static str,
    list: Vec<Employee>,
}

fn main() -> whisker::Result<()> {
    let ctx = Context {
        message: "Current employees:",
        list: ["Jared", "Mark", "Jeff", "<i>Cameron</i>"]
            .into_iter()
            .map(|name| Employee { name })
            .collect(),
    };

    // Names use the triple form so the markup is written as is
    let out = whisker::Engine::new()
        .render("{{message}}\n{{#list}}\t<b>{{{name}}}</b>\n{{/list}}", &ctx)
        .to_string()?;

    println!("{out}");

    Ok(())
}
