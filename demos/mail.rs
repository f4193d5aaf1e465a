use humanist::{CommandParser, OptionSpec, Value};

fn main() {
    let parser = match CommandParser::new()
        .add(OptionSpec::variadic("send"))
        .add(OptionSpec::fixed("cc", 2))
        .add(OptionSpec::variadic("subject").join())
        .add(OptionSpec::flag("urgent"))
        .build()
    {
        Ok(parser) => parser,
        Err(error) => {
            eprintln!("{error}");
            std::process::exit(1);
        }
    };

    let command: Vec<String> = std::env::args().skip(1).collect();

    match parser.parse(command) {
        Ok(record) => {
            for name in ["send", "cc", "subject", "urgent"] {
                match record.get(name) {
                    Some(Value::Bool(b)) => println!("{name}: {b}"),
                    Some(Value::Text(text)) => println!("{name}: {text:?}"),
                    Some(Value::List(items)) => println!("{name}: {items:?}"),
                    None => {}
                }
            }

            if !record.rest().is_empty() {
                println!("unmatched: {:?}", record.rest());
            }
        }
        Err(error) => {
            eprintln!("Parse error: {error}");
            std::process::exit(1);
        }
    }
}
