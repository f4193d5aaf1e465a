use humanist::prelude::*;
use humanist::{CommandParser, OptionSpec, Record};

// Collects `@handle` tokens, wherever the option table would otherwise look.
struct Mentions {
    prefix: char,
}

impl CustomParser for Mentions {
    fn intercept(
        &self,
        token: &str,
        index: usize,
        _tokens: &[String],
        record: &Record,
    ) -> Option<(usize, Record)> {
        let handle = token.strip_prefix(self.prefix)?;
        let mut record = record.clone();
        record.assign("mentions", vec![handle]);
        Some((index + 1, record))
    }
}

fn main() {
    let parser = CommandParser::new()
        .add(OptionSpec::single("topic"))
        .add(OptionSpec::flag("pin"))
        .custom_parser(Mentions { prefix: '@' })
        .build()
        .unwrap();

    // mentions: ["alice", "bob"], topic: "release", pin: true
    let record = parser.parse("@alice topic release. pin @bob").unwrap();
    println!("{record:?}");
}
