//! `humanist` parses prose-like commands for Rust.
//!
//! Shell style parsers expect `--send alice --send bob`.
//! `humanist` instead lets a program (a chat bot, a text adventure, a voice command handler, etc) accept commands the way people type them:
//! `send alice and bob. file report.txt.`
//! The program declares a table of option names and how many tokens each one takes; `humanist` returns the typed fields.
//!
//! Specifically, `humanist` is concerned with the following:
//! * *Case-insensitive option names*:
//! `Save`, `SAVE` and `save` all match the option `save`, and the result is keyed by the name as declared.
//! * *Periods as punctuation*:
//! A trailing period closes a run of arguments, the same way it closes a sentence.
//! * *Literal text*:
//! Free text which itself contains periods can be embedded without ambiguity.
//! * *Extensibility*:
//! A custom parser may claim tokens before the option table sees them.
//!
//! `humanist` does no I/O and keeps no state between calls; a built parser may be shared freely.
//!
//! # Usage
//! ```no_run
#![doc = include_str!("../demos/mail.rs")]
//! ```
//!
//! ```console
//! $ mail send alice bob. subject. Re: the 9 a.m. meeting k. urgent please
//! send: ["alice", "bob"]
//! subject: "Re: the 9 a.m. meeting"
//! urgent: true
//! unmatched: ["please"]
//!
//! $ mail cc carol
//! Parse error: Option cc needs 2 arguments, found 1.
//! ```
//!
//! # Options
//! Configure `humanist` by starting with a [`CommandParser`] and `add`ing [`OptionSpec`]s, then `build` it into a [`HumanParser`].
//! Alternatively, the [`parse`] function takes the option table directly, for one-off use.
//!
//! Each option has an [`Arity`]:
//!
//! ```console
//! Arity      | Syntax                  | Value
//! ---------------------------------------------------------------------------------
//! Flag       | NAME                    | Bool(true)
//! Single     | NAME VALUE              | Text
//! Fixed(n)   | NAME VALUE .. VALUE     | List of precisely n; n >= 2
//! Variadic   | NAME VALUE [...]        | List, or Text with `join`; captured greedily
//! ```
//!
//! Tokens which are not options (and are not claimed by the option before them) are collected, in order, under the [`CATCH_ALL`] key.
//!
//! # Command Semantics
//! * The input is split on single spaces; empty segments are dropped.
//! Pre-split tokens are taken as they are, apart from dropping empty and whitespace-only ones.
//! * A token matches an option by name, ignoring case and one trailing period.
//! When the table repeats a name, the first entry wins.
//! * A `Single` option takes the next token, minus one trailing period.
//! For example, `comments off.` gives `comments = "off"`.
//! * A `Fixed(n)` option takes the next `n` tokens.
//! Only the last of them may end with a period (which is removed).
//! For example, `send alice bob carol.` is fine for `Fixed(3)`, while `send alice bob. carol` is an error.
//! * A `Variadic` option takes tokens until one ends with a period (which is removed), or until the input ends.
//! The final token of the input is taken verbatim.
//! For example, `title Hello world. lorem` gives `title = ["Hello", "world"]` and leaves `lorem` unmatched.
//! * A repeated option collects its values: `send alice send bob` gives `send = ["alice", "bob"]`.
//! A repeated flag simply stays `true`.
//!
//! ### Literal Runs
//! When a `Single` or `Variadic` option is itself written with a trailing period, its value is a *literal run*.
//! The run continues until the [`SENTINEL`] token `k.`, which is removed, and the tokens are joined with spaces.
//! Periods inside a literal run have no special meaning.
//!
//! To include the sentinel itself, double its letter: `kk.` is unescaped to `k.`, `kkk.` to `kk.`, and so on.
//!
//! ```
//! use humanist::{parse, OptionSpec};
//!
//! let options = [OptionSpec::variadic("subject").join(), OptionSpec::variadic("msg").join()];
//! let record = parse(&options, None, "subject. Hello world. kk. k. msg. Help me. k.").unwrap();
//!
//! assert_eq!(record.text("subject"), Some("Hello world. k."));
//! assert_eq!(record.text("msg"), Some("Help me."));
//! ```
//!
//! ### Custom Parsers
//! A [`CustomParser`](./prelude/trait.CustomParser.html) sees every position of the token cursor before the option table does.
//! It either declines, or returns the position to resume from along with a replacement record.
//!
//! ```no_run
#![doc = include_str!("../demos/mentions.rs")]
//! ```
//!
//! # Features
//! * `tracing_debug`: Emit `tracing` debug events describing how each token was consumed.
pub use humanist_engine::*;
