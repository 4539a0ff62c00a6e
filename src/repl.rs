use std::io::{self, BufRead, Write};

use crate::profile::Language;
use crate::scanner;

/// Run the interactive loop: tokenize each entered line with the selected
/// profile and print the classified tokens. A lexical error is reported and
/// the loop continues with the next line.
pub fn run_repl(language: Language) {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let profile = language.profile();

    println!("{language} tokenizer (Ctrl-D to exit)");
    loop {
        print!("> ");
        stdout.flush().expect("flush stdout");

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break, // Ctrl-D / EOF
            Ok(_) => {}
            Err(e) => {
                eprintln!("read error: {e}");
                break;
            }
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match scanner::tokenize(trimmed, profile) {
            Ok(tokens) => {
                for token in &tokens {
                    println!("{token}");
                }
            }
            Err(e) => eprintln!("{e}"),
        }
    }
}
