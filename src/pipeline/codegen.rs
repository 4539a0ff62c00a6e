//! Toy three-stage codegen over the token stream: stack-machine style
//! intermediate lines, a peephole pass, and a "machine code" rewrite.
//! All three stages produce display text only.

use crate::scanner::token::{Category, Token};

pub fn intermediate(tokens: &[Token]) -> Vec<String> {
    let mut lines = Vec::new();
    for token in tokens {
        match token.category {
            Category::Identifier => lines.push(format!("LOAD {}", token.text)),
            Category::Integer | Category::Float => lines.push(format!("PUSH {}", token.text)),
            Category::Operator => lines.push(format!("OPERATE {}", token.text)),
            _ => {}
        }
    }
    lines
}

/// Drop an OPERATE line that immediately follows another OPERATE line.
pub fn optimize(lines: &[String]) -> Vec<String> {
    let mut optimized: Vec<String> = Vec::new();
    for line in lines {
        if line.starts_with("OPERATE")
            && optimized.last().is_some_and(|prev| prev.starts_with("OPERATE"))
        {
            continue;
        }
        optimized.push(line.clone());
    }
    optimized
}

pub fn machine(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .filter_map(|line| {
            let operand = line.split_whitespace().last()?;
            if line.starts_with("LOAD") {
                Some(format!("LOAD_REG {operand}"))
            } else if line.starts_with("PUSH") {
                Some(format!("PUSH_REG {operand}"))
            } else if line.starts_with("OPERATE") {
                Some(format!("EXECUTE_OP {operand}"))
            } else {
                None
            }
        })
        .collect()
}
