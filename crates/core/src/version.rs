//! Lenient dotted-version comparison
//!
//! Host and runtime versions arrive as free-form strings ("4.2", "6.4.3",
//! "8.1.2-1ubuntu", "5.0-beta2"), so strict semver parsing is not an option.
//! Versions are split into numeric and word tokens; words rank
//! `dev < alpha < beta < rc < (number) < pl` and missing tokens count as 0.

use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Token {
    Dev,
    Alpha,
    Beta,
    Rc,
    Number(u64),
    Patch,
}

fn word_token(word: &str) -> Token {
    match word.to_ascii_lowercase().as_str() {
        "dev" => Token::Dev,
        "alpha" | "a" => Token::Alpha,
        "beta" | "b" => Token::Beta,
        "rc" => Token::Rc,
        "pl" | "p" => Token::Patch,
        // Unknown words sort with dev builds
        _ => Token::Dev,
    }
}

fn flush(current: &mut String, in_digits: bool, tokens: &mut Vec<Token>) {
    if current.is_empty() {
        return;
    }
    let token = if in_digits {
        Token::Number(current.parse().unwrap_or(u64::MAX))
    } else {
        word_token(current)
    };
    tokens.push(token);
    current.clear();
}

fn tokenize(version: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_digits = false;

    for c in version.trim().chars() {
        if matches!(c, '.' | '-' | '_' | '+') {
            flush(&mut current, in_digits, &mut tokens);
            continue;
        }
        let digit = c.is_ascii_digit();
        if !current.is_empty() && digit != in_digits {
            flush(&mut current, in_digits, &mut tokens);
        }
        in_digits = digit;
        current.push(c);
    }
    flush(&mut current, in_digits, &mut tokens);

    tokens
}

/// Compare two version strings
pub fn compare(a: &str, b: &str) -> Ordering {
    let left = tokenize(a);
    let right = tokenize(b);
    let len = left.len().max(right.len());

    for i in 0..len {
        let l = left.get(i).copied().unwrap_or(Token::Number(0));
        let r = right.get(i).copied().unwrap_or(Token::Number(0));
        match l.cmp(&r) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}

/// True when `found` is at least `required`
pub fn satisfies(found: &str, required: &str) -> bool {
    compare(found, required) != Ordering::Less
}
