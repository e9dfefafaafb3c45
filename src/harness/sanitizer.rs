//! Go submission cleanup
//!
//! Reduces a submitted Go file to the declarations that can sit next to a
//! generated `main`: the package clause, every import and the user's own
//! `main` are dropped, everything else is kept line for line.
//!
//! This is a line heuristic, not a parser. Braces inside string literals or
//! comments within `main` throw the depth count off; the generated program
//! then fails to compile and the compiler output is reported as the test
//! failure.

enum State {
    Normal,
    ImportBlock,
    /// Inside the user's `main`; `opened` once the first `{` was seen.
    Main { depth: i32, opened: bool },
}

pub fn sanitize_go_source(code: &str) -> String {
    let mut kept: Vec<&str> = Vec::new();
    let mut state = State::Normal;

    for line in code.lines() {
        let trimmed = line.trim();

        match state {
            State::ImportBlock => {
                if trimmed.starts_with(')') {
                    state = State::Normal;
                }
                continue;
            }
            State::Main { depth, opened } => {
                state = track_main(line, depth, opened);
                continue;
            }
            State::Normal => {}
        }

        if trimmed.starts_with("package ") {
            continue;
        }

        if let Some(rest) = import_clause(trimmed) {
            if rest.starts_with('(') && !rest.contains(')') {
                state = State::ImportBlock;
            }
            continue;
        }

        if trimmed.starts_with("func main(") {
            state = track_main(line, 0, false);
            continue;
        }

        kept.push(line);
    }

    let start = kept.iter().position(|l| !l.trim().is_empty());
    let end = kept.iter().rposition(|l| !l.trim().is_empty());
    match (start, end) {
        (Some(start), Some(end)) => kept[start..=end].join("\n"),
        _ => String::new(),
    }
}

/// Text after the `import` keyword, if the line is an import declaration.
fn import_clause(trimmed: &str) -> Option<&str> {
    let rest = trimmed.strip_prefix("import")?;
    if rest.is_empty() {
        return Some(rest);
    }
    let first = rest.chars().next()?;
    if first.is_whitespace() || first == '(' || first == '"' || first == '`' {
        Some(rest.trim_start())
    } else {
        None
    }
}

fn track_main(line: &str, mut depth: i32, mut opened: bool) -> State {
    for c in line.chars() {
        match c {
            '{' => {
                depth += 1;
                opened = true;
            }
            '}' => depth -= 1,
            _ => {}
        }
    }

    if opened && depth <= 0 {
        State::Normal
    } else {
        State::Main { depth, opened }
    }
}
