use std::io::{self, BufRead, Write};

/// Parse a 1-based board coordinate, returning its 0-based value
pub fn parse_coord(input: &str) -> Option<i32> {
    let value: i32 = input.trim().parse().ok()?;
    (1..=8).contains(&value).then(|| value - 1)
}

/// Parse a yes/no answer
pub fn parse_yes_no(input: &str) -> Option<bool> {
    match input.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Prompt until the user answers y or n
pub fn prompt_yes_no(prompt: &str) -> io::Result<bool> {
    prompt_yes_no_from(&mut io::stdin().lock(), prompt)
}

/// Prompt for a start square until a valid 1-8 row/column pair is entered;
/// returns 0-based coordinates
pub fn prompt_start_square() -> io::Result<(i32, i32)> {
    prompt_start_square_from(&mut io::stdin().lock())
}

fn prompt_yes_no_from(input: &mut impl BufRead, prompt: &str) -> io::Result<bool> {
    loop {
        let line = read_line(input, prompt)?;
        if let Some(answer) = parse_yes_no(&line) {
            return Ok(answer);
        }
        println!("Please answer y or n.");
    }
}

fn prompt_start_square_from(input: &mut impl BufRead) -> io::Result<(i32, i32)> {
    loop {
        let row = read_line(input, "Start row (1-8): ")?;
        let col = read_line(input, "Start column (1-8): ")?;
        match (parse_coord(&row), parse_coord(&col)) {
            (Some(row), Some(col)) => return Ok((row, col)),
            _ => println!("Position outside the board, enter values between 1 and 8.\n"),
        }
    }
}

fn read_line(input: &mut impl BufRead, prompt: &str) -> io::Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    // A zero-byte read means the input was closed; surface it instead of
    // letting the prompt loops retry forever
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
    }
    Ok(line)
}
