//! Key scripts for `wlim hint --keys`.
//!
//! Plain characters are typed as-is. An uppercase ASCII letter is the
//! lowercase letter with Shift held. Bracketed tokens name special keys:
//! `<bs>` backspace, `<esc>` cancel, `<c-x>` the letter x with Control held.

use wlim_core::{KeyEvent, Modifiers};

const SHIFT: Modifiers = Modifiers {
    shift: true,
    control: false,
};
const CONTROL: Modifiers = Modifiers {
    shift: false,
    control: true,
};

fn parse_token(token: &str) -> Result<KeyEvent, Box<dyn std::error::Error>> {
    match token {
        "bs" => Ok(KeyEvent::Backspace),
        "esc" => Ok(KeyEvent::Cancel),
        _ => {
            let letter = token
                .strip_prefix("c-")
                .and_then(|rest| {
                    let mut chars = rest.chars();
                    match (chars.next(), chars.next()) {
                        (Some(c), None) if c.is_ascii_alphabetic() => Some(c.to_ascii_lowercase()),
                        _ => None,
                    }
                })
                .ok_or_else(|| format!("Unknown key token '<{token}>'"))?;
            Ok(KeyEvent::with_modifiers(letter, CONTROL))
        }
    }
}

pub fn parse_key_script(script: &str) -> Result<Vec<KeyEvent>, Box<dyn std::error::Error>> {
    let mut events = Vec::new();
    let mut chars = script.chars();

    while let Some(c) = chars.next() {
        let event = match c {
            '<' => {
                let mut token = String::new();
                let mut closed = false;
                for t in chars.by_ref() {
                    if t == '>' {
                        closed = true;
                        break;
                    }
                    token.push(t);
                }
                if !closed {
                    return Err(format!("Unterminated key token '<{token}' in '{script}'").into());
                }
                parse_token(&token)?
            }
            c if c.is_ascii_uppercase() => KeyEvent::with_modifiers(c.to_ascii_lowercase(), SHIFT),
            c if c.is_whitespace() => continue,
            c => KeyEvent::character(c),
        };
        events.push(event);
    }

    Ok(events)
}
