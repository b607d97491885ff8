//! Message rendering for the plain and formatted emit variants
//!
//! Plain variants concatenate their arguments verbatim. No separator is
//! inserted, even between two numbers: `1`, `2` renders as `12`.
//!
//! Formatted variants treat the first argument as a printf-style template:
//!
//! - `%s`, `%v`, `%d` (and any other ASCII letter verb) take the next
//!   argument's `Display` form; `%q` wraps it in double quotes
//! - flags `-`, `0`, `+`, `#` and space, a width and a `.precision` may sit
//!   between `%` and the verb: `%5d`, `%-8s`, `%.2f`, `%05d`
//! - `%%` is a literal percent sign
//!
//! Width pads with spaces on the left (on the right with `-`, with zeros
//! after any sign with `0`). Precision is passed to the argument's `Display`
//! impl, so it rounds floats and truncates strings. `+`, `#` and space are
//! accepted and ignored.
//!
//! Verbs are not type-checked. A verb without an argument renders as
//! `%!s(MISSING)`, unused arguments are appended as `%!(EXTRA a, b)`, and a
//! `%` with no letter verb renders as `%!(NOVERB)` without consuming an
//! argument.

use std::fmt::{self, Write as _};
use std::iter::Peekable;
use std::str::Chars;

/// Renderable argument passed to an emit operation.
pub type Arg<'a> = &'a dyn fmt::Display;

/// Join every argument's string form with no separator.
pub fn concat(args: &[Arg<'_>]) -> String {
    let mut out = String::new();
    for arg in args {
        let _ = write!(out, "{}", arg);
    }
    out
}

/// Message for a formatted emit: empty for no arguments, the sole argument's
/// string form for one, template substitution for more.
pub fn render_message(args: &[Arg<'_>]) -> String {
    match args {
        [] => String::new(),
        [only] => only.to_string(),
        [template, rest @ ..] => substitute(&template.to_string(), rest),
    }
}

/// Flags, width and precision between `%` and the verb.
#[derive(Debug, Default)]
struct Directive {
    left: bool,
    zero: bool,
    width: Option<usize>,
    precision: Option<usize>,
}

impl Directive {
    fn parse(chars: &mut Peekable<Chars<'_>>) -> Self {
        let mut directive = Directive::default();

        while let Some(&c) = chars.peek() {
            match c {
                '-' => directive.left = true,
                '0' => directive.zero = true,
                '+' | '#' | ' ' => {}
                _ => break,
            }
            chars.next();
        }

        directive.width = Self::number(chars);
        if chars.peek() == Some(&'.') {
            chars.next();
            directive.precision = Some(Self::number(chars).unwrap_or(0));
        }

        directive
    }

    fn number(chars: &mut Peekable<Chars<'_>>) -> Option<usize> {
        let mut value: Option<usize> = None;
        while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
            chars.next();
            value = Some(value.unwrap_or(0).saturating_mul(10).saturating_add(digit as usize));
        }
        value
    }

    fn render(&self, arg: Arg<'_>, quoted: bool) -> String {
        let text = match self.precision {
            Some(precision) => format!("{:.*}", precision, arg),
            None => arg.to_string(),
        };
        let text = if quoted { format!("\"{}\"", text) } else { text };

        let len = text.chars().count();
        let fill = match self.width {
            Some(width) if width > len => width - len,
            _ => return text,
        };

        if self.left {
            format!("{}{}", text, " ".repeat(fill))
        } else if self.zero {
            let (sign, digits) = match text.strip_prefix(['-', '+']) {
                Some(rest) => text.split_at(text.len() - rest.len()),
                None => ("", text.as_str()),
            };
            format!("{}{}{}", sign, "0".repeat(fill), digits)
        } else {
            format!("{}{}", " ".repeat(fill), text)
        }
    }
}

/// Substitute `args` into `template` positionally.
pub fn substitute(template: &str, args: &[Arg<'_>]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut next = args.iter();
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }

        let directive = Directive::parse(&mut chars);

        match chars.next() {
            None => out.push_str("%!(NOVERB)"),
            Some('%') => out.push('%'),
            Some(verb) if verb.is_ascii_alphabetic() => match next.next() {
                Some(arg) => out.push_str(&directive.render(*arg, verb == 'q')),
                None => {
                    let _ = write!(out, "%!{}(MISSING)", verb);
                }
            },
            Some(other) => {
                out.push_str("%!(NOVERB)");
                out.push(other);
            }
        }
    }

    let extra: Vec<String> = next.map(|arg| arg.to_string()).collect();
    if !extra.is_empty() {
        let _ = write!(out, "%!(EXTRA {})", extra.join(", "));
    }

    out
}
