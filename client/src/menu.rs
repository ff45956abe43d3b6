//! Interactive menu texts and input parsing

/// Type codes the client accepts, lowercase. Includes the quit sentinel;
/// the session loop checks for it after validation.
pub const ALLOWED_TYPES: &str = "namsuq";

/// Reserved code that ends the session loop instead of sending a request.
pub const QUIT_CODE: char = 'q';

/// Code that shows the help menu instead of sending a request.
pub const HELP_CODE: char = 'h';

/// Length used when the user gives a type without a length.
pub const DEFAULT_LENGTH: &str = "8";

/// One parsed line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuInput {
    Request { type_code: char, length: String },
    Help,
    Invalid,
}

/// Splits a line of input into a type code and a length.
///
/// One whitespace-separated field is a bare type and gets the default
/// length; two fields are type and length; anything else is invalid. The
/// type field must be a single character. `h` asks for the help menu before
/// any validation happens.
pub fn parse_input(line: &str) -> MenuInput {
    let fields: Vec<&str> = line.split_whitespace().collect();

    let type_code = match fields.first() {
        Some(field) if field.chars().count() == 1 => field.chars().next().unwrap(),
        _ => return MenuInput::Invalid,
    };

    if type_code.eq_ignore_ascii_case(&HELP_CODE) {
        return MenuInput::Help;
    }

    match fields.len() {
        1 => MenuInput::Request {
            type_code,
            length: DEFAULT_LENGTH.to_string(),
        },
        2 => MenuInput::Request {
            type_code,
            length: fields[1].to_string(),
        },
        _ => MenuInput::Invalid,
    }
}

/// The prompt shown before every request.
pub fn password_menu() -> &'static str {
    "Insert the type of password and its length (between 6 and 32):\n\
     \x20 n: numeric password (only digits)\n\
     \x20 a: alphabetic password (only lowercase letters)\n\
     \x20 m: mixed password (lowercase letters and digits)\n\
     \x20 s: secure password (uppercase letters, lowercase letters, digits, and symbols)\n\
     \x20 u: unambiguous secure password (no similar-looking characters)\n\
     \x20 h: help menu\n\
     \x20 q: quit application\n\
     ? "
}

/// The detailed help text, including the excluded-glyph table for the
/// unambiguous type and the default-length note.
pub fn help_menu() -> &'static str {
    "\nPassword Generator Help Menu\n\
     Commands:\n\
     \x20h        : show this help menu\n\
     \x20n LENGTH : generate numeric password (digits only)\n\
     \x20a LENGTH : generate alphabetic password (lowercase letters)\n\
     \x20m LENGTH : generate mixed password (lowercase letters and numbers)\n\
     \x20s LENGTH : generate secure password (uppercase, lowercase, numbers, symbols)\n\
     \x20u LENGTH : generate unambiguous secure password (no similar-looking characters)\n\
     \x20q        : quit application\n\n\
     \x20LENGTH must be between 6 and 32 characters\n\n\
     \x20Ambiguous characters excluded in 'u' option:\n\
     \x200 O o (zero and letters O)\n\
     \x201 l I i (one and letters l, I)\n\
     \x202 Z z (two and letter Z)\n\
     \x205 S s (five and letter S)\n\
     \x208 B (eight and letter B)\n\n\
     If the length is absent, a default value is used: 8\n"
}
