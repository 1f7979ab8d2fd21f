use std::path::PathBuf;

pub const DEFAULT_MESSAGE: &str = "peon-nsx";
pub const DEFAULT_SLOT: u32 = 0;
pub const DEFAULT_DISMISS_SECONDS: f64 = 4.0;

/// Semantic notification type. Callers name it by accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    Error,
    Warning,
    Success,
    Info,
}

impl Category {
    /// Exact, case-sensitive match on the caller-facing color name. Anything unrecognized is
    /// treated as an error notification.
    pub fn from_name(name: &str) -> Self {
        match name {
            "blue" => Category::Info,
            "yellow" => Category::Warning,
            "green" => Category::Success,
            _ => Category::Error,
        }
    }
}

/// The five positional inputs exactly as the caller passed them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawArgs {
    pub message: Option<String>,
    pub category: Option<String>,
    pub icon_path: Option<String>,
    pub slot: Option<String>,
    pub dismiss_seconds: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NotificationRequest {
    pub message: String,
    pub category: Category,
    pub icon_path: Option<PathBuf>,
    pub slot: u32,
    /// May be zero or negative, which means dismiss on the next tick.
    pub dismiss_seconds: f64,
}

impl Default for NotificationRequest {
    fn default() -> Self {
        Self {
            message: DEFAULT_MESSAGE.to_string(),
            category: Category::default(),
            icon_path: None,
            slot: DEFAULT_SLOT,
            dismiss_seconds: DEFAULT_DISMISS_SECONDS,
        }
    }
}

impl NotificationRequest {
    /// Never fails: every missing or malformed input falls back to its default.
    pub fn resolve(raw: &RawArgs) -> Self {
        let message = raw
            .message
            .as_deref()
            .filter(|m| !m.is_empty())
            .unwrap_or(DEFAULT_MESSAGE)
            .to_string();

        let category = raw
            .category
            .as_deref()
            .map(Category::from_name)
            .unwrap_or_default();

        let icon_path = raw
            .icon_path
            .as_deref()
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        let slot = raw
            .slot
            .as_deref()
            .and_then(parse_int_prefix)
            .and_then(|s| u32::try_from(s).ok())
            .unwrap_or(DEFAULT_SLOT);

        let dismiss_seconds = raw
            .dismiss_seconds
            .as_deref()
            .and_then(parse_float_prefix)
            .filter(|d| d.is_finite())
            .unwrap_or(DEFAULT_DISMISS_SECONDS);

        Self {
            message,
            category,
            icon_path,
            slot,
            dismiss_seconds,
        }
    }
}

/// Parses the longest leading integer, ignoring leading whitespace and any trailing garbage.
/// `"2.7"` and `"2px"` both yield 2.
fn parse_int_prefix(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let end = sign_len(s) + digit_run(&s[sign_len(s)..]);
    s[..end].parse().ok()
}

/// Parses the longest leading decimal number (optional sign, digits, fraction, exponent).
fn parse_float_prefix(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let mut end = sign_len(s);

    let int_digits = digit_run(&s[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if s[end..].starts_with('.') {
        frac_digits = digit_run(&s[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if s[end..].starts_with(['e', 'E']) {
        let exp_start = end + 1;
        let exp_sign = sign_len(&s[exp_start..]);
        let exp_digits = digit_run(&s[exp_start + exp_sign..]);
        if exp_digits > 0 {
            end = exp_start + exp_sign + exp_digits;
        }
    }

    s[..end].parse().ok()
}

fn sign_len(s: &str) -> usize {
    usize::from(s.starts_with(['+', '-']))
}

fn digit_run(s: &str) -> usize {
    s.bytes().take_while(u8::is_ascii_digit).count()
}
