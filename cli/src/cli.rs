use clap::Parser;
use overtoast_core::RawArgs;
use std::ffi::OsString;

/// Every argument is optional and nothing is ever rejected; malformed values fall back to
/// defaults when the request is resolved. Values are taken as raw OS strings so one argument that
/// is not valid UTF-8 degrades on its own instead of failing the whole command line.
#[derive(Parser, Debug, Clone, Default)]
#[command(
    name = "overtoast",
    version = overtoast_core::version(),
    about = "Shows a transient notification on every display",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Args {
    /// Text to show
    #[arg(allow_hyphen_values = true)]
    pub message: Option<OsString>,

    /// Accent color: blue, yellow, green, anything else is red
    #[arg(allow_hyphen_values = true)]
    pub category: Option<OsString>,

    /// Image shown left of the message
    #[arg(allow_hyphen_values = true)]
    pub icon_path: Option<OsString>,

    /// Stacking index; slot N sits N panels below slot 0
    #[arg(allow_hyphen_values = true)]
    pub slot: Option<OsString>,

    /// Seconds before the notification disappears
    #[arg(allow_hyphen_values = true)]
    pub dismiss_seconds: Option<OsString>,

    #[arg(hide = true, allow_hyphen_values = true)]
    pub extra: Vec<OsString>,
}

impl Args {
    pub fn into_raw(self) -> RawArgs {
        RawArgs {
            message: lossy(self.message),
            category: lossy(self.category),
            icon_path: lossy(self.icon_path),
            slot: lossy(self.slot),
            dismiss_seconds: lossy(self.dismiss_seconds),
        }
    }
}

fn lossy(value: Option<OsString>) -> Option<String> {
    value.map(|v| v.to_string_lossy().into_owned())
}

pub fn parse_args() -> Args {
    Args::try_parse().unwrap_or_else(|e| {
        log::warn!("Ignoring unparseable arguments: {}", e.kind());
        Args::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> RawArgs {
        Args::try_parse_from(std::iter::once("overtoast").chain(args.iter().copied()))
            .unwrap()
            .into_raw()
    }

    #[test]
    fn test_no_arguments() {
        assert_eq!(parse(&[]), RawArgs::default());
    }

    #[test]
    fn test_all_positionals() {
        let raw = parse(&["Done", "green", "/tmp/i.png", "1", "2.5"]);
        assert_eq!(raw.message.as_deref(), Some("Done"));
        assert_eq!(raw.category.as_deref(), Some("green"));
        assert_eq!(raw.icon_path.as_deref(), Some("/tmp/i.png"));
        assert_eq!(raw.slot.as_deref(), Some("1"));
        assert_eq!(raw.dismiss_seconds.as_deref(), Some("2.5"));
    }

    #[test]
    fn test_hyphen_values_are_positionals() {
        let raw = parse(&["--help", "-v", "", "-1", "-2"]);
        assert_eq!(raw.message.as_deref(), Some("--help"));
        assert_eq!(raw.category.as_deref(), Some("-v"));
        assert_eq!(raw.icon_path.as_deref(), Some(""));
        assert_eq!(raw.slot.as_deref(), Some("-1"));
        assert_eq!(raw.dismiss_seconds.as_deref(), Some("-2"));
    }

    #[cfg(unix)]
    #[test]
    fn test_invalid_utf8_only_affects_its_own_value() {
        use std::os::unix::ffi::OsStringExt;

        let args = [
            OsString::from("overtoast"),
            OsString::from("Done"),
            OsString::from_vec(vec![0x67, 0xff, 0x72]),
            OsString::from("/tmp/i.png"),
            OsString::from("2"),
            OsString::from("1.5"),
        ];
        let raw = Args::try_parse_from(args).unwrap().into_raw();

        assert_eq!(raw.message.as_deref(), Some("Done"));
        assert_eq!(raw.category.as_deref(), Some("g\u{FFFD}r"));
        assert_eq!(raw.icon_path.as_deref(), Some("/tmp/i.png"));
        assert_eq!(raw.slot.as_deref(), Some("2"));
        assert_eq!(raw.dismiss_seconds.as_deref(), Some("1.5"));
    }

    #[test]
    fn test_extra_arguments_ignored() {
        let raw = parse(&["a", "b", "c", "0", "1", "surplus", "--more"]);
        assert_eq!(raw.dismiss_seconds.as_deref(), Some("1"));
    }
}
