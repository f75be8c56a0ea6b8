use std::env;
use std::io::{self, Write};

pub const FALLBACK_FLAG: &str = "flag{buffer_overflow_pwned}";

/// Success output of the challenge. Never called on the normal path; the
/// binary keeps it only as a target for a corrupted return address.
#[inline(never)]
pub fn print_flag() {
    write_flag(&mut io::stdout(), |name| env::var(name).ok());
    let _ = io::stdout().flush();
}

/// Writes the flag message, taking the environment lookup as an argument so
/// the routine can be exercised without touching process-wide state.
pub fn write_flag<W: Write>(out: &mut W, lookup: impl Fn(&str) -> Option<String>) {
    match lookup("FLAG") {
        Some(flag) if !flag.is_empty() => {
            let _ = write!(out, "\n🎉 Congratulations! Here's your flag:\n{flag}\n");
        }
        _ => {
            let _ = write!(out, "\n🎉 Flag: {FALLBACK_FLAG}\n");
        }
    }
}

mod test {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_fallback_flag_when_unset() {
        let mut out = Vec::new();
        write_flag(&mut out, |_| None);

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\n🎉 Flag: flag{buffer_overflow_pwned}\n"
        );
    }

    #[test]
    fn test_env_flag_when_set() {
        let mut out = Vec::new();
        write_flag(&mut out, |name| {
            assert_eq!(name, "FLAG");
            Some("flag{test_value}".to_owned())
        });

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\n🎉 Congratulations! Here's your flag:\nflag{test_value}\n"
        );
    }

    #[test]
    fn test_empty_env_flag_falls_back() {
        let mut out = Vec::new();
        write_flag(&mut out, |_| Some(String::new()));

        assert!(
            String::from_utf8(out)
                .unwrap()
                .contains("flag{buffer_overflow_pwned}")
        );
    }
}
