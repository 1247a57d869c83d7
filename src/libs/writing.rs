use std::fmt;
use std::fs::{create_dir_all, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::constants::DEBUG_LOGS_VAR;

const LOG_DIR: &str = "logs";

pub mod cc {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const RESET: &str = "\x1b[0m";
    pub const ORANGE: &str = "\x1b[38;5;208m";
    pub const LIGHT_GRAY: &str = "\x1b[38;5;245m";
    pub const LIGHT_GREEN: &str = "\x1b[92m";
    pub const LIGHT_CYAN: &str = "\x1b[96m";
}

/// Timestamped, colored line on stderr. stdout is reserved for results.
#[macro_export]
macro_rules! log {
    // log!(cc::GREEN, "supply: {}", s);
    ($color:path, $fmt:literal $(, $arg:expr)* $(,)?) => {{
        $crate::libs::writing::write_log($color, format_args!($fmt $(, $arg)*));
    }};

    // log!("calling {}", name);
    ($fmt:literal $(, $arg:expr)* $(,)?) => {{
        $crate::libs::writing::write_log(
            $crate::libs::writing::cc::LIGHT_GRAY,
            format_args!($fmt $(, $arg)*),
        );
    }};
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {{
        $crate::libs::writing::write_log(
            $crate::libs::writing::cc::ORANGE,
            format_args!($($arg)*),
        );
    }};
}

pub fn write_log(color: &str, args: fmt::Arguments<'_>) {
    let time = Utc::now().format("%H:%M:%S%.3f").to_string();
    let msg = args.to_string();
    let mut stderr = io::stderr().lock();
    let _ = writeln!(
        stderr,
        "{}{} | {}{}{}{}",
        cc::LIGHT_GRAY,
        time,
        cc::RESET,
        color,
        msg,
        cc::RESET
    );
    drop(stderr);
    mirror_to_file(&time, &msg);
}

pub fn log_file_path(now: DateTime<Utc>) -> PathBuf {
    Path::new(LOG_DIR).join(format!("logs_{}.txt", now.format("%H-%d-%m-%Y")))
}

// Only with DEBUG_LOGS=true; one file per hour.
fn mirror_to_file(time: &str, msg: &str) {
    let enabled = std::env::var(DEBUG_LOGS_VAR).is_ok_and(|v| v.eq_ignore_ascii_case("true"));
    if !enabled {
        return;
    }
    let path = log_file_path(Utc::now());
    let res = create_dir_all(LOG_DIR)
        .and_then(|_| OpenOptions::new().create(true).append(true).open(&path))
        .and_then(|mut f| writeln!(f, "[{time}] {msg}"));
    if let Err(e) = res {
        eprintln!("log mirror {}: {e}", path.display());
    }
}

/// `0xabcdef…123456`
pub fn short_addr(addr: &alloy::primitives::Address) -> String {
    let s = addr.as_slice();
    format!("0x{}…{}", hex::encode(&s[0..3]), hex::encode(&s[17..20]))
}
