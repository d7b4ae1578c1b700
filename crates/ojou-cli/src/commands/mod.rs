use std::fs;
use std::path::Path;
use std::process;

use ojou_core::settings::{self, Settings};
use ojou_core::RegisteredWords;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub mod chat_ops;
pub mod conjugate_ops;
pub mod dict_ops;
pub mod translate_ops;

/// Flags shared by the commands that rewrite text.
#[derive(Debug, Clone, Default)]
pub struct Common {
    pub settings: Option<String>,
    pub dict: Option<String>,
    pub seed: Option<u64>,
}

impl Common {
    /// Install `--settings` (if any) and return the effective settings.
    pub fn settings(&self) -> Settings {
        if let Some(path) = &self.settings {
            let content = die!(fs::read_to_string(path), "Error reading {path}: {}");
            die!(settings::init_custom(content), "Error in {path}: {}");
        }
        let mut s = settings::settings().clone();
        if self.seed.is_some() {
            s.random.seed = self.seed;
        }
        s
    }

    /// The `--dict` word file, or an empty store.
    pub fn dictionary(&self) -> RegisteredWords {
        match &self.dict {
            Some(path) => die!(RegisteredWords::open(Path::new(path)), "Error loading {path}: {}"),
            None => RegisteredWords::new(),
        }
    }
}
