use clap::ValueEnum;

/// Which literal `\n` sequences get turned into line breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReplaceMode {
    /// Replace every `\n`
    #[default]
    All,
    /// Leave `\\n` alone, replace only `\n` whose backslash is not escaped
    Unescaped,
}

impl ReplaceMode {
    /// Looks a mode up by its exact name, `None` for anything else.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "all" => Some(ReplaceMode::All),
            "unescaped" => Some(ReplaceMode::Unescaped),
            _ => None,
        }
    }
}

impl std::fmt::Display for ReplaceMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ReplaceMode::All => "all",
            ReplaceMode::Unescaped => "unescaped",
        };
        write!(f, "{}", name)
    }
}
