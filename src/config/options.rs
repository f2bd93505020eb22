// src/config/options.rs
use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub search: SearchOptions,
    pub output: OutputOptions,
}

impl AppOptions {
    /// Defaults, with the base URL taken from the environment when set.
    pub fn from_env() -> Self {
        Self {
            search: SearchOptions::from_env(),
            output: OutputOptions::default(),
        }
    }
}

/// Where and how the availability page is requested.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchOptions {
    pub base_url: String,
    pub currency: String,
    pub lang: String,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            base_url: s!(BASE_URL),
            currency: s!(CURRENCY),
            lang: s!(LANG),
        }
    }
}

impl SearchOptions {
    pub fn from_env() -> Self {
        let mut opts = Self::default();
        if let Ok(url) = std::env::var(BASE_URL_ENV) {
            opts.set_base_url(&url);
        }
        opts
    }

    /// Blank input keeps the current value.
    pub fn set_base_url(&mut self, url: &str) {
        let url = url.trim();
        if !url.is_empty() {
            self.base_url = s!(url);
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Space-aligned columns for a terminal
    #[default]
    Table,
    Csv,
    Tsv,
}

impl OutputFormat {
    /// Field separator for the delimited formats.
    pub fn delim(&self) -> Option<char> {
        match self {
            OutputFormat::Table => None,
            OutputFormat::Csv => Some(','),
            OutputFormat::Tsv => Some('\t'),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputOptions {
    pub format: OutputFormat,
    pub include_headers: bool,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Table,
            include_headers: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_base_url_is_ignored() {
        let mut opts = SearchOptions::default();
        opts.set_base_url("   ");
        assert_eq!(opts.base_url, BASE_URL);

        opts.set_base_url(" http://127.0.0.1:8080/ibe/availability ");
        assert_eq!(opts.base_url, "http://127.0.0.1:8080/ibe/availability");
    }

    #[test]
    fn delimiters_per_format() {
        assert_eq!(OutputFormat::Table.delim(), None);
        assert_eq!(OutputFormat::Csv.delim(), Some(','));
        assert_eq!(OutputFormat::Tsv.delim(), Some('\t'));
    }
}
