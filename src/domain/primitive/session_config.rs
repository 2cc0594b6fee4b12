use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TerminalType {
    Ibm3278,
    #[default]
    Ibm3279,
}

impl TerminalType {
    pub fn type_number(&self) -> &str {
        match self {
            Self::Ibm3278 => "3278",
            Self::Ibm3279 => "3279",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TerminalModel {
    #[default]
    Model2,
    Model3,
    Model4,
    Model5,
}

impl TerminalModel {
    pub fn model_number(&self) -> u8 {
        match self {
            Self::Model2 => 2,
            Self::Model3 => 3,
            Self::Model4 => 4,
            Self::Model5 => 5,
        }
    }
}

/// Host EBCDIC character set, by the name the engine knows it under.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HostCharset {
    #[default]
    Bracket,
    UsIntl,
    German,
    French,
    Uk,
    Finnish,
    Italian,
    Norwegian,
}

impl HostCharset {
    pub fn charset_name(&self) -> &str {
        match self {
            Self::Bracket => "bracket",
            Self::UsIntl => "us-intl",
            Self::German => "german",
            Self::French => "french",
            Self::Uk => "uk",
            Self::Finnish => "finnish",
            Self::Italian => "italian",
            Self::Norwegian => "norwegian",
        }
    }
}

/// Construction data for one terminal session. Inert: nothing here talks
/// to the network, values are only consumed when the engine attaches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_executable")]
    pub executable: String,
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub terminal_type: TerminalType,
    #[serde(default)]
    pub terminal_model: TerminalModel,
    #[serde(default)]
    pub charset: HostCharset,
    #[serde(default)]
    pub show_window: bool,
    #[serde(default)]
    pub debug: bool,
}

fn default_executable() -> String {
    "s3270".to_string()
}

fn default_port() -> u16 {
    23
}

impl SessionConfig {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            executable: default_executable(),
            host: host.into(),
            port: default_port(),
            terminal_type: TerminalType::default(),
            terminal_model: TerminalModel::default(),
            charset: HostCharset::default(),
            show_window: false,
            debug: false,
        }
    }

    pub fn executable(mut self, executable: impl Into<String>) -> Self {
        self.executable = executable.into();
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn terminal_type(mut self, terminal_type: TerminalType) -> Self {
        self.terminal_type = terminal_type;
        self
    }

    pub fn terminal_model(mut self, terminal_model: TerminalModel) -> Self {
        self.terminal_model = terminal_model;
        self
    }

    pub fn charset(mut self, charset: HostCharset) -> Self {
        self.charset = charset;
        self
    }

    pub fn show_window(mut self, show_window: bool) -> Self {
        self.show_window = show_window;
        self
    }

    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Engine model argument, e.g. "3279-2".
    pub fn model_arg(&self) -> String {
        format!(
            "{}-{}",
            self.terminal_type.type_number(),
            self.terminal_model.model_number()
        )
    }

    pub fn host_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
