use clap::{Parser, builder::BoolishValueParser};
use std::error::Error;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8002;
const DEFAULT_DB_URI: &str = "surrealkv://social_graph_db";
const DEFAULT_DB_NAMESPACE: &str = "social";
const DEFAULT_DB_NAME: &str = "graph";
const DEFAULT_DATA_DIR: &str = "data";
const SUPPORTED_DB_SCHEMES: [&str; 2] = ["mem://", "surrealkv://"];

#[derive(Parser, Debug)]
#[command(name = "social-mcpd", version, about = "Social graph MCP daemon.")]
struct CliArgs {
    #[arg(long, env = "SOCIAL_GRAPH_HOST", default_value = DEFAULT_HOST)]
    host: IpAddr,

    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    #[arg(
        long = "stdio",
        env = "SOCIAL_GRAPH_STDIO",
        default_value_t = false,
        value_parser = BoolishValueParser::new()
    )]
    enable_stdio: bool,

    #[arg(
        long,
        env = "SOCIAL_GRAPH_STATELESS",
        default_value_t = false,
        value_parser = BoolishValueParser::new()
    )]
    stateless: bool,

    #[arg(long, env = "SOCIAL_GRAPH_DB_URI")]
    db_uri: Option<String>,

    #[arg(long, env = "SOCIAL_GRAPH_DB_NAMESPACE", default_value = DEFAULT_DB_NAMESPACE)]
    db_namespace: String,

    #[arg(long, env = "SOCIAL_GRAPH_DB_NAME", default_value = DEFAULT_DB_NAME)]
    db_name: String,

    #[arg(long, env = "SOCIAL_GRAPH_DATA_DIR", default_value = DEFAULT_DATA_DIR)]
    data_dir: PathBuf,
}

/// Runtime configuration loaded from CLI arguments and environment variables.
#[derive(Debug, Clone)]
pub struct GraphConfig {
    pub http_addr: SocketAddr,
    pub enable_stdio: bool,
    pub stateless: bool,
    pub db_uri: String,
    pub db_namespace: String,
    pub db_name: String,
    pub data_dir: PathBuf,
}

#[derive(Debug)]
pub enum ConfigError {
    MissingSetting(&'static str),
    InvalidSetting { name: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSetting(name) => write!(f, "missing required setting: {name}"),
            Self::InvalidSetting { name, value } => {
                write!(f, "invalid {name} value: {value}")
            }
        }
    }
}

impl Error for ConfigError {}

impl GraphConfig {
    pub fn from_args() -> Result<Self, ConfigError> {
        let args = CliArgs::parse();
        Self::try_from(args)
    }
}

impl TryFrom<CliArgs> for GraphConfig {
    type Error = ConfigError;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        let db_uri = args
            .db_uri
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_DB_URI.to_string());

        if !SUPPORTED_DB_SCHEMES
            .iter()
            .any(|scheme| db_uri.starts_with(scheme))
        {
            return Err(ConfigError::InvalidSetting {
                name: "SOCIAL_GRAPH_DB_URI",
                value: db_uri,
            });
        }
        if db_uri.starts_with("surrealkv://") && db_uri.len() == "surrealkv://".len() {
            return Err(ConfigError::MissingSetting("SOCIAL_GRAPH_DB_URI path"));
        }

        if args.db_namespace.trim().is_empty() {
            return Err(ConfigError::InvalidSetting {
                name: "SOCIAL_GRAPH_DB_NAMESPACE",
                value: args.db_namespace,
            });
        }
        if args.db_name.trim().is_empty() {
            return Err(ConfigError::InvalidSetting {
                name: "SOCIAL_GRAPH_DB_NAME",
                value: args.db_name,
            });
        }

        Ok(Self {
            http_addr: SocketAddr::new(args.host, args.port),
            enable_stdio: args.enable_stdio,
            stateless: args.stateless,
            db_uri,
            db_namespace: args.db_namespace,
            db_name: args.db_name,
            data_dir: args.data_dir,
        })
    }
}
