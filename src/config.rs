use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

pub const CONFIG_FILE: &str = ".alian.yml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub parser: ParserConfig,
}

/// 各类语句是否必须以`;`结尾
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ParserConfig {
    #[serde(default = "required")]
    pub let_semicolon: SemicolonPolicy,
    #[serde(default = "required")]
    pub return_semicolon: SemicolonPolicy,
    #[serde(default = "optional")]
    pub expression_semicolon: SemicolonPolicy,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            let_semicolon: required(),
            return_semicolon: required(),
            expression_semicolon: optional(),
        }
    }
}

impl ParserConfig {
    /// 所有语句都可省略`;`
    pub fn lenient() -> Self {
        Self {
            let_semicolon: optional(),
            return_semicolon: optional(),
            expression_semicolon: optional(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SemicolonPolicy {
    Required,
    Optional,
}

fn required() -> SemicolonPolicy {
    SemicolonPolicy::Required
}

fn optional() -> SemicolonPolicy {
    SemicolonPolicy::Optional
}

#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Yaml(serde_yaml::Error),
    /// 查找时找到的配置文件无法使用
    InFile(PathBuf, Box<ConfigError>),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "failed to read config: {}", err),
            ConfigError::Yaml(err) => write!(f, "invalid config: {}", err),
            ConfigError::InFile(path, err) => write!(f, "{}: {}", path.display(), err),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(err) => Some(err),
            ConfigError::Yaml(err) => Some(err),
            ConfigError::InFile(_, err) => Some(err.as_ref()),
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(err: io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::Yaml(err)
    }
}

/// 依次查找项目目录与`$HOME`下的`.alian.yml`，都没有则用默认配置
///
/// 只有文件不存在才继续查找，文件存在但无法读取或解析即报错
pub fn load_config(workspace_root: Option<&Path>) -> Result<Config, ConfigError> {
    let home = std::env::var_os("HOME").map(PathBuf::from);
    lookup(workspace_root, home.as_deref())
}

fn lookup(workspace_root: Option<&Path>, home: Option<&Path>) -> Result<Config, ConfigError> {
    for dir in workspace_root.into_iter().chain(home) {
        let path = dir.join(CONFIG_FILE);
        let found = try_load(&path).map_err(|err| ConfigError::InFile(path, Box::new(err)))?;
        if let Some(cfg) = found {
            return Ok(cfg);
        }
    }
    Ok(Config::default())
}

fn try_load(path: &Path) -> Result<Option<Config>, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(content) => parse_config(&content).map(Some),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err.into()),
    }
}

/// 加载指定的配置文件，读取或语法错误直接返回
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    parse_config(&content)
}

pub fn parse_config(content: &str) -> Result<Config, ConfigError> {
    Ok(serde_yaml::from_str(content)?)
}
