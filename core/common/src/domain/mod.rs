//! ドメイン型（Newtype）
//!
//! String / PathBuf を直接運ばず、意味のある型に包んで境界を明確にする。

use crate::error::Error;
use std::path::{Path, PathBuf};

/// セッションディレクトリの絶対パス
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionDir(PathBuf);

impl SessionDir {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    /// セッション内のファイルパス
    pub fn file(&self, name: &str) -> PathBuf {
        self.0.join(name)
    }
}

impl std::ops::Deref for SessionDir {
    type Target = PathBuf;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<Path> for SessionDir {
    fn as_ref(&self) -> &Path {
        self.0.as_ref()
    }
}

impl From<PathBuf> for SessionDir {
    fn from(p: PathBuf) -> Self {
        Self(p)
    }
}

/// モデル名（sonnet, opus 等。解釈は外部 CLI に任せる）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelName(String);

impl ModelName {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }
}

impl std::ops::Deref for ModelName {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for ModelName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// セッション名（ディレクトリ名の末尾に `_<name>` として付く）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionName(String);

impl SessionName {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// ユーザー入力から作る。ディレクトリ名の一部になるため、パス区切りと `..` は受け付けない。
    pub fn parse(s: &str) -> Result<Self, Error> {
        if s.contains(['/', '\\', '\0']) || s.contains("..") {
            return Err(Error::invalid_argument(format!(
                "Invalid session name '{}': must not contain '/', '\\' or '..'",
                s
            )));
        }
        Ok(Self::new(s))
    }
}

impl std::ops::Deref for SessionName {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
