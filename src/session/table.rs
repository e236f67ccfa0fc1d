use super::parsing::{parse_session, session_key_from_filename};
use super::structs::CaptureSession;
use crate::utils::{GlobPattern, list_matching_files};
use crate::{RenameError, SETTINGS_FILE_PATTERN};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Immutable lookup of capture sessions by session key, built once per run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionTable {
    sessions: BTreeMap<String, CaptureSession>,
}

impl SessionTable {
    /// Builds a table from `(filename, content)` pairs.
    ///
    /// Files whose name carries no session key are skipped. When two files share a
    /// key, the one that comes later in iteration order wins.
    pub fn from_files<'a, I>(files: I) -> Result<Self, RenameError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut sessions = BTreeMap::new();
        for (filename, content) in files {
            let Some(key) = session_key_from_filename(filename) else {
                debug!("Skipping settings file without session key: {filename}");
                continue;
            };
            let session = parse_session(key, content).map_err(|source| RenameError::Session {
                file: PathBuf::from(filename),
                source,
            })?;
            if sessions.insert(key.to_string(), session).is_some() {
                warn!("Duplicate session key {key}, using {filename}");
            }
        }
        Ok(Self { sessions })
    }

    /// Reads every `*.CameraSettings.txt` file in `dir`, in file-name order.
    pub fn from_dir(dir: &Path) -> Result<Self, RenameError> {
        let pattern = GlobPattern::new(SETTINGS_FILE_PATTERN)?;
        let paths = list_matching_files(dir, &pattern)?;

        let mut contents = Vec::with_capacity(paths.len());
        for path in &paths {
            contents.push((
                path.to_string_lossy().into_owned(),
                std::fs::read_to_string(path)?,
            ));
        }

        Self::from_files(contents.iter().map(|(n, c)| (n.as_str(), c.as_str())))
    }

    pub fn get(&self, session_key: &str) -> Option<&CaptureSession> {
        self.sessions.get(session_key)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl FromIterator<CaptureSession> for SessionTable {
    fn from_iter<T: IntoIterator<Item = CaptureSession>>(iter: T) -> Self {
        Self {
            sessions: iter
                .into_iter()
                .map(|s| (s.session_key.clone(), s))
                .collect(),
        }
    }
}
