use crate::naming::output_filename;
use crate::naming::parse_stacked_image_filename;
use crate::naming::structs::{ImageInfoParams, StackedImageRef};
use crate::naming::validate_observer;
use crate::session::SessionTable;
use crate::time::{mid_exposure_time, to_winjupos_time};
use crate::utils::{GlobPattern, ensure_directory, list_matching_files};
use crate::{DEFAULT_IMAGE_PATTERN, RenameError};
use bon::bon;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// How a stacked image reaches the target directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TransferMode {
    /// Copy contents, keeping access and modification times.
    #[default]
    Copy,
    /// Create a hard link.
    Link,
}

impl fmt::Display for TransferMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Copy => write!(f, "copy"),
            Self::Link => write!(f, "link"),
        }
    }
}

/// One stacked image and the name it gets in the target directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedTransfer {
    pub source: PathBuf,
    pub input_name: String,
    pub output_name: String,
    pub image: StackedImageRef,
    pub mid_exposure: DateTime<FixedOffset>,
}

/// Something a run does (or would do, in dry-run mode) to the filesystem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum Action {
    CreateTargetDir { path: PathBuf },
    Transfer {
        mode: TransferMode,
        #[serde(flatten)]
        transfer: PlannedTransfer,
    },
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CreateTargetDir { path } => {
                write!(f, "create target directory: {}", path.display())
            }
            Self::Transfer { mode, transfer } => write!(
                f,
                "{mode}: {} -> {}",
                transfer.input_name, transfer.output_name
            ),
        }
    }
}

/// Renames SharpCap + AutoStakkert! stacks into WinJUPOS file names.
///
/// The observer and image info are fixed for the whole run, so a bad value fails
/// the run instead of a single file.
///
/// ```rust
/// # use sc2winjupos::{Renamer, RenameError, TransferMode};
/// # fn main() -> Result<(), RenameError> {
/// let renamer = Renamer::builder()
///     .observer("jsmith")
///     .imageinfo("{cam}")
///     .mode(TransferMode::Link)
///     .dry_run(true)
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Renamer {
    observer: String,
    imageinfo: Option<String>,
    pattern: GlobPattern,
    mode: TransferMode,
    dry_run: bool,
}

#[bon]
impl Renamer {
    /// Constructs a `Renamer` via a builder pattern.
    ///
    /// # Builder Arguments
    ///
    /// * `observer: String` - Observer name written after the time. Must be non-empty ASCII without reserved characters.
    /// * `imageinfo: Option<String>` - Template appended after the observer. `{cam}` expands to the camera name, `{ff}` to the AutoStakkert! free field.
    /// * `pattern: String` - (Default: `*.tif`) Filename pattern of stacked images.
    /// * `mode: TransferMode` - (Default: `Copy`) Copy or hard link.
    /// * `dry_run: bool` - (Default: `false`) Report actions without touching the filesystem.
    ///
    /// # Errors
    ///
    /// Fails if the observer is invalid or the pattern cannot be compiled. The observer is
    /// checked here, even if no stacked image ends up matching.
    #[builder]
    pub fn new(
        #[builder(into)] observer: String,
        #[builder(into)] imageinfo: Option<String>,
        #[builder(into, default = DEFAULT_IMAGE_PATTERN.to_string())] pattern: String,
        #[builder(default)] mode: TransferMode,
        #[builder(default)] dry_run: bool,
    ) -> Result<Self, RenameError> {
        validate_observer(&observer)?;
        Ok(Self {
            observer,
            imageinfo: imageinfo.filter(|t| !t.is_empty()),
            pattern: GlobPattern::new(&pattern)?,
            mode,
            dry_run,
        })
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Works out the output name of a single stacked image.
    ///
    /// Returns `Ok(None)` when the name does not follow the AutoStakkert! convention
    /// or no capture session has its key.
    pub fn plan_file(
        &self,
        sessions: &SessionTable,
        path: &Path,
    ) -> Result<Option<PlannedTransfer>, RenameError> {
        let Some(input_name) = path.file_name().and_then(|n| n.to_str()) else {
            return Ok(None);
        };
        let Some(image) = parse_stacked_image_filename(input_name) else {
            debug!("Skipping {input_name}: not a stacked image name");
            return Ok(None);
        };
        let Some(session) = sessions.get(&image.session_key) else {
            debug!("Skipping {input_name}: no capture settings for {}", image.session_key);
            return Ok(None);
        };

        let mid_exposure =
            mid_exposure_time(session, image.frame_range).map_err(|source| RenameError::Time {
                file: path.to_path_buf(),
                session_key: image.session_key.clone(),
                source,
            })?;
        let params = ImageInfoParams {
            cam: session.camera.clone(),
            ff: image.free_field.clone(),
        };
        let output_name = output_filename(
            &to_winjupos_time(&mid_exposure),
            &self.observer,
            self.imageinfo.as_deref(),
            &params,
            &image.extension,
        )?;

        Ok(Some(PlannedTransfer {
            source: path.to_path_buf(),
            input_name: input_name.to_string(),
            output_name,
            image,
            mid_exposure,
        }))
    }

    /// Plans every matching stacked image in `image_dir`, in file-name order.
    ///
    /// Nothing is written. The first fatal error aborts the whole plan.
    pub fn plan(
        &self,
        sessions: &SessionTable,
        image_dir: &Path,
    ) -> Result<Vec<PlannedTransfer>, RenameError> {
        let mut planned = Vec::new();
        for path in list_matching_files(image_dir, &self.pattern)? {
            if let Some(transfer) = self.plan_file(sessions, &path)? {
                planned.push(transfer);
            }
        }
        Ok(planned)
    }

    /// Copies or links one planned image into `target_dir`. Does nothing in dry-run mode.
    pub fn transfer(&self, transfer: &PlannedTransfer, target_dir: &Path) -> Result<(), RenameError> {
        if self.dry_run {
            return Ok(());
        }
        let dest = target_dir.join(&transfer.output_name);
        let result = match self.mode {
            TransferMode::Copy => copy_with_times(&transfer.source, &dest),
            TransferMode::Link => fs::hard_link(&transfer.source, &dest),
        };
        result.map_err(|source| RenameError::Transfer {
            operation: self.mode,
            from: transfer.source.clone(),
            to: dest,
            source,
        })
    }

    /// Runs the whole conversion and reports each action through `on_action` before it happens.
    ///
    /// Both input directories are checked first and every file is planned before the
    /// target directory is touched, so a fatal error leaves the target unchanged.
    pub fn run<F>(
        &self,
        settings_dir: &Path,
        image_dir: &Path,
        target_dir: &Path,
        mut on_action: F,
    ) -> Result<Vec<Action>, RenameError>
    where
        F: FnMut(&Action),
    {
        ensure_directory(settings_dir)?;
        ensure_directory(image_dir)?;

        let sessions = SessionTable::from_dir(settings_dir)?;
        info!("Loaded {} capture session(s)", sessions.len());
        let planned = self.plan(&sessions, image_dir)?;
        info!("Matched {} stacked image(s)", planned.len());

        let mut actions = Vec::with_capacity(planned.len() + 1);
        if !target_dir.exists() {
            let action = Action::CreateTargetDir {
                path: target_dir.to_path_buf(),
            };
            on_action(&action);
            if !self.dry_run {
                fs::create_dir_all(target_dir)?;
            }
            actions.push(action);
        }

        for transfer in planned {
            let action = Action::Transfer {
                mode: self.mode,
                transfer,
            };
            on_action(&action);
            if let Action::Transfer { transfer, .. } = &action {
                self.transfer(transfer, target_dir)?;
            }
            actions.push(action);
        }

        Ok(actions)
    }
}

// Times and permissions go through the handle that wrote the data, permissions
// last, so a read-only source still copies. A partial copy is removed.
fn copy_with_times(from: &Path, to: &Path) -> std::io::Result<()> {
    let metadata = fs::metadata(from)?;
    let mut source = fs::File::open(from)?;
    let mut dest = fs::File::create(to)?;

    let result = (|| {
        std::io::copy(&mut source, &mut dest)?;
        let mut times = fs::FileTimes::new();
        if let Ok(accessed) = metadata.accessed() {
            times = times.set_accessed(accessed);
        }
        if let Ok(modified) = metadata.modified() {
            times = times.set_modified(modified);
        }
        dest.set_times(times)?;
        dest.set_permissions(metadata.permissions())
    })();

    if result.is_err() {
        drop(dest);
        let _ = fs::remove_file(to);
    }
    result
}
