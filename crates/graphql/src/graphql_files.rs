use anyhow::Context;
use libgraphql_language::Source;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::task::JoinSet;
use walkdir::WalkDir;

/// Where to look for GraphQL files.
#[derive(Clone, Debug, clap::Args)]
pub(crate) struct FileDiscoveryArgs {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
            "gql".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Paths to one or more GraphQL files or directories containing \
             GraphQL files.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

impl FileDiscoveryArgs {
    /// Finds all GraphQL files recursively located at or under each path.
    ///
    /// If the user specifies a single file path that matches none of the
    /// extensions, it is still returned: naming one file is taken as an
    /// explicit request to treat it as GraphQL.
    pub(crate) fn discover(&self) -> anyhow::Result<Vec<PathBuf>> {
        let graphql_file_exts: HashSet<&str> =
            self.graphql_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.'))
                .collect();

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true).sort_by_file_name() {
                let entry = entry.with_context(|| {
                    format!("Failed to scan files at/under {}", path.display())
                })?;
                let path = entry.path();
                if !entry.file_type().is_file() {
                    log::trace!("Skipping non-file: {path:#?}.");
                    continue;
                }
                let matches_ext = path.extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| graphql_file_exts.contains(ext));
                if matches_ext {
                    log::trace!("Found GraphQL file at {path:#?}.");
                    file_paths.push(path.to_path_buf());
                }
            }
        }

        if file_paths.is_empty()
            && self.file_or_dir_paths.len() == 1
            && let Some(first_arg_path) = self.file_or_dir_paths.first()
            && first_arg_path.is_file() {
            log::warn!(
                "Proceeding with {first_arg_path:#?} even though it doesn't \
                match any of the --graphql-file-exts ({}).",
                self.graphql_file_exts.iter()
                    .map(|ext| format!("`{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            file_paths.push(first_arg_path.clone());
        }

        log::debug!("Found {} GraphQL files.", file_paths.len());
        Ok(file_paths)
    }
}

/// Reads `path` into a [`Source`] named after the path.
pub(crate) async fn read_source(path: &Path) -> anyhow::Result<Source> {
    let body = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(Source::new(body).with_name(path.display().to_string()))
}

/// Reads every file in `paths` and runs `job` on each on tokio's blocking
/// pool. Results come back in the order of `paths`.
pub(crate) async fn run_per_file<T, F>(
    paths: Vec<PathBuf>,
    job: F,
) -> anyhow::Result<Vec<(PathBuf, anyhow::Result<T>)>>
where
    T: Send + 'static,
    F: Fn(Source) -> anyhow::Result<T> + Send + Sync + 'static,
{
    let job = Arc::new(job);
    let mut tasks = JoinSet::new();
    let mut results: Vec<Option<(PathBuf, anyhow::Result<T>)>> =
        paths.iter().map(|_| None).collect();

    for (index, path) in paths.into_iter().enumerate() {
        match read_source(&path).await {
            Ok(source) => {
                let job = Arc::clone(&job);
                tasks.spawn_blocking(move || (index, path, job(source)));
            },
            Err(error) => results[index] = Some((path, Err(error))),
        }
    }

    while let Some(finished) = tasks.join_next().await {
        let (index, path, result) =
            finished.context("A per-file task panicked or was cancelled")?;
        results[index] = Some((path, result));
    }

    Ok(results.into_iter().flatten().collect())
}
