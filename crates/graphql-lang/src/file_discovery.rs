use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, Default)]
pub(crate) struct DiscoveredFiles {
    /// Canonicalized paths of every matching file, in walk order.
    pub files: Vec<PathBuf>,
    /// Files that were found but did not match.
    pub num_skipped: usize,
}

/// Recursively finds the files at or under each of `roots` that `matches`
/// accepts.
///
/// If exactly one root was given and it is a file, that file is included
/// even when `matches` rejects it: naming a single file is taken as asking
/// for it explicitly.
pub(crate) fn find_files(
    roots: &[PathBuf],
    matches: impl Fn(&Path) -> bool,
) -> anyhow::Result<DiscoveredFiles> {
    log::debug!("Scanning {} input paths...", roots.len());
    let mut discovered = DiscoveredFiles::default();
    for root in roots {
        for entry in WalkDir::new(root.as_path()).follow_links(true).sort_by_file_name() {
            let entry = entry?;
            let path = entry.path();
            if !entry.file_type().is_file() {
                log::trace!("Skipping non-file: {path:#?}.");
                continue;
            }
            if matches(path) {
                log::trace!("Found file at {path:#?}.");
                discovered.files.push(std::fs::canonicalize(path)?);
            } else {
                discovered.num_skipped += 1;
            }
        }
    }

    if discovered.files.is_empty()
        && let [only_root] = roots
        && only_root.is_file()
    {
        let path = std::fs::canonicalize(only_root)?;
        log::warn!(
            "Proceeding with {path:#?} even though its extension doesn't \
            match any of the configured GraphQL file extensions.",
        );
        discovered.num_skipped = discovered.num_skipped.saturating_sub(1);
        discovered.files.push(path);
    }

    log::debug!("Found {} matching files.", discovered.files.len());
    Ok(discovered)
}
