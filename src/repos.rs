use crate::error::{Result, SheetError};
use std::fs;
use std::path::{Path, PathBuf};

/// Load the repository list: one absolute path per line, `#` comments
/// and blank lines skipped, remaining lines in file order.
pub fn load_repo_list(path: &Path) -> Result<Vec<PathBuf>> {
    let text = fs::read_to_string(path).map_err(|source| SheetError::RepoList {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(text
        .lines()
        .filter(|line| !line.starts_with('#'))
        .filter(|line| !line.trim().is_empty())
        .map(PathBuf::from)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn list_from(content: &str) -> Vec<PathBuf> {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        load_repo_list(file.path()).unwrap()
    }

    #[test]
    fn comments_skipped_order_preserved() {
        let repos = list_from("/repo-a\n# /repo-b\n/repo-c\n");
        assert_eq!(repos, vec![PathBuf::from("/repo-a"), PathBuf::from("/repo-c")]);
    }

    #[test]
    fn blank_lines_skipped() {
        let repos = list_from("/repo-a\n\n   \n/repo-b\n");
        assert_eq!(repos, vec![PathBuf::from("/repo-a"), PathBuf::from("/repo-b")]);
    }

    #[test]
    fn hash_only_comments_at_line_start() {
        // a path containing '#' later in the line is not a comment
        let repos = list_from("/srv/repos/#42\n");
        assert_eq!(repos, vec![PathBuf::from("/srv/repos/#42")]);
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = load_repo_list(Path::new("/no/such/list")).unwrap_err();
        assert!(err.to_string().contains("/no/such/list"));
    }
}
