use crate::error::{Result, SheetError};
use crate::model::{CommitRecord, DateRange};
use chrono::DateTime;
use std::path::Path;
use std::process::Command;

/// `%h` short hash, `%ci` iso commit date, `%cn` committer name,
/// `%d` ref decoration, `%s` subject.
const LOG_FORMAT: &str = "%h|%ci|%cn|%d|%s";

/// Collect the commits for one repository within the range: all
/// branches, merges excluded, sorted by timestamp ascending.
pub fn collect_commits(repo_path: &Path, range: &DateRange) -> Result<Vec<CommitRecord>> {
    let repo_name = display_name(repo_path);
    let raw = run_git_log(repo_path, &repo_name, range)?;
    let mut records = parse_log(&repo_name, &raw)?;
    records.sort_by_key(|record| record.timestamp);
    Ok(records)
}

/// Final path component, shown next to every commit of this repository.
pub fn display_name(repo_path: &Path) -> String {
    repo_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| repo_path.display().to_string())
}

fn run_git_log(repo_path: &Path, repo_name: &str, range: &DateRange) -> Result<String> {
    let output = Command::new("git")
        .current_dir(repo_path)
        .arg("--no-pager")
        .args(["log", "--all", "--no-merges"])
        .arg(format!("--since={}", range.start.format("%Y-%m-%d")))
        .arg(format!("--until={}", range.end.format("%Y-%m-%d")))
        .arg(format!("--pretty=format:{}", LOG_FORMAT))
        .output()
        .map_err(|e| SheetError::Git {
            repo: repo_name.to_string(),
            message: format!("failed to run git: {}", e),
        })?;

    if !output.status.success() {
        return Err(SheetError::Git {
            repo: repo_name.to_string(),
            message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Parse the pipe-delimited log output, threading the branch label
/// through a fold: most commits carry no decoration and inherit the
/// label of the last decorated commit above them.
fn parse_log(repo_name: &str, raw: &str) -> Result<Vec<CommitRecord>> {
    let (records, _) = raw
        .lines()
        .try_fold((Vec::new(), String::new()), |(mut records, label), line| {
            let (record, label) = parse_line(repo_name, line, label)?;
            records.push(record);
            Ok::<_, SheetError>((records, label))
        })?;
    Ok(records)
}

fn parse_line(repo_name: &str, line: &str, label: String) -> Result<(CommitRecord, String)> {
    let line = line.trim().trim_matches('"');

    let fields: Vec<&str> = line.split('|').collect();
    if fields.len() != 5 {
        return Err(SheetError::Parse {
            repo: repo_name.to_string(),
            message: format!("expected 5 pipe-delimited fields, got {}: {:?}", fields.len(), line),
        });
    }
    let (hash, raw_date, author, decoration, subject) =
        (fields[0], fields[1], fields[2], fields[3], fields[4]);

    let decoration = decoration.trim();
    let label = if decoration.is_empty() {
        label
    } else {
        decoration.trim_matches(|c| c == '(' || c == ')').to_string()
    };

    let timestamp =
        DateTime::parse_from_str(raw_date, "%Y-%m-%d %H:%M:%S %z").map_err(|e| {
            SheetError::Parse {
                repo: repo_name.to_string(),
                message: format!("bad commit date {:?}: {}", raw_date, e),
            }
        })?;

    let record = CommitRecord {
        repo: repo_name.to_string(),
        hash: hash.to_string(),
        raw_date: raw_date.to_string(),
        timestamp,
        author: author.to_string(),
        branch: label.clone(),
        subject: subject.to_string(),
    };
    Ok((record, label))
}
