use crate::cli::Cli;
use crate::log;
use crate::model::CommitRecord;
use crate::range;
use crate::repos;
use anyhow::Context;
use chrono::NaiveDate;
use console::Style;
use std::collections::BTreeMap;

/// Role-based styling, built once at startup and passed to the printer.
/// `console` drops the colors on its own when stdout is not a terminal.
pub struct Palette {
    hash: Style,
    author: Style,
    repo: Style,
    branch: Style,
}

impl Palette {
    pub fn new() -> Self {
        Self {
            hash: Style::new().yellow(),
            author: Style::new().green(),
            repo: Style::new().yellow(),
            branch: Style::new().red(),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}

pub fn exec(cli: Cli) -> anyhow::Result<()> {
    let range = range::resolve(
        cli.start.as_deref(),
        cli.end.as_deref(),
        cli.month.as_deref(),
    )
    .context("Failed to resolve date range")?;

    println!("start: {}", range.start);
    println!("  end: {}", range.end);
    println!();

    println!("Reading list...");
    let repos = repos::load_repo_list(&cli.repos_file).context("Failed to read repository list")?;

    println!("Gathering data...");
    let mut buckets: BTreeMap<NaiveDate, Vec<CommitRecord>> = BTreeMap::new();
    for path in &repos {
        println!("{}", path.display());
        let records = log::collect_commits(path, &range)
            .with_context(|| format!("Failed to collect commits from {}", path.display()))?;
        bucket_by_day(records, &mut buckets);
    }
    println!();

    let palette = Palette::new();
    for (day, commits) in buckets.iter_mut() {
        print_day(*day, commits, &palette);
    }

    Ok(())
}

/// Append each record to the bucket for its calendar day. Pure
/// accumulation: no dedup, append order across repositories.
pub fn bucket_by_day(
    records: Vec<CommitRecord>,
    buckets: &mut BTreeMap<NaiveDate, Vec<CommitRecord>>,
) {
    for record in records {
        buckets.entry(record.day()).or_default().push(record);
    }
}

/// Print one day's block: separator, `YYYY-MM-DD Weekday` header, then
/// the commits newest first, one line each.
pub fn print_day(day: NaiveDate, commits: &mut [CommitRecord], palette: &Palette) {
    println!("{}", "-".repeat(72));
    println!("{}", day.format("%Y-%m-%d %A"));
    commits.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    for commit in commits.iter() {
        println!(
            "{} {} {} {} {} {}",
            commit.timestamp.format("%H:%M:%S"),
            palette.hash.apply_to(&commit.hash),
            palette.author.apply_to(format!("({})", commit.author)),
            palette.repo.apply_to(&commit.repo),
            palette.branch.apply_to(format!("[{}]", commit.branch)),
            commit.subject,
        );
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use pretty_assertions::assert_eq;

    fn record(repo: &str, iso: &str, subject: &str) -> CommitRecord {
        CommitRecord {
            repo: repo.to_string(),
            hash: "abc123".to_string(),
            raw_date: iso.to_string(),
            timestamp: DateTime::parse_from_str(iso, "%Y-%m-%d %H:%M:%S %z").unwrap(),
            author: "Jane".to_string(),
            branch: "main".to_string(),
            subject: subject.to_string(),
        }
    }

    #[test]
    fn record_lands_in_exactly_one_bucket() {
        let mut buckets = BTreeMap::new();
        bucket_by_day(
            vec![
                record("repo-a", "2017-05-10 09:00:00 +0000", "one"),
                record("repo-a", "2017-05-10 17:00:00 +0000", "two"),
                record("repo-a", "2017-05-11 08:00:00 +0000", "three"),
            ],
            &mut buckets,
        );
        assert_eq!(buckets.len(), 2);
        let key = NaiveDate::from_ymd_opt(2017, 5, 10).unwrap();
        assert_eq!(buckets[&key].len(), 2);
        for (day, bucket) in &buckets {
            for commit in bucket {
                assert_eq!(commit.day(), *day);
            }
        }
    }

    #[test]
    fn overlapping_repositories_preserve_counts() {
        let mut buckets = BTreeMap::new();
        bucket_by_day(
            vec![
                record("repo-a", "2017-05-10 09:00:00 +0000", "a1"),
                record("repo-a", "2017-05-11 09:00:00 +0000", "a2"),
            ],
            &mut buckets,
        );
        bucket_by_day(
            vec![
                record("repo-b", "2017-05-10 10:00:00 +0000", "b1"),
                record("repo-b", "2017-05-12 10:00:00 +0000", "b2"),
            ],
            &mut buckets,
        );
        let total: usize = buckets.values().map(Vec::len).sum();
        assert_eq!(total, 4);
        // dates iterate sorted
        let days: Vec<String> = buckets.keys().map(|d| d.to_string()).collect();
        assert_eq!(days, vec!["2017-05-10", "2017-05-11", "2017-05-12"]);
    }

    #[test]
    fn bucket_appends_in_processing_order() {
        let mut buckets = BTreeMap::new();
        bucket_by_day(
            vec![record("repo-a", "2017-05-10 09:00:00 +0000", "first")],
            &mut buckets,
        );
        bucket_by_day(
            vec![record("repo-b", "2017-05-10 08:00:00 +0000", "second")],
            &mut buckets,
        );
        let key = NaiveDate::from_ymd_opt(2017, 5, 10).unwrap();
        let subjects: Vec<&str> = buckets[&key].iter().map(|c| c.subject.as_str()).collect();
        assert_eq!(subjects, vec!["first", "second"]);
    }
}
