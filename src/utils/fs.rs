use std::path::{Path, PathBuf};

pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_dash = false;

    for ch in input.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}

pub fn next_free_path(dir: &Path, stem: &str, extension: &str) -> PathBuf {
    let first = dir.join(format!("{stem}.{extension}"));
    if !first.exists() {
        return first;
    }

    (2..)
        .map(|n| dir.join(format!("{stem}-{n}.{extension}")))
        .find(|candidate| !candidate.exists())
        .unwrap_or(first)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugifies_names() {
        assert_eq!(slugify("WP Engine"), "wp-engine");
        assert_eq!(slugify("  Acme, Inc.  "), "acme-inc");
        assert_eq!(slugify("Über--Fast!!"), "ber-fast");
        assert_eq!(slugify("???"), "");
    }

    #[test]
    fn next_free_path_skips_existing_files() {
        let dir = std::env::temp_dir().join(format!("viability-fs-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();

        assert_eq!(next_free_path(&dir, "report", "txt"), dir.join("report.txt"));
        std::fs::write(dir.join("report.txt"), "x").unwrap();
        assert_eq!(next_free_path(&dir, "report", "txt"), dir.join("report-2.txt"));
        std::fs::write(dir.join("report-2.txt"), "x").unwrap();
        assert_eq!(next_free_path(&dir, "report", "txt"), dir.join("report-3.txt"));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
