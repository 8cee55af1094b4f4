//! Version block splitting

/// Lazily yields the version blocks of a document.
///
/// A block runs from one `## ` line up to the next one. Blank lines are
/// dropped. Content before the first header comes out as a block of its
/// own, and the last block is always yielded, even when empty.
#[derive(Debug, Clone)]
pub struct VersionBlocks<'a> {
    lines: std::str::Lines<'a>,
    block: Vec<&'a str>,
    finished: bool,
}

/// Split a document into version blocks
pub fn split_blocks(document: &str) -> VersionBlocks<'_> {
    VersionBlocks {
        lines: document.lines(),
        block: Vec::new(),
        finished: false,
    }
}

impl<'a> Iterator for VersionBlocks<'a> {
    type Item = Vec<&'a str>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        for line in self.lines.by_ref() {
            if line.trim().is_empty() {
                continue;
            }

            if line.starts_with("## ") {
                let previous = std::mem::replace(&mut self.block, vec![line]);
                if !previous.is_empty() {
                    return Some(previous);
                }
            } else {
                self.block.push(line);
            }
        }

        self.finished = true;
        Some(std::mem::take(&mut self.block))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHANGELOG: &str = "
## 1.0.0 (2019-07-12)

### Fix

- issue in poetry add preventing the installation in py36
- **users**: lorem ipsum apap

### Feat

- it is possible to specify a pattern to be matched in configuration files bump.

## 0.9 (2019-07-11)

### Fix

- holis

";

    #[test]
    fn test_two_blocks() {
        let blocks: Vec<_> = split_blocks(CHANGELOG).collect();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0][0], "## 1.0.0 (2019-07-12)");
        assert_eq!(blocks[0].len(), 6);
        assert_eq!(blocks[1], vec!["## 0.9 (2019-07-11)", "### Fix", "- holis"]);
    }

    #[test]
    fn test_leading_content_becomes_its_own_block() {
        let doc = "# Changelog\n\nAll notable changes.\n\n## 0.1.0\n\n### Fix\n\n- a\n";
        let blocks: Vec<_> = split_blocks(doc).collect();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0], vec!["# Changelog", "All notable changes."]);
        assert_eq!(blocks[1][0], "## 0.1.0");
    }

    #[test]
    fn test_empty_document_yields_one_empty_block() {
        let blocks: Vec<_> = split_blocks("").collect();
        assert_eq!(blocks, vec![Vec::<&str>::new()]);

        let blocks: Vec<_> = split_blocks("\n\n   \n").collect();
        assert_eq!(blocks.len(), 1);
        assert!(blocks[0].is_empty());
    }

    #[test]
    fn test_category_headers_do_not_split() {
        let blocks: Vec<_> = split_blocks("## 1.0.0\n### Fix\n- a\n### Feat\n- b\n").collect();
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].len(), 5);
    }

    #[test]
    fn test_crlf_lines() {
        let blocks: Vec<_> = split_blocks("## 1.0.0\r\n\r\n### Fix\r\n- a\r\n").collect();
        assert_eq!(blocks, vec![vec!["## 1.0.0", "### Fix", "- a"]]);
    }

    #[test]
    fn test_restartable() {
        let first: Vec<_> = split_blocks(CHANGELOG).collect();
        let second: Vec<_> = split_blocks(CHANGELOG).collect();
        assert_eq!(first, second);

        let iter = split_blocks(CHANGELOG);
        assert_eq!(iter.clone().count(), iter.count());
    }
}
