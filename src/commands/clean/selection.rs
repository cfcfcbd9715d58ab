//! Parsing and resolving the user's worktree selection.

use super::types::AnalyzedWorktree;

/// What the user typed at the `Your choice:` prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Cancel,
    All,
    Clean,
    /// Comma-separated ordinals; tokens that are not numbers are already gone.
    Indices(Vec<usize>),
}

/// A selection checked against the analyzed worktrees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Cancelled,
    NoCleanWorktrees,
    NoValidSelection,
    /// Ordinals to process, in order; duplicates are kept.
    Selected(Vec<usize>),
}

impl Selection {
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "cancel" => Selection::Cancel,
            "all" => Selection::All,
            "clean" => Selection::Clean,
            other => Selection::Indices(
                other
                    .split(',')
                    .map(str::trim)
                    .filter_map(|token| match token.parse::<usize>() {
                        Ok(idx) => Some(idx),
                        Err(_) => {
                            log::debug!("ignoring selection token {:?}", token);
                            None
                        }
                    })
                    .collect(),
            ),
        }
    }

    pub fn resolve(&self, analyzed: &[AnalyzedWorktree]) -> Resolution {
        let selected: Vec<usize> = match self {
            Selection::Cancel => return Resolution::Cancelled,
            Selection::All => analyzed.iter().map(|a| a.index).collect(),
            Selection::Clean => {
                let clean: Vec<usize> = analyzed
                    .iter()
                    .filter(|a| a.status.is_clean())
                    .map(|a| a.index)
                    .collect();
                if clean.is_empty() {
                    return Resolution::NoCleanWorktrees;
                }
                clean
            }
            Selection::Indices(indices) => indices
                .iter()
                .copied()
                .filter(|&idx| {
                    let in_range = (1..=analyzed.len()).contains(&idx);
                    if !in_range {
                        log::debug!("ignoring out-of-range selection {}", idx);
                    }
                    in_range
                })
                .collect(),
        };

        if selected.is_empty() {
            Resolution::NoValidSelection
        } else {
            Resolution::Selected(selected)
        }
    }
}
